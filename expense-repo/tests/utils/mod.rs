use expense_repo::transaction_repo::TransactionRepo;
use expense_repo::HealthCheck;
use std::sync::Arc;

#[derive(Debug)]
pub enum RepoType {
    SQLx,
    Mem,
}

pub async fn build_repos(repo_type: RepoType) -> (Arc<dyn TransactionRepo>, Arc<dyn HealthCheck>) {
    match repo_type {
        RepoType::SQLx => expense_repo::sqlx_repo::create_repos("sqlite::memory:", 1)
            .await
            .unwrap(),
        RepoType::Mem => expense_repo::mem_repo::create_repos(),
    }
}
