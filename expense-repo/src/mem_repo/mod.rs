use crate::transaction_repo::TransactionRepo;
use crate::HealthCheck;
use std::sync::Arc;

mod transaction_repo;

pub fn create_repos() -> (Arc<dyn TransactionRepo>, Arc<dyn HealthCheck>) {
    let repo = Arc::new(transaction_repo::MemTransactionRepo::new());
    let transaction_repo: Arc<dyn TransactionRepo> = repo.clone();
    let health_check: Arc<dyn HealthCheck> = repo;

    (transaction_repo, health_check)
}
