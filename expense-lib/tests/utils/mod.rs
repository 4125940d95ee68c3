use std::sync::Arc;

use expense_repo::transaction_repo::TransactionRepo;
use expense_repo::HealthCheck;
use rstest::*;
use tracing::info;
use tracing::Level;

pub type Repos = (Arc<dyn TransactionRepo>, Arc<dyn HealthCheck>);

macro_rules! build_app {
    ($repos:expr) => {{
        let (transaction_repo, health_check) = $repos;
        let app = App::new()
            .wrap(expense_lib::tracing::create_middleware())
            .wrap(expense_lib::cors())
            .configure(expense_lib::app_config_func(transaction_repo, health_check));
        tracing::info!("Built app");
        app
    }};
}

/// Posts the transaction and returns the id from the `201 {"id": ..}` response.
#[allow(unused_macros)]
macro_rules! create_transaction {
    (&$service:ident, $new_transaction:expr) => {{
        let request = TestRequest::post()
            .uri("/transactions")
            .set_json(&$new_transaction)
            .to_request();
        let response = test::call_service(&$service, request).await;
        assert_eq!(
            response.status(),
            StatusCode::CREATED,
            "Got {} response when creating transaction",
            response.status()
        );
        let body: serde_json::Value = test::read_body_json(response).await;
        body["id"].as_i64().expect("id in create response")
    }};
}

#[fixture]
#[once]
pub fn tracing_setup() -> () {
    tracing_subscriber::fmt()
        .pretty()
        .with_max_level(Level::DEBUG)
        .init();
    info!("tracing initialized");
}

#[fixture]
pub fn repos() -> Repos {
    expense_repo::mem_repo::create_repos()
}

/// A fresh in-memory SQLite database, for checks that depend on the real engine.
#[allow(dead_code)]
pub async fn sqlite_repos() -> Repos {
    expense_repo::sqlx_repo::create_repos("sqlite::memory:", 1)
        .await
        .unwrap()
}
