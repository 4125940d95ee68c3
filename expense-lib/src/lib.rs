use std::sync::Arc;

use actix_cors::Cors;
use actix_web::web::{Data, ServiceConfig};
use expense_repo::transaction_repo::TransactionRepo;
use expense_repo::HealthCheck;

pub mod config;
mod error;
mod extractors;
mod health;
pub mod tracing;
pub mod transaction;

/// Registers the shared state, the extractor error handlers and every route.
pub fn app_config_func(
    transaction_repo: Arc<dyn TransactionRepo>,
    health_check: Arc<dyn HealthCheck>,
) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg| {
        cfg.app_data(Data::new(transaction_repo))
            .app_data(Data::new(health_check))
            .app_data(extractors::json_config())
            .app_data(extractors::query_config())
            .app_data(extractors::path_config())
            .service(transaction::transaction_service())
            .service(transaction::summary_service())
            .service(health::health_service());
    }
}

/// Every origin, method and header is allowed.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
}
