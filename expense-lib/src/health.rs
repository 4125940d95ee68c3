use std::sync::Arc;

use actix_web::{get, web, HttpResponse, Responder, Scope};
use expense_repo::HealthCheck;
use serde_json::json;
use tracing::warn;

pub fn health_service() -> Scope {
    web::scope("/health").service(health)
}

#[get("")]
async fn health(health_check: web::Data<Arc<dyn HealthCheck>>) -> impl Responder {
    if health_check.check().await {
        HttpResponse::Ok().json(json!({ "status": "ok" }))
    } else {
        warn!("Storage health check failed");
        HttpResponse::ServiceUnavailable().json(json!({ "status": "unavailable" }))
    }
}
