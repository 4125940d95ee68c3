use actix_web::error::InternalError;
use actix_web::{web, HttpResponse, ResponseError};
use serde_json::json;
use tracing::error;

use crate::error::TRANSACTION_NOT_FOUND;

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        error!(req_path = req.path(), %err);
        let error_body = json!({
            "error": "Unable to parse JSON payload",
            "detail": format!("{}", err),
        });
        let status = err.status_code();
        InternalError::from_response(err, HttpResponse::build(status).json(error_body)).into()
    })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, req| {
        error!(req_path = req.path(), %err);
        let error_body = json!({
            "error": "Invalid query parameters",
            "detail": format!("{}", err),
        });
        InternalError::from_response(err, HttpResponse::BadRequest().json(error_body)).into()
    })
}

/// Ids are integers, so a path segment that does not parse can never name a transaction.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        error!(req_path = req.path(), %err);
        let error_body = json!({ "error": TRANSACTION_NOT_FOUND });
        InternalError::from_response(err, HttpResponse::NotFound().json(error_body)).into()
    })
}
