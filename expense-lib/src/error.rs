use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use expense_repo::transaction_repo::TransactionRepoError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

pub const TRANSACTION_NOT_FOUND: &str = "Transaction not found";

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error(transparent)]
    TransactionError(#[from] TransactionRepoError),
}

impl ResponseError for HandlerError {
    fn status_code(&self) -> StatusCode {
        match self {
            HandlerError::TransactionError(TransactionRepoError::TransactionNotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            HandlerError::TransactionError(TransactionRepoError::Other(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            HandlerError::TransactionError(TransactionRepoError::TransactionNotFound(_)) => {
                TRANSACTION_NOT_FOUND.to_string()
            }
            HandlerError::TransactionError(TransactionRepoError::Other(e)) => {
                error!(error = ?e, "Storage failure");
                // The engine's own message, e.g. a NOT NULL constraint violation
                e.root_cause().to_string()
            }
        };
        HttpResponse::build(self.status_code()).json(json!({ "error": message }))
    }
}
