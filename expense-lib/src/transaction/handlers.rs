use std::sync::Arc;

use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use expense_repo::transaction_repo::{NewTransaction, TransactionRepo};
use serde_json::json;
use tracing::info;
use tracing_actix_web::RootSpan;

use super::PageQuery;
use crate::error::HandlerError;

#[get("/{transaction_id}")]
pub async fn get_transaction(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
    transaction_id: web::Path<i64>,
    root_span: RootSpan,
) -> Result<impl Responder, HandlerError> {
    let transaction_id = transaction_id.into_inner();
    root_span.record("transaction_id", transaction_id);

    let transaction = transaction_repo.get_transaction(transaction_id).await?;
    Ok(HttpResponse::Ok().json(transaction))
}

#[get("")]
pub async fn get_all_transactions(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
    query: web::Query<PageQuery>,
) -> Result<impl Responder, HandlerError> {
    let transactions = transaction_repo
        .get_all_transactions(Some(query.page_options()))
        .await?;
    Ok(HttpResponse::Ok().json(transactions))
}

#[post("")]
pub async fn create_new_transaction(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
    new_transaction: web::Json<NewTransaction>,
    root_span: RootSpan,
) -> Result<impl Responder, HandlerError> {
    let transaction = transaction_repo
        .create_new_transaction(new_transaction.into_inner())
        .await?;
    root_span.record("transaction_id", transaction.id);
    info!(transaction_id = transaction.id, "Created transaction");

    Ok(HttpResponse::Created().json(json!({ "id": transaction.id })))
}

#[put("/{transaction_id}")]
pub async fn update_transaction(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
    transaction_id: web::Path<i64>,
    updated_transaction: web::Json<NewTransaction>,
    root_span: RootSpan,
) -> Result<impl Responder, HandlerError> {
    let transaction_id = transaction_id.into_inner();
    root_span.record("transaction_id", transaction_id);

    transaction_repo
        .update_transaction(transaction_id, updated_transaction.into_inner())
        .await?;
    info!(transaction_id, "Updated transaction");

    Ok(HttpResponse::Ok().json(json!({ "message": "Transaction updated successfully" })))
}

#[delete("/{transaction_id}")]
pub async fn delete_transaction(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
    transaction_id: web::Path<i64>,
    root_span: RootSpan,
) -> Result<impl Responder, HandlerError> {
    let transaction_id = transaction_id.into_inner();
    root_span.record("transaction_id", transaction_id);

    transaction_repo.delete_transaction(transaction_id).await?;
    info!(transaction_id, "Deleted transaction");

    Ok(HttpResponse::Ok().json(json!({ "message": "Transaction deleted successfully" })))
}

#[get("")]
pub async fn get_summary(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
) -> Result<impl Responder, HandlerError> {
    let totals = transaction_repo.get_type_totals().await?;
    Ok(HttpResponse::Ok().json(totals))
}
