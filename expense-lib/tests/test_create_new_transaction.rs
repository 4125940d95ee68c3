extern crate rstest;
extern crate serde_json;

use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::test;
use actix_web::test::TestRequest;
use actix_web::App;
use expense_repo::transaction_repo::{NewTransaction, Transaction};
use rstest::rstest;
use serde_json::json;
use tracing::instrument;

use utils::repos;
use utils::tracing_setup;
use utils::Repos;

#[macro_use]
mod utils;

#[instrument(skip(repos))]
#[rstest]
#[actix_rt::test]
async fn test_create_api_response(_tracing_setup: &(), repos: Repos) {
    let app = build_app!(repos);
    let service = test::init_service(app).await;

    let new_transaction =
        NewTransaction::new("expense", "food", 12.5, "2024-01-01", Some("lunch"));
    let request = TestRequest::post()
        .uri("/transactions")
        .set_json(&new_transaction)
        .to_request();
    let response = test::call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body, json!({ "id": 1 }));
}

#[instrument]
#[rstest]
#[actix_rt::test]
async fn test_create_then_get_against_sqlite(_tracing_setup: &()) {
    let app = build_app!(utils::sqlite_repos().await);
    let service = test::init_service(app).await;

    let new_transaction = json!({
        "type": "expense",
        "category": "food",
        "amount": 12.5,
        "date": "2024-01-01",
        "description": "lunch",
    });
    let transaction_id = create_transaction!(&service, new_transaction);
    assert_eq!(transaction_id, 1);

    let request = TestRequest::get().uri("/transactions/1").to_request();
    let response = test::call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({
            "id": 1,
            "type": "expense",
            "category": "food",
            "amount": 12.5,
            "date": "2024-01-01",
            "description": "lunch",
        })
    );
}

#[instrument(skip(repos))]
#[rstest]
#[actix_rt::test]
async fn test_create_without_description(_tracing_setup: &(), repos: Repos) {
    let app = build_app!(repos);
    let service = test::init_service(app).await;

    let new_transaction = json!({
        "type": "income",
        "category": "salary",
        "amount": 2000,
        "date": "2024-01-31",
    });
    let transaction_id = create_transaction!(&service, new_transaction);

    let request = TestRequest::get()
        .uri(format!("/transactions/{}", transaction_id).as_str())
        .to_request();
    let response = test::call_service(&service, request).await;
    let transaction: Transaction = test::read_body_json(response).await;
    assert_eq!(transaction.amount, 2000.0);
    assert_eq!(transaction.description, None);
}

#[instrument]
#[rstest]
#[actix_rt::test]
async fn test_create_missing_required_field(_tracing_setup: &()) {
    let app = build_app!(utils::sqlite_repos().await);
    let service = test::init_service(app).await;

    let request = TestRequest::post()
        .uri("/transactions")
        .set_json(json!({
            "category": "food",
            "amount": 3.0,
            "date": "2024-01-01",
        }))
        .to_request();
    let response = test::call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = test::read_body_json(response).await;
    let error = body["error"].as_str().unwrap();
    assert!(
        error.contains("NOT NULL constraint failed: transactions.type"),
        "unexpected error: {}",
        error
    );
}

#[instrument(skip(repos))]
#[rstest]
#[actix_rt::test]
async fn test_create_malformed_body(_tracing_setup: &(), repos: Repos) {
    let app = build_app!(repos);
    let service = test::init_service(app).await;

    let request = TestRequest::post()
        .uri("/transactions")
        .insert_header(ContentType::json())
        .set_payload(r#"{"type": "expense", "amount": "#)
        .to_request();
    let response = test::call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["error"], "Unable to parse JSON payload");
}

#[instrument(skip(repos))]
#[rstest]
#[actix_rt::test]
async fn test_create_without_json_content_type(_tracing_setup: &(), repos: Repos) {
    let app = build_app!(repos);
    let service = test::init_service(app).await;

    let request = TestRequest::post()
        .uri("/transactions")
        .set_payload("type=expense&category=food")
        .to_request();
    let response = test::call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["error"], "Unable to parse JSON payload");
    assert_eq!(body["detail"], "Content type error");
}

#[instrument(skip(repos))]
#[rstest]
#[actix_rt::test]
async fn test_create_with_string_amount(_tracing_setup: &(), repos: Repos) {
    let app = build_app!(repos);
    let service = test::init_service(app).await;

    let request = TestRequest::post()
        .uri("/transactions")
        .set_json(json!({
            "type": "expense",
            "category": "food",
            "amount": "12.5",
            "date": "2024-01-01",
        }))
        .to_request();
    let response = test::call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["error"], "Unable to parse JSON payload");

    let request = TestRequest::get().uri("/transactions").to_request();
    let transactions: Vec<serde_json::Value> =
        test::read_body_json(test::call_service(&service, request).await).await;
    assert!(transactions.is_empty());
}
