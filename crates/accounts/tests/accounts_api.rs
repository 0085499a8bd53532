//! Integration tests for the accounts HTTP API.
//!
//! Each test builds its own seeded in-memory store from the bundled scripts
//! and drives the router directly, without binding a socket.

use std::str::FromStr;

use accounts::create_router;
use accounts_db::{Seeder, config::StoreConfig};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use serde_json::Value;
use tower::ServiceExt;

async fn test_app() -> Router {
    let store = Seeder::new(StoreConfig::default().with_rng_seed(2024))
        .initialize()
        .await
        .expect("Failed to seed store");
    create_router(store)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn assert_seeded_balance(account: &Value) {
    let raw = account["balance"].as_str().expect("balance is a string");
    let balance = Decimal::from_str(raw).unwrap();
    assert!(balance >= Decimal::ZERO);
    assert!(balance <= Decimal::new(10_000_000, 2));
    assert_eq!(balance.scale(), 2, "balance {raw} should carry two digits");
}

#[tokio::test]
async fn test_health_check() {
    let (status, _) = get(test_app().await, "/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_stats_reports_account_count() {
    let (status, body) = get(test_app().await, "/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["account_count"], 12);
}

#[tokio::test]
async fn test_get_account_by_number() {
    let (status, body) = get(test_app().await, "/accounts/123456789").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["number"], "123456789");
    assert_eq!(body["owner"], "Keri Lee");
    assert_seeded_balance(&body);
}

#[tokio::test]
async fn test_unknown_account_is_not_found() {
    let (status, body) = get(test_app().await, "/accounts/000000000").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No such account: 000000000");
}

#[tokio::test]
async fn test_accounts_by_owner_partial_name() {
    let (status, body) = get(test_app().await, "/accounts/owner/lee").await;
    assert_eq!(status, StatusCode::OK);

    let owners: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["owner"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(owners, vec!["Keri Lee", "Keith Leeson"]);
}

#[tokio::test]
async fn test_accounts_by_owner_decodes_path() {
    let (status, body) = get(test_app().await, "/accounts/owner/Hamish%20Hicks").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_accounts_by_owner_without_match() {
    let (status, _) = get(test_app().await, "/accounts/owner/zzz").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_accounts_paginates() {
    let (status, body) = get(test_app().await, "/accounts?limit=5&offset=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_count"], 12);
    assert_eq!(body["limit"], 5);
    assert_eq!(body["offset"], 10);

    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    for account in items {
        assert_seeded_balance(account);
    }
}

#[tokio::test]
async fn test_list_accounts_rejects_bad_limit() {
    let (status, _) = get(test_app().await, "/accounts?limit=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let response = test_app()
        .await
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "trace-me")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()["x-request-id"], "trace-me");
    assert_eq!(response.headers()["x-content-type-options"], "nosniff");
}

#[tokio::test]
async fn test_openapi_document_lists_account_routes() {
    let (status, body) = get(test_app().await, "/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/accounts/{number}"].is_object());
    assert!(body["paths"]["/accounts/owner/{name}"].is_object());
}
