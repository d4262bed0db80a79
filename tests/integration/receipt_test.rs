//! Receipt PDF download.

use axum::http::{StatusCode, header};
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_receipt_download_returns_pdf() {
    let app = TestApp::new();
    app.seed_student("s1", "pw").await;
    let cookie = app.login_student("s1", "pw").await;

    let response = app
        .post_json(
            "/download_receipt",
            json!({ "room": "101", "txHash": "0xabc", "dateUtc": "2024-01-01 10:00:00" }),
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header(header::CONTENT_TYPE), Some("application/pdf"));
    assert_eq!(
        response.header(header::CONTENT_DISPOSITION),
        Some("attachment; filename=\"receipt_s1.pdf\"")
    );
    assert!(response.body.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_receipt_without_date_rejected() {
    let app = TestApp::new();
    app.seed_student("s1", "pw").await;
    let cookie = app.login_student("s1", "pw").await;

    let response = app
        .post_json(
            "/download_receipt",
            json!({ "room": "101", "txHash": "0xabc" }),
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "Missing receipt data");
}

#[tokio::test]
async fn test_receipt_missing_fields_rejected() {
    let app = TestApp::new();
    app.seed_student("s1", "pw").await;
    let cookie = app.login_student("s1", "pw").await;

    let response = app
        .post_json("/download_receipt", json!({ "room": "101" }), Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "Missing receipt data");
}

#[tokio::test]
async fn test_receipt_requires_session() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/download_receipt",
            json!({ "room": "101", "txHash": "0xabc" }),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
