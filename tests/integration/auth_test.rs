//! Student login, logout and session gating.

use axum::http::{StatusCode, header};

use crate::helpers::TestApp;

#[tokio::test]
async fn test_login_page_renders_form() {
    let app = TestApp::new();
    let response = app.get("/", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let html = response.text();
    assert!(html.contains("name=\"sid\""));
    assert!(html.contains("name=\"pwd\""));
}

#[tokio::test]
async fn test_login_success_sets_cookie_and_redirects() {
    let app = TestApp::new();
    app.seed_student("s1", "pw").await;

    let response = app.post_form("/", "sid=s1&pwd=pw", None).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/rooms"));

    let set_cookie = response.header(header::SET_COOKIE).unwrap_or_default();
    assert!(set_cookie.starts_with("hostel_session="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("Path=/"));
}

#[tokio::test]
async fn test_login_wrong_password_rejected() {
    let app = TestApp::new();
    app.seed_student("s1", "pw").await;

    let response = app.post_form("/", "sid=s1&pwd=nope", None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.text(), "Invalid Login");
    assert!(response.session_cookie("hostel_session").is_none());
}

#[tokio::test]
async fn test_login_unknown_student_rejected() {
    let app = TestApp::new();

    let response = app.post_form("/", "sid=ghost&pwd=pw", None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.text(), "Invalid Login");
}

#[tokio::test]
async fn test_login_without_form_body_rejected() {
    let app = TestApp::new();
    app.seed_student("s1", "pw").await;

    let response = app.post_empty("/", None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.text(), "Invalid Login");
}

#[tokio::test]
async fn test_protected_pages_redirect_without_session() {
    let app = TestApp::new();

    for path in ["/rooms", "/payment", "/student/dashboard"] {
        let response = app.get(path, None).await;
        assert_eq!(response.status, StatusCode::SEE_OTHER, "{path}");
        assert_eq!(response.location(), Some("/"), "{path}");
    }
}

#[tokio::test]
async fn test_tampered_cookie_is_ignored() {
    let app = TestApp::new();
    app.seed_student("s1", "pw").await;
    let cookie = app.login_student("s1", "pw").await;

    let tampered = format!("{cookie}x");
    let response = app.get("/rooms", Some(&tampered)).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/"));
}

#[tokio::test]
async fn test_logout_clears_session() {
    let app = TestApp::new();
    app.seed_student("s1", "pw").await;
    let cookie = app.login_student("s1", "pw").await;

    let response = app.get("/logout", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/"));
    assert!(response.clears_cookie("hostel_session"));
}

#[tokio::test]
async fn test_json_endpoints_require_session() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/mark_paid",
            serde_json::json!({ "room": "101", "txHash": "0xabc" }),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    let body = response.json();
    assert_eq!(body["ok"], false);
    assert_eq!(body["error"], "Not logged in");
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new();
    let response = app.get("/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["status"], "ok");
    assert_eq!(response.json()["message"], "App is running");
}

#[tokio::test]
async fn test_unknown_path_returns_json_404() {
    let app = TestApp::new();
    let response = app.get("/nowhere", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["error"], "Not found");
    assert_eq!(response.json()["path"], "/nowhere");
}
