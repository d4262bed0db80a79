//! Administrator login, dashboard and revocation.

use axum::http::StatusCode;
use serde_json::json;

use hostel_entity::RoomStatus;

use crate::helpers::TestApp;

/// Admin app with `s1` holding room 101.
async fn setup_allotted() -> (TestApp, String) {
    let app = TestApp::with_admin();
    app.seed_student("s1", "pw").await;
    app.seed_rooms(&["101", "102"]).await;

    let student = app.login_student("s1", "pw").await;
    let response = app
        .post_json("/mark_paid", json!({ "room": "101", "txHash": "0xabc" }), Some(&student))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let admin = app.login_admin().await;
    (app, admin)
}

#[tokio::test]
async fn test_admin_login_success_redirects() {
    let app = TestApp::with_admin();

    let response = app
        .post_form("/admin", "username=admin&password=admin123", None)
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/admin/dashboard"));
    assert!(response.session_cookie("hostel_session").is_some());
}

#[tokio::test]
async fn test_admin_login_failure_rerenders_form() {
    let app = TestApp::with_admin();

    let response = app
        .post_form("/admin", "username=admin&password=wrong", None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.text().contains("Invalid admin login"));
    assert!(response.session_cookie("hostel_session").is_none());
}

#[tokio::test]
async fn test_admin_login_without_form_body_rerenders_form() {
    let app = TestApp::with_admin();

    let response = app.post_empty("/admin", None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.text().contains("Invalid admin login"));
}

#[tokio::test]
async fn test_admin_login_disabled_without_hash() {
    let app = TestApp::new();

    let response = app
        .post_form("/admin", "username=admin&password=admin123", None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_dashboard_requires_admin() {
    let app = TestApp::with_admin();
    app.seed_student("s1", "pw").await;
    let student = app.login_student("s1", "pw").await;

    let anonymous = app.get("/admin/dashboard", None).await;
    assert_eq!(anonymous.location(), Some("/admin"));

    let as_student = app.get("/admin/dashboard", Some(&student)).await;
    assert_eq!(as_student.status, StatusCode::SEE_OTHER);
    assert_eq!(as_student.location(), Some("/admin"));
}

#[tokio::test]
async fn test_dashboard_lists_allotments_and_ledger() {
    let (app, admin) = setup_allotted().await;

    let response = app.get("/admin/dashboard", Some(&admin)).await;

    assert_eq!(response.status, StatusCode::OK);
    let html = response.text();
    assert!(html.contains("101"));
    assert!(html.contains("s1"));
    assert!(html.contains("0xabc"));
}

#[tokio::test]
async fn test_revoke_frees_room_and_keeps_ledger() {
    let (app, admin) = setup_allotted().await;

    let response = app
        .post_json("/admin/revoke_room", json!({ "room": "101" }), Some(&admin))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["ok"], true);

    let room = app.room("101").await;
    assert_eq!(room.status, RoomStatus::Available);
    assert!(room.assigned_sid.is_none());
    assert_eq!(app.ledger().await.len(), 1);
}

#[tokio::test]
async fn test_revoked_room_can_be_allotted_again() {
    let (app, admin) = setup_allotted().await;
    app.seed_student("s2", "pw2").await;

    app.post_json("/admin/revoke_room", json!({ "room": "101" }), Some(&admin))
        .await;

    let other = app.login_student("s2", "pw2").await;
    let other = app.select_room(&other, "101").await;
    let response = app
        .post_json("/mark_paid", json!({ "room": "101", "txHash": "0xdef" }), Some(&other))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(app.room("101").await.assigned_sid.as_deref(), Some("s2"));
    assert_eq!(app.ledger().await.len(), 2);
}

#[tokio::test]
async fn test_revoke_unknown_room_not_found() {
    let (app, admin) = setup_allotted().await;

    let response = app
        .post_json("/admin/revoke_room", json!({ "room": "999" }), Some(&admin))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["error"], "Room not found");
}

#[tokio::test]
async fn test_revoke_requires_room() {
    let (app, admin) = setup_allotted().await;

    let response = app
        .post_json("/admin/revoke_room", json!({}), Some(&admin))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "Room required");
}

#[tokio::test]
async fn test_student_cannot_revoke() {
    let (app, _admin) = setup_allotted().await;
    let student = app.login_student("s1", "pw").await;

    let response = app
        .post_json("/admin/revoke_room", json!({ "room": "101" }), Some(&student))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json()["error"], "Not authorized");
    assert_eq!(app.room("101").await.status, RoomStatus::Occupied);
}

#[tokio::test]
async fn test_admin_logout_redirects_to_login() {
    let (app, admin) = setup_allotted().await;

    let response = app.get("/admin/logout", Some(&admin)).await;

    assert_eq!(response.location(), Some("/admin"));
    assert!(response.clears_cookie("hostel_session"));
}
