//! The development profile boots a usable in-memory store.

use axum::http::StatusCode;

use hostel_core::config::{AppConfig, DatabaseProvider};
use hostel_database::{MemoryStore, Repositories};
use hostel_service::seed_on_startup;

use crate::helpers::TestApp;

async fn development_app() -> TestApp {
    let config = AppConfig::load_file("config/development").expect("Failed to load profile");
    assert_eq!(config.database.provider, DatabaseProvider::Memory);

    let store = MemoryStore::new();
    seed_on_startup(&config.database.seed, &Repositories::memory(store.clone()))
        .await
        .expect("Failed to seed");

    TestApp::with_config(config, store)
}

#[tokio::test]
async fn test_seeded_student_can_log_in_and_see_rooms() {
    let app = development_app().await;

    let cookie = app.login_student("S1", "student123").await;
    let response = app.get("/rooms", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text().contains(r#"<option value="101">"#));
}

#[tokio::test]
async fn test_seeded_room_can_be_allotted() {
    let app = development_app().await;
    let cookie = app.login_student("S2", "student123").await;
    let cookie = app.select_room(&cookie, "201").await;

    let response = app
        .post_json(
            "/mark_paid",
            serde_json::json!({ "room": "201", "txHash": "0xdev" }),
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(app.room("201").await.assigned_sid.as_deref(), Some("S2"));
}
