//! Room selection, payment confirmation and allotment conflicts.

use axum::http::StatusCode;
use serde_json::json;

use hostel_entity::RoomStatus;

use crate::helpers::TestApp;

async fn setup() -> (TestApp, String) {
    let app = TestApp::new();
    app.seed_student("s1", "pw").await;
    app.seed_rooms(&["101", "102"]).await;
    let cookie = app.login_student("s1", "pw").await;
    (app, cookie)
}

#[tokio::test]
async fn test_rooms_page_lists_available_rooms() {
    let (app, cookie) = setup().await;

    let response = app.get("/rooms", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    let html = response.text();
    assert!(html.contains(r#"<option value="101">"#));
    assert!(html.contains(r#"<option value="102">"#));
}

#[tokio::test]
async fn test_select_then_pay_allots_room() {
    let (app, cookie) = setup().await;
    let cookie = app.select_room(&cookie, "101").await;

    let page = app.get("/payment", Some(&cookie)).await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.text().contains("101"));

    let response = app
        .post_json(
            "/mark_paid",
            json!({ "room": "101", "txHash": "0xabc" }),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["ok"], true);

    let room = app.room("101").await;
    assert_eq!(room.status, RoomStatus::Occupied);
    assert_eq!(room.assigned_sid.as_deref(), Some("s1"));

    let ledger = app.ledger().await;
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger[0].sid, "s1");
    assert_eq!(ledger[0].room, "101");
    assert_eq!(ledger[0].tx_hash, "0xabc");

    let dashboard = app.get("/student/dashboard", Some(&cookie)).await;
    assert_eq!(dashboard.status, StatusCode::OK);
    let html = dashboard.text();
    assert!(html.contains("<strong>101</strong>"));
    assert!(html.contains("0xabc"));
}

#[tokio::test]
async fn test_payment_page_needs_pending_room() {
    let (app, cookie) = setup().await;

    let response = app.get("/payment", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/"));
}

#[tokio::test]
async fn test_dashboard_without_room_redirects_to_rooms() {
    let (app, cookie) = setup().await;

    let response = app.get("/student/dashboard", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/rooms"));
}

#[tokio::test]
async fn test_select_blank_room_rejected() {
    let (app, cookie) = setup().await;

    let response = app.post_form("/select_room", "room=", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "Please select a room");
}

#[tokio::test]
async fn test_select_without_form_body_asks_for_room() {
    let (app, cookie) = setup().await;

    let response = app.post_empty("/select_room", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "Please select a room");
}

#[tokio::test]
async fn test_select_without_session_or_body_redirects() {
    let (app, _cookie) = setup().await;

    let response = app.post_empty("/select_room", None).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/"));
}

#[tokio::test]
async fn test_missing_tx_hash_leaves_state_untouched() {
    let (app, cookie) = setup().await;
    let cookie = app.select_room(&cookie, "101").await;

    let response = app
        .post_json("/mark_paid", json!({ "room": "101" }), Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["ok"], false);
    assert_eq!(response.json()["error"], "Transaction hash is required");
    assert_eq!(app.room("101").await.status, RoomStatus::Available);
    assert!(app.ledger().await.is_empty());
}

#[tokio::test]
async fn test_malformed_body_treated_as_empty() {
    let (app, cookie) = setup().await;

    let response = app.post_raw("/mark_paid", "{not json", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "Room is required");
}

#[tokio::test]
async fn test_second_payment_for_same_room_conflicts() {
    let (app, cookie) = setup().await;
    app.seed_student("s2", "pw2").await;
    let other = app.login_student("s2", "pw2").await;

    let first = app
        .post_json("/mark_paid", json!({ "room": "101", "txHash": "0x1" }), Some(&cookie))
        .await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app
        .post_json("/mark_paid", json!({ "room": "101", "txHash": "0x2" }), Some(&other))
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.json()["error"], "Room already occupied");

    assert_eq!(app.room("101").await.assigned_sid.as_deref(), Some("s1"));
    assert_eq!(app.ledger().await.len(), 1);
}

#[tokio::test]
async fn test_select_occupied_room_conflicts() {
    let (app, cookie) = setup().await;
    app.seed_student("s2", "pw2").await;
    let other = app.login_student("s2", "pw2").await;

    app.post_json("/mark_paid", json!({ "room": "101", "txHash": "0x1" }), Some(&cookie))
        .await;

    let response = app.post_form("/select_room", "room=101", Some(&other)).await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.text(), "Room already occupied");

    let page = app.get("/rooms", Some(&other)).await;
    assert!(!page.text().contains(r#"<option value="101">"#));
}

#[tokio::test]
async fn test_allotted_student_cannot_select_again() {
    let (app, cookie) = setup().await;

    app.post_json("/mark_paid", json!({ "room": "101", "txHash": "0x1" }), Some(&cookie))
        .await;

    let response = app.post_form("/select_room", "room=102", Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.text(), "You already have an allotted room");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_payments_allot_exactly_once() {
    let app = TestApp::new();
    app.seed_rooms(&["101"]).await;

    let mut cookies = Vec::new();
    for i in 0..8 {
        let sid = format!("s{i}");
        app.seed_student(&sid, "pw").await;
        cookies.push((sid.clone(), app.login_student(&sid, "pw").await));
    }

    let handles: Vec<_> = cookies
        .into_iter()
        .map(|(sid, cookie)| {
            let app = app.clone();
            tokio::spawn(async move {
                let response = app
                    .post_json(
                        "/mark_paid",
                        json!({ "room": "101", "txHash": format!("0x{sid}") }),
                        Some(&cookie),
                    )
                    .await;
                (sid, response.status)
            })
        })
        .collect();

    let mut winners = Vec::new();
    for handle in handles {
        let (sid, status) = handle.await.expect("task panicked");
        match status {
            StatusCode::OK => winners.push(sid),
            StatusCode::CONFLICT => {}
            other => panic!("unexpected status {other}"),
        }
    }

    assert_eq!(winners.len(), 1);
    let room = app.room("101").await;
    assert_eq!(room.assigned_sid.as_deref(), Some(winners[0].as_str()));

    let ledger = app.ledger().await;
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger[0].sid, winners[0]);
}
