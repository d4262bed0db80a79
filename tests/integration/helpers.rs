//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use hostel_api::{AppState, build_router};
use hostel_auth::PasswordHasher;
use hostel_core::config::{AppConfig, DatabaseProvider};
use hostel_database::{MemoryStore, Repositories, RoomRepository, StudentRepository};
use hostel_entity::{Room, Student, Transaction};

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";

/// Test application context
#[derive(Clone)]
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Backing store for direct inspection
    pub store: MemoryStore,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// App with admin login disabled.
    pub fn new() -> Self {
        Self::build(String::new())
    }

    /// App whose admin is `ADMIN_USER` / `ADMIN_PASSWORD`.
    pub fn with_admin() -> Self {
        let hash = PasswordHasher::new()
            .hash_password(ADMIN_PASSWORD)
            .expect("Failed to hash admin password");
        Self::build(hash)
    }

    fn build(admin_hash: String) -> Self {
        let mut config = AppConfig::default();
        config.database.provider = DatabaseProvider::Memory;
        config.admin.username = ADMIN_USER.to_string();
        config.admin.password_hash = admin_hash;

        Self::with_config(config, MemoryStore::new())
    }

    /// App over an existing store with the given config.
    pub fn with_config(config: AppConfig, store: MemoryStore) -> Self {
        let state = AppState::new(config.clone(), Repositories::memory(store.clone()))
            .expect("Failed to build state");

        Self {
            router: build_router(state),
            store,
            config,
        }
    }

    /// Seed a student with a hashed password.
    pub async fn seed_student(&self, sid: &str, password: &str) {
        let hash = PasswordHasher::new()
            .hash_password(password)
            .expect("Failed to hash password");
        StudentRepository::create(&self.store, Student::new(sid, hash))
            .await
            .expect("Failed to seed student");
    }

    /// Seed available rooms.
    pub async fn seed_rooms(&self, rooms: &[&str]) {
        for room in rooms {
            RoomRepository::create(&self.store, room)
                .await
                .expect("Failed to seed room");
        }
    }

    /// Current state of a room.
    pub async fn room(&self, room: &str) -> Room {
        self.store
            .find_by_room(room)
            .await
            .expect("Failed to read room")
            .expect("Room missing")
    }

    /// The whole ledger, newest first.
    pub async fn ledger(&self) -> Vec<Transaction> {
        hostel_database::TransactionRepository::find_all(&self.store)
            .await
            .expect("Failed to read ledger")
    }

    /// Log a student in and return the `Cookie` header value.
    pub async fn login_student(&self, sid: &str, password: &str) -> String {
        let response = self
            .post_form("/", &format!("sid={sid}&pwd={password}"), None)
            .await;
        assert_eq!(response.status, StatusCode::SEE_OTHER, "Login failed: {}", response.text());
        response
            .session_cookie(&self.config.session.cookie_name)
            .expect("No session cookie after login")
    }

    /// Log the admin in and return the `Cookie` header value.
    pub async fn login_admin(&self) -> String {
        let response = self
            .post_form(
                "/admin",
                &format!("username={ADMIN_USER}&password={ADMIN_PASSWORD}"),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::SEE_OTHER);
        response
            .session_cookie(&self.config.session.cookie_name)
            .expect("No session cookie after admin login")
    }

    /// Select `room` and return the refreshed cookie carrying the choice.
    pub async fn select_room(&self, cookie: &str, room: &str) -> String {
        let response = self
            .post_form("/select_room", &format!("room={room}"), Some(cookie))
            .await;
        assert_eq!(response.location(), Some("/payment"), "{}", response.text());
        response
            .session_cookie(&self.config.session.cookie_name)
            .expect("No session cookie after selection")
    }

    pub async fn get(&self, path: &str, cookie: Option<&str>) -> TestResponse {
        self.send("GET", path, None, Body::empty(), cookie).await
    }

    pub async fn post_form(&self, path: &str, form: &str, cookie: Option<&str>) -> TestResponse {
        self.send(
            "POST",
            path,
            Some("application/x-www-form-urlencoded"),
            Body::from(form.to_string()),
            cookie,
        )
        .await
    }

    pub async fn post_json(&self, path: &str, body: Value, cookie: Option<&str>) -> TestResponse {
        let body = serde_json::to_string(&body).expect("Failed to serialize body");
        self.post_raw(path, &body, cookie).await
    }

    /// POST with no body and no content type.
    pub async fn post_empty(&self, path: &str, cookie: Option<&str>) -> TestResponse {
        self.send("POST", path, None, Body::empty(), cookie).await
    }

    /// POST an arbitrary body labelled as JSON.
    pub async fn post_raw(&self, path: &str, body: &str, cookie: Option<&str>) -> TestResponse {
        self.send(
            "POST",
            path,
            Some("application/json"),
            Body::from(body.to_string()),
            cookie,
        )
        .await
    }

    async fn send(
        &self,
        method: &str,
        path: &str,
        content_type: Option<&str>,
        body: Body,
        cookie: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);
        if let Some(content_type) = content_type {
            req = req.header(header::CONTENT_TYPE, content_type);
        }
        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }
        let req = req.body(body).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), 4 * 1024 * 1024)
            .await
            .expect("Failed to read body");

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    /// Body parsed as JSON, or `Null`.
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn header(&self, name: header::HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Redirect target, if any.
    pub fn location(&self) -> Option<&str> {
        self.header(header::LOCATION)
    }

    /// `name=value` for the named cookie set by this response.
    pub fn session_cookie(&self, name: &str) -> Option<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter_map(|v| v.split(';').next())
            .find(|pair| pair.starts_with(&format!("{name}=")) && pair.len() > name.len() + 1)
            .map(str::to_string)
    }

    /// Whether this response removes the named cookie.
    pub fn clears_cookie(&self, name: &str) -> bool {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .any(|v| v.starts_with(&format!("{name}=")) && v.contains("Max-Age=0"))
    }
}
