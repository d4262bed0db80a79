//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use axum_extra::extract::CookieJar;

use hostel_auth::{AdminAuthenticator, SessionCodec, StudentAuthenticator};
use hostel_core::config::AppConfig;
use hostel_core::result::AppResult;
use hostel_database::Repositories;
use hostel_entity::Role;
use hostel_service::{AllotmentService, LedgerService, ReceiptGenerator};

use crate::session::{removal_cookie, session_cookie};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    pub repos: Repositories,

    // ── Auth ─────────────────────────────────────────────────
    pub sessions: Arc<SessionCodec>,
    pub student_auth: Arc<StudentAuthenticator>,
    pub admin_auth: Arc<AdminAuthenticator>,

    // ── Services ─────────────────────────────────────────────
    pub allotment: Arc<AllotmentService>,
    pub ledger: Arc<LedgerService>,
    pub receipts: Arc<ReceiptGenerator>,
}

impl AppState {
    /// Wire services over the given repositories.
    pub fn new(config: AppConfig, repos: Repositories) -> AppResult<Self> {
        let admin_auth = AdminAuthenticator::new(&config.admin)?;

        Ok(Self {
            sessions: Arc::new(SessionCodec::new(&config.session)),
            student_auth: Arc::new(StudentAuthenticator::new(repos.students.clone())),
            admin_auth: Arc::new(admin_auth),
            allotment: Arc::new(AllotmentService::new(
                repos.rooms.clone(),
                repos.transactions.clone(),
            )),
            ledger: Arc::new(LedgerService::new(
                repos.rooms.clone(),
                repos.transactions.clone(),
            )),
            receipts: Arc::new(ReceiptGenerator::new(config.receipt.clone())),
            repos,
            config: Arc::new(config),
        })
    }

    /// Issue a session and attach it to `jar`, replacing any previous one.
    pub fn start_session(
        &self,
        jar: CookieJar,
        subject: &str,
        role: Role,
        pending_room: Option<String>,
    ) -> AppResult<CookieJar> {
        let token = self.sessions.issue(subject, role, pending_room)?;
        Ok(jar.add(session_cookie(&self.config.session, token)))
    }

    /// Drop the session cookie.
    pub fn end_session(&self, jar: CookieJar) -> CookieJar {
        jar.remove(removal_cookie(&self.config.session))
    }
}
