//! Read-side views over rooms and the payment ledger.

pub mod service;

pub use service::{AdminOverview, LedgerService, StudentOverview};
