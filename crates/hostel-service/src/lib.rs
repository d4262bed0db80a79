//! # hostel-service
//!
//! Business logic for the hostel allotment system. Services take a
//! [`RequestContext`] describing the caller and talk to storage only
//! through the repository traits.

pub mod allotment;
pub mod context;
pub mod ledger;
pub mod receipt;
pub mod seed;

pub use allotment::AllotmentService;
pub use context::RequestContext;
pub use ledger::{AdminOverview, LedgerService, StudentOverview};
pub use receipt::{ReceiptData, ReceiptGenerator};
pub use seed::{SeedOutcome, seed_on_startup};
