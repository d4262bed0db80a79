//! The room allotment workflow.

pub mod service;

pub use service::AllotmentService;
