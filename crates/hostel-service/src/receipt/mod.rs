//! Allotment receipt documents.

pub mod data;
pub mod generator;

pub use data::ReceiptData;
pub use generator::ReceiptGenerator;
