//! Validated receipt inputs.

use hostel_core::error::AppError;

/// Everything printed in a receipt's detail rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptData {
    pub sid: String,
    pub room: String,
    pub tx_hash: String,
    /// Payment date as supplied by the client, printed verbatim.
    pub date_utc: String,
}

impl ReceiptData {
    /// Every field is required; blank counts as missing.
    pub fn new(
        sid: &str,
        room: Option<&str>,
        tx_hash: Option<&str>,
        date_utc: Option<&str>,
    ) -> Result<Self, AppError> {
        let required = |v: Option<&str>| {
            v.filter(|s| !s.trim().is_empty())
                .map(str::to_string)
                .ok_or_else(|| AppError::validation("Missing receipt data"))
        };

        if sid.is_empty() {
            return Err(AppError::validation("Missing receipt data"));
        }

        Ok(Self {
            sid: sid.to_string(),
            room: required(room)?,
            tx_hash: required(tx_hash)?,
            date_utc: required(date_utc)?,
        })
    }

    /// Attachment file name offered to the browser.
    pub fn file_name(&self) -> String {
        format!("receipt_{}.pdf", self.sid)
    }
}
