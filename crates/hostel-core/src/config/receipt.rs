//! Receipt document configuration.

use serde::{Deserialize, Serialize};

/// Fixed text printed on every allotment receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptConfig {
    /// Institution name (first header line).
    #[serde(default = "default_institution")]
    pub institution: String,
    /// Campus name (second header line).
    #[serde(default = "default_campus")]
    pub campus: String,
    /// Document title.
    #[serde(default = "default_title")]
    pub title: String,
    /// Amount printed in the "Amount Paid" row.
    #[serde(default = "default_amount_label")]
    pub amount_label: String,
    /// Caption under the signature line.
    #[serde(default = "default_signatory")]
    pub signatory: String,
}

impl Default for ReceiptConfig {
    fn default() -> Self {
        Self {
            institution: default_institution(),
            campus: default_campus(),
            title: default_title(),
            amount_label: default_amount_label(),
            signatory: default_signatory(),
        }
    }
}

fn default_institution() -> String {
    "National Institute of Electronics and Information Technology".to_string()
}

fn default_campus() -> String {
    "Ajmer Campus".to_string()
}

fn default_title() -> String {
    "Hostel Room Allotment Receipt".to_string()
}

fn default_amount_label() -> String {
    "1 ETH".to_string()
}

fn default_signatory() -> String {
    "Authorized Signatory".to_string()
}
