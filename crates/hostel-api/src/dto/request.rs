//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use hostel_core::error::AppError;

/// Student login form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub sid: String,
    pub pwd: String,
}

/// Admin login form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminLoginForm {
    pub username: String,
    pub password: String,
}

/// Room selection form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectRoomForm {
    pub room: Option<String>,
}

/// `POST /mark_paid` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkPaidRequest {
    #[validate(length(min = 1, message = "Room is required"))]
    pub room: String,
    #[validate(length(min = 1, message = "Transaction hash is required"))]
    pub tx_hash: String,
}

/// `POST /download_receipt` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DownloadReceiptRequest {
    pub room: Option<String>,
    pub tx_hash: Option<String>,
    pub date_utc: Option<String>,
}

/// `POST /admin/revoke_room` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RevokeRoomRequest {
    #[validate(length(min = 1, message = "Room required"))]
    pub room: String,
}

/// Run `validator` checks and surface the first failure as a validation
/// error. Fields are reported in name order.
pub fn validate_request<T: Validate>(req: &T) -> Result<(), AppError> {
    req.validate()
        .map_err(|errors| AppError::validation(first_message(&errors)))
}

fn first_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(_, errs)| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid request".to_string())
}
