//! Transaction entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An append-only record of a confirmed payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Ledger row identifier.
    pub id: Uuid,
    /// Paying student.
    pub sid: String,
    /// Room paid for.
    pub room: String,
    /// Client-supplied payment reference.
    pub tx_hash: String,
    /// When the payment was confirmed.
    pub created_at: DateTime<Utc>,
}

/// Data required to append a ledger entry.
#[derive(Debug, Clone)]
pub struct CreateTransaction {
    pub sid: String,
    pub room: String,
    pub tx_hash: String,
}

impl CreateTransaction {
    /// Materialize the row with a fresh id and timestamp.
    pub fn into_transaction(self) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            sid: self.sid,
            room: self.room,
            tx_hash: self.tx_hash,
            created_at: Utc::now(),
        }
    }
}
