//! Occupancy and ledger queries for the dashboards.

use std::sync::Arc;

use serde::Serialize;

use hostel_core::result::AppResult;
use hostel_database::{RoomRepository, TransactionRepository};
use hostel_entity::{Room, Transaction};

use crate::context::RequestContext;

/// What the admin dashboard shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminOverview {
    pub occupied_rooms: Vec<Room>,
    /// Newest first.
    pub transactions: Vec<Transaction>,
}

/// What the student dashboard shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentOverview {
    pub sid: String,
    pub room: Option<Room>,
    pub transactions: Vec<Transaction>,
}

/// Audit queries over the append-only ledger.
#[derive(Debug, Clone)]
pub struct LedgerService {
    rooms: Arc<dyn RoomRepository>,
    transactions: Arc<dyn TransactionRepository>,
}

impl LedgerService {
    pub fn new(
        rooms: Arc<dyn RoomRepository>,
        transactions: Arc<dyn TransactionRepository>,
    ) -> Self {
        Self {
            rooms,
            transactions,
        }
    }

    /// Occupied rooms and the full ledger. Admin only.
    pub async fn admin_overview(&self, ctx: &RequestContext) -> AppResult<AdminOverview> {
        ctx.require_admin()?;

        Ok(AdminOverview {
            occupied_rooms: self.rooms.find_occupied().await?,
            transactions: self.transactions.find_all().await?,
        })
    }

    /// The caller's allotted room and payment history.
    pub async fn student_overview(&self, ctx: &RequestContext) -> AppResult<StudentOverview> {
        let sid = ctx.require_student()?;

        Ok(StudentOverview {
            sid: sid.to_string(),
            room: self.rooms.find_by_student(sid).await?,
            transactions: self.transactions.find_by_student(sid).await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostel_core::error::ErrorKind;
    use hostel_database::MemoryStore;

    use crate::allotment::AllotmentService;

    #[tokio::test]
    async fn test_admin_overview_lists_occupied_and_ledger() {
        let store = Arc::new(MemoryStore::new());
        for room in ["101", "102"] {
            RoomRepository::create(store.as_ref(), room).await.unwrap();
        }
        let allot = AllotmentService::new(store.clone(), store.clone());
        allot
            .confirm_payment(&RequestContext::student("S1"), "102", "0xABC")
            .await
            .unwrap();

        let ledger = LedgerService::new(store.clone(), store);
        let overview = ledger
            .admin_overview(&RequestContext::admin("admin"))
            .await
            .unwrap();

        assert_eq!(overview.occupied_rooms.len(), 1);
        assert_eq!(overview.occupied_rooms[0].room, "102");
        assert_eq!(overview.transactions[0].tx_hash, "0xABC");

        let err = ledger
            .admin_overview(&RequestContext::student("S1"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
    }

    #[tokio::test]
    async fn test_student_overview_without_room() {
        let store = Arc::new(MemoryStore::new());
        let ledger = LedgerService::new(store.clone(), store);

        let overview = ledger
            .student_overview(&RequestContext::student("S9"))
            .await
            .unwrap();
        assert_eq!(overview.sid, "S9");
        assert!(overview.room.is_none());
        assert!(overview.transactions.is_empty());
    }
}
