//! Select, pay, occupy and revoke.
//!
//! Selection only records intent in the caller's session. Payment
//! confirmation performs a compare-and-set on the room and then appends to
//! the ledger; the two writes are independent, so a failure between them
//! leaves an occupied room with no ledger entry. That case is logged.

use std::sync::Arc;

use tracing::{error, info, warn};

use hostel_core::error::AppError;
use hostel_core::result::AppResult;
use hostel_database::{RoomRepository, TransactionRepository};
use hostel_entity::{CreateTransaction, Room, Transaction};

use crate::context::RequestContext;

/// Drives room state transitions.
#[derive(Debug, Clone)]
pub struct AllotmentService {
    rooms: Arc<dyn RoomRepository>,
    transactions: Arc<dyn TransactionRepository>,
}

impl AllotmentService {
    /// Creates a new allotment service.
    pub fn new(
        rooms: Arc<dyn RoomRepository>,
        transactions: Arc<dyn TransactionRepository>,
    ) -> Self {
        Self {
            rooms,
            transactions,
        }
    }

    /// All rooms with their current status.
    pub async fn list_rooms(&self) -> AppResult<Vec<Room>> {
        self.rooms.find_all().await
    }

    /// The room currently held by `sid`.
    pub async fn assigned_room(&self, sid: &str) -> AppResult<Option<Room>> {
        self.rooms.find_by_student(sid).await
    }

    /// Validate a room choice and return the room id to remember as pending.
    ///
    /// Rooms missing from the directory are accepted here; payment for them
    /// then fails the compare-and-set.
    pub async fn select_room(&self, ctx: &RequestContext, room: Option<&str>) -> AppResult<String> {
        let sid = ctx.require_student()?;

        if let Some(held) = self.rooms.find_by_student(sid).await? {
            info!(sid = %sid, room = %held.room, "Selection refused: student already allotted");
            return Err(AppError::conflict("You already have an allotted room"));
        }

        let room = match room.map(str::trim) {
            Some(room) if !room.is_empty() => room,
            _ => return Err(AppError::validation("Please select a room")),
        };

        if let Some(existing) = self.rooms.find_by_room(room).await? {
            if existing.is_occupied() {
                info!(sid = %sid, room = %room, "Selection refused: room occupied");
                return Err(AppError::conflict("Room already occupied"));
            }
        }

        info!(sid = %sid, room = %room, "Room selected");
        Ok(room.to_string())
    }

    /// Occupy `room` for the caller and record the payment reference.
    pub async fn confirm_payment(
        &self,
        ctx: &RequestContext,
        room: &str,
        tx_hash: &str,
    ) -> AppResult<Transaction> {
        let sid = ctx.require_student()?;

        if room.is_empty() {
            return Err(AppError::validation("Room is required"));
        }
        if tx_hash.is_empty() {
            return Err(AppError::validation("Transaction hash is required"));
        }

        if !self.rooms.occupy(room, sid).await? {
            warn!(sid = %sid, room = %room, "Payment refused: room already occupied");
            return Err(AppError::conflict("Room already occupied"));
        }

        let tx = self
            .transactions
            .append(CreateTransaction {
                sid: sid.to_string(),
                room: room.to_string(),
                tx_hash: tx_hash.to_string(),
            })
            .await
            .map_err(|e| {
                error!(
                    sid = %sid,
                    room = %room,
                    tx_hash = %tx_hash,
                    error = %e,
                    "Room occupied but ledger append failed"
                );
                e
            })?;

        info!(sid = %sid, room = %room, tx_id = %tx.id, "Payment confirmed, room occupied");
        Ok(tx)
    }

    /// Free an occupied room. Admin only.
    pub async fn revoke_room(&self, ctx: &RequestContext, room: &str) -> AppResult<()> {
        ctx.require_admin()?;

        if room.is_empty() {
            return Err(AppError::validation("Room required"));
        }

        if !self.rooms.release(room).await? {
            return Err(AppError::not_found("Room not found"));
        }

        info!(admin = %ctx.subject, room = %room, "Room revoked");
        Ok(())
    }
}
