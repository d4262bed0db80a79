//! Ledger repository backed by PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;

use hostel_core::error::{AppError, ErrorKind};
use hostel_core::result::AppResult;
use hostel_entity::{CreateTransaction, Transaction};

use crate::traits::TransactionRepository;

/// Append-only ledger stored in the `transactions` table.
#[derive(Debug, Clone)]
pub struct PgTransactionRepository {
    pool: PgPool,
}

impl PgTransactionRepository {
    /// Create a new transaction repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionRepository for PgTransactionRepository {
    async fn append(&self, data: CreateTransaction) -> AppResult<Transaction> {
        let tx = data.into_transaction();
        sqlx::query_as::<_, Transaction>(
            "INSERT INTO transactions (id, sid, room, tx_hash, created_at) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(tx.id)
        .bind(&tx.sid)
        .bind(&tx.room)
        .bind(&tx.tx_hash)
        .bind(tx.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to append transaction", e))
    }

    async fn find_all(&self) -> AppResult<Vec<Transaction>> {
        sqlx::query_as::<_, Transaction>("SELECT * FROM transactions ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list transactions", e)
            })
    }

    async fn find_by_student(&self, sid: &str) -> AppResult<Vec<Transaction>> {
        sqlx::query_as::<_, Transaction>(
            "SELECT * FROM transactions WHERE sid = $1 ORDER BY created_at DESC",
        )
        .bind(sid)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list student transactions", e)
        })
    }
}
