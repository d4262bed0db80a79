//! Storage engine selection.

use std::sync::Arc;

use tracing::{info, warn};

use hostel_core::config::{DatabaseConfig, DatabaseProvider};
use hostel_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::MemoryStore;
use crate::migration::run_migrations;
use crate::repositories::{PgRoomRepository, PgStudentRepository, PgTransactionRepository};
use crate::traits::{RoomRepository, StudentRepository, TransactionRepository};

/// The three repositories the application needs, backed by one engine.
#[derive(Debug, Clone)]
pub struct Repositories {
    pub rooms: Arc<dyn RoomRepository>,
    pub students: Arc<dyn StudentRepository>,
    pub transactions: Arc<dyn TransactionRepository>,
    pool: Option<DatabasePool>,
}

impl Repositories {
    /// Open the configured storage engine.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider {
            DatabaseProvider::Postgres => {
                let pool = DatabasePool::connect(config).await?;
                if config.run_migrations {
                    run_migrations(pool.pool()).await?;
                }
                Ok(Self::postgres(pool))
            }
            DatabaseProvider::Memory => {
                warn!("Using in-memory storage; all data is lost on restart");
                Ok(Self::memory(MemoryStore::new()))
            }
        }
    }

    /// Repositories over an open PostgreSQL pool.
    pub fn postgres(pool: DatabasePool) -> Self {
        info!("Initializing PostgreSQL repositories");
        let pg = pool.pool().clone();
        Self {
            rooms: Arc::new(PgRoomRepository::new(pg.clone())),
            students: Arc::new(PgStudentRepository::new(pg.clone())),
            transactions: Arc::new(PgTransactionRepository::new(pg)),
            pool: Some(pool),
        }
    }

    /// Repositories over a shared in-memory store.
    pub fn memory(store: MemoryStore) -> Self {
        let store = Arc::new(store);
        Self {
            rooms: store.clone(),
            students: store.clone(),
            transactions: store,
            pool: None,
        }
    }

    /// Release database connections, if any.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
