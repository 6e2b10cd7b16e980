//! SQLite-based unified store using `SeaORM`.
//!
//! A single `SqliteStore` implements `ConfigRepository`, `DomainRepository`,
//! `RecordRepository`, and `MailboxRepository`, backed by a local `SQLite`
//! database file.

mod config_repo;
mod domain_repo;
pub(crate) mod entity;
mod mailbox_repo;
mod migration;
mod record_repo;

use std::path::Path;

use zonekeeper_core::error::{CoreError, CoreResult};

use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use migration::Migrator;

/// SQLite-based unified store.
///
/// Implements all four storage traits against a single database file.
/// Credentials are stored in plaintext; the file is expected to live on a
/// trusted host with filesystem-level access control.
pub struct SqliteStore {
    /// Shared `SeaORM` database connection.
    pub(crate) db: DatabaseConnection,
}

impl SqliteStore {
    /// Open (or create) the database file and bring the schema up to date.
    ///
    /// # Errors
    /// Returns `CoreError::Storage` if directory creation, database
    /// connection, or schema migration fails.
    pub async fn new(db_path: &Path) -> CoreResult<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CoreError::Storage(format!("Failed to create directory: {e}")))?;
        }

        let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
        let db = Database::connect(&db_url)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to connect to SQLite: {e}")))?;

        let store = Self { db };

        // Ensure schema is up to date before the store is used.
        Migrator::up(&store.db, None)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to run migrations: {e}")))?;

        Ok(store)
    }
}
