//! Service layer exposing the per-entity repositories.
//!
//! `LcaService` wraps `LcaDb` (raw database access). All repo methods are
//! implemented as `impl LcaService` blocks under `repos/`.

use crate::LcaDb;
use crate::error::DatabaseError;

/// Entry point for every read and write against the assessment store.
pub struct LcaService {
    db: LcaDb,
}

impl LcaService {
    /// Create a new service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path`: path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = LcaDb::open_local(db_path).await?;
        tracing::debug!(db_path, "opened assessment store");
        Ok(Self { db })
    }

    /// Create from an existing `LcaDb` (for testing).
    #[must_use]
    pub const fn from_db(db: LcaDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &LcaDb {
        &self.db
    }
}
