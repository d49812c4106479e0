//! Embedded schema migrations.
//!
//! The SQL under `backend/migrations/` is compiled into the binary and applied
//! at startup over a short-lived synchronous connection, so a fresh database
//! needs no out-of-band setup.

use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use crate::domain::ports::StoreError;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Apply any pending migrations to the database at `database_url`.
///
/// Runs on the blocking thread pool; the synchronous Diesel connection must
/// not stall the async runtime.
///
/// # Errors
///
/// Returns [`StoreError::Connection`] when the database is unreachable and
/// [`StoreError::Query`] when a migration fails.
pub async fn run_pending_migrations(database_url: &str) -> Result<(), StoreError> {
    let url = database_url.to_owned();
    tokio::task::spawn_blocking(move || {
        let mut conn = PgConnection::establish(&url)
            .map_err(|err| StoreError::connection(err.to_string()))?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|err| StoreError::query(err.to_string()))?;
        info!(count = applied.len(), "applied pending migrations");
        Ok(())
    })
    .await
    .map_err(|err| StoreError::query(format!("migration task failed: {err}")))?
}
