//! Schema of the `blobs` table.
//!
//! The table layout is versioned through `PRAGMA user_version`. Version 0 is
//! an empty file; [`SCHEMA_VERSION`] is the layout this build reads and writes.

use crate::repo::blob_repo::{RepoError, RepoResult};
use log::info;
use rusqlite::Connection;

/// Layout version written by this build.
pub const SCHEMA_VERSION: u32 = 1;

const CREATE_BLOBS_SQL: &str = "CREATE TABLE IF NOT EXISTS blobs (
    key TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL,
    updated_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now') * 1000)
);";

/// Creates the `blobs` table on a fresh file and returns the schema version.
///
/// # Errors
/// - [`RepoError::UnsupportedSchemaVersion`] when the file is newer than this build.
pub fn ensure_schema(conn: &Connection) -> RepoResult<u32> {
    let found = schema_version(conn)?;
    if found > SCHEMA_VERSION {
        return Err(RepoError::UnsupportedSchemaVersion {
            found,
            supported: SCHEMA_VERSION,
        });
    }
    if found == SCHEMA_VERSION {
        return Ok(found);
    }

    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(CREATE_BLOBS_SQL)?;
    tx.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    tx.commit()?;

    info!("event=db_schema module=db status=ok from={found} to={SCHEMA_VERSION}");
    Ok(SCHEMA_VERSION)
}

/// Reads `PRAGMA user_version`.
pub fn schema_version(conn: &Connection) -> RepoResult<u32> {
    Ok(conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?)
}
