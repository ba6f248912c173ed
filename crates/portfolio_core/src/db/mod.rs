//! Connection bootstrap for the blob database.
//!
//! # Invariants
//! - Returned connections carry the current `blobs` schema.
//! - A file written by a newer build is refused, never downgraded.

pub mod schema;

use crate::repo::blob_repo::RepoResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens (or creates) the blob database at `path`.
///
/// # Side effects
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> RepoResult<Connection> {
    open_with("file", || Connection::open(path))
}

/// Opens a throwaway in-memory blob database.
pub fn open_db_in_memory() -> RepoResult<Connection> {
    open_with("memory", Connection::open_in_memory)
}

fn open_with<F>(mode: &str, open: F) -> RepoResult<Connection>
where
    F: FnOnce() -> rusqlite::Result<Connection>,
{
    let started_at = Instant::now();
    let result = open()
        .map_err(Into::into)
        .and_then(|conn| {
            conn.busy_timeout(BUSY_TIMEOUT)?;
            let version = schema::ensure_schema(&conn)?;
            Ok((conn, version))
        });

    match result {
        Ok((conn, version)) => {
            info!(
                "event=db_open module=db status=ok mode={mode} schema_version={version} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={mode} duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}
