//! Blob store contract and SQLite implementation.

use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for the blob persistence boundary.
#[derive(Debug)]
pub enum RepoError {
    Sqlite(rusqlite::Error),
    /// The database file was written by a newer build.
    UnsupportedSchemaVersion { found: u32, supported: u32 },
    /// A collection could not be encoded to JSON.
    Serialization {
        key: String,
        source: serde_json::Error,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion { found, supported } => write!(
                f,
                "blob schema version {found} is newer than supported {supported}"
            ),
            Self::Serialization { key, source } => {
                write!(f, "could not encode blob `{key}`: {source}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
            Self::Serialization { source, .. } => Some(source),
        }
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// String-keyed durable storage holding one JSON blob per key.
pub trait BlobStore {
    /// Returns the blob stored under `key`, or `None` if nothing was written.
    fn read(&self, key: &str) -> RepoResult<Option<String>>;

    /// Replaces the blob stored under `key`.
    fn write(&self, key: &str, value: &str) -> RepoResult<()>;

    /// Replaces several blobs so that either all or none become visible.
    fn write_many(&self, entries: &[(&str, &str)]) -> RepoResult<()>;

    /// Removes the blob under `key`. Missing keys are not an error.
    fn remove(&self, key: &str) -> RepoResult<()>;
}

impl<T: BlobStore + ?Sized> BlobStore for &T {
    fn read(&self, key: &str) -> RepoResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> RepoResult<()> {
        (**self).write(key, value)
    }

    fn write_many(&self, entries: &[(&str, &str)]) -> RepoResult<()> {
        (**self).write_many(entries)
    }

    fn remove(&self, key: &str) -> RepoResult<()> {
        (**self).remove(key)
    }
}

const UPSERT_SQL: &str = "INSERT INTO blobs (key, value, updated_at)
    VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
    ON CONFLICT(key) DO UPDATE SET
        value = excluded.value,
        updated_at = excluded.updated_at;";

/// SQLite-backed blob store over the `blobs` table.
pub struct SqliteBlobStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBlobStore<'conn> {
    /// Wraps a connection returned by [`crate::db::open_db`] or
    /// [`crate::db::open_db_in_memory`].
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl BlobStore for SqliteBlobStore<'_> {
    fn read(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM blobs WHERE key = ?1;", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn write(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(UPSERT_SQL, params![key, value])?;
        debug!(
            "event=blob_write module=repo status=ok key={key} bytes={}",
            value.len()
        );
        Ok(())
    }

    fn write_many(&self, entries: &[(&str, &str)]) -> RepoResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(UPSERT_SQL)?;
            for (key, value) in entries {
                stmt.execute(params![key, value])?;
            }
        }
        tx.commit()?;
        debug!(
            "event=blob_write_many module=repo status=ok keys={}",
            entries.len()
        );
        Ok(())
    }

    fn remove(&self, key: &str) -> RepoResult<()> {
        self.conn.execute("DELETE FROM blobs WHERE key = ?1;", [key])?;
        Ok(())
    }
}
