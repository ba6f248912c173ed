use portfolio_core::db::schema::{ensure_schema, schema_version, SCHEMA_VERSION};
use portfolio_core::db::{open_db, open_db_in_memory};
use portfolio_core::{BlobStore, RepoError, SqliteBlobStore};
use rusqlite::Connection;

#[test]
fn fresh_database_gets_blobs_table_and_current_version() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn).unwrap(), SCHEMA_VERSION);
    assert_table_exists(&conn, "blobs");
}

#[test]
fn reopening_file_keeps_version_and_blobs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portfolio.db");

    let first = open_db(&path).unwrap();
    SqliteBlobStore::new(&first).write("k", "[]").unwrap();
    drop(first);

    let second = open_db(&path).unwrap();
    assert_eq!(schema_version(&second).unwrap(), SCHEMA_VERSION);
    assert_eq!(
        SqliteBlobStore::new(&second).read("k").unwrap().as_deref(),
        Some("[]")
    );
}

#[test]
fn ensure_schema_is_idempotent() {
    let conn = Connection::open_in_memory().unwrap();

    assert_eq!(ensure_schema(&conn).unwrap(), SCHEMA_VERSION);
    assert_eq!(ensure_schema(&conn).unwrap(), SCHEMA_VERSION);
    assert_table_exists(&conn, "blobs");
}

#[test]
fn database_from_newer_build_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        RepoError::UnsupportedSchemaVersion { found, supported } => {
            assert_eq!(found, 999);
            assert_eq!(supported, SCHEMA_VERSION);
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1);",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "missing table {table_name}");
}
