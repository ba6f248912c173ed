use portfolio_core::db::open_db_in_memory;
use portfolio_core::{BlobStore, SqliteBlobStore};

#[test]
fn read_missing_key_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteBlobStore::new(&conn);

    assert_eq!(store.read("portfolio.skills").unwrap(), None);
}

#[test]
fn write_overwrites_whole_value() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteBlobStore::new(&conn);

    store.write("k", "[1,2,3]").unwrap();
    store.write("k", "[]").unwrap();

    assert_eq!(store.read("k").unwrap().as_deref(), Some("[]"));
    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM blobs;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn write_many_commits_every_entry() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteBlobStore::new(&conn);

    store.write_many(&[("a", "1"), ("b", "2")]).unwrap();

    assert_eq!(store.read("a").unwrap().as_deref(), Some("1"));
    assert_eq!(store.read("b").unwrap().as_deref(), Some("2"));
}

#[test]
fn write_many_rolls_back_when_one_entry_fails() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TRIGGER reject_poison BEFORE INSERT ON blobs
         WHEN NEW.key = 'poison'
         BEGIN SELECT RAISE(ABORT, 'poisoned key'); END;",
    )
    .unwrap();
    let store = SqliteBlobStore::new(&conn);

    assert!(store.write_many(&[("good", "1"), ("poison", "2")]).is_err());

    assert_eq!(store.read("good").unwrap(), None);
    assert_eq!(store.read("poison").unwrap(), None);
}

#[test]
fn remove_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteBlobStore::new(&conn);

    store.write("k", "{}").unwrap();
    store.remove("k").unwrap();
    store.remove("k").unwrap();

    assert_eq!(store.read("k").unwrap(), None);
}
