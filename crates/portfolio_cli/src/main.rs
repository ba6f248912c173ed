//! CLI probe for a portfolio store file.
//!
//! Opens the configured database, hydrates the store and prints one line per
//! collection. Exits non-zero only when the database can not be opened.

use portfolio_core::db::open_db;
use portfolio_core::{
    core_version, init_logging_from_config, CollectionKind, ContentStore, SeedData,
    SqliteBlobStore, StoreConfig,
};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match StoreConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("portfolio_cli: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = init_logging_from_config(&config) {
        eprintln!("portfolio_cli: logging disabled: {err}");
    }

    let db_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| config.db_path.value.clone());

    let conn = match open_db(&db_path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("portfolio_cli: failed to open `{}`: {err}", db_path.display());
            return ExitCode::FAILURE;
        }
    };
    let backend = SqliteBlobStore::new(&conn);
    let store = ContentStore::open(backend, SeedData::default());

    println!("portfolio_core version={}", core_version());
    println!("db={}", db_path.display());
    for kind in CollectionKind::ALL {
        let count = match kind {
            CollectionKind::Projects => store.projects().len(),
            CollectionKind::Certifications => store.certifications().len(),
            CollectionKind::Skills => store.skills().len(),
            CollectionKind::ResumeLinks => 1,
        };
        let source = if store.hydration().source(kind).is_seed() {
            "seed"
        } else {
            "persisted"
        };
        println!("{} count={count} source={source}", kind.as_str());
    }

    ExitCode::SUCCESS
}
