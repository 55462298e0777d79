//! Subcommand implementations.

pub mod create;
pub mod get;
pub mod list;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use books_service::BooksService;
use books_sqlite::{SqliteConfig, SqliteStore};

/// Open the store at `db` and wrap it in a service façade.
pub fn open_service(db: &Path) -> Result<BooksService<SqliteStore>> {
    debug!(db = %db.display(), "Opening database");

    let store = if db.as_os_str() == ":memory:" {
        SqliteStore::open_in_memory()
    } else {
        SqliteStore::open(&SqliteConfig {
            path: db.to_path_buf(),
        })
    }
    .with_context(|| format!("Failed to open database {}", db.display()))?;

    Ok(BooksService::new(store))
}
