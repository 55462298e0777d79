//! books-sqlite - SQLite-backed record store for the books service.

mod store;

pub use store::{SqliteConfig, SqliteStore};
