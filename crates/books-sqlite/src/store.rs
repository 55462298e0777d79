//! SQLite storage for book records.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{Connection, params};
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use books_core::error::StorageError;
use books_core::types::Book;
use books_core::{BookStore, Result};

/// Configuration for opening a [`SqliteStore`].
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    /// Database file path.
    pub path: PathBuf,
}

const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS books (
    id            TEXT PRIMARY KEY,
    title         TEXT NOT NULL,
    author        TEXT NOT NULL,
    creation_time TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS books_creation_time ON books (creation_time);
";

/// SQLite-backed book store.
///
/// The connection is opened once and owned for the lifetime of the store;
/// dropping the last clone closes it. Statements are issued one at a time
/// behind an async mutex, leaving concurrency control to SQLite itself.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open (creating if necessary) the database at the configured path
    /// and ensure the schema exists.
    pub fn open(config: &SqliteConfig) -> Result<Self> {
        let conn = Connection::open(&config.path).map_err(|e| StorageError::Connection {
            message: format!("cannot open {}: {}", config.path.display(), e),
        })?;
        Self::with_connection(conn)
    }

    /// Open a private in-memory database, for tests and throwaway use.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| StorageError::Connection {
            message: format!("cannot open in-memory database: {}", e),
        })?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)
            .map_err(|e| StorageError::Connection {
                message: format!("cannot apply schema: {}", e),
            })?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

// Timestamps are stored as fixed-precision RFC 3339 UTC text so that the
// ordering of the creation_time index equals chronological ordering.
fn encode_time(t: &DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn decode_time(id: &str, raw: &str) -> std::result::Result<DateTime<Utc>, StorageError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| StorageError::CorruptRow {
            id: id.to_string(),
            message: format!("cannot parse creation_time {:?}: {}", raw, e),
        })
}

fn map_query(operation: &'static str, err: rusqlite::Error) -> StorageError {
    StorageError::Query {
        operation,
        message: err.to_string(),
    }
}

type RawRow = (String, String, String, String);

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawRow> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
}

fn into_book(raw: RawRow) -> std::result::Result<Book, StorageError> {
    let (id, title, author, raw_time) = raw;
    let creation_time = decode_time(&id, &raw_time)?;
    Ok(Book {
        id,
        title,
        author,
        creation_time,
    })
}

#[async_trait]
impl BookStore for SqliteStore {
    #[instrument(skip(self, book), fields(id = %book.id))]
    async fn insert(&self, book: &Book) -> Result<()> {
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO books (id, title, author, creation_time) VALUES (?1, ?2, ?3, ?4)",
            params![
                book.id,
                book.title,
                book.author,
                encode_time(&book.creation_time)
            ],
        )
        .map_err(|e| match e {
            rusqlite::Error::SqliteFailure(f, _)
                if f.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                StorageError::AlreadyExists {
                    id: book.id.clone(),
                }
            }
            other => map_query("insert", other),
        })?;

        debug!("Inserted book");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get(&self, id: &str) -> Result<Book> {
        let conn = self.conn.lock().await;
        let raw = conn
            .query_row(
                "SELECT id, title, author, creation_time FROM books WHERE id = ?1",
                params![id],
                read_row,
            )
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => StorageError::NotFound {
                    id: id.to_string(),
                },
                other => map_query("get", other),
            })?;

        Ok(into_book(raw)?)
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        author: &str,
        title: &str,
        limit: i64,
        offset: u64,
    ) -> Result<Vec<Book>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare(
                "SELECT id, title, author, creation_time FROM books \
                 WHERE author LIKE '%' || ?1 || '%' AND title LIKE '%' || ?2 || '%' \
                 ORDER BY creation_time, id LIMIT ?3 OFFSET ?4",
            )
            .map_err(|e| map_query("list", e))?;

        let rows = stmt
            .query_map(params![author, title, limit, offset], read_row)
            .map_err(|e| map_query("list", e))?;

        let mut books = Vec::new();
        for raw in rows {
            let raw = raw.map_err(|e| map_query("list", e))?;
            books.push(into_book(raw)?);
        }

        debug!(count = books.len(), "Listed books");
        Ok(books)
    }
}
