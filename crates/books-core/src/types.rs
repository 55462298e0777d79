//! Record and request/response types.
//!
//! These are the logical structures the remote-procedure transport carries;
//! the transport itself lives outside this crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted book record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier, assigned once at creation and immutable after.
    pub id: String,

    /// Title, non-empty and at most 255 bytes.
    pub title: String,

    /// Author, non-empty and at most 255 bytes.
    pub author: String,

    /// When the record was created (UTC). Always concrete once persisted.
    pub creation_time: DateTime<Utc>,
}

/// The book payload of a create request.
///
/// `id` and `creation_time` are optional; the service assigns both when
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookDraft {
    /// Client-chosen identifier, at most 30 bytes. Absent or empty means
    /// the service generates one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Title of the book to create.
    pub title: String,

    /// Author of the book to create.
    pub author: String,

    /// Explicit creation time; absent means "now".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,
}

/// Request to create one book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookRequest {
    /// The book to create.
    pub book: BookDraft,

    /// Client-supplied idempotency token. Shape-validated but not yet
    /// checked against prior submissions.
    pub request_id: String,
}

/// Response to a successful create: the record as persisted, including any
/// server-assigned id and creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookResponse {
    /// The persisted record.
    pub book: Book,
}

/// Request for one page of a filtered listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListBooksRequest {
    /// Substring filter on author; empty matches every record.
    #[serde(default)]
    pub author: String,

    /// Substring filter on title; empty matches every record.
    #[serde(default)]
    pub title: String,

    /// Maximum number of records to return, between 1 and 50.
    pub page_size: i64,

    /// Token from the previous page, or empty for the first page.
    #[serde(default)]
    pub page_token: String,
}

/// One page of listing results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListBooksResponse {
    /// Records in creation-time order.
    pub books: Vec<Book>,

    /// Token for the next page; empty when this page was not full.
    #[serde(default)]
    pub next_page_token: String,
}
