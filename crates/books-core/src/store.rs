//! Record store trait.

use async_trait::async_trait;

use crate::Result;
use crate::types::Book;

/// Persistence operations for book records.
///
/// Implementations exclusively own the persisted state. Field validation is
/// the caller's responsibility; the store only enforces id uniqueness via
/// its primary key.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Append one record keyed by its id.
    ///
    /// Fails on a duplicate id or a connectivity failure.
    async fn insert(&self, book: &Book) -> Result<()>;

    /// Point lookup by id. A miss is a distinct not-found error.
    async fn get(&self, id: &str) -> Result<Book>;

    /// One page of a filtered scan.
    ///
    /// Filters are substring matches; an empty filter is unconstrained, not
    /// a literal empty-string match. Results are ordered by creation time
    /// ascending and contain at most `limit` records starting at `offset`.
    async fn list(
        &self,
        author: &str,
        title: &str,
        limit: i64,
        offset: u64,
    ) -> Result<Vec<Book>>;
}
