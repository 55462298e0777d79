//! The service façade for book operations.

use chrono::Utc;
use tracing::{debug, instrument};

use books_core::types::{
    Book, BookDraft, CreateBookRequest, CreateBookResponse, ListBooksRequest, ListBooksResponse,
};
use books_core::{BookStore, Result, page_token, validate};

use crate::id::IdGenerator;

/// The book service façade.
///
/// Orchestrates validation, default assignment, and storage for writes, and
/// validation, token decoding, and scanning for reads. The store is
/// injected at construction; request-scoped state lives on the call stack,
/// so one façade serves any number of concurrent calls.
#[derive(Debug)]
pub struct BooksService<S> {
    store: S,
    ids: IdGenerator,
}

impl<S> BooksService<S> {
    /// Create a façade over the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            ids: IdGenerator::new(),
        }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fill in server-assigned defaults for a validated draft.
    fn prepare(&self, draft: BookDraft) -> Book {
        let id = match draft.id {
            Some(id) if !id.is_empty() => id,
            _ => self.ids.next_id(),
        };
        let creation_time = draft.creation_time.unwrap_or_else(Utc::now);

        Book {
            id,
            title: draft.title,
            author: draft.author,
            creation_time,
        }
    }
}

impl<S: BookStore> BooksService<S> {
    /// Validate, prepare, and persist one book.
    ///
    /// The response echoes the record as persisted, including any
    /// server-assigned id and creation time. Validation failures map to
    /// invalid-argument; store failures to failed-precondition.
    #[instrument(skip(self, req), fields(request_id = %req.request_id))]
    pub async fn create_book(&self, req: CreateBookRequest) -> Result<CreateBookResponse> {
        validate::validate_create(&req)?;

        // TODO: check request_id against prior submissions once a dedupe
        // table exists; today a retried create inserts a second record.
        let book = self.prepare(req.book);
        self.store.insert(&book).await?;

        debug!(id = %book.id, "Created book");
        Ok(CreateBookResponse { book })
    }

    /// Return one page of a filtered listing.
    ///
    /// A full page mints a next-page token even when the scan is already
    /// exhausted, so a result set whose size is an exact multiple of
    /// page_size ends with one empty page.
    #[instrument(skip(self, req), fields(page_size = req.page_size))]
    pub async fn list_books(&self, req: ListBooksRequest) -> Result<ListBooksResponse> {
        validate::validate_list(&req)?;

        let offset = page_token::decode(&req.page_token)?;
        let books = self
            .store
            .list(&req.author, &req.title, req.page_size, offset)
            .await?;

        let next_page_token = if books.len() as i64 == req.page_size {
            page_token::encode(offset + req.page_size as u64)
        } else {
            String::new()
        };

        debug!(count = books.len(), "Listed books");
        Ok(ListBooksResponse {
            books,
            next_page_token,
        })
    }

    /// Point lookup by id. A miss surfaces as a distinct not-found error.
    #[instrument(skip(self))]
    pub async fn get_book(&self, id: &str) -> Result<Book> {
        self.store.get(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    // prepare() needs no working store.
    struct NoStore;

    #[test]
    fn prepare_assigns_id_and_time_when_absent() {
        let service = BooksService::new(NoStore);
        let before = Utc::now();

        let book = service.prepare(BookDraft {
            id: None,
            title: "T".to_string(),
            author: "A".to_string(),
            creation_time: None,
        });

        assert_eq!(book.id.len(), 26);
        assert!(book.creation_time >= before);
        assert_eq!(book.title, "T");
        assert_eq!(book.author, "A");
    }

    #[test]
    fn prepare_treats_empty_id_as_absent() {
        let service = BooksService::new(NoStore);
        let book = service.prepare(BookDraft {
            id: Some(String::new()),
            title: "T".to_string(),
            author: "A".to_string(),
            creation_time: None,
        });
        assert!(!book.id.is_empty());
    }

    #[test]
    fn prepare_keeps_supplied_fields() {
        let service = BooksService::new(NoStore);
        let t = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

        let book = service.prepare(BookDraft {
            id: Some("custom-id".to_string()),
            title: "T".to_string(),
            author: "A".to_string(),
            creation_time: Some(t),
        });

        assert_eq!(book.id, "custom-id");
        assert_eq!(book.creation_time, t);
    }
}
