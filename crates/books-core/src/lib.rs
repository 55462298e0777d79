//! books-core - Core types and traits for the books record service.

pub mod error;
pub mod page_token;
pub mod store;
pub mod types;
pub mod validate;

pub use error::{Error, ErrorCode, PageTokenError, StorageError, ValidationError};
pub use store::BookStore;
pub use types::{
    Book, BookDraft, CreateBookRequest, CreateBookResponse, ListBooksRequest, ListBooksResponse,
};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
