//! Request validation.
//!
//! Pure checks over incoming requests, no side effects. Checks run in a
//! fixed order (request_id, author, title, id) and return on the first
//! failure; callers must not assume all errors are collected.

use crate::error::ValidationError;
use crate::types::{CreateBookRequest, ListBooksRequest};

/// Maximum length of a book id, in bytes.
pub const ID_MAX_LEN: usize = 30;
/// Maximum length of the create request idempotency token, in bytes.
pub const REQUEST_ID_MAX_LEN: usize = 30;
/// Maximum length of the author field, in bytes.
pub const AUTHOR_MAX_LEN: usize = 255;
/// Maximum length of the title field, in bytes.
pub const TITLE_MAX_LEN: usize = 255;
/// Maximum page size for listing.
pub const MAX_PAGE_SIZE: i64 = 50;

/// Validate a create request.
///
/// Returns an error unless all of the following hold:
/// - request_id is non-empty and at most [`REQUEST_ID_MAX_LEN`] bytes;
/// - author is non-empty and at most [`AUTHOR_MAX_LEN`] bytes;
/// - title is non-empty and at most [`TITLE_MAX_LEN`] bytes;
/// - id, when supplied, is at most [`ID_MAX_LEN`] bytes (an absent or empty
///   id is accepted; the service assigns one).
pub fn validate_create(req: &CreateBookRequest) -> Result<(), ValidationError> {
    check_required("request_id", &req.request_id, REQUEST_ID_MAX_LEN)?;
    check_required("author", &req.book.author, AUTHOR_MAX_LEN)?;
    check_required("title", &req.book.title, TITLE_MAX_LEN)?;

    if let Some(id) = &req.book.id {
        if id.len() > ID_MAX_LEN {
            return Err(ValidationError::FieldTooLong {
                field: "id",
                max: ID_MAX_LEN,
            });
        }
    }

    Ok(())
}

/// Validate a list request: page_size must be within 1..=[`MAX_PAGE_SIZE`].
pub fn validate_list(req: &ListBooksRequest) -> Result<(), ValidationError> {
    if req.page_size < 1 || req.page_size > MAX_PAGE_SIZE {
        return Err(ValidationError::InvalidPageSize {
            max: MAX_PAGE_SIZE,
            got: req.page_size,
        });
    }
    Ok(())
}

fn check_required(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    if value.len() > max {
        return Err(ValidationError::FieldTooLong { field, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BookDraft;

    fn string_of_len(len: usize) -> String {
        "a".repeat(len)
    }

    fn valid_request() -> CreateBookRequest {
        CreateBookRequest {
            book: BookDraft {
                id: None,
                title: "title".to_string(),
                author: "author".to_string(),
                creation_time: None,
            },
            request_id: "req-1".to_string(),
        }
    }

    #[test]
    fn accepts_valid_request() {
        assert_eq!(validate_create(&valid_request()), Ok(()));
    }

    #[test]
    fn accepts_fields_at_maximum_length() {
        let mut req = valid_request();
        req.request_id = string_of_len(REQUEST_ID_MAX_LEN);
        req.book.author = string_of_len(AUTHOR_MAX_LEN);
        req.book.title = string_of_len(TITLE_MAX_LEN);
        req.book.id = Some(string_of_len(ID_MAX_LEN));
        assert_eq!(validate_create(&req), Ok(()));
    }

    #[test]
    fn rejects_empty_request_id() {
        let mut req = valid_request();
        req.request_id = String::new();
        assert_eq!(
            validate_create(&req),
            Err(ValidationError::EmptyField {
                field: "request_id"
            })
        );
    }

    #[test]
    fn rejects_overlong_request_id() {
        let mut req = valid_request();
        req.request_id = string_of_len(REQUEST_ID_MAX_LEN + 1);
        assert_eq!(
            validate_create(&req),
            Err(ValidationError::FieldTooLong {
                field: "request_id",
                max: REQUEST_ID_MAX_LEN
            })
        );
    }

    #[test]
    fn rejects_empty_author() {
        let mut req = valid_request();
        req.book.author = String::new();
        assert_eq!(
            validate_create(&req),
            Err(ValidationError::EmptyField { field: "author" })
        );
    }

    #[test]
    fn rejects_author_one_byte_over_limit() {
        let mut req = valid_request();
        req.book.author = string_of_len(AUTHOR_MAX_LEN + 1);
        assert_eq!(
            validate_create(&req),
            Err(ValidationError::FieldTooLong {
                field: "author",
                max: AUTHOR_MAX_LEN
            })
        );
    }

    #[test]
    fn rejects_empty_title() {
        let mut req = valid_request();
        req.book.title = String::new();
        assert_eq!(
            validate_create(&req),
            Err(ValidationError::EmptyField { field: "title" })
        );
    }

    #[test]
    fn rejects_title_one_byte_over_limit() {
        let mut req = valid_request();
        req.book.title = string_of_len(TITLE_MAX_LEN + 1);
        assert_eq!(
            validate_create(&req),
            Err(ValidationError::FieldTooLong {
                field: "title",
                max: TITLE_MAX_LEN
            })
        );
    }

    #[test]
    fn accepts_absent_and_empty_id() {
        let mut req = valid_request();
        req.book.id = None;
        assert_eq!(validate_create(&req), Ok(()));

        req.book.id = Some(String::new());
        assert_eq!(validate_create(&req), Ok(()));
    }

    #[test]
    fn rejects_overlong_id() {
        let mut req = valid_request();
        req.book.id = Some(string_of_len(ID_MAX_LEN + 1));
        assert_eq!(
            validate_create(&req),
            Err(ValidationError::FieldTooLong {
                field: "id",
                max: ID_MAX_LEN
            })
        );
    }

    #[test]
    fn first_failing_field_wins() {
        // Both request_id and author are invalid; the reported field must
        // be request_id because checks run in a fixed order.
        let mut req = valid_request();
        req.request_id = String::new();
        req.book.author = String::new();
        assert_eq!(
            validate_create(&req),
            Err(ValidationError::EmptyField {
                field: "request_id"
            })
        );
    }

    #[test]
    fn page_size_bounds() {
        let mut req = ListBooksRequest {
            page_size: 1,
            ..Default::default()
        };
        assert_eq!(validate_list(&req), Ok(()));

        req.page_size = MAX_PAGE_SIZE;
        assert_eq!(validate_list(&req), Ok(()));

        req.page_size = 0;
        assert_eq!(
            validate_list(&req),
            Err(ValidationError::InvalidPageSize {
                max: MAX_PAGE_SIZE,
                got: 0
            })
        );

        req.page_size = MAX_PAGE_SIZE + 1;
        assert_eq!(
            validate_list(&req),
            Err(ValidationError::InvalidPageSize {
                max: MAX_PAGE_SIZE,
                got: 51
            })
        );

        req.page_size = -3;
        assert!(validate_list(&req).is_err());
    }
}
