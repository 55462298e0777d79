//! Error types for the books service.
//!
//! This module provides a unified error type with explicit variants for
//! validation, page-token, and storage failures, together with the
//! transport-level code each failure class maps to.

use thiserror::Error;

/// The unified error type for books operations.
///
/// Lower layers never swallow errors; each variant carries enough context
/// (offending field, operation name) for the caller to diagnose without
/// exposing internal query text.
#[derive(Debug, Error)]
pub enum Error {
    /// Request validation failures (client-caused, never retried).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Malformed pagination cursor (client-caused).
    #[error("invalid page token: {0}")]
    PageToken(#[from] PageTokenError),

    /// Storage failures (connectivity, constraint violation, corrupt rows).
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Transport-level status code for an [`Error`].
///
/// The remote-procedure transport itself is an external collaborator; these
/// are the codes it is expected to carry for each failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The request was rejected before any side effect.
    InvalidArgument,
    /// A point lookup matched no record.
    NotFound,
    /// The backing store refused or failed the operation.
    FailedPrecondition,
}

impl Error {
    /// Returns the transport code this error maps to.
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::Validation(_) | Error::PageToken(_) => ErrorCode::InvalidArgument,
            Error::Storage(StorageError::NotFound { .. }) => ErrorCode::NotFound,
            Error::Storage(_) => ErrorCode::FailedPrecondition,
        }
    }
}

/// Request validation errors.
///
/// Checks run in a fixed order and stop at the first failure, so an error
/// always names the first offending field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A mandatory field was empty.
    #[error("{field} must not be empty")]
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A field exceeded its maximum length.
    #[error("{field} must not exceed {max} characters")]
    FieldTooLong {
        /// Name of the offending field.
        field: &'static str,
        /// Maximum allowed length in bytes.
        max: usize,
    },

    /// Page size outside the allowed range.
    #[error("page_size must be greater than zero and not exceed {max}, got {got}")]
    InvalidPageSize {
        /// Maximum allowed page size.
        max: i64,
        /// The rejected value.
        got: i64,
    },
}

/// Pagination cursor errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageTokenError {
    /// The token is not valid base64.
    #[error("page token {token:?} is not valid base64: {reason}")]
    InvalidEncoding {
        /// The rejected token.
        token: String,
        /// Why decoding failed.
        reason: String,
    },

    /// The decoded token is not a non-negative decimal offset.
    #[error("page token {token:?} does not decode to an offset: {reason}")]
    InvalidOffset {
        /// The rejected token.
        token: String,
        /// Why parsing failed.
        reason: String,
    },
}

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Point lookup matched no row.
    #[error("book {id:?} not found")]
    NotFound {
        /// The id that was looked up.
        id: String,
    },

    /// Insert violated the primary-key constraint.
    #[error("book {id:?} already exists")]
    AlreadyExists {
        /// The duplicate id.
        id: String,
    },

    /// The database could not be opened or reached.
    #[error("connection failed: {message}")]
    Connection {
        /// Driver-level detail.
        message: String,
    },

    /// A statement failed to execute.
    #[error("query failed during {operation}: {message}")]
    Query {
        /// The store operation that issued the statement.
        operation: &'static str,
        /// Driver-level detail.
        message: String,
    },

    /// A stored row could not be read back into a record.
    #[error("corrupt row for book {id:?}: {message}")]
    CorruptRow {
        /// Id of the unreadable row.
        id: String,
        /// What failed to parse.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_invalid_argument() {
        let err = Error::from(ValidationError::EmptyField { field: "author" });
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
    }

    #[test]
    fn page_token_maps_to_invalid_argument() {
        let err = Error::from(PageTokenError::InvalidEncoding {
            token: "!!".to_string(),
            reason: "bad".to_string(),
        });
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
    }

    #[test]
    fn missing_row_maps_to_not_found() {
        let err = Error::from(StorageError::NotFound {
            id: "01ARZ".to_string(),
        });
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[test]
    fn other_storage_failures_map_to_failed_precondition() {
        let duplicate = Error::from(StorageError::AlreadyExists {
            id: "01ARZ".to_string(),
        });
        assert_eq!(duplicate.code(), ErrorCode::FailedPrecondition);

        let connection = Error::from(StorageError::Connection {
            message: "refused".to_string(),
        });
        assert_eq!(connection.code(), ErrorCode::FailedPrecondition);
    }

    #[test]
    fn validation_message_names_field() {
        let err = ValidationError::FieldTooLong {
            field: "title",
            max: 255,
        };
        assert_eq!(err.to_string(), "title must not exceed 255 characters");
    }
}
