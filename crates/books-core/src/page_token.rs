//! Opaque page-token codec.
//!
//! A token is the standard base64 encoding of a decimal scan offset. The
//! empty string is the canonical form for offset zero, so the first page of
//! a listing needs no token and an exhausted listing returns none.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::PageTokenError;

/// Decode a page token into a scan offset.
///
/// The empty token decodes to offset zero. Anything else must be valid
/// base64 wrapping a base-10 non-negative integer.
pub fn decode(token: &str) -> Result<u64, PageTokenError> {
    if token.is_empty() {
        return Ok(0);
    }

    let bytes = STANDARD
        .decode(token)
        .map_err(|e| PageTokenError::InvalidEncoding {
            token: token.to_string(),
            reason: e.to_string(),
        })?;

    let text = String::from_utf8(bytes).map_err(|e| PageTokenError::InvalidOffset {
        token: token.to_string(),
        reason: e.to_string(),
    })?;

    text.parse::<u64>().map_err(|e| PageTokenError::InvalidOffset {
        token: token.to_string(),
        reason: e.to_string(),
    })
}

/// Encode a scan offset into a page token.
///
/// Offset zero encodes to the empty string, keeping
/// `encode(decode(t)) == t` for every well-formed token.
pub fn encode(offset: u64) -> String {
    if offset == 0 {
        return String::new();
    }
    STANDARD.encode(offset.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    #[test]
    fn empty_token_is_offset_zero() {
        assert_eq!(decode("").unwrap(), 0);
        assert_eq!(encode(0), "");
    }

    #[test]
    fn offset_ten_encodes_to_known_token() {
        assert_eq!(encode(10), "MTA=");
        assert_eq!(decode("MTA=").unwrap(), 10);
    }

    #[test]
    fn roundtrip() {
        for offset in [0u64, 1, 10, 1_000_000] {
            assert_eq!(decode(&encode(offset)).unwrap(), offset);
        }
    }

    #[test]
    fn rejects_invalid_base64() {
        let err = decode("not base64!!").unwrap_err();
        assert!(matches!(err, PageTokenError::InvalidEncoding { .. }));
    }

    #[test]
    fn rejects_non_numeric_payload() {
        // "aGVsbG8=" is base64 for "hello".
        let err = decode("aGVsbG8=").unwrap_err();
        assert!(matches!(err, PageTokenError::InvalidOffset { .. }));
    }

    #[test]
    fn rejects_negative_payload() {
        let token = STANDARD.encode("-1");
        let err = decode(&token).unwrap_err();
        assert!(matches!(err, PageTokenError::InvalidOffset { .. }));
    }
}
