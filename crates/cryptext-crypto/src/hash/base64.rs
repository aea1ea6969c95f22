//! Base64 helpers (RFC 4648 standard alphabet, padded)

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{Error, Result};

/// Encode bytes to standard base64 with padding
///
/// # Example
/// ```
/// use cryptext_crypto::base64;
///
/// assert_eq!(base64::encode(b"Hello, World!"), "SGVsbG8sIFdvcmxkIQ==");
/// ```
pub fn encode<T: AsRef<[u8]>>(data: T) -> String {
    STANDARD.encode(data)
}

/// Decode standard padded base64
///
/// ASCII whitespace anywhere in the input is skipped, so line-wrapped
/// (MIME-style) text decodes the same as the unwrapped form.
pub fn decode<T: AsRef<[u8]>>(encoded: T) -> Result<Vec<u8>> {
    let compact: Vec<u8> = encoded
        .as_ref()
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    STANDARD
        .decode(compact)
        .map_err(|e| Error::InvalidBase64(e.to_string()))
}
