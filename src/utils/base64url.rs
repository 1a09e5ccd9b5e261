//! Base64URL encoding/decoding per RFC 4648 §5
//!
//! This module provides a thin wrapper around the `base64` crate. All
//! token segments are unpadded.

use crate::error::{Error, Result};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

/// Encode bytes to Base64URL string
pub fn encode_bytes(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Encode string to Base64URL
pub fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

/// Decode Base64URL string to bytes
pub fn decode_bytes(input: &str) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|e| Error::FormatInvalidBase64(format!("Base64URL decode failed: {e}")))
}

/// Decode Base64URL string to bytes with maximum size limit
pub(crate) fn decode_bytes_bounded(input: &str, max_size: usize) -> Result<Vec<u8>> {
    // Four characters carry three bytes, reject oversized input before decoding
    if input.len() / 4 * 3 > max_size {
        return Err(Error::FormatInvalidBase64(format!(
            "Decoded size exceeds limit of {max_size} bytes"
        )));
    }
    decode_bytes(input)
}

/// Decode Base64URL string to UTF-8 string
pub fn decode(input: &str) -> Result<String> {
    String::from_utf8(decode_bytes(input)?)
        .map_err(|e| Error::FormatInvalidBase64(format!("Invalid UTF-8: {e}")))
}
