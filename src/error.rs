//! Errors for jwtkit
//!
//! Two reporting conventions exist side by side: the `Result`-returning
//! paths (`Token::parse`, `Token::decode_verified`, `Key::new`) report the
//! specific kind below, while `Token::verify` collapses every failure into
//! `false`.

use thiserror::Error;

/// jwtkit errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Malformed JWT: expected at least two parts separated by '.'")]
    MalformedToken,

    #[error("Token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },

    #[error("Base64URL decoding failed: {0}")]
    FormatInvalidBase64(String),

    #[error("JSON parsing failed: {0}")]
    FormatInvalidJson(String),

    // ============================================================================
    // Algorithm Errors
    // ============================================================================
    #[error("Invalid algorithm name: '{0}'")]
    InvalidAlgorithm(String),

    #[error("Algorithm '{0}' is not enabled in this build")]
    AlgorithmUnsupported(String),

    // ============================================================================
    // Key Errors
    // ============================================================================
    #[error("Invalid key: {0}")]
    KeyInvalid(String),

    #[error("Key type mismatch for algorithm '{algorithm}': expected {expected}, got {actual}")]
    KeyTypeMismatch {
        algorithm: String,
        expected: String,
        actual: String,
    },

    #[error("Key for '{0}' holds no private part and cannot sign")]
    KeyCannotSign(String),

    #[error("Signing failed: {0}")]
    SigningFailed(String),

    // ============================================================================
    // Verification Errors
    // ============================================================================
    #[error("Signature is invalid")]
    SignatureInvalid,

    #[error("Invalid token: validator #{index} rejected the claims")]
    ValidationFailed { index: usize },
}

/// Result type alias for jwtkit operations
pub type Result<T> = std::result::Result<T, Error>;
