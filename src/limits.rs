//! Size limit constants for input validation

/// Maximum length for a JWT token string (64KB)
pub(crate) const MAX_TOKEN_LENGTH: usize = 64 * 1024;

/// Maximum length for the algorithm (alg) value (16 bytes)
/// Algorithm names are short (e.g., "HS256", "ES512")
pub(crate) const MAX_ALG_LENGTH: usize = 16;

/// Maximum size for decoded signature bytes (1KB)
/// RSA-8192 signatures are 1024 bytes, everything else is smaller
pub(crate) const MAX_DECODED_SIGNATURE_SIZE: usize = 1024;
