mod validator;

pub use validator::{first_failure, validate, validate_all, Validator};

use std::collections::BTreeMap;

/// Token claims: claim name to string value
///
/// Registered claims ([RFC 7519 Section 4.1](https://datatracker.ietf.org/doc/html/rfc7519#section-4.1))
/// share the map with application claims. Timestamps (`exp`, `nbf`, `iat`)
/// are stored as decimal strings like every other value.
///
/// ```ignore
/// use jwtkit::*;
///
/// let claims = Claims::from([
///     ("sub".to_string(), "123".to_string()),
///     ("exp".to_string(), "1700000000".to_string()),
/// ]);
/// ```
pub type Claims = BTreeMap<String, String>;

/// Token header: field name to string value
pub type Header = BTreeMap<String, String>;
