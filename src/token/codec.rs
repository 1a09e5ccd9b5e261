//! Compact serialization: `<header>.<claims>[.<signature>]`
//!
//! Header and claims are unpadded Base64URL encodings of flat JSON objects.

use crate::error::{Error, Result};
use crate::limits::MAX_TOKEN_LENGTH;
use crate::utils::base64url;

use serde_json::Value;
use std::collections::BTreeMap;

/// The three segments of a compact token, borrowed from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Segments<'a> {
    pub(crate) header: &'a str,
    pub(crate) claims: &'a str,
    pub(crate) signature: &'a str,
}

impl Segments<'_> {
    /// `<header>.<claims>`, exactly as it appeared on the wire
    pub(crate) fn signing_input(&self) -> String {
        signing_input(self.header, self.claims)
    }
}

/// Split a token into its segments
///
/// The first `.` is required. Without a second `.` the signature is empty.
/// Everything after the second `.` is the signature, further dots included.
pub(crate) fn split(token: &str) -> Result<Segments<'_>> {
    if token.len() > MAX_TOKEN_LENGTH {
        return Err(Error::TokenTooLarge {
            size: token.len(),
            max: MAX_TOKEN_LENGTH,
        });
    }

    let (header, rest) = token.split_once('.').ok_or(Error::MalformedToken)?;
    let (claims, signature) = rest.split_once('.').unwrap_or((rest, ""));

    Ok(Segments {
        header,
        claims,
        signature,
    })
}

pub(crate) fn signing_input(header: &str, claims: &str) -> String {
    let mut input = String::with_capacity(header.len() + claims.len() + 1);
    input.push_str(header);
    input.push('.');
    input.push_str(claims);
    input
}

/// Serialize a flat map and Base64URL-encode it
pub(crate) fn encode_segment(map: &BTreeMap<String, String>) -> Result<String> {
    let json = serde_json::to_string(map)
        .map_err(|e| Error::FormatInvalidJson(format!("Failed to serialize: {e}")))?;
    Ok(base64url::encode(&json))
}

/// Base64URL-decode a segment and parse it as a flat JSON object
///
/// Numbers and booleans are kept as their JSON text. Nested values and
/// `null` are rejected.
pub(crate) fn decode_segment(segment: &str, what: &str) -> Result<BTreeMap<String, String>> {
    let json = base64url::decode(segment)?;
    let value: Value = serde_json::from_str(&json)
        .map_err(|e| Error::FormatInvalidJson(format!("Failed to parse {what}: {e}")))?;

    let Value::Object(object) = value else {
        return Err(Error::FormatInvalidJson(format!(
            "{what} is not a JSON object"
        )));
    };

    object
        .into_iter()
        .map(|(name, value)| {
            let value = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null | Value::Array(_) | Value::Object(_) => {
                    return Err(Error::FormatInvalidJson(format!(
                        "{what} field '{name}' is not a string"
                    )))
                }
            };
            Ok((name, value))
        })
        .collect()
}
