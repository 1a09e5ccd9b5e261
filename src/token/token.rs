use crate::algorithm::Algorithm;
use crate::claims::{first_failure, Claims, Header, Validator};
use crate::error::{Error, Result};
use crate::keys::Key;
use crate::token::codec;

/// A token: algorithm, header and claims
///
/// A `Token` comes out of exactly one of three flows:
///
/// - [`Token::new`] builds one in memory from trusted application data
/// - [`Token::parse`] decodes wire data without checking anything. Its
///   contents are attacker-controlled and must not drive trust decisions
/// - [`Token::decode_verified`] checks the signature and runs the
///   validators, and only then returns the token
///
/// ```ignore
/// use jwtkit::*;
///
/// let claims = Claims::from([("sub".to_string(), "123".to_string())]);
/// let jwt = Token::new(Algorithm::HS256, claims, Header::new()).encode("secret")?;
///
/// let key = Key::new(Algorithm::HS256, "secret")?;
/// let token = Token::decode_verified(&jwt, &key, &[validate::sub("123")])?;
/// assert_eq!(token.claim("sub"), "123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    algorithm: Algorithm,
    header: Header,
    claims: Claims,
}

impl Token {
    /// Build a token
    ///
    /// `typ` is set to `JWT` and `alg` to the algorithm name, replacing any
    /// values the caller put in `header`.
    pub fn new(algorithm: Algorithm, claims: Claims, mut header: Header) -> Self {
        header.insert("typ".to_string(), "JWT".to_string());
        header.insert("alg".to_string(), algorithm.to_string());
        Self {
            algorithm,
            header,
            claims,
        }
    }

    /// Decode a token without verifying it
    ///
    /// The algorithm comes from the header's `alg` and falls back to `none`
    /// when it is absent or empty. The signature segment is ignored.
    ///
    /// # Errors
    ///
    /// - [`Error::MalformedToken`] / [`Error::TokenTooLarge`] for bad structure
    /// - [`Error::FormatInvalidBase64`] / [`Error::FormatInvalidJson`] for bad segments
    /// - [`Error::InvalidAlgorithm`] for an unknown `alg`
    pub fn parse(token: &str) -> Result<Self> {
        let segments = codec::split(token)?;
        let header = codec::decode_segment(segments.header, "header")?;
        let claims = codec::decode_segment(segments.claims, "claims")?;

        let algorithm = match header.get("alg").map(String::as_str) {
            None | Some("") => Algorithm::None,
            Some(alg) => alg.parse()?,
        };

        Ok(Self {
            algorithm,
            header,
            claims,
        })
    }

    /// Verify a token's signature and claims
    ///
    /// The signature is checked with `key` before any claim is looked at.
    /// Validators then run in order and the first rejection stops the
    /// check. The returned token carries the key's algorithm; the header's
    /// `alg` is not consulted.
    ///
    /// # Errors
    ///
    /// - [`Error::SignatureInvalid`] if the signature does not match
    /// - [`Error::ValidationFailed`] with the index of the rejecting validator
    /// - codec errors as for [`Token::parse`]
    pub fn decode_verified(token: &str, key: &Key, validators: &[Validator]) -> Result<Self> {
        let segments = codec::split(token)?;

        if !key.verify(segments.signing_input().as_bytes(), segments.signature) {
            tracing::debug!(algorithm = %key.algorithm(), "token signature mismatch");
            return Err(Error::SignatureInvalid);
        }

        let header = codec::decode_segment(segments.header, "header")?;
        let claims = codec::decode_segment(segments.claims, "claims")?;

        if let Some(index) = first_failure(&claims, validators) {
            tracing::debug!(index, "token claims rejected by validator");
            return Err(Error::ValidationFailed { index });
        }

        Ok(Self {
            algorithm: key.algorithm(),
            header,
            claims,
        })
    }

    /// Verify a token, reporting only success or failure
    ///
    /// Same checks as [`Token::decode_verified`].
    pub fn verify(token: &str, key: &Key, validators: &[Validator]) -> bool {
        Self::decode_verified(token, key, validators).is_ok()
    }

    /// Encode and sign with a key built from `key_material`
    ///
    /// The key is built for this token's algorithm, see [`Key::new`].
    pub fn encode(&self, key_material: &str) -> Result<String> {
        let key = Key::new(self.algorithm, key_material)?;
        self.encode_with(&key)
    }

    /// Encode and sign with an existing key
    ///
    /// `none` tokens have no signature segment: `<header>.<claims>`.
    ///
    /// # Errors
    ///
    /// [`Error::KeyTypeMismatch`] if `key` was built for another algorithm,
    /// plus any signing error from [`Key::sign`].
    pub fn encode_with(&self, key: &Key) -> Result<String> {
        if key.algorithm() != self.algorithm {
            return Err(Error::KeyTypeMismatch {
                algorithm: self.algorithm.to_string(),
                expected: format!("{} key", self.algorithm),
                actual: format!("{} key", key.algorithm()),
            });
        }

        let header = codec::encode_segment(&self.header)?;
        let claims = codec::encode_segment(&self.claims)?;
        let mut token = codec::signing_input(&header, &claims);

        let signature = key.sign(token.as_bytes())?;
        if !signature.is_empty() {
            token.push('.');
            token.push_str(&signature);
        }

        Ok(token)
    }

    /// Get a claim value, or `""` when absent
    pub fn claim(&self, name: &str) -> &str {
        self.claims.get(name).map_or("", String::as_str)
    }

    /// Get a header value, or `""` when absent
    pub fn header_value(&self, name: &str) -> &str {
        self.header.get(name).map_or("", String::as_str)
    }

    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
}
