//! Algorithm registry and per-family signing glue

pub(crate) mod hmac;

#[cfg(feature = "rsa")]
pub(crate) mod rsa;

#[cfg(feature = "ecdsa")]
pub(crate) mod ecdsa;

use crate::error::{Error, Result};
use crate::limits::MAX_ALG_LENGTH;

/// Algorithm identifier carried in the `alg` header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Unsigned token, no integrity protection
    None,

    /// HMAC with SHA-256
    HS256,

    /// HMAC with SHA-384
    HS384,

    /// HMAC with SHA-512
    HS512,

    /// RSASSA-PKCS1-v1_5 with SHA-256
    RS256,

    /// RSASSA-PKCS1-v1_5 with SHA-384
    RS384,

    /// RSASSA-PKCS1-v1_5 with SHA-512
    RS512,

    /// ECDSA with P-256 and SHA-256
    ES256,

    /// ECDSA with P-384 and SHA-384
    ES384,

    /// ECDSA with P-521 and SHA-512
    ES512,
}

/// Signing family an algorithm belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmFamily {
    None,
    Hmac,
    Rsa,
    Ecdsa,
}

/// Digest used by an algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Digest {
    Sha256,
    Sha384,
    Sha512,
}

impl Algorithm {
    /// Every algorithm, in declaration order
    pub const ALL: [Algorithm; 10] = [
        Algorithm::None,
        Algorithm::HS256,
        Algorithm::HS384,
        Algorithm::HS512,
        Algorithm::RS256,
        Algorithm::RS384,
        Algorithm::RS512,
        Algorithm::ES256,
        Algorithm::ES384,
        Algorithm::ES512,
    ];

    /// Canonical, case-sensitive name
    pub const fn as_str(&self) -> &'static str {
        match self {
            Algorithm::None => "none",
            Algorithm::HS256 => "HS256",
            Algorithm::HS384 => "HS384",
            Algorithm::HS512 => "HS512",
            Algorithm::RS256 => "RS256",
            Algorithm::RS384 => "RS384",
            Algorithm::RS512 => "RS512",
            Algorithm::ES256 => "ES256",
            Algorithm::ES384 => "ES384",
            Algorithm::ES512 => "ES512",
        }
    }

    pub const fn family(&self) -> AlgorithmFamily {
        match self {
            Algorithm::None => AlgorithmFamily::None,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => AlgorithmFamily::Hmac,
            Algorithm::RS256 | Algorithm::RS384 | Algorithm::RS512 => AlgorithmFamily::Rsa,
            Algorithm::ES256 | Algorithm::ES384 | Algorithm::ES512 => AlgorithmFamily::Ecdsa,
        }
    }

    /// Check if this is the unsigned `none` algorithm
    pub const fn is_none(&self) -> bool {
        matches!(self, Algorithm::None)
    }

    /// Check if algorithm is HMAC-based (symmetric)
    pub const fn is_symmetric(&self) -> bool {
        matches!(self.family(), AlgorithmFamily::Hmac)
    }

    /// Check if algorithm is asymmetric (RSA/ECDSA)
    pub const fn is_asymmetric(&self) -> bool {
        matches!(self.family(), AlgorithmFamily::Rsa | AlgorithmFamily::Ecdsa)
    }

    /// Digest selected by the algorithm, `None` for the unsigned algorithm
    pub(crate) const fn digest(&self) -> Option<Digest> {
        match self {
            Algorithm::None => None,
            Algorithm::HS256 | Algorithm::RS256 | Algorithm::ES256 => Some(Digest::Sha256),
            Algorithm::HS384 | Algorithm::RS384 | Algorithm::ES384 => Some(Digest::Sha384),
            Algorithm::HS512 | Algorithm::RS512 | Algorithm::ES512 => Some(Digest::Sha512),
        }
    }
}

impl std::str::FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.len() > MAX_ALG_LENGTH {
            return Err(Error::InvalidAlgorithm(format!(
                "{}... ({} bytes)",
                s.chars().take(MAX_ALG_LENGTH).collect::<String>(),
                s.len()
            )));
        }

        Algorithm::ALL
            .into_iter()
            .find(|alg| alg.as_str() == s)
            .ok_or_else(|| Error::InvalidAlgorithm(s.to_string()))
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Algorithm {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Convert an algorithm to its canonical name
pub fn alg_to_string(alg: Algorithm) -> String {
    alg.as_str().to_string()
}

/// Parse a canonical algorithm name, exact case
pub fn string_to_alg(value: &str) -> Result<Algorithm> {
    value.parse()
}
