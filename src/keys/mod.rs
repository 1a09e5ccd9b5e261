//! Signing and verification keys
//!
//! A `Key` binds one algorithm to one signing strategy, chosen when the key
//! is built and never changed afterwards:
//! - `none`: signs with an empty signature, accepts any signature
//! - HMAC (HS*): shared secret
//! - Asymmetric (RS*/ES*): PEM-encoded RSA or EC key

#[cfg(feature = "asymmetric")]
pub(crate) mod pem;

use crate::algorithm::{self, Algorithm, AlgorithmFamily, Digest};
use crate::error::{Error, Result};

#[cfg(feature = "ecdsa")]
use crate::algorithm::ecdsa::EcdsaKey;
#[cfg(feature = "rsa")]
use crate::algorithm::rsa::RsaKey;

/// A key that signs and verifies tokens for one algorithm
///
/// Keys are move-only: key material is never duplicated. All methods take
/// `&self`, so one key may serve concurrent callers.
pub struct Key {
    algorithm: Algorithm,
    strategy: Strategy,
}

enum Strategy {
    /// Unsigned tokens
    None,

    /// Shared secret for HMAC algorithms
    Hmac { digest: Digest, secret: Vec<u8> },

    /// PEM key for RSA/ECDSA algorithms
    #[cfg(feature = "asymmetric")]
    Asymmetric(AsymmetricKey),
}

#[cfg(feature = "asymmetric")]
enum AsymmetricKey {
    #[cfg(feature = "rsa")]
    Rsa(RsaKey),

    #[cfg(feature = "ecdsa")]
    Ecdsa(EcdsaKey),
}

impl Key {
    /// Build a key for `algorithm` from key material
    ///
    /// For HS* algorithms the material is the shared secret; for RS*/ES*
    /// it is a PEM document. The material is ignored for `none`.
    ///
    /// # Errors
    ///
    /// - [`Error::KeyInvalid`] if the PEM cannot be read or is rejected
    /// - [`Error::KeyTypeMismatch`] if the PEM holds a key of the other family
    /// - [`Error::AlgorithmUnsupported`] if the family is compiled out
    pub fn new(algorithm: Algorithm, key_material: &str) -> Result<Self> {
        let strategy = match algorithm.family() {
            AlgorithmFamily::None => {
                tracing::warn!("building a key for the unsigned 'none' algorithm");
                Strategy::None
            }
            AlgorithmFamily::Hmac => Strategy::Hmac {
                digest: algorithm
                    .digest()
                    .ok_or_else(|| Error::AlgorithmUnsupported(algorithm.to_string()))?,
                secret: key_material.as_bytes().to_vec(),
            },
            AlgorithmFamily::Rsa | AlgorithmFamily::Ecdsa => {
                asymmetric_strategy(algorithm, key_material)?
            }
        };

        tracing::debug!(algorithm = %algorithm, "key constructed");
        Ok(Self {
            algorithm,
            strategy,
        })
    }

    /// Get the algorithm this key was built for
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Sign `data`, returning the signature segment
    ///
    /// Returns an empty string for `none`. Otherwise the result is the
    /// Base64URL encoding of the raw signature.
    ///
    /// # Errors
    ///
    /// [`Error::KeyCannotSign`] when an asymmetric key was loaded from a
    /// public-key PEM, [`Error::SigningFailed`] if the backend fails.
    pub fn sign(&self, data: &[u8]) -> Result<String> {
        match &self.strategy {
            Strategy::None => Ok(String::new()),
            Strategy::Hmac { digest, secret } => algorithm::hmac::sign(*digest, secret, data),
            #[cfg(feature = "asymmetric")]
            Strategy::Asymmetric(key) => key.sign(data),
        }
    }

    /// Check a signature segment against `data`
    ///
    /// The `none` key accepts every signature, including an empty one.
    /// Such tokens carry no integrity guarantee and must not back trust
    /// decisions.
    pub fn verify(&self, data: &[u8], signature: &str) -> bool {
        match &self.strategy {
            Strategy::None => true,
            Strategy::Hmac { digest, secret } => {
                algorithm::hmac::verify(*digest, secret, data, signature)
            }
            #[cfg(feature = "asymmetric")]
            Strategy::Asymmetric(key) => key.verify(data, signature),
        }
    }
}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let strategy = match &self.strategy {
            Strategy::None => "None",
            Strategy::Hmac { .. } => "Hmac",
            #[cfg(feature = "asymmetric")]
            Strategy::Asymmetric(_) => "Asymmetric",
        };
        f.debug_struct("Key")
            .field("algorithm", &self.algorithm)
            .field("strategy", &strategy)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "asymmetric")]
fn asymmetric_strategy(algorithm: Algorithm, key_material: &str) -> Result<Strategy> {
    use self::pem::{PemKey, PemKeyType};

    // A compiled-out family is unsupported whatever the key material holds
    let enabled = match algorithm.family() {
        AlgorithmFamily::Rsa => cfg!(feature = "rsa"),
        AlgorithmFamily::Ecdsa => cfg!(feature = "ecdsa"),
        _ => false,
    };
    if !enabled {
        return Err(Error::AlgorithmUnsupported(algorithm.to_string()));
    }

    crate::backend::init();

    let pem = PemKey::parse(key_material)?;
    let expected = match algorithm.family() {
        AlgorithmFamily::Rsa => PemKeyType::Rsa,
        _ => PemKeyType::Ec,
    };
    if pem.key_type() != expected {
        tracing::debug!(
            algorithm = %algorithm,
            found = pem.key_type().name(),
            "PEM key family does not match algorithm"
        );
        return Err(Error::KeyTypeMismatch {
            algorithm: algorithm.to_string(),
            expected: expected.name().to_string(),
            actual: pem.key_type().name().to_string(),
        });
    }

    let key = match expected {
        #[cfg(feature = "rsa")]
        PemKeyType::Rsa => AsymmetricKey::Rsa(RsaKey::from_pem(algorithm, pem)?),
        #[cfg(feature = "ecdsa")]
        PemKeyType::Ec => AsymmetricKey::Ecdsa(EcdsaKey::from_pem(algorithm, pem)?),
        #[allow(unreachable_patterns)]
        _ => return Err(Error::AlgorithmUnsupported(algorithm.to_string())),
    };

    Ok(Strategy::Asymmetric(key))
}

#[cfg(not(feature = "asymmetric"))]
fn asymmetric_strategy(algorithm: Algorithm, _key_material: &str) -> Result<Strategy> {
    Err(Error::AlgorithmUnsupported(algorithm.to_string()))
}

#[cfg(feature = "asymmetric")]
impl AsymmetricKey {
    fn sign(&self, data: &[u8]) -> Result<String> {
        match self {
            #[cfg(feature = "rsa")]
            AsymmetricKey::Rsa(key) => key.sign(data),
            #[cfg(feature = "ecdsa")]
            AsymmetricKey::Ecdsa(key) => key.sign(data),
        }
    }

    fn verify(&self, data: &[u8], signature: &str) -> bool {
        match self {
            #[cfg(feature = "rsa")]
            AsymmetricKey::Rsa(key) => key.verify(data, signature),
            #[cfg(feature = "ecdsa")]
            AsymmetricKey::Ecdsa(key) => key.verify(data, signature),
        }
    }
}
