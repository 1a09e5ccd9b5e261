use crate::algorithm::{Algorithm, Digest};
use crate::error::{Error, Result};
use crate::keys::pem::{PemEncoding, PemKey};
use crate::limits::MAX_DECODED_SIGNATURE_SIZE;
use crate::utils::base64url;

use aws_lc_rs::rand::SystemRandom;
use aws_lc_rs::signature::{self, EcdsaKeyPair, EcdsaSigningAlgorithm, KeyPair, UnparsedPublicKey};
use spki::ObjectIdentifier;

/// prime256v1 / secp256r1 (RFC 5480)
const P256_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7");

/// secp384r1
const P384_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.34");

/// secp521r1
const P521_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.35");

/// ECDSA curve bound to an ES* algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EcdsaCurve {
    P256,
    P384,
    P521,
}

impl EcdsaCurve {
    fn for_digest(digest: Digest) -> Self {
        match digest {
            Digest::Sha256 => EcdsaCurve::P256,
            Digest::Sha384 => EcdsaCurve::P384,
            Digest::Sha512 => EcdsaCurve::P521,
        }
    }

    fn oid(&self) -> ObjectIdentifier {
        match self {
            EcdsaCurve::P256 => P256_OID,
            EcdsaCurve::P384 => P384_OID,
            EcdsaCurve::P521 => P521_OID,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            EcdsaCurve::P256 => "EC P-256",
            EcdsaCurve::P384 => "EC P-384",
            EcdsaCurve::P521 => "EC P-521",
        }
    }

    /// JWS uses the fixed-length R||S form, not ASN.1 (RFC 7518 §3.4)
    fn signing_algorithm(&self) -> &'static EcdsaSigningAlgorithm {
        match self {
            EcdsaCurve::P256 => &signature::ECDSA_P256_SHA256_FIXED_SIGNING,
            EcdsaCurve::P384 => &signature::ECDSA_P384_SHA384_FIXED_SIGNING,
            EcdsaCurve::P521 => &signature::ECDSA_P521_SHA512_FIXED_SIGNING,
        }
    }

    fn verification_algorithm(&self) -> &'static dyn signature::VerificationAlgorithm {
        match self {
            EcdsaCurve::P256 => &signature::ECDSA_P256_SHA256_FIXED,
            EcdsaCurve::P384 => &signature::ECDSA_P384_SHA384_FIXED,
            EcdsaCurve::P521 => &signature::ECDSA_P521_SHA512_FIXED,
        }
    }
}

/// ECDSA key loaded from PEM for one specific curve
pub(crate) struct EcdsaKey {
    algorithm: Algorithm,
    curve: EcdsaCurve,
    key_pair: Option<EcdsaKeyPair>,
    public_key: Vec<u8>,
}

impl EcdsaKey {
    pub(crate) fn from_pem(algorithm: Algorithm, pem: PemKey) -> Result<Self> {
        let digest = algorithm
            .digest()
            .ok_or_else(|| Error::AlgorithmUnsupported(algorithm.to_string()))?;
        let curve = EcdsaCurve::for_digest(digest);

        if let Some(found) = pem.curve() {
            if found != curve.oid() {
                return Err(Error::KeyTypeMismatch {
                    algorithm: algorithm.to_string(),
                    expected: curve.name().to_string(),
                    actual: format!("EC curve {found}"),
                });
            }
        }

        let rejected = |e: aws_lc_rs::error::KeyRejected| {
            Error::KeyInvalid(format!("{} key rejected: {e}", curve.name()))
        };

        let key_pair = match pem.encoding() {
            PemEncoding::Public => {
                return Ok(Self {
                    algorithm,
                    curve,
                    key_pair: None,
                    public_key: pem.into_der(),
                })
            }
            PemEncoding::Pkcs8Private => {
                EcdsaKeyPair::from_pkcs8(curve.signing_algorithm(), pem.der()).map_err(rejected)?
            }
            PemEncoding::Sec1Private => {
                EcdsaKeyPair::from_private_key_der(curve.signing_algorithm(), pem.der())
                    .map_err(rejected)?
            }
            PemEncoding::Pkcs1Private => {
                return Err(Error::KeyInvalid(
                    "PKCS#1 container does not hold an EC key".to_string(),
                ))
            }
        };

        let public_key = key_pair.public_key().as_ref().to_vec();
        Ok(Self {
            algorithm,
            curve,
            key_pair: Some(key_pair),
            public_key,
        })
    }

    /// Sign, returning the Base64URL signature segment
    pub(crate) fn sign(&self, data: &[u8]) -> Result<String> {
        let algorithm = self.algorithm;
        let key_pair = self
            .key_pair
            .as_ref()
            .ok_or_else(|| Error::KeyCannotSign(algorithm.to_string()))?;

        let rng = SystemRandom::new();
        let signature = key_pair
            .sign(&rng, data)
            .map_err(|_| Error::SigningFailed(format!("{algorithm} signing failed")))?;

        Ok(base64url::encode_bytes(signature.as_ref()))
    }

    /// Verify a Base64URL signature segment
    pub(crate) fn verify(&self, data: &[u8], signature: &str) -> bool {
        let Ok(signature_bytes) =
            base64url::decode_bytes_bounded(signature, MAX_DECODED_SIGNATURE_SIZE)
        else {
            return false;
        };

        UnparsedPublicKey::new(self.curve.verification_algorithm(), &self.public_key)
            .verify(data, &signature_bytes)
            .is_ok()
    }
}
