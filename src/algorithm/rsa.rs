use crate::algorithm::{Algorithm, Digest};
use crate::error::{Error, Result};
use crate::keys::pem::{PemEncoding, PemKey};
use crate::limits::MAX_DECODED_SIGNATURE_SIZE;
use crate::utils::base64url;

use aws_lc_rs::rand::SystemRandom;
use aws_lc_rs::signature::{self, KeyPair, RsaKeyPair, UnparsedPublicKey};

/// RSA key loaded from PEM
///
/// Holds the private key pair when one was supplied. The public half is
/// always kept as DER for verification.
pub(crate) struct RsaKey {
    algorithm: Algorithm,
    key_pair: Option<RsaKeyPair>,
    public_key: Vec<u8>,
}

impl RsaKey {
    pub(crate) fn from_pem(algorithm: Algorithm, pem: PemKey) -> Result<Self> {
        let rejected = |e: aws_lc_rs::error::KeyRejected| {
            Error::KeyInvalid(format!("RSA key rejected: {e}"))
        };

        match pem.encoding() {
            PemEncoding::Public => Ok(Self {
                algorithm,
                key_pair: None,
                public_key: pem.into_der(),
            }),
            PemEncoding::Pkcs1Private => {
                let key_pair = RsaKeyPair::from_der(pem.der()).map_err(rejected)?;
                Ok(Self::from_key_pair(algorithm, key_pair))
            }
            PemEncoding::Pkcs8Private => {
                let key_pair = RsaKeyPair::from_pkcs8(pem.der()).map_err(rejected)?;
                Ok(Self::from_key_pair(algorithm, key_pair))
            }
            PemEncoding::Sec1Private => Err(Error::KeyInvalid(
                "SEC1 container does not hold an RSA key".to_string(),
            )),
        }
    }

    fn from_key_pair(algorithm: Algorithm, key_pair: RsaKeyPair) -> Self {
        let public_key = key_pair.public_key().as_ref().to_vec();
        Self {
            algorithm,
            key_pair: Some(key_pair),
            public_key,
        }
    }

    /// Sign with RSASSA-PKCS1-v1_5, returning the Base64URL signature segment
    pub(crate) fn sign(&self, data: &[u8]) -> Result<String> {
        let algorithm = self.algorithm;
        let key_pair = self
            .key_pair
            .as_ref()
            .ok_or_else(|| Error::KeyCannotSign(algorithm.to_string()))?;

        let encoding: &'static dyn signature::RsaEncoding = match algorithm.digest() {
            Some(Digest::Sha256) => &signature::RSA_PKCS1_SHA256,
            Some(Digest::Sha384) => &signature::RSA_PKCS1_SHA384,
            Some(Digest::Sha512) => &signature::RSA_PKCS1_SHA512,
            None => return Err(Error::AlgorithmUnsupported(algorithm.to_string())),
        };

        let rng = SystemRandom::new();
        let mut signature = vec![0u8; key_pair.public_modulus_len()];
        key_pair
            .sign(encoding, &rng, data, &mut signature)
            .map_err(|_| Error::SigningFailed(format!("{algorithm} signing failed")))?;

        Ok(base64url::encode_bytes(&signature))
    }

    /// Verify a Base64URL signature segment
    pub(crate) fn verify(&self, data: &[u8], signature: &str) -> bool {
        let verification: &'static dyn signature::VerificationAlgorithm =
            match self.algorithm.digest() {
                Some(Digest::Sha256) => &signature::RSA_PKCS1_2048_8192_SHA256,
                Some(Digest::Sha384) => &signature::RSA_PKCS1_2048_8192_SHA384,
                Some(Digest::Sha512) => &signature::RSA_PKCS1_2048_8192_SHA512,
                None => return false,
            };

        let Ok(signature_bytes) =
            base64url::decode_bytes_bounded(signature, MAX_DECODED_SIGNATURE_SIZE)
        else {
            return false;
        };

        UnparsedPublicKey::new(verification, &self.public_key)
            .verify(data, &signature_bytes)
            .is_ok()
    }
}
