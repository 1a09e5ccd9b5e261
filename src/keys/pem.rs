//! PEM key loading and key-type introspection
//!
//! The key family is read from the key itself (PEM label, then the
//! AlgorithmIdentifier OID for the generic PKCS#8 / SPKI containers), never
//! from the algorithm the caller asked for.

use crate::error::{Error, Result};

use spki::ObjectIdentifier;

/// rsaEncryption (RFC 8017)
const RSA_ENCRYPTION_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

/// id-ecPublicKey (RFC 5480)
const EC_PUBLIC_KEY_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");

/// Key family found inside a PEM document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PemKeyType {
    Rsa,
    Ec,
}

impl PemKeyType {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            PemKeyType::Rsa => "RSA",
            PemKeyType::Ec => "EC",
        }
    }
}

/// DER container the key bytes are wrapped in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PemEncoding {
    /// `PRIVATE KEY` (PKCS#8 PrivateKeyInfo)
    Pkcs8Private,
    /// `RSA PRIVATE KEY` (PKCS#1 RSAPrivateKey)
    Pkcs1Private,
    /// `EC PRIVATE KEY` (SEC1 ECPrivateKey)
    Sec1Private,
    /// `PUBLIC KEY` (SubjectPublicKeyInfo) or `RSA PUBLIC KEY` (PKCS#1)
    Public,
}

/// A decoded PEM key
pub(crate) struct PemKey {
    key_type: PemKeyType,
    encoding: PemEncoding,
    /// Named curve, when the container declares one
    #[cfg_attr(not(feature = "ecdsa"), allow(dead_code))]
    curve: Option<ObjectIdentifier>,
    der: Vec<u8>,
}

impl PemKey {
    /// Decode PEM text and identify the key inside it
    pub(crate) fn parse(material: &str) -> Result<Self> {
        let document = pem::parse(material)
            .map_err(|e| Error::KeyInvalid(format!("PEM decoding failed: {e}")))?;
        let label = document.tag().to_string();
        let der = document.into_contents();

        let (key_type, encoding, curve) = match label.as_str() {
            "RSA PRIVATE KEY" => (PemKeyType::Rsa, PemEncoding::Pkcs1Private, None),
            "RSA PUBLIC KEY" => (PemKeyType::Rsa, PemEncoding::Public, None),
            "EC PRIVATE KEY" => (PemKeyType::Ec, PemEncoding::Sec1Private, None),
            "PRIVATE KEY" => {
                let info = pkcs8::PrivateKeyInfo::try_from(der.as_slice())
                    .map_err(|e| Error::KeyInvalid(format!("PKCS#8 decoding failed: {e}")))?;
                let key_type = key_type_for(info.algorithm.oid)?;
                let curve = info.algorithm.parameters_oid().ok();
                (key_type, PemEncoding::Pkcs8Private, curve)
            }
            "PUBLIC KEY" => {
                let info = spki::SubjectPublicKeyInfoRef::try_from(der.as_slice())
                    .map_err(|e| Error::KeyInvalid(format!("SPKI decoding failed: {e}")))?;
                let key_type = key_type_for(info.algorithm.oid)?;
                let curve = info.algorithm.parameters_oid().ok();
                (key_type, PemEncoding::Public, curve)
            }
            "ENCRYPTED PRIVATE KEY" => {
                return Err(Error::KeyInvalid(
                    "encrypted private keys are not supported".to_string(),
                ))
            }
            other => {
                return Err(Error::KeyInvalid(format!(
                    "unsupported PEM label '{other}'"
                )))
            }
        };

        Ok(Self {
            key_type,
            encoding,
            curve: curve.filter(|_| key_type == PemKeyType::Ec),
            der,
        })
    }

    pub(crate) fn key_type(&self) -> PemKeyType {
        self.key_type
    }

    pub(crate) fn encoding(&self) -> PemEncoding {
        self.encoding
    }

    #[cfg_attr(not(feature = "ecdsa"), allow(dead_code))]
    pub(crate) fn curve(&self) -> Option<ObjectIdentifier> {
        self.curve
    }

    pub(crate) fn der(&self) -> &[u8] {
        &self.der
    }

    pub(crate) fn into_der(self) -> Vec<u8> {
        self.der
    }
}

fn key_type_for(oid: ObjectIdentifier) -> Result<PemKeyType> {
    if oid == RSA_ENCRYPTION_OID {
        Ok(PemKeyType::Rsa)
    } else if oid == EC_PUBLIC_KEY_OID {
        Ok(PemKeyType::Ec)
    } else {
        Err(Error::KeyInvalid(format!("unsupported key algorithm OID {oid}")))
    }
}
