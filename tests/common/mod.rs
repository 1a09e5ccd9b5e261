//! Shared fixtures for integration tests
//!
//! PEM keys under `tests/fixtures/` were generated with OpenSSL:
//! PKCS#8 and SPKI for every key, plus PKCS#1 (RSA) and SEC1 (EC) variants.

#![allow(dead_code)]

use jwtkit::*;

pub const RSA_PRIVATE: &str = include_str!("../fixtures/rsa_private.pem");
pub const RSA_PRIVATE_PKCS1: &str = include_str!("../fixtures/rsa_private_pkcs1.pem");
pub const RSA_PUBLIC: &str = include_str!("../fixtures/rsa_public.pem");
pub const RSA_PUBLIC_PKCS1: &str = include_str!("../fixtures/rsa_public_pkcs1.pem");
pub const RSA_OTHER_PUBLIC: &str = include_str!("../fixtures/rsa_other_public.pem");

pub const ES256_PRIVATE: &str = include_str!("../fixtures/es256_private.pem");
pub const ES256_PRIVATE_SEC1: &str = include_str!("../fixtures/es256_private_sec1.pem");
pub const ES256_PUBLIC: &str = include_str!("../fixtures/es256_public.pem");
pub const ES384_PRIVATE: &str = include_str!("../fixtures/es384_private.pem");
pub const ES384_PRIVATE_SEC1: &str = include_str!("../fixtures/es384_private_sec1.pem");
pub const ES384_PUBLIC: &str = include_str!("../fixtures/es384_public.pem");
pub const ES512_PRIVATE: &str = include_str!("../fixtures/es512_private.pem");
pub const ES512_PRIVATE_SEC1: &str = include_str!("../fixtures/es512_private_sec1.pem");
pub const ES512_PUBLIC: &str = include_str!("../fixtures/es512_public.pem");

pub fn claims(pairs: &[(&str, &str)]) -> Claims {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// DER contents of a PEM fixture
pub fn pem_der(pem_text: &str) -> Vec<u8> {
    pem::parse(pem_text).unwrap().into_contents()
}

/// (signing material, verification material) for an algorithm
pub fn key_material(alg: Algorithm) -> (String, String) {
    let (private, public) = match alg {
        Algorithm::None => ("", ""),
        Algorithm::HS256 => ("test-secret-hs256", "test-secret-hs256"),
        Algorithm::HS384 => ("test-secret-hs384", "test-secret-hs384"),
        Algorithm::HS512 => ("test-secret-hs512", "test-secret-hs512"),
        Algorithm::RS256 | Algorithm::RS384 | Algorithm::RS512 => (RSA_PRIVATE, RSA_PUBLIC),
        Algorithm::ES256 => (ES256_PRIVATE, ES256_PUBLIC),
        Algorithm::ES384 => (ES384_PRIVATE, ES384_PUBLIC),
        Algorithm::ES512 => (ES512_PRIVATE, ES512_PUBLIC),
    };
    (private.to_string(), public.to_string())
}

/// Algorithms whose family is compiled into this build
pub fn enabled_algorithms() -> Vec<Algorithm> {
    Algorithm::ALL
        .into_iter()
        .filter(|alg| match alg.family() {
            AlgorithmFamily::Rsa => cfg!(feature = "rsa"),
            AlgorithmFamily::Ecdsa => cfg!(feature = "ecdsa"),
            _ => true,
        })
        .collect()
}
