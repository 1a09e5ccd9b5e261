//! # jwtkit - Compact Signed Tokens
//!
//! > Build, inspect and verify JWT-style tokens with string claims.
//!
//! **jwtkit** creates compact tokens (`<header>.<claims>.<signature>`), decodes them, and
//! verifies them against a key and an ordered list of claim validators.
//!
//! ## Overview
//!
//! A token carries a header and a set of claims, both flat maps from string to string,
//! encoded as unpadded Base64URL JSON. A [`Key`] binds one [`Algorithm`] to its key
//! material and signs or verifies the `<header>.<claims>` signing input. Validators are small
//! predicates over the claims, run in order after the signature has been checked.
//!
//! Inspection and trust are separate steps. [`Token::parse`] decodes a token without checking
//! anything; [`Token::decode_verified`] and [`Token::verify`] check the signature first and the
//! claims second, and only a token that passes both is returned.
//!
//! ## Quick Start
//!
//! ```ignore
//! use jwtkit::*;
//!
//! let claims = Claims::from([
//!     ("sub".to_string(), "123".to_string()),
//!     ("exp".to_string(), (validate::now() + 3600).to_string()),
//! ]);
//! let jwt = Token::new(Algorithm::HS256, claims, Header::new()).encode("secret")?;
//!
//! let key = Key::new(Algorithm::HS256, "secret")?;
//! let validators = [validate::exp(validate::now()), validate::sub("123")];
//!
//! // Fail-fast with the specific error
//! let token = Token::decode_verified(&jwt, &key, &validators)?;
//! println!("Subject: {}", token.claim("sub"));
//!
//! // Or just ask whether it is good
//! assert!(Token::verify(&jwt, &key, &validators));
//! ```
//!
//! ## Token Flows
//!
//! ```text
//! Token::new(alg, claims, header)   ── .encode(key) ──▶ "<h>.<c>.<s>"
//!
//! "<h>.<c>.<s>" ── Token::parse ──▶ Token (untrusted, nothing checked)
//!
//! "<h>.<c>.<s>" ── Token::decode_verified(key, validators)
//!                      │ signature   ✗ ─▶ Error::SignatureInvalid
//!                      │ validators  ✗ ─▶ Error::ValidationFailed { index }
//!                      ▼
//!                    Token (trusted)
//! ```
//!
//! ## Algorithm Support
//!
//! - **none**: empty signature, every signature accepted. Never use it for trust decisions
//! - **HMAC** (always enabled): HS256, HS384, HS512
//! - **RSA** (with `rsa` feature): RS256, RS384, RS512
//! - **ECDSA** (with `ecdsa` feature): ES256 (P-256), ES384 (P-384), ES512 (P-521)
//!
//! RSA and EC keys are PEM documents: PKCS#8, SPKI, PKCS#1 or SEC1. The key family found in
//! the PEM must match the requested algorithm.
//!
//! ## Features
//!
//! - **`rsa`** (default): RSA algorithms via `aws-lc-rs`
//! - **`ecdsa`** (default): ECDSA algorithms via `aws-lc-rs`
//!
//! ## Security
//!
//! ### Timing Attack Protection
//!
//! HMAC signature verification uses constant-time comparison via the [`constant_time_eq`](https://crates.io/crates/constant_time_eq)
//! crate.
//!
//! ### Input Limits
//!
//! Tokens over 64 KiB, algorithm names over 16 bytes and signatures that decode to more than
//! 1 KiB are rejected before any work is done on them.
//!
//! ## References
//!
//! - [RFC 7515](https://datatracker.ietf.org/doc/html/rfc7515): JSON Web Signature (JWS)
//! - [RFC 7518](https://datatracker.ietf.org/doc/html/rfc7518): JSON Web Algorithms (JWA)
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519): JSON Web Token (JWT)

// Core modules
pub mod error;
mod limits;
pub mod utils;

// Algorithm system
pub mod algorithm;
pub mod backend;
pub mod keys;

// Claims and validation
pub mod claims;

// Token types
pub mod token;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use token::Token;

pub use algorithm::{alg_to_string, string_to_alg, Algorithm, AlgorithmFamily};
pub use claims::{first_failure, validate, validate_all, Claims, Header, Validator};
pub use error::{Error, Result};
pub use keys::Key;
