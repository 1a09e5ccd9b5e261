//! Tests against known JWT attack vectors
//!
//! The verifier's key decides the algorithm. A forged header can neither
//! switch the algorithm nor turn signature checking off.

mod common;

use common::*;
use jwtkit::*;

/// Helper: a signed HS256 token with a one-hour expiry
fn create_hs256_token(secret: &str) -> String {
    let exp = (validate::now() + 3600).to_string();
    Token::new(
        Algorithm::HS256,
        claims(&[("iss", "https://example.com"), ("sub", "user123"), ("exp", exp.as_str())]),
        Header::new(),
    )
    .encode(secret)
    .unwrap()
}

fn forged(header: &str, payload: &str, signature: &str) -> String {
    format!("{}.{}.{signature}", utils::encode(header), utils::encode(payload))
}

// ============================================================================
// CVE-2015-9235 / CVE-2018-1000531: "none" Algorithm Attack
// ============================================================================

#[test]
fn test_none_header_rejected_by_real_key() {
    let token = forged(
        r#"{"alg":"none","typ":"JWT"}"#,
        r#"{"iss":"attacker","sub":"admin"}"#,
        "",
    );
    for alg in enabled_algorithms().into_iter().filter(|a| !a.is_none()) {
        let (_, verifying) = key_material(alg);
        let key = Key::new(alg, &verifying).unwrap();
        assert_eq!(
            Token::decode_verified(&token, &key, &[]),
            Err(Error::SignatureInvalid),
            "{alg} key accepted an unsigned token"
        );
    }
}

#[test]
fn test_none_case_variants_are_unknown_algorithms() {
    for alg in ["None", "nOnE", "NONE"] {
        let token = forged(&format!(r#"{{"alg":"{alg}"}}"#), r#"{"sub":"admin"}"#, "");
        assert_eq!(
            Token::parse(&token),
            Err(Error::InvalidAlgorithm(alg.to_string()))
        );
    }
}

// ============================================================================
// CVE-2016-10555 / CVE-2024-33663: Algorithm Confusion (RS256→HS256)
// ============================================================================

#[cfg(feature = "rsa")]
#[test]
fn test_algorithm_confusion_rsa_to_hmac() {
    // Attacker signs HS256 with the public key text as the HMAC secret
    let input = format!(
        "{}.{}",
        utils::encode(r#"{"alg":"HS256","typ":"JWT"}"#),
        utils::encode(r#"{"iss":"attacker","sub":"admin"}"#)
    );
    let attacker = Key::new(Algorithm::HS256, RSA_PUBLIC).unwrap();
    let token = format!("{input}.{}", attacker.sign(input.as_bytes()).unwrap());

    // The verifier holds an RS256 key, so the header's HS256 is never used
    let key = Key::new(Algorithm::RS256, RSA_PUBLIC).unwrap();
    assert_eq!(
        Token::decode_verified(&token, &key, &[]),
        Err(Error::SignatureInvalid)
    );
}

#[cfg(feature = "rsa")]
#[test]
fn test_hmac_key_for_rsa_token() {
    let token = Token::new(Algorithm::RS256, claims(&[("sub", "admin")]), Header::new())
        .encode(RSA_PRIVATE)
        .unwrap();
    let key = Key::new(Algorithm::HS256, "secret").unwrap();
    assert!(!Token::verify(&token, &key, &[]));
}

#[cfg(feature = "ecdsa")]
#[test]
fn test_algorithm_confusion_ecdsa_to_hmac() {
    let input = format!(
        "{}.{}",
        utils::encode(r#"{"alg":"HS256"}"#),
        utils::encode(r#"{"sub":"admin"}"#)
    );
    let attacker = Key::new(Algorithm::HS256, ES256_PUBLIC).unwrap();
    let token = format!("{input}.{}", attacker.sign(input.as_bytes()).unwrap());

    let key = Key::new(Algorithm::ES256, ES256_PUBLIC).unwrap();
    assert!(!Token::verify(&token, &key, &[]));
}

// ============================================================================
// Algorithm Downgrade (HS512→HS256)
// ============================================================================

#[test]
fn test_algorithm_downgrade_rejected() {
    let token = create_hs256_token("secret");
    let key = Key::new(Algorithm::HS512, "secret").unwrap();
    assert_eq!(
        Token::decode_verified(&token, &key, &[]),
        Err(Error::SignatureInvalid)
    );
}

// ============================================================================
// Signature Stripping and Truncation
// ============================================================================

#[test]
fn test_signature_stripped() {
    let token = create_hs256_token("secret");
    let dot = token.rfind('.').unwrap();
    let key = Key::new(Algorithm::HS256, "secret").unwrap();

    assert!(!Token::verify(&token[..dot], &key, &[]));
    assert!(!Token::verify(&token[..=dot], &key, &[]));
}

#[test]
fn test_signature_truncated() {
    let token = create_hs256_token("secret");
    let key = Key::new(Algorithm::HS256, "secret").unwrap();
    // 43 characters carry the 32 HMAC-SHA256 bytes; drop 4 to stay valid base64url
    let truncated = &token[..token.len() - 4];
    assert!(!Token::verify(truncated, &key, &[]));
}

// ============================================================================
// Timing Attack on HMAC (Constant-Time Comparison)
// ============================================================================

#[test]
fn test_tampered_last_character_rejected() {
    let token = create_hs256_token("test-secret-for-timing-attack");
    let key = Key::new(Algorithm::HS256, "test-secret-for-timing-attack").unwrap();
    assert!(Token::verify(&token, &key, &[validate::exp(validate::now())]));

    let mut tampered = token.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });
    assert_eq!(
        Token::decode_verified(&tampered, &key, &[]),
        Err(Error::SignatureInvalid)
    );
}

// ============================================================================
// Weak Secrets (User Responsibility)
// ============================================================================

#[test]
fn test_weak_secret_accepted() {
    // Key strength is the caller's responsibility
    for secret in ["secret", "123456", "password", "a"] {
        let token = create_hs256_token(secret);
        let key = Key::new(Algorithm::HS256, secret).unwrap();
        assert!(Token::verify(&token, &key, &[validate::iss("https://example.com")]));
    }
}
