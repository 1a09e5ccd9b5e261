//! Custom header field preservation tests
//!
//! Headers may carry fields beyond `alg` and `typ` (`kid`, `cty`,
//! application-specific fields). They survive building, parsing and
//! verification. `alg` and `typ` are always set by the builder.

mod common;

use common::*;
use jwtkit::*;

fn header(pairs: &[(&str, &str)]) -> Header {
    claims(pairs)
}

// ============================================================================
// Built tokens
// ============================================================================

#[test]
fn test_custom_fields_round_trip() {
    let built = Token::new(
        Algorithm::HS256,
        claims(&[("sub", "1")]),
        header(&[("kid", "key-123"), ("cty", "example"), ("x-tenant", "acme")]),
    );
    let jwt = built.encode("secret").unwrap();

    let key = Key::new(Algorithm::HS256, "secret").unwrap();
    let token = Token::decode_verified(&jwt, &key, &[]).unwrap();

    assert_eq!(token.header_value("kid"), "key-123");
    assert_eq!(token.header_value("cty"), "example");
    assert_eq!(token.header_value("x-tenant"), "acme");
    assert_eq!(token.header(), built.header());
}

#[test]
fn test_builder_overrides_alg_and_typ() {
    let token = Token::new(
        Algorithm::HS512,
        Claims::new(),
        header(&[("alg", "none"), ("typ", "something-else")]),
    );
    assert_eq!(token.header_value("alg"), "HS512");
    assert_eq!(token.header_value("typ"), "JWT");

    let jwt = token.encode("secret").unwrap();
    let parsed = Token::parse(&jwt).unwrap();
    assert_eq!(parsed.algorithm(), Algorithm::HS512);
    assert_eq!(parsed.header_value("alg"), "HS512");
}

#[test]
fn test_header_field_in_header_not_claims() {
    let token = Token::new(
        Algorithm::HS256,
        claims(&[("sub", "1")]),
        header(&[("kid", "k")]),
    );
    assert_eq!(token.claim("kid"), "");
    assert_eq!(token.header_value("sub"), "");
}

// ============================================================================
// Foreign tokens
// ============================================================================

#[test]
fn test_parse_keeps_unknown_header_fields() {
    let jwt = format!(
        "{}.{}",
        utils::encode(r#"{"alg":"HS256","typ":"JWT","kid":"abc","x5t":"thumb"}"#),
        utils::encode(r#"{"sub":"1"}"#)
    );
    let token = Token::parse(&jwt).unwrap();
    assert_eq!(token.header_value("kid"), "abc");
    assert_eq!(token.header_value("x5t"), "thumb");
    assert_eq!(token.header().len(), 4);
}

#[test]
fn test_numeric_header_fields_become_strings() {
    let jwt = format!(
        "{}.{}",
        utils::encode(r#"{"alg":"HS256","ver":2,"b64":true}"#),
        utils::encode("{}")
    );
    let token = Token::parse(&jwt).unwrap();
    assert_eq!(token.header_value("ver"), "2");
    assert_eq!(token.header_value("b64"), "true");
}

#[test]
fn test_structured_header_fields_rejected() {
    // Embedded JWKs and certificate chains are not flat strings
    for header_json in [
        r#"{"alg":"HS256","jwk":{"kty":"oct"}}"#,
        r#"{"alg":"HS256","x5c":["MIIB"]}"#,
        r#"{"alg":"HS256","crit":["exp"]}"#,
    ] {
        let jwt = format!("{}.{}", utils::encode(header_json), utils::encode("{}"));
        assert!(
            matches!(Token::parse(&jwt), Err(Error::FormatInvalidJson(_))),
            "accepted {header_json}"
        );
    }
}
