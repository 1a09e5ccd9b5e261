//! Basic example: build, inspect and verify a token
//!
//! 1. Build a token with `Token::new` and sign it with a shared secret
//! 2. Inspect it with `Token::parse` (nothing is checked)
//! 3. Verify it with `Token::decode_verified` against a key and validators

use jwtkit::*;

const SECRET: &str = "your-256-bit-secret-key-here!";

fn main() -> Result<()> {
    println!("=== jwtkit - Basic Example ===\n");

    let now = validate::now();
    let claims = Claims::from([
        ("iss".to_string(), "https://example.com".to_string()),
        ("sub".to_string(), "user123".to_string()),
        ("exp".to_string(), (now + 3600).to_string()),
    ]);
    let header = Header::from([("kid".to_string(), "primary".to_string())]);

    // Step 1: Build and sign
    let jwt = Token::new(Algorithm::HS256, claims, header).encode(SECRET)?;
    println!("Token: {}\n", jwt);

    // Step 2: Inspect without trusting
    let parsed = Token::parse(&jwt)?;
    println!("Step 2: Parsed (untrusted)");
    println!("  Algorithm: {}", parsed.algorithm());
    println!("  Key id: {}\n", parsed.header_value("kid"));

    // Step 3: Verify signature, then claims
    let key = Key::new(Algorithm::HS256, SECRET)?;
    let validators = [
        validate::exp(now),
        validate::iss("https://example.com"),
        validate::sub("user123"),
    ];
    let token = Token::decode_verified(&jwt, &key, &validators)?;

    println!("Step 3: Verified");
    println!("  Issuer: {}", token.claim("iss"));
    println!("  Subject: {}", token.claim("sub"));
    println!("  Expires at: {}\n", token.claim("exp"));

    // A wrong secret fails the signature check
    let wrong = Key::new(Algorithm::HS256, "not-the-secret")?;
    match Token::decode_verified(&jwt, &wrong, &validators) {
        Err(Error::SignatureInvalid) => println!("Wrong secret: signature rejected"),
        other => println!("Wrong secret: unexpected result {:?}", other),
    }

    // A failing validator reports its position
    let strict = [validate::exp(now), validate::aud("other-service")];
    let mut claims_with_aud = token.claims().clone();
    claims_with_aud.insert("aud".to_string(), "api".to_string());
    let with_aud = Token::new(Algorithm::HS256, claims_with_aud, Header::new()).encode(SECRET)?;
    if let Err(Error::ValidationFailed { index }) = Token::decode_verified(&with_aud, &key, &strict)
    {
        println!("Audience mismatch: validator {} rejected the claims", index);
    }

    Ok(())
}
