use crate::claims::Claims;
use std::time::{SystemTime, UNIX_EPOCH};

/// A predicate over claims
///
/// Validators are small values that capture only what they compare
/// against. A list of validators passes when every one of them passes;
/// evaluation stops at the first rejection.
///
/// ```ignore
/// use jwtkit::*;
///
/// let now = validate::now();
/// let validators = vec![
///     validate::exp(now),
///     validate::iss("https://issuer.example"),
///     Validator::new(|claims| claims.contains_key("scope")),
/// ];
/// ```
pub struct Validator {
    predicate: Box<dyn Fn(&Claims) -> bool + Send + Sync>,
}

impl Validator {
    /// Wrap an application predicate
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Claims) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Box::new(predicate),
        }
    }

    /// Run the predicate
    pub fn check(&self, claims: &Claims) -> bool {
        (self.predicate)(claims)
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator").finish_non_exhaustive()
    }
}

/// Run validators in order, stopping at the first rejection
pub fn validate_all(claims: &Claims, validators: &[Validator]) -> bool {
    validators.iter().all(|validator| validator.check(claims))
}

/// Index of the first validator that rejects the claims
pub fn first_failure(claims: &Claims, validators: &[Validator]) -> Option<usize> {
    validators
        .iter()
        .position(|validator| !validator.check(claims))
}

/// Built-in validators for the registered claims
///
/// Every built-in validator passes when its claim is absent. Time
/// comparisons are strict: a token is expired at `exp == now`.
pub mod validate {
    use super::*;

    /// Current Unix time in seconds
    pub fn now() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0)
    }

    /// Valid while `exp > now`
    pub fn exp(now: u64) -> Validator {
        time_validator("exp", move |exp| exp > now)
    }

    /// Valid once `nbf < now`
    pub fn nbf(now: u64) -> Validator {
        time_validator("nbf", move |nbf| nbf < now)
    }

    /// Valid when `iat < now`
    pub fn iat(now: u64) -> Validator {
        time_validator("iat", move |iat| iat < now)
    }

    /// Issuer must equal `issuer`
    pub fn iss(issuer: impl Into<String>) -> Validator {
        string_validator("iss", issuer.into())
    }

    /// Audience must equal `audience`
    pub fn aud(audience: impl Into<String>) -> Validator {
        string_validator("aud", audience.into())
    }

    /// Subject must equal `subject`
    pub fn sub(subject: impl Into<String>) -> Validator {
        string_validator("sub", subject.into())
    }

    fn string_validator(name: &'static str, expected: String) -> Validator {
        Validator::new(move |claims| {
            claims
                .get(name)
                .map_or(true, |value| *value == expected)
        })
    }

    fn time_validator<F>(name: &'static str, accept: F) -> Validator
    where
        F: Fn(u64) -> bool + Send + Sync + 'static,
    {
        Validator::new(move |claims| match claims.get(name) {
            None => true,
            Some(value) => parse_timestamp(value).is_some_and(&accept),
        })
    }

    /// Parse a decimal timestamp; anything but ASCII digits is rejected
    pub(crate) fn parse_timestamp(value: &str) -> Option<u64> {
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        value.parse().ok()
    }
}
