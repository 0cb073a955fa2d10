//! Tests for reserved claim accessors and the time window check

use chrono::{Duration, Utc};
use hsjwt::claims::reserved;
use hsjwt::{Claims, JwtError};

#[test]
fn test_reserved_time_claims() {
    let mut claims = Claims::new();
    let now = Utc::now();
    claims.set_issued_at(now);
    claims.set_expiration(now);
    claims.set_not_before(now);

    assert_eq!(claims.issued_at().unwrap(), now);
    assert_eq!(claims.expiration().unwrap(), now);
    assert_eq!(claims.not_before().unwrap(), now);
    assert_eq!(claims.len(), 3);
}

#[test]
fn test_reserved_string_claims() {
    let mut claims = Claims::new();
    claims.set_audience("USA");
    claims.set_issuer("iss");
    claims.set_jti("jti");
    claims.set_principal("prn");
    claims.set_token_type("typ");

    assert_eq!(claims.audience().unwrap(), "USA");
    assert_eq!(claims.issuer().unwrap(), "iss");
    assert_eq!(claims.jti().unwrap(), "jti");
    assert_eq!(claims.principal().unwrap(), "prn");
    assert_eq!(claims.token_type().unwrap(), "typ");

    // Reserved accessors use the short names
    for key in [
        reserved::AUDIENCE,
        reserved::ISSUER,
        reserved::JWT_ID,
        reserved::PRINCIPAL,
        reserved::TYPE,
    ] {
        assert!(claims.has(key), "missing {key}");
    }
}

#[test]
fn test_issuer_removed() {
    let mut claims = Claims::new();
    claims.set_issuer("iss");
    assert_eq!(claims.issuer().unwrap(), "iss");

    claims.del("iss");
    assert!(matches!(claims.issuer(), Err(JwtError::NotFound(_))));
}

#[test]
fn test_invalid_reserved_time_claims() {
    let mut claims = Claims::new();

    claims.set("exp", "invalid date");
    assert!(matches!(claims.expiration(), Err(JwtError::Decode { .. })));
    claims.del("exp");
    assert!(matches!(claims.expiration(), Err(JwtError::NotFound(_))));

    claims.set("nbf", "invalid date");
    assert!(matches!(claims.not_before(), Err(JwtError::Decode { .. })));
    claims.del("nbf");
    assert!(matches!(claims.not_before(), Err(JwtError::NotFound(_))));

    claims.set("iat", "invalid date");
    assert!(matches!(claims.issued_at(), Err(JwtError::Decode { .. })));
    claims.del("iat");
    assert!(matches!(claims.issued_at(), Err(JwtError::NotFound(_))));
}

#[test]
fn test_numeric_epoch_is_not_a_timestamp() {
    let mut claims = Claims::new();
    claims.set("exp", 1_700_000_000i64);
    assert!(matches!(claims.expiration(), Err(JwtError::Decode { .. })));
}

#[test]
fn test_missing_reserved_string_claims() {
    let claims = Claims::new();
    assert!(matches!(claims.issuer(), Err(JwtError::NotFound(_))));
    assert!(matches!(claims.audience(), Err(JwtError::NotFound(_))));
    assert!(matches!(claims.principal(), Err(JwtError::NotFound(_))));
    assert!(matches!(claims.jti(), Err(JwtError::NotFound(_))));
    assert!(matches!(claims.token_type(), Err(JwtError::NotFound(_))));
}

#[test]
fn test_reserved_string_claim_with_wrong_type() {
    let mut claims = Claims::new();
    claims.set("aud", 42);
    assert!(matches!(
        claims.audience(),
        Err(JwtError::TypeMismatch { expected: "string", found: "number", .. })
    ));
}

#[test]
fn test_custom_claims_are_plain_store_values() {
    let mut claims = Claims::new();
    claims.set("role", "admin");
    claims.set("level", 3u8);

    assert_eq!(claims.get_string("role").unwrap(), "admin");
    assert_eq!(claims.get_f64("level").unwrap(), 3.0);
    assert!(claims.unmarshal(b"invalid JSON").is_err());
}

#[test]
fn test_time_window_accepts_current_token() {
    let now = Utc::now();
    let mut claims = Claims::new();
    claims.set_not_before(now - Duration::minutes(1));
    claims.set_expiration(now + Duration::hours(1));
    assert!(claims.validate_time_window(now, Duration::zero()).is_ok());

    // Absent fields pass
    assert!(Claims::new()
        .validate_time_window(now, Duration::zero())
        .is_ok());
}

#[test]
fn test_time_window_expired() {
    let now = Utc::now();
    let mut claims = Claims::new();
    claims.set_expiration(now - Duration::minutes(5));

    assert_eq!(
        claims.validate_time_window(now, Duration::zero()),
        Err(JwtError::Expired)
    );
    assert!(claims
        .validate_time_window(now, Duration::minutes(10))
        .is_ok());
}

#[test]
fn test_time_window_not_yet_valid() {
    let now = Utc::now();
    let mut claims = Claims::new();
    claims.set_not_before(now + Duration::minutes(5));

    assert_eq!(
        claims.validate_time_window(now, Duration::zero()),
        Err(JwtError::NotYetValid)
    );
    assert!(claims
        .validate_time_window(now, Duration::minutes(10))
        .is_ok());
}

#[test]
fn test_time_window_propagates_decode_errors() {
    let mut claims = Claims::new();
    claims.set("exp", "tomorrow");
    assert!(matches!(
        claims.validate_time_window(Utc::now(), Duration::zero()),
        Err(JwtError::Decode { .. })
    ));
}

#[test]
fn test_expires_in() {
    let mut claims = Claims::new();
    claims.set_expires_in(Duration::hours(1));
    let exp = claims.expiration().unwrap();
    assert!(exp > Utc::now());
}
