//! Tests for the configured HS256 signer built through `Jwt::hs256()`

use chrono::{Duration, Utc};
use hsjwt::{
    EngineConfig, JwtError, Jwt, Signer, Token, VerifyOrder, recommended_secret_len,
};
use std::sync::Arc;

const SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";

fn issued_token() -> Token {
    let mut token = Jwt::token();
    token.claims.set_issuer("issuer");
    token.claims.set_jti("id-1");
    token
}

#[test]
fn test_default_config() {
    let config = EngineConfig::default();
    assert_eq!(config.verify_order, VerifyOrder::OverwriteThenCheck);
    assert_eq!(config.min_secret_len, 0);
    assert_eq!(config.leeway(), None);

    let signer = Jwt::hs256().with_secret(SECRET);
    assert_eq!(signer.config(), &config);
}

#[test]
fn test_config_from_json() {
    let config: EngineConfig = serde_json::from_str(
        r#"{"verify_order":"check_then_commit","min_secret_len":32,"leeway_secs":30}"#,
    )
    .unwrap();
    assert_eq!(config.verify_order, VerifyOrder::CheckThenCommit);
    assert_eq!(config.min_secret_len, 32);
    assert_eq!(config.leeway(), Some(Duration::seconds(30)));

    let partial: EngineConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(partial, EngineConfig::default());

    assert!(serde_json::from_str::<EngineConfig>(r#"{"unknown":1}"#).is_err());
}

#[test]
fn test_signer_round_trip() {
    let signer = Jwt::hs256().with_secret(SECRET);
    let token = issued_token();
    let compact = signer.sign(&token).unwrap();

    // Interoperates with the plain token API
    let mut verified = Token::new();
    verified.verify(&compact, SECRET).unwrap();
    assert_eq!(verified, token);

    let decoded = signer.decode(&compact).unwrap();
    assert_eq!(decoded, token);
    assert_eq!(decoded.claims.jti().unwrap(), "id-1");
}

#[test]
fn test_min_secret_len_rejects_short_secret() {
    let token = issued_token();
    let compact = token.sign("short").unwrap();

    let signer = Jwt::hs256()
        .with_secret("short")
        .min_secret_len(recommended_secret_len());
    assert!(matches!(signer.sign(&token), Err(JwtError::InvalidKey(_))));

    let mut target = Token::new();
    let before = target.clone();
    assert!(matches!(
        signer.verify(&mut target, &compact),
        Err(JwtError::InvalidKey(_))
    ));
    assert_eq!(target, before);
    assert!(matches!(signer.decode(&compact), Err(JwtError::InvalidKey(_))));
}

#[test]
fn test_recommended_secret_len() {
    assert_eq!(recommended_secret_len(), 32);
    let signer = Jwt::hs256()
        .with_secret(SECRET)
        .min_secret_len(recommended_secret_len());
    assert!(signer.sign(&issued_token()).is_ok());
}

#[test]
fn test_verify_order_check_then_commit() {
    let compact = issued_token().sign("other secret").unwrap();
    let signer = Jwt::hs256()
        .with_secret(SECRET)
        .verify_order(VerifyOrder::CheckThenCommit);

    let mut target = Token::new();
    target.claims.set_issuer("trusted");
    let before = target.clone();
    assert_eq!(
        signer.verify(&mut target, &compact),
        Err(JwtError::SignatureMismatch)
    );
    assert_eq!(target, before);
}

#[test]
fn test_verify_order_overwrite_then_check() {
    let compact = issued_token().sign("other secret").unwrap();
    let signer = Jwt::hs256().with_secret(SECRET);

    let mut target = Token::new();
    target.claims.set_issuer("trusted");
    assert_eq!(
        signer.verify(&mut target, &compact),
        Err(JwtError::SignatureMismatch)
    );
    assert_eq!(target.claims.issuer().unwrap(), "issuer");
}

#[test]
fn test_leeway_enables_time_window_check() {
    let mut token = issued_token();
    token.claims.set_expiration(Utc::now() - Duration::minutes(5));
    let compact = token.sign(SECRET).unwrap();

    // No leeway configured: expiry is not checked
    let plain = Jwt::hs256().with_secret(SECRET);
    assert!(plain.decode(&compact).is_ok());

    let strict = Jwt::hs256().with_secret(SECRET).leeway(Duration::zero());
    assert_eq!(strict.decode(&compact), Err(JwtError::Expired));
    let mut target = Token::new();
    assert_eq!(strict.verify(&mut target, &compact), Err(JwtError::Expired));

    let lenient = Jwt::hs256()
        .with_secret(SECRET)
        .leeway(Duration::minutes(10));
    assert!(lenient.decode(&compact).is_ok());
}

#[test]
fn test_fractional_leeway_rounds_up() {
    let signer = Jwt::hs256()
        .with_secret(SECRET)
        .leeway(Duration::milliseconds(900));
    assert_eq!(signer.config().leeway_secs, Some(1));

    let signer = signer.leeway(Duration::seconds(2));
    assert_eq!(signer.config().leeway_secs, Some(2));
}

#[test]
fn test_far_future_expiration_passes_window_check() {
    let mut token = issued_token();
    token.claims.set_expiration(chrono::DateTime::<Utc>::MAX_UTC);
    let compact = token.sign(SECRET).unwrap();

    let signer = Jwt::hs256().with_secret(SECRET).leeway(Duration::minutes(1));
    let decoded = signer.decode(&compact).unwrap();
    assert_eq!(
        decoded.claims.expiration().unwrap(),
        chrono::DateTime::<Utc>::MAX_UTC
    );
}

#[test]
fn test_not_yet_valid() {
    let mut token = issued_token();
    token.claims.set_not_before(Utc::now() + Duration::hours(1));
    let compact = token.sign(SECRET).unwrap();

    let signer = Jwt::hs256()
        .with_config(EngineConfig {
            leeway_secs: Some(0),
            ..EngineConfig::default()
        })
        .with_secret(SECRET);
    assert_eq!(signer.decode(&compact), Err(JwtError::NotYetValid));
}

#[test]
fn test_signer_trait_through_arc() {
    let signer: Arc<dyn Signer> = Arc::new(Jwt::hs256().with_secret(SECRET));
    let shared = Arc::clone(&signer);
    assert_eq!(shared.alg(), "HS256");

    let compact = shared.sign(&issued_token()).unwrap();
    let mut target = Token::new();
    signer.verify(&mut target, &compact).unwrap();
    assert_eq!(target.claims.issuer().unwrap(), "issuer");
}

#[test]
fn test_debug_does_not_leak_secret() {
    let signer = Jwt::hs256().with_secret("hunter2-hunter2");
    let rendered = format!("{signer:?}");
    assert!(!rendered.contains("hunter2"));
    assert!(rendered.contains("secret_len: 15"));
}
