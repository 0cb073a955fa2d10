//! Configured HS256 signer

use super::keys::validate_hmac_key;
use crate::config::{EngineConfig, VerifyOrder};
use crate::engine;
use crate::error::JwtResult;
use crate::token::Token;
use chrono::{Duration, Utc};
use std::fmt;
use zeroize::Zeroizing;

/// HS256 signer with secret and configuration set
#[derive(Clone)]
pub struct Hs256 {
    secret: Zeroizing<Vec<u8>>,
    config: EngineConfig,
}

impl fmt::Debug for Hs256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hs256")
            .field("secret_len", &self.secret.len())
            .field("config", &self.config)
            .finish()
    }
}

impl Hs256 {
    pub(crate) fn new(secret: &[u8], config: EngineConfig) -> Self {
        Self {
            secret: Zeroizing::new(secret.to_vec()),
            config,
        }
    }

    /// Replace the whole configuration
    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Choose when verified content is written into the token
    #[must_use]
    pub fn verify_order(mut self, order: VerifyOrder) -> Self {
        self.config.verify_order = order;
        self
    }

    /// Reject secrets shorter than `len` bytes
    #[must_use]
    pub fn min_secret_len(mut self, len: usize) -> Self {
        self.config.min_secret_len = len;
        self
    }

    /// Check `exp`/`nbf` after every successful verification.
    ///
    /// The leeway is kept in whole seconds; a fractional part rounds up.
    #[must_use]
    pub fn leeway(mut self, leeway: Duration) -> Self {
        let secs = leeway.num_seconds();
        let secs = if leeway > Duration::seconds(secs) { secs + 1 } else { secs };
        self.config.leeway_secs = Some(secs);
        self
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Sign `token` into the compact form.
    ///
    /// # Errors
    /// `InvalidKey` if the secret is shorter than configured, otherwise as
    /// [`Token::sign`].
    pub fn sign(&self, token: &Token) -> JwtResult<String> {
        validate_hmac_key(&self.secret, self.config.min_secret_len)?;
        engine::sign(token, &self.secret)
    }

    /// Verify `compact` into `token` using the configured ordering, then
    /// the time window check if a leeway is configured.
    ///
    /// A short secret is rejected before the token is touched.
    ///
    /// # Errors
    /// `InvalidKey`, the errors of [`Token::verify`], and `Expired`,
    /// `NotYetValid` or `Decode` from the time window check.
    pub fn verify(&self, token: &mut Token, compact: &str) -> JwtResult<()> {
        validate_hmac_key(&self.secret, self.config.min_secret_len)?;
        match self.config.verify_order {
            VerifyOrder::OverwriteThenCheck => engine::verify(token, compact, &self.secret)?,
            VerifyOrder::CheckThenCommit => {
                engine::verify_then_commit(token, compact, &self.secret)?;
            }
        }
        self.check_window(token)
    }

    /// Verify `compact` into a new token. Always checks the MAC before
    /// building the token, whatever the configured ordering.
    ///
    /// # Errors
    /// As [`verify`](Self::verify).
    pub fn decode(&self, compact: &str) -> JwtResult<Token> {
        validate_hmac_key(&self.secret, self.config.min_secret_len)?;
        let mut token = Token::new();
        engine::verify_then_commit(&mut token, compact, &self.secret)?;
        self.check_window(&token)?;
        Ok(token)
    }

    fn check_window(&self, token: &Token) -> JwtResult<()> {
        match self.config.leeway() {
            Some(leeway) => token.claims.validate_time_window(Utc::now(), leeway),
            None => Ok(()),
        }
    }
}
