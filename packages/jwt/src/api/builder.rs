//! JWT builder entry points

use super::hs256_builder::Hs256;
use crate::config::EngineConfig;
use crate::token::Token;

/// Direct builder entry point
pub struct Jwt;

impl Jwt {
    /// HS256 operations
    #[must_use]
    pub fn hs256() -> Hs256Builder {
        Hs256Builder::new()
    }

    /// Fresh token to fill in and sign
    #[must_use]
    pub fn token() -> Token {
        Token::new()
    }
}

/// HS256 builder - initial state, no secret yet
#[derive(Debug, Clone, Default)]
pub struct Hs256Builder {
    config: EngineConfig,
}

impl Hs256Builder {
    /// Create new HS256 builder with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set HMAC secret for HS256 signing and verification
    #[must_use]
    pub fn with_secret(self, secret: impl AsRef<[u8]>) -> Hs256 {
        Hs256::new(secret.as_ref(), self.config)
    }
}
