//! A header and claims pair that can be signed or verified

use crate::claims::Claims;
use crate::engine;
use crate::error::JwtResult;
use crate::header::Header;
use chrono::Utc;

/// JWT: header plus claims, with no state of its own.
///
/// Not synchronized; share across threads behind a lock, or clone once
/// signed and mutate the copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Header; must carry `typ = "jwt"` and `alg = "HS256"` to sign
    pub header: Header,
    /// Claims
    pub claims: Claims,
}

impl Default for Token {
    fn default() -> Self {
        Self::new()
    }
}

impl Token {
    /// Fresh token: `typ = "jwt"`, `alg = "HS256"`, and `iat` set to now.
    #[must_use]
    pub fn new() -> Self {
        let mut claims = Claims::new();
        claims.set_issued_at(Utc::now());
        Self {
            header: Header::hs256(),
            claims,
        }
    }

    /// Token from an existing header and claims, unchanged
    #[must_use]
    pub fn from_parts(header: Header, claims: Claims) -> Self {
        Self { header, claims }
    }

    /// Sign with HMAC-SHA256 into the compact form.
    ///
    /// Deterministic for equal content and secret. The token is not modified.
    ///
    /// # Errors
    /// [`JwtError::HeaderValidation`](crate::JwtError::HeaderValidation) if
    /// `typ`/`alg` are wrong, [`JwtError::InvalidEncoding`](crate::JwtError::InvalidEncoding)
    /// if a value cannot be written as JSON.
    pub fn sign(&self, secret: impl AsRef<[u8]>) -> JwtResult<String> {
        engine::sign(self, secret.as_ref())
    }

    /// Verify `compact` and load its header and claims into this token.
    ///
    /// The parsed header and claims replace this token's content *before*
    /// the MAC is checked. If the result is
    /// [`JwtError::SignatureMismatch`](crate::JwtError::SignatureMismatch),
    /// the token holds unauthenticated data; it is also left partially
    /// replaced if the claims JSON is malformed after the header parsed. Use
    /// [`verify_then_commit`](Self::verify_then_commit) to keep the token
    /// untouched on failure.
    ///
    /// # Errors
    /// `MalformedToken`, `InvalidEncoding` or `SignatureMismatch`.
    pub fn verify(&mut self, compact: &str, secret: impl AsRef<[u8]>) -> JwtResult<()> {
        engine::verify(self, compact, secret.as_ref())
    }

    /// Like [`verify`](Self::verify), with the same errors for the same
    /// input, but the token is only replaced once the MAC has been checked.
    ///
    /// # Errors
    /// `MalformedToken`, `InvalidEncoding` or `SignatureMismatch`.
    pub fn verify_then_commit(&mut self, compact: &str, secret: impl AsRef<[u8]>) -> JwtResult<()> {
        engine::verify_then_commit(self, compact, secret.as_ref())
    }
}
