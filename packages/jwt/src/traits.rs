//! Signing interface.

use crate::api::Hs256;
use crate::error::JwtResult;
use crate::header::ALGORITHM;
use crate::token::Token;

/// Signing algorithm interface.
///
/// Implementations must be thread-safe (Send + Sync).
pub trait Signer: Send + Sync + 'static {
    /// Sign a token into its compact form.
    ///
    /// # Errors
    /// Any failure of header validation, encoding or keying.
    fn sign(&self, token: &Token) -> JwtResult<String>;

    /// Verify a compact token into `token`.
    ///
    /// # Errors
    /// Any failure of parsing, decoding or authentication.
    fn verify(&self, token: &mut Token, compact: &str) -> JwtResult<()>;

    /// Header `alg` value.
    fn alg(&self) -> &'static str;
}

impl Signer for Hs256 {
    fn sign(&self, token: &Token) -> JwtResult<String> {
        Hs256::sign(self, token)
    }

    fn verify(&self, token: &mut Token, compact: &str) -> JwtResult<()> {
        Hs256::verify(self, token, compact)
    }

    fn alg(&self) -> &'static str {
        ALGORITHM
    }
}

/// Implementation of Signer for Arc<T> to allow shared ownership.
impl<T: Signer> Signer for std::sync::Arc<T> {
    fn sign(&self, token: &Token) -> JwtResult<String> {
        (**self).sign(token)
    }

    fn verify(&self, token: &mut Token, compact: &str) -> JwtResult<()> {
        (**self).verify(token, compact)
    }

    fn alg(&self) -> &'static str {
        (**self).alg()
    }
}
