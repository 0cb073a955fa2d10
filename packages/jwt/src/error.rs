//! JWT error types

use thiserror::Error;

/// JWT operation result type
pub type JwtResult<T> = Result<T, JwtError>;

/// JWT error types
///
/// Every failure in the crate is reported through this enum; nothing is
/// swallowed or downgraded to a log line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    /// No value is stored under the requested name
    #[error("no such value {0}")]
    NotFound(String),
    /// The stored value has a different type than the one requested
    #[error("{name} is not a {expected} value (found {found})")]
    TypeMismatch {
        /// Name of the value
        name: String,
        /// Requested type
        expected: &'static str,
        /// Type actually stored
        found: &'static str,
    },
    /// A stored string could not be decoded as base64 or as a timestamp
    #[error("unable to decode {name}: {reason}")]
    Decode {
        /// Name of the value
        name: String,
        /// Decoder failure
        reason: String,
    },
    /// JSON or segment encoding failure
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),
    /// Compact token does not have exactly three non-empty segments
    #[error("malformed token: {0}")]
    MalformedToken(String),
    /// Header `typ` or `alg` is missing or incorrect
    #[error("header validation failed: {0}")]
    HeaderValidation(String),
    /// Provided MAC does not match the recomputed one
    #[error("signature mismatch")]
    SignatureMismatch,
    /// Secret rejected by the configuration or the MAC primitive
    #[error("invalid key: {0}")]
    InvalidKey(String),
    /// `exp` lies in the past
    #[error("token has expired")]
    Expired,
    /// `nbf` lies in the future
    #[error("token not yet valid")]
    NotYetValid,
}

impl JwtError {
    /// Create a not found error
    #[inline]
    #[must_use]
    pub fn not_found(name: &str) -> Self {
        JwtError::NotFound(name.to_string())
    }

    /// Create a type mismatch error
    #[inline]
    #[must_use]
    pub fn type_mismatch(name: &str, expected: &'static str, found: &'static str) -> Self {
        JwtError::TypeMismatch {
            name: name.to_string(),
            expected,
            found,
        }
    }

    /// Create a decode error
    #[inline]
    #[must_use]
    pub fn decode(name: &str, reason: impl std::fmt::Display) -> Self {
        JwtError::Decode {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an invalid encoding error
    #[inline]
    #[must_use]
    pub fn invalid_encoding(msg: impl std::fmt::Display) -> Self {
        JwtError::InvalidEncoding(msg.to_string())
    }

    /// Create a malformed token error
    #[inline]
    #[must_use]
    pub fn malformed_token(msg: &str) -> Self {
        JwtError::MalformedToken(msg.to_string())
    }

    /// Create a header validation error
    #[inline]
    #[must_use]
    pub fn header_validation(msg: &str) -> Self {
        JwtError::HeaderValidation(msg.to_string())
    }

    /// Create an invalid key error
    #[inline]
    #[must_use]
    pub fn invalid_key(msg: &str) -> Self {
        JwtError::InvalidKey(msg.to_string())
    }
}
