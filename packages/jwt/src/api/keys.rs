//! HMAC secret checks

use crate::error::{JwtError, JwtResult};

/// Recommended HS256 secret length in bytes (256 bits)
#[must_use]
pub const fn recommended_secret_len() -> usize {
    32
}

/// Reject secrets shorter than `min_len` bytes
pub(crate) fn validate_hmac_key(secret: &[u8], min_len: usize) -> JwtResult<()> {
    if secret.len() < min_len {
        return Err(JwtError::invalid_key(&format!(
            "HMAC key for HS256 must be at least {} bytes, got {}",
            min_len,
            secret.len()
        )));
    }
    Ok(())
}
