//! HMAC-SHA256 operations for JWT signing and verification

use crate::error::{JwtError, JwtResult};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Length in bytes of an HMAC-SHA256 tag
pub const MAC_LEN: usize = 32;

fn keyed(secret: &[u8]) -> JwtResult<HmacSha256> {
    HmacSha256::new_from_slice(secret).map_err(|_| JwtError::invalid_key("Invalid HMAC key"))
}

/// Compute the HMAC-SHA256 tag of `data` under `secret`.
///
/// # Errors
/// [`JwtError::InvalidKey`] if the MAC primitive rejects the key.
pub fn hmac_sha256_sign(data: &[u8], secret: &[u8]) -> JwtResult<Vec<u8>> {
    let mut mac = keyed(secret)?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Check `signature` against the tag of `data` under `secret`.
///
/// The comparison runs in constant time with respect to where the tags differ.
///
/// # Errors
/// [`JwtError::SignatureMismatch`] if the tags differ (including length),
/// [`JwtError::InvalidKey`] if the MAC primitive rejects the key.
pub fn hmac_sha256_verify(data: &[u8], signature: &[u8], secret: &[u8]) -> JwtResult<()> {
    let mut mac = keyed(secret)?;
    mac.update(data);
    mac.verify_slice(signature)
        .map_err(|_| JwtError::SignatureMismatch)
}
