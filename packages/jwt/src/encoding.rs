//! Text encodings shared by the value store and the compact format
//!
//! Byte values and token segments use standard, padded base64 (not the
//! URL-safe alphabet). Timestamps are RFC 3339 in UTC with as many
//! fractional digits as the instant needs, so nanosecond precision survives
//! a round trip. Years outside 0000-9999 are written with a sign and read
//! back the same way.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::{DateTime, NaiveDateTime, Utc};

// %Y keeps the sign of expanded years; %.f prints no fraction for whole seconds
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Standard padded base64 encoding
#[inline]
pub(crate) fn base64_encode(input: &[u8]) -> String {
    STANDARD.encode(input)
}

/// Standard padded base64 decoding
#[inline]
pub(crate) fn base64_decode(input: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(input)
}

/// Canonical text form of a timestamp
#[inline]
pub(crate) fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse the canonical text form; any RFC 3339 offset is accepted and normalized to UTC
#[inline]
pub(crate) fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(input, TIMESTAMP_FORMAT)
        .map(|at| at.and_utc())
        .or_else(|_| DateTime::parse_from_rfc3339(input).map(|at| at.with_timezone(&Utc)))
}
