//! Compact serialization: `b64(header) . b64(claims) . b64(mac)`
//!
//! All three segments use standard padded base64. Tokens issued by earlier
//! releases depend on this, so it must not move to the URL-safe alphabet.

use crate::encoding::{base64_decode, base64_encode};
use crate::error::{JwtError, JwtResult};

/// Segment separator
pub(crate) const SEPARATOR: char = '.';

/// The three segments of a compact token, borrowed from the input
#[derive(Debug, Clone, Copy)]
pub(crate) struct Segments<'a> {
    signing_input: &'a str,
    header: &'a str,
    claims: &'a str,
    signature: &'a str,
}

impl<'a> Segments<'a> {
    /// Split `compact` into exactly three non-empty segments.
    pub(crate) fn parse(compact: &'a str) -> JwtResult<Self> {
        let parts: Vec<&str> = compact.split(SEPARATOR).collect();
        let &[header, claims, signature] = parts.as_slice() else {
            return Err(JwtError::malformed_token(&format!(
                "expected 3 segments, found {}",
                parts.len()
            )));
        };
        if header.is_empty() || claims.is_empty() || signature.is_empty() {
            return Err(JwtError::malformed_token("empty segment"));
        }

        Ok(Self {
            // Exactly the transmitted bytes of the first two segments and their separator
            signing_input: &compact[..header.len() + 1 + claims.len()],
            header,
            claims,
            signature,
        })
    }

    /// `header . claims` as transmitted
    pub(crate) fn signing_input(&self) -> &'a str {
        self.signing_input
    }

    pub(crate) fn decode_signature(&self) -> JwtResult<Vec<u8>> {
        decode_segment(self.signature, "signature")
    }

    pub(crate) fn decode_header(&self) -> JwtResult<Vec<u8>> {
        decode_segment(self.header, "header")
    }

    pub(crate) fn decode_claims(&self) -> JwtResult<Vec<u8>> {
        decode_segment(self.claims, "claims")
    }

    pub(crate) fn header_len(&self) -> usize {
        self.header.len()
    }

    pub(crate) fn claims_len(&self) -> usize {
        self.claims.len()
    }
}

fn decode_segment(segment: &str, what: &str) -> JwtResult<Vec<u8>> {
    base64_decode(segment).map_err(|e| JwtError::invalid_encoding(format!("{what} segment: {e}")))
}

/// Join encoded header and claims JSON into the signing input
pub(crate) fn signing_input(header_json: &[u8], claims_json: &[u8]) -> String {
    format!(
        "{}{SEPARATOR}{}",
        base64_encode(header_json),
        base64_encode(claims_json)
    )
}

/// Append the encoded MAC to a signing input
pub(crate) fn finish(signing_input: String, mac: &[u8]) -> String {
    let mut compact = signing_input;
    compact.push(SEPARATOR);
    compact.push_str(&base64_encode(mac));
    compact
}
