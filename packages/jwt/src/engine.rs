//! HS256 sign and verify over the compact format

use crate::claims::Claims;
use crate::compact::{self, Segments};
use crate::crypto::hmac_sha256::{hmac_sha256_sign, hmac_sha256_verify};
use crate::error::JwtResult;
use crate::header::Header;
use crate::store::ValueStore;
use crate::token::Token;

/// Decoded, not yet authenticated, segments of a compact token
struct Received<'a> {
    segments: Segments<'a>,
    signature: Vec<u8>,
    header_json: Vec<u8>,
    claims_json: Vec<u8>,
}

impl<'a> Received<'a> {
    fn decode(compact: &'a str) -> JwtResult<Self> {
        let segments = Segments::parse(compact)?;
        let signature = segments.decode_signature()?;
        let header_json = segments.decode_header()?;
        let claims_json = segments.decode_claims()?;
        tracing::trace!(
            header_len = segments.header_len(),
            claims_len = segments.claims_len(),
            "decoded token segments"
        );

        Ok(Self {
            segments,
            signature,
            header_json,
            claims_json,
        })
    }

    fn authenticate(&self, secret: &[u8]) -> JwtResult<()> {
        hmac_sha256_verify(
            self.segments.signing_input().as_bytes(),
            &self.signature,
            secret,
        )
    }
}

pub(crate) fn sign(token: &Token, secret: &[u8]) -> JwtResult<String> {
    let header_json = token.header.marshal()?;
    let claims_json = token.claims.marshal()?;

    let signing_input = compact::signing_input(&header_json, &claims_json);
    let mac = hmac_sha256_sign(signing_input.as_bytes(), secret)?;
    let compact = compact::finish(signing_input, &mac);

    tracing::debug!(
        header_fields = token.header.len(),
        claims_fields = token.claims.len(),
        token_len = compact.len(),
        "signed HS256 token"
    );
    Ok(compact)
}

pub(crate) fn verify(token: &mut Token, compact: &str, secret: &[u8]) -> JwtResult<()> {
    let received = Received::decode(compact)?;

    // Committed before authentication: a bad MAC leaves the parsed content in place
    token.header.unmarshal(&received.header_json)?;
    token.claims.unmarshal(&received.claims_json)?;
    received.authenticate(secret)?;

    tracing::debug!(claims_fields = token.claims.len(), "verified HS256 token");
    Ok(())
}

pub(crate) fn verify_then_commit(token: &mut Token, compact: &str, secret: &[u8]) -> JwtResult<()> {
    let received = Received::decode(compact)?;

    let header = Header::from_store(ValueStore::from_json(&received.header_json)?);
    let claims = Claims::from_store(ValueStore::from_json(&received.claims_json)?);
    received.authenticate(secret)?;

    token.header = header;
    token.claims = claims;
    tracing::debug!(
        claims_fields = token.claims.len(),
        "verified HS256 token before commit"
    );
    Ok(())
}
