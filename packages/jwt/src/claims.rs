//! JWT claims and the reserved-field accessors.

use crate::error::{JwtError, JwtResult};
use crate::store::ValueStore;
use chrono::{DateTime, Duration, Utc};
use std::ops::{Deref, DerefMut};

/// Short names of the reserved claims.
pub mod reserved {
    /// Issuer.
    pub const ISSUER: &str = "iss";
    /// Audience.
    pub const AUDIENCE: &str = "aud";
    /// Principal.
    pub const PRINCIPAL: &str = "prn";
    /// JWT ID.
    pub const JWT_ID: &str = "jti";
    /// Type.
    pub const TYPE: &str = "typ";
    /// Expiry.
    pub const EXPIRATION: &str = "exp";
    /// Not before.
    pub const NOT_BEFORE: &str = "nbf";
    /// Issued-at.
    pub const ISSUED_AT: &str = "iat";
}

/// JWT claims.
///
/// A [`ValueStore`] with no mandatory keys. Reserved accessors give the
/// short-named claims a fixed type; the generic store (through deref) does
/// not enforce it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Claims {
    store: ValueStore,
}

impl Claims {
    /// Create empty claims.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_store(store: ValueStore) -> Self {
        Self { store }
    }

    fn get_timestamp(&self, name: &str) -> JwtResult<DateTime<Utc>> {
        // A number here is an epoch encoding this crate never writes
        self.store.get_time(name).map_err(|e| match e {
            JwtError::TypeMismatch { found, .. } => {
                JwtError::decode(name, format!("expected RFC 3339 text, found {found}"))
            }
            other => other,
        })
    }

    /// Set the issued-at (iat) claim.
    pub fn set_issued_at(&mut self, iat: DateTime<Utc>) {
        self.store.set(reserved::ISSUED_AT, iat);
    }

    /// Issued-at (iat) claim.
    ///
    /// # Errors
    /// [`JwtError::NotFound`] if absent, [`JwtError::Decode`] if not a timestamp.
    pub fn issued_at(&self) -> JwtResult<DateTime<Utc>> {
        self.get_timestamp(reserved::ISSUED_AT)
    }

    /// Set the expiration (exp) claim.
    pub fn set_expiration(&mut self, exp: DateTime<Utc>) {
        self.store.set(reserved::EXPIRATION, exp);
    }

    /// Set the expiration (exp) claim relative to now.
    pub fn set_expires_in(&mut self, dur: Duration) {
        self.set_expiration(Utc::now() + dur);
    }

    /// Expiration (exp) claim.
    ///
    /// # Errors
    /// [`JwtError::NotFound`] if absent, [`JwtError::Decode`] if not a timestamp.
    pub fn expiration(&self) -> JwtResult<DateTime<Utc>> {
        self.get_timestamp(reserved::EXPIRATION)
    }

    /// Set the not-before (nbf) claim.
    pub fn set_not_before(&mut self, nbf: DateTime<Utc>) {
        self.store.set(reserved::NOT_BEFORE, nbf);
    }

    /// Not-before (nbf) claim.
    ///
    /// # Errors
    /// [`JwtError::NotFound`] if absent, [`JwtError::Decode`] if not a timestamp.
    pub fn not_before(&self) -> JwtResult<DateTime<Utc>> {
        self.get_timestamp(reserved::NOT_BEFORE)
    }

    /// Set the issuer (iss) claim.
    pub fn set_issuer(&mut self, iss: impl Into<String>) {
        self.store.set(reserved::ISSUER, iss.into());
    }

    /// Issuer (iss) claim.
    ///
    /// # Errors
    /// [`JwtError::NotFound`] if absent, [`JwtError::TypeMismatch`] if not a string.
    pub fn issuer(&self) -> JwtResult<&str> {
        self.store.get_string(reserved::ISSUER)
    }

    /// Set the audience (aud) claim.
    pub fn set_audience(&mut self, aud: impl Into<String>) {
        self.store.set(reserved::AUDIENCE, aud.into());
    }

    /// Audience (aud) claim.
    ///
    /// # Errors
    /// [`JwtError::NotFound`] if absent, [`JwtError::TypeMismatch`] if not a string.
    pub fn audience(&self) -> JwtResult<&str> {
        self.store.get_string(reserved::AUDIENCE)
    }

    /// Set the principal (prn) claim.
    pub fn set_principal(&mut self, prn: impl Into<String>) {
        self.store.set(reserved::PRINCIPAL, prn.into());
    }

    /// Principal (prn) claim.
    ///
    /// # Errors
    /// [`JwtError::NotFound`] if absent, [`JwtError::TypeMismatch`] if not a string.
    pub fn principal(&self) -> JwtResult<&str> {
        self.store.get_string(reserved::PRINCIPAL)
    }

    /// Set the JWT ID (jti) claim.
    pub fn set_jti(&mut self, jti: impl Into<String>) {
        self.store.set(reserved::JWT_ID, jti.into());
    }

    /// JWT ID (jti) claim.
    ///
    /// # Errors
    /// [`JwtError::NotFound`] if absent, [`JwtError::TypeMismatch`] if not a string.
    pub fn jti(&self) -> JwtResult<&str> {
        self.store.get_string(reserved::JWT_ID)
    }

    /// Set the type (typ) claim.
    pub fn set_token_type(&mut self, typ: impl Into<String>) {
        self.store.set(reserved::TYPE, typ.into());
    }

    /// Type (typ) claim.
    ///
    /// # Errors
    /// [`JwtError::NotFound`] if absent, [`JwtError::TypeMismatch`] if not a string.
    pub fn token_type(&self) -> JwtResult<&str> {
        self.store.get_string(reserved::TYPE)
    }

    /// Check `exp` and `nbf` against `now`, allowing `leeway` of clock skew
    /// either way. Absent fields pass.
    ///
    /// # Errors
    /// [`JwtError::Expired`], [`JwtError::NotYetValid`], or
    /// [`JwtError::Decode`] if a present field is not a timestamp.
    pub fn validate_time_window(&self, now: DateTime<Utc>, leeway: Duration) -> JwtResult<()> {
        if self.has(reserved::EXPIRATION) {
            let exp = self.expiration()?;
            // Past the end of the calendar counts as never expiring
            if exp.checked_add_signed(leeway).is_some_and(|limit| now > limit) {
                return Err(JwtError::Expired);
            }
        }
        if self.has(reserved::NOT_BEFORE) {
            let nbf = self.not_before()?;
            if now.checked_add_signed(leeway).is_some_and(|skewed| skewed < nbf) {
                return Err(JwtError::NotYetValid);
            }
        }
        Ok(())
    }
}

impl Deref for Claims {
    type Target = ValueStore;

    fn deref(&self) -> &ValueStore {
        &self.store
    }
}

impl DerefMut for Claims {
    fn deref_mut(&mut self) -> &mut ValueStore {
        &mut self.store
    }
}
