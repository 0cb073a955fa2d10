//! JWT header

use crate::error::{JwtError, JwtResult};
use crate::store::ValueStore;
use std::ops::{Deref, DerefMut};

/// Required value of the `typ` header field
pub const TYPE: &str = "jwt";

/// Required value of the `alg` header field
pub const ALGORITHM: &str = "HS256";

/// JWT header.
///
/// All generic store operations are available through deref. The `typ` and
/// `alg` fields are only checked when the header is marshalled, so a header
/// filled by [`unmarshal`](ValueStore::unmarshal) may hold anything until then.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Header {
    store: ValueStore,
}

impl Header {
    /// Create an empty header with neither `typ` nor `alg` set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a header carrying `typ = "jwt"` and `alg = "HS256"`
    #[must_use]
    pub fn hs256() -> Self {
        let mut header = Self::new();
        header.set("typ", TYPE);
        header.set("alg", ALGORITHM);
        header
    }

    /// Check the mandatory `typ` and `alg` fields.
    ///
    /// # Errors
    /// [`JwtError::HeaderValidation`] if either is missing, not a string, or
    /// has the wrong value.
    pub fn validate(&self) -> JwtResult<()> {
        check_field(&self.store, "typ", TYPE)?;
        check_field(&self.store, "alg", ALGORITHM)
    }

    /// Validate, then encode as JSON. No output is produced on failure.
    ///
    /// # Errors
    /// [`JwtError::HeaderValidation`] from [`validate`](Self::validate), or
    /// [`JwtError::InvalidEncoding`] from the store.
    pub fn marshal(&self) -> JwtResult<Vec<u8>> {
        self.validate()?;
        self.store.marshal()
    }

    pub(crate) fn from_store(store: ValueStore) -> Self {
        Self { store }
    }
}

fn check_field(store: &ValueStore, name: &str, expected: &str) -> JwtResult<()> {
    let actual = store
        .get_string(name)
        .map_err(|e| JwtError::header_validation(&e.to_string()))?;
    if actual != expected {
        return Err(JwtError::header_validation(&format!(
            "invalid {name} {actual}, expected {expected}"
        )));
    }
    Ok(())
}

impl Deref for Header {
    type Target = ValueStore;

    fn deref(&self) -> &ValueStore {
        &self.store
    }
}

impl DerefMut for Header {
    fn deref_mut(&mut self) -> &mut ValueStore {
        &mut self.store
    }
}
