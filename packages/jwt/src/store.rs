//! Named value store shared by [`Header`](crate::Header) and [`Claims`](crate::Claims)
//!
//! Values are coerced on `set` and type-checked on every typed read; a read
//! never widens or converts. JSON round-tripping is exact for everything
//! `set` can produce, except that NaN and infinities cannot be marshalled.

use crate::encoding::{base64_decode, parse_timestamp};
use crate::error::{JwtError, JwtResult};
use crate::value::{Scalar, Value};
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};

/// Mapping from names to dynamically typed values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueStore {
    values: HashMap<String, Value>,
}

impl ValueStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `name`, replacing any previous value.
    ///
    /// Integers become numbers, bytes become base64 text and timestamps
    /// become RFC 3339 text. Names are not validated.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Scalar>) {
        self.values.insert(name.into(), value.into().coerce());
    }

    /// Whether a value is stored under `name`
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Remove the value stored under `name`, if any
    pub fn del(&mut self, name: &str) {
        self.values.remove(name);
    }

    /// Raw access to the stored value
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    fn lookup(&self, name: &str) -> JwtResult<&Value> {
        self.values.get(name).ok_or_else(|| JwtError::not_found(name))
    }

    /// Read a string value.
    ///
    /// # Errors
    /// [`JwtError::NotFound`] if absent, [`JwtError::TypeMismatch`] if not a string.
    pub fn get_string(&self, name: &str) -> JwtResult<&str> {
        let value = self.lookup(name)?;
        value
            .as_str()
            .ok_or_else(|| JwtError::type_mismatch(name, "string", value.type_name()))
    }

    /// Read a boolean value.
    ///
    /// # Errors
    /// [`JwtError::NotFound`] if absent, [`JwtError::TypeMismatch`] if not a bool.
    pub fn get_bool(&self, name: &str) -> JwtResult<bool> {
        let value = self.lookup(name)?;
        value
            .as_bool()
            .ok_or_else(|| JwtError::type_mismatch(name, "bool", value.type_name()))
    }

    /// Read a numeric value.
    ///
    /// # Errors
    /// [`JwtError::NotFound`] if absent, [`JwtError::TypeMismatch`] if not a number.
    pub fn get_f64(&self, name: &str) -> JwtResult<f64> {
        let value = self.lookup(name)?;
        value
            .as_f64()
            .ok_or_else(|| JwtError::type_mismatch(name, "number", value.type_name()))
    }

    /// Read a byte value stored as base64 text.
    ///
    /// # Errors
    /// [`JwtError::NotFound`], [`JwtError::TypeMismatch`], or
    /// [`JwtError::Decode`] if the text is not valid base64.
    pub fn get_bytes(&self, name: &str) -> JwtResult<Vec<u8>> {
        let text = self.get_string(name)?;
        base64_decode(text).map_err(|e| JwtError::decode(name, e))
    }

    /// Read a timestamp stored as RFC 3339 text.
    ///
    /// # Errors
    /// [`JwtError::NotFound`], [`JwtError::TypeMismatch`], or
    /// [`JwtError::Decode`] if the text is not a valid timestamp.
    pub fn get_time(&self, name: &str) -> JwtResult<DateTime<Utc>> {
        let text = self.get_string(name)?;
        parse_timestamp(text).map_err(|e| JwtError::decode(name, e))
    }

    /// Names of all stored values, in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.values.keys().map(String::as_str)
    }

    /// All stored entries, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of stored values
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the store holds no values
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Encode every entry as one JSON object with keys in sorted order.
    ///
    /// # Errors
    /// [`JwtError::InvalidEncoding`] if a value has no JSON form.
    pub fn marshal(&self) -> JwtResult<Vec<u8>> {
        let ordered: BTreeMap<&str, &Value> = self.iter().collect();
        let object = ordered
            .into_iter()
            .map(|(k, v)| Ok((k.to_string(), v.to_json()?)))
            .collect::<JwtResult<serde_json::Map<_, _>>>()?;
        serde_json::to_vec(&serde_json::Value::Object(object)).map_err(JwtError::invalid_encoding)
    }

    /// Replace the whole store with the entries of a JSON object.
    ///
    /// Values are not checked against any reserved-field rule. On failure
    /// the store is left as it was.
    ///
    /// # Errors
    /// [`JwtError::InvalidEncoding`] if `bytes` is not a JSON object.
    pub fn unmarshal(&mut self, bytes: &[u8]) -> JwtResult<()> {
        *self = Self::from_json(bytes)?;
        Ok(())
    }

    pub(crate) fn from_json(bytes: &[u8]) -> JwtResult<Self> {
        let object: serde_json::Map<String, serde_json::Value> =
            serde_json::from_slice(bytes).map_err(JwtError::invalid_encoding)?;
        Ok(Self {
            values: object
                .into_iter()
                .map(|(k, v)| (k, Value::from(v)))
                .collect(),
        })
    }
}
