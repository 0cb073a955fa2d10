//! Dynamically typed values held by headers and claims
//!
//! [`Scalar`] is what callers hand to `set`; [`Value`] is what the store
//! keeps. The only path from one to the other is [`Scalar::coerce`], so the
//! stored representation after a `set` is always a string, number, bool or
//! null. Arrays and objects only appear when they arrive through `unmarshal`.

use crate::encoding::{base64_encode, format_timestamp};
use crate::error::{JwtError, JwtResult};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// A stored value, shaped like JSON with every number held as `f64`
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JSON `null`
    Null,
    /// JSON boolean
    Bool(bool),
    /// JSON number
    Number(f64),
    /// JSON string; also the storage form of bytes and timestamps
    String(String),
    /// JSON array received on the wire
    Array(Vec<Value>),
    /// JSON object received on the wire
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Name of the stored tag, used in type mismatch errors
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// The string, if this is a string
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The number, if this is a number
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The boolean, if this is a boolean
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Whether this is `null`
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Convert to a `serde_json` value.
    ///
    /// # Errors
    /// Returns [`JwtError::InvalidEncoding`] for NaN or infinite numbers,
    /// which JSON cannot represent.
    pub(crate) fn to_json(&self) -> JwtResult<serde_json::Value> {
        use serde_json::Value as Json;

        Ok(match self {
            Value::Null => Json::Null,
            Value::Bool(b) => Json::Bool(*b),
            Value::Number(n) => serde_json::Number::from_f64(*n)
                .map(Json::Number)
                .ok_or_else(|| JwtError::invalid_encoding(format!("unsupported number {n}")))?,
            Value::String(s) => Json::String(s.clone()),
            Value::Array(items) => Json::Array(
                items
                    .iter()
                    .map(Value::to_json)
                    .collect::<JwtResult<Vec<_>>>()?,
            ),
            Value::Object(map) => Json::Object(
                map.iter()
                    .map(|(k, v)| Ok((k.clone(), v.to_json()?)))
                    .collect::<JwtResult<serde_json::Map<_, _>>>()?,
            ),
        })
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            // Every JSON number is read as a double, whatever its textual form
            Json::Number(n) => n.as_f64().map_or(Value::Null, Value::Number),
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Json::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

/// A value as supplied to `set`, before coercion
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Stored as `null`
    Null,
    /// Stored verbatim
    Bool(bool),
    /// Stored verbatim; every integer input lands here too
    Number(f64),
    /// Stored verbatim
    String(String),
    /// Stored as standard base64 text
    Bytes(Vec<u8>),
    /// Stored as RFC 3339 text
    Timestamp(DateTime<Utc>),
}

impl Scalar {
    /// Apply the insertion coercion table.
    #[must_use]
    pub fn coerce(self) -> Value {
        match self {
            Scalar::Null => Value::Null,
            Scalar::Bool(b) => Value::Bool(b),
            Scalar::Number(n) => Value::Number(n),
            Scalar::String(s) => Value::String(s),
            Scalar::Bytes(bytes) => Value::String(base64_encode(&bytes)),
            Scalar::Timestamp(at) => Value::String(format_timestamp(&at)),
        }
    }
}

macro_rules! scalar_from_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn from(value: $ty) -> Self {
                    Scalar::Number(value as f64)
                }
            }
        )*
    };
}

scalar_from_number!(i8, u8, i16, u16, i32, u32, i64, u64, isize, usize, f32, f64);

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::String(value)
    }
}

impl From<&String> for Scalar {
    fn from(value: &String) -> Self {
        Scalar::String(value.clone())
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_string())
    }
}

impl From<Vec<u8>> for Scalar {
    fn from(value: Vec<u8>) -> Self {
        Scalar::Bytes(value)
    }
}

impl From<&[u8]> for Scalar {
    fn from(value: &[u8]) -> Self {
        Scalar::Bytes(value.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Scalar {
    fn from(value: [u8; N]) -> Self {
        Scalar::Bytes(value.to_vec())
    }
}

impl From<DateTime<Utc>> for Scalar {
    fn from(value: DateTime<Utc>) -> Self {
        Scalar::Timestamp(value)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map_or(Scalar::Null, Into::into)
    }
}
