pub mod explicit;
pub mod implicit;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

pub use explicit::{decode_explicit, encode_explicit};
pub use implicit::{PROBE_ORDER, decode_implicit, encode_implicit};

/// Discriminator carried in the `type` field of the explicit shape.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum ArgType {
    Boolean,
    Integer,
    String,
    Binary,
}

/// Argument value for a dApp function call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CallArgValue {
    Bool(bool),
    Integer(i64),
    String(String),
    /// Base64 payload. Not validated here.
    Binary(String),
}

impl CallArgValue {
    pub fn arg_type(&self) -> ArgType {
        match self {
            Self::Bool(_) => ArgType::Boolean,
            Self::Integer(_) => ArgType::Integer,
            Self::String(_) => ArgType::String,
            Self::Binary(_) => ArgType::Binary,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let raw: serde_json::Value = serde_json::from_str(json)?;
        decode_implicit(&raw)
    }

    /// The bare JSON payload, shared by both wire shapes.
    pub(crate) fn payload(&self) -> serde_json::Value {
        match self {
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Integer(n) => serde_json::Value::from(*n),
            Self::String(s) | Self::Binary(s) => serde_json::Value::String(s.clone()),
        }
    }
}

/// A typed call argument; `arg_type` always agrees with the variant of `value`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallArg {
    arg_type: ArgType,
    value: CallArgValue,
}

impl CallArg {
    pub fn new(value: CallArgValue) -> Self {
        Self {
            arg_type: value.arg_type(),
            value,
        }
    }

    pub fn try_new(arg_type: ArgType, value: CallArgValue) -> Result<Self, Error> {
        let found = value.arg_type();
        if found != arg_type {
            return Err(Error::TypeMismatch {
                declared: arg_type,
                found,
            });
        }
        Ok(Self { arg_type, value })
    }

    pub fn arg_type(&self) -> ArgType {
        self.arg_type
    }

    pub fn value(&self) -> &CallArgValue {
        &self.value
    }

    pub fn into_value(self) -> CallArgValue {
        self.value
    }

    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let raw: serde_json::Value = serde_json::from_str(json)?;
        decode_explicit(&raw)
    }
}

impl From<CallArgValue> for CallArg {
    fn from(value: CallArgValue) -> Self {
        Self::new(value)
    }
}

impl Serialize for CallArgValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        encode_implicit(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CallArgValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        decode_implicit(&raw).map_err(serde::de::Error::custom)
    }
}

impl Serialize for CallArg {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        encode_explicit(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CallArg {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        decode_explicit(&raw).map_err(serde::de::Error::custom)
    }
}

pub(crate) fn rejected(tag: Option<&str>, reason: impl Into<String>) -> Error {
    let reason = reason.into();
    tracing::debug!(?tag, %reason, "call argument rejected");
    Error::decode(reason)
}
