//! `{"integer": n}` | `{"string": s}` | `{"binary": s}` | `{"bool": b}`: the key is the discriminator.

use serde_json::{Map, Value};

use crate::codec::{CallArgValue, rejected};
use crate::error::Error;

pub const INTEGER_KEY: &str = "integer";
pub const STRING_KEY: &str = "string";
pub const BINARY_KEY: &str = "binary";
pub const BOOL_KEY: &str = "bool";

pub type Probe = fn(&Value) -> Option<CallArgValue>;

/// Keys tried by [`decode_implicit`], in order; the first that parses wins.
///
/// The order is load-bearing. `string` and `binary` both hold JSON strings,
/// so an object carrying both decodes as `String`.
pub const PROBE_ORDER: &[(&str, Probe)] = &[
    (INTEGER_KEY, probe_integer),
    (STRING_KEY, probe_string),
    (BINARY_KEY, probe_binary),
    (BOOL_KEY, probe_bool),
];

fn probe_integer(raw: &Value) -> Option<CallArgValue> {
    raw.as_i64().map(CallArgValue::Integer)
}

fn probe_string(raw: &Value) -> Option<CallArgValue> {
    raw.as_str().map(|s| CallArgValue::String(s.to_string()))
}

fn probe_binary(raw: &Value) -> Option<CallArgValue> {
    raw.as_str().map(|s| CallArgValue::Binary(s.to_string()))
}

fn probe_bool(raw: &Value) -> Option<CallArgValue> {
    raw.as_bool().map(CallArgValue::Bool)
}

fn key_for(value: &CallArgValue) -> &'static str {
    match value {
        CallArgValue::Integer(_) => INTEGER_KEY,
        CallArgValue::String(_) => STRING_KEY,
        CallArgValue::Binary(_) => BINARY_KEY,
        CallArgValue::Bool(_) => BOOL_KEY,
    }
}

pub fn encode_implicit(value: &CallArgValue) -> Value {
    let mut obj = Map::with_capacity(1);
    obj.insert(key_for(value).into(), value.payload());
    Value::Object(obj)
}

/// A key whose payload has the wrong JSON kind is skipped, not fatal;
/// decoding fails only when no probe succeeds.
pub fn decode_implicit(json: &Value) -> Result<CallArgValue, Error> {
    let obj = json
        .as_object()
        .ok_or_else(|| rejected(None, "expected a JSON object"))?;

    PROBE_ORDER
        .iter()
        .find_map(|(key, probe)| obj.get(*key).and_then(probe))
        .ok_or_else(|| rejected(None, "no recognised argument key"))
}
