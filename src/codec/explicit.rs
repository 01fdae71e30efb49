//! `{"type": "<tag>", "value": <payload>}`: the discriminator travels next to the payload.

use serde_json::{Map, Value};

use crate::codec::{ArgType, CallArg, CallArgValue, rejected};
use crate::error::Error;

const TYPE_KEY: &str = "type";
const VALUE_KEY: &str = "value";

pub fn encode_explicit(arg: &CallArg) -> Value {
    let mut obj = Map::with_capacity(2);
    obj.insert(TYPE_KEY.into(), Value::String(arg.arg_type.to_string()));
    obj.insert(VALUE_KEY.into(), arg.value.payload());
    Value::Object(obj)
}

/// Decode the explicit shape. The payload must have the JSON kind its tag declares;
/// nothing is coerced.
pub fn decode_explicit(json: &Value) -> Result<CallArg, Error> {
    let obj = json
        .as_object()
        .ok_or_else(|| rejected(None, "expected a JSON object"))?;

    let tag = match obj.get(TYPE_KEY) {
        None | Some(Value::Null) => return Err(rejected(None, "missing type")),
        Some(raw) => raw
            .as_str()
            .ok_or_else(|| rejected(None, "type is not a string"))?,
    };

    let arg_type: ArgType = tag
        .parse()
        .map_err(|_| rejected(Some(tag), format!("unknown type: {tag}")))?;

    let raw = obj
        .get(VALUE_KEY)
        .ok_or_else(|| rejected(Some(tag), "missing value"))?;

    let value = match arg_type {
        ArgType::Boolean => raw.as_bool().map(CallArgValue::Bool),
        ArgType::Integer => raw.as_i64().map(CallArgValue::Integer),
        ArgType::String => raw.as_str().map(|s| CallArgValue::String(s.to_string())),
        ArgType::Binary => raw.as_str().map(|s| CallArgValue::Binary(s.to_string())),
    }
    .ok_or_else(|| {
        rejected(
            Some(tag),
            format!("expected {} value for type {tag}", expected_kind(arg_type)),
        )
    })?;

    Ok(CallArg { arg_type, value })
}

fn expected_kind(arg_type: ArgType) -> &'static str {
    match arg_type {
        ArgType::Boolean => "boolean",
        ArgType::Integer => "64-bit integer",
        ArgType::String | ArgType::Binary => "string",
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use serde_json::json;

    use super::*;

    fn reason(result: Result<CallArg, Error>) -> String {
        match result {
            Err(Error::Decode { reason }) => reason,
            other => format!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn encodes_each_variant_with_its_tag() {
        let cases = [
            (CallArgValue::Bool(true), json!({"type": "boolean", "value": true})),
            (CallArgValue::Integer(42), json!({"type": "integer", "value": 42})),
            (CallArgValue::String("hi".into()), json!({"type": "string", "value": "hi"})),
            (CallArgValue::Binary("AQ==".into()), json!({"type": "binary", "value": "AQ=="})),
        ];
        for (value, expected) in cases {
            assert_eq!(encode_explicit(&CallArg::new(value)), expected);
        }
    }

    #[test]
    fn decodes_each_tag() {
        assert_eq!(
            decode_explicit(&json!({"type": "boolean", "value": false}))
                .unwrap()
                .into_value(),
            CallArgValue::Bool(false)
        );
        assert_eq!(
            decode_explicit(&json!({"type": "integer", "value": i64::MIN}))
                .unwrap()
                .into_value(),
            CallArgValue::Integer(i64::MIN)
        );
        assert_eq!(
            decode_explicit(&json!({"type": "string", "value": "abc"}))
                .unwrap()
                .into_value(),
            CallArgValue::String("abc".into())
        );
        assert_eq!(
            decode_explicit(&json!({"type": "binary", "value": "abc"}))
                .unwrap()
                .into_value(),
            CallArgValue::Binary("abc".into())
        );
    }

    #[test]
    fn integer_tag_with_string_payload_fails() {
        let result = decode_explicit(&json!({"type": "integer", "value": "not-a-number"}));
        assert_eq!(reason(result), "expected 64-bit integer value for type integer");
    }

    #[test]
    fn integer_tag_rejects_floats_and_overflow() {
        assert!(decode_explicit(&json!({"type": "integer", "value": 1.5})).is_err());
        assert!(decode_explicit(&json!({"type": "integer", "value": u64::MAX})).is_err());
    }

    #[test]
    fn boolean_tag_with_integer_payload_fails() {
        let result = decode_explicit(&json!({"type": "boolean", "value": 1}));
        assert_eq!(reason(result), "expected boolean value for type boolean");
    }

    #[test]
    fn missing_type_fails() {
        assert_eq!(reason(decode_explicit(&json!({"value": 1}))), "missing type");
        assert_eq!(
            reason(decode_explicit(&json!({"type": null, "value": 1}))),
            "missing type"
        );
        assert_eq!(
            reason(decode_explicit(&json!({"type": 3, "value": 1}))),
            "type is not a string"
        );
    }

    #[test]
    fn unknown_type_fails() {
        assert_eq!(
            reason(decode_explicit(&json!({"type": "unknown", "value": 1}))),
            "unknown type: unknown"
        );
        assert_eq!(
            reason(decode_explicit(&json!({"type": "bool", "value": true}))),
            "unknown type: bool"
        );
    }

    #[test]
    fn missing_value_fails() {
        assert_eq!(
            reason(decode_explicit(&json!({"type": "string"}))),
            "missing value"
        );
    }

    #[test]
    fn non_object_fails() {
        assert_eq!(
            reason(decode_explicit(&json!(["integer", 1]))),
            "expected a JSON object"
        );
    }
}
