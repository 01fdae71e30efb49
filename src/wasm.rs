use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::classify::{ClassifiedError, ErrorClassifier};
use crate::codec::{self, CallArg};
use crate::types::{Failure, HttpResponse, TransportFailure};

fn to_js<T: Serialize>(value: &T) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}

fn error_result(msg: &str) -> JsValue {
    to_js(&serde_json::json!({ "error": msg }))
}

fn classified(error: &ClassifiedError) -> JsValue {
    to_js(&serde_json::json!({ "classified": error }))
}

/// Classify a completed HTTP response.
#[wasm_bindgen]
pub fn classify_http_response(status: u16, body: &str) -> JsValue {
    let failure = Failure::from(HttpResponse::new(status, body));
    classified(&ErrorClassifier::classify(&failure))
}

/// Classify a transport failure given its error domain and code.
#[wasm_bindgen]
pub fn classify_transport_error(domain: &str, code: i32) -> JsValue {
    let failure = Failure::from(TransportFailure::new(domain, i64::from(code)));
    classified(&ErrorClassifier::classify(&failure))
}

/// `{"type": "integer", "value": 1}` -> `{"integer": 1}`.
#[wasm_bindgen]
pub fn explicit_to_implicit(json: &str) -> JsValue {
    match CallArg::from_json_str(json) {
        Ok(arg) => to_js(&codec::encode_implicit(arg.value())),
        Err(e) => error_result(&e.to_string()),
    }
}

/// `{"integer": 1}` -> `{"type": "integer", "value": 1}`.
#[wasm_bindgen]
pub fn implicit_to_explicit(json: &str) -> JsValue {
    match codec::CallArgValue::from_json_str(json) {
        Ok(value) => to_js(&codec::encode_explicit(&CallArg::new(value))),
        Err(e) => error_result(&e.to_string()),
    }
}
