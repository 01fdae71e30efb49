use crate::classify::{ClassifiedError, NOT_FOUND_STATUS, SCRIPT_ERROR_CODE};
use crate::types::HttpResponse;

/// Body-derived classification wins over the status code: a 200 can still carry a script error.
pub fn classify_response(response: &HttpResponse) -> ClassifiedError {
    if let Some(error) = classify_body(&response.body) {
        return error;
    }

    match response.status {
        NOT_FOUND_STATUS => ClassifiedError::NotFound,
        _ => ClassifiedError::None,
    }
}

/// Reads a structured error out of a JSON body.
///
/// Returns `None` when the body is not a JSON object or carries nothing usable.
/// That is the normal case for empty or non-JSON bodies, not a failure.
pub fn classify_body(body: &[u8]) -> Option<ClassifiedError> {
    let parsed: serde_json::Value = serde_json::from_slice(body).ok()?;
    let Some(obj) = parsed.as_object() else {
        tracing::debug!("response body is JSON but not an object");
        return None;
    };

    let error_field = obj.get("error");
    if error_field.and_then(|v| v.as_i64()) == Some(SCRIPT_ERROR_CODE) {
        return Some(ClassifiedError::ScriptError);
    }

    obj.get("message")
        .and_then(non_empty_str)
        .or_else(|| error_field.and_then(non_empty_str))
        .map(|text| ClassifiedError::Message(text.to_string()))
}

fn non_empty_str(value: &serde_json::Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}
