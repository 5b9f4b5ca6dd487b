use serde_json::Value;

/// Serialize caller-supplied options into JSON request text.
///
/// Absent options and JSON `null` both encode as an empty object. Never fails.
pub fn encode_request(options: Option<&Value>) -> String {
    match options {
        Some(value) if !value.is_null() => {
            serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
        }
        _ => "{}".to_string(),
    }
}

/// Parse response text into a bare JSON value.
///
/// Fail-closed: empty text and malformed JSON yield `None` rather than an
/// error, so a pipe-protocol hiccup degrades to "no result".
pub fn decode_value(text: &str) -> Option<Value> {
    if text.is_empty() {
        return None;
    }
    serde_json::from_str(text).ok()
}

/// Parse response text as an envelope and project its `data` field.
///
/// A well-formed envelope without a `data` field yields `Some(Value::Null)` —
/// a valid success value, distinct from the `None` of a parse failure.
pub fn decode_envelope(text: &str) -> Option<Value> {
    let value = decode_value(text)?;
    match value {
        Value::Object(mut map) => Some(map.remove("data").unwrap_or(Value::Null)),
        _ => Some(Value::Null),
    }
}
