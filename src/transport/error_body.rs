use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
struct ErrorJsonBody {
    #[serde(default)]
    message: Option<Value>,
    #[serde(default)]
    error: Option<Value>,
}

/// Human-readable reason for a non-2xx response.
///
/// Prefers the body's `message`, then `error`, then falls back to `HTTP Error <status>`
/// (also used when the body is empty or not a JSON object).
pub fn decode_api_error_message(status: u16, body: &[u8]) -> String {
    let parsed = serde_json::from_slice::<ErrorJsonBody>(body).unwrap_or_default();
    parsed
        .message
        .and_then(reason)
        .or_else(|| parsed.error.and_then(reason))
        .unwrap_or_else(|| format!("HTTP Error {status}"))
}

fn reason(value: Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        Value::String(text) if text.trim().is_empty() => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}
