//! Structured error details returned by the analysis service.

use grafos_core::GrafosError;
use serde::Deserialize;
use serde_json::Value;

/// Error body: `{"detail": "..."}` or `{"detail": {"error": "...", "code": "..."}}`
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,

    #[serde(default)]
    code: Option<Value>,
}

/// Build a service error from a non-success status and its raw body
///
/// Missing or malformed bodies are tolerated and produce an error without
/// message or code.
pub fn service_error(status: u16, body: &str) -> GrafosError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();

    let (message, detail_code) = match parsed.detail {
        Some(Value::String(s)) => (Some(s), None),
        Some(Value::Object(fields)) => (
            fields.get("error").and_then(Value::as_str).map(str::to_string),
            fields.get("code").and_then(Value::as_str).map(str::to_string),
        ),
        _ => (None, None),
    };

    GrafosError::Service {
        status,
        message: message.filter(|m| !m.is_empty()),
        code: detail_code.or_else(|| parsed.code.as_ref().and_then(Value::as_str).map(str::to_string)),
    }
}
