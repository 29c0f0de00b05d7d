//! Decoding of raw exchange responses.
//!
//! Gemini signals failure with an error envelope, often alongside a 4xx status:
//! ```json
//! {"result": "error", "reason": "InvalidSignature", "message": "..."}
//! ```
//! Any other JSON value is an endpoint-specific success payload.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ExchangeError, GeminiError};

/// Status and body of an HTTP response, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response body as text.
    pub body: String,
}

impl RawResponse {
    /// Create a raw response.
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Decode a response body and check it for the error envelope.
///
/// The decoded value is returned unchanged when it is not an error envelope;
/// no schema validation happens here.
pub fn parse_response(raw: &RawResponse) -> Result<Value, GeminiError> {
    let data: Value = serde_json::from_str(&raw.body).map_err(|e| {
        GeminiError::MalformedResponse(format!(
            "HTTP {}: body is not JSON ({}): {}",
            raw.status, e, raw.body
        ))
    })?;

    if let Some(object) = data.as_object() {
        if object.get("result").and_then(Value::as_str) == Some("error") {
            let field = |name: &str| {
                object
                    .get(name)
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string()
            };
            let error = ExchangeError::new(field("reason"), field("message"));
            tracing::warn!(status = %raw.status, reason = %error.reason, "exchange rejected request");
            return Err(GeminiError::Exchange(error));
        }
    }

    Ok(data)
}

/// Decode a response into a domain record.
pub fn parse_typed<T>(raw: &RawResponse) -> Result<T, GeminiError>
where
    T: DeserializeOwned,
{
    let value = parse_response(raw)?;
    serde_json::from_value(value).map_err(|e| {
        GeminiError::MalformedResponse(format!("unexpected response shape: {e}"))
    })
}
