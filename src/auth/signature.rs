//! HMAC-SHA384 payload signing for Gemini private endpoints.
//!
//! A private request carries no body. Instead the parameters travel in headers:
//! ```text
//! payload   = base64(json({ request: "/v1/<endpoint>", nonce: <u64>, ..params }))
//! signature = hex(HMAC-SHA384(payload, api_secret))
//! ```
//! The JSON object is serialized with sorted keys so that a given
//! `(endpoint, params, nonce, secret)` always yields the same headers.

use std::collections::BTreeMap;

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde_json::Value;
use sha2::Sha384;

use crate::auth::Credentials;
use crate::error::GeminiError;
use crate::rest::endpoints::API_VERSION;

type HmacSha384 = Hmac<Sha384>;

/// Content type sent with every private request.
pub const CONTENT_TYPE_VALUE: &str = "text/plain";
/// Content length sent with every private request; the body is always empty.
pub const CONTENT_LENGTH_VALUE: &str = "0";
/// Cache directive sent with every private request.
pub const CACHE_CONTROL_VALUE: &str = "no-cache";

/// Names of the three authentication headers.
///
/// The default is `X-API-KEY`, `X-API-PAYLOAD` and `X-API-SIGNATURE`.
/// [`HeaderNames::gemini`] gives the names documented for the Gemini REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderNames {
    /// Header carrying the API key.
    pub api_key: &'static str,
    /// Header carrying the base64 payload.
    pub payload: &'static str,
    /// Header carrying the hex signature.
    pub signature: &'static str,
}

impl HeaderNames {
    /// `X-GEMINI-APIKEY`, `X-GEMINI-PAYLOAD`, `X-GEMINI-SIGNATURE`.
    pub const fn gemini() -> Self {
        Self {
            api_key: "X-GEMINI-APIKEY",
            payload: "X-GEMINI-PAYLOAD",
            signature: "X-GEMINI-SIGNATURE",
        }
    }
}

impl Default for HeaderNames {
    fn default() -> Self {
        Self {
            api_key: "X-API-KEY",
            payload: "X-API-PAYLOAD",
            signature: "X-API-SIGNATURE",
        }
    }
}

/// Authentication material for one private request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    /// The API key the request is made with.
    pub api_key: String,
    /// Base64-encoded JSON payload.
    pub payload: String,
    /// Lowercase hex HMAC-SHA384 of `payload`.
    pub signature: String,
}

impl SignedHeaders {
    /// All six headers of a private request, in wire order.
    pub fn entries(&self, names: &HeaderNames) -> [(&'static str, &str); 6] {
        [
            ("Content-Type", CONTENT_TYPE_VALUE),
            ("Content-Length", CONTENT_LENGTH_VALUE),
            (names.api_key, self.api_key.as_str()),
            (names.payload, self.payload.as_str()),
            (names.signature, self.signature.as_str()),
            ("Cache-Control", CACHE_CONTROL_VALUE),
        ]
    }

    /// Convert into a header map ready for the HTTP client.
    pub fn to_header_map(&self, names: &HeaderNames) -> Result<HeaderMap, GeminiError> {
        let mut headers = HeaderMap::with_capacity(6);
        for (name, value) in self.entries(names) {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                GeminiError::InvalidParameters(format!("invalid header name {name}: {e}"))
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                GeminiError::InvalidParameters(format!("invalid value for header {name}: {e}"))
            })?;
            headers.insert(name, value);
        }
        Ok(headers)
    }
}

/// Build the path the exchange expects in the `request` field, e.g. `/v1/order/new`.
pub fn versioned_path(endpoint: &str) -> String {
    format!("/{}/{}", API_VERSION, endpoint.trim_start_matches('/'))
}

/// Serialize `params` with `request` and `nonce` added, and base64-encode it.
///
/// `params` must serialize to a JSON object (or to `null`, treated as no
/// parameters). Existing `request` or `nonce` keys are overwritten.
pub fn encode_payload<P>(versioned_path: &str, nonce: u64, params: &P) -> Result<String, GeminiError>
where
    P: Serialize + ?Sized,
{
    let value = serde_json::to_value(params)
        .map_err(|e| GeminiError::InvalidParameters(e.to_string()))?;

    let mut payload: BTreeMap<String, Value> = match value {
        Value::Object(map) => map.into_iter().collect(),
        Value::Null => BTreeMap::new(),
        other => {
            return Err(GeminiError::InvalidParameters(format!(
                "parameters must serialize to a JSON object, got {other}"
            )));
        }
    };
    payload.insert("request".to_string(), Value::String(versioned_path.to_string()));
    payload.insert("nonce".to_string(), Value::from(nonce));

    let json = serde_json::to_string(&payload)
        .map_err(|e| GeminiError::InvalidParameters(e.to_string()))?;
    Ok(BASE64.encode(json.as_bytes()))
}

/// Decode a payload produced by [`encode_payload`] back into JSON.
pub fn decode_payload(payload: &str) -> Result<Value, GeminiError> {
    let bytes = BASE64
        .decode(payload)
        .map_err(|e| GeminiError::InvalidParameters(format!("payload is not base64: {e}")))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| GeminiError::InvalidParameters(format!("payload is not JSON: {e}")))
}

/// Compute the lowercase hex HMAC-SHA384 of `payload` keyed by `secret`.
pub fn sign_payload(secret: &str, payload: &str) -> Result<String, GeminiError> {
    let mut mac = HmacSha384::new_from_slice(secret.as_bytes())
        .map_err(|e| GeminiError::InvalidParameters(format!("Invalid HMAC key: {e}")))?;
    mac.update(payload.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Sign a request for a Gemini private endpoint.
///
/// # Arguments
///
/// * `credentials` - API credentials containing the secret
/// * `endpoint` - The endpoint path without version (e.g., "order/new")
/// * `params` - Endpoint parameters, serialized as a JSON object
/// * `nonce` - The nonce value for this request
///
/// # Example
///
/// ```rust
/// use gemini_api_client::auth::{Credentials, sign_request};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("api_key", "api_secret");
/// let params = serde_json::json!({ "symbol": "btcusd" });
/// let headers = sign_request(&credentials, "order/status", &params, 1_000_000)?;
/// assert_eq!(headers.signature.len(), 96);
/// # Ok(())
/// # }
/// ```
pub fn sign_request<P>(
    credentials: &Credentials,
    endpoint: &str,
    params: &P,
    nonce: u64,
) -> Result<SignedHeaders, GeminiError>
where
    P: Serialize + ?Sized,
{
    let path = versioned_path(endpoint);
    let payload = encode_payload(&path, nonce, params)?;
    let signature = sign_payload(credentials.expose_secret(), &payload)?;

    Ok(SignedHeaders {
        api_key: credentials.api_key.clone(),
        payload,
        signature,
    })
}
