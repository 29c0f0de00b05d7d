//! Error types for the Gemini client library.

use thiserror::Error;

/// The main error type for all Gemini client operations.
#[derive(Error, Debug)]
pub enum GeminiError {
    /// The credential provider had no API key or no API secret.
    #[error("Missing credentials: API key and secret required for private endpoints")]
    CredentialsMissing,

    /// Request parameters could not be encoded into a signed payload.
    #[error("Invalid request parameters: {0}")]
    InvalidParameters(String),

    /// Network-level failure (connect, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest_middleware::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// The response body was not JSON or did not match the expected record.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The exchange answered with an error envelope.
    #[error("Gemini API error: {0}")]
    Exchange(ExchangeError),
}

impl From<reqwest::Error> for GeminiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(reqwest_middleware::Error::Reqwest(err))
    }
}

impl GeminiError {
    /// Check if the transport gave up waiting for the exchange.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Transport(reqwest_middleware::Error::Reqwest(e)) => e.is_timeout(),
            _ => false,
        }
    }

    /// Whether repeating the call could plausibly succeed.
    ///
    /// Only network failures and exchange-side availability or rate-limit
    /// rejections qualify. A repeated private call is re-signed with a fresh
    /// nonce, so the caller must build a new request rather than replay one.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Exchange(e) => e.is_rate_limit() || e.is_service_unavailable(),
            _ => false,
        }
    }

    /// The exchange error envelope, if this error carries one.
    pub fn exchange_error(&self) -> Option<&ExchangeError> {
        match self {
            Self::Exchange(e) => Some(e),
            _ => None,
        }
    }
}

/// Error envelope returned by the exchange.
///
/// Gemini reports failures as `{"result": "error", "reason": ..., "message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeError {
    /// Machine-readable reason (e.g., "InvalidSignature")
    pub reason: String,
    /// Human-readable error message
    pub message: String,
}

impl std::fmt::Display for ExchangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.reason, self.message)
    }
}

impl ExchangeError {
    /// Create a new exchange error from reason and message.
    pub fn new(reason: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            message: message.into(),
        }
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limit(&self) -> bool {
        self.reason == error_codes::RATE_LIMIT || self.reason == error_codes::RATE_LIMITED
    }

    /// Check if this is an invalid nonce error.
    pub fn is_invalid_nonce(&self) -> bool {
        self.reason == error_codes::INVALID_NONCE
    }

    /// Check if this is an invalid signature error.
    pub fn is_invalid_signature(&self) -> bool {
        self.reason == error_codes::INVALID_SIGNATURE
    }

    /// Check if the API key was rejected or not sent.
    pub fn is_invalid_key(&self) -> bool {
        matches!(
            self.reason.as_str(),
            error_codes::INVALID_API_KEY | error_codes::MISSING_API_KEY_HEADER
        )
    }

    /// Check if the key lacks the role required by the endpoint.
    pub fn is_permission_denied(&self) -> bool {
        self.reason == error_codes::MISSING_ROLE
    }

    /// Check if this is a service unavailable error.
    pub fn is_service_unavailable(&self) -> bool {
        matches!(
            self.reason.as_str(),
            error_codes::MAINTENANCE | error_codes::SYSTEM
        )
    }
}

/// Known Gemini error reasons for pattern matching.
pub mod error_codes {
    /// Authentication errors
    pub const INVALID_SIGNATURE: &str = "InvalidSignature";
    pub const INVALID_NONCE: &str = "InvalidNonce";
    pub const INVALID_API_KEY: &str = "InvalidApiKey";
    pub const MISSING_API_KEY_HEADER: &str = "MissingApikeyHeader";
    pub const MISSING_PAYLOAD_HEADER: &str = "MissingPayloadHeader";
    pub const MISSING_SIGNATURE_HEADER: &str = "MissingSignatureHeader";
    pub const MISSING_ROLE: &str = "MissingRole";

    /// Request errors
    pub const BAD_REQUEST: &str = "BadRequest";
    pub const INVALID_JSON: &str = "InvalidJson";
    pub const INVALID_SYMBOL: &str = "InvalidSymbol";
    pub const INVALID_PRICE: &str = "InvalidPrice";
    pub const INVALID_QUANTITY: &str = "InvalidQuantity";

    /// Order errors
    pub const INSUFFICIENT_FUNDS: &str = "InsufficientFunds";
    pub const ORDER_NOT_FOUND: &str = "OrderNotFound";

    /// Rate limiting
    pub const RATE_LIMIT: &str = "RateLimit";
    pub const RATE_LIMITED: &str = "RateLimited";

    /// Service errors
    pub const MAINTENANCE: &str = "Maintenance";
    pub const SYSTEM: &str = "System";
}
