//! Authentication module for the Gemini API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Nonce generation for replay attack prevention
//! - HMAC-SHA384 payload signing for authenticated requests

mod credentials;
mod nonce;
mod signature;

pub use credentials::{
    API_KEY_ENTRY, API_SECRET_ENTRY, Credentials, CredentialsProvider, DEFAULT_NAMESPACE,
    EnvCredentials, EnvStore, MemoryStore, SecretStore, StaticCredentials, StoreCredentials,
};
pub use nonce::{IncreasingNonce, NonceProvider, TimestampNonce, timestamp_ms};
pub use signature::{
    HeaderNames, SignedHeaders, decode_payload, encode_payload, sign_payload, sign_request,
    versioned_path,
};
