//! Example: Credential sources and request signing.
//!
//! Run with: cargo run --example auth_credentials

use std::sync::Arc;

use gemini_api_client::auth::{
    CredentialsProvider, DEFAULT_NAMESPACE, EnvCredentials, EnvStore, HeaderNames,
    IncreasingNonce, MemoryStore, NonceProvider, StaticCredentials, StoreCredentials,
    TimestampNonce, decode_payload, sign_request,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Static credentials (typically used in tests or explicit config).
    let static_creds = StaticCredentials::new("account-key", "account-secret");
    println!("Static key: {}", static_creds.credentials()?.api_key);

    // Environment credentials are convenient for local dev.
    if let Some(env_creds) = EnvCredentials::try_from_env() {
        println!("Loaded env credentials: {}", env_creds.credentials()?.api_key);
    } else {
        println!("Set GEMINI_API_KEY and GEMINI_API_SECRET to load env credentials.");
    }

    // Namespaced stores resolve entries on every request.
    println!(
        "EnvStore reads {}",
        EnvStore::var_name(DEFAULT_NAMESPACE, "api_key")
    );
    let store = MemoryStore::new()
        .with(DEFAULT_NAMESPACE, "api_key", "store-key")
        .with(DEFAULT_NAMESPACE, "api_secret", "store-secret");
    let store_creds = StoreCredentials::new(Arc::new(store), DEFAULT_NAMESPACE);
    let credentials = store_creds.credentials()?;
    println!("Store credentials: {credentials:?}");

    // Nonces: wall-clock milliseconds, or strictly increasing on request.
    let timestamp = TimestampNonce::new();
    let increasing = IncreasingNonce::new();
    println!("Timestamp nonce: {}", timestamp.next_nonce());
    println!("Increasing nonce: {}", increasing.next_nonce());

    // Sign a request by hand and inspect the headers.
    let params = serde_json::json!({ "order_id": 107421210 });
    let signed = sign_request(&credentials, "order/status", &params, timestamp.next_nonce())?;
    for (name, value) in signed.entries(&HeaderNames::default()) {
        println!("{name}: {value}");
    }
    println!("Decoded payload: {}", decode_payload(&signed.payload)?);

    Ok(())
}
