//! Credential management for Gemini API authentication.
//!
//! Credentials are never looked up globally. A client is handed a
//! [`CredentialsProvider`], which may hold the pair directly or resolve it from a
//! [`SecretStore`] keyed by namespace and entry name.

use std::collections::HashMap;
use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use crate::error::GeminiError;

/// Default namespace used to look up sandbox credentials.
pub const DEFAULT_NAMESPACE: &str = "gemini_sandbox";
/// Default entry name for the API key.
pub const API_KEY_ENTRY: &str = "api_key";
/// Default entry name for the API secret.
pub const API_SECRET_ENTRY: &str = "api_secret";

/// API credentials containing the key and secret.
#[derive(Clone)]
pub struct Credentials {
    /// The API key (public identifier)
    pub api_key: String,
    /// The API secret (private, used for signing)
    api_secret: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key and secret.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// Get the API secret for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize how credentials are retrieved,
/// for example from an OS keychain or a secrets manager.
pub trait CredentialsProvider: Send + Sync {
    /// Resolve the credentials for the next signed request.
    ///
    /// Fails with [`GeminiError::CredentialsMissing`] if the key or the secret
    /// is absent.
    fn credentials(&self) -> Result<Credentials, GeminiError>;
}

/// Static credentials provider that holds credentials directly.
#[derive(Clone)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(api_key, api_secret),
        }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn credentials(&self) -> Result<Credentials, GeminiError> {
        non_empty(self.credentials.clone())
    }
}

/// Credentials provider that reads from environment variables once.
///
/// By default, reads from `GEMINI_API_KEY` and `GEMINI_API_SECRET`.
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Create credentials from default environment variables.
    pub fn from_env() -> Result<Self, GeminiError> {
        Self::from_env_vars("GEMINI_API_KEY", "GEMINI_API_SECRET")
    }

    /// Create credentials from custom environment variable names.
    pub fn from_env_vars(key_var: &str, secret_var: &str) -> Result<Self, GeminiError> {
        Self::try_from_env_vars(key_var, secret_var).ok_or(GeminiError::CredentialsMissing)
    }

    /// Try to create credentials from default environment variables.
    ///
    /// Returns `None` if the environment variables are not set.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_vars("GEMINI_API_KEY", "GEMINI_API_SECRET")
    }

    /// Try to create credentials from custom environment variable names.
    pub fn try_from_env_vars(key_var: &str, secret_var: &str) -> Option<Self> {
        let api_key = std::env::var(key_var).ok()?;
        let api_secret = std::env::var(secret_var).ok()?;

        Some(Self {
            credentials: Credentials::new(api_key, api_secret),
        })
    }
}

impl CredentialsProvider for EnvCredentials {
    fn credentials(&self) -> Result<Credentials, GeminiError> {
        non_empty(self.credentials.clone())
    }
}

/// A source of named secrets, grouped by namespace.
///
/// This is the only capability the client needs from an external secret
/// store such as a keyring.
pub trait SecretStore: Send + Sync {
    /// Look up one entry. Returns `None` when the entry does not exist.
    fn get(&self, namespace: &str, name: &str) -> Option<SecretString>;
}

/// In-memory secret store, mostly useful for tests and embedding.
#[derive(Default)]
pub struct MemoryStore {
    entries: HashMap<(String, String), SecretString>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry.
    pub fn insert(
        &mut self,
        namespace: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.entries.insert(
            (namespace.into(), name.into()),
            SecretString::from(value.into()),
        );
    }

    /// Builder-style [`MemoryStore::insert`].
    pub fn with(
        mut self,
        namespace: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.insert(namespace, name, value);
        self
    }
}

impl SecretStore for MemoryStore {
    fn get(&self, namespace: &str, name: &str) -> Option<SecretString> {
        self.entries
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
    }
}

/// Secret store backed by process environment variables.
///
/// Entry `name` in `namespace` is read from `NAMESPACE_NAME`, upper-cased, with
/// every non-alphanumeric character replaced by `_`. The default sandbox key
/// therefore lives in `GEMINI_SANDBOX_API_KEY`.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvStore;

impl EnvStore {
    /// Environment variable name for an entry.
    pub fn var_name(namespace: &str, name: &str) -> String {
        format!("{namespace}_{name}")
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect()
    }
}

impl SecretStore for EnvStore {
    fn get(&self, namespace: &str, name: &str) -> Option<SecretString> {
        std::env::var(Self::var_name(namespace, name))
            .ok()
            .map(SecretString::from)
    }
}

/// Credentials resolved from a [`SecretStore`] on every request.
#[derive(Clone)]
pub struct StoreCredentials {
    store: Arc<dyn SecretStore>,
    namespace: String,
    key_entry: String,
    secret_entry: String,
}

impl StoreCredentials {
    /// Resolve `api_key` and `api_secret` from `namespace`.
    pub fn new(store: Arc<dyn SecretStore>, namespace: impl Into<String>) -> Self {
        Self {
            store,
            namespace: namespace.into(),
            key_entry: API_KEY_ENTRY.to_string(),
            secret_entry: API_SECRET_ENTRY.to_string(),
        }
    }

    /// Use custom entry names for the key and the secret.
    pub fn with_entries(
        mut self,
        key_entry: impl Into<String>,
        secret_entry: impl Into<String>,
    ) -> Self {
        self.key_entry = key_entry.into();
        self.secret_entry = secret_entry.into();
        self
    }

    /// The namespace credentials are read from.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

impl CredentialsProvider for StoreCredentials {
    fn credentials(&self) -> Result<Credentials, GeminiError> {
        let api_key = self
            .store
            .get(&self.namespace, &self.key_entry)
            .ok_or(GeminiError::CredentialsMissing)?;
        let api_secret = self
            .store
            .get(&self.namespace, &self.secret_entry)
            .ok_or(GeminiError::CredentialsMissing)?;

        non_empty(Credentials {
            api_key: api_key.expose_secret().to_string(),
            api_secret,
        })
    }
}

impl std::fmt::Debug for StoreCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreCredentials")
            .field("namespace", &self.namespace)
            .field("key_entry", &self.key_entry)
            .field("secret_entry", &self.secret_entry)
            .finish_non_exhaustive()
    }
}

fn non_empty(credentials: Credentials) -> Result<Credentials, GeminiError> {
    if credentials.api_key.is_empty() || credentials.expose_secret().is_empty() {
        return Err(GeminiError::CredentialsMissing);
    }
    Ok(credentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacted() {
        let creds = Credentials::new("my_key", "super_secret");
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("my_key"));
        assert!(!debug_str.contains("super_secret"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_static_credentials() {
        let provider = StaticCredentials::new("key", "secret");
        let creds = provider.credentials().unwrap();
        assert_eq!(creds.api_key, "key");
        assert_eq!(creds.expose_secret(), "secret");
    }

    #[test]
    fn test_empty_secret_is_missing() {
        let provider = StaticCredentials::new("key", "");
        assert!(matches!(
            provider.credentials(),
            Err(GeminiError::CredentialsMissing)
        ));
    }

    #[test]
    fn test_store_credentials_lookup() {
        let store = MemoryStore::new()
            .with(DEFAULT_NAMESPACE, API_KEY_ENTRY, "sandbox-key")
            .with(DEFAULT_NAMESPACE, API_SECRET_ENTRY, "sandbox-secret")
            .with("gemini_production", API_KEY_ENTRY, "prod-key");

        let sandbox = StoreCredentials::new(Arc::new(store), DEFAULT_NAMESPACE);
        let creds = sandbox.credentials().unwrap();
        assert_eq!(creds.api_key, "sandbox-key");
        assert_eq!(creds.expose_secret(), "sandbox-secret");
    }

    #[test]
    fn test_store_credentials_missing_secret() {
        let store = MemoryStore::new().with("gemini_production", API_KEY_ENTRY, "prod-key");
        let production = StoreCredentials::new(Arc::new(store), "gemini_production");
        assert!(matches!(
            production.credentials(),
            Err(GeminiError::CredentialsMissing)
        ));
    }

    #[test]
    fn test_store_credentials_custom_entries() {
        let store = MemoryStore::new()
            .with("acct", "key", "k")
            .with("acct", "secret", "s");
        let provider = StoreCredentials::new(Arc::new(store), "acct").with_entries("key", "secret");
        assert_eq!(provider.credentials().unwrap().api_key, "k");
    }

    #[test]
    fn test_env_store_var_name() {
        assert_eq!(
            EnvStore::var_name("gemini_sandbox", "api_key"),
            "GEMINI_SANDBOX_API_KEY"
        );
        assert_eq!(EnvStore::var_name("my-acct", "api.secret"), "MY_ACCT_API_SECRET");
    }
}
