//! Configuration for the transport client

use secrecy::{ExposeSecret, SecretString};

/// Connection settings for the payments API.
///
/// Holds the base URL requests are resolved against, the account secret key
/// and the per-request timeout. The struct is owned exclusively by the client
/// and immutable for its lifetime. There are no defaults; the caller supplies
/// every value.
#[derive(Debug, Clone)]
pub struct Config {
    api_base_url: String,
    secret_key: SecretString,
    timeout: u64,
}

impl Config {
    /// Create a configuration from a base URL, a secret key and a request
    /// timeout in milliseconds.
    pub fn new(
        api_base_url: impl Into<String>,
        secret_key: impl Into<String>,
        timeout_ms: u64,
    ) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            secret_key: SecretString::new(secret_key.into().into_boxed_str()),
            timeout: timeout_ms,
        }
    }

    /// Base URL requests are resolved against.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Secret key sent in the `authorization` header.
    pub fn secret_key(&self) -> &str {
        self.secret_key.expose_secret()
    }

    /// Per-request timeout in milliseconds.
    pub fn timeout(&self) -> u64 {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_accessors() {
        let config = Config::new("https://api.sandbox.checkout.com/", "sk_test_abc", 5_000);
        assert_eq!(config.api_base_url(), "https://api.sandbox.checkout.com/");
        assert_eq!(config.secret_key(), "sk_test_abc");
        assert_eq!(config.timeout(), 5_000);
    }

    #[test]
    fn test_debug_does_not_leak_secret() {
        let config = Config::new("https://api.sandbox.checkout.com/", "sk_test_abc", 5_000);
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("sk_test_abc"));
    }
}
