//! # Checkout SDK transport
//!
//! HTTP transport layer for the Checkout.com payments API:
//! - `get`/`post` against a configured base URL
//! - snake_case → camelCase rewriting of request body keys
//! - static bearer authorization header
//! - typed errors mapped from HTTP failure statuses
//! - an interceptor hook to rewrite URL, headers or body before transmission
//!
//! Higher-level resource wrappers (payments, sources, …) sit on top of this
//! crate and are not part of it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use checkout_sdk::{Config, HttpClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::new("https://api.sandbox.checkout.com/", "sk_test_...", 5_000);
//!     let client = HttpClient::new(config)?;
//!
//!     let response = client
//!         .post("payments", &serde_json::json!({ "source_type": "token" }))
//!         .await?;
//!
//!     println!("{:?}", response.body());
//!     client.close_session();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

// Re-export commonly used types
pub use client::HttpClient;
pub use config::Config;
pub use error::{ApiErrorDetails, Error, Result};
pub use http::{HttpResponse, Interceptor};

// Module declarations
pub mod client;
pub mod config;
pub mod error;
pub mod http;

// Re-export key dependencies for convenience
pub use serde::{Deserialize, Serialize};
pub use serde_json::Value as JsonValue;

/// Prelude module for common imports
///
/// # Examples
///
/// ```rust
/// use checkout_sdk::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Config, Error, HttpClient, HttpResponse, Interceptor, Result};
}

/// SDK version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Product string sent in the `user-agent` header of every request
pub const USER_AGENT: &str = concat!("checkout-sdk-rust/", env!("CARGO_PKG_VERSION"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_user_agent() {
        assert!(USER_AGENT.starts_with("checkout-sdk-rust/"));
        assert!(USER_AGENT.ends_with(VERSION));
    }
}
