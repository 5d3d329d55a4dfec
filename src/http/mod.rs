//! HTTP surface of the transport
//!
//! Key-case conversion, the pre-transmission interceptor hook and the
//! response wrapper handed back to callers.

pub use interceptor::{Interceptor, identity};
pub use response::HttpResponse;

pub(crate) mod convert;
mod interceptor;
mod response;

// Re-export HTTP types from the http crate for convenience
pub use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
