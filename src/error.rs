//! Error types for the transport
//!
//! Failing HTTP statuses map onto a closed set of variants with the
//! `thiserror` crate; everything the API reports travels inside
//! [`ApiErrorDetails`] so callers can branch on kind and still log the full
//! context.

use std::fmt;

use thiserror::Error;

/// Result type alias for operations that can fail with a transport error.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the payments transport.
#[derive(Debug, Error)]
pub enum Error {
    /// The API rejected the request as malformed (HTTP 400).
    #[error("bad request: {0}")]
    BadRequest(ApiErrorDetails),

    /// The secret key was missing or not accepted (HTTP 401).
    #[error("authentication failed: {0}")]
    Authentication(ApiErrorDetails),

    /// The requested resource does not exist (HTTP 404).
    #[error("resource not found: {0}")]
    ResourceNotFound(ApiErrorDetails),

    /// The account exceeded its allowed request rate (HTTP 422).
    #[error("too many requests: {0}")]
    TooManyRequests(ApiErrorDetails),

    /// Server-side failure (HTTP 500) or any status without a dedicated kind.
    #[error("API error: {0}")]
    Api(ApiErrorDetails),

    /// The request did not complete within the configured timeout.
    ///
    /// `elapsed` is wall-clock seconds, unlike the millisecond strings
    /// carried everywhere else.
    #[error("request timed out after {elapsed:.2}s")]
    Timeout {
        /// Wall-clock seconds spent before giving up.
        elapsed: f64,
    },

    /// The transport failed before an HTTP status was available (DNS,
    /// connection refused, TLS, …).
    #[error("Unexpected API connection error - please contact support@checkout.com")]
    Connection(#[source] reqwest::Error),

    /// The base URL was invalid or the request path could not be resolved
    /// against it.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The secret key cannot be carried in an HTTP header.
    #[error("invalid header value: {0}")]
    InvalidHeaderValue(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// A payload could not be encoded, or an error-response body did not
    /// carry the JSON shape the API contract promises.
    #[error("failed to decode API payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// Map a failing HTTP response onto its typed variant.
    ///
    /// The error body is required to be JSON carrying `eventId`, `errorCode`
    /// and `message`; anything else surfaces as [`Error::Decode`].
    pub fn from_error_response(status: u16, body: &[u8], elapsed: String) -> Self {
        let parsed: ApiErrorBody = match serde_json::from_slice(body) {
            Ok(parsed) => parsed,
            Err(e) => return Error::Decode(e),
        };

        let details = ApiErrorDetails {
            event_id: parsed.event_id,
            http_status: status,
            error_code: parsed.error_code,
            message: parsed.message,
            elapsed,
        };

        match status {
            400 => Error::BadRequest(details),
            401 => Error::Authentication(details),
            404 => Error::ResourceNotFound(details),
            422 => Error::TooManyRequests(details),
            _ => Error::Api(details),
        }
    }

    /// Context reported by the API, when this error carries any.
    pub fn details(&self) -> Option<&ApiErrorDetails> {
        match self {
            Error::BadRequest(details)
            | Error::Authentication(details)
            | Error::ResourceNotFound(details)
            | Error::TooManyRequests(details)
            | Error::Api(details) => Some(details),
            _ => None,
        }
    }
}

/// Context extracted from an API error response body.
///
/// Carries enough for logging and support escalation: the event id the API
/// assigned, the HTTP status, the API error code, the human-readable message
/// and the round-trip time.
#[derive(Debug, Clone)]
pub struct ApiErrorDetails {
    event_id: String,
    http_status: u16,
    error_code: String,
    message: String,
    elapsed: String,
}

impl ApiErrorDetails {
    /// Event id assigned by the API.
    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    /// HTTP status of the failing response.
    pub fn http_status(&self) -> u16 {
        self.http_status
    }

    /// Error code reported by the API.
    pub fn error_code(&self) -> &str {
        &self.error_code
    }

    /// Human-readable message reported by the API.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Round-trip time in milliseconds, formatted to two decimals.
    pub fn elapsed(&self) -> &str {
        &self.elapsed
    }
}

impl fmt::Display for ApiErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (status {}, code {}, event {}, {}ms)",
            self.message, self.http_status, self.error_code, self.event_id, self.elapsed
        )
    }
}

// Helper structure for parsing API error responses

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiErrorBody {
    event_id: String,
    error_code: String,
    message: String,
}
