//! HTTP response wrapper

use http::{HeaderMap, StatusCode};
use serde_json::Value;

/// Successful response from the payments API.
///
/// Produced once per call and immutable afterward. The body is the parsed
/// JSON payload when there was one; a non-JSON or empty body is `None`, not
/// an error.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Option<Value>,
    elapsed: String,
}

impl HttpResponse {
    pub(crate) fn new(
        status: StatusCode,
        headers: HeaderMap,
        body: Option<Value>,
        elapsed: String,
    ) -> Self {
        Self {
            status,
            headers,
            body,
            elapsed,
        }
    }

    /// HTTP status code of the response.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Parsed JSON body, if the response carried one.
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Consume the response and take the body.
    pub fn into_body(self) -> Option<Value> {
        self.body
    }

    /// Round-trip time in milliseconds, formatted to two decimals.
    pub fn elapsed(&self) -> &str {
        &self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accessors() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", "application/json".parse().unwrap());

        let response = HttpResponse::new(
            StatusCode::CREATED,
            headers,
            Some(json!({ "id": "pay_123" })),
            "41.57".to_string(),
        );

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
        assert_eq!(response.body().unwrap()["id"], "pay_123");
        assert_eq!(response.elapsed(), "41.57");
        assert_eq!(response.into_body(), Some(json!({ "id": "pay_123" })));
    }

    #[test]
    fn test_absent_body() {
        let response =
            HttpResponse::new(StatusCode::OK, HeaderMap::new(), None, "0.88".to_string());
        assert!(response.body().is_none());
        assert!(response.into_body().is_none());
    }
}
