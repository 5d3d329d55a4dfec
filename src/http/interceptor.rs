//! Pre-transmission request hook

use http::HeaderMap;
use serde_json::Value;
use url::Url;

/// Hook invoked exactly once per request, immediately before transmission.
///
/// Receives the resolved URL, the computed headers and the (already
/// camelCased) body, and returns the triple that actually gets transmitted.
/// The default is the identity; installing a custom interceptor lets a
/// collaborator redirect traffic to another region or rewrite credentials and
/// payloads under test. Interceptors run synchronously inline and must be
/// side-effect-free.
pub type Interceptor =
    Box<dyn Fn(Url, HeaderMap, Option<Value>) -> (Url, HeaderMap, Option<Value>) + Send + Sync>;

/// The default interceptor: returns its inputs unchanged.
pub fn identity() -> Interceptor {
    Box::new(|url, headers, body| (url, headers, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_a_mirror() {
        let url: Url = "https://api.checkout.com/payments".parse().unwrap();
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "sk_test".parse().unwrap());
        let body = Some(serde_json::json!({ "amount": 100 }));

        let (out_url, out_headers, out_body) =
            identity()(url.clone(), headers.clone(), body.clone());

        assert_eq!(out_url, url);
        assert_eq!(out_headers, headers);
        assert_eq!(out_body, body);
    }
}
