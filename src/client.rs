//! Transport client for the payments API

use std::time::{Duration, Instant};

use http::{HeaderMap, HeaderValue, Method, header};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::{
    config::Config,
    error::{Error, Result},
    http::{HttpResponse, Interceptor, convert, identity},
};

/// HTTP transport for the payments API.
///
/// Owns one pooled connection session and the [`Config`] it was built with.
/// Calls are independent of each other; the connection pool is the only
/// shared state and relies on the underlying transport's thread-safety. The
/// session lives until [`HttpClient::close_session`] consumes the client.
///
/// # Example
///
/// ```rust,no_run
/// use checkout_sdk::{Config, HttpClient};
///
/// # async fn example() -> checkout_sdk::Result<()> {
/// let client = HttpClient::new(Config::new(
///     "https://api.sandbox.checkout.com/",
///     "sk_test_...",
///     5_000,
/// ))?;
/// let payment = client.get("payments/pay_abc123").await?;
/// # Ok(())
/// # }
/// ```
pub struct HttpClient {
    http: reqwest::Client,
    base_url: Url,
    config: Config,
    interceptor: Interceptor,
}

impl HttpClient {
    /// Build a client over a fresh pooled connection session, with the
    /// identity interceptor installed.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL does not parse, uses a
    /// scheme other than `http`/`https`, or the HTTP client cannot be
    /// constructed.
    pub fn new(config: Config) -> Result<Self> {
        let base_url: Url = config
            .api_base_url()
            .parse()
            .map_err(|e| Error::InvalidUrl(format!("{e}")))?;

        match base_url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(Error::InvalidUrl(format!(
                    "unsupported URL scheme '{scheme}'"
                )));
            }
        }

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            config,
            interceptor: identity(),
        })
    }

    /// Configuration the client was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the interceptor hook.
    pub fn set_interceptor(&mut self, interceptor: Interceptor) {
        self.interceptor = interceptor;
    }

    /// Builder-style variant of [`set_interceptor`](Self::set_interceptor).
    pub fn with_interceptor(mut self, interceptor: Interceptor) -> Self {
        self.interceptor = interceptor;
        self
    }

    /// Headers attached to every request: the fixed default set plus
    /// `authorization`. Recomputed per call rather than cached at
    /// construction.
    ///
    /// # Errors
    ///
    /// Returns an error if the secret key is not a valid header value.
    pub fn headers(&self) -> Result<HeaderMap> {
        let mut headers = default_headers();
        let secret = HeaderValue::from_str(self.config.secret_key()).map_err(|_| {
            Error::InvalidHeaderValue("secret key is not a valid header value".to_string())
        })?;
        headers.insert(header::AUTHORIZATION, secret);
        Ok(headers)
    }

    /// Issue a GET request for `path`, resolved against the base URL.
    pub async fn get(&self, path: &str) -> Result<HttpResponse> {
        self.request(path, None).await
    }

    /// Issue a POST request for `path` carrying `body` as JSON.
    ///
    /// The body's snake_case keys are rewritten to camelCase before
    /// transmission; an empty mapping still POSTs.
    pub async fn post<T>(&self, path: &str, body: &T) -> Result<HttpResponse>
    where
        T: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.request(path, Some(body)).await
    }

    /// Release the pooled connection session.
    ///
    /// Consumes the client, so the session cannot be used afterward. Call it
    /// once at shutdown.
    pub fn close_session(self) {
        drop(self);
    }

    async fn request(&self, path: &str, body: Option<Value>) -> Result<HttpResponse> {
        let start = Instant::now();

        // convert all snake_case keys to camelCase
        let body = body.map(convert::camelize_keys);

        let url = self
            .base_url
            .join(path)
            .map_err(|e| Error::InvalidUrl(format!("cannot resolve '{path}': {e}")))?;

        // interceptor hook may override the url, headers and/or body
        let (url, headers, body) = (self.interceptor)(url, self.headers()?, body);

        let method = if body.is_some() {
            Method::POST
        } else {
            Method::GET
        };
        debug!(%method, %url, "dispatching request");

        let mut request = self
            .http
            .request(method, url)
            .headers(headers)
            .timeout(Duration::from_millis(self.config.timeout()));
        if let Some(body) = &body {
            request = request.json(body);
        }

        match request.send().await {
            Ok(response) => {
                let status = response.status();
                let headers = response.headers().clone();
                let bytes = match response.bytes().await {
                    Ok(bytes) => bytes,
                    Err(e) => return Err(transport_error(e, start)),
                };
                let elapsed = format_elapsed_millis(start);
                debug!(status = status.as_u16(), elapsed_ms = %elapsed, "received response");

                if status.is_client_error() || status.is_server_error() {
                    Err(Error::from_error_response(status.as_u16(), &bytes, elapsed))
                } else {
                    // a non-JSON body on a successful status is absent, not an error
                    let body = serde_json::from_slice(&bytes).ok();
                    Ok(HttpResponse::new(status, headers, body, elapsed))
                }
            }
            Err(e) => Err(transport_error(e, start)),
        }
    }
}

/// Fixed header set attached before `authorization` is merged in.
fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::USER_AGENT, HeaderValue::from_static(crate::USER_AGENT));
    headers
}

fn transport_error(err: reqwest::Error, start: Instant) -> Error {
    if err.is_timeout() {
        // elapsed travels in seconds here, milliseconds everywhere else
        Error::Timeout {
            elapsed: start.elapsed().as_secs_f64(),
        }
    } else {
        Error::Connection(err)
    }
}

fn format_elapsed_millis(start: Instant) -> String {
    format!("{:.2}", start.elapsed().as_secs_f64() * 1000.0)
}
