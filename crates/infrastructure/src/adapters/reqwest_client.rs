//! HTTP transport implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port. It fully buffers the
//! response body before returning, so the evaluator never sees a one-shot
//! stream.

use std::future::Future;
use std::time::Duration;

use attest_application::{HttpClient, TransportError};
use attest_domain::{RequestSpec, ResponseSpec};
use reqwest::{Client, Method, Url};

/// HTTP transport backed by `reqwest::Client`.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates a transport with default settings: redirects followed up
    /// to 10 times, no global timeout (the per-request deadline comes
    /// from the suite configuration).
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be created.
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(concat!("attest/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Creates a transport over a pre-configured reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Maps reqwest errors to port-level transport errors.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout { timeout_ms };
        }

        if error.is_connect() {
            let message = error.to_string();
            let host = error
                .url()
                .and_then(Url::host_str)
                .unwrap_or("unknown")
                .to_string();
            let lower = message.to_lowercase();
            if lower.contains("dns") || lower.contains("resolve") {
                return TransportError::Dns { host, message };
            }
            if lower.contains("refused") {
                return TransportError::ConnectionRefused { host };
            }
            return TransportError::ConnectionFailed(message);
        }

        TransportError::Other(error.to_string())
    }
}

/// Converts the raw verb string to a reqwest method.
///
/// An empty verb falls back to GET, matching the common transport default
/// for suite files that omit the method.
fn parse_method(method: &str) -> Result<Method, TransportError> {
    if method.is_empty() {
        return Ok(Method::GET);
    }
    Method::from_bytes(method.as_bytes())
        .map_err(|_| TransportError::InvalidMethod(method.to_string()))
}

impl HttpClient for ReqwestHttpClient {
    fn execute(
        &self,
        request: &RequestSpec,
    ) -> impl Future<Output = Result<ResponseSpec, TransportError>> + Send {
        let client = self.client.clone();
        let spec = request.clone();

        async move {
            let url = Url::parse(&spec.url)
                .map_err(|e| TransportError::InvalidUrl(format!("{e}: {}", spec.url)))?;
            let method = parse_method(&spec.method)?;

            let mut builder = client.request(method, url);
            if spec.timeout_ms > 0 {
                builder = builder.timeout(Duration::from_millis(spec.timeout_ms));
            }
            for (name, value) in &spec.headers {
                builder = builder.header(name, value);
            }
            if !spec.body.is_empty() {
                builder = builder.body(spec.body);
            }

            let response = builder
                .send()
                .await
                .map_err(|e| Self::map_error(&e, spec.timeout_ms))?;

            let status = response.status().as_u16();
            let headers: Vec<(String, String)> = response
                .headers()
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
                .collect();
            let body = response
                .text()
                .await
                .map_err(|e| TransportError::Other(format!("failed to read body: {e}")))?;

            Ok(ResponseSpec::new(status, headers, body))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn client_creation_succeeds() {
        assert!(ReqwestHttpClient::new().is_ok());
    }

    #[test]
    fn empty_method_defaults_to_get() {
        assert_eq!(parse_method("").unwrap(), Method::GET);
    }

    #[test]
    fn standard_and_extension_verbs_parse() {
        assert_eq!(parse_method("POST").unwrap(), Method::POST);
        assert_eq!(parse_method("DELETE").unwrap(), Method::DELETE);
        // Extension verbs are passed through unvalidated.
        assert_eq!(parse_method("PURGE").unwrap().as_str(), "PURGE");
    }

    #[test]
    fn malformed_verb_is_a_transport_error() {
        let result = parse_method("GE T");
        assert!(matches!(result, Err(TransportError::InvalidMethod(_))));
    }
}
