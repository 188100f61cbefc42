//! HTTP client port.

use std::future::Future;

use attest_domain::{RequestSpec, ResponseSpec};
use thiserror::Error;

/// Port for executing HTTP requests.
///
/// This trait abstracts the transport, allowing the engine to be
/// independent of any specific HTTP library and to be tested against a
/// scripted fake.
pub trait HttpClient: Send + Sync {
    /// Executes a fully built request and returns the buffered response.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when no response could be obtained:
    /// connection failure, DNS failure, or an elapsed deadline.
    fn execute(
        &self,
        request: &RequestSpec,
    ) -> impl Future<Output = Result<ResponseSpec, TransportError>> + Send;
}

/// Why the transport failed to obtain a response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The per-request deadline elapsed.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// The deadline that elapsed, in milliseconds.
        timeout_ms: u64,
    },

    /// The host name could not be resolved.
    #[error("DNS resolution failed for {host}: {message}")]
    Dns {
        /// Host that failed to resolve.
        host: String,
        /// Underlying resolver message.
        message: String,
    },

    /// The target actively refused the connection.
    #[error("connection refused by {host}")]
    ConnectionRefused {
        /// Host that refused the connection.
        host: String,
    },

    /// The connection could not be established for another reason.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The request URL was rejected by the transport.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP verb was rejected by the transport.
    #[error("invalid method: {0}")]
    InvalidMethod(String),

    /// Any other transport-level failure.
    #[error("{0}")]
    Other(String),
}
