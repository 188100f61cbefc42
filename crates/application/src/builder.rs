//! Request builder.
//!
//! Turns a test case plus the suite configuration into a fully formed
//! outbound request.

use attest_domain::{RequestSpec, SuiteConfig, TestCase};
use thiserror::Error;
use url::Url;

/// Error type for request building.
///
/// Building fails only when the concatenated URL is not a syntactically
/// valid request target; every other part of the test case is passed
/// through to the transport unmodified.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    /// The concatenated base URL and path do not form a valid URL.
    #[error("invalid request target '{url}': {message}")]
    InvalidUrl {
        /// The URL that failed to parse.
        url: String,
        /// The parser's diagnosis.
        message: String,
    },
}

/// Builds the outbound request for one test case.
///
/// The URL is the byte concatenation of `config.base_url` and `test.url`:
/// duplicate or missing slashes are preserved exactly as written. Headers
/// and body are carried verbatim, with no content-type inference, and the
/// verb is not validated here.
///
/// # Errors
///
/// Returns [`BuildError::InvalidUrl`] when the concatenated URL does not
/// parse as a request target.
pub fn build_request(config: &SuiteConfig, test: &TestCase) -> Result<RequestSpec, BuildError> {
    let url = format!("{}{}", config.base_url, test.url);
    Url::parse(&url).map_err(|e| BuildError::InvalidUrl {
        url: url.clone(),
        message: e.to_string(),
    })?;

    Ok(RequestSpec {
        url,
        method: test.method.clone(),
        headers: test.headers.clone(),
        body: test.body.clone(),
        timeout_ms: config.timeout_ms,
    })
}
