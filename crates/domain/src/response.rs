//! Received response representation and execution outcome.

use std::fmt;

/// An HTTP response as seen by the evaluator.
///
/// The body is fully buffered before evaluation so that every expectation
/// of a test case reads the same data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseSpec {
    /// HTTP status code.
    pub status: u16,
    /// Response headers in transport order. A header name may appear more
    /// than once; the relative order of its values is not guaranteed.
    pub headers: Vec<(String, String)>,
    /// Response body, decoded to a string.
    pub body: String,
}

impl ResponseSpec {
    /// Creates a response from its parts.
    #[must_use]
    pub fn new(status: u16, headers: Vec<(String, String)>, body: impl Into<String>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Returns every value carried under `name`, compared ASCII
    /// case-insensitively as HTTP header names are.
    pub fn header_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> {
        self.headers
            .iter()
            .filter(move |(header, _)| header.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// The result of attempting to execute one test-case request.
///
/// Transport problems are carried as data rather than propagated, so a
/// failing request never aborts the rest of the suite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// A response was obtained and fully buffered.
    Completed(ResponseSpec),
    /// No response was obtained: the request could not be built, the
    /// connection failed, or the deadline elapsed.
    Failed(TransportFailure),
}

/// Why a request produced no response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportFailure {
    /// Human-readable cause, e.g. the connect or timeout error text.
    pub message: String,
}

impl TransportFailure {
    /// Creates a failure from its cause.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
