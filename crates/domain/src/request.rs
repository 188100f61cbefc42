//! Fully built outbound request specification.

use std::collections::HashMap;

/// A fully formed outbound HTTP request, ready to hand to a transport.
///
/// The URL is the byte concatenation of the suite base URL and the
/// test-case path, with no slash normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSpec {
    /// Absolute request URL.
    pub url: String,
    /// HTTP verb as written in the suite file; empty means the transport
    /// default (GET).
    pub method: String,
    /// Request headers, applied verbatim over transport defaults.
    pub headers: HashMap<String, String>,
    /// Raw request payload; empty means no body is attached.
    pub body: String,
    /// Per-request deadline in milliseconds; `0` disables the deadline.
    pub timeout_ms: u64,
}
