//! Test suite description types.
//!
//! A [`Suite`] is the decoded content of one suite file: shared
//! configuration plus an ordered list of test cases. Field names follow
//! the camelCase wire schema of the suite files.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Shared, read-only configuration for every test case in a suite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SuiteConfig {
    /// Base URL each test-case path is appended to, byte for byte.
    pub base_url: String,
    /// Per-request deadline in milliseconds; `0` disables the deadline.
    #[serde(rename = "timeout")]
    pub timeout_ms: u64,
}

impl SuiteConfig {
    /// Creates a configuration with the given base URL and no deadline.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: 0,
        }
    }

    /// Sets the per-request deadline in milliseconds.
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

/// One HTTP request definition plus its expectations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TestCase {
    /// Logical grouping label, used only for presentation.
    pub group: String,
    /// Test case name, unique within its suite.
    pub name: String,
    /// Request path, appended verbatim to the suite base URL.
    pub url: String,
    /// HTTP verb as written in the suite file. Not validated here; an
    /// unusable verb surfaces as a transport failure at execution time.
    pub method: String,
    /// Request headers, set verbatim on the outbound request.
    pub headers: HashMap<String, String>,
    /// Raw request payload; empty means no body.
    pub body: String,
    /// Expectations evaluated independently against the single response.
    #[serde(rename = "expected")]
    pub expectations: Vec<Expectation>,
}

impl TestCase {
    /// Creates a test case for the given name and path.
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    /// Sets the HTTP verb (builder pattern).
    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Adds a request header (builder pattern).
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets the request payload (builder pattern).
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Adds an expectation (builder pattern).
    #[must_use]
    pub fn with_expectation(mut self, expectation: Expectation) -> Self {
        self.expectations.push(expectation);
        self
    }

    /// Returns the presentation label: `group/name`, or just the name
    /// when no group is set.
    #[must_use]
    pub fn label(&self) -> String {
        if self.group.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.group, self.name)
        }
    }
}

/// One set of response-matching criteria.
///
/// Every field has a "don't check" value, so an empty expectation matches
/// any response. A test case may carry several expectations; each is
/// evaluated independently against the same buffered response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Expectation {
    /// Expected status code; `0` means the status is not checked.
    pub status_code: u16,
    /// Required substring per response header name; an empty map checks
    /// no headers.
    pub headers: HashMap<String, String>,
    /// Exact expected body; an empty string means the body is not checked.
    pub body: String,
}

impl Expectation {
    /// Creates an expectation that only checks the status code.
    #[must_use]
    pub fn status(status_code: u16) -> Self {
        Self {
            status_code,
            ..Self::default()
        }
    }

    /// Adds a required header substring (builder pattern).
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, substring: impl Into<String>) -> Self {
        self.headers.insert(name.into(), substring.into());
        self
    }

    /// Sets the exact expected body (builder pattern).
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Returns true when no field requests a check.
    #[must_use]
    pub fn checks_nothing(&self) -> bool {
        self.status_code == 0 && self.headers.is_empty() && self.body.is_empty()
    }
}

/// The full decoded content of one suite file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Suite {
    /// Suite name, taken from the file stem by the loader. Not part of
    /// the wire schema.
    #[serde(skip)]
    pub name: String,
    /// Configuration shared by every test case.
    pub config: SuiteConfig,
    /// Ordered test cases; the position is the report key.
    pub tests: Vec<TestCase>,
}

impl Suite {
    /// Creates a suite from its parts.
    #[must_use]
    pub fn new(name: impl Into<String>, config: SuiteConfig, tests: Vec<TestCase>) -> Self {
        Self {
            name: name.into(),
            config,
            tests,
        }
    }

    /// Returns the number of test cases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// Returns true when the suite has no test cases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}
