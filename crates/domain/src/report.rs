//! Assertion errors and the aggregated per-suite report.

use std::collections::BTreeMap;
use std::fmt;

/// The category of a single failed comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssertionKind {
    /// The response status code differed from the expected one.
    StatusMismatch,
    /// A response header was missing or did not contain the required
    /// substring.
    HeaderMismatch,
    /// The response body was not exactly equal to the expected body.
    BodyMismatch,
    /// No response was obtained while the test case declared expectations.
    Unreachable,
}

impl AssertionKind {
    /// Returns a short label for presentation.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::StatusMismatch => "status",
            Self::HeaderMismatch => "header",
            Self::BodyMismatch => "body",
            Self::Unreachable => "unreachable",
        }
    }
}

/// A single failed comparison between actual and expected response data.
///
/// Pure data, freely copyable; assertion errors are collected, never
/// propagated as `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionError {
    /// What kind of check failed.
    pub kind: AssertionKind,
    /// Human-readable description carrying both values.
    pub message: String,
    /// The actual value observed.
    pub got: String,
    /// The value the expectation asked for.
    pub expected: String,
}

impl AssertionError {
    /// A status-code comparison failure.
    #[must_use]
    pub fn status_mismatch(got: u16, expected: u16) -> Self {
        Self {
            kind: AssertionKind::StatusMismatch,
            message: format!("status code: got {got}, expected {expected}"),
            got: got.to_string(),
            expected: expected.to_string(),
        }
    }

    /// A header whose value does not contain the required substring.
    #[must_use]
    pub fn header_mismatch(name: &str, got: impl Into<String>, expected: impl Into<String>) -> Self {
        let got = got.into();
        let expected = expected.into();
        Self {
            kind: AssertionKind::HeaderMismatch,
            message: format!("header '{name}': value '{got}' does not contain '{expected}'"),
            got,
            expected,
        }
    }

    /// A required header that is absent from the response.
    #[must_use]
    pub fn missing_header(name: &str, expected: impl Into<String>) -> Self {
        let expected = expected.into();
        Self {
            kind: AssertionKind::HeaderMismatch,
            message: format!("header '{name}' not present in response"),
            got: String::new(),
            expected,
        }
    }

    /// A body that is not exactly equal to the expected one.
    #[must_use]
    pub fn body_mismatch(got: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            kind: AssertionKind::BodyMismatch,
            message: "body does not exactly match expected value".to_string(),
            got: got.into(),
            expected: expected.into(),
        }
    }

    /// A synthetic error for a test case whose request never produced a
    /// response.
    #[must_use]
    pub fn unreachable(cause: impl Into<String>) -> Self {
        let cause = cause.into();
        Self {
            kind: AssertionKind::Unreachable,
            message: format!("no response obtained: {cause}"),
            got: String::new(),
            expected: String::new(),
        }
    }
}

impl fmt::Display for AssertionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.label(), self.message)
    }
}

/// The aggregated pass/fail outcome of one suite run.
///
/// A test case passes iff it produced zero assertion errors across all of
/// its expectations. Failure keys are test-case indices into the suite's
/// test list; the map is ordered so presentation is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Name of the suite this report covers.
    pub suite_name: String,
    /// Number of test cases in the suite.
    pub total: usize,
    /// Number of test cases with zero assertion errors.
    pub passed: usize,
    /// Assertion errors per failing test-case index.
    pub failures: BTreeMap<usize, Vec<AssertionError>>,
}

impl Report {
    /// Creates an empty report for a suite of `total` test cases.
    #[must_use]
    pub fn new(suite_name: impl Into<String>, total: usize) -> Self {
        Self {
            suite_name: suite_name.into(),
            total,
            passed: 0,
            failures: BTreeMap::new(),
        }
    }

    /// Records the outcome of one test case. Must be called exactly once
    /// per index.
    pub fn record(&mut self, index: usize, errors: Vec<AssertionError>) {
        if errors.is_empty() {
            self.passed += 1;
        } else {
            self.failures.insert(index, errors);
        }
    }

    /// Returns true when every test case passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns the number of failing test cases.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}
