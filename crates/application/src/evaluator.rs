//! Response evaluator.
//!
//! Compares an execution outcome against the expectations of one test
//! case, producing zero or more assertion errors.

use attest_domain::{AssertionError, Expectation, ExecutionOutcome, ResponseSpec};

/// The ordered check chain applied within one expectation. The first
/// failing check wins; later checks of that expectation are skipped.
const CHECKS: &[fn(&ResponseSpec, &Expectation) -> Option<AssertionError>] =
    &[check_status, check_headers, check_body];

/// Evaluates every expectation of a test case against the single outcome
/// obtained for it.
///
/// Expectations are evaluated independently and errors accumulate across
/// them, so the result has between zero and `expectations.len()` entries.
/// When no response was obtained, a single `Unreachable` error is
/// synthesized, unless the test case declares no expectations at all (a
/// test case without expectations always passes).
#[must_use]
pub fn evaluate(outcome: &ExecutionOutcome, expectations: &[Expectation]) -> Vec<AssertionError> {
    let response = match outcome {
        ExecutionOutcome::Completed(response) => response,
        ExecutionOutcome::Failed(failure) => {
            if expectations.is_empty() {
                return Vec::new();
            }
            return vec![AssertionError::unreachable(&failure.message)];
        }
    };

    expectations
        .iter()
        .filter_map(|expectation| check_expectation(response, expectation))
        .collect()
}

/// Runs the check chain for one expectation, returning at most one error.
fn check_expectation(response: &ResponseSpec, expectation: &Expectation) -> Option<AssertionError> {
    if expectation.checks_nothing() {
        return None;
    }
    CHECKS.iter().find_map(|check| check(response, expectation))
}

fn check_status(response: &ResponseSpec, expectation: &Expectation) -> Option<AssertionError> {
    if expectation.status_code == 0 || response.status == expectation.status_code {
        None
    } else {
        Some(AssertionError::status_mismatch(
            response.status,
            expectation.status_code,
        ))
    }
}

fn check_headers(response: &ResponseSpec, expectation: &Expectation) -> Option<AssertionError> {
    for (name, needle) in &expectation.headers {
        let mut found = false;
        // Every value of a multi-valued header must contain the substring;
        // the first non-matching value wins, in traversal order.
        for value in response.header_values(name) {
            found = true;
            if !value.contains(needle.as_str()) {
                return Some(AssertionError::header_mismatch(name, value, needle));
            }
        }
        if !found {
            return Some(AssertionError::missing_header(name, needle));
        }
    }
    None
}

fn check_body(response: &ResponseSpec, expectation: &Expectation) -> Option<AssertionError> {
    if expectation.body.is_empty() || response.body == expectation.body {
        None
    } else {
        Some(AssertionError::body_mismatch(
            response.body.clone(),
            expectation.body.clone(),
        ))
    }
}
