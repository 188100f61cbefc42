//! Suite runner.
//!
//! Drives build -> execute -> evaluate for every test case of a suite,
//! sequentially and in order, and aggregates the per-suite report.

use std::sync::Arc;

use attest_domain::{ExecutionOutcome, Report, Suite, SuiteConfig, TestCase, TransportFailure};

use crate::builder::build_request;
use crate::evaluator::evaluate;
use crate::ports::HttpClient;

/// Executes every test case of a suite against the live target.
///
/// Test cases run one at a time, in suite order; the test-case index is
/// the join key into [`Report::failures`]. Build and transport failures
/// never abort the run: they collapse to an absent response for that one
/// test case, and the returned report always covers every test case.
pub struct SuiteRunner<C: HttpClient> {
    client: Arc<C>,
}

impl<C: HttpClient> SuiteRunner<C> {
    /// Creates a runner over the given transport.
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Runs the suite and returns its report.
    pub async fn run(&self, suite: &Suite) -> Report {
        let mut report = Report::new(&suite.name, suite.len());

        for (index, test) in suite.tests.iter().enumerate() {
            let outcome = self.execute(&suite.config, test).await;
            let errors = evaluate(&outcome, &test.expectations);
            if errors.is_empty() {
                tracing::debug!(test = %test.label(), "test case passed");
            } else {
                tracing::warn!(test = %test.label(), errors = errors.len(), "test case failed");
            }
            report.record(index, errors);
        }

        report
    }

    /// Builds and executes one request, folding every failure mode into
    /// the outcome value.
    async fn execute(&self, config: &SuiteConfig, test: &TestCase) -> ExecutionOutcome {
        let request = match build_request(config, test) {
            Ok(request) => request,
            Err(e) => return ExecutionOutcome::Failed(TransportFailure::new(e.to_string())),
        };

        match self.client.execute(&request).await {
            Ok(response) => ExecutionOutcome::Completed(response),
            Err(e) => ExecutionOutcome::Failed(TransportFailure::new(e.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::VecDeque;
    use std::future::Future;
    use std::sync::Mutex;

    use attest_domain::{AssertionKind, Expectation, RequestSpec, ResponseSpec};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ports::TransportError;

    /// Fake transport that replays a script of results, one per request,
    /// and records the URLs it was asked to hit.
    struct ScriptedClient {
        script: Mutex<VecDeque<Result<ResponseSpec, TransportError>>>,
        urls: Mutex<Vec<String>>,
    }

    impl ScriptedClient {
        fn new(script: Vec<Result<ResponseSpec, TransportError>>) -> Self {
            Self {
                script: Mutex::new(script.into()),
                urls: Mutex::new(Vec::new()),
            }
        }

        fn requested_urls(&self) -> Vec<String> {
            self.urls.lock().unwrap().clone()
        }
    }

    impl HttpClient for ScriptedClient {
        fn execute(
            &self,
            request: &RequestSpec,
        ) -> impl Future<Output = Result<ResponseSpec, TransportError>> + Send {
            self.urls.lock().unwrap().push(request.url.clone());
            let next = self
                .script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(TransportError::Other("script exhausted".to_string())));
            async move { next }
        }
    }

    fn ok_response(status: u16) -> Result<ResponseSpec, TransportError> {
        Ok(ResponseSpec::new(status, Vec::new(), "ok"))
    }

    fn suite_of(tests: Vec<TestCase>) -> Suite {
        Suite::new("unit", SuiteConfig::new("http://localhost:9999"), tests)
    }

    #[tokio::test]
    async fn report_covers_every_test_case() {
        let client = Arc::new(ScriptedClient::new(vec![ok_response(200), ok_response(200)]));
        let runner = SuiteRunner::new(Arc::clone(&client));

        let suite = suite_of(vec![
            TestCase::new("a", "/a").with_expectation(Expectation::status(200)),
            TestCase::new("b", "/b").with_expectation(Expectation::status(200)),
        ]);
        let report = runner.run(&suite).await;

        assert_eq!(report.total, 2);
        assert_eq!(report.passed, 2);
        assert!(report.all_passed());
        assert_eq!(
            client.requested_urls(),
            vec!["http://localhost:9999/a", "http://localhost:9999/b"]
        );
    }

    #[tokio::test]
    async fn transport_failure_does_not_abort_the_suite() {
        let client = Arc::new(ScriptedClient::new(vec![
            Err(TransportError::ConnectionRefused {
                host: "localhost".to_string(),
            }),
            ok_response(200),
        ]));
        let runner = SuiteRunner::new(client);

        let suite = suite_of(vec![
            TestCase::new("down", "/down").with_expectation(Expectation::status(200)),
            TestCase::new("up", "/up").with_expectation(Expectation::status(200)),
        ]);
        let report = runner.run(&suite).await;

        assert_eq!(report.total, 2);
        assert_eq!(report.passed, 1);
        let indices: Vec<_> = report.failures.keys().copied().collect();
        assert_eq!(indices, vec![0]);
        assert_eq!(report.failures[&0][0].kind, AssertionKind::Unreachable);
    }

    #[tokio::test]
    async fn transport_failure_without_expectations_still_passes() {
        let client = Arc::new(ScriptedClient::new(vec![Err(TransportError::Timeout {
            timeout_ms: 100,
        })]));
        let runner = SuiteRunner::new(client);

        let suite = suite_of(vec![TestCase::new("fire-and-forget", "/ping")]);
        let report = runner.run(&suite).await;

        assert_eq!(report.passed, 1);
        assert!(report.all_passed());
    }

    #[tokio::test]
    async fn build_failure_aborts_only_its_test_case() {
        let client = Arc::new(ScriptedClient::new(vec![ok_response(200)]));
        let runner = SuiteRunner::new(Arc::clone(&client));

        let mut suite = suite_of(vec![
            TestCase::new("broken", "/x").with_expectation(Expectation::status(200)),
            TestCase::new("fine", "/y").with_expectation(Expectation::status(200)),
        ]);
        suite.config.base_url = String::new();
        suite.tests[1].url = "http://localhost:9999/y".to_string();

        let report = runner.run(&suite).await;

        assert_eq!(report.total, 2);
        assert_eq!(report.passed, 1);
        assert_eq!(report.failures[&0][0].kind, AssertionKind::Unreachable);
        // The transport never saw the unbuildable request.
        assert_eq!(client.requested_urls(), vec!["http://localhost:9999/y"]);
    }

    #[tokio::test]
    async fn failure_indices_are_stable() {
        let client = Arc::new(ScriptedClient::new(vec![
            ok_response(200),
            ok_response(500),
            ok_response(200),
        ]));
        let runner = SuiteRunner::new(client);

        let suite = suite_of(vec![
            TestCase::new("a", "/a").with_expectation(Expectation::status(200)),
            TestCase::new("b", "/b").with_expectation(Expectation::status(200)),
            TestCase::new("c", "/c").with_expectation(Expectation::status(200)),
        ]);
        let report = runner.run(&suite).await;

        let indices: Vec<_> = report.failures.keys().copied().collect();
        assert_eq!(indices, vec![1]);
        assert_eq!(report.failures[&1][0].kind, AssertionKind::StatusMismatch);
    }

    #[tokio::test]
    async fn empty_suite_produces_empty_passing_report() {
        let client = Arc::new(ScriptedClient::new(Vec::new()));
        let runner = SuiteRunner::new(client);

        let report = runner.run(&suite_of(Vec::new())).await;
        assert_eq!(report.total, 0);
        assert!(report.all_passed());
    }
}
