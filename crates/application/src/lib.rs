//! Attest Application - the assertion/execution engine
//!
//! This crate turns a declarative [`attest_domain::Suite`] into a
//! [`attest_domain::Report`]:
//! - the request builder forms an outbound request per test case,
//! - the `HttpClient` port abstracts the transport,
//! - the evaluator compares the obtained response against the test case's
//!   expectations,
//! - the suite runner drives the three, sequentially, per test case.

pub mod builder;
pub mod evaluator;
pub mod ports;
pub mod runner;

pub use builder::{build_request, BuildError};
pub use evaluator::evaluate;
pub use ports::{HttpClient, TransportError};
pub use runner::SuiteRunner;
