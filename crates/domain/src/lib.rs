//! Attest Domain - Core business types
//!
//! This crate defines the domain model for the attest endpoint-testing tool.
//! All types here are pure Rust with no I/O dependencies.

pub mod report;
pub mod request;
pub mod response;
pub mod suite;

pub use report::{AssertionError, AssertionKind, Report};
pub use request::RequestSpec;
pub use response::{ExecutionOutcome, ResponseSpec, TransportFailure};
pub use suite::{Expectation, Suite, SuiteConfig, TestCase};
