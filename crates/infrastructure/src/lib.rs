//! Attest Infrastructure - adapters for the engine's ports
//!
//! Contains the reqwest-backed HTTP transport and the suite-file loader
//! (decoding and directory discovery).

pub mod adapters;
pub mod loader;

pub use adapters::ReqwestHttpClient;
pub use loader::{decode_suite, discover_suites, load_suite, LoadError};
