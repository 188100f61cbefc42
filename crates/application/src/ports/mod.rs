//! Port definitions (interfaces)
//!
//! Ports define the boundary between the engine and external systems.
//! The only port here is the HTTP transport, implemented by an adapter in
//! the infrastructure layer.

mod http_client;

pub use http_client::{HttpClient, TransportError};
