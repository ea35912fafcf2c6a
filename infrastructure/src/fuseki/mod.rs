//! Fuseki adapter
//!
//! Implements the [`SparqlEndpoint`](assistant_application::SparqlEndpoint)
//! port over HTTP.

pub mod client;
pub mod error;

pub use client::{DEFAULT_TIMEOUT, FusekiClient};
pub use error::FusekiError;
