//! SPARQL endpoint port
//!
//! Defines the interface for running generated queries against a triple
//! store. The HTTP adapter lives in the infrastructure layer.

use assistant_domain::Binding;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while talking to the SPARQL endpoint
#[derive(Error, Debug)]
pub enum EndpointError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Endpoint returned HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,
}

impl EndpointError {
    /// Whether the endpoint answered at all (as opposed to being unreachable)
    pub fn is_reachable(&self) -> bool {
        matches!(
            self,
            EndpointError::HttpStatus { .. } | EndpointError::InvalidResponse(_)
        )
    }
}

/// A SPARQL 1.1 query endpoint
#[async_trait]
pub trait SparqlEndpoint: Send + Sync {
    /// Run a `SELECT` query and return its rows
    async fn select(&self, query: &str) -> Result<Vec<Binding>, EndpointError>;

    /// Run an `ASK` query
    async fn ask(&self, query: &str) -> Result<bool, EndpointError>;

    /// Human-readable location of the endpoint, for logs and status output
    fn location(&self) -> String;
}
