//! Error types for the Fuseki adapter

use assistant_application::EndpointError;
use assistant_domain::DomainError;
use thiserror::Error;

/// Result type alias for Fuseki operations
pub type Result<T> = std::result::Result<T, FusekiError>;

/// Errors that can occur when talking to a Fuseki dataset
#[derive(Error, Debug)]
pub enum FusekiError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("Failed to reach {url}: {message}")]
    Connection { url: String, message: String },

    #[error("Request timeout")]
    Timeout,

    #[error("Fuseki returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Parse(#[from] DomainError),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl FusekiError {
    pub(crate) fn from_request(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FusekiError::Timeout
        } else {
            FusekiError::Connection {
                url: url.to_string(),
                message: err.to_string(),
            }
        }
    }
}

impl From<FusekiError> for EndpointError {
    fn from(err: FusekiError) -> Self {
        match err {
            // A client that failed to build never sent a request
            FusekiError::Connection { .. } | FusekiError::ClientBuild(_) => {
                EndpointError::ConnectionError(err.to_string())
            }
            FusekiError::Timeout => EndpointError::Timeout,
            FusekiError::Status { status, body } => EndpointError::HttpStatus {
                status,
                message: body,
            },
            FusekiError::Parse(e) => EndpointError::InvalidResponse(e.to_string()),
            FusekiError::UnexpectedResponse(msg) => EndpointError::InvalidResponse(msg),
        }
    }
}
