//! Check Endpoint use case
//!
//! Checks the triple store with an `ASK` and, when it answers, counts its
//! triples. Never fails: problems are reported in [`EndpointStatus`].

use crate::ports::sparql_endpoint::SparqlEndpoint;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

pub const CONNECTION_QUERY: &str = "ASK { ?s ?p ?o }";
pub const COUNT_TRIPLES_QUERY: &str = "SELECT (COUNT(*) as ?count) WHERE { ?s ?p ?o }";

/// Result of checking the endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointStatus {
    pub location: String,
    pub reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triple_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub struct CheckEndpointUseCase {
    endpoint: Arc<dyn SparqlEndpoint>,
}

impl CheckEndpointUseCase {
    pub fn new(endpoint: Arc<dyn SparqlEndpoint>) -> Self {
        Self { endpoint }
    }

    pub async fn execute(&self) -> EndpointStatus {
        let location = self.endpoint.location();

        if let Err(e) = self.endpoint.ask(CONNECTION_QUERY).await {
            warn!("Endpoint {} is not reachable: {}", location, e);
            return EndpointStatus {
                location,
                reachable: false,
                triple_count: None,
                error: Some(e.to_string()),
            };
        }

        // A failed count does not make the endpoint unreachable
        let (triple_count, error) = match self.endpoint.select(COUNT_TRIPLES_QUERY).await {
            Ok(rows) => {
                let count = rows
                    .first()
                    .and_then(|row| row.number("count"))
                    .filter(|n| *n >= 0.0)
                    .map(|n| n as u64);
                debug!("Endpoint {} holds {:?} triples", location, count);
                (count, None)
            }
            Err(e) => {
                warn!("Triple count failed on {}: {}", location, e);
                (None, Some(e.to_string()))
            }
        };

        EndpointStatus {
            location,
            reachable: true,
            triple_count,
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::sparql_endpoint::EndpointError;
    use assistant_domain::{Binding, BindingValue};
    use async_trait::async_trait;

    struct StubEndpoint {
        reachable: bool,
        count: Result<&'static str, ()>,
    }

    #[async_trait]
    impl SparqlEndpoint for StubEndpoint {
        async fn select(&self, query: &str) -> Result<Vec<Binding>, EndpointError> {
            assert_eq!(query, COUNT_TRIPLES_QUERY);
            match self.count {
                Ok(count) => Ok(vec![
                    Binding::new().with("count", BindingValue::literal(count)),
                ]),
                Err(()) => Err(EndpointError::HttpStatus {
                    status: 503,
                    message: "busy".to_string(),
                }),
            }
        }

        async fn ask(&self, query: &str) -> Result<bool, EndpointError> {
            assert_eq!(query, CONNECTION_QUERY);
            if self.reachable {
                Ok(true)
            } else {
                Err(EndpointError::ConnectionError("connection refused".to_string()))
            }
        }

        fn location(&self) -> String {
            "http://localhost:3030/smarthealth".to_string()
        }
    }

    async fn check(endpoint: StubEndpoint) -> EndpointStatus {
        CheckEndpointUseCase::new(Arc::new(endpoint)).execute().await
    }

    #[tokio::test]
    async fn test_reachable_endpoint_reports_triple_count() {
        let status = check(StubEndpoint {
            reachable: true,
            count: Ok("1234"),
        })
        .await;

        assert!(status.reachable);
        assert_eq!(status.triple_count, Some(1234));
        assert!(status.error.is_none());
        assert_eq!(status.location, "http://localhost:3030/smarthealth");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint() {
        let status = check(StubEndpoint {
            reachable: false,
            count: Ok("0"),
        })
        .await;

        assert!(!status.reachable);
        assert!(status.triple_count.is_none());
        assert!(status.error.unwrap().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_count_failure_keeps_endpoint_reachable() {
        let status = check(StubEndpoint {
            reachable: true,
            count: Err(()),
        })
        .await;

        assert!(status.reachable);
        assert!(status.triple_count.is_none());
        assert!(status.error.unwrap().contains("503"));
    }

    #[tokio::test]
    async fn test_status_json_is_camel_case() {
        let status = check(StubEndpoint {
            reachable: true,
            count: Ok("7"),
        })
        .await;

        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["tripleCount"], 7);
        assert!(json.get("error").is_none());
    }
}
