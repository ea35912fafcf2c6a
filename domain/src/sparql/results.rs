//! SPARQL 1.1 Query Results JSON document

use super::binding::Binding;
use crate::core::error::DomainError;
use crate::core::string::truncate;
use serde::{Deserialize, Serialize};

/// Media type requested from the endpoint for `SELECT` and `ASK` queries.
pub const SPARQL_RESULTS_JSON: &str = "application/sparql-results+json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsHead {
    #[serde(default)]
    pub vars: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSet {
    #[serde(default)]
    pub bindings: Vec<Binding>,
}

/// A full results document.
///
/// `SELECT` responses carry `results`, `ASK` responses carry `boolean`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparqlResults {
    #[serde(default)]
    pub head: ResultsHead,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<ResultSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boolean: Option<bool>,
}

impl SparqlResults {
    /// Parse a results document, keeping a short excerpt of the body on failure.
    pub fn from_json(body: &str) -> Result<Self, DomainError> {
        serde_json::from_str(body).map_err(|e| {
            DomainError::InvalidResults(format!("{} (body: {})", e, truncate(body, 200)))
        })
    }

    /// Rows of a `SELECT` result; empty for `ASK` documents.
    pub fn into_bindings(self) -> Vec<Binding> {
        self.results.map(|r| r.bindings).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_select_document() {
        let body = r#"{
            "head": {"vars": ["service", "label"]},
            "results": {"bindings": [
                {"service": {"type": "uri", "value": "http://www.smarthealth-tracker.com/ontologie#consultation_1"},
                 "label": {"type": "literal", "value": "Consultation cardiologie"}},
                {"service": {"type": "uri", "value": "http://www.smarthealth-tracker.com/ontologie#analyse_2"}}
            ]}
        }"#;

        let results = SparqlResults::from_json(body).unwrap();
        assert_eq!(results.head.vars, vec!["service", "label"]);
        assert!(results.boolean.is_none());

        let rows = results.into_bindings();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].value("label"), Some("Consultation cardiologie"));
        assert_eq!(rows[1].value("label"), None);
    }

    #[test]
    fn test_parse_ask_document() {
        let results = SparqlResults::from_json(r#"{"head": {}, "boolean": true}"#).unwrap();
        assert_eq!(results.boolean, Some(true));
        assert!(results.into_bindings().is_empty());
    }

    #[test]
    fn test_invalid_document_reports_excerpt() {
        let err = SparqlResults::from_json("<html>Error 500</html>").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Invalid SPARQL results"));
        assert!(message.contains("<html>Error 500</html>"));
    }
}
