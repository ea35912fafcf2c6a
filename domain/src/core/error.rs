//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Question is required")]
    EmptyQuestion,

    #[error("Invalid SPARQL results: {0}")]
    InvalidResults(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_question_display() {
        assert_eq!(DomainError::EmptyQuestion.to_string(), "Question is required");
    }

    #[test]
    fn test_invalid_results_display() {
        let error = DomainError::InvalidResults("missing field".to_string());
        assert_eq!(error.to_string(), "Invalid SPARQL results: missing field");
    }
}
