//! Classification result for one question

use super::category::{Category, ResultShape};
use serde::{Deserialize, Serialize};

/// A SPARQL query produced by a template, before it is tied to a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedQuery {
    pub query: String,
    pub shape: ResultShape,
    pub description: String,
}

impl GeneratedQuery {
    pub fn new(query: String, shape: ResultShape, description: impl Into<String>) -> Self {
        Self {
            query,
            shape,
            description: description.into(),
        }
    }
}

/// Everything the dispatcher knows about a question (Value Object)
///
/// Built once per question and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryInfo {
    pub category: Category,
    /// SPARQL text to run against the endpoint
    pub query: String,
    #[serde(rename = "type")]
    pub shape: ResultShape,
    pub description: String,
    pub original_question: String,
    /// Reformulation hint, only set when no pattern matched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl QueryInfo {
    pub fn matched(category: Category, generated: GeneratedQuery, question: &str) -> Self {
        Self {
            category,
            query: generated.query,
            shape: generated.shape,
            description: generated.description,
            original_question: question.to_string(),
            suggestion: None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.category.is_unknown()
    }
}
