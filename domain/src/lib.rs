//! Domain layer for smarthealth-assistant
//!
//! This crate contains the question-to-SPARQL pipeline and the SPARQL value
//! types. It has no dependencies on infrastructure or presentation concerns
//! and performs no I/O.
//!
//! # Core Concepts
//!
//! - **Pattern table**: six ordered categories of French question patterns,
//!   each with a handler producing a SPARQL query from the captured subject
//! - **Dispatcher**: first match wins, otherwise a "list all services"
//!   fallback with a reformulation hint
//! - **Formatter**: phrases result rows according to their shape, tolerating
//!   any missing variable

pub mod assistant;
pub mod config;
pub mod core;
pub mod sparql;

// Re-export commonly used types
pub use assistant::{
    analyzer::{FALLBACK_SUGGESTION, QuestionClassifier, StandardClassifier, analyze_question},
    catalog::{Capabilities, Capability, ExampleGroup, capabilities, example_questions},
    category::{Category, ResultShape},
    formatter::{FormattedResponse, format_answer, format_response},
    patterns::PatternTable,
    query_info::{GeneratedQuery, QueryInfo},
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use crate::core::{error::DomainError, question::Question, string::truncate};
pub use sparql::{
    binding::{Binding, BindingValue},
    escape::escape_literal,
    results::{SPARQL_RESULTS_JSON, SparqlResults},
};
