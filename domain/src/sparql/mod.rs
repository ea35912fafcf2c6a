//! SPARQL vocabulary shared by the query templates and the endpoint adapters.
//!
//! - [`binding::Binding`] - one loosely typed result row
//! - [`results::SparqlResults`] - the JSON results document
//! - [`escape::escape_literal`] - literal escaping for interpolated text
//! - [`prefixes`] - the namespaces of the SmartHealth ontology

pub mod binding;
pub mod escape;
pub mod prefixes;
pub mod results;
