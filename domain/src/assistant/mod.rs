//! The question-answering pipeline.
//!
//! ```text
//! question ─► analyzer (pattern table ─► templates) ─► QueryInfo
//!                                                        │
//!                        SPARQL endpoint (outside the domain)
//!                                                        │
//! FormattedResponse ◄─ formatter ◄──── Vec<Binding> ◄────┘
//! ```

pub mod analyzer;
pub mod catalog;
pub mod category;
pub mod formatter;
pub mod patterns;
pub mod query_info;
pub mod templates;
