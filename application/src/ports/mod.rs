//! Port definitions
//!
//! Interfaces the application layer needs from the outside world.
//! Adapters live in the infrastructure and presentation layers.

pub mod conversation_logger;
pub mod progress;
pub mod sparql_endpoint;
