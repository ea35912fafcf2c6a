//! Application layer for smarthealth-assistant
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    progress::{AskProgressNotifier, NoProgress},
    sparql_endpoint::{EndpointError, SparqlEndpoint},
};
pub use use_cases::ask_question::{
    AskQuestionError, AskQuestionUseCase, AssistantAnswer, QueryInfoSummary,
};
pub use use_cases::check_endpoint::{CheckEndpointUseCase, EndpointStatus};
