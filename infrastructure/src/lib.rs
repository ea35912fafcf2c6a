//! Infrastructure layer for smarthealth-assistant
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod fuseki;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileAssistantConfig, FileConfig, FileFusekiConfig, FileOutputConfig,
    FileReplConfig,
};
pub use fuseki::{FusekiClient, FusekiError};
pub use logging::JsonlConversationLogger;
