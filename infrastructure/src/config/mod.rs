//! Configuration file loading for smarthealth-assistant
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `FUSEKI_URL` / `FUSEKI_USER` / `FUSEKI_PASSWORD` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./assistant.toml` or `./.assistant.toml`
//! 4. Global: `$XDG_CONFIG_HOME/smarthealth-assistant/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_FUSEKI_URL, FileAssistantConfig, FileConfig, FileFusekiConfig, FileOutputConfig,
    FileReplConfig,
};
pub use loader::{ConfigLoader, ENV_OVERRIDES};
