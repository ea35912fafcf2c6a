//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod assistant;
mod fuseki;
mod output;
mod repl;

pub use assistant::FileAssistantConfig;
pub use fuseki::{DEFAULT_FUSEKI_URL, FileFusekiConfig};
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;

use assistant_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// SPARQL endpoint settings
    pub fuseki: FileFusekiConfig,
    /// Answer behavior and transcript
    pub assistant: FileAssistantConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        self.fuseki.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assistant_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[fuseki]
url = "https://fuseki.example.org/smarthealth"
username = "admin"
password = "admin123"
timeout_seconds = 5

[assistant]
expose_sparql = true
conversation_log = "~/.local/share/smarthealth-assistant/conversation.jsonl"

[output]
format = "full"
color = false

[repl]
show_progress = false
history_file = "~/.local/share/smarthealth-assistant/history.txt"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.fuseki.url, "https://fuseki.example.org/smarthealth");
        assert_eq!(config.fuseki.username.as_deref(), Some("admin"));
        assert_eq!(config.fuseki.timeout_seconds, 5);
        assert!(config.assistant.expose_sparql);
        assert!(config.assistant.conversation_log.is_some());
        assert_eq!(config.output.format, Some(OutputFormat::Full));
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[fuseki]
timeout_seconds = 30
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.fuseki.timeout_seconds, 30);
        // Defaults should apply
        assert_eq!(config.fuseki.url, DEFAULT_FUSEKI_URL);
        assert!(config.fuseki.username.is_none());
        assert!(!config.assistant.expose_sparql);
        assert!(config.output.color);
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_validate_reports_bad_url() {
        let config: FileConfig = toml::from_str("[fuseki]\nurl = \"ftp://x\"\n").unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
    }
}
