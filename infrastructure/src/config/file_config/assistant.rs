//! Assistant behavior from TOML (`[assistant]` section)

use serde::{Deserialize, Serialize};

/// Raw assistant configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAssistantConfig {
    /// Include the generated SPARQL in answers
    pub expose_sparql: bool,
    /// JSONL transcript path; no transcript when unset
    pub conversation_log: Option<String>,
}
