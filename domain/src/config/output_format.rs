//! Output format value object

use serde::{Deserialize, Serialize};

/// How an assistant answer is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Answer, classification details and result rows
    Full,
    /// Only the natural-language answer (default)
    #[default]
    Answer,
    /// JSON document mirroring the HTTP assistant response
    Json,
}
