//! Fuseki endpoint configuration from TOML (`[fuseki]` section)

use assistant_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};

pub const DEFAULT_FUSEKI_URL: &str = "http://localhost:3030/smarthealth";

/// Raw Fuseki configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFusekiConfig {
    /// Dataset URL; queries go to `{url}/query`
    pub url: String,
    /// HTTP basic auth user
    pub username: Option<String>,
    /// HTTP basic auth password
    pub password: Option<String>,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for FileFusekiConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FUSEKI_URL.to_string(),
            username: None,
            password: None,
            timeout_seconds: 10,
        }
    }
}

impl FileFusekiConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        let url = self.url.trim();

        if url.is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::MissingEndpoint,
                message: "fuseki.url is empty".to_string(),
            });
        } else if !(url.starts_with("http://") || url.starts_with("https://")) {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::InvalidEndpointUrl {
                    value: url.to_string(),
                },
                message: format!("fuseki.url: '{}' is not an http(s) URL", url),
            });
        }

        if self.timeout_seconds == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::ZeroTimeout,
                message: "fuseki.timeout_seconds is 0, using 1 second".to_string(),
            });
        }

        if self.username.is_some() != self.password.is_some() {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::IncompleteCredentials,
                message: "fuseki.username and fuseki.password must be set together; \
                          sending requests without authentication"
                    .to_string(),
            });
        }

        issues
    }
}
