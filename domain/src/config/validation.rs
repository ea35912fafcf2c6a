//! Configuration issues reported by file configuration validation.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the assistant cannot reach its endpoint with this value.
    Error,
    /// Non-fatal: the value works but is probably not what was intended.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// `fuseki.url` is empty.
    MissingEndpoint,
    /// `fuseki.url` is not an http(s) URL.
    InvalidEndpointUrl { value: String },
    /// `fuseki.timeout_seconds` is zero.
    ZeroTimeout,
    /// Only one of `fuseki.username` / `fuseki.password` is set.
    IncompleteCredentials,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}", level, self.message)
    }
}
