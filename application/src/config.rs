//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases
//! behave, such as the endpoint timeout and what the answer exposes.

use std::time::Duration;

/// Application behavior configuration.
#[derive(Debug, Clone, Default)]
pub struct BehaviorConfig {
    /// Maximum time to wait for the endpoint before giving up.
    pub timeout: Option<Duration>,
    /// Include the generated SPARQL text in answers.
    pub expose_sparql: bool,
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig from an optional timeout in seconds.
    ///
    /// If `seconds` is `None`, no timeout is applied.
    pub fn from_timeout_seconds(seconds: Option<u64>) -> Self {
        Self {
            timeout: seconds.map(Duration::from_secs),
            ..Self::default()
        }
    }

    pub fn with_expose_sparql(mut self, expose: bool) -> Self {
        self.expose_sparql = expose;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_timeout_and_hides_sparql() {
        let config = BehaviorConfig::default();
        assert!(config.timeout.is_none());
        assert!(!config.expose_sparql);
    }

    #[test]
    fn test_from_timeout_seconds() {
        let config = BehaviorConfig::from_timeout_seconds(Some(10)).with_expose_sparql(true);
        assert_eq!(config.timeout, Some(Duration::from_secs(10)));
        assert!(config.expose_sparql);
        assert!(BehaviorConfig::from_timeout_seconds(None).timeout.is_none());
    }
}
