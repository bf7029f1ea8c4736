//! Suite configuration
//!
//! A suite is configured once and reused for every card. The TOML form lists
//! checks by key or display name, in the order they should run:
//!
//! ```toml
//! checks = ["model-provider-identity", "intended-purpose", "General Limitations"]
//! ```
//!
//! Leaving `checks` out selects every check in default order.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::checks::ComplianceCheck;
use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<String>>,
}

impl SuiteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&content)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Resolve configured names into checks, rejecting unknown or repeated
    /// entries and empty lists
    pub fn resolve(&self) -> Result<Vec<ComplianceCheck>, ConfigError> {
        let Some(names) = &self.checks else {
            return Ok(ComplianceCheck::ALL.to_vec());
        };

        let mut seen = HashSet::new();
        let mut checks = Vec::with_capacity(names.len());
        for name in names {
            let check: ComplianceCheck = name.parse()?;
            if !seen.insert(check) {
                return Err(ConfigError::DuplicateCheck(check.key().to_string()));
            }
            checks.push(check);
        }

        if checks.is_empty() {
            return Err(ConfigError::NoChecks);
        }
        Ok(checks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_checks_selects_all() {
        let config = SuiteConfig::from_str("").unwrap();
        assert_eq!(config.resolve().unwrap(), ComplianceCheck::ALL.to_vec());
    }

    #[test]
    fn test_checks_keep_configured_order() {
        let config =
            SuiteConfig::from_str(r#"checks = ["evaluation", "General Limitations"]"#).unwrap();
        assert_eq!(
            config.resolve().unwrap(),
            vec![ComplianceCheck::Evaluation, ComplianceCheck::GeneralLimitations]
        );
    }

    #[test]
    fn test_unknown_check_is_rejected() {
        let config = SuiteConfig::from_str(r#"checks = ["training-data"]"#).unwrap();
        assert!(matches!(config.resolve(), Err(ConfigError::UnknownCheck(_))));
    }

    #[test]
    fn test_duplicate_check_is_rejected() {
        let config =
            SuiteConfig::from_str(r#"checks = ["evaluation", "Evaluation and Metrics"]"#).unwrap();
        assert!(matches!(
            config.resolve(),
            Err(ConfigError::DuplicateCheck(key)) if key == "evaluation"
        ));
    }

    #[test]
    fn test_empty_list_is_rejected() {
        let config = SuiteConfig::from_str("checks = []").unwrap();
        assert!(matches!(config.resolve(), Err(ConfigError::NoChecks)));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(matches!(
            SuiteConfig::from_str("threshold = 3"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = SuiteConfig::from_file("/nonexistent/card-audit.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/card-audit.toml"));
    }
}
