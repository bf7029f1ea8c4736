//! Model card compliance checks
//!
//! Each check looks for one regulatory-relevant section of a model card.
//! The set of checks is closed: [`ComplianceCheck`] names every check and
//! dispatches to its module, [`ComplianceResult`] carries each check's
//! result shape.
//!
//! ## Equality
//!
//! | Result | Compared fields |
//! |---|---|
//! | Model Provider Identity | status, provider |
//! | Intended Purpose | status |
//! | General Limitations | status, limitations |
//! | Computational Requirements | status |
//! | Evaluation and Metrics | status |
//!
//! Results of different checks never compare equal.

pub mod computational_requirements;
pub mod evaluation;
pub mod general_limitations;
pub mod identity;
pub mod intended_purpose;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::ConfigError;

pub use computational_requirements::ComputationalRequirementsResult;
pub use evaluation::EvaluationResult;
pub use general_limitations::GeneralLimitationsResult;
pub use identity::ModelProviderIdentityResult;
pub use intended_purpose::IntendedPurposeResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceCheck {
    ModelProviderIdentity,
    IntendedPurpose,
    GeneralLimitations,
    ComputationalRequirements,
    Evaluation,
}

impl ComplianceCheck {
    /// Every check, in default suite order
    pub const ALL: [ComplianceCheck; 5] = [
        ComplianceCheck::ModelProviderIdentity,
        ComplianceCheck::IntendedPurpose,
        ComplianceCheck::GeneralLimitations,
        ComplianceCheck::ComputationalRequirements,
        ComplianceCheck::Evaluation,
    ];

    /// Stable display name, shared with the check's result
    pub fn name(self) -> &'static str {
        match self {
            ComplianceCheck::ModelProviderIdentity => identity::NAME,
            ComplianceCheck::IntendedPurpose => intended_purpose::NAME,
            ComplianceCheck::GeneralLimitations => general_limitations::NAME,
            ComplianceCheck::ComputationalRequirements => computational_requirements::NAME,
            ComplianceCheck::Evaluation => evaluation::NAME,
        }
    }

    /// Configuration key, e.g. `intended-purpose`
    pub fn key(self) -> &'static str {
        match self {
            ComplianceCheck::ModelProviderIdentity => "model-provider-identity",
            ComplianceCheck::IntendedPurpose => "intended-purpose",
            ComplianceCheck::GeneralLimitations => "general-limitations",
            ComplianceCheck::ComputationalRequirements => "computational-requirements",
            ComplianceCheck::Evaluation => "evaluation",
        }
    }

    pub fn run_check(self, doc: &Document) -> ComplianceResult {
        match self {
            ComplianceCheck::ModelProviderIdentity => {
                ComplianceResult::ModelProviderIdentity(identity::check_model_provider_identity(doc))
            }
            ComplianceCheck::IntendedPurpose => {
                ComplianceResult::IntendedPurpose(intended_purpose::check_intended_purpose(doc))
            }
            ComplianceCheck::GeneralLimitations => ComplianceResult::GeneralLimitations(
                general_limitations::check_general_limitations(doc),
            ),
            ComplianceCheck::ComputationalRequirements => {
                ComplianceResult::ComputationalRequirements(
                    computational_requirements::check_computational_requirements(doc),
                )
            }
            ComplianceCheck::Evaluation => {
                ComplianceResult::Evaluation(evaluation::check_evaluation(doc))
            }
        }
    }
}

impl fmt::Display for ComplianceCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ComplianceCheck {
    type Err = ConfigError;

    /// Accepts the configuration key or the display name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ComplianceCheck::ALL
            .into_iter()
            .find(|check| check.key() == s || check.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownCheck(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComplianceResult {
    ModelProviderIdentity(ModelProviderIdentityResult),
    IntendedPurpose(IntendedPurposeResult),
    GeneralLimitations(GeneralLimitationsResult),
    ComputationalRequirements(ComputationalRequirementsResult),
    Evaluation(EvaluationResult),
}

impl ComplianceResult {
    pub fn check(&self) -> ComplianceCheck {
        match self {
            ComplianceResult::ModelProviderIdentity(_) => ComplianceCheck::ModelProviderIdentity,
            ComplianceResult::IntendedPurpose(_) => ComplianceCheck::IntendedPurpose,
            ComplianceResult::GeneralLimitations(_) => ComplianceCheck::GeneralLimitations,
            ComplianceResult::ComputationalRequirements(_) => {
                ComplianceCheck::ComputationalRequirements
            }
            ComplianceResult::Evaluation(_) => ComplianceCheck::Evaluation,
        }
    }

    pub fn name(&self) -> &'static str {
        self.check().name()
    }

    /// True when the section is present and substantive
    pub fn status(&self) -> bool {
        match self {
            ComplianceResult::ModelProviderIdentity(r) => r.status,
            ComplianceResult::IntendedPurpose(r) => r.status,
            ComplianceResult::GeneralLimitations(r) => r.status,
            ComplianceResult::ComputationalRequirements(r) => r.status,
            ComplianceResult::Evaluation(r) => r.status,
        }
    }

    /// The main text pulled out of the card, if any
    pub fn extracted(&self) -> Option<&str> {
        match self {
            ComplianceResult::ModelProviderIdentity(r) => r.provider.as_deref(),
            ComplianceResult::IntendedPurpose(r) => r.direct_use.as_deref(),
            ComplianceResult::GeneralLimitations(r) => r.limitations.as_deref(),
            ComplianceResult::ComputationalRequirements(r) => r.requirements.as_deref(),
            ComplianceResult::Evaluation(r) => r.evaluation.as_deref(),
        }
    }
}

impl fmt::Display for ComplianceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplianceResult::ModelProviderIdentity(r) => fmt::Display::fmt(r, f),
            ComplianceResult::IntendedPurpose(r) => fmt::Display::fmt(r, f),
            ComplianceResult::GeneralLimitations(r) => fmt::Display::fmt(r, f),
            ComplianceResult::ComputationalRequirements(r) => fmt::Display::fmt(r, f),
            ComplianceResult::Evaluation(r) => fmt::Display::fmt(r, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_names_are_stable() {
        let names: Vec<&str> = ComplianceCheck::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec![
                "Model Provider Identity",
                "Intended Purpose",
                "General Limitations",
                "Computational Requirements",
                "Evaluation and Metrics",
            ]
        );
    }

    #[test]
    fn test_result_name_matches_check() {
        let doc = parse("");
        for check in ComplianceCheck::ALL {
            let result = check.run_check(&doc);
            assert_eq!(result.check(), check);
            assert_eq!(result.name(), check.name());
            assert!(!result.status());
        }
    }

    #[test]
    fn test_parse_check_keys_and_names() {
        for check in ComplianceCheck::ALL {
            assert_eq!(check.key().parse::<ComplianceCheck>().unwrap(), check);
            assert_eq!(check.name().parse::<ComplianceCheck>().unwrap(), check);
        }
        assert_eq!(
            "evaluation and metrics".parse::<ComplianceCheck>().unwrap(),
            ComplianceCheck::Evaluation
        );
    }

    #[test]
    fn test_parse_unknown_check() {
        let err = "training-data".parse::<ComplianceCheck>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownCheck(name) if name == "training-data"));
    }

    #[test]
    fn test_serde_key_matches_key() {
        for check in ComplianceCheck::ALL {
            let json = serde_json::to_string(&check).unwrap();
            assert_eq!(json, format!("\"{}\"", check.key()));
        }
    }

    #[test]
    fn test_results_of_different_checks_differ() {
        let doc = parse("");
        let evaluation = ComplianceCheck::Evaluation.run_check(&doc);
        let requirements = ComplianceCheck::ComputationalRequirements.run_check(&doc);
        assert_ne!(evaluation, requirements);
    }

    #[test]
    fn test_extracted_payload() {
        let doc = parse("- **Developed by:** Jane Doe\n");
        let result = ComplianceCheck::ModelProviderIdentity.run_check(&doc);
        assert_eq!(result.extracted(), Some("Jane Doe"));
        assert!(result.to_string().contains("Jane Doe"));
    }
}
