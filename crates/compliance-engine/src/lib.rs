pub mod checks;
pub mod config;
pub mod document;
pub mod error;
pub mod patterns;
pub mod report;
pub mod sections;

pub use checks::{ComplianceCheck, ComplianceResult};
pub use config::SuiteConfig;
pub use document::{parse, Document};
pub use error::ConfigError;

use shared_types::{CheckOutcome, ComplianceReport, ModelCard};

/// Ordered set of checks run against model cards
///
/// Holds no per-card state: one suite can check any number of cards, from
/// any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplianceSuite {
    checks: Vec<ComplianceCheck>,
}

impl ComplianceSuite {
    pub fn new(checks: Vec<ComplianceCheck>) -> Self {
        Self { checks }
    }

    pub fn from_config(config: &SuiteConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.resolve()?))
    }

    pub fn checks(&self) -> &[ComplianceCheck] {
        &self.checks
    }

    /// Parse the card once and run every check against it, in suite order
    pub fn run(&self, model_card: &str) -> Vec<ComplianceResult> {
        let document = document::parse(model_card);
        self.run_document(&document)
    }

    pub fn run_document(&self, document: &Document) -> Vec<ComplianceResult> {
        self.checks
            .iter()
            .map(|check| {
                let result = check.run_check(document);
                tracing::debug!(
                    check = check.name(),
                    status = result.status(),
                    "check completed"
                );
                result
            })
            .collect()
    }

    /// Run the suite and flatten the results for collaborators
    pub fn check_card(&self, card: &ModelCard) -> ComplianceReport {
        build_report(&card.id, &self.run(&card.markdown))
    }
}

/// Flatten results that were already computed into a report
pub fn build_report(card_id: &str, results: &[ComplianceResult]) -> ComplianceReport {
    let outcomes = results
        .iter()
        .map(|result| CheckOutcome {
            name: result.name().to_string(),
            status: result.status(),
            details: result.to_string(),
            extracted: result.extracted().map(str::to_string),
        })
        .collect();

    ComplianceReport {
        card_id: card_id.to_string(),
        outcomes,
        checked_at: chrono::Utc::now().timestamp() as u64,
    }
}

impl Default for ComplianceSuite {
    fn default() -> Self {
        Self::new(ComplianceCheck::ALL.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CARD: &str = "\
# Model Card for Sample Model

### Model Description

- **Developed by:** Jane Doe

## Uses

### Direct Use

Summarization of news articles.

### Out-of-Scope Use

Medical advice.

## Bias, Risks, and Limitations

[More Information Needed]

## Evaluation

ROUGE-1 of 42.6 on CNN/DailyMail.
";

    #[test]
    fn test_empty_suite_returns_no_results() {
        let suite = ComplianceSuite::new(Vec::new());
        assert!(suite.run(CARD).is_empty());
    }

    #[test]
    fn test_default_suite_runs_all_checks_in_order() {
        let suite = ComplianceSuite::default();
        let names: Vec<&str> = suite.run("").iter().map(|r| r.name()).collect();
        let expected: Vec<&str> = ComplianceCheck::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_statuses() {
        let statuses: Vec<bool> = ComplianceSuite::default()
            .run(CARD)
            .iter()
            .map(|r| r.status())
            .collect();
        assert_eq!(statuses, vec![true, true, false, false, true]);
    }

    #[test]
    fn test_suite_order_follows_configuration() {
        let suite = ComplianceSuite::new(vec![
            ComplianceCheck::Evaluation,
            ComplianceCheck::ModelProviderIdentity,
        ]);
        let results = suite.run(CARD);
        assert_eq!(results[0].check(), ComplianceCheck::Evaluation);
        assert_eq!(results[1].check(), ComplianceCheck::ModelProviderIdentity);
    }

    #[test]
    fn test_from_config() {
        let config = SuiteConfig::from_str(r#"checks = ["intended-purpose"]"#).unwrap();
        let suite = ComplianceSuite::from_config(&config).unwrap();
        assert_eq!(suite.checks(), &[ComplianceCheck::IntendedPurpose]);
    }

    #[test]
    fn test_check_card_report() {
        let suite = ComplianceSuite::default();
        let report = suite.check_card(&ModelCard::new("sample/model", CARD));

        assert_eq!(report.card_id, "sample/model");
        assert_eq!(report.outcomes.len(), 5);
        assert_eq!(report.passed(), 3);
        assert_eq!(report.outcomes[0].extracted.as_deref(), Some("Jane Doe"));
        assert!(report.outcomes[2].details.contains("## Bias, Risks, and Limitations"));
    }

    #[test]
    fn test_build_report_matches_check_card() {
        let suite = ComplianceSuite::default();
        let results = suite.run(CARD);
        let report = build_report("sample/model", &results);
        let expected = suite.check_card(&ModelCard::new("sample/model", CARD));

        assert_eq!(report.outcomes, expected.outcomes);
        assert_eq!(report.card_id, expected.card_id);
    }

    #[test]
    fn test_suite_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ComplianceSuite>();
        assert_send_sync::<Document>();
    }
}
