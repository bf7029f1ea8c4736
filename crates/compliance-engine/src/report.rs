//! Markdown rendering of suite results
//!
//! Produces the report body a collaborator can post to a model repository's
//! discussion thread. Posting and thread management happen elsewhere.

use std::fmt::Write;

use crate::checks::ComplianceResult;

const CHECK_HEADER: &str = "Compliance Check";
const PRESENT_HEADER: &str = "Present";

/// GitHub-flavored table with one row per result
pub fn render_results_table(results: &[ComplianceResult]) -> String {
    let name_width = results
        .iter()
        .map(|r| r.name().len())
        .chain(std::iter::once(CHECK_HEADER.len()))
        .max()
        .unwrap_or(CHECK_HEADER.len());
    let present_width = PRESENT_HEADER.len();

    let mut table = String::new();
    let _ = writeln!(
        table,
        "| {:<name_width$} | {:<present_width$} |",
        CHECK_HEADER, PRESENT_HEADER
    );
    let _ = writeln!(
        table,
        "|{}|{}|",
        "-".repeat(name_width + 2),
        "-".repeat(present_width + 2)
    );
    for result in results {
        let present = if result.status() { "Yes" } else { "No" };
        let _ = writeln!(
            table,
            "| {:<name_width$} | {:<present_width$} |",
            result.name(),
            present
        );
    }
    table
}

/// Full report card for one repository
///
/// `updated` marks a re-run posted to an existing report thread.
pub fn render_markdown_report(
    results: &[ComplianceResult],
    repo_name: &str,
    updated: bool,
) -> String {
    let title_suffix = if updated { " (updated)" } else { "" };
    format!(
        "# Model Card Regulatory Compliance report card{title_suffix}\n\n\
         This is an automatically produced model card regulatory compliance report card for {repo_name}.\n\n\
         ## Breakdown of compliance checks for your model\n\n\
         {table}",
        table = render_results_table(results)
    )
}

/// Explanations for every result, one section per check
pub fn render_details(results: &[ComplianceResult]) -> String {
    results
        .iter()
        .map(|r| format!("### {}\n\n{}\n", r.name(), r))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{EvaluationResult, GeneralLimitationsResult};
    use pretty_assertions::assert_eq;

    fn results() -> Vec<ComplianceResult> {
        vec![
            ComplianceResult::GeneralLimitations(GeneralLimitationsResult {
                status: true,
                limitations: Some("Biased".to_string()),
            }),
            ComplianceResult::Evaluation(EvaluationResult::default()),
        ]
    }

    #[test]
    fn test_results_table() {
        let expected = "\
| Compliance Check       | Present |
|------------------------|---------|
| General Limitations    | Yes     |
| Evaluation and Metrics | No      |
";
        assert_eq!(render_results_table(&results()), expected);
    }

    #[test]
    fn test_empty_table_has_header() {
        let table = render_results_table(&[]);
        assert_eq!(table.lines().count(), 2);
        assert!(table.starts_with("| Compliance Check | Present |"));
    }

    #[test]
    fn test_report_title() {
        let report = render_markdown_report(&results(), "gpt2", false);
        assert!(report.starts_with("# Model Card Regulatory Compliance report card\n"));
        assert!(report.contains("for gpt2."));
        assert!(report.contains("| General Limitations    | Yes     |"));

        let updated = render_markdown_report(&results(), "gpt2", true);
        assert!(updated.starts_with("# Model Card Regulatory Compliance report card (updated)\n"));
    }

    #[test]
    fn test_details_has_section_per_result() {
        let details = render_details(&results());
        assert!(details.contains("### General Limitations"));
        assert!(details.contains("### Evaluation and Metrics"));
        assert!(details.contains("## Evaluation\n"));
    }
}
