//! Model card compliance auditor
//!
//! Reads model cards from files (or stdin), runs the compliance suite and
//! prints one report per card on stdout. Logs go to stderr.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use compliance_engine::report::{render_details, render_markdown_report, render_results_table};
use compliance_engine::{build_report, ComplianceSuite, SuiteConfig};
use shared_types::ModelCard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "card-audit")]
#[command(version, about = "Check model cards for regulatory-relevant sections")]
struct Args {
    /// Model card Markdown files; reads stdin when none are given
    paths: Vec<PathBuf>,

    /// TOML file selecting which checks to run
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Repository name used in Markdown reports (defaults to the file name)
    #[arg(long)]
    repo_name: Option<String>,

    /// Append an explanation or fix-it template for every check to table and
    /// Markdown output; JSON output always carries them in `details`
    #[arg(long)]
    details: bool,

    /// Exit with status 1 when any check fails
    #[arg(long)]
    fail_on_missing: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
    Markdown,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // stdout carries the report, so logs always go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let suite = load_suite(args.config.as_deref())?;
    tracing::info!(checks = suite.checks().len(), "compliance suite ready");

    let cards = read_cards(&args.paths)?;
    let mut all_passed = true;

    for card in &cards {
        let (output, passed) = audit_card(&suite, card, &args)?;
        all_passed &= passed;
        println!("{output}");
    }

    if args.fail_on_missing && !all_passed {
        std::process::exit(1);
    }
    Ok(())
}

fn load_suite(config: Option<&Path>) -> anyhow::Result<ComplianceSuite> {
    let Some(path) = config else {
        return Ok(ComplianceSuite::default());
    };
    let config = SuiteConfig::from_file(path)
        .with_context(|| format!("Failed to load config: {}", path.display()))?;
    ComplianceSuite::from_config(&config).context("Invalid compliance suite configuration")
}

fn read_cards(paths: &[PathBuf]) -> anyhow::Result<Vec<ModelCard>> {
    if paths.is_empty() {
        let mut markdown = String::new();
        std::io::stdin()
            .read_to_string(&mut markdown)
            .context("Failed to read model card from stdin")?;
        return Ok(vec![ModelCard::new("stdin", markdown)]);
    }

    paths
        .iter()
        .map(|path| {
            let markdown = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read model card: {}", path.display()))?;
            Ok(ModelCard::new(card_id(path), markdown))
        })
        .collect()
}

/// `cards/gpt2.md` becomes `gpt2`
fn card_id(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Render one card's results; the flag reports whether every check passed
fn audit_card(
    suite: &ComplianceSuite,
    card: &ModelCard,
    args: &Args,
) -> anyhow::Result<(String, bool)> {
    let results = suite.run(&card.markdown);
    let passed = results.iter().all(|r| r.status());
    tracing::info!(card = %card.id, passed, "audited model card");

    let mut output = match args.format {
        Format::Json => serde_json::to_string_pretty(&build_report(&card.id, &results))
            .context("Failed to serialize compliance report")?,
        Format::Markdown => {
            let repo_name = args.repo_name.as_deref().unwrap_or(&card.id);
            render_markdown_report(&results, repo_name, false)
        }
        Format::Table => format!("{}\n{}", card.id, render_results_table(&results)),
    };

    if args.details && args.format != Format::Json {
        output.push('\n');
        output.push_str(&render_details(&results));
    }
    Ok((output, passed))
}
