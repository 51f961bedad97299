//! CLI entry point: read a profile JSON document, run the analysis,
//! print the result as JSON.
//!
//! Usage:
//!   persona-mind profile.json
//!   cat profile.json | persona-mind --pretty --report

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::warn;

use persona_mind::error::PersonaMindError;
use persona_mind::insight::analysis::CompletenessReport;
use persona_mind::profile::validate::{self, ValidationReport};
use persona_mind::{AnalysisResult, Analyzer, Config, Profile};

#[derive(Parser)]
#[command(name = "persona-mind")]
#[command(about = "Generate personality insights from an assessment profile", long_about = None)]
struct Cli {
    /// Path to a profile JSON file; reads stdin when omitted
    profile: Option<PathBuf>,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,

    /// Include validation findings and the completeness report
    #[arg(long)]
    report: bool,

    /// Refuse to analyze when validation reports errors
    #[arg(long)]
    strict: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FullOutput {
    analysis: AnalysisResult,
    validation: ValidationReport,
    completeness_report: CompletenessReport,
}

fn main() -> Result<()> {
    persona_mind::load_env();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("persona_mind=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let raw = match &cli.profile {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading profile from {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading profile from stdin")?;
            buffer
        }
    };

    let value: serde_json::Value =
        serde_json::from_str(&raw).context("profile input is not valid JSON")?;

    let mut validation = validate::validate_raw(&value);
    let profile = Profile::from_value(value)?;
    validation.merge(validate::validate_profile(&profile));
    for issue in validation.errors.iter().chain(&validation.warnings) {
        warn!(field = %issue.field, code = issue.code, "{}", issue.message);
    }
    if cli.strict && !validation.is_valid() {
        return Err(PersonaMindError::Validation {
            message: format!("{} validation error(s); rerun without --strict to analyze anyway", validation.errors.len()),
        }
        .into());
    }

    let analyzer = Analyzer::new(config.engine);
    let analysis = analyzer.generate(&profile);

    let rendered = if cli.report {
        let output = FullOutput {
            completeness_report: analyzer.completeness_report(&profile),
            analysis,
            validation,
        };
        render(&output, cli.pretty)?
    } else {
        render(&analysis, cli.pretty)?
    };
    println!("{rendered}");

    Ok(())
}

fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}
