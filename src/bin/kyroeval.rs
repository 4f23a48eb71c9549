//! KyroEval CLI
//!
//! Evaluates one JSON input record and prints the four judgments.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use kyroeval::{Coordinator, EvaluationConfig, EvaluationInput};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "kyroeval", about = "Evaluate a research query against its sources")]
struct Cli {
    /// Path to the JSON input record
    input: PathBuf,

    /// Path to a JSON config file overriding weights and thresholds
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, short, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Emit a full audit report (id, timestamp, input digest, stage diagnostics)
    #[arg(long)]
    report: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EvaluationConfig::load(path)?,
        None => EvaluationConfig::default(),
    };
    tracing::debug!(?config, "loaded configuration");

    let raw = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read input file {}", cli.input.display()))?;
    let input = EvaluationInput::from_json(&raw)
        .with_context(|| format!("invalid input record {}", cli.input.display()))?;

    let coordinator = Coordinator::from_config(&config);

    if cli.report {
        let report = coordinator.run_with_report(&input)?;
        match cli.format {
            Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            Format::Text => {
                println!("Evaluation: {}", report.id);
                println!("Evaluated At: {}", report.evaluated_at.to_rfc3339());
                println!("Input Digest: {}", report.input_digest);
                println!("{}", report.result);
            }
        }
    } else {
        let result = coordinator.run(&input)?;
        match cli.format {
            Format::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            Format::Text => println!("{result}"),
        }
    }

    Ok(())
}
