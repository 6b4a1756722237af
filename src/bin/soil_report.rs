// Soil report CLI
//
// Purpose: Analyse a JSON file of soil readings and print a report per entry
// Usage: cargo run --features cli --bin soil_report -- readings.json
//
// Environment: SOIL_REPORT_FORMAT (markdown | json | json-compact),
//              SOIL_HISTORY_LIMIT, RUST_LOG

use anyhow::{bail, Context, Result};
use soil_scorer_rust::data::load_readings;
use soil_scorer_rust::{
    create_analyses, AnalyzerConfig, JsonFormatter, MarkdownFormatter, OutputFormat,
    ReportGenerator, SoilMeasurement, SoilReport,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "soil_scorer_rust=info,soil_report=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        bail!("usage: soil_report <readings.json>");
    };

    let config = AnalyzerConfig::from_env().context("Invalid configuration")?;
    tracing::info!("Configuration:");
    tracing::info!("  SOIL_REPORT_FORMAT: {:?}", config.format);
    tracing::info!("  SOIL_HISTORY_LIMIT: {:?}", config.history_limit);

    let measurements: Vec<SoilMeasurement> = load_readings(&path)?
        .into_iter()
        .map(SoilMeasurement::from)
        .collect();

    let analyses = create_analyses(&measurements);
    let healthy = analyses.iter().filter(|a| a.needs_no_fertilizer()).count();
    tracing::info!(
        "Analysed {} measurements ({} need no fertilizer)",
        analyses.len(),
        healthy
    );

    let reports: Vec<SoilReport> = analyses.iter().map(ReportGenerator::generate).collect();

    let mut history = config.new_history();
    for analysis in analyses {
        history.record(analysis);
    }

    match config.format {
        OutputFormat::Markdown => {
            for report in &reports {
                println!("{}", MarkdownFormatter::format(report));
            }
            println!("{}", MarkdownFormatter::format_history(&history));
            if let Some((current, previous)) = history.latest_pair() {
                println!("{}", MarkdownFormatter::format_comparison(current, previous));
            }
        }
        OutputFormat::Json => {
            println!("{}", JsonFormatter::format_all(&reports)?);
        }
        OutputFormat::JsonCompact => {
            for report in &reports {
                println!("{}", JsonFormatter::format_compact(report)?);
            }
        }
    }

    Ok(())
}
