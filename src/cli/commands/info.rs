//! Info command - show version and corpus information

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::matcher::MATCH_THRESHOLD;
use crate::core::services::Services;
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the info command
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Show detailed information
    #[arg(long, short = 'd')]
    pub detailed: bool,
}

/// Engine information response
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub corpus_source: String,
    pub entries: usize,
    pub loaded_at: DateTime<Utc>,
    pub concepts: usize,
    pub match_threshold: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagged_entries: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_phrases: Option<usize>,
}

/// Execute the info command
pub async fn execute(
    args: InfoArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let index = services.engine.snapshot();

    let info = InfoResponse {
        name: "medibot".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        corpus_source: index.source().to_string(),
        entries: index.len(),
        loaded_at: index.built_at(),
        concepts: services.engine.synonyms().len(),
        match_threshold: MATCH_THRESHOLD,
        tagged_entries: args
            .detailed
            .then(|| index.entries().iter().filter(|e| !e.tags.is_empty()).count()),
        safety_phrases: args
            .detailed
            .then(|| services.engine.safety().phrases().len()),
    };

    match format {
        OutputFormat::Human => {
            println!("medibot {}", info.version);
            println!("Corpus: {}", colors::file_path(&info.corpus_source));
            println!(
                "Entries: {} {}",
                colors::number(&info.entries.to_string()),
                colors::dim(&format!(
                    "(loaded {})",
                    output::format_relative_time(&info.loaded_at)
                ))
            );
            println!("Concepts: {}", colors::number(&info.concepts.to_string()));
            println!("Match threshold: {}", output::format_score(info.match_threshold));
            if let Some(tagged) = info.tagged_entries {
                println!("Tagged entries: {tagged}");
            }
            if let Some(phrases) = info.safety_phrases {
                println!("Safety phrases: {phrases}");
            }
        }
        OutputFormat::Json => output::print_json(&info)?,
    }

    Ok(())
}
