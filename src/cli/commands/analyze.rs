//! Analyze command - show the text pipeline for a piece of input

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the analyze-text command
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Text to analyze
    pub text: String,
}

/// Execute the analyze-text command
pub async fn execute(
    args: AnalyzeArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let analysis = services.engine.analyze(&args.text);

    match format {
        OutputFormat::Human => {
            println!("{} {}", colors::label("Normalized:"), analysis.normalized);
            println!("{} {}", colors::label("Tokens:"), analysis.tokens.join(" "));

            let expanded: Vec<String> = analysis
                .expanded
                .iter()
                .map(|t| {
                    if analysis.concepts.contains(t) {
                        colors::concept(t).to_string()
                    } else {
                        t.clone()
                    }
                })
                .collect();
            println!("{} {}", colors::label("Expanded:"), expanded.join(" "));

            if analysis.has_devanagari {
                println!("{}", colors::dim("Devanagari script detected"));
            }
            match &analysis.safety_phrase {
                Some(phrase) => println!(
                    "{} {}",
                    colors::warning("Safety override:"),
                    colors::error(phrase)
                ),
                None => println!("{} none", colors::label("Safety override:")),
            }
        }
        OutputFormat::Json => output::print_json(&analysis)?,
    }

    Ok(())
}
