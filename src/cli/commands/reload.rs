//! Reload command - rebuild the index from the corpus source

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the reload-corpus command
#[derive(Args, Debug)]
pub struct ReloadArgs {
    /// Fail when the reloaded corpus is empty
    #[arg(long)]
    pub require_entries: bool,
}

/// Execute the reload-corpus command
pub async fn execute(
    args: ReloadArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let stats = services.engine.reload();

    match format {
        OutputFormat::Human => {
            if stats.entries == 0 {
                output::print_warning(&format!("No FAQ entries loaded from {}", stats.source));
            } else {
                output::print_success(&format!("Loaded {} FAQ entries", stats.entries));
            }
            println!("  Source: {}", colors::file_path(&stats.source));
            println!(
                "  Duration: {}",
                output::format_millis_colored(stats.duration_ms)
            );
        }
        OutputFormat::Json => output::print_output(&stats, format),
    }

    if args.require_entries && stats.entries == 0 {
        return Err(format!("Corpus at {} is empty or unreadable", stats.source).into());
    }

    Ok(())
}
