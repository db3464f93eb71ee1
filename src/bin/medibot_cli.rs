//! MediBot CLI - command-line interface for the health FAQ matcher
//!
//! # Examples
//!
//! ```bash
//! # Ask one question
//! medibot ask "mujhe bukhar hai"
//!
//! # Chat interactively
//! medibot chat
//!
//! # Re-read the corpus after editing it
//! medibot reload-corpus
//!
//! # See how a query is tokenized and expanded
//! medibot analyze-text "sir dard ho raha hai"
//! ```

use clap::Parser;
use medibot::cli::{run, Cli};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries command output
    let default_filter = if cli.verbose {
        "medibot=debug"
    } else {
        "medibot=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
