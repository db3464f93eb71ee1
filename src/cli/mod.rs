//! CLI adapter for MediBot
//!
//! Provides a command-line interface over the FAQ match engine: one-shot
//! questions, an interactive chat, corpus reloads and text analysis.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |     core/        |
//! |  (domain logic)  |
//! +--------+---------+
//!          |
//!          v
//! +------------------+
//! |      cli/        |
//! | (clap adapter)   |
//! +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// MediBot - health FAQ matching engine
///
/// Answers free-text health questions in English, Hindi and Hinglish
/// from a JSON FAQ corpus.
#[derive(Parser, Debug)]
#[command(name = "medibot")]
#[command(version)]
#[command(about = "Health FAQ matching engine", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask a single question
    Ask(commands::AskArgs),

    /// Start an interactive chat session on stdin
    Chat(commands::ChatArgs),

    /// Re-read the FAQ corpus and rebuild the index
    #[command(name = "reload-corpus")]
    ReloadCorpus(commands::ReloadArgs),

    /// Show how text is normalized, tokenized and expanded
    #[command(name = "analyze-text")]
    AnalyzeText(commands::AnalyzeArgs),

    /// List synonym concept groups
    #[command(name = "list-concepts")]
    ListConcepts(commands::ConceptsArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Show version and corpus information
    Info(commands::InfoArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  medibot completions bash > ~/.local/share/bash-completion/completions/medibot
    ///   zsh:   medibot completions zsh > ~/.zfunc/_medibot
    ///   fish:  medibot completions fish > ~/.config/fish/completions/medibot.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use crate::core::xdg::{migrate_legacy_paths, XdgDirs};
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let xdg = XdgDirs::new();
    xdg.log_paths();

    if let Err(e) = migrate_legacy_paths(&xdg) {
        output::print_warning(&format!("Migration issue: {e}"));
    }

    let config = Config::load_with_xdg(&xdg)?;
    config.log_config();

    let services = Arc::new(Services::new(config)?);

    match cli.command {
        Commands::Ask(args) => commands::ask::execute(args, &services, cli.format).await,
        Commands::Chat(args) => commands::chat::execute(args, &services, cli.format).await,
        Commands::ReloadCorpus(args) => {
            commands::reload::execute(args, &services, cli.format).await
        }
        Commands::AnalyzeText(args) => {
            commands::analyze::execute(args, &services, cli.format).await
        }
        Commands::ListConcepts(args) => {
            commands::concepts::execute(args, &services, cli.format).await
        }
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::Info(args) => commands::info::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
