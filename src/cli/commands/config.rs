//! Config command - show current configuration

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the show-config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also list the built-in safety phrases
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: String,
    pub data_dir: String,
    #[serde(flatten)]
    pub config: Config,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_phrases: Option<Vec<String>>,
}

/// Execute the show-config command
pub async fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let xdg = XdgDirs::new();

    let response = ConfigResponse {
        config_file: xdg.config_file().to_string_lossy().into_owned(),
        data_dir: xdg.data_dir.to_string_lossy().into_owned(),
        config: (*services.config).clone(),
        safety_phrases: args
            .all
            .then(|| services.engine.safety().phrases().to_vec()),
    };

    match format {
        OutputFormat::Human => {
            let config = &response.config;
            output::print_header("Configuration:");
            println!("  config_file: {}", colors::file_path(&response.config_file));
            println!("  data_dir: {}", colors::file_path(&response.data_dir));
            println!("  corpus:");
            println!(
                "    faq_file: {}",
                colors::file_path(&config.corpus.faq_file.to_string_lossy())
            );
            println!("  synonyms:");
            match &config.synonyms.file {
                Some(file) => println!("    file: {}", colors::file_path(&file.to_string_lossy())),
                None => println!("    file: {}", colors::dim("none")),
            }
            println!("    include_builtin: {}", config.synonyms.include_builtin);
            println!("  safety:");
            println!("    extra_phrases: {:?}", config.safety.extra_phrases);
            println!("  chat:");
            println!("    history_limit: {}", config.chat.history_limit);
            println!("    fallback_reply: {}", config.chat.fallback_reply);
            println!("    specialty_route: {}", config.chat.specialty_route);
            if let Some(phrases) = &response.safety_phrases {
                println!("  active safety phrases:");
                for phrase in phrases {
                    println!("    - {phrase}");
                }
            }
        }
        OutputFormat::Json => output::print_json(&response)?,
    }

    Ok(())
}
