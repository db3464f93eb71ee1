//! CLI test helpers
//!
//! Provides Arc<Services> wrappers matching CLI execute() signatures and
//! a runner for the chat REPL over in-memory input.

use crate::common::FaqFile;
use medibot::cli::commands::chat::{execute_with_io, ChatArgs};
use medibot::cli::OutputFormat;
use medibot::core::config::Config;
use medibot::core::services::Services;
use std::io::Cursor;
use std::sync::Arc;

/// Create test services over the sample corpus (keep the FaqFile alive)
pub fn create_cli_test_services() -> (Arc<Services>, FaqFile) {
    let file = FaqFile::sample();
    let mut config = Config::default();
    config.corpus.faq_file = file.path().to_path_buf();

    let services = Arc::new(Services::new(config).expect("Failed to create services"));
    (services, file)
}

/// Feed `input` to the chat REPL and return everything it wrote
pub fn run_chat(services: &Arc<Services>, input: &str, format: OutputFormat) -> String {
    colored::control::set_override(false);

    let args = ChatArgs {
        show_meta: true,
        quiet: false,
    };
    let mut output = Vec::new();
    execute_with_io(
        args,
        services,
        format,
        Cursor::new(input.as_bytes().to_vec()),
        &mut output,
    )
    .expect("chat session should not fail");

    String::from_utf8(output).expect("chat output is UTF-8")
}
