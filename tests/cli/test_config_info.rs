//! Tests for show-config, info, reload-corpus and completions commands

use crate::cli::test_helpers::create_cli_test_services;
use clap_complete::Shell;
use medibot::cli::commands::completions::write_completions;
use medibot::cli::commands::config::{self, ConfigArgs};
use medibot::cli::commands::info::{self, InfoArgs};
use medibot::cli::commands::reload::{self, ReloadArgs};
use medibot::cli::OutputFormat;

#[tokio::test]
async fn test_show_config_both_formats() {
    let (services, _file) = create_cli_test_services();
    for (format, all) in [(OutputFormat::Human, true), (OutputFormat::Json, false)] {
        let result = config::execute(ConfigArgs { all }, &services, format).await;
        assert!(result.is_ok(), "show-config should succeed: {:?}", result.err());
    }
}

#[tokio::test]
async fn test_info_detailed() {
    let (services, _file) = create_cli_test_services();
    for format in [OutputFormat::Human, OutputFormat::Json] {
        let result = info::execute(InfoArgs { detailed: true }, &services, format).await;
        assert!(result.is_ok(), "info should succeed: {:?}", result.err());
    }
}

#[tokio::test]
async fn test_reload_corpus_reports_entries() {
    let (services, file) = create_cli_test_services();
    file.rewrite(r#"[{"question": "What is fever?", "answer": "Heat."}]"#);

    let result = reload::execute(
        ReloadArgs {
            require_entries: true,
        },
        &services,
        OutputFormat::Json,
    )
    .await;
    assert!(result.is_ok());
    assert_eq!(services.engine.entry_count(), 1);
}

#[tokio::test]
async fn test_reload_corpus_require_entries_fails_on_empty() {
    let (services, file) = create_cli_test_services();
    file.rewrite("[]");

    let lenient = reload::execute(
        ReloadArgs {
            require_entries: false,
        },
        &services,
        OutputFormat::Human,
    )
    .await;
    assert!(lenient.is_ok());

    let strict = reload::execute(
        ReloadArgs {
            require_entries: true,
        },
        &services,
        OutputFormat::Human,
    )
    .await;
    assert!(strict.is_err());
}

#[test]
fn test_completions_mention_commands() {
    let mut out = Vec::new();
    write_completions(Shell::Bash, &mut out);
    let script = String::from_utf8(out).unwrap();

    assert!(script.contains("medibot"));
    assert!(script.contains("reload-corpus"));
    assert!(script.contains("analyze-text"));
}
