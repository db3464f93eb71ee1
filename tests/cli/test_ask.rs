//! Tests for the ask CLI command
//!
//! - Matches in human and JSON output
//! - No-match fallback
//! - Chat reply envelope (--reply)
//! - Blank questions with --reply

use crate::cli::test_helpers::create_cli_test_services;
use medibot::cli::commands::ask::{execute, AskArgs};
use medibot::cli::OutputFormat;

fn args(query: &str, reply: bool) -> AskArgs {
    AskArgs {
        query: query.to_string(),
        reply,
    }
}

#[tokio::test]
async fn test_ask_match_human() {
    let (services, _file) = create_cli_test_services();
    let result = execute(args("I have bukhar", false), &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Ask should succeed: {:?}", result.err());
}

#[tokio::test]
async fn test_ask_match_json() {
    let (services, _file) = create_cli_test_services();
    let result = execute(args("dry cough", false), &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "JSON ask should succeed: {:?}", result.err());
}

#[tokio::test]
async fn test_ask_no_match_is_not_an_error() {
    let (services, _file) = create_cli_test_services();
    for format in [OutputFormat::Human, OutputFormat::Json] {
        let result = execute(args("xyz unrelated nonsense", false), &services, format).await;
        assert!(result.is_ok());
    }
}

#[tokio::test]
async fn test_ask_blank_query_prompts() {
    let (services, _file) = create_cli_test_services();
    let result = execute(args("   ", false), &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_ask_reply_envelope() {
    let (services, _file) = create_cli_test_services();
    let result = execute(args("what should i do for fever", true), &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "Reply should succeed: {:?}", result.err());
}

#[tokio::test]
async fn test_ask_reply_rejects_blank_message() {
    let (services, _file) = create_cli_test_services();
    let result = execute(args("  ", true), &services, OutputFormat::Human).await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Missing message"));
}
