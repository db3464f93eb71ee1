//! Tests for the chat CLI command
//!
//! Drives the REPL with in-memory input:
//! - replies with specialist suggestions
//! - session commands (:history, :clear, :reload, :quit)
//! - JSON line output

use crate::cli::test_helpers::{create_cli_test_services, run_chat};
use medibot::cli::OutputFormat;
use medibot::core::safety::CRISIS_SENTINEL;

#[test]
fn test_chat_reply_with_specialist() {
    let (services, _file) = create_cli_test_services();
    let out = run_chat(&services, "what should i do for fever\n", OutputFormat::Human);

    assert!(out.contains("Rest, drink plenty of fluids"));
    assert!(out.contains("Suggested specialist: General Physician"));
    assert!(out.contains("/dm?specialty=General%20Physician"));
    assert!(out.contains("score 1.000"));
}

#[test]
fn test_chat_fallback_reply() {
    let (services, _file) = create_cli_test_services();
    let out = run_chat(&services, "xyz unrelated nonsense\n", OutputFormat::Human);
    assert!(out.contains("Please consult a medical professional"));
    assert!(!out.contains("Suggested specialist"));
}

#[test]
fn test_chat_quit_stops_reading() {
    let (services, _file) = create_cli_test_services();
    let out = run_chat(
        &services,
        "\n\n:quit\nwhat should i do for fever\n",
        OutputFormat::Human,
    );
    assert!(!out.contains("Rest, drink plenty of fluids"));
}

#[test]
fn test_chat_history_and_clear() {
    let (services, _file) = create_cli_test_services();
    let out = run_chat(
        &services,
        "I have bukhar\n:history\n:clear\n:history\n",
        OutputFormat::Human,
    );

    assert!(out.contains("you [just now] I have bukhar"));
    assert!(out.contains("bot [just now] Rest, drink"));
    assert!(out.contains("(no messages yet)"));
}

#[test]
fn test_chat_reload_command() {
    let (services, _file) = create_cli_test_services();
    let out = run_chat(&services, ":reload\n", OutputFormat::Human);
    assert!(out.contains("Reloaded 5 entries"));
}

#[test]
fn test_chat_json_lines() {
    let (services, _file) = create_cli_test_services();
    let out = run_chat(
        &services,
        "I have bukhar\nI want to end my life\n:reload\n:history\n",
        OutputFormat::Json,
    );

    let lines: Vec<serde_json::Value> = out
        .lines()
        .map(|l| serde_json::from_str(l).expect("each line is JSON"))
        .collect();
    assert_eq!(lines.len(), 4);

    assert_eq!(lines[0]["meta"]["suggestedSpecialty"], "General Physician");
    assert_eq!(lines[1]["meta"]["matchedQuestion"], CRISIS_SENTINEL);
    assert_eq!(lines[1]["meta"]["score"], 1.0);
    assert_eq!(lines[2]["entries"], 5);

    let history = lines[3].as_array().unwrap();
    assert_eq!(history.len(), 4);
    assert_eq!(history[0]["role"], "user");
    assert_eq!(history[1]["role"], "bot");
}
