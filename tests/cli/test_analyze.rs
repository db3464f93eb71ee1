//! Tests for analyze-text and list-concepts CLI commands

use crate::cli::test_helpers::create_cli_test_services;
use medibot::cli::commands::analyze::{self, AnalyzeArgs};
use medibot::cli::commands::concepts::{self, ConceptsArgs};
use medibot::cli::OutputFormat;

#[tokio::test]
async fn test_analyze_text_both_formats() {
    let (services, _file) = create_cli_test_services();
    for format in [OutputFormat::Human, OutputFormat::Json] {
        let args = AnalyzeArgs {
            text: "Mujhe sir dard aur बुखार है!".to_string(),
        };
        let result = analyze::execute(args, &services, format).await;
        assert!(result.is_ok(), "Analyze should succeed: {:?}", result.err());
    }
}

#[tokio::test]
async fn test_analyze_flags_safety_phrase() {
    let (services, _file) = create_cli_test_services();
    let analysis = services.engine.analyze("I don't want to die alone");
    assert_eq!(analysis.safety_phrase.as_deref(), Some("want to die"));

    let args = AnalyzeArgs {
        text: "I don't want to die alone".to_string(),
    };
    assert!(analyze::execute(args, &services, OutputFormat::Human)
        .await
        .is_ok());
}

#[tokio::test]
async fn test_list_all_concepts() {
    let (services, _file) = create_cli_test_services();
    let args = ConceptsArgs { concept: None };
    assert!(concepts::execute(args, &services, OutputFormat::Human)
        .await
        .is_ok());
}

#[tokio::test]
async fn test_list_concept_by_surface_form() {
    let (services, _file) = create_cli_test_services();
    for name in ["fever", "Bukhar", "sir dard"] {
        let args = ConceptsArgs {
            concept: Some(name.to_string()),
        };
        let result = concepts::execute(args, &services, OutputFormat::Json).await;
        assert!(result.is_ok(), "Lookup of '{name}' should succeed");
    }
}

#[tokio::test]
async fn test_list_unknown_concept_fails() {
    let (services, _file) = create_cli_test_services();
    let args = ConceptsArgs {
        concept: Some("quantum".to_string()),
    };
    let err = concepts::execute(args, &services, OutputFormat::Human)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("not found"));
}
