//! Tests for corpus loading from JSON files
//!
//! Covers record alias resolution and the degrade-to-empty behavior
//! for unreadable or malformed sources.

use crate::common::{create_test_services, FaqFile};
use medibot::core::corpus::{CorpusSource, JsonFileSource};
use medibot::core::types::MatchTier;

#[test]
fn test_sample_file_loads_all_aliases() {
    let file = FaqFile::sample();
    let records = JsonFileSource::new(file.path()).load().unwrap();

    assert_eq!(records.len(), 5);
    assert_eq!(records[1].question, "How to get relief from headache?");
    assert_eq!(records[1].answer, "Rest in a quiet, dark room and stay hydrated.");
    assert_eq!(records[2].tags, vec!["Pulmonologist"]);
    assert!(records[2].answer.starts_with("Warm fluids"));
    assert_eq!(records[0].keywords, "temperature bukhar");
    assert_eq!(records[3].keywords, "heartburn reflux");
}

#[test]
fn test_keywords_are_searchable() {
    let file = FaqFile::sample();
    let services = create_test_services(file.path());

    let result = services.engine.best_answer("heartburn").unwrap();
    assert_eq!(result.matched_question.as_deref(), Some("What helps with acidity?"));
}

#[test]
fn test_missing_file_gives_empty_corpus() {
    let dir = tempfile::tempdir().unwrap();
    let services = create_test_services(&dir.path().join("nope.json"));

    assert_eq!(services.engine.entry_count(), 0);
    assert!(services.engine.best_answer("fever").is_none());
}

#[test]
fn test_invalid_json_gives_empty_corpus() {
    let file = FaqFile::with_contents("[{\"question\": ");
    let services = create_test_services(file.path());
    assert_eq!(services.engine.entry_count(), 0);
}

#[test]
fn test_non_array_gives_empty_corpus() {
    let file = FaqFile::with_contents(r#"{"question": "What is fever?", "answer": "Heat."}"#);
    let services = create_test_services(file.path());
    assert_eq!(services.engine.entry_count(), 0);
}

#[test]
fn test_non_object_records_skipped() {
    let file = FaqFile::with_contents(
        r#"[42, "loose string", null, {"q": "What is fever?", "a": "Heat."}]"#,
    );
    let services = create_test_services(file.path());
    assert_eq!(services.engine.entry_count(), 1);
}

#[test]
fn test_record_without_answer_uses_placeholder() {
    let file = FaqFile::with_contents(r#"[{"question": "What is dengue?"}]"#);
    let services = create_test_services(file.path());

    let result = services.engine.best_answer("what is dengue").unwrap();
    assert_eq!(result.tier, MatchTier::BestMatch);
    assert!(!result.answer.is_empty());
    assert_ne!(result.answer, "What is dengue?");
}

#[test]
fn test_source_description_names_file() {
    let file = FaqFile::sample();
    let source = JsonFileSource::new(file.path());
    assert!(source.describe().contains("health_faq.json"));
}
