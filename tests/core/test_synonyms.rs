//! Tests for configured synonym files
//!
//! Extra groups extend the built-in table; a bad file is a
//! configuration error rather than a silent fallback.

use crate::common::FaqFile;
use medibot::core::config::Config;
use medibot::core::services::Services;
use medibot::core::synonyms::SynonymTable;
use std::fs;

const CORPUS: &str = r#"[
  {"question": "How to manage diabetes?", "answer": "Monitor sugar and exercise.", "tags": ["Endocrinologist"]},
  {"question": "Headache", "answer": "Rest."}
]"#;

fn services_with_synonyms(file: &FaqFile, synonyms_json: &str, include_builtin: bool) -> Services {
    let synonyms = file.dir.path().join("synonyms.json");
    fs::write(&synonyms, synonyms_json).unwrap();

    let mut config = Config::default();
    config.corpus.faq_file = file.path().to_path_buf();
    config.synonyms.file = Some(synonyms);
    config.synonyms.include_builtin = include_builtin;
    Services::new(config).unwrap()
}

#[test]
fn test_extra_group_reaches_entry() {
    let file = FaqFile::with_contents(CORPUS);
    let services = services_with_synonyms(
        &file,
        r#"[{"concept": "diabetes", "forms": ["sugar ki bimari", "madhumeh"]}]"#,
        true,
    );

    let result = services.engine.best_answer("madhumeh").unwrap();
    assert_eq!(result.answer, "Monitor sugar and exercise.");

    let phrase = services.engine.best_answer("sugar ki bimari").unwrap();
    assert_eq!(phrase.answer, "Monitor sugar and exercise.");

    // Built-in groups still apply
    assert_eq!(services.engine.best_answer("migraine").unwrap().answer, "Rest.");
}

#[test]
fn test_extra_forms_merge_into_builtin_concept() {
    let file = FaqFile::with_contents(CORPUS);
    let services = services_with_synonyms(
        &file,
        r#"[{"concept": "headache", "forms": ["matha dukhna"]}]"#,
        true,
    );

    let table = services.engine.synonyms();
    assert_eq!(table.canonical("matha dukhna"), Some("headache"));
    assert_eq!(table.canonical("migraine"), Some("headache"));
    assert_eq!(table.len(), SynonymTable::builtin().len());
}

#[test]
fn test_builtin_can_be_disabled() {
    let file = FaqFile::with_contents(CORPUS);
    let services = services_with_synonyms(
        &file,
        r#"[{"concept": "diabetes", "forms": ["madhumeh"]}]"#,
        false,
    );

    assert_eq!(services.engine.synonyms().len(), 1);
    assert!(services.engine.synonyms().canonical("migraine").is_none());
}

#[test]
fn test_invalid_synonym_file_is_config_error() {
    let file = FaqFile::with_contents(CORPUS);
    let synonyms = file.dir.path().join("synonyms.json");
    fs::write(&synonyms, r#"{"concept": "not an array"}"#).unwrap();

    let mut config = Config::default();
    config.corpus.faq_file = file.path().to_path_buf();
    config.synonyms.file = Some(synonyms);

    let err = Services::new(config).err().unwrap();
    assert!(err.is_bad_request());
}

#[test]
fn test_multi_word_concept_rejected() {
    let file = FaqFile::with_contents(CORPUS);
    let synonyms = file.dir.path().join("synonyms.json");
    fs::write(&synonyms, r#"[{"concept": "high sugar", "forms": ["madhumeh"]}]"#).unwrap();

    assert!(SynonymTable::load_groups(&synonyms).is_err());
}
