// Test helper functions

use medibot::core::config::Config;
use medibot::core::corpus::{FaqRecord, StaticSource};
use medibot::core::matcher::MatchEngine;
use medibot::core::safety::SafetyFilter;
use medibot::core::services::Services;
use medibot::core::synonyms::SynonymTable;
use medibot::core::types::MatchResult;
use std::path::Path;

/// Engine over in-memory records with the built-in tables
#[allow(dead_code)] // Used in integration tests
pub fn create_test_engine(records: Vec<FaqRecord>) -> MatchEngine {
    MatchEngine::new(
        Box::new(StaticSource::new(records)),
        SynonymTable::builtin(),
        SafetyFilter::builtin(),
    )
}

/// Services reading the corpus from `faq_file`
#[allow(dead_code)] // Used in integration tests
pub fn create_test_services(faq_file: &Path) -> Services {
    let mut config = Config::default();
    config.corpus.faq_file = faq_file.to_path_buf();
    Services::new(config).expect("Failed to create services")
}

/// Assert that a result's score lies in [0, 1]
#[allow(dead_code)] // Used in integration tests
pub fn assert_score_bounds(result: &MatchResult) {
    assert!(
        (0.0..=1.0).contains(&result.score),
        "Expected score in [0, 1], got {}",
        result.score
    );
}
