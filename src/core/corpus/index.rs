//! Indexed corpus with precomputed token sets.

use super::record::FaqRecord;
use crate::core::synonyms::SynonymTable;
use crate::core::text::{tokenize, TokenSet};
use chrono::{DateTime, Utc};

/// An FAQ entry ready for scoring
#[derive(Debug, Clone)]
pub struct IndexedEntry {
    pub question: String,
    pub answer: String,
    pub tags: Vec<String>,

    /// Lowercased raw question for phrase containment checks
    pub question_lower: String,

    /// Normalized, synonym-expanded tokens of question + keywords
    pub tokens: TokenSet,
}

impl IndexedEntry {
    fn build(record: FaqRecord, synonyms: &SynonymTable) -> Self {
        let text = format!("{} {}", record.question, record.keywords);
        let tokens = synonyms.expand(&tokenize(&text));

        Self {
            question_lower: record.question.to_lowercase(),
            question: record.question,
            answer: record.answer,
            tags: record.tags,
            tokens,
        }
    }
}

/// Immutable, ordered collection of indexed entries
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    entries: Vec<IndexedEntry>,
    source: String,
    built_at: DateTime<Utc>,
}

impl CorpusIndex {
    /// Index records in corpus order
    pub fn build(records: Vec<FaqRecord>, synonyms: &SynonymTable, source: String) -> Self {
        let entries = records
            .into_iter()
            .map(|r| IndexedEntry::build(r, synonyms))
            .collect();

        Self {
            entries,
            source,
            built_at: Utc::now(),
        }
    }

    pub fn empty() -> Self {
        Self::build(Vec::new(), &SynonymTable::empty(), String::new())
    }

    pub fn entries(&self) -> &[IndexedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }

    /// First entry (corpus order) whose tokens contain `concept`
    pub fn first_with_token(&self, concept: &str) -> Option<&IndexedEntry> {
        self.entries.iter().find(|e| e.tokens.contains(concept))
    }
}
