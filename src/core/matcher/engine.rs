//! The matching engine and its reloadable index.

use super::query::QueryContext;
use super::tiers::TierInput;
use crate::core::config::Config;
use crate::core::corpus::{CorpusIndex, CorpusSource, JsonFileSource};
use crate::core::error::Result;
use crate::core::safety::SafetyFilter;
use crate::core::synonyms::SynonymTable;
use crate::core::text::{has_devanagari, normalize, tokenize};
use crate::core::types::{MatchResult, MatchTier, ReloadStats, TextAnalysis};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Instant;

/// FAQ matching engine.
///
/// Owns the corpus source, the synonym table, the safety filter and
/// the current index. Queries pin one index snapshot for their whole
/// pass; [`reload`](Self::reload) builds a fresh index outside the
/// lock and swaps it in, so readers see either the old index or the
/// new one in full.
pub struct MatchEngine {
    source: Box<dyn CorpusSource>,
    synonyms: Arc<SynonymTable>,
    safety: SafetyFilter,
    index: RwLock<Arc<CorpusIndex>>,
}

impl MatchEngine {
    /// Create an engine and build its initial index.
    ///
    /// A failing source yields an empty index, never an error.
    pub fn new(source: Box<dyn CorpusSource>, synonyms: SynonymTable, safety: SafetyFilter) -> Self {
        let synonyms = Arc::new(synonyms);
        let (index, _) = Self::build_index(source.as_ref(), &synonyms);

        Self {
            source,
            synonyms,
            safety,
            index: RwLock::new(Arc::new(index)),
        }
    }

    /// Create an engine from configuration.
    ///
    /// Fails only if a configured synonym file cannot be loaded.
    pub fn from_config(config: &Config) -> Result<Self> {
        let synonyms = SynonymTable::from_config(&config.synonyms)?;
        let safety = SafetyFilter::with_extra(config.safety.extra_phrases.iter().cloned());
        let source = JsonFileSource::new(config.corpus.faq_file.clone());

        Ok(Self::new(Box::new(source), synonyms, safety))
    }

    fn build_index(source: &dyn CorpusSource, synonyms: &SynonymTable) -> (CorpusIndex, u64) {
        let start = Instant::now();

        let records = match source.load() {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("Could not load FAQ corpus, continuing with empty corpus: {}", e);
                Vec::new()
            }
        };

        let index = CorpusIndex::build(records, synonyms, source.describe());
        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            entries = index.len(),
            duration_ms,
            source = %index.source(),
            "Loaded {} FAQ entries",
            index.len()
        );

        (index, duration_ms)
    }

    /// Re-read the corpus source and atomically replace the index
    pub fn reload(&self) -> ReloadStats {
        let (index, duration_ms) = Self::build_index(self.source.as_ref(), &self.synonyms);
        let stats = ReloadStats {
            entries: index.len(),
            duration_ms,
            source: index.source().to_string(),
        };

        let fresh = Arc::new(index);
        *self.index.write().unwrap_or_else(PoisonError::into_inner) = fresh;

        stats
    }

    /// Current index snapshot
    pub fn snapshot(&self) -> Arc<CorpusIndex> {
        let guard = self.index.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Number of entries in the current index
    pub fn entry_count(&self) -> usize {
        self.snapshot().len()
    }

    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    pub fn safety(&self) -> &SafetyFilter {
        &self.safety
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// Find the best answer for a free-text query.
    ///
    /// Returns `None` when no tier matches; the caller supplies its own
    /// generic reply in that case.
    pub fn best_answer(&self, query: &str) -> Option<MatchResult> {
        let index = self.snapshot();
        let ctx = QueryContext::new(query, &self.synonyms);
        let input = TierInput {
            query: &ctx,
            index: &index,
            safety: &self.safety,
        };

        for tier in MatchTier::PIPELINE {
            if let Some(result) = tier.evaluate(&input) {
                tracing::debug!(tier = tier.label(), score = result.score, "Query matched");
                return Some(result);
            }
        }

        tracing::debug!(entries = index.len(), "No tier matched query");
        None
    }

    /// Show how text is normalized, tokenized and expanded
    pub fn analyze(&self, text: &str) -> TextAnalysis {
        let tokens = tokenize(text);
        let expanded = self.synonyms.expand(&tokens);
        let concepts = expanded
            .iter()
            .filter(|t| !tokens.contains(t))
            .map(str::to_string)
            .collect();

        TextAnalysis {
            input: text.to_string(),
            normalized: normalize(text),
            tokens: tokens.iter().map(str::to_string).collect(),
            expanded: expanded.iter().map(str::to_string).collect(),
            concepts,
            has_devanagari: has_devanagari(text),
            safety_phrase: self
                .safety
                .detect(&text.trim().to_lowercase())
                .map(str::to_string),
        }
    }
}
