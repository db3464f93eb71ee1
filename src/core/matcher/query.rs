//! Per-query state shared by the retrieval tiers.

use crate::core::synonyms::SynonymTable;
use crate::core::text::{tokenize, TokenSet};
use once_cell::unsync::OnceCell;

/// A query prepared for tier evaluation.
///
/// Tokens are computed on first use, so tiers that run before
/// tokenization (empty input, safety) never pay for it.
#[derive(Debug)]
pub struct QueryContext<'a> {
    trimmed: &'a str,
    lowered: String,
    synonyms: &'a SynonymTable,
    tokens: OnceCell<TokenSet>,
}

impl<'a> QueryContext<'a> {
    pub fn new(query: &'a str, synonyms: &'a SynonymTable) -> Self {
        let trimmed = query.trim();
        Self {
            trimmed,
            lowered: trimmed.to_lowercase(),
            synonyms,
            tokens: OnceCell::new(),
        }
    }

    /// Query with surrounding whitespace removed
    pub fn trimmed(&self) -> &str {
        self.trimmed
    }

    /// Trimmed raw query, lowercased (no punctuation stripping)
    pub fn lowered(&self) -> &str {
        &self.lowered
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed.is_empty()
    }

    /// Normalized, synonym-expanded query tokens
    pub fn tokens(&self) -> &TokenSet {
        self.tokens
            .get_or_init(|| self.synonyms.expand(&tokenize(self.trimmed)))
    }

    pub fn synonyms(&self) -> &SynonymTable {
        self.synonyms
    }
}
