//! Similarity scoring between a query and an indexed entry.
//!
//! The combined score is `0.6 * jaccard + 0.4 * overlap`, then:
//! - phrase containment on raw lowercase text: +0.18 when the entry's
//!   question contains the whole query, otherwise +0.12 when the query
//!   contains the question (questions longer than 3 chars only)
//! - +0.08 for each tag found in the query tokens or query text
//!
//! Every boost is capped at 1.0 as it is applied.

use crate::core::corpus::IndexedEntry;
use crate::core::text::TokenSet;

pub const JACCARD_WEIGHT: f64 = 0.6;
pub const OVERLAP_WEIGHT: f64 = 0.4;
pub const QUERY_IN_QUESTION_BOOST: f64 = 0.18;
pub const QUESTION_IN_QUERY_BOOST: f64 = 0.12;
pub const QUESTION_IN_QUERY_MIN_CHARS: usize = 3;
pub const TAG_BOOST: f64 = 0.08;
pub const MAX_SCORE: f64 = 1.0;

/// Which phrase containment boost applied, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhraseBoost {
    None,
    QueryInQuestion,
    QuestionInQuery,
}

/// Score components for one query/entry pair
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub jaccard: f64,
    pub overlap: f64,
    pub phrase: PhraseBoost,
    pub matched_tags: usize,
    pub total: f64,
}

/// |A ∩ B| / |A ∪ B|, zero when either side is empty
pub fn jaccard(a: &TokenSet, b: &TokenSet) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let union = a.union_count(b);
    if union == 0 {
        return 0.0;
    }
    a.intersection_count(b) as f64 / union as f64
}

/// Fraction of query tokens present in the candidate
pub fn overlap(query: &TokenSet, candidate: &TokenSet) -> f64 {
    if query.is_empty() {
        return 0.0;
    }
    query.intersection_count(candidate) as f64 / query.len() as f64
}

pub fn base_score(query: &TokenSet, candidate: &TokenSet) -> f64 {
    JACCARD_WEIGHT * jaccard(query, candidate) + OVERLAP_WEIGHT * overlap(query, candidate)
}

fn capped_add(score: f64, boost: f64) -> f64 {
    (score + boost).min(MAX_SCORE)
}

/// Score an entry against a query.
///
/// `query_lower` is the trimmed raw query lowercased; `query_tokens`
/// is its normalized, synonym-expanded token set.
pub fn score_entry(query_lower: &str, query_tokens: &TokenSet, entry: &IndexedEntry) -> ScoreBreakdown {
    let jaccard = jaccard(query_tokens, &entry.tokens);
    let overlap = overlap(query_tokens, &entry.tokens);
    let mut total = JACCARD_WEIGHT * jaccard + OVERLAP_WEIGHT * overlap;

    let phrase = if !entry.question_lower.is_empty() && entry.question_lower.contains(query_lower) {
        total = capped_add(total, QUERY_IN_QUESTION_BOOST);
        PhraseBoost::QueryInQuestion
    } else if query_lower.contains(entry.question_lower.as_str())
        && entry.question.chars().count() > QUESTION_IN_QUERY_MIN_CHARS
    {
        total = capped_add(total, QUESTION_IN_QUERY_BOOST);
        PhraseBoost::QuestionInQuery
    } else {
        PhraseBoost::None
    };

    let mut matched_tags = 0;
    for tag in &entry.tags {
        if tag.is_empty() {
            continue;
        }
        let tag_lower = tag.to_lowercase();
        if query_tokens.contains(&tag_lower) || query_lower.contains(tag_lower.as_str()) {
            total = capped_add(total, TAG_BOOST);
            matched_tags += 1;
        }
    }

    ScoreBreakdown {
        jaccard,
        overlap,
        phrase,
        matched_tags,
        total,
    }
}

/// Round a score to 3 decimal places
pub fn round_score(score: f64) -> f64 {
    (score * 1000.0).round() / 1000.0
}
