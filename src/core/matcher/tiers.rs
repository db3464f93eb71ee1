//! Retrieval tiers, evaluated in order until one produces a result.

use super::query::QueryContext;
use crate::core::corpus::{CorpusIndex, IndexedEntry};
use crate::core::safety::SafetyFilter;
use crate::core::scoring::{round_score, score_entry};
use crate::core::types::{MatchResult, MatchTier};

/// Minimum combined score for a best-match answer (inclusive)
pub const MATCH_THRESHOLD: f64 = 0.18;

/// Disclosed confidence for concept-level fallback matches
pub const SYNONYM_FALLBACK_SCORE: f64 = 0.12;

/// Disclosed confidence for raw substring fallback matches
pub const SUBSTRING_FALLBACK_SCORE: f64 = 0.11;

pub const EMPTY_INPUT_PROMPT: &str = "Please type your question.";

const BEST_MATCH_NO_ANSWER: &str = "Sorry, I couldn't find a full answer right now.";
const SYNONYM_NO_ANSWER: &str = "I might not be certain; please consult a professional.";
const SUBSTRING_NO_ANSWER: &str = "Maybe consult a professional.";

/// Everything a tier may look at
pub(crate) struct TierInput<'q, 'a> {
    pub query: &'q QueryContext<'a>,
    pub index: &'q CorpusIndex,
    pub safety: &'q SafetyFilter,
}

impl MatchTier {
    /// Tier evaluation order
    pub const PIPELINE: [MatchTier; 5] = [
        MatchTier::EmptyInput,
        MatchTier::SafetyOverride,
        MatchTier::BestMatch,
        MatchTier::SynonymFallback,
        MatchTier::SubstringFallback,
    ];

    /// Short label for logs and CLI output
    pub fn label(self) -> &'static str {
        match self {
            MatchTier::EmptyInput => "empty-input",
            MatchTier::SafetyOverride => "safety-override",
            MatchTier::BestMatch => "best-match",
            MatchTier::SynonymFallback => "synonym-fallback",
            MatchTier::SubstringFallback => "substring-fallback",
        }
    }

    pub(crate) fn evaluate(self, input: &TierInput<'_, '_>) -> Option<MatchResult> {
        match self {
            MatchTier::EmptyInput => empty_input(input),
            MatchTier::SafetyOverride => safety_override(input),
            MatchTier::BestMatch => best_match(input),
            MatchTier::SynonymFallback => synonym_fallback(input),
            MatchTier::SubstringFallback => substring_fallback(input),
        }
    }
}

fn empty_input(input: &TierInput<'_, '_>) -> Option<MatchResult> {
    if !input.query.is_blank() {
        return None;
    }
    Some(MatchResult {
        answer: EMPTY_INPUT_PROMPT.to_string(),
        score: 0.0,
        matched_question: None,
        tags: Vec::new(),
        tier: MatchTier::EmptyInput,
    })
}

fn safety_override(input: &TierInput<'_, '_>) -> Option<MatchResult> {
    input.safety.detect(input.query.lowered())?;
    tracing::warn!("Self-harm phrase detected, returning crisis resources");
    Some(SafetyFilter::crisis_response())
}

fn best_match(input: &TierInput<'_, '_>) -> Option<MatchResult> {
    let tokens = input.query.tokens();
    let lowered = input.query.lowered();

    let mut best: Option<&IndexedEntry> = None;
    let mut best_score = 0.0;
    for entry in input.index.entries() {
        let breakdown = score_entry(lowered, tokens, entry);
        // Strict comparison: ties keep the earlier entry
        if breakdown.total > best_score {
            best_score = breakdown.total;
            best = Some(entry);
        }
    }

    let entry = best?;
    if best_score < MATCH_THRESHOLD {
        tracing::debug!(best_score, "Best candidate below threshold");
        return None;
    }
    Some(from_entry(
        entry,
        round_score(best_score),
        BEST_MATCH_NO_ANSWER,
        MatchTier::BestMatch,
    ))
}

fn synonym_fallback(input: &TierInput<'_, '_>) -> Option<MatchResult> {
    let tokens = input.query.tokens();
    let synonyms = input.query.synonyms();

    for group in synonyms.groups() {
        if !synonyms.group_matches(group, tokens) {
            continue;
        }
        if let Some(entry) = input.index.first_with_token(&group.concept) {
            return Some(from_entry(
                entry,
                SYNONYM_FALLBACK_SCORE,
                SYNONYM_NO_ANSWER,
                MatchTier::SynonymFallback,
            ));
        }
    }
    None
}

fn substring_fallback(input: &TierInput<'_, '_>) -> Option<MatchResult> {
    let lowered = input.query.lowered();

    input
        .index
        .entries()
        .iter()
        .filter(|e| !e.question.is_empty())
        .find(|e| e.question_lower.contains(lowered) || lowered.contains(e.question_lower.as_str()))
        .map(|e| {
            from_entry(
                e,
                SUBSTRING_FALLBACK_SCORE,
                SUBSTRING_NO_ANSWER,
                MatchTier::SubstringFallback,
            )
        })
}

fn from_entry(entry: &IndexedEntry, score: f64, no_answer: &str, tier: MatchTier) -> MatchResult {
    let answer = if entry.answer.is_empty() {
        no_answer.to_string()
    } else {
        entry.answer.clone()
    };

    MatchResult {
        answer,
        score,
        matched_question: (!entry.question.is_empty()).then(|| entry.question.clone()),
        tags: entry.tags.clone(),
        tier,
    }
}
