//! Self-harm detection.
//!
//! Checked on the raw lowercased query before any tokenization or
//! corpus lookup, so no FAQ entry can outscore a crisis message.
//! Matching is plain substring containment: "marna" also fires inside
//! longer transliterated words. False positives are accepted here.

use crate::core::types::{MatchResult, MatchTier};

/// Matched-question sentinel for crisis responses
pub const CRISIS_SENTINEL: &str = "self-harm emergency";

pub const CRISIS_RESPONSE: &str = "I'm really sorry that you're feeling this way. I can't help with this, but you deserve support right now.\n\n\
If you are in India, you can call the 24/7 suicide prevention helpline: 9152987821 (AASRA) or Aasra Helpline: +91 9820466726.\n\
If you are elsewhere, please contact your local emergency services or a crisis hotline immediately. Please reach out to someone you trust.";

const BUILTIN_PHRASES: &[&str] = &[
    "suicide",
    "kill myself",
    "want to die",
    "marna hai",
    "marna",
    "not want to live",
    "end my life",
    "i want to die",
    "take my life",
    "suicidal",
];

/// Case-insensitive substring detector for self-harm phrases
#[derive(Debug, Clone)]
pub struct SafetyFilter {
    phrases: Vec<String>,
}

impl SafetyFilter {
    /// Filter with the built-in phrase list
    pub fn builtin() -> Self {
        Self::with_phrases(BUILTIN_PHRASES.iter().map(|p| (*p).to_string()))
    }

    /// Built-in phrases plus extra configured ones
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let builtin = BUILTIN_PHRASES.iter().map(|p| (*p).to_string());
        Self::with_phrases(builtin.chain(extra.into_iter().map(Into::into)))
    }

    fn with_phrases(phrases: impl Iterator<Item = String>) -> Self {
        let mut lowered: Vec<String> = Vec::new();
        for phrase in phrases {
            let phrase = phrase.trim().to_lowercase();
            if !phrase.is_empty() && !lowered.contains(&phrase) {
                lowered.push(phrase);
            }
        }
        Self { phrases: lowered }
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// First configured phrase contained in the lowercased query
    pub fn detect(&self, query_lower: &str) -> Option<&str> {
        self.phrases
            .iter()
            .find(|p| query_lower.contains(p.as_str()))
            .map(String::as_str)
    }

    /// The fixed crisis-resource response
    pub fn crisis_response() -> MatchResult {
        MatchResult {
            answer: CRISIS_RESPONSE.to_string(),
            score: 1.0,
            matched_question: Some(CRISIS_SENTINEL.to_string()),
            tags: Vec::new(),
            tier: MatchTier::SafetyOverride,
        }
    }
}

impl Default for SafetyFilter {
    fn default() -> Self {
        Self::builtin()
    }
}
