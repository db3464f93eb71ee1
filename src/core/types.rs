//! Core data types for the MediBot matching service.
//!
//! This module defines the records handed across the engine
//! boundary: match results, reload statistics, text analysis and
//! chat replies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Retrieval tier that produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// Blank input, answered with a fixed prompt
    EmptyInput,
    /// Self-harm phrase detected, crisis resources returned
    SafetyOverride,
    /// Weighted similarity cleared the threshold
    BestMatch,
    /// Matched through a canonical concept
    SynonymFallback,
    /// Matched by raw substring containment
    SubstringFallback,
}

/// Result of matching one query against the corpus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Response text for the user
    pub answer: String,

    /// Confidence in [0, 1]
    pub score: f64,

    /// Question of the matched entry (or a sentinel)
    pub matched_question: Option<String>,

    /// Tags of the matched entry
    pub tags: Vec<String>,

    /// Tier that produced this result
    pub tier: MatchTier,
}

/// Statistics from a corpus reload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReloadStats {
    /// Number of entries in the new index
    pub entries: usize,

    /// Load + index duration in milliseconds
    pub duration_ms: u64,

    /// Description of the corpus source
    pub source: String,
}

/// Breakdown of how a piece of text is analyzed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextAnalysis {
    pub input: String,
    pub normalized: String,
    pub tokens: Vec<String>,

    /// Tokens after synonym expansion
    pub expanded: Vec<String>,

    /// Canonical concepts added by expansion
    pub concepts: Vec<String>,

    pub has_devanagari: bool,

    /// Self-harm phrase that would trigger the safety override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_phrase: Option<String>,
}

/// Speaker of a chat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Bot,
}

/// One message in a chat history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub message: String,
    pub at: DateTime<Utc>,
}

/// Match metadata attached to a chat reply
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_question: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// First tag, offered as a specialist category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_specialty: Option<String>,

    /// Doctor-search link for the suggested specialty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
}

/// Reply envelope produced by a chat session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
    pub meta: ReplyMeta,
    pub history: Vec<ChatTurn>,
}
