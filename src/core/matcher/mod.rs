//! FAQ matching engine.
//!
//! [`MatchEngine`] owns the current [`CorpusIndex`](crate::core::corpus::CorpusIndex)
//! and answers queries by walking the retrieval tiers in order:
//!
//! ```text
//! query ─► empty input ─► safety override ─► best match (>= 0.18)
//!                                              │
//!                 none ◄── substring (0.11) ◄── synonym (0.12)
//! ```
//!
//! The first tier that produces a result wins.

mod engine;
mod query;
mod tiers;

pub use engine::MatchEngine;
pub use query::QueryContext;
pub use tiers::{
    EMPTY_INPUT_PROMPT, MATCH_THRESHOLD, SUBSTRING_FALLBACK_SCORE, SYNONYM_FALLBACK_SCORE,
};
