//! MediBot - FAQ matching for a health-consultation chat bot
//!
//! Answers free-text health questions (English, Hindi, Hinglish) from
//! a JSON FAQ corpus using token-set similarity, a synonym table and
//! a tiered fallback chain, with a self-harm safety override that
//! always wins.
//!
//! # Architecture
//!
//! - **core**: Domain logic (adapter-agnostic)
//!   - text, synonyms, scoring, safety
//!   - corpus (records, sources, index)
//!   - matcher (tier pipeline, reloadable engine)
//!   - chat (sessions, specialist suggestions)
//!   - config, error, types, xdg, services
//!
//! - **cli**: Command-line adapter (depends on core)
//!
//! # Example
//!
//! ```
//! use medibot::core::corpus::{FaqRecord, StaticSource};
//! use medibot::core::safety::SafetyFilter;
//! use medibot::core::synonyms::SynonymTable;
//! use medibot::MatchEngine;
//!
//! let engine = MatchEngine::new(
//!     Box::new(StaticSource::new(vec![FaqRecord::new(
//!         "What should I do for fever?",
//!         "Rest and drink fluids.",
//!     )])),
//!     SynonymTable::builtin(),
//!     SafetyFilter::builtin(),
//! );
//!
//! let result = engine.best_answer("I have bukhar").unwrap();
//! assert_eq!(result.answer, "Rest and drink fluids.");
//! ```

// Core domain logic (adapter-agnostic)
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{MediBotError, Result};
pub use core::matcher::MatchEngine;
pub use core::services::Services;
pub use core::types::*;
