//! Core domain logic (adapter-agnostic)
//!
//! Everything the CLI needs to answer health questions lives here;
//! adapters only parse input and render output.
//!
//! # Architecture
//!
//! - **text**: Normalization and tokenization
//! - **synonyms**: Concept groups and query expansion
//! - **scoring**: Jaccard/overlap similarity and boosts
//! - **safety**: Self-harm phrase detection
//! - **corpus**: FAQ records, sources and the search index
//! - **matcher**: Tiered retrieval over a reloadable index
//! - **chat**: Chat sessions with bounded history
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: XDG directory handling
//! - **services**: Unified service container

pub mod chat;
pub mod config;
pub mod corpus;
pub mod error;
pub mod matcher;
pub mod safety;
pub mod scoring;
pub mod services;
pub mod synonyms;
pub mod text;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use chat::ChatSession;
pub use config::Config;
pub use error::{MediBotError, Result};
pub use matcher::MatchEngine;
pub use services::Services;
