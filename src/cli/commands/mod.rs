//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod analyze;
pub mod ask;
pub mod chat;
pub mod completions;
pub mod concepts;
pub mod config;
pub mod info;
pub mod reload;

// Re-export argument types for use in mod.rs
pub use analyze::AnalyzeArgs;
pub use ask::AskArgs;
pub use chat::ChatArgs;
pub use completions::CompletionsArgs;
pub use concepts::ConceptsArgs;
pub use config::ConfigArgs;
pub use info::InfoArgs;
pub use reload::ReloadArgs;
