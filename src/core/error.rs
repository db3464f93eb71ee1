//! Error types and error handling for the MediBot matching service.
//!
//! The matching path itself never fails: a query always ends in a
//! structured match or `None`. These errors surface only at adapter
//! boundaries (configuration, synonym files, chat input, corpus I/O
//! before it is absorbed by the engine).

use thiserror::Error;

/// Result type alias for MediBot operations
pub type Result<T> = std::result::Result<T, MediBotError>;

/// Main error type for the MediBot service
#[derive(Error, Debug)]
pub enum MediBotError {
    #[error("Corpus load failed: {0}")]
    CorpusLoad(String),

    #[error("Synonym table load failed: {0}")]
    SynonymLoad(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl MediBotError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, MediBotError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound)
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            MediBotError::InvalidQuery(_)
                | MediBotError::ConfigError(_)
                | MediBotError::SynonymLoad(_)
        )
    }
}
