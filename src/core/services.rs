//! Unified service container for MediBot
//!
//! Provides shared access to the match engine and configuration.

use crate::core::chat::ChatSession;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::matcher::MatchEngine;
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// FAQ match engine with its reloadable index
    pub engine: Arc<MatchEngine>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    ///
    /// Loads the corpus once; fails only if the synonym file is unusable.
    pub fn new(config: Config) -> Result<Self> {
        let engine = MatchEngine::from_config(&config)?;
        Ok(Self::with_engine(engine, config))
    }

    /// Create services around an already-built engine
    pub fn with_engine(engine: MatchEngine, config: Config) -> Self {
        Self {
            engine: Arc::new(engine),
            config: Arc::new(config),
        }
    }

    /// Start a new chat session using the configured chat settings
    pub fn new_session(&self) -> ChatSession {
        ChatSession::new(&self.config.chat)
    }
}
