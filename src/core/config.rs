//! Configuration management for the MediBot matching service.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{MediBotError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub synonyms: SynonymConfig,
    #[serde(default)]
    pub safety: SafetyConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

/// Corpus source configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    /// JSON file holding the FAQ records
    #[serde(default = "default_faq_file")]
    pub faq_file: PathBuf,
}

/// Synonym table configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SynonymConfig {
    /// Optional JSON file with extra synonym groups
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Start from the built-in groups
    #[serde(default = "default_include_builtin")]
    pub include_builtin: bool,
}

/// Safety filter configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SafetyConfig {
    /// Phrases added to the built-in self-harm list
    #[serde(default)]
    pub extra_phrases: Vec<String>,
}

/// Chat session configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatConfig {
    /// Turns kept in a session's history
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Reply used when no tier matches
    #[serde(default = "default_fallback_reply")]
    pub fallback_reply: String,

    /// Doctor-search route used for specialty redirects
    #[serde(default = "default_specialty_route")]
    pub specialty_route: String,
}

// Default value functions
fn default_faq_file() -> PathBuf {
    PathBuf::from("./health_faq.json")
}

fn default_include_builtin() -> bool {
    true
}

fn default_history_limit() -> usize {
    20
}

fn default_fallback_reply() -> String {
    "Sorry, I am not fully sure about that. Please consult a medical professional for accurate information.".to_string()
}

fn default_specialty_route() -> String {
    "/dm".to_string()
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            faq_file: default_faq_file(),
        }
    }
}

impl Default for SynonymConfig {
    fn default() -> Self {
        Self {
            file: None,
            include_builtin: default_include_builtin(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            fallback_reply: default_fallback_reply(),
            specialty_route: default_specialty_route(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| MediBotError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// This method uses XDG Base Directory specification for file locations.
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. MEDIBOT_CONFIG env var
    /// 2. XDG config file (~/.config/medibot/config.toml)
    /// 3. Legacy ./medibot.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("MEDIBOT_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("medibot.toml").exists() {
                Self::from_file("medibot.toml")?
            } else {
                Self::default()
            }
        };

        // Prefer the XDG data directory when the corpus path was left at its default
        if config.corpus.faq_file == default_faq_file() && !default_faq_file().exists() {
            config.corpus.faq_file = xdg.faq_file();
        }

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(faq_file) = env::var("MEDIBOT_FAQ_FILE") {
            self.corpus.faq_file = PathBuf::from(faq_file);
        }

        if let Ok(file) = env::var("MEDIBOT_SYNONYMS_FILE") {
            self.synonyms.file = if file.is_empty() {
                None
            } else {
                Some(PathBuf::from(file))
            };
        }
        if let Ok(builtin) = env::var("MEDIBOT_SYNONYMS_BUILTIN") {
            if let Ok(b) = builtin.parse() {
                self.synonyms.include_builtin = b;
            }
        }

        if let Ok(limit) = env::var("MEDIBOT_HISTORY_LIMIT") {
            if let Ok(l) = limit.parse() {
                self.chat.history_limit = l;
            }
        }
        if let Ok(route) = env::var("MEDIBOT_SPECIALTY_ROUTE") {
            self.chat.specialty_route = route;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.chat.history_limit == 0 {
            return Err(MediBotError::ConfigError(
                "History limit must be non-zero".to_string(),
            ));
        }

        if self.chat.fallback_reply.trim().is_empty() {
            return Err(MediBotError::ConfigError(
                "Fallback reply cannot be empty".to_string(),
            ));
        }

        if self.chat.specialty_route.trim().is_empty() {
            return Err(MediBotError::ConfigError(
                "Specialty route cannot be empty".to_string(),
            ));
        }

        if self.safety.extra_phrases.iter().any(|p| p.trim().is_empty()) {
            return Err(MediBotError::ConfigError(
                "Safety phrases cannot be blank".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  FAQ file: {:?}", self.corpus.faq_file);
        tracing::info!("  Synonym file: {:?}", self.synonyms.file);
        tracing::info!("  Built-in synonyms: {}", self.synonyms.include_builtin);
        tracing::info!(
            "  Extra safety phrases: {}",
            self.safety.extra_phrases.len()
        );
        tracing::info!("  History limit: {} turns", self.chat.history_limit);
        tracing::info!("  Specialty route: {}", self.chat.specialty_route);
    }
}
