//! XDG Base Directory Support
//!
//! Resolves where MediBot reads its configuration and its default FAQ
//! corpus, and copies a legacy `./medibot.toml` into place.

use std::env;
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "medibot";

/// Corpus file name looked up in the data directory
pub const FAQ_FILE_NAME: &str = "health_faq.json";

/// XDG directory structure for MediBot
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl XdgDirs {
    /// Resolve directories.
    ///
    /// Priority order (highest to lowest):
    /// 1. MEDIBOT_CONFIG_DIR / MEDIBOT_DATA_DIR
    /// 2. XDG_CONFIG_HOME / XDG_DATA_HOME
    /// 3. ~/.config and ~/.local/share
    pub fn new() -> Self {
        Self {
            config_dir: resolve("MEDIBOT_CONFIG_DIR", "XDG_CONFIG_HOME", &[".config"]),
            data_dir: resolve("MEDIBOT_DATA_DIR", "XDG_DATA_HOME", &[".local", "share"]),
        }
    }

    /// Get config file path
    pub fn config_file(&self) -> PathBuf {
        if let Ok(file) = env::var("MEDIBOT_CONFIG_FILE") {
            return PathBuf::from(file);
        }

        self.config_dir.join("config.toml")
    }

    /// Default location of the FAQ corpus
    pub fn faq_file(&self) -> PathBuf {
        self.data_dir.join(FAQ_FILE_NAME)
    }

    /// Create the config and data directories if they don't exist
    pub fn ensure_dirs_exist(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.config_dir)?;
        fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }

    /// Log the resolved paths
    pub fn log_paths(&self) {
        tracing::info!("XDG directories resolved:");
        tracing::info!("  Config: {:?}", self.config_dir);
        tracing::info!("  Data: {:?}", self.data_dir);
        tracing::info!("  Config file: {:?}", self.config_file());
        tracing::info!("  Default FAQ file: {:?}", self.faq_file());
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve(app_var: &str, xdg_var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(dir) = env::var(app_var) {
        return PathBuf::from(dir);
    }

    if let Ok(xdg) = env::var(xdg_var) {
        return PathBuf::from(xdg).join(APP_DIR);
    }

    let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    for part in home_default {
        path.push(part);
    }
    path.join(APP_DIR)
}

/// Copy `./medibot.toml` to the XDG config file.
///
/// Never deletes or overwrites anything.
pub fn migrate_legacy_paths(xdg: &XdgDirs) -> std::io::Result<()> {
    let legacy_config = PathBuf::from("./medibot.toml");
    let new_config = xdg.config_file();

    if legacy_config.exists() && !new_config.exists() {
        if let Some(parent) = new_config.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&legacy_config, &new_config)?;
        tracing::info!("Migrated config: {:?} → {:?}", legacy_config, new_config);
        tracing::info!(
            "Legacy config file preserved at {:?} (safe to delete after verification)",
            legacy_config
        );
    }

    Ok(())
}
