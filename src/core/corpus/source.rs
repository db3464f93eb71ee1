//! Corpus sources.
//!
//! The engine only asks a source for records; reading files, parsing
//! and error reporting live here. A failing source is absorbed by the
//! engine as an empty corpus.

use super::record::{parse_records, FaqRecord};
use crate::core::error::{MediBotError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Supplier of FAQ records for index builds
pub trait CorpusSource: Send + Sync {
    /// Read every record from the source
    fn load(&self) -> Result<Vec<FaqRecord>>;

    /// Human-readable description for logs
    fn describe(&self) -> String;
}

/// JSON file holding an array of FAQ records
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CorpusSource for JsonFileSource {
    fn load(&self) -> Result<Vec<FaqRecord>> {
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            MediBotError::CorpusLoad(format!("Failed to read {}: {e}", self.path.display()))
        })?;
        parse_records(&raw)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fixed in-memory records
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<FaqRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<FaqRecord>) -> Self {
        Self { records }
    }
}

impl CorpusSource for StaticSource {
    fn load(&self) -> Result<Vec<FaqRecord>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory ({} records)", self.records.len())
    }
}
