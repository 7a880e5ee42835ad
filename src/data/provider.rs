use std::fs;
use std::path::{Path, PathBuf};

use super::{sample, ReportData};
use crate::error::{ReportError, Result};

/// Source of the report dataset. Loaded once; the result is never mutated.
pub trait DataProvider {
    /// Short human-readable description for logs.
    fn describe(&self) -> String;

    fn load(&self) -> Result<ReportData>;
}

/// The dataset compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleData;

impl DataProvider for SampleData {
    fn describe(&self) -> String {
        "built-in sample dataset".to_string()
    }

    fn load(&self) -> Result<ReportData> {
        Ok(sample::december_2025())
    }
}

/// A dataset stored as TOML, in the shape written by `growth-report init`.
#[derive(Debug, Clone)]
pub struct TomlFile {
    path: PathBuf,
}

impl TomlFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataProvider for TomlFile {
    fn describe(&self) -> String {
        format!("data file {}", self.path.display())
    }

    fn load(&self) -> Result<ReportData> {
        if !self.path.exists() {
            return Err(ReportError::DataFileNotFound(self.path.clone()));
        }
        let content = fs::read_to_string(&self.path)?;
        toml::from_str(&content).map_err(|e| ReportError::ConfigParse {
            path: self.path.clone(),
            source: e,
        })
    }
}
