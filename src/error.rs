use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Data file not found: {0}")]
    DataFileNotFound(PathBuf),

    #[error("Failed to parse {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Failed to serialize page model: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Failed to render report: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Unknown locale '{0}'. Use 'en' or 'ar'.")]
    InvalidLocale(String),

    #[error("Unknown theme '{0}'. Use 'light' or 'dark'.")]
    InvalidTheme(String),

    #[error("Unknown modal '{0}'. Use 'formulas' or 'expenses'.")]
    InvalidModal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config directory already exists at {0}")]
    AlreadyInitialized(PathBuf),
}

pub type Result<T> = std::result::Result<T, ReportError>;
