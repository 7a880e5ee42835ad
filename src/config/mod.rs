mod settings;

pub use settings::{ReportSettings, Settings, DEFAULT_OUTPUT_DIR};

use crate::data::{DataProvider, SampleData, TomlFile};
use crate::error::{ReportError, Result};
use directories::{BaseDirs, ProjectDirs};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.toml";
pub const DATA_FILE: &str = "data.toml";

/// Per-user config directory: the platform config dir for `growth-report`,
/// or `~/.growth-report` when only a home directory is known.
pub fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("", "", "growth-report")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .or_else(|| home_dir().map(|home| home.join(".growth-report")))
        .ok_or_else(|| {
            ReportError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no home directory for the current user",
            ))
        })
}

fn home_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// Resolve a leading `~` against the user's home directory
pub fn expand_path(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some("") => "",
        Some(rest) if rest.starts_with('/') => &rest[1..],
        _ => return PathBuf::from(path),
    };
    match home_dir() {
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}

/// Load config.toml, falling back to defaults when it does not exist
pub fn load_settings(config_dir: &Path) -> Result<Settings> {
    let path = config_dir.join(CONFIG_FILE);
    if !path.exists() {
        log::debug!("no config at {}, using defaults", path.display());
        return Ok(Settings::default());
    }
    let content = fs::read_to_string(&path)?;
    toml::from_str(&content).map_err(|e| ReportError::ConfigParse { path, source: e })
}

/// Output directory: the CLI override if given, else the configured one
pub fn resolve_output_dir(settings: &Settings, cli_override: Option<&Path>) -> PathBuf {
    match cli_override {
        Some(dir) => dir.to_path_buf(),
        None => expand_path(&settings.report.output_dir),
    }
}

/// Pick the dataset source named by the settings
pub fn provider_for(settings: &Settings, config_dir: &Path) -> Box<dyn DataProvider> {
    match &settings.report.data_file {
        Some(file) => {
            let path = expand_path(file);
            let path = if path.is_absolute() {
                path
            } else {
                config_dir.join(path)
            };
            Box::new(TomlFile::new(path))
        }
        None => Box::new(SampleData),
    }
}

/// Template content for config.toml
pub const CONFIG_TEMPLATE: &str = r#"[report]
default_locale = "en"   # "en" or "ar"
theme = "dark"          # "light" or "dark"
output_dir = "~/.growth-report/output"

# Dataset to render, relative to this directory. Remove the line to use
# the built-in December 2025 sample.
data_file = "data.toml"
"#;
