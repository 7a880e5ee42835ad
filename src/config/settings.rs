use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::theme::Theme;

pub const DEFAULT_OUTPUT_DIR: &str = "~/.growth-report/output";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub report: ReportSettings,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReportSettings {
    #[serde(default)]
    pub default_locale: Locale,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Dataset file, relative to the config directory unless absolute.
    #[serde(default)]
    pub data_file: Option<String>,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            default_locale: Locale::default(),
            theme: Theme::default(),
            output_dir: default_output_dir(),
            data_file: None,
        }
    }
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}
