//! Chart themes and their palettes, shared by the chart adapters and the
//! page styling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ReportError;

/// Palette of the chart cards. The hero card is always dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn palette(self) -> Palette {
        Palette::for_theme(self)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ReportError::InvalidTheme(s.to_string())),
        }
    }
}

/// Fill and stroke colors for the SVG charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub spend_bar: &'static str,
    pub revenue_bar: &'static str,
    pub branch_bar: &'static str,
    pub axis_text: &'static str,
    pub gauge_track: &'static str,
    pub gauge_fill: &'static str,
    pub slice_stroke: &'static str,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Palette {
                spend_bar: "#9CA3AF",
                revenue_bar: "#C084FC",
                branch_bar: "#A78BFA",
                axis_text: "#9CA3AF",
                gauge_track: "#F5F5F7",
                gauge_fill: "#34C759",
                slice_stroke: "#1D1D1F",
            },
            Theme::Light => Palette {
                spend_bar: "#E5E5EA",
                revenue_bar: "#4A2C5A",
                branch_bar: "#1D1D1F",
                axis_text: "#86868B",
                gauge_track: "#F5F5F7",
                gauge_fill: "#34C759",
                slice_stroke: "#FFFFFF",
            },
        }
    }
}
