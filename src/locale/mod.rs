//! Locale profile shared by every rendered surface.
//!
//! A [`Locale`] decides text direction, the numbering convention used by
//! [`format`], which branch of a [`LocalizedText`](crate::data::LocalizedText)
//! is shown, and the status vocabulary. It is scoped to a whole page; there is
//! no per-component override.

pub mod format;
pub mod strings;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ReportError;

pub use format::{
    format_currency, format_fixed, format_number, format_percentage, translate_status,
};
pub use strings::{fill_segments, Phrases, TextSegment};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Locale::En => Direction::Ltr,
            Locale::Ar => Direction::Rtl,
        }
    }

    pub fn is_rtl(self) -> bool {
        self.direction() == Direction::Rtl
    }

    /// The other supported locale.
    pub fn toggled(self) -> Locale {
        match self {
            Locale::En => Locale::Ar,
            Locale::Ar => Locale::En,
        }
    }

    /// Label for the language toggle. Always names the language you would
    /// switch to, written in that language.
    pub fn toggle_label(self) -> &'static str {
        match self.toggled() {
            Locale::En => "English",
            Locale::Ar => "العربية",
        }
    }

    pub fn phrases(self) -> &'static Phrases {
        match self {
            Locale::En => &strings::EN,
            Locale::Ar => &strings::AR,
        }
    }

    /// File name of this locale's page, e.g. `report.ar.html`.
    pub fn page_file_name(self, stem: &str) -> String {
        format!("{}.{}.html", stem, self.code())
    }
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ar" | "arabic" => Ok(Locale::Ar),
            _ => Err(ReportError::InvalidLocale(s.to_string())),
        }
    }
}
