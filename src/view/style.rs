//! Theme and direction dependent styling, kept out of the section templates.

use serde::Serialize;

use crate::locale::{Direction, Locale};

pub use crate::theme::{Palette, Theme};

/// Pill colors for tenant status: affirmative for Confirmed, neutral otherwise.
#[derive(Debug, Clone, Serialize)]
pub struct PillColors {
    pub background: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct StyleConfig {
    pub theme: Theme,
    pub dir: &'static str,
    /// Logical start/end resolved to physical sides for the direction.
    pub align_start: &'static str,
    pub align_end: &'static str,
    /// CSS class applied to chart cards.
    pub chart_card: &'static str,
    pub palette: Palette,
    pub pill_affirmative: PillColors,
    pub pill_neutral: PillColors,
}

impl StyleConfig {
    pub fn new(theme: Theme, locale: Locale) -> Self {
        let direction = locale.direction();
        let (align_start, align_end) = match direction {
            Direction::Ltr => ("left", "right"),
            Direction::Rtl => ("right", "left"),
        };

        Self {
            theme,
            dir: direction.as_str(),
            align_start,
            align_end,
            chart_card: match theme {
                Theme::Dark => "card card-dark",
                Theme::Light => "card",
            },
            palette: Palette::for_theme(theme),
            pill_affirmative: PillColors {
                background: "#DCFCE7",
                text: "#15803D",
            },
            pill_neutral: PillColors {
                background: "#F3F4F6",
                text: "#6B7280",
            },
        }
    }
}
