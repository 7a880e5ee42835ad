use super::{BarOrientation, BranchPoint, ChartPoint};
use crate::data::{BranchPerformance, Financials, SpendItem};
use crate::locale::{format_currency, Locale};
use crate::theme::{Palette, Theme};

/// Color given to the darkest allocation slice on a dark background.
pub const HIGH_CONTRAST_SUBSTITUTE: &str = "#FFFFFF";

/// Media spend against the revenue it produced. Spend always comes first.
pub fn spend_efficiency(fin: &Financials, locale: Locale, palette: &Palette) -> Vec<ChartPoint> {
    let phrases = locale.phrases();
    vec![
        ChartPoint {
            label: phrases.spend_bar_label.to_string(),
            value: fin.ad_spend,
            color: palette.spend_bar.to_string(),
            display: format_currency(fin.ad_spend, locale),
        },
        ChartPoint {
            label: phrases.revenue_bar_label.to_string(),
            value: fin.attributed_revenue,
            color: palette.revenue_bar.to_string(),
            display: format_currency(fin.attributed_revenue, locale),
        },
    ]
}

/// Branch revenue in the order the dataset declares it.
pub fn branch_performance(branches: &[BranchPerformance], locale: Locale) -> Vec<BranchPoint> {
    branches
        .iter()
        .map(|b| BranchPoint {
            id: b.id.clone(),
            label: b.label.get(locale).to_string(),
            value: b.revenue,
            tenant_count: b.tenant_count,
            display: format_currency(b.revenue, locale),
        })
        .collect()
}

/// Cost-allocation slices in dataset order.
///
/// On the dark theme the darkest slice would vanish into the background, so
/// its color is replaced by [`HIGH_CONTRAST_SUBSTITUTE`].
pub fn allocation(items: &[SpendItem], locale: Locale, theme: Theme) -> Vec<ChartPoint> {
    let darkest = match theme {
        Theme::Dark => darkest_index(items),
        Theme::Light => None,
    };

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| ChartPoint {
            label: item.label.get(locale).to_string(),
            value: item.amount,
            color: if Some(idx) == darkest {
                HIGH_CONTRAST_SUBSTITUTE.to_string()
            } else {
                item.color.clone()
            },
            display: format_currency(item.amount, locale),
        })
        .collect()
}

pub fn bar_orientation(locale: Locale) -> BarOrientation {
    if locale.is_rtl() {
        BarOrientation::End
    } else {
        BarOrientation::Start
    }
}

fn darkest_index(items: &[SpendItem]) -> Option<usize> {
    items
        .iter()
        .enumerate()
        .filter_map(|(idx, item)| relative_luminance(&item.color).map(|l| (idx, l)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(idx, _)| idx)
}

/// WCAG relative luminance of a `#RGB` or `#RRGGBB` color.
pub fn relative_luminance(color: &str) -> Option<f64> {
    let (r, g, b) = parse_hex_color(color)?;
    let channel = |c: u8| {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    Some(0.2126 * channel(r) + 0.7152 * channel(g) + 0.0722 * channel(b))
}

fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.trim().strip_prefix('#')?;
    match hex.len() {
        6 => Some((
            u8::from_str_radix(&hex[0..2], 16).ok()?,
            u8::from_str_radix(&hex[2..4], 16).ok()?,
            u8::from_str_radix(&hex[4..6], 16).ok()?,
        )),
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
            Some((digit(0)?, digit(1)?, digit(2)?))
        }
        _ => None,
    }
}
