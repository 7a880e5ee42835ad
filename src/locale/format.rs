use super::Locale;
use crate::data::TenantStatus;

/// Maximum fraction digits shown by [`format_number`]; trailing zeros are dropped.
pub const MAX_FRACTION_DIGITS: usize = 3;

const ARABIC_THOUSANDS_SEPARATOR: char = '\u{066C}';
const ARABIC_DECIMAL_SEPARATOR: char = '\u{066B}';

/// Currency unit token for a locale.
pub fn currency_unit(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "SAR",
        Locale::Ar => "ريال",
    }
}

/// Format an amount with the locale's grouping convention and currency unit.
///
/// English places the unit first (`SAR 1,234.5`). Arabic writes the number in
/// Arabic-Indic digits followed by the unit word; right-to-left layout makes
/// the unit read first.
pub fn format_currency(amount: f64, locale: Locale) -> String {
    let number = format_number(amount, locale);
    match locale {
        Locale::En => format!("{} {}", currency_unit(locale), number),
        Locale::Ar => format!("{} {}", number, currency_unit(locale)),
    }
}

/// Format a number with up to [`MAX_FRACTION_DIGITS`] fraction digits.
pub fn format_number(value: f64, locale: Locale) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rendered = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    localize_digits(&assemble(value, &rendered, true), locale)
}

/// Format a number with exactly `decimals` fraction digits.
pub fn format_fixed(value: f64, decimals: usize, locale: Locale) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rendered = format!("{:.*}", decimals, value.abs());
    localize_digits(&assemble(value, &rendered, false), locale)
}

/// Group the whole part of an already-rounded absolute value and restore the sign.
fn assemble(value: f64, rendered: &str, trim_fraction: bool) -> String {
    let (whole, frac) = rendered.split_once('.').unwrap_or((rendered, ""));
    let frac = if trim_fraction {
        frac.trim_end_matches('0')
    } else {
        frac
    };

    let mut out = String::with_capacity(rendered.len() + whole.len() / 3 + 1);
    if value < 0.0 && has_nonzero_digit(rendered) {
        out.push('-');
    }
    out.push_str(&group_digits(whole));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Fixed-precision amount followed by the unit in both locales (`1.40 SAR`).
pub fn format_unit_amount(value: f64, decimals: usize, locale: Locale) -> String {
    format!(
        "{} {}",
        format_fixed(value, decimals, locale),
        currency_unit(locale)
    )
}

/// Integer percentage with a `%` suffix. Locale-independent.
pub fn format_percentage(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value}%");
    }
    format!("{}%", value.round() as i64)
}

/// Display label for a tenant status. Unrecognized values pass through.
pub fn translate_status(status: &TenantStatus, locale: Locale) -> String {
    match (status, locale) {
        (TenantStatus::Other(raw), _) => raw.clone(),
        (known, Locale::En) => known.as_str().to_string(),
        (TenantStatus::Confirmed, Locale::Ar) => "مؤكد".to_string(),
        (TenantStatus::Pending, Locale::Ar) => "قيد الانتظار".to_string(),
        (TenantStatus::Canceled, Locale::Ar) => "ملغي".to_string(),
    }
}

/// Convert ASCII digits and separators to the locale's numbering system.
pub fn localize_digits(ascii: &str, locale: Locale) -> String {
    match locale {
        Locale::En => ascii.to_string(),
        Locale::Ar => ascii
            .chars()
            .map(|ch| match ch {
                '0'..='9' => {
                    char::from_u32(0x0660 + (ch as u32 - '0' as u32)).unwrap_or(ch)
                }
                ',' => ARABIC_THOUSANDS_SEPARATOR,
                '.' => ARABIC_DECIMAL_SEPARATOR,
                other => other,
            })
            .collect(),
    }
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

fn has_nonzero_digit(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit() && c != '0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_currency_groups_with_commas() {
        let s = format_currency(1234.5, Locale::En);
        assert_eq!(s, "SAR 1,234.5");
        assert!(s.contains("1,234.5"));
    }

    #[test]
    fn arabic_currency_uses_arabic_indic_digits() {
        assert_eq!(format_currency(1234.5, Locale::Ar), "١٬٢٣٤٫٥ ريال");
        assert_eq!(format_currency(45003.15, Locale::Ar), "٤٥٬٠٠٣٫١٥ ريال");
    }

    #[test]
    fn formatting_is_deterministic() {
        for locale in Locale::ALL {
            assert_eq!(
                format_currency(194971.0, locale),
                format_currency(194971.0, locale)
            );
        }
    }

    #[test]
    fn whole_numbers_drop_the_fraction() {
        assert_eq!(format_number(194971.0, Locale::En), "194,971");
        assert_eq!(format_number(999.0, Locale::En), "999");
        assert_eq!(format_number(0.0, Locale::En), "0");
        assert_eq!(format_number(1_000_000.0, Locale::En), "1,000,000");
    }

    #[test]
    fn fraction_is_capped_at_three_digits() {
        assert_eq!(format_number(1.23456, Locale::En), "1.235");
        assert_eq!(format_number(20957.50, Locale::En), "20,957.5");
    }

    #[test]
    fn negative_values_keep_their_sign() {
        assert_eq!(format_number(-1234.0, Locale::En), "-1,234");
        assert_eq!(format_number(-0.0001, Locale::En), "0");
    }

    #[test]
    fn non_finite_values_do_not_panic() {
        assert_eq!(format_number(f64::NAN, Locale::Ar), "NaN");
        assert_eq!(format_percentage(f64::INFINITY), "inf%");
    }

    #[test]
    fn fixed_keeps_trailing_zeros() {
        assert_eq!(format_fixed(1.4, 2, Locale::En), "1.40");
        assert_eq!(format_fixed(1.4, 2, Locale::Ar), "١٫٤٠");
        assert_eq!(format_unit_amount(1.0, 0, Locale::En), "1 SAR");
    }

    #[test]
    fn percentage_rounds_to_integer() {
        assert_eq!(format_percentage(140.0), "140%");
        assert_eq!(format_percentage(139.7), "140%");
    }

    #[test]
    fn status_translation_is_total() {
        let statuses = [
            TenantStatus::Confirmed,
            TenantStatus::Pending,
            TenantStatus::Canceled,
        ];
        for locale in Locale::ALL {
            for status in &statuses {
                assert!(!translate_status(status, locale).is_empty());
            }
            let unknown = TenantStatus::Other("On Hold".to_string());
            assert_eq!(translate_status(&unknown, locale), "On Hold");
        }
        assert_eq!(translate_status(&TenantStatus::Pending, Locale::Ar), "قيد الانتظار");
        assert_eq!(translate_status(&TenantStatus::Canceled, Locale::En), "Canceled");
    }
}
