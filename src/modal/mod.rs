//! The two auxiliary dialogs and the state that gates them.

pub mod glossary;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::data::ExpenseItem;
use crate::error::ReportError;
use crate::locale::{format_currency, Locale};

pub use glossary::FormulaDefinition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalKind {
    Formulas,
    Expenses,
}

impl ModalKind {
    /// Fragment id of the overlay in the rendered page.
    pub fn anchor(self) -> &'static str {
        match self {
            ModalKind::Formulas => "formulas",
            ModalKind::Expenses => "expenses",
        }
    }
}

impl fmt::Display for ModalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

impl FromStr for ModalKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "formulas" => Ok(ModalKind::Formulas),
            "expenses" => Ok(ModalKind::Expenses),
            _ => Err(ReportError::InvalidModal(s.to_string())),
        }
    }
}

/// At most one modal is open. Opening replaces, closing is idempotent.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ModalController {
    active: Option<ModalKind>,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, kind: ModalKind) {
        self.active = Some(kind);
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<ModalKind> {
        self.active
    }

    pub fn is_open(&self, kind: ModalKind) -> bool {
        self.active == Some(kind)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FormulaGlossary {
    pub title: &'static str,
    pub entries: &'static [FormulaDefinition],
}

impl FormulaGlossary {
    pub fn new(locale: Locale) -> Self {
        Self {
            title: locale.phrases().formulas_title,
            entries: glossary::definitions(locale),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseLine {
    pub label: String,
    pub amount: f64,
    pub display: String,
}

/// Itemized secondary expenses with a total reduced from the lines on every
/// build.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseDetail {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub total_label: &'static str,
    pub lines: Vec<ExpenseLine>,
    pub total: f64,
    pub total_display: String,
}

impl ExpenseDetail {
    pub fn build(items: &[ExpenseItem], locale: Locale) -> Self {
        let phrases = locale.phrases();
        let lines: Vec<ExpenseLine> = items
            .iter()
            .map(|item| ExpenseLine {
                label: item.label.get(locale).to_string(),
                amount: item.amount,
                display: format_currency(item.amount, locale),
            })
            .collect();
        let total: f64 = lines.iter().map(|l| l.amount).sum();

        Self {
            title: phrases.expenses_title,
            subtitle: phrases.expenses_subtitle,
            total_label: phrases.expenses_total,
            total_display: format_currency(total, locale),
            lines,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample;

    #[test]
    fn opening_replaces_the_active_modal() {
        let mut modals = ModalController::new();
        modals.open(ModalKind::Formulas);
        modals.open(ModalKind::Expenses);
        assert_eq!(modals.active(), Some(ModalKind::Expenses));
        assert!(!modals.is_open(ModalKind::Formulas));
    }

    #[test]
    fn closing_is_idempotent() {
        let mut modals = ModalController::new();
        modals.close();
        assert_eq!(modals.active(), None);
        modals.open(ModalKind::Formulas);
        modals.close();
        modals.close();
        assert_eq!(modals.active(), None);
    }

    #[test]
    fn glossary_lists_five_metrics_per_locale() {
        for locale in Locale::ALL {
            let glossary = FormulaGlossary::new(locale);
            assert_eq!(glossary.entries.len(), 5);
            assert!(glossary
                .entries
                .iter()
                .all(|e| !e.label.is_empty() && !e.formula.is_empty() && !e.description.is_empty()));
        }
        let labels: Vec<_> = FormulaGlossary::new(Locale::En)
            .entries
            .iter()
            .map(|e| e.label)
            .collect();
        assert_eq!(labels[0], "Net Cash Collected");
        assert_eq!(labels[3], "Marketing ROI");
    }

    #[test]
    fn expense_total_is_the_sum_of_lines() {
        let data = sample::december_2025();
        let first = ExpenseDetail::build(&data.secondary_expenses, Locale::En);
        let again = ExpenseDetail::build(&data.secondary_expenses, Locale::En);
        let sum: f64 = first.lines.iter().map(|l| l.amount).sum();
        assert!((first.total - sum).abs() < 1e-9);
        assert_eq!(first, again);
        assert_eq!(first.total_display, "SAR 6,350");
    }

    #[test]
    fn empty_expense_list_totals_zero() {
        let detail = ExpenseDetail::build(&[], Locale::Ar);
        assert!(detail.lines.is_empty());
        assert_eq!(detail.total_display, "٠ ريال");
    }

    #[test]
    fn modal_names_parse() {
        assert_eq!("Formulas".parse::<ModalKind>().unwrap(), ModalKind::Formulas);
        assert!("help".parse::<ModalKind>().is_err());
    }
}
