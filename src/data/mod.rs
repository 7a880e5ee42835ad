mod provider;
pub mod sample;
mod validate;

pub use provider::{DataProvider, SampleData, TomlFile};
pub use validate::{validate, Finding};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::locale::Locale;

/// A string authored once per supported locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    pub ar: String,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }

    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Ar => &self.ar,
        }
    }
}

/// Complete, immutable dataset behind one report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportData {
    pub period: LocalizedText,
    pub title: ReportTitle,
    pub financials: Financials,
    #[serde(default)]
    pub spend_breakdown: Vec<SpendItem>,
    #[serde(default)]
    pub branch_performance: Vec<BranchPerformance>,
    #[serde(default)]
    pub tenants: Vec<Tenant>,
    #[serde(default)]
    pub secondary_expenses: Vec<ExpenseItem>,
    pub annotations: Annotations,
}

/// Page title split into a lead and a muted accent word, plus the month name
/// used in running text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportTitle {
    pub lead: LocalizedText,
    pub accent: LocalizedText,
    pub month: LocalizedText,
}

/// Authored notes shown verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Annotations {
    #[serde(default)]
    pub analyst_note: Option<LocalizedText>,
    #[serde(default)]
    pub reconciliation_note: Option<LocalizedText>,
}

/// Precomputed headline figures. `roi` is authoritative as stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Financials {
    pub net_cash_collected: f64,
    pub recognized_revenue: f64,
    pub lifetime_value: f64,
    #[serde(default)]
    pub ltv_attributed_to_ads: f64,
    pub attributed_revenue: f64,
    pub marketing_spend: f64,
    pub ad_spend: f64,
    pub roi: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpendItem {
    pub id: String,
    pub label: LocalizedText,
    pub amount: f64,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchPerformance {
    pub id: String,
    pub label: LocalizedText,
    pub revenue: f64,
    pub tenant_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tenant {
    pub name: String,
    pub branch: String,
    pub unit: String,
    pub acquisition_source: String,
    pub lease_duration: String,
    pub monthly_rent: f64,
    pub status: TenantStatus,
    pub cash_collected: f64,
    pub attributed_revenue: f64,
}

/// Secondary (non-media) marketing expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseItem {
    pub label: LocalizedText,
    pub amount: f64,
}

/// Lease status. Values outside the known vocabulary are kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TenantStatus {
    Confirmed,
    Pending,
    Canceled,
    Other(String),
}

impl TenantStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TenantStatus::Confirmed => "Confirmed",
            TenantStatus::Pending => "Pending",
            TenantStatus::Canceled => "Canceled",
            TenantStatus::Other(raw) => raw,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, TenantStatus::Confirmed)
    }
}

impl From<String> for TenantStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Confirmed" => TenantStatus::Confirmed,
            "Pending" => TenantStatus::Pending,
            "Canceled" => TenantStatus::Canceled,
            _ => TenantStatus::Other(raw),
        }
    }
}

impl From<&str> for TenantStatus {
    fn from(raw: &str) -> Self {
        TenantStatus::from(raw.to_string())
    }
}

impl From<TenantStatus> for String {
    fn from(status: TenantStatus) -> Self {
        match status {
            TenantStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TenantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_round_trips_through_strings() {
        let status = TenantStatus::from("Awaiting Keys");
        assert_eq!(status, TenantStatus::Other("Awaiting Keys".to_string()));
        assert_eq!(String::from(status), "Awaiting Keys");
        assert_eq!(TenantStatus::from("Pending"), TenantStatus::Pending);
    }

    #[test]
    fn localized_text_selects_branch() {
        let text = LocalizedText::new("Total", "الإجمالي");
        assert_eq!(text.get(Locale::En), "Total");
        assert_eq!(text.get(Locale::Ar), "الإجمالي");
    }
}
