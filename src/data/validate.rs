//! Optional dataset sanity checks. Findings are warnings only; rendering
//! proceeds regardless.

use std::fmt;

use super::{ReportData, TenantStatus};

/// Tolerance, in percentage points, between the stored ROI and the ratio of
/// its inputs before a finding is raised.
const ROI_TOLERANCE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Finding {
    NegativeAmount { field: String, value: f64 },
    UnpaidStatusWithRevenue { tenant: String, status: String },
    ConfirmedWithoutCash { tenant: String },
    UnknownStatus { tenant: String, status: String },
    RoiMismatch { stored: f64, derived: f64 },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::NegativeAmount { field, value } => {
                write!(f, "{field} is negative ({value})")
            }
            Finding::UnpaidStatusWithRevenue { tenant, status } => write!(
                f,
                "tenant '{tenant}' is {status} but has collected cash or attributed revenue"
            ),
            Finding::ConfirmedWithoutCash { tenant } => {
                write!(f, "tenant '{tenant}' is Confirmed but no cash was collected")
            }
            Finding::UnknownStatus { tenant, status } => {
                write!(f, "tenant '{tenant}' has unrecognized status '{status}'")
            }
            Finding::RoiMismatch { stored, derived } => write!(
                f,
                "stored ROI {stored}% differs from attributed revenue / ad spend ({derived:.1}%)"
            ),
        }
    }
}

/// Check the dataset's business rules. Callers decide how findings surface.
pub fn validate(data: &ReportData) -> Vec<Finding> {
    let mut findings = Vec::new();

    let fin = &data.financials;
    for (field, value) in [
        ("financials.net_cash_collected", fin.net_cash_collected),
        ("financials.recognized_revenue", fin.recognized_revenue),
        ("financials.lifetime_value", fin.lifetime_value),
        ("financials.ltv_attributed_to_ads", fin.ltv_attributed_to_ads),
        ("financials.attributed_revenue", fin.attributed_revenue),
        ("financials.marketing_spend", fin.marketing_spend),
        ("financials.ad_spend", fin.ad_spend),
    ] {
        check_non_negative(&mut findings, field, value);
    }

    for item in &data.spend_breakdown {
        check_non_negative(&mut findings, &format!("spend_breakdown.{}", item.id), item.amount);
    }
    for branch in &data.branch_performance {
        check_non_negative(&mut findings, &format!("branch_performance.{}", branch.id), branch.revenue);
    }
    for (idx, item) in data.secondary_expenses.iter().enumerate() {
        check_non_negative(&mut findings, &format!("secondary_expenses[{idx}]"), item.amount);
    }

    for tenant in &data.tenants {
        for (field, value) in [
            ("monthly_rent", tenant.monthly_rent),
            ("cash_collected", tenant.cash_collected),
            ("attributed_revenue", tenant.attributed_revenue),
        ] {
            check_non_negative(&mut findings, &format!("tenant '{}' {field}", tenant.name), value);
        }

        match &tenant.status {
            TenantStatus::Pending | TenantStatus::Canceled => {
                if tenant.cash_collected != 0.0 || tenant.attributed_revenue != 0.0 {
                    findings.push(Finding::UnpaidStatusWithRevenue {
                        tenant: tenant.name.clone(),
                        status: tenant.status.to_string(),
                    });
                }
            }
            TenantStatus::Confirmed => {
                if tenant.cash_collected == 0.0 {
                    findings.push(Finding::ConfirmedWithoutCash {
                        tenant: tenant.name.clone(),
                    });
                }
            }
            TenantStatus::Other(raw) => findings.push(Finding::UnknownStatus {
                tenant: tenant.name.clone(),
                status: raw.clone(),
            }),
        }
    }

    if fin.ad_spend > 0.0 {
        let derived = fin.attributed_revenue / fin.ad_spend * 100.0;
        if (derived - fin.roi).abs() > ROI_TOLERANCE {
            findings.push(Finding::RoiMismatch {
                stored: fin.roi,
                derived,
            });
        }
    }

    for finding in &findings {
        log::debug!("dataset check: {finding}");
    }
    findings
}

fn check_non_negative(findings: &mut Vec<Finding>, field: &str, value: f64) {
    if value < 0.0 {
        findings.push(Finding::NegativeAmount {
            field: field.to_string(),
            value,
        });
    }
}
