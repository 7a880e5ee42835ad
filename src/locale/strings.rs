//! Static UI phrasebook. Dataset-specific prose (titles, notes) lives in the
//! dataset; these are the fixed labels of the report layout.

use serde::Serialize;

#[derive(Debug)]
pub struct Phrases {
    pub brand: &'static str,
    pub brand_mark: &'static str,
    pub brand_subtitle: &'static str,
    pub formulas_button: &'static str,
    pub expenses_button: &'static str,
    pub close: &'static str,

    pub hero_badge: &'static str,
    pub hero_description: &'static str,
    pub stat_lifetime_value: &'static str,
    pub stat_net_cash: &'static str,
    pub stat_recognized_revenue: &'static str,

    pub roi_title: &'static str,
    pub roi_caption: &'static str,
    pub roi_headline: &'static str,
    /// `{spent}`, `{returned}` and `{month}` are filled in and emphasized.
    pub roi_sentence: &'static str,
    pub analyst_note: &'static str,

    pub spend_title: &'static str,
    pub spend_bar_label: &'static str,
    pub revenue_bar_label: &'static str,
    pub ad_spend: &'static str,
    pub ads_revenue: &'static str,

    pub branch_title: &'static str,
    pub tenants_suffix: &'static str,

    pub allocation_title: &'static str,
    pub allocation_total: &'static str,
    pub reconciliation_note: &'static str,

    pub tenants_title: &'static str,
    /// `{count}` is replaced with the localized number of rows.
    pub tenants_subtitle: &'static str,
    pub col_tenant: &'static str,
    pub col_source: &'static str,
    pub col_rent: &'static str,
    pub col_revenue: &'static str,
    pub col_status: &'static str,
    pub col_metric: &'static str,
    pub col_value: &'static str,

    pub formulas_title: &'static str,
    pub expenses_title: &'static str,
    pub expenses_subtitle: &'static str,
    pub expenses_total: &'static str,
    pub generated_on: &'static str,
}

pub static EN: Phrases = Phrases {
    brand: "Mathwaa",
    brand_mark: "M",
    brand_subtitle: "Growth Report",
    formulas_button: "Formulas",
    expenses_button: "Other expenses",
    close: "Close",

    hero_badge: "Confirmed Revenue",
    hero_description: "Total revenue share recognized for Mathwaa in this period. This represents confirmed lease income.",
    stat_lifetime_value: "Total LTV Generated",
    stat_net_cash: "Net Cash Collected",
    stat_recognized_revenue: "Recognized Revenue",

    roi_title: "Marketing ROI",
    roi_caption: "Return",
    roi_headline: "Efficiency at scale.",
    roi_sentence: "For every {spent} spent on media, {returned} was generated in {month}.",
    analyst_note: "Analyst Note",

    spend_title: "Spend Efficiency",
    spend_bar_label: "Media Spend",
    revenue_bar_label: "Attributed Rev",
    ad_spend: "Ad Spend",
    ads_revenue: "Revenue (Ads)",

    branch_title: "Branch Revenue",
    tenants_suffix: "tenants",

    allocation_title: "Cost Allocation",
    allocation_total: "Total Spend",
    reconciliation_note: "Reconciliation Note",

    tenants_title: "Tenant Activity",
    tenants_subtitle: "{count} transactions recorded",
    col_tenant: "Tenant",
    col_source: "Source",
    col_rent: "Rent",
    col_revenue: "Mathwaa Rev",
    col_status: "Status",
    col_metric: "Metric",
    col_value: "Value",

    formulas_title: "Calculations & Formulas",
    expenses_title: "Other Marketing Expenses",
    expenses_subtitle: "Content & Production Breakdown",
    expenses_total: "Total",
    generated_on: "Generated",
};

pub static AR: Phrases = Phrases {
    brand: "مثوى",
    brand_mark: "م",
    brand_subtitle: "تقرير النمو",
    formulas_button: "المعادلات",
    expenses_button: "مصاريف أخرى",
    close: "إغلاق",

    hero_badge: "الإيرادات المؤكدة",
    hero_description: "إجمالي حصة الإيرادات المعترف بها لمثوى في هذه الفترة. وهذا يمثل دخل الإيجار المؤكد.",
    stat_lifetime_value: "القيمة الدائمة المولدة",
    stat_net_cash: "صافي النقد المحصل",
    stat_recognized_revenue: "الإيرادات المعترف بها",

    roi_title: "العائد على الاستثمار",
    roi_caption: "العائد",
    roi_headline: "كفاءة عالية في الأداء.",
    roi_sentence: "مقابل كل {spent} يُنفق على الإعلام، تم توليد {returned} في {month}.",
    analyst_note: "ملاحظة المحلل",

    spend_title: "كفاءة الإنفاق",
    spend_bar_label: "الإنفاق",
    revenue_bar_label: "الإيرادات",
    ad_spend: "الإنفاق الإعلاني",
    ads_revenue: "إيرادات الإعلانات",

    branch_title: "إيرادات الفروع",
    tenants_suffix: "مستأجر",

    allocation_title: "توزيع التكاليف",
    allocation_total: "الإجمالي",
    reconciliation_note: "ملاحظة المطابقة",

    tenants_title: "نشاط المستأجرين",
    tenants_subtitle: "{count} معاملة مسجلة",
    col_tenant: "المستأجر",
    col_source: "المصدر",
    col_rent: "الإيجار",
    col_revenue: "إيرادات مثوى",
    col_status: "الحالة",
    col_metric: "المؤشر",
    col_value: "القيمة",

    formulas_title: "طرق الاحتساب والمعادلات",
    expenses_title: "مصاريف تسويقية أخرى",
    expenses_subtitle: "تفاصيل المحتوى والإنتاج",
    expenses_total: "الإجمالي",
    generated_on: "تاريخ الإنشاء",
};

/// A run of text, optionally emphasized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextSegment {
    pub text: String,
    pub emphasis: bool,
}

/// Split a phrase on `{key}` placeholders, substituting the matching value as
/// an emphasized segment. Unknown placeholders are kept verbatim.
pub fn fill_segments(template: &str, values: &[(&str, String)]) -> Vec<TextSegment> {
    let mut segments = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}').map(|i| open + i) else {
            break;
        };
        if open > 0 {
            segments.push(TextSegment {
                text: rest[..open].to_string(),
                emphasis: false,
            });
        }
        let key = &rest[open + 1..close];
        match values.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => segments.push(TextSegment {
                text: value.clone(),
                emphasis: true,
            }),
            None => segments.push(TextSegment {
                text: rest[open..=close].to_string(),
                emphasis: false,
            }),
        }
        rest = &rest[close + 1..];
    }

    if !rest.is_empty() {
        segments.push(TextSegment {
            text: rest.to_string(),
            emphasis: false,
        });
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_placeholders_in_order_of_the_phrase() {
        let segments = fill_segments(
            EN.roi_sentence,
            &[
                ("spent", "1 SAR".to_string()),
                ("returned", "1.40 SAR".to_string()),
                ("month", "December".to_string()),
            ],
        );
        let emphasized: Vec<_> = segments
            .iter()
            .filter(|s| s.emphasis)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(emphasized, ["1 SAR", "1.40 SAR", "December"]);
        let joined: String = segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(
            joined,
            "For every 1 SAR spent on media, 1.40 SAR was generated in December."
        );
    }

    #[test]
    fn unknown_placeholders_stay_verbatim() {
        let segments = fill_segments("a {x} b", &[]);
        let joined: String = segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(joined, "a {x} b");
        assert!(segments.iter().all(|s| !s.emphasis));
    }

    #[test]
    fn unterminated_brace_is_plain_text() {
        let segments = fill_segments("count {", &[]);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "count {");
    }
}
