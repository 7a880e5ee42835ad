use serde::Serialize;

use crate::locale::Locale;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FormulaDefinition {
    pub label: &'static str,
    pub formula: &'static str,
    pub description: &'static str,
}

/// The five metric definitions, same order in both locales.
pub fn definitions(locale: Locale) -> &'static [FormulaDefinition] {
    match locale {
        Locale::En => &EN,
        Locale::Ar => &AR,
    }
}

static EN: [FormulaDefinition; 5] = [
    FormulaDefinition {
        label: "Net Cash Collected",
        formula: "Σ (Cash received from all tenants)",
        description: "The actual total cash amount collected from tenants during the report period, regardless of the revenue recognition period.",
    },
    FormulaDefinition {
        label: "Mathwaa Revenue",
        formula: "Σ (Tenant Monthly Rent × Mathwaa % Share)",
        description: "The portion of revenue recognized for Mathwaa in the report month. Share percentages vary by unit type (e.g., 20%, 25%, 30%).",
    },
    FormulaDefinition {
        label: "Mathwaa LTV (Lifetime Value)",
        formula: "Σ (Contract Value × Mathwaa % Share)",
        description: "The projected total revenue Mathwaa will earn over the full duration of the signed leases (e.g., 12 months).",
    },
    FormulaDefinition {
        label: "Marketing ROI",
        formula: "(Mathwaa Revenue from Ads / Media Spend) × 100",
        description: "Return on investment based on the immediate Mathwaa revenue attributed to paid digital channels against total media cost, excluding content production.",
    },
    FormulaDefinition {
        label: "Attributed Revenue",
        formula: "Σ (Mathwaa Revenue for Tenants where Source ∈ {Paid Ads})",
        description: "Revenue generated from tenants acquired through TikTok, Facebook, and Instagram paid campaigns.",
    },
];

static AR: [FormulaDefinition; 5] = [
    FormulaDefinition {
        label: "صافي النقد المحصل",
        formula: "مجموع (النقد المستلم من جميع المستأجرين)",
        description: "إجمالي المبلغ النقدي الفعلي الذي تم تحصيله من المستأجرين خلال فترة التقرير.",
    },
    FormulaDefinition {
        label: "إيرادات مثوى",
        formula: "مجموع (إيجار المستأجر × نسبة حصة مثوى)",
        description: "الجزء المحدد من الإيرادات المستحق لشركة مثوى لشهر التقرير. تختلف النسب حسب الوحدة (مثلاً ٢٠٪، ٢٥٪، ٣٠٪).",
    },
    FormulaDefinition {
        label: "القيمة الدائمة لمثوى (LTV)",
        formula: "مجموع (قيمة العقد × نسبة حصة مثوى)",
        description: "إجمالي الإيرادات المتوقعة التي ستكسبها مثوى على مدار مدة العقود الموقعة بالكامل (مثلاً ١٢ شهراً).",
    },
    FormulaDefinition {
        label: "عائد الاستثمار التسويقي (ROI)",
        formula: "(إيرادات مثوى من الإعلانات / الإنفاق الإعلامي) × ١٠٠",
        description: "العائد على الاستثمار المحسوب بناءً على إيرادات مثوى المباشرة المنسوبة للقنوات الرقمية المدفوعة مقابل تكلفة الوسائط الإعلامية (مع استبعاد تكاليف الإنتاج).",
    },
    FormulaDefinition {
        label: "الإيرادات المنسوبة",
        formula: "مجموع (إيرادات مثوى للمستأجرين حيث المصدر ∈ {إعلانات مدفوعة})",
        description: "الإيرادات الناتجة تحديداً عن المستأجرين الذين تم استقطابهم عبر حملات تيك توك وفيسبوك وانستغرام المدفوعة.",
    },
];
