//! Built-in dataset: growth report for December 2025.

use super::{
    Annotations, BranchPerformance, ExpenseItem, Financials, LocalizedText, ReportData,
    ReportTitle, SpendItem, Tenant, TenantStatus,
};

pub fn december_2025() -> ReportData {
    ReportData {
        period: LocalizedText::new(
            "Dec 1, 2025 to Dec 31, 2025",
            "١ ديسمبر ٢٠٢٥ إلى ٣١ ديسمبر ٢٠٢٥",
        ),
        title: ReportTitle {
            lead: LocalizedText::new("December", "تقرير"),
            accent: LocalizedText::new("Review", "ديسمبر"),
            month: LocalizedText::new("December", "ديسمبر"),
        },
        financials: Financials {
            net_cash_collected: 194971.00,
            recognized_revenue: 45003.15,
            lifetime_value: 446159.40,
            ltv_attributed_to_ads: 191309.50,
            attributed_revenue: 20957.50,
            // Media plus production, after the photography credit.
            marketing_spend: 21347.0,
            // TikTok 9000 + Meta 5997, media only.
            ad_spend: 14997.0,
            roi: 140.0,
        },
        spend_breakdown: vec![
            spend("tiktok", "TikTok Ads", "إعلانات تيك توك", 9000.0, "#000000"),
            spend("meta", "Meta (FB/Insta)", "ميتا (فيسبوك/انستغرام)", 5997.0, "#1877F2"),
            spend("video", "Video Production", "إنتاج الفيديو", 3500.0, "#8A6E99"),
            spend("photo", "Photography", "التصوير الفوتوغرافي", 1350.0, "#C98B8B"),
            spend("editing", "Content Editing", "تحرير المحتوى", 1500.0, "#6B7280"),
        ],
        branch_performance: vec![
            branch("murooj-53", "Al Murooj 53", "المروج ٥٣", 11886.0, 23),
            branch("olaya-33", "Al Olaya 33", "العليا ٣٣", 7708.0, 6),
            branch("sulaymaniah-38", "Al Sulaymaniah 38", "السليمانية ٣٨", 4893.0, 4),
            branch("king-faisal-1", "King Faisal 1", "الملك فيصل ١", 4370.0, 2),
            branch("murooj-52", "Al Murooj 52", "المروج ٥٢", 2100.0, 4),
        ],
        tenants: tenants(),
        secondary_expenses: vec![
            expense("Video Production", "إنتاج الفيديو", 3500.0),
            expense("Photography", "التصوير الفوتوغرافي", 1350.0),
            expense("Content Editing", "تحرير المحتوى", 1500.0),
        ],
        annotations: Annotations {
            analyst_note: Some(LocalizedText::new(
                "140% ROAS for Saudi real estate nears break-even at ~70% profit margins. \
                 The industry benchmark for \"excellent-grade\" marketing is 400%+ ROI.",
                "عائد 140٪ في العقارات السعودية يقترب من نقطة التعادل عند هوامش ربح 70٪. \
                 المعيار الصناعي للتسويق \"الممتاز\" هو عائد استثمار يتجاوز 400٪.",
            )),
            reconciliation_note: Some(LocalizedText::new(
                "Total Marketing Spend per Finance records is SAR 28,000. The displayed figure \
                 (SAR 21,347) reflects direct allocation; the difference aligns with ~31% VAT \
                 and fees (Meta & TikTok) applied at source.",
                "يبلغ إجمالي الإنفاق التسويقي وفقاً لسجلات القسم المالي ٢٨,٠٠٠ ريال. الرقم المعروض \
                 (٢١,٣٤٧ ريال) يمثل التخصيص المباشر؛ ويعود الفارق إلى ما يقارب ٣١٪ ضريبة قيمة \
                 مضافة ورسوم منصات (ميتا وتيك توك) مطبقة عند المصدر.",
            )),
        },
    }
}

fn spend(id: &str, en: &str, ar: &str, amount: f64, color: &str) -> SpendItem {
    SpendItem {
        id: id.to_string(),
        label: LocalizedText::new(en, ar),
        amount,
        color: color.to_string(),
    }
}

fn branch(id: &str, en: &str, ar: &str, revenue: f64, tenant_count: u32) -> BranchPerformance {
    BranchPerformance {
        id: id.to_string(),
        label: LocalizedText::new(en, ar),
        revenue,
        tenant_count,
    }
}

fn expense(en: &str, ar: &str, amount: f64) -> ExpenseItem {
    ExpenseItem {
        label: LocalizedText::new(en, ar),
        amount,
    }
}

#[allow(clippy::too_many_arguments)]
fn tenant(
    name: &str,
    branch: &str,
    unit: &str,
    source: &str,
    duration: &str,
    rent: f64,
    status: &str,
    cash: f64,
    revenue: f64,
) -> Tenant {
    Tenant {
        name: name.to_string(),
        branch: branch.to_string(),
        unit: unit.to_string(),
        acquisition_source: source.to_string(),
        lease_duration: duration.to_string(),
        monthly_rent: rent,
        status: TenantStatus::from(status),
        cash_collected: cash,
        attributed_revenue: revenue,
    }
}

fn tenants() -> Vec<Tenant> {
    vec![
        tenant("سهيم العنزي", "القيروان", "room 151", "TikTok", "شهر", 3330.0, "Confirmed", 3330.0, 832.5),
        tenant("محاسن شداد", "العارض 37", "room 178", "Instagram Ads", "3 شهور", 3420.0, "Confirmed", 3420.0, 1026.0),
        tenant("Adil Ashraf", "المروج 52", "Studio 02", "Facebook Ads", "شهري", 2600.0, "Confirmed", 2600.0, 520.0),
        tenant("متعب الصانع", "المروج 52", "Studio 07", "Bayut/Aqar", "سنة", 2600.0, "Confirmed", 2600.0, 520.0),
        tenant("Ruba Qadi", "العليا 33", "Studio 022", "Airbnb", "شهرين", 5790.0, "Canceled", 0.0, 0.0),
        tenant("في الدويخ", "الملقا 14", "room 77", "Word of Mouth", "سنة", 3200.0, "Confirmed", 3200.0, 640.0),
        tenant("دلال الدوسري", "الملقا 34", "room 158", "Resident", "سنة", 7200.0, "Confirmed", 7200.0, 2160.0),
        tenant("محمود العشماوي", "المروج 53", "Studio 25", "Facebook", "سنة", 2200.0, "Confirmed", 2200.0, 440.0),
        tenant("باسم مصطفى", "المروج 52", "Studio 3", "Facebook", "شهري", 2400.0, "Confirmed", 2400.0, 480.0),
        tenant("Hamza Waseem", "المروج 53", "Studio 13", "Bayut", "سنة", 2530.0, "Confirmed", 2530.0, 506.0),
        tenant("Basit Ali Awan", "المروج 53", "Studio 3", "Referral", "سنة", 2640.0, "Confirmed", 2640.0, 528.0),
        tenant("فاطمة الشيخ", "المروج 53", "Studio 011", "Instagram", "سنة", 2530.0, "Confirmed", 2530.0, 506.0),
        tenant("حيدره ثابت", "مثوى 53", "Studio 20", "Facebook", "شهر واحد", 2420.0, "Confirmed", 2420.0, 484.0),
        tenant("صقر الشمري", "المروج 53", "Studio 27", "Website", "سنة", 2200.0, "Confirmed", 2200.0, 440.0),
        tenant("غزل السيسي", "العقيق", "Studio 1008", "Social Media", "سنة", 7000.0, "Pending", 0.0, 0.0),
        tenant("اسلام جمعة", "المروج 53", "Studio 029", "Facebook", "سنة", 2200.0, "Confirmed", 2200.0, 440.0),
        tenant("لورا الشهري", "العارض 42", "room 42", "Word of Mouth", "أسبوع", 548.0, "Confirmed", 548.0, 0.0),
        tenant("Shijin G.", "المروج 53", "Studio 028", "Bayut", "سنة", 2420.0, "Confirmed", 2420.0, 484.0),
        tenant("محمد دياب", "المروج 53", "Studio 32", "Bayut", "سنة", 2200.0, "Confirmed", 2200.0, 440.0),
        tenant("خالد الخالد", "المروج 53", "1BR 26", "Walk-in", "3 شهور", 2860.0, "Confirmed", 2860.0, 572.0),
        tenant("الهنوف الخيري", "الملك فيصل 1", "room 009", "Friend", "سنة", 3900.0, "Confirmed", 3900.0, 1170.0),
        tenant("فرح العصيمي", "العليا 33", "2BR 3304", "TikTok", "سنة", 7390.0, "Confirmed", 7390.0, 1847.5),
        tenant("لجين الهوسة", "الياسمين 44", "room 4401", "TikTok", "سنة", 3900.0, "Confirmed", 3900.0, 1170.0),
        tenant("فاطمة بيومي", "العارض 42", "room B59", "TikTok", "سنة", 1850.0, "Pending", 0.0, 0.0),
        tenant("Basel Bawab", "العليا 33", "1BR 3308", "Bayut", "سنة", 6380.0, "Confirmed", 6380.0, 1595.0),
        tenant("إيمان محمد", "المروج 53", "Studio 012", "Instagram", "سنة", 2750.0, "Confirmed", 2750.0, 550.0),
        tenant("عهود شلبي", "المروج 53", "Studio 022", "TikTok", "شهرين", 2420.0, "Canceled", 0.0, 0.0),
        tenant("وافي الهاجري", "المروج 53", "Studio 9", "Bayut", "سنة", 2530.0, "Confirmed", 2530.0, 506.0),
        tenant("عبدالكريم الملق", "المروج 53", "Studio 30", "Instagram Ads", "سنة", 2860.0, "Confirmed", 2860.0, 572.0),
        tenant("مريم العنزي", "اليرموك 24", "room 121", "TikTok", "سنة", 3500.0, "Confirmed", 3500.0, 1050.0),
    ]
}
