use growth_report::data::{
    Annotations, BranchPerformance, ExpenseItem, Financials, LocalizedText, ReportTitle, SpendItem,
    Tenant,
};
use growth_report::locale::{format_currency, translate_status};
use growth_report::modal::ExpenseDetail;
use growth_report::view::{Section, SectionKind};
use growth_report::{
    AppShell, DataProvider, Locale, ModalController, ModalKind, ReportData, Result, SampleData,
    Settings, TenantStatus,
};

/// Small in-memory dataset standing in for a real data source.
struct Fixture;

impl DataProvider for Fixture {
    fn describe(&self) -> String {
        "test fixture".to_string()
    }

    fn load(&self) -> Result<ReportData> {
        Ok(ReportData {
            period: LocalizedText::new("Q1", "الربع الأول"),
            title: ReportTitle {
                lead: LocalizedText::new("Quarterly", "تقرير"),
                accent: LocalizedText::new("Review", "ربعي"),
                month: LocalizedText::new("March", "مارس"),
            },
            financials: Financials {
                net_cash_collected: 1234.5,
                recognized_revenue: 2000.0,
                lifetime_value: 9000.0,
                ltv_attributed_to_ads: 0.0,
                attributed_revenue: 500.0,
                marketing_spend: 600.0,
                ad_spend: 400.0,
                roi: 125.0,
            },
            spend_breakdown: vec![
                SpendItem {
                    id: "snap".to_string(),
                    label: LocalizedText::new("Snapchat", "سناب شات"),
                    amount: 250.0,
                    color: "#FFFC00".to_string(),
                },
                SpendItem {
                    id: "x".to_string(),
                    label: LocalizedText::new("X", "إكس"),
                    amount: 150.0,
                    color: "#000000".to_string(),
                },
            ],
            branch_performance: vec![
                branch("zulfi", "Zulfi", 100.0, 1),
                branch("abha", "Abha", 900.0, 3),
                branch("hail", "Hail", 400.0, 2),
            ],
            tenants: vec![
                tenant("Zed", TenantStatus::Pending),
                tenant("Amal", TenantStatus::Confirmed),
                tenant("Badr", TenantStatus::from("On Hold")),
            ],
            secondary_expenses: vec![
                ExpenseItem {
                    label: LocalizedText::new("Design", "تصميم"),
                    amount: 120.25,
                },
                ExpenseItem {
                    label: LocalizedText::new("Print", "طباعة"),
                    amount: 79.75,
                },
            ],
            annotations: Annotations {
                analyst_note: None,
                reconciliation_note: None,
            },
        })
    }
}

fn branch(id: &str, label: &str, revenue: f64, tenant_count: u32) -> BranchPerformance {
    BranchPerformance {
        id: id.to_string(),
        label: LocalizedText::new(label, label),
        revenue,
        tenant_count,
    }
}

fn tenant(name: &str, status: TenantStatus) -> Tenant {
    Tenant {
        name: name.to_string(),
        branch: "Abha".to_string(),
        unit: "A1".to_string(),
        acquisition_source: "Walk-in".to_string(),
        lease_duration: "12 months".to_string(),
        monthly_rent: 1000.0,
        status,
        cash_collected: 1000.0,
        attributed_revenue: 0.0,
    }
}

fn fixture_shell() -> AppShell {
    AppShell::from_provider(&Fixture, &Settings::default()).unwrap()
}

#[test]
fn toggle_switches_every_localized_string() {
    let mut shell = fixture_shell();
    let en = shell.render().unwrap();
    assert!(en.contains(r#"dir="ltr""#));
    assert!(en.contains("SAR 2,000"));
    assert!(en.contains("Pending"));

    shell.toggle_locale();
    let ar = shell.render().unwrap();
    assert!(ar.contains(r#"<html lang="ar" dir="rtl">"#));
    assert!(ar.contains("٢٬٠٠٠ ريال"));
    assert!(ar.contains("قيد الانتظار"));
    assert!(!ar.contains("SAR "));
    assert!(!ar.contains(">Pending<"));
}

#[test]
fn currency_formatting_is_stable_per_locale() {
    let en = format_currency(1234.5, Locale::En);
    assert!(en.contains("1,234.5"));
    assert!(en.contains("SAR"));
    assert_eq!(format_currency(1234.5, Locale::Ar), "١٬٢٣٤٫٥ ريال");
    for locale in Locale::ALL {
        assert_eq!(format_currency(1234.5, locale), format_currency(1234.5, locale));
    }
}

#[test]
fn status_translation_is_total() {
    for locale in Locale::ALL {
        for status in [
            TenantStatus::Confirmed,
            TenantStatus::Pending,
            TenantStatus::Canceled,
        ] {
            assert!(!translate_status(&status, locale).is_empty());
        }
        assert_eq!(
            translate_status(&TenantStatus::from("On Hold"), locale),
            "On Hold"
        );
    }
}

#[test]
fn expense_total_matches_lines_on_every_open() {
    let data = Fixture.load().unwrap();
    let first = ExpenseDetail::build(&data.secondary_expenses, Locale::En);
    let second = ExpenseDetail::build(&data.secondary_expenses, Locale::En);
    assert_eq!(first.total, 200.0);
    assert_eq!(first, second);
    assert_eq!(first.total_display, "SAR 200");
}

#[test]
fn branches_and_tenants_keep_input_order() {
    let page = fixture_shell().page();

    let Some(Section::BranchRevenue(branches)) = page.section(SectionKind::BranchRevenue) else {
        panic!("branch section missing");
    };
    let labels: Vec<&str> = branches.bars.iter().map(|b| b.shape.label.as_str()).collect();
    assert_eq!(labels, ["Zulfi", "Abha", "Hail"]);

    let Some(Section::Tenants(tenants)) = page.section(SectionKind::Tenants) else {
        panic!("tenant section missing");
    };
    let names: Vec<&str> = tenants.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Zed", "Amal", "Badr"]);
}

#[test]
fn only_one_modal_is_open() {
    let mut modals = ModalController::new();
    modals.open(ModalKind::Formulas);
    modals.open(ModalKind::Expenses);
    assert_eq!(modals.active(), Some(ModalKind::Expenses));
    modals.close();
    assert_eq!(modals.active(), None);

    let mut shell = fixture_shell();
    shell.open_modal(ModalKind::Formulas);
    shell.open_modal(ModalKind::Expenses);
    let html = shell.render().unwrap();
    assert_eq!(html.matches(r#"class="modal is-open""#).count(), 1);
    assert!(html.contains(r#"id="expenses" class="modal is-open""#));
}

#[test]
fn sample_report_end_to_end() {
    let mut shell = AppShell::from_provider(&SampleData, &Settings::default()).unwrap();
    for locale in Locale::ALL {
        shell.set_locale(locale);
        let html = shell.render().unwrap();
        assert!(html.contains("140%"));
        assert!(html.contains(&format_currency(45003.15, locale)));
    }
}

#[test]
fn missing_notes_are_not_rendered() {
    let html = fixture_shell().render().unwrap();
    assert!(!html.contains(r#"class="note""#));
}
