use chrono::NaiveDate;
use serde::Serialize;

use super::style::{StyleConfig, Theme};
use crate::chart::geometry::{self, BarFrame, BarShape, GaugeShape, SliceShape};
use crate::chart::{self, ChartPoint};
use crate::data::{ReportData, TenantStatus};
use crate::locale::format::{format_unit_amount, localize_digits};
use crate::locale::{
    fill_segments, format_currency, format_number, format_percentage, translate_status, Locale,
    TextSegment,
};
use crate::modal::{ExpenseDetail, FormulaGlossary, ModalKind};

/// File stem shared by the per-locale pages (`report.en.html`, `report.ar.html`).
pub const DEFAULT_FILE_STEM: &str = "report";

/// Rendering choices that are not part of the dataset.
#[derive(Debug, Clone)]
pub struct PageOptions {
    pub theme: Theme,
    pub active_modal: Option<ModalKind>,
    pub generated_on: Option<NaiveDate>,
    pub file_stem: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            active_modal: None,
            generated_on: None,
            file_stem: DEFAULT_FILE_STEM.to_string(),
        }
    }
}

/// Fully formatted, single-locale view of a report, ready for a template.
#[derive(Debug, Clone, Serialize)]
pub struct ReportPage {
    pub lang: &'static str,
    pub dir: &'static str,
    pub style: StyleConfig,
    pub header: Header,
    pub title: TitleBlock,
    pub formulas_trigger: Trigger,
    pub sections: Vec<Section>,
    pub formulas: FormulaGlossary,
    pub expenses: ExpenseDetail,
    pub active_modal: Option<ModalKind>,
    pub close_label: &'static str,
    pub generated: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Header {
    pub brand: &'static str,
    pub brand_mark: &'static str,
    pub subtitle: &'static str,
    pub toggle_label: &'static str,
    pub toggle_lang: &'static str,
    pub toggle_href: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TitleBlock {
    pub lead: String,
    pub accent: String,
    pub period: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Trigger {
    pub label: &'static str,
    pub href: String,
}

impl Trigger {
    fn for_modal(label: &'static str, kind: ModalKind) -> Self {
        Self {
            label,
            href: format!("#{}", kind.anchor()),
        }
    }
}

/// Card chrome. Title and subtitle are optional; absent ones are not drawn.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Card {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub class: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Note {
    pub label: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
}

impl From<BarFrame> for Frame {
    fn from(frame: BarFrame) -> Self {
        Self {
            width: frame.width,
            height: frame.height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Hero,
    Roi,
    SpendEfficiency,
    BranchRevenue,
    Allocation,
    Tenants,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    Hero(HeroSection),
    Roi(RoiSection),
    SpendEfficiency(SpendSection),
    BranchRevenue(BranchSection),
    Allocation(AllocationSection),
    Tenants(TenantSection),
}

impl Section {
    pub fn kind(&self) -> SectionKind {
        match self {
            Section::Hero(_) => SectionKind::Hero,
            Section::Roi(_) => SectionKind::Roi,
            Section::SpendEfficiency(_) => SectionKind::SpendEfficiency,
            Section::BranchRevenue(_) => SectionKind::BranchRevenue,
            Section::Allocation(_) => SectionKind::Allocation,
            Section::Tenants(_) => SectionKind::Tenants,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroSection {
    pub card: Card,
    pub badge: &'static str,
    pub amount: String,
    pub description: &'static str,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoiSection {
    pub card: Card,
    pub percentage: String,
    pub caption: &'static str,
    pub gauge: GaugeShape,
    pub headline: &'static str,
    pub sentence: Vec<TextSegment>,
    pub note: Option<Note>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpendSection {
    pub card: Card,
    pub frame: Frame,
    pub bars: Vec<BarShape>,
    pub footer: Vec<Stat>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BranchBar {
    #[serde(flatten)]
    pub shape: BarShape,
    pub tooltip: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BranchSection {
    pub card: Card,
    pub frame: Frame,
    pub bars: Vec<BranchBar>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AllocationSection {
    pub card: Card,
    pub slices: Vec<SliceShape>,
    pub legend: Vec<ChartPoint>,
    pub total_label: &'static str,
    pub total_display: String,
    pub note: Option<Note>,
    pub expenses_trigger: Option<Trigger>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PillTone {
    Affirmative,
    Neutral,
}

/// Confirmed leases get the affirmative pill; every other status shares the
/// neutral one.
pub fn pill_tone(status: &TenantStatus) -> PillTone {
    if status.is_confirmed() {
        PillTone::Affirmative
    } else {
        PillTone::Neutral
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Column {
    pub label: &'static str,
    pub numeric: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TenantRow {
    pub name: String,
    pub branch: String,
    pub source: String,
    pub rent: String,
    pub revenue: String,
    pub status: String,
    pub tone: PillTone,
}

#[derive(Debug, Clone, Serialize)]
pub struct TenantSection {
    pub card: Card,
    pub columns: Vec<Column>,
    pub rows: Vec<TenantRow>,
}

impl ReportPage {
    pub fn build(data: &ReportData, locale: Locale, options: &PageOptions) -> Self {
        let phrases = locale.phrases();
        let style = StyleConfig::new(options.theme, locale);
        let other = locale.toggled();

        let sections = vec![
            Section::Hero(hero(data, locale)),
            Section::Roi(roi(data, locale)),
            Section::SpendEfficiency(spend_efficiency(data, locale, &style)),
            Section::BranchRevenue(branch_revenue(data, locale, &style)),
            Section::Allocation(allocation(data, locale, &style)),
            Section::Tenants(tenants(data, locale)),
        ];

        Self {
            lang: locale.code(),
            dir: style.dir,
            header: Header {
                brand: phrases.brand,
                brand_mark: phrases.brand_mark,
                subtitle: phrases.brand_subtitle,
                toggle_label: locale.toggle_label(),
                toggle_lang: other.code(),
                toggle_href: other.page_file_name(&options.file_stem),
            },
            title: TitleBlock {
                lead: data.title.lead.get(locale).to_string(),
                accent: data.title.accent.get(locale).to_string(),
                period: data.period.get(locale).to_string(),
            },
            formulas_trigger: Trigger::for_modal(phrases.formulas_button, ModalKind::Formulas),
            sections,
            formulas: FormulaGlossary::new(locale),
            expenses: ExpenseDetail::build(&data.secondary_expenses, locale),
            active_modal: options.active_modal,
            close_label: phrases.close,
            generated: options
                .generated_on
                .map(|date| format!("{} {}", phrases.generated_on, format_date(date, locale))),
            style,
        }
    }

    pub fn section_order(&self) -> Vec<SectionKind> {
        self.sections.iter().map(Section::kind).collect()
    }

    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind() == kind)
    }
}

fn hero(data: &ReportData, locale: Locale) -> HeroSection {
    let phrases = locale.phrases();
    let fin = &data.financials;
    HeroSection {
        card: Card {
            class: "card card-dark card-hero",
            ..Card::default()
        },
        badge: phrases.hero_badge,
        amount: format_currency(fin.recognized_revenue, locale),
        description: phrases.hero_description,
        stats: vec![
            Stat {
                label: phrases.stat_lifetime_value,
                value: format_currency(fin.lifetime_value, locale),
            },
            Stat {
                label: phrases.stat_net_cash,
                value: format_currency(fin.net_cash_collected, locale),
            },
        ],
    }
}

fn roi(data: &ReportData, locale: Locale) -> RoiSection {
    let phrases = locale.phrases();
    let roi = data.financials.roi;
    RoiSection {
        card: Card {
            title: Some(phrases.roi_title.to_string()),
            subtitle: None,
            class: "card",
        },
        percentage: format_percentage(roi),
        caption: phrases.roi_caption,
        gauge: geometry::gauge(roi),
        headline: phrases.roi_headline,
        sentence: fill_segments(
            phrases.roi_sentence,
            &[
                ("spent", format_unit_amount(1.0, 0, locale)),
                ("returned", format_unit_amount(roi / 100.0, 2, locale)),
                ("month", data.title.month.get(locale).to_string()),
            ],
        ),
        note: data.annotations.analyst_note.as_ref().map(|note| Note {
            label: phrases.analyst_note,
            text: note.get(locale).to_string(),
        }),
    }
}

fn spend_efficiency(data: &ReportData, locale: Locale, style: &StyleConfig) -> SpendSection {
    let phrases = locale.phrases();
    let fin = &data.financials;
    let points = chart::spend_efficiency(fin, locale, &style.palette);
    SpendSection {
        card: Card {
            title: Some(phrases.spend_title.to_string()),
            subtitle: None,
            class: style.chart_card,
        },
        frame: BarFrame::SPEND.into(),
        bars: geometry::horizontal_bars(&points, chart::bar_orientation(locale), BarFrame::SPEND),
        footer: vec![
            Stat {
                label: phrases.ad_spend,
                value: format_currency(fin.ad_spend, locale),
            },
            Stat {
                label: phrases.ads_revenue,
                value: format_currency(fin.attributed_revenue, locale),
            },
        ],
    }
}

fn branch_revenue(data: &ReportData, locale: Locale, style: &StyleConfig) -> BranchSection {
    let phrases = locale.phrases();
    let points = chart::branch_performance(&data.branch_performance, locale);
    let shapes = geometry::vertical_bars(&points, style.palette.branch_bar, BarFrame::BRANCH);
    BranchSection {
        card: Card {
            title: Some(phrases.branch_title.to_string()),
            subtitle: None,
            class: style.chart_card,
        },
        frame: BarFrame::BRANCH.into(),
        bars: shapes
            .into_iter()
            .zip(&points)
            .map(|(shape, point)| BranchBar {
                tooltip: format!(
                    "{}: {} · {} {}",
                    point.label,
                    point.display,
                    format_number(point.tenant_count as f64, locale),
                    phrases.tenants_suffix
                ),
                shape,
            })
            .collect(),
    }
}

fn allocation(data: &ReportData, locale: Locale, style: &StyleConfig) -> AllocationSection {
    let phrases = locale.phrases();
    let points = chart::allocation(&data.spend_breakdown, locale, style.theme);
    AllocationSection {
        card: Card {
            title: Some(phrases.allocation_title.to_string()),
            subtitle: None,
            class: style.chart_card,
        },
        slices: geometry::donut(&points, (150.0, 150.0), 80.0, 110.0, 5.0),
        legend: points,
        total_label: phrases.allocation_total,
        total_display: format_currency(data.financials.marketing_spend, locale),
        note: data.annotations.reconciliation_note.as_ref().map(|note| Note {
            label: phrases.reconciliation_note,
            text: note.get(locale).to_string(),
        }),
        expenses_trigger: (!data.secondary_expenses.is_empty())
            .then(|| Trigger::for_modal(phrases.expenses_button, ModalKind::Expenses)),
    }
}

fn tenants(data: &ReportData, locale: Locale) -> TenantSection {
    let phrases = locale.phrases();
    let count = format_number(data.tenants.len() as f64, locale);
    TenantSection {
        card: Card {
            title: Some(phrases.tenants_title.to_string()),
            subtitle: Some(phrases.tenants_subtitle.replace("{count}", &count)),
            class: "card",
        },
        columns: vec![
            Column { label: phrases.col_tenant, numeric: false },
            Column { label: phrases.col_source, numeric: false },
            Column { label: phrases.col_rent, numeric: true },
            Column { label: phrases.col_revenue, numeric: true },
            Column { label: phrases.col_status, numeric: true },
        ],
        rows: data
            .tenants
            .iter()
            .map(|t| TenantRow {
                name: t.name.clone(),
                branch: t.branch.clone(),
                source: t.acquisition_source.clone(),
                rent: format_currency(t.monthly_rent, locale),
                revenue: format_currency(t.attributed_revenue, locale),
                status: translate_status(&t.status, locale),
                tone: pill_tone(&t.status),
            })
            .collect(),
    }
}

fn format_date(date: NaiveDate, locale: Locale) -> String {
    match locale {
        Locale::En => date.format("%B %-d, %Y").to_string(),
        Locale::Ar => localize_digits(&date.format("%Y/%m/%d").to_string(), locale),
    }
}
