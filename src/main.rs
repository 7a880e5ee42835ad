use chrono::Local;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tabled::{builder::Builder, settings::Style, Table, Tabled};

use growth_report::chart;
use growth_report::config::{
    config_dir, load_settings, provider_for, resolve_output_dir, CONFIG_FILE, CONFIG_TEMPLATE,
    DATA_FILE,
};
use growth_report::data::{sample, validate};
use growth_report::error::{ReportError, Result};
use growth_report::locale::{format_currency, format_number, format_percentage};
use growth_report::modal::{ExpenseDetail, FormulaGlossary};
use growth_report::view::{Section, SectionKind};
use growth_report::{AppShell, Locale, ModalKind, Settings, Theme};

#[derive(Parser)]
#[command(name = "growth-report")]
#[command(version, about = "Bilingual growth report renderer", long_about = None)]
struct Cli {
    /// Path to config directory (default: ~/.growth-report or XDG config)
    #[arg(short = 'C', long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize config directory with config.toml and the sample dataset
    Init,

    /// Render the report as standalone HTML pages
    Render {
        /// Locale of the page to open (default: config default_locale); both pages are always written
        #[arg(short, long)]
        locale: Option<String>,

        /// Chart theme (light or dark)
        #[arg(short, long)]
        theme: Option<String>,

        /// Output directory (default: output_dir from config.toml)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Render with a modal already open (formulas or expenses)
        #[arg(long)]
        modal: Option<String>,

        /// Open the rendered page with the system default browser
        #[arg(long)]
        open: bool,
    },

    /// Show headline figures
    Summary {
        /// Locale for formatted values (en or ar)
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// List tenant transactions
    Tenants {
        /// Locale for formatted values (en or ar)
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Show revenue per branch
    Branches {
        /// Locale for formatted values (en or ar)
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// List the metric definitions
    Formulas {
        /// Locale for the definitions (en or ar)
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// List secondary expenses and their total
    Expenses {
        /// Locale for formatted values (en or ar)
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Check the dataset for inconsistencies
    Validate,

    /// Print the page model as JSON
    Model {
        /// Locale of the page (en or ar)
        #[arg(short, long)]
        locale: Option<String>,

        /// Chart theme (light or dark)
        #[arg(short, long)]
        theme: Option<String>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Determine config directory
    let cfg_dir = match cli.config_dir {
        Some(p) => p,
        None => config_dir()?,
    };

    match cli.command {
        Commands::Init => cmd_init(&cfg_dir),
        Commands::Render {
            locale,
            theme,
            output,
            modal,
            open,
        } => cmd_render(&cfg_dir, locale, theme, output, modal, open),
        Commands::Summary { locale } => cmd_summary(&cfg_dir, locale),
        Commands::Tenants { locale } => cmd_tenants(&cfg_dir, locale),
        Commands::Branches { locale } => cmd_branches(&cfg_dir, locale),
        Commands::Formulas { locale } => cmd_formulas(&cfg_dir, locale),
        Commands::Expenses { locale } => cmd_expenses(&cfg_dir, locale),
        Commands::Validate => cmd_validate(&cfg_dir),
        Commands::Model { locale, theme } => cmd_model(&cfg_dir, locale, theme),
    }
}

/// Load settings and the dataset they point at
fn load_shell(cfg_dir: &Path) -> Result<(Settings, AppShell)> {
    let settings = load_settings(cfg_dir)?;
    let provider = provider_for(&settings, cfg_dir);
    let shell = AppShell::from_provider(provider.as_ref(), &settings)?;
    Ok((settings, shell))
}

/// Locale from the command line, else the configured default
fn pick_locale(arg: Option<String>, settings: &Settings) -> Result<Locale> {
    match arg {
        Some(s) => s.parse(),
        None => Ok(settings.report.default_locale),
    }
}

/// Initialize config directory with template files
fn cmd_init(cfg_dir: &Path) -> Result<()> {
    if cfg_dir.exists() {
        return Err(ReportError::AlreadyInitialized(cfg_dir.to_path_buf()));
    }

    fs::create_dir_all(cfg_dir)?;
    fs::write(cfg_dir.join(CONFIG_FILE), CONFIG_TEMPLATE)?;
    let data = toml::to_string_pretty(&sample::december_2025())?;
    fs::write(cfg_dir.join(DATA_FILE), data)?;

    println!("Initialized growth-report config at: {}", cfg_dir.display());
    println!();
    println!("Next steps:");
    println!(
        "  1. Adjust locale, theme and output:  $EDITOR {}/{CONFIG_FILE}",
        cfg_dir.display()
    );
    println!(
        "  2. Replace the sample figures:       $EDITOR {}/{DATA_FILE}",
        cfg_dir.display()
    );
    println!();
    println!("Then render the report:");
    println!("  growth-report render");

    Ok(())
}

#[derive(Tabled)]
struct PageRow {
    #[tabled(rename = "LOCALE")]
    locale: String,
    #[tabled(rename = "DIR")]
    dir: String,
    #[tabled(rename = "FILE")]
    file: String,
}

/// Render both locale pages to disk. The locale picks the page to open.
fn cmd_render(
    cfg_dir: &Path,
    locale: Option<String>,
    theme: Option<String>,
    output: Option<PathBuf>,
    modal: Option<String>,
    open: bool,
) -> Result<()> {
    let locale = locale.map(|l| l.parse::<Locale>()).transpose()?;
    let theme = theme.map(|t| t.parse::<Theme>()).transpose()?;
    let modal = modal.map(|m| m.parse::<ModalKind>()).transpose()?;

    let (settings, shell) = load_shell(cfg_dir)?;
    let mut shell = shell.with_generated_on(Local::now().date_naive());
    shell.set_locale(locale.unwrap_or(settings.report.default_locale));
    if let Some(theme) = theme {
        shell.set_theme(theme);
    }
    if let Some(kind) = modal {
        shell.open_modal(kind);
    }

    let out_dir = resolve_output_dir(&settings, output.as_deref());
    let written = shell.write_pages(&out_dir)?;

    let rows: Vec<PageRow> = written
        .iter()
        .map(|(locale, path)| PageRow {
            locale: locale.to_string(),
            dir: locale.direction().as_str().to_string(),
            file: path.display().to_string(),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");
    println!("Theme: {}", shell.theme());

    if open {
        if let Some((_, path)) = written.iter().find(|(l, _)| *l == shell.locale()) {
            open_path(path)?;
        }
    }

    Ok(())
}

/// Show headline figures, labels and values in one locale
fn cmd_summary(cfg_dir: &Path, locale: Option<String>) -> Result<()> {
    let (settings, shell) = load_shell(cfg_dir)?;
    let locale = pick_locale(locale, &settings)?;
    let phrases = locale.phrases();
    let data = shell.data();
    let fin = &data.financials;

    let mut builder = Builder::default();
    builder.push_record([phrases.col_metric.to_string(), phrases.col_value.to_string()]);
    builder.push_record([phrases.roi_title.to_string(), format_percentage(fin.roi)]);
    for (label, amount) in [
        (phrases.stat_recognized_revenue, fin.recognized_revenue),
        (phrases.stat_net_cash, fin.net_cash_collected),
        (phrases.stat_lifetime_value, fin.lifetime_value),
        (phrases.ads_revenue, fin.attributed_revenue),
        (phrases.ad_spend, fin.ad_spend),
        (phrases.allocation_total, fin.marketing_spend),
    ] {
        builder.push_record([label.to_string(), format_currency(amount, locale)]);
    }

    println!("{}", data.period.get(locale));
    let table = builder.build().with(Style::rounded()).to_string();
    println!("{table}");

    Ok(())
}

#[derive(Tabled)]
struct TenantRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "TENANT")]
    name: String,
    #[tabled(rename = "BRANCH")]
    branch: String,
    #[tabled(rename = "SOURCE")]
    source: String,
    #[tabled(rename = "RENT")]
    rent: String,
    #[tabled(rename = "REVENUE")]
    revenue: String,
    #[tabled(rename = "STATUS")]
    status: String,
}

/// List tenant transactions in dataset order
fn cmd_tenants(cfg_dir: &Path, locale: Option<String>) -> Result<()> {
    let (settings, mut shell) = load_shell(cfg_dir)?;
    shell.set_locale(pick_locale(locale, &settings)?);
    let page = shell.page();

    let Some(Section::Tenants(section)) = page.section(SectionKind::Tenants) else {
        return Ok(());
    };

    if section.rows.is_empty() {
        println!("No tenants recorded.");
        return Ok(());
    }

    let rows: Vec<TenantRow> = section
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| TenantRow {
            index: i + 1,
            name: row.name.clone(),
            branch: row.branch.clone(),
            source: row.source.clone(),
            rent: row.rent.clone(),
            revenue: row.revenue.clone(),
            status: row.status.clone(),
        })
        .collect();

    if let Some(subtitle) = &section.card.subtitle {
        println!("{subtitle}");
    }
    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");

    Ok(())
}

#[derive(Tabled)]
struct BranchRow {
    #[tabled(rename = "BRANCH")]
    branch: String,
    #[tabled(rename = "TENANTS")]
    tenants: String,
    #[tabled(rename = "REVENUE")]
    revenue: String,
}

/// Show revenue per branch in dataset order
fn cmd_branches(cfg_dir: &Path, locale: Option<String>) -> Result<()> {
    let (settings, shell) = load_shell(cfg_dir)?;
    let locale = pick_locale(locale, &settings)?;

    let rows: Vec<BranchRow> = chart::branch_performance(&shell.data().branch_performance, locale)
        .into_iter()
        .map(|point| BranchRow {
            branch: point.label,
            tenants: format_number(point.tenant_count as f64, locale),
            revenue: point.display,
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");

    Ok(())
}

#[derive(Tabled)]
struct FormulaRow {
    #[tabled(rename = "METRIC")]
    label: String,
    #[tabled(rename = "FORMULA")]
    formula: String,
}

/// List the metric definitions
fn cmd_formulas(cfg_dir: &Path, locale: Option<String>) -> Result<()> {
    let settings = load_settings(cfg_dir)?;
    let glossary = FormulaGlossary::new(pick_locale(locale, &settings)?);

    let rows: Vec<FormulaRow> = glossary
        .entries
        .iter()
        .map(|entry| FormulaRow {
            label: entry.label.to_string(),
            formula: entry.formula.to_string(),
        })
        .collect();

    println!("{}", glossary.title);
    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");

    Ok(())
}

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "EXPENSE")]
    label: String,
    #[tabled(rename = "AMOUNT")]
    amount: String,
}

/// List secondary expenses with their total
fn cmd_expenses(cfg_dir: &Path, locale: Option<String>) -> Result<()> {
    let (settings, shell) = load_shell(cfg_dir)?;
    let locale = pick_locale(locale, &settings)?;
    let detail = ExpenseDetail::build(&shell.data().secondary_expenses, locale);

    if detail.lines.is_empty() {
        println!("No secondary expenses recorded.");
        return Ok(());
    }

    let rows: Vec<ExpenseRow> = detail
        .lines
        .iter()
        .map(|line| ExpenseRow {
            label: line.label.clone(),
            amount: line.display.clone(),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");
    println!("{}: {}", detail.total_label, detail.total_display);

    Ok(())
}

/// Run the dataset checks and list what they found
fn cmd_validate(cfg_dir: &Path) -> Result<()> {
    let settings = load_settings(cfg_dir)?;
    let provider = provider_for(&settings, cfg_dir);
    let data = provider.load()?;
    let findings = validate(&data);

    println!("Checked {}", provider.describe());
    if findings.is_empty() {
        println!("No issues found.");
    } else {
        for finding in &findings {
            println!("  - {finding}");
        }
        println!("{} issue(s) found.", findings.len());
    }

    Ok(())
}

/// Print the page model for one locale as JSON
fn cmd_model(cfg_dir: &Path, locale: Option<String>, theme: Option<String>) -> Result<()> {
    let (settings, mut shell) = load_shell(cfg_dir)?;
    shell.set_locale(pick_locale(locale, &settings)?);
    if let Some(theme) = theme {
        shell.set_theme(theme.parse()?);
    }

    let json = serde_json::to_string_pretty(&shell.page())?;
    println!("{json}");

    Ok(())
}

/// Hand the page to the desktop's default browser without waiting on it
fn open_path(path: &Path) -> Result<()> {
    let launcher = if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "explorer"
    } else {
        "xdg-open"
    };

    let child = Command::new(launcher).arg(path).spawn()?;
    log::debug!("launched viewer (pid {}) for {}", child.id(), path.display());
    Ok(())
}
