//! Top-level report state: dataset, active locale, theme and open modal.

use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::data::{validate, DataProvider, ReportData};
use crate::error::Result;
use crate::locale::Locale;
use crate::modal::{ModalController, ModalKind};
use crate::theme::Theme;
use crate::view::page::{PageOptions, DEFAULT_FILE_STEM};
use crate::view::{HtmlRenderer, ReportPage};

pub struct AppShell {
    data: ReportData,
    locale: Locale,
    theme: Theme,
    modals: ModalController,
    generated_on: Option<NaiveDate>,
}

impl AppShell {
    pub fn new(data: ReportData, settings: &Settings) -> Self {
        Self {
            data,
            locale: settings.report.default_locale,
            theme: settings.report.theme,
            modals: ModalController::new(),
            generated_on: None,
        }
    }

    /// Load the dataset once and check it. Findings are logged, never fatal.
    pub fn from_provider(provider: &dyn DataProvider, settings: &Settings) -> Result<Self> {
        log::info!("loading {}", provider.describe());
        let data = provider.load()?;
        for finding in validate(&data) {
            log::warn!("dataset: {finding}");
        }
        Ok(Self::new(data, settings))
    }

    pub fn with_generated_on(mut self, date: NaiveDate) -> Self {
        self.generated_on = Some(date);
        self
    }

    pub fn data(&self) -> &ReportData {
        &self.data
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn toggle_locale(&mut self) -> Locale {
        self.locale = self.locale.toggled();
        self.locale
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn open_modal(&mut self, kind: ModalKind) {
        self.modals.open(kind);
    }

    pub fn close_modal(&mut self) {
        self.modals.close();
    }

    pub fn active_modal(&self) -> Option<ModalKind> {
        self.modals.active()
    }

    /// Page model for the current state.
    pub fn page(&self) -> ReportPage {
        self.page_for(self.locale)
    }

    fn page_for(&self, locale: Locale) -> ReportPage {
        let options = PageOptions {
            theme: self.theme,
            active_modal: self.modals.active(),
            generated_on: self.generated_on,
            file_stem: DEFAULT_FILE_STEM.to_string(),
        };
        ReportPage::build(&self.data, locale, &options)
    }

    pub fn render(&self) -> Result<String> {
        HtmlRenderer::new()?.render(&self.page())
    }

    /// File name of the page for the current locale.
    pub fn file_name(&self) -> String {
        self.locale.page_file_name(DEFAULT_FILE_STEM)
    }

    /// Write one page per locale into `out_dir`. Each page's language toggle
    /// links to a sibling written here, so the pair is always complete.
    pub fn write_pages(&self, out_dir: &Path) -> Result<Vec<(Locale, PathBuf)>> {
        fs::create_dir_all(out_dir)?;
        let renderer = HtmlRenderer::new()?;

        let mut written = Vec::with_capacity(Locale::ALL.len());
        for locale in Locale::ALL {
            let path = out_dir.join(locale.page_file_name(DEFAULT_FILE_STEM));
            fs::write(&path, renderer.render(&self.page_for(locale))?)?;
            log::info!("wrote {}", path.display());
            written.push((locale, path));
        }

        Ok(written)
    }
}
