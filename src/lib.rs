pub mod chart;
pub mod config;
pub mod data;
pub mod error;
pub mod locale;
pub mod modal;
pub mod shell;
pub mod theme;
pub mod view;

pub use config::{ReportSettings, Settings};
pub use data::{DataProvider, ReportData, SampleData, TenantStatus, TomlFile};
pub use error::{ReportError, Result};
pub use locale::Locale;
pub use modal::{ModalController, ModalKind};
pub use shell::AppShell;
pub use theme::Theme;
pub use view::{HtmlRenderer, ReportPage};
