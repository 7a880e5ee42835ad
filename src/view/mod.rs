//! Page model and HTML rendering.
//!
//! [`ReportPage::build`] turns a dataset into a fully formatted, single-locale
//! page model. [`HtmlRenderer`] feeds that model through the embedded
//! templates.

pub mod page;
pub mod render;
pub mod style;
mod templates;

pub use page::{PageOptions, PillTone, ReportPage, Section, SectionKind};
pub use render::HtmlRenderer;
pub use style::{StyleConfig, Theme};
