use minijinja::Environment;

use super::page::ReportPage;
use super::templates;
use crate::error::Result;

/// Renders [`ReportPage`] models into standalone HTML documents.
///
/// The output carries inline CSS and SVG and needs no scripts or assets.
pub struct HtmlRenderer {
    env: Environment<'static>,
}

impl HtmlRenderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        for &(name, source) in templates::ALL {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    pub fn render(&self, page: &ReportPage) -> Result<String> {
        let template = self.env.get_template(templates::ENTRY)?;
        let html = template.render(page)?;
        log::debug!("rendered {} page ({} bytes)", page.lang, html.len());
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample;
    use crate::locale::Locale;
    use crate::modal::ModalKind;
    use crate::view::page::PageOptions;

    fn render(locale: Locale, options: &PageOptions) -> String {
        let page = ReportPage::build(&sample::december_2025(), locale, options);
        HtmlRenderer::new().unwrap().render(&page).unwrap()
    }

    #[test]
    fn document_root_carries_lang_and_direction() {
        let en = render(Locale::En, &PageOptions::default());
        assert!(en.contains(r#"<html lang="en" dir="ltr">"#));
        let ar = render(Locale::Ar, &PageOptions::default());
        assert!(ar.contains(r#"<html lang="ar" dir="rtl">"#));
        assert!(ar.contains(r#"href="report.en.html""#));
    }

    #[test]
    fn sections_render_in_order() {
        let html = render(Locale::En, &PageOptions::default());
        let positions: Vec<usize> = [
            "hero",
            "roi",
            "spend_efficiency",
            "branch_revenue",
            "allocation",
            "tenants",
        ]
        .iter()
        .map(|kind| {
            html.find(&format!(r#"data-section="{kind}""#))
                .unwrap_or_else(|| panic!("{kind} missing"))
        })
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn active_modal_is_marked_open() {
        let options = PageOptions {
            active_modal: Some(ModalKind::Expenses),
            ..PageOptions::default()
        };
        let html = render(Locale::En, &options);
        assert!(html.contains(r#"id="expenses" class="modal is-open""#));
        assert!(html.contains(r#"id="formulas" class="modal""#));

        let closed = render(Locale::En, &PageOptions::default());
        assert!(!closed.contains("modal is-open"));
    }

    #[test]
    fn modals_open_from_triggers_and_close_back_to_the_report() {
        let backdrop = r##"class="modal-backdrop" href="#report""##;
        let close = r##"class="modal-close" href="#report""##;

        for locale in Locale::ALL {
            let html = render(locale, &PageOptions::default());
            assert!(html.contains(r#"<main id="report">"#));
            assert!(html.contains(r##"href="#formulas""##));
            assert!(html.contains(r##"href="#expenses""##));

            let formulas = html.find(r#"<div id="formulas" class="modal""#).unwrap();
            let expenses = html.find(r#"<div id="expenses" class="modal""#).unwrap();
            assert!(formulas < expenses);
            for modal in [&html[formulas..expenses], &html[expenses..]] {
                assert_eq!(modal.matches(backdrop).count(), 1);
                assert_eq!(modal.matches(close).count(), 1);
            }
        }
    }

    #[test]
    fn text_is_escaped() {
        let mut data = sample::december_2025();
        data.tenants[0].name = "<script>alert(1)</script>".to_string();
        let page = ReportPage::build(&data, Locale::En, &PageOptions::default());
        let html = HtmlRenderer::new().unwrap().render(&page).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn arabic_page_uses_arabic_numerals() {
        let html = render(Locale::Ar, &PageOptions::default());
        assert!(html.contains("٤٥٬٠٠٣٫١٥ ريال"));
        assert!(html.contains("مؤكد"));
    }
}
