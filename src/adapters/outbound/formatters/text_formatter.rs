use crate::application::read_models::{PurlReport, SectionView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// TextFormatter adapter for the plain listing
///
/// For every product with results:
///
/// ```text
/// Found URLs for CSAFPID-0001:
/// 1. pkg:generic/example@1.0
/// 2. pkg:generic/example@1.1
/// ```
///
/// Products without purls are omitted. With more than one section each one
/// is introduced by a `== <source> ==` line.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render_section(output: &mut String, section: &SectionView) -> std::fmt::Result {
        for product in &section.products {
            writeln!(output, "Found URLs for {}:", product.product_id)?;
            for (idx, purl) in product.purls.iter().enumerate() {
                writeln!(output, "{}. {}", idx + 1, purl)?;
            }
        }
        Ok(())
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &PurlReport) -> Result<String> {
        let mut output = String::new();
        let with_headers = report.sections.len() > 1;

        for (idx, section) in report.sections.iter().enumerate() {
            if with_headers {
                if idx > 0 {
                    output.push('\n');
                }
                writeln!(output, "== {} ==", section.source)?;
            }
            Self::render_section(&mut output, section)?;
        }

        Ok(output)
    }
}
