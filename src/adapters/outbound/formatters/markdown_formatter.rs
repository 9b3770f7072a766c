use crate::application::read_models::{PurlReport, SectionView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for purl listings
const TABLE_HEADER: &str = "| Product ID | # | Package URL |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|------------|---|-------------|\n";

/// MarkdownFormatter adapter rendering one table per advisory section
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Purls go in code spans so that `@` and `#` render literally
    ///
    /// The fence is one backtick longer than the longest backtick run in the
    /// value, so the value itself is never altered.
    fn code_span(text: &str) -> String {
        let content = Self::escape_markdown_table_cell(text);
        let longest_run = content
            .split(|c| c != '`')
            .map(str::len)
            .max()
            .unwrap_or(0);
        let fence = "`".repeat(longest_run + 1);

        if content.starts_with('`') || content.ends_with('`') {
            format!("{fence} {content} {fence}")
        } else {
            format!("{fence}{content}{fence}")
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, report: &PurlReport) {
        output.push_str("# Package URLs by Product\n\n");
        output.push_str(&format!(
            "Generated by {} {} at {}.\n\n",
            report.metadata.tool_name, report.metadata.tool_version, report.metadata.timestamp
        ));
    }

    fn render_section(&self, output: &mut String, section: &SectionView) {
        output.push_str(&format!(
            "## {}\n\n",
            Self::escape_markdown_table_cell(&section.source)
        ));

        if section.products.is_empty() {
            output.push_str("_No package URLs found for the tracked products._\n\n");
            return;
        }

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for product in &section.products {
            let product_id = Self::escape_markdown_table_cell(&product.product_id);
            for (idx, purl) in product.purls.iter().enumerate() {
                output.push_str(&format!(
                    "| {} | {} | {} |\n",
                    product_id,
                    idx + 1,
                    Self::code_span(purl)
                ));
            }
        }
        output.push('\n');
    }

    fn render_summary(&self, output: &mut String, report: &PurlReport) {
        output.push_str("## Summary\n\n");
        output.push_str(&format!(
            "{} distinct package URL(s) found.\n",
            report.all_purls.len()
        ));
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &PurlReport) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, report);
        for section in &report.sections {
            self.render_section(&mut output, section);
        }
        self.render_summary(&mut output, report);

        Ok(output)
    }
}
