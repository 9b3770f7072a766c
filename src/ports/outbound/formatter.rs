use crate::application::read_models::PurlReport;
use crate::shared::Result;

/// ReportFormatter port for rendering a purl report
///
/// One implementation exists per output format (text, JSON, Markdown).
pub trait ReportFormatter {
    /// Renders the report into its final textual form
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &PurlReport) -> Result<String>;
}
