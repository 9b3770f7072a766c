/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// The application core reads advisories, reports progress, formats
/// reports and presents output only through these traits.
pub mod advisory_reader;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use advisory_reader::AdvisoryReader;
pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
