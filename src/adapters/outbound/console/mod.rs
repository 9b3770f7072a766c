/// Console adapters for diagnostics written to stderr
mod progress_reporter;

pub use progress_reporter::StderrProgressReporter;
