//! Read models for presentation
//!
//! View-optimized, string-only structs that formatters consume, so output
//! adapters never touch domain types.

pub mod purl_report;
pub mod purl_report_builder;

pub use purl_report::{ProductView, PurlReport, ReportMetadataView, SectionView};
pub use purl_report_builder::PurlReportBuilder;
