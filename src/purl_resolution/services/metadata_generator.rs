use crate::purl_resolution::domain::ReportMetadata;
use chrono::Utc;

/// Name reported as the producing tool
pub const TOOL_NAME: &str = "csaf-purls";

/// MetadataGenerator service for stamping purl reports
pub struct MetadataGenerator;

impl MetadataGenerator {
    /// Generates report metadata with the current UTC time in RFC 3339 format
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> ReportMetadata {
        ReportMetadata::new(
            Utc::now().to_rfc3339(),
            tool_name.to_string(),
            tool_version.to_string(),
        )
    }

    /// Generates metadata for this tool using the compile-time version from Cargo.toml
    pub fn generate_default_metadata() -> ReportMetadata {
        Self::generate_metadata(TOOL_NAME, env!("CARGO_PKG_VERSION"))
    }
}
