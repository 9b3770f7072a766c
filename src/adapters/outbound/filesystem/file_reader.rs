use crate::ports::outbound::AdvisoryReader;
use crate::purl_resolution::domain::Advisory;
use crate::shared::error::PurlError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading CSAF advisories from disk
///
/// Implements the AdvisoryReader port. The JSON document is deserialized into
/// the product-tree view; everything outside `product_tree` is ignored.
pub struct FileSystemReader {
    max_file_size: u64,
}

impl FileSystemReader {
    pub fn new() -> Self {
        Self {
            max_file_size: MAX_FILE_SIZE,
        }
    }

    /// Overrides the accepted advisory size in bytes
    pub fn with_max_file_size(max_file_size: u64) -> Self {
        Self { max_file_size }
    }

    /// Reads a file after the safety checks:
    /// - Reject symbolic links
    /// - Validate it is a regular file
    /// - Check the size limit
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        let file_size = validate_regular_file(path, "advisory")?;
        validate_file_size(file_size, path, self.max_file_size)?;

        fs::read_to_string(path).map_err(|e| {
            PurlError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl AdvisoryReader for FileSystemReader {
    fn read_advisory(&self, path: &Path) -> Result<Advisory> {
        if !path.exists() {
            return Err(PurlError::AdvisoryNotFound {
                path: path.to_path_buf(),
                suggestion: "Check the advisory path. Advisory files are passed as positional arguments."
                    .to_string(),
            }
            .into());
        }

        let content = self.safe_read_file(path)?;

        serde_json::from_str(&content).map_err(|e| {
            PurlError::AdvisoryParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
