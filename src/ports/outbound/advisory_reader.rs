use crate::purl_resolution::domain::Advisory;
use crate::shared::Result;
use std::path::Path;

/// AdvisoryReader port for loading CSAF advisories
///
/// Implementations turn a source location into the product-tree view of an
/// advisory. No CSAF validation is expected beyond what deserialization does.
pub trait AdvisoryReader {
    /// Reads and deserializes the advisory at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The file fails the input safety checks (symlink, size)
    /// - The content is not a JSON document of the expected shape
    fn read_advisory(&self, path: &Path) -> Result<Advisory>;
}
