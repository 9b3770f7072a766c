use crate::shared::Result;

/// OutputPresenter port for delivering the formatted report
///
/// Abstracts the destination (stdout, file) of the rendered output.
pub trait OutputPresenter {
    /// Writes `content` to the destination
    ///
    /// # Errors
    /// Returns an error if the destination rejects the write, e.g. a missing
    /// parent directory, a symlinked output path or an I/O failure
    fn present(&self, content: &str) -> Result<()>;
}
