/// ProgressReporter port for user feedback while advisories are processed
///
/// All messages are diagnostic: implementations must keep them away from the
/// report output (stdout).
pub trait ProgressReporter {
    /// Reports a status message
    fn report(&self, message: &str);

    /// Reports that item `current` of `total` is being processed
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning; processing continues
    fn report_error(&self, message: &str);

    /// Reports the end of the operation
    fn report_completion(&self, message: &str);
}
