/// Result alias used throughout the crate.
/// Layers attach context with anyhow; user-facing failures are `PurlError` values.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
