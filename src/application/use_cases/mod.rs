/// Use cases orchestrating the resolver with infrastructure ports
mod resolve_purls;

pub use resolve_purls::{ResolvePurlsUseCase, COMBINED_SOURCE_LABEL};
