mod metadata_generator;
mod purl_resolver;

pub use metadata_generator::MetadataGenerator;
pub use purl_resolver::{PurlResolver, ResolverState, MAX_BRANCH_DEPTH};
