/// Data Transfer Objects for the application layer
mod output_format;
mod resolve_request;
mod resolve_response;

pub use output_format::OutputFormat;
pub use resolve_request::{ResolveRequest, ResolveRequestBuilder};
pub use resolve_response::{AdvisorySection, ProductPurls, ResolveResponse};
