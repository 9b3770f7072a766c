//! csaf-purls - find the package URLs of products in CSAF advisories
//!
//! Given a list of product ids and one or more CSAF advisories, this library
//! collects every package URL (purl) that the advisories' product trees
//! attach to those ids, deduplicated per id and in document order.
//!
//! # Architecture
//!
//! - **Domain Layer** (`purl_resolution`): the consumed advisory model and the resolver
//! - **Application Layer** (`application`): use case, DTOs, read models, factories
//! - **Ports** (`ports`): interfaces for infrastructure
//! - **Adapters** (`adapters`): file system, console and output format implementations
//! - **Shared** (`shared`): error types, result alias and input safety checks
//!
//! # Example
//!
//! ```no_run
//! use csaf_purls::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = ResolvePurlsUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
//!
//! let request = ResolveRequest::builder()
//!     .product_id(ProductId::parse("CSAFPID-0001")?)
//!     .advisory_path("advisory.json")
//!     .build()?;
//! let response = use_case.execute(request)?;
//!
//! let report = PurlReportBuilder::build(&response, &MetadataGenerator::generate_default_metadata());
//! println!("{}", TextFormatter::new().format(&report)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod purl_resolution;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, TextFormatter,
    };
    pub use crate::application::dto::{
        AdvisorySection, OutputFormat, ProductPurls, ResolveRequest, ResolveResponse,
    };
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::read_models::{PurlReport, PurlReportBuilder};
    pub use crate::application::use_cases::ResolvePurlsUseCase;
    pub use crate::ports::outbound::{
        AdvisoryReader, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::purl_resolution::domain::{
        Advisory, Branch, FullProductName, ProductId, ProductIdentificationHelper, ProductTree,
        Purl, ReportMetadata,
    };
    pub use crate::purl_resolution::services::{MetadataGenerator, PurlResolver, ResolverState};
    pub use crate::shared::Result;
}
