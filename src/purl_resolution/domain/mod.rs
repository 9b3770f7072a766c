pub mod identifiers;
pub mod product_tree;
pub mod report_metadata;

pub use identifiers::{ProductId, Purl};
pub use product_tree::{Advisory, Branch, FullProductName, ProductIdentificationHelper, ProductTree};
pub use report_metadata::ReportMetadata;
