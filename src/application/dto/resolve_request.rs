use crate::purl_resolution::domain::ProductId;
use crate::shared::error::PurlError;
use crate::shared::Result;
use std::path::PathBuf;

/// ResolveRequest - input of the purl resolution use case
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    /// Product ids to track, in report order
    pub product_ids: Vec<ProductId>,
    /// Advisory files to scan, in processing order
    pub advisory_paths: Vec<PathBuf>,
    /// Report each advisory separately instead of one combined result
    pub isolate_advisories: bool,
}

impl ResolveRequest {
    pub fn new(
        product_ids: Vec<ProductId>,
        advisory_paths: Vec<PathBuf>,
        isolate_advisories: bool,
    ) -> Self {
        Self {
            product_ids,
            advisory_paths,
            isolate_advisories,
        }
    }

    pub fn builder() -> ResolveRequestBuilder {
        ResolveRequestBuilder::default()
    }
}

/// Builder for [`ResolveRequest`] that validates the request on `build`
#[derive(Debug, Default)]
pub struct ResolveRequestBuilder {
    product_ids: Vec<ProductId>,
    advisory_paths: Vec<PathBuf>,
    isolate_advisories: bool,
}

impl ResolveRequestBuilder {
    pub fn product_id(mut self, product_id: ProductId) -> Self {
        self.product_ids.push(product_id);
        self
    }

    pub fn product_ids<I>(mut self, product_ids: I) -> Self
    where
        I: IntoIterator<Item = ProductId>,
    {
        self.product_ids.extend(product_ids);
        self
    }

    pub fn advisory_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.advisory_paths.push(path.into());
        self
    }

    pub fn advisory_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.advisory_paths.extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn isolate_advisories(mut self, isolate: bool) -> Self {
        self.isolate_advisories = isolate;
        self
    }

    /// # Errors
    /// Returns a validation error when no product id or no advisory was given
    pub fn build(self) -> Result<ResolveRequest> {
        if self.product_ids.is_empty() {
            return Err(PurlError::Validation {
                message: "At least one product id is required (use --product-id or the config file)"
                    .to_string(),
            }
            .into());
        }

        if self.advisory_paths.is_empty() {
            return Err(PurlError::Validation {
                message: "At least one advisory file is required".to_string(),
            }
            .into());
        }

        Ok(ResolveRequest::new(
            self.product_ids,
            self.advisory_paths,
            self.isolate_advisories,
        ))
    }
}
