use crate::purl_resolution::domain::{ProductId, Purl};
use crate::purl_resolution::services::PurlResolver;

/// Purls found for one tracked product id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductPurls {
    pub product_id: ProductId,
    pub purls: Vec<Purl>,
}

/// Results for one advisory (isolated mode) or for all advisories together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisorySection {
    /// Where the results came from: an advisory path or a combined label
    pub source: String,
    /// Tracked products with at least one purl, in tracked order
    pub products: Vec<ProductPurls>,
}

impl AdvisorySection {
    /// Snapshots the current results of `resolver`
    pub fn from_resolver(source: impl Into<String>, resolver: &PurlResolver) -> Self {
        let products = resolver
            .entries()
            .map(|(product_id, purls)| ProductPurls {
                product_id: product_id.clone(),
                purls: purls.to_vec(),
            })
            .collect();

        Self {
            source: source.into(),
            products,
        }
    }

    /// All purls of the section, product by product
    pub fn purls(&self) -> impl Iterator<Item = &Purl> {
        self.products.iter().flat_map(|product| product.purls.iter())
    }

    pub fn purl_count(&self) -> usize {
        self.products.iter().map(|product| product.purls.len()).sum()
    }
}

/// ResolveResponse - output of the purl resolution use case
#[derive(Debug, Clone)]
pub struct ResolveResponse {
    pub sections: Vec<AdvisorySection>,
    /// Number of advisories that were read
    pub advisories_read: usize,
}

impl ResolveResponse {
    pub fn new(sections: Vec<AdvisorySection>, advisories_read: usize) -> Self {
        Self {
            sections,
            advisories_read,
        }
    }

    pub fn total_purls(&self) -> usize {
        self.sections.iter().map(AdvisorySection::purl_count).sum()
    }

    pub fn has_purls(&self) -> bool {
        self.total_purls() > 0
    }
}
