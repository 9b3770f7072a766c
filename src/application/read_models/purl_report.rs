//! Purl report read model

/// Everything a formatter needs to render one invocation's results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurlReport {
    pub metadata: ReportMetadataView,
    /// One section per advisory (isolated mode) or a single combined section
    pub sections: Vec<SectionView>,
    /// Distinct purls over all sections, in first-seen order
    pub all_purls: Vec<String>,
}

impl PurlReport {
    pub fn is_empty(&self) -> bool {
        self.all_purls.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportMetadataView {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub source: String,
    /// Products with at least one purl
    pub products: Vec<ProductView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductView {
    pub product_id: String,
    pub purls: Vec<String>,
}
