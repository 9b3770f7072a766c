//! Builder for constructing a PurlReport from use case results

use super::purl_report::{ProductView, PurlReport, ReportMetadataView, SectionView};
use crate::application::dto::{AdvisorySection, ResolveResponse};
use crate::purl_resolution::domain::ReportMetadata;
use std::collections::HashSet;

/// Transforms a [`ResolveResponse`] into the [`PurlReport`] read model
pub struct PurlReportBuilder;

impl PurlReportBuilder {
    pub fn build(response: &ResolveResponse, metadata: &ReportMetadata) -> PurlReport {
        let sections: Vec<SectionView> = response
            .sections
            .iter()
            .map(Self::build_section)
            .collect();
        let all_purls = Self::collect_distinct_purls(&sections);

        PurlReport {
            metadata: Self::build_metadata(metadata),
            sections,
            all_purls,
        }
    }

    fn build_metadata(metadata: &ReportMetadata) -> ReportMetadataView {
        ReportMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
        }
    }

    fn build_section(section: &AdvisorySection) -> SectionView {
        SectionView {
            source: section.source.clone(),
            products: section
                .products
                .iter()
                .map(|product| ProductView {
                    product_id: product.product_id.to_string(),
                    purls: product.purls.iter().map(ToString::to_string).collect(),
                })
                .collect(),
        }
    }

    /// In isolated mode the same purl may show up in several sections;
    /// the flat list keeps the first occurrence only.
    fn collect_distinct_purls(sections: &[SectionView]) -> Vec<String> {
        let mut seen = HashSet::new();
        sections
            .iter()
            .flat_map(|section| section.products.iter())
            .flat_map(|product| product.purls.iter())
            .filter(|purl| seen.insert(purl.as_str()))
            .cloned()
            .collect()
    }
}
