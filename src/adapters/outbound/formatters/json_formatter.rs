use crate::application::read_models::{PurlReport, SectionView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    metadata: Metadata<'a>,
    advisories: Vec<Advisory<'a>>,
    purls: &'a [String],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Metadata<'a> {
    timestamp: &'a str,
    tool: Tool<'a>,
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Advisory<'a> {
    source: &'a str,
    products: Vec<Product<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Product<'a> {
    product_id: &'a str,
    purls: &'a [String],
}

/// JsonFormatter adapter producing a pretty-printed JSON report
///
/// Layout: `metadata`, `advisories[].products[]` with their purls, and the
/// distinct `purls` over the whole run.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn to_advisory(section: &SectionView) -> Advisory<'_> {
        Advisory {
            source: &section.source,
            products: section
                .products
                .iter()
                .map(|product| Product {
                    product_id: &product.product_id,
                    purls: &product.purls,
                })
                .collect(),
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &PurlReport) -> Result<String> {
        let document = JsonReport {
            metadata: Metadata {
                timestamp: &report.metadata.timestamp,
                tool: Tool {
                    name: &report.metadata.tool_name,
                    version: &report.metadata.tool_version,
                },
            },
            advisories: report.sections.iter().map(Self::to_advisory).collect(),
            purls: &report.all_purls,
        };

        let mut json = serde_json::to_string_pretty(&document)?;
        json.push('\n');
        Ok(json)
    }
}
