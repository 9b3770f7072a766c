//! The subset of a CSAF advisory that purl resolution consumes.
//!
//! Only the product tree is modelled. Every member is optional or defaults to
//! empty so that partial documents deserialize; unknown fields are ignored.
//! Lists that are `null`, and `null` entries inside lists, are read as absent.

use super::{ProductId, Purl};
use serde::{Deserialize, Deserializer, Serialize};

/// Reads a list that may be `null` or hold `null` entries, dropping both
fn nullable_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items: Option<Vec<Option<T>>> = Option::deserialize(deserializer)?;
    Ok(items.unwrap_or_default().into_iter().flatten().collect())
}

/// A CSAF advisory as seen by the resolver
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_tree: Option<ProductTree>,
}

impl Advisory {
    pub fn new(product_tree: Option<ProductTree>) -> Self {
        Self { product_tree }
    }
}

/// `product_tree` section: a flat product list plus a branch forest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductTree {
    #[serde(
        default,
        deserialize_with = "nullable_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub full_product_names: Vec<FullProductName>,
    #[serde(
        default,
        deserialize_with = "nullable_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub branches: Vec<Branch>,
}

impl ProductTree {
    pub fn new(full_product_names: Vec<FullProductName>, branches: Vec<Branch>) -> Self {
        Self {
            full_product_names,
            branches,
        }
    }
}

/// A product node, either in `full_product_names` or attached to a branch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FullProductName {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_identification_helper: Option<ProductIdentificationHelper>,
}

impl FullProductName {
    pub fn new(
        product_id: Option<ProductId>,
        product_identification_helper: Option<ProductIdentificationHelper>,
    ) -> Self {
        Self {
            product_id,
            product_identification_helper,
        }
    }

    /// Product carrying both an id and a helper with a purl
    pub fn with_purl(product_id: impl Into<ProductId>, purl: impl Into<Purl>) -> Self {
        Self::new(
            Some(product_id.into()),
            Some(ProductIdentificationHelper::new(Some(purl.into()))),
        )
    }

    /// The purl of this product, if its helper carries one
    pub fn purl(&self) -> Option<&Purl> {
        self.product_identification_helper
            .as_ref()
            .and_then(|helper| helper.purl.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductIdentificationHelper {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purl: Option<Purl>,
}

impl ProductIdentificationHelper {
    pub fn new(purl: Option<Purl>) -> Self {
        Self { purl }
    }
}

/// A node of the branch forest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<FullProductName>,
    #[serde(
        default,
        deserialize_with = "nullable_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub branches: Vec<Branch>,
}

impl Branch {
    pub fn new(product: Option<FullProductName>, branches: Vec<Branch>) -> Self {
        Self { product, branches }
    }

    pub fn leaf(product: FullProductName) -> Self {
        Self::new(Some(product), Vec::new())
    }
}
