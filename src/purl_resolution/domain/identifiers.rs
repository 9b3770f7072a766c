use crate::shared::error::PurlError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for product ids given on the command line (security limit)
const MAX_PRODUCT_ID_LENGTH: usize = 1024;

/// NewType wrapper for a CSAF product id
///
/// Product ids are opaque: they are only compared for equality and are unique
/// within one advisory at most. Values read from an advisory are taken as-is;
/// `parse` is for ids supplied by a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parses a user-supplied product id, rejecting blank or oversized values
    ///
    /// The value is kept verbatim; surrounding whitespace is part of the id.
    pub fn parse(id: &str) -> Result<Self> {
        if id.trim().is_empty() {
            return Err(PurlError::Validation {
                message: "Product id cannot be empty".to_string(),
            }
            .into());
        }

        if id.len() > MAX_PRODUCT_ID_LENGTH {
            return Err(PurlError::Validation {
                message: format!(
                    "Product id is too long ({} bytes). Maximum allowed: {} bytes",
                    id.len(),
                    MAX_PRODUCT_ID_LENGTH
                ),
            }
            .into());
        }

        Ok(Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// NewType wrapper for a package URL
///
/// Equality is exact string equality; no purl normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Purl(String);

impl Purl {
    pub fn new(purl: impl Into<String>) -> Self {
        Self(purl.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Purl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Purl {
    fn from(purl: &str) -> Self {
        Self::new(purl)
    }
}
