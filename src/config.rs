//! Configuration file support for csaf-purls.
//!
//! Provides YAML-based configuration through `csaf-purls.config.yml` files,
//! including data structures, file loading, validation and merging with the
//! command line.

use anyhow::{bail, Context};
use csaf_purls::application::dto::OutputFormat;
use csaf_purls::purl_resolution::domain::ProductId;
use csaf_purls::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::cli::Args;

pub const CONFIG_FILENAME: &str = "csaf-purls.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub product_ids: Option<Vec<String>>,
    pub isolate_advisories: Option<bool>,
    pub fail_if_empty: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Effective settings after merging the config file with CLI arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub format: OutputFormat,
    pub product_ids: Vec<ProductId>,
    pub isolate_advisories: bool,
    pub fail_if_empty: bool,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes to YAML null, which is a valid (empty) config.
    let config: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref product_ids) = config.product_ids {
        for (i, id) in product_ids.iter().enumerate() {
            if id.trim().is_empty() {
                bail!(
                    "Invalid config: product_ids[{}] must not be empty.\n\n\
                     💡 Hint: Each entry must be a product id from the advisory (e.g., \"CSAFPID-0001\").",
                    i
                );
            }
        }
    }

    if let Some(ref format) = config.format {
        if format.parse::<OutputFormat>().is_err() {
            bail!(
                "Invalid config: unknown format '{}'.\n\n\
                 💡 Hint: Use one of 'text', 'json' or 'markdown'.",
                format
            );
        }
    }

    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

/// Merges CLI arguments over the config file.
///
/// Scalar CLI values win over config values. Boolean flags can only switch a
/// setting on. Product ids from both sources are tracked, config ids first.
pub fn merge_settings(args: &Args, config: Option<ConfigFile>) -> Result<Settings> {
    let config = config.unwrap_or_default();

    let format = match (args.format, config.format.as_deref()) {
        (Some(format), _) => format,
        (None, Some(format)) => format
            .parse::<OutputFormat>()
            .map_err(|e| anyhow::anyhow!(e))?,
        (None, None) => OutputFormat::default(),
    };

    let product_ids = config
        .product_ids
        .unwrap_or_default()
        .iter()
        .chain(args.product_ids.iter())
        .map(|id| ProductId::parse(id))
        .collect::<Result<Vec<_>>>()?;

    Ok(Settings {
        format,
        product_ids,
        isolate_advisories: args.isolate || config.isolate_advisories.unwrap_or(false),
        fail_if_empty: args.fail_if_empty || config.fail_if_empty.unwrap_or(false),
    })
}
