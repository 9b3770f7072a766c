use csaf_purls::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock AdvisoryReader serving advisories parsed from in-memory JSON
#[derive(Default)]
pub struct MockAdvisoryReader {
    pub advisories: HashMap<PathBuf, String>,
    pub should_fail: bool,
}

impl MockAdvisoryReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_advisory(mut self, path: &str, json: &str) -> Self {
        self.advisories.insert(PathBuf::from(path), json.to_string());
        self
    }

    pub fn with_failure() -> Self {
        Self {
            advisories: HashMap::new(),
            should_fail: true,
        }
    }
}

impl AdvisoryReader for MockAdvisoryReader {
    fn read_advisory(&self, path: &Path) -> Result<Advisory> {
        if self.should_fail {
            anyhow::bail!("Mock advisory read failure");
        }

        let json = self
            .advisories
            .get(path)
            .ok_or_else(|| anyhow::anyhow!("Mock advisory not found: {}", path.display()))?;
        Ok(serde_json::from_str(json)?)
    }
}
