use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{DemoError, Result};
use crate::variant::Variant;

/// Which factories the demo runs, in order, and how headers are styled.
///
/// ```toml
/// variants = [1, 2]
/// color = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub variants: Vec<Variant>,
    pub color: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            variants: Variant::ALL.to_vec(),
            color: false,
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| {
            DemoError::config(format!("Failed to read {}: {err}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.variants.is_empty() {
            return Err(DemoError::NoVariants);
        }
        Ok(())
    }
}
