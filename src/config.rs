//! Converter configuration.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::fetch::DEFAULT_TIMEOUT_SECS;
use crate::{Error, Result};

/// Default output path for the block list.
pub const DEFAULT_OUT_BLOCK: &str = "rules/adguard_block.yaml";

/// Default output path for the allow list.
pub const DEFAULT_OUT_ALLOW: &str = "rules/adguard_allow.yaml";

/// Default repository reference written into headers.
pub const DEFAULT_REPO: &str = "https://github.com/AyraHikari/openclash_adguard";

/// Settings for one conversion run.
///
/// Can be loaded from YAML; every key is optional:
///
/// ```yaml
/// sources:
///   - https://adguardteam.github.io/AdGuardSDNSFilter/Filters/filter.txt
/// out-block: rules/adguard_block.yaml
/// out-allow: rules/adguard_allow.yaml
/// repo: https://github.com/AyraHikari/openclash_adguard
/// timeout-secs: 60
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConverterConfig {
    /// Source list URLs, processed in order
    pub sources: Vec<String>,
    /// Block rule file path
    pub out_block: PathBuf,
    /// Allow rule file path
    pub out_allow: PathBuf,
    /// Repository reference for the header
    pub repo: String,
    /// Per-request download timeout
    pub timeout_secs: u64,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            out_block: PathBuf::from(DEFAULT_OUT_BLOCK),
            out_allow: PathBuf::from(DEFAULT_OUT_ALLOW),
            repo: DEFAULT_REPO.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ConverterConfig {
    /// Create a config with defaults and the given sources.
    pub fn with_sources<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sources: sources.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Parse a config from YAML content.
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document deserializes as null rather than an empty map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load a config from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("cannot read config file {:?}: {}", path, e))
        })?;
        Self::from_yaml(&content)
    }

    /// Check that the config can drive a run.
    pub fn validate(&self) -> Result<()> {
        if self.sources.is_empty() {
            return Err(Error::Config(
                "at least one source URL is required".to_string(),
            ));
        }
        if self.sources.iter().any(|s| s.trim().is_empty()) {
            return Err(Error::Config("source URL must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(Error::Config("timeout must be greater than zero".to_string()));
        }
        if self.out_block == self.out_allow {
            return Err(Error::Config(format!(
                "block and allow outputs must differ: {:?}",
                self.out_block
            )));
        }
        Ok(())
    }
}
