//! Configuration for [`DiskStore`](crate::DiskStore).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse disk store config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where a `DiskStore` puts its files.
///
/// With no `root`, names are used exactly as given (relative names resolve
/// against the process working directory). With a `root`, relative names
/// resolve beneath it; absolute names are never rewritten.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DiskStoreConfig {
    #[serde(default)]
    pub root: Option<PathBuf>,
}

impl DiskStoreConfig {
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// Parse a config from JSON, e.g. `{"root": "/var/lib/cassettes"}`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
