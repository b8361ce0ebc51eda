//! Merge configuration file handling
//!
//! A `MergeConfig` extends (or replaces) the built-in conflict-bucket table:
//!
//! ```toml
//! replace_defaults = false
//!
//! [[rule]]
//! prefix = "tab-size"
//! bucket = "tab-size"
//! value = "number"
//!
//! [[rule]]
//! prefix = "text"
//! bucket = "text-shadow"
//! value = { keyword = ["shadow-sm", "shadow-lg"] }
//!
//! [overrides]
//! inset = ["inset-x", "inset-y"]
//! ```

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bucket::{BucketRule, BucketTable};
use crate::error::ConfigError;
use crate::merge::ClassMerger;

/// Conflict-bucket configuration (usually `arkae-merge.toml`)
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct MergeConfig {
    /// Start from an empty table instead of the built-in one
    #[serde(default)]
    pub replace_defaults: bool,
    /// Class prefix (e.g. `tw-`) every classified utility carries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Extra rules, tried before built-in rules of the same prefix
    #[serde(default, rename = "rule")]
    pub rules: Vec<BucketRule>,
    /// Extra bucket → overridden buckets entries
    #[serde(default)]
    pub overrides: IndexMap<String, Vec<String>>,
}

impl MergeConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(
            path = %path.display(),
            rules = config.rules.len(),
            overrides = config.overrides.len(),
            replace_defaults = config.replace_defaults,
            "merge config loaded"
        );
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Build the bucket table this configuration describes
    pub fn build_table(&self) -> Result<BucketTable, ConfigError> {
        BucketTable::from_config(self)
    }

    /// Build a merger over [`build_table`](Self::build_table)
    pub fn build_merger(&self) -> Result<ClassMerger, ConfigError> {
        Ok(ClassMerger::new(self.build_table()?))
    }
}

impl BucketTable {
    pub fn from_config(config: &MergeConfig) -> Result<Self, ConfigError> {
        let mut rules = config.rules.clone();
        let mut overrides = IndexMap::new();
        if !config.replace_defaults {
            let builtin = BucketTable::builtin();
            rules.extend_from_slice(builtin.rules());
            overrides = builtin.overrides().clone();
        }

        for (bucket, targets) in &config.overrides {
            let entry = overrides.entry(bucket.clone()).or_default();
            for target in targets {
                if !entry.contains(target) {
                    entry.push(target.clone());
                }
            }
        }

        let table = BucketTable::new(rules, overrides)?;
        Ok(match &config.prefix {
            Some(prefix) => table.with_class_prefix(prefix.clone()),
            None => table,
        })
    }
}
