//! Variant and merge-config error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a schema or resolving a selection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VariantError {
    /// The schema violates a construction-time invariant
    #[error("invalid variant schema `{schema}`: {reason}")]
    InvalidSchema { schema: String, reason: String },

    /// The selection names a group the schema does not declare
    #[error("schema `{schema}` has no variant group `{group}`")]
    UnknownGroup { schema: String, group: String },

    /// The selection names an option the group does not declare
    #[error("variant group `{group}` of schema `{schema}` has no option `{option}`")]
    UnknownOption {
        schema: String,
        group: String,
        option: String,
    },
}

/// Result type for variant operations
pub type Result<T> = std::result::Result<T, VariantError>;

/// Errors raised while loading a conflict-bucket configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to read merge config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A rule is malformed (empty prefix or bucket, bad keyword list)
    #[error("invalid bucket rule: {0}")]
    InvalidRule(String),

    /// An override names a bucket no rule produces
    #[error("override references unknown bucket `{0}`")]
    UnknownBucket(String),
}
