//! Token store error types

use thiserror::Error;

/// Errors raised by token lookups and token-set construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// No scale with this name exists in the store
    #[error("unknown token scale `{0}`")]
    UnknownScale(String),

    /// The scale exists but has no entry for this key
    #[error("unknown key `{key}` in token scale `{scale}`")]
    UnknownKey { scale: String, key: String },

    /// A scale (or the store) declares the same key twice
    #[error("duplicate key `{key}` in `{scale}`")]
    DuplicateKey { scale: String, key: String },

    /// Light and dark semantic maps do not share the same key set
    #[error(
        "semantic maps are asymmetric (missing in dark: {missing_in_dark:?}, missing in light: {missing_in_light:?})"
    )]
    AsymmetricSemanticMaps {
        missing_in_dark: Vec<String>,
        missing_in_light: Vec<String>,
    },

    /// A value that should be a hex color could not be parsed
    #[error("invalid color literal `{0}`")]
    InvalidColor(String),
}

/// Result type for token operations
pub type Result<T> = std::result::Result<T, TokenError>;
