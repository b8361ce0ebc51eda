//! Error types for the Arkae facade

use thiserror::Error;

/// Any error raised by the Arkae layers
#[derive(Error, Debug)]
pub enum ArkaeError {
    #[error(transparent)]
    Token(#[from] arkae_tokens::TokenError),

    #[error(transparent)]
    Variant(#[from] arkae_variants::VariantError),

    #[error(transparent)]
    Config(#[from] arkae_variants::ConfigError),

    #[error(transparent)]
    Component(#[from] arkae_cn::CnError),
}

/// Result type for Arkae operations
pub type Result<T> = std::result::Result<T, ArkaeError>;
