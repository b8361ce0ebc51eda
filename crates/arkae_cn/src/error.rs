//! Component error types

use arkae_tokens::TokenError;
use arkae_variants::VariantError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CnError {
    #[error(transparent)]
    Variant(#[from] VariantError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

/// Result type for component rendering
pub type Result<T> = std::result::Result<T, CnError>;
