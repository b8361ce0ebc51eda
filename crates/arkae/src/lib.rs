//! Arkae Design System
//!
//! One import for the whole stack:
//!
//! - [`tokens`]: immutable design-token scales and light/dark semantic maps
//! - [`variants`]: variant schemas, resolution and conflict-aware class merging
//! - [`components`]: styled component parts built on both
//!
//! # Example
//!
//! ```
//! use arkae::prelude::*;
//!
//! arkae::validate().unwrap();
//!
//! let button = cn::button("Continue")
//!     .size(ButtonSize::Sm)
//!     .class("px-5")
//!     .render()
//!     .unwrap();
//! assert!(button.has_class("px-5"));
//! assert!(!button.has_class("px-3"));
//!
//! assert_eq!(merge_str("p-2 text-sm p-4"), "text-sm p-4");
//! ```

mod error;

use std::path::Path;

use tracing::debug;

pub use error::{ArkaeError, Result};

pub use arkae_cn as components;
pub use arkae_tokens as tokens;
pub use arkae_variants as variants;

pub use arkae_variants::cn;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build the built-in token store, bucket table and component schemas,
/// returning the first inconsistency instead of panicking on first use
pub fn validate() -> Result<()> {
    let store = arkae_tokens::TokenStore::try_builtin()?;
    arkae_variants::MergeConfig::default().build_table()?;
    arkae_cn::validate_builtin_schemas()?;
    debug!(scales = store.scales().count(), "validated built-in tables");
    Ok(())
}

/// Class merger over the built-in rules extended by a TOML config file
pub fn load_merger(path: impl AsRef<Path>) -> Result<arkae_variants::ClassMerger> {
    let config = arkae_variants::MergeConfig::load(path)?;
    Ok(config.build_merger()?)
}

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::error::{ArkaeError, Result};

    // Tokens
    pub use arkae_tokens::{ColorScheme, TokenStore};

    // Variants and merging
    pub use arkae_variants::{
        cn, merge, merge_str, resolve, ClassList, ClassMerger, CompoundVariant, MergeConfig,
        Selection, VariantSchema,
    };

    // Components
    pub use arkae_cn::prelude::*;
}
