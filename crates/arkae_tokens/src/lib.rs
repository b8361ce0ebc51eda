//! Arkae Design Tokens
//!
//! Immutable token tables for the Arkae design system, plus the semantic
//! light/dark remaps that alias raw scale entries to purpose-based names.
//!
//! # Overview
//!
//! - **Scales**: ordered step → literal mappings (`color.gray`, `spacing`,
//!   `font.size`, `shadow`, `radius`, `duration`, `z-index`, ...)
//! - **Semantic maps**: `background.primary`, `text.secondary`, `border.focus`, ...
//!   resolved per [`ColorScheme`]
//! - **Export**: a single nested, serializable structure for theme-config generators
//!
//! # Quick Start
//!
//! ```rust
//! use arkae_tokens::{ColorScheme, Palette, ColorStep, TokenStore};
//!
//! let tokens = TokenStore::builtin();
//!
//! let brand = tokens.color(Palette::Primary, ColorStep::S600).unwrap();
//! assert_eq!(brand.to_hex(), "#4f46e5");
//!
//! let surface = tokens.semantic(ColorScheme::Dark, "background.primary").unwrap();
//! assert_eq!(surface.to_string(), "#0a0a0a");
//!
//! // Unknown names are errors, never silently defaulted
//! assert!(tokens.get("spacing", "nope").is_err());
//! ```
//!
//! # Tokens
//!
//! Each dimension lives in its own module under [`tokens`] and exposes a typed
//! key enum (e.g. [`ZIndexToken`], [`DurationToken`]) next to its raw table, so
//! callers can choose between typed lookups and string lookups through the
//! [`TokenStore`].

mod color;
mod error;
pub mod export;
mod scale;
pub mod semantic;
mod store;
pub mod tokens;

pub use color::Color;
pub use error::{Result, TokenError};
pub use export::{css_var_reference, CssVariable, TokenExport};
pub use scale::{Scale, TokenValue};
pub use semantic::{ColorScheme, SemanticMap, TokenRef};
pub use store::TokenStore;
pub use tokens::*;
