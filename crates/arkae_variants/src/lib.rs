//! Arkae style variants
//!
//! The engine that turns a declarative variant schema plus runtime props into
//! one final, de-duplicated utility-class string.
//!
//! # Overview
//!
//! - [`VariantSchema`]: base classes, variant groups, compound variants and
//!   defaults, validated once at construction
//! - [`resolve`]: `(schema, selection) -> ClassList`, order and duplicates preserved
//! - [`merge`] / [`cn!`]: combine class lists so later conflicting utilities win
//! - [`BucketTable`]: the inspectable prefix → conflict-bucket classification,
//!   extendable from TOML through [`MergeConfig`]
//!
//! # Example
//!
//! ```rust
//! use arkae_variants::{cn, CompoundVariant, Selection, VariantSchema};
//!
//! let button = VariantSchema::builder("button")
//!     .base("inline-flex items-center rounded-lg")
//!     .variant("variant", |g| {
//!         g.option("primary", "bg-primary-600 text-white")
//!             .option("danger", "bg-error-600 text-white")
//!     })
//!     .variant("size", |g| g.option("sm", "px-3 py-1.5").option("lg", "px-6 py-3"))
//!     .variant("fullWidth", |g| g.when_true("w-full"))
//!     .compound(
//!         CompoundVariant::new()
//!             .when("variant", "danger")
//!             .when("size", "lg")
//!             .classes("font-semibold"),
//!     )
//!     .default("variant", "primary")
//!     .default("size", "sm")
//!     .build()
//!     .unwrap();
//!
//! let classes = button
//!     .resolve(&Selection::new().with("variant", "danger").with("size", "lg"))
//!     .unwrap();
//! assert_eq!(
//!     classes.to_string(),
//!     "inline-flex items-center rounded-lg bg-error-600 text-white px-6 py-3 font-semibold"
//! );
//!
//! // Caller overrides win over conflicting schema classes
//! assert_eq!(
//!     cn!(classes, "bg-black px-2"),
//!     "inline-flex items-center rounded-lg text-white py-3 font-semibold bg-black px-2"
//! );
//! ```

mod bucket;
mod class_list;
pub mod config;
mod error;
mod merge;
mod parse;
mod resolve;
mod schema;

pub use bucket::{BucketRule, BucketTable, ValueKind};
pub use class_list::{ClassList, ClassSource};
pub use config::MergeConfig;
pub use error::{ConfigError, Result, VariantError};
pub use merge::{merge, merge_str, ClassMerger};
pub use parse::ParsedClass;
pub use resolve::{resolve, EffectiveSelection};
pub use schema::{
    CompoundVariant, Condition, GroupBuilder, OptionValue, Selection, VariantGroup,
    VariantSchema, VariantSchemaBuilder,
};

/// Merge any mix of class sources with the default conflict table.
///
/// Accepts anything implementing [`ClassSource`]: `&str`, `String`,
/// [`ClassList`], `Option<_>` (for conditional classes), slices, arrays and
/// vectors of those. Later arguments take precedence.
///
/// ```rust
/// use arkae_variants::cn;
///
/// let has_icon = true;
/// assert_eq!(
///     cn!("px-4 py-2", has_icon.then_some("pl-10"), None::<&str>, "py-3"),
///     "px-4 pl-10 py-3"
/// );
/// ```
#[macro_export]
macro_rules! cn {
    ($($source:expr),* $(,)?) => {{
        let mut __classes = ::std::string::String::new();
        $(
            $crate::ClassSource::write_classes(&$source, &mut __classes);
        )*
        $crate::merge_str(&__classes)
    }};
}
