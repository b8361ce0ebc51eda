//! Arkae styled components
//!
//! Accessible widget parts whose class strings come from variant schemas and
//! are merged with caller overrides. Components render to [`StyledElement`]
//! trees; attaching behavior and mounting is left to the host toolkit.
//!
//! # Example
//!
//! ```
//! use arkae_cn::prelude::*;
//!
//! let field = cn::input()
//!     .size(InputSize::Lg)
//!     .has_error(true)
//!     .left_icon("mail")
//!     .render()
//!     .unwrap();
//!
//! let input = field.find("input").unwrap();
//! assert!(input.has_class("border-error-500"));
//! assert!(input.has_class("pl-10"));
//! ```
//!
//! Variant schemas are built lazily. Call [`validate_builtin_schemas`] at
//! startup to surface authoring errors before the first render.

pub mod components;
pub mod element;
pub mod error;
pub mod styled;

use arkae_variants::VariantSchema;
use tracing::debug;

pub use element::StyledElement;
pub use error::{CnError, Result};
pub use styled::{Passthrough, PassthroughExt, Styled};

/// Component constructors, `cn::button("Save")` style
pub mod cn {
    pub use crate::components::button::button;
    pub use crate::components::checkbox::checkbox;
    pub use crate::components::dialog::{dialog, dialog_description, dialog_title};
    pub use crate::components::input::input;
    pub use crate::components::menu::{menu, menu_item, menu_separator};
    pub use crate::components::switch::switch;
    pub use crate::components::tabs::{tab, tab_panel, tabs, tabs_list};
    pub use crate::components::theme::theme_scope;
    pub use crate::components::tooltip::tooltip;
}

/// Every schema shipped with the component set
pub fn builtin_schemas() -> Vec<&'static VariantSchema> {
    use components::*;
    vec![
        button::schema(),
        input::schema(),
        checkbox::schema(),
        switch::schema(),
        dialog::schema(),
    ]
}

/// Build every shipped schema, reporting the first invalid one
pub fn validate_builtin_schemas() -> Result<()> {
    use components::*;
    let schemas = [
        button::try_schema()?,
        input::try_schema()?,
        checkbox::try_schema()?,
        switch::try_schema()?,
        dialog::try_schema()?,
    ];
    debug!(count = schemas.len(), "validated built-in schemas");
    Ok(())
}

pub mod prelude {
    pub use crate::cn;
    pub use crate::components::button::{Button, ButtonSize, ButtonVariant};
    pub use crate::components::checkbox::Checkbox;
    pub use crate::components::dialog::{Dialog, DialogDescription, DialogSize, DialogTitle};
    pub use crate::components::input::{Input, InputSize};
    pub use crate::components::menu::{Menu, MenuItem, MenuSeparator};
    pub use crate::components::switch::Switch;
    pub use crate::components::tabs::{Tab, TabPanel, Tabs, TabsList};
    pub use crate::components::theme::ThemeScope;
    pub use crate::components::tooltip::Tooltip;
    pub use crate::components::ToggleVariant;
    pub use crate::{CnError, PassthroughExt, Styled, StyledElement};
    pub use arkae_tokens::ColorScheme;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_schemas_are_valid() {
        validate_builtin_schemas().unwrap();
        let names: Vec<&str> = builtin_schemas().into_iter().map(|s| s.name()).collect();
        assert_eq!(names, ["button", "input", "checkbox", "switch", "dialog"]);
    }
}
