//! Styled components
//!
//! Every component renders to a [`StyledElement`] tree. Variant-driven roots
//! implement [`crate::Styled`]; fixed parts merge their classes with the
//! caller's override.

pub mod button;
pub mod checkbox;
pub mod dialog;
pub mod input;
pub mod menu;
pub mod switch;
pub mod tabs;
pub mod theme;
pub mod tooltip;

use crate::element::StyledElement;

/// Label next to a checkbox or switch
const TOGGLE_LABEL: &str = "text-sm font-medium text-semantic-text-primary cursor-pointer select-none";

/// Container around a toggle and its label
const TOGGLE_CONTAINER: &str = "inline-flex items-center gap-2";

/// Color variant shared by checkboxes and switches
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToggleVariant {
    #[default]
    Primary,
    Secondary,
}

impl ToggleVariant {
    pub fn id(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

/// Checked/disabled state attributes for a toggle part
fn toggle_state(element: StyledElement, checked: bool, disabled: bool) -> StyledElement {
    let element = element
        .attr("aria-checked", if checked { "true" } else { "false" })
        .attr(if checked { "data-checked" } else { "data-unchecked" }, "");
    if disabled {
        element.attr("aria-disabled", "true").attr("data-disabled", "")
    } else {
        element
    }
}

/// Wrap a toggle in its container, appending the label when present
fn toggle_container(control: StyledElement, label: Option<&str>) -> StyledElement {
    let container = StyledElement::new("container", TOGGLE_CONTAINER).child(control);
    match label {
        Some(label) => container.child(StyledElement::new("label", TOGGLE_LABEL).text(label)),
        None => container,
    }
}
