//! Button component with visual variants, sizes and a loading state
//!
//! # Example
//!
//! ```
//! use arkae_cn::prelude::*;
//!
//! let button = cn::button("Delete")
//!     .variant(ButtonVariant::Danger)
//!     .size(ButtonSize::Lg)
//!     .class("px-8")
//!     .render()
//!     .unwrap();
//!
//! assert!(button.has_class("bg-error-600"));
//! assert!(button.has_class("px-8"));
//! assert!(!button.has_class("px-6"));
//! ```

use std::sync::OnceLock;

use arkae_variants::{Selection, VariantSchema};

use crate::element::StyledElement;
use crate::error::Result;
use crate::styled::{impl_passthrough, Passthrough, Styled};

static SCHEMA: OnceLock<VariantSchema> = OnceLock::new();

const SPINNER: &str = "h-4 w-4 animate-spin";

/// Button visual variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Link,
    Danger,
}

impl ButtonVariant {
    pub fn id(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
            Self::Link => "link",
            Self::Danger => "danger",
        }
    }

    pub fn all() -> &'static [ButtonVariant] {
        &[
            Self::Primary,
            Self::Secondary,
            Self::Ghost,
            Self::Link,
            Self::Danger,
        ]
    }
}

/// Button sizes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub fn id(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

pub fn try_schema() -> arkae_variants::Result<VariantSchema> {
    VariantSchema::builder("button")
        .base("inline-flex items-center justify-center gap-2")
        .base("rounded-lg font-medium")
        .base("transition-all duration-base ease-inOut")
        .base("focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-offset-2")
        .base("disabled:cursor-not-allowed disabled:opacity-50")
        .variant("variant", |g| {
            g.option(
                "primary",
                "bg-primary-600 text-white hover:bg-primary-700 \
                 focus-visible:ring-primary-500 data-[disabled]:bg-primary-300",
            )
            .option(
                "secondary",
                "bg-secondary-600 text-white hover:bg-secondary-700 \
                 focus-visible:ring-secondary-500 data-[disabled]:bg-secondary-300",
            )
            .option(
                "ghost",
                "bg-transparent text-gray-700 hover:bg-gray-100 \
                 focus-visible:ring-gray-300 dark:text-gray-300 dark:hover:bg-gray-800",
            )
            .option(
                "link",
                "bg-transparent text-primary-600 hover:text-primary-700 hover:underline \
                 focus-visible:ring-primary-500 data-[disabled]:text-primary-300",
            )
            .option(
                "danger",
                "bg-error-600 text-white hover:bg-error-700 \
                 focus-visible:ring-error-500 data-[disabled]:bg-error-300",
            )
        })
        .variant("size", |g| {
            g.option("sm", "px-3 py-1.5 text-sm")
                .option("md", "px-4 py-2 text-base")
                .option("lg", "px-6 py-3 text-lg")
        })
        .variant("fullWidth", |g| g.when_true("w-full"))
        .default("variant", "primary")
        .default("size", "md")
        .build()
}

/// Shared button schema
pub fn schema() -> &'static VariantSchema {
    SCHEMA.get_or_init(|| try_schema().expect("button schema is invalid"))
}

/// Button builder
#[derive(Clone, Debug, Default)]
pub struct Button {
    label: String,
    variant: ButtonVariant,
    size: ButtonSize,
    full_width: bool,
    loading: bool,
    disabled: bool,
    left_icon: Option<String>,
    right_icon: Option<String>,
    passthrough: Passthrough,
}

impl_passthrough!(Button);

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Stretch to the container width
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    /// Show a spinner; a loading button is always disabled and hides its icons
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Icon shown before the label
    pub fn left_icon(mut self, icon: impl Into<String>) -> Self {
        self.left_icon = Some(icon.into());
        self
    }

    /// Icon shown after the label
    pub fn right_icon(mut self, icon: impl Into<String>) -> Self {
        self.right_icon = Some(icon.into());
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled || self.loading
    }

    pub fn render(&self) -> Result<StyledElement> {
        let mut root = StyledElement::new("root", self.class_name()?)
            .attr("type", "button")
            .attrs(&self.passthrough.attrs);
        if self.is_disabled() {
            root = root.attr("disabled", "").attr("data-disabled", "");
        }

        if self.loading {
            root = root.attr("aria-busy", "true").child(spinner());
        } else if let Some(icon) = &self.left_icon {
            root = root.child(icon_slot("left-icon", icon));
        }

        root = root.child(StyledElement::new("label", "").text(&self.label));

        if !self.loading {
            if let Some(icon) = &self.right_icon {
                root = root.child(icon_slot("right-icon", icon));
            }
        }
        Ok(root)
    }
}

impl Styled for Button {
    fn schema(&self) -> &'static VariantSchema {
        schema()
    }

    fn selection(&self) -> Selection {
        Selection::new()
            .with("variant", self.variant.id())
            .with("size", self.size.id())
            .with("fullWidth", self.full_width)
    }

    fn override_class(&self) -> Option<&str> {
        self.passthrough.class.as_deref()
    }
}

fn spinner() -> StyledElement {
    StyledElement::new("spinner", SPINNER)
        .attr("aria-hidden", "true")
        .attr("viewBox", "0 0 24 24")
        .child(StyledElement::new("spinner-track", "opacity-25"))
        .child(StyledElement::new("spinner-head", "opacity-75"))
}

fn icon_slot(part: &'static str, icon: &str) -> StyledElement {
    StyledElement::new(part, "")
        .attr("aria-hidden", "true")
        .attr("data-icon", icon)
}

/// Create a button with a text label
pub fn button(label: impl Into<String>) -> Button {
    Button::new(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styled::PassthroughExt;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_button_classes() {
        let class = button("Save").class_name().unwrap();
        assert_eq!(
            class,
            "inline-flex items-center justify-center gap-2 rounded-lg font-medium \
             transition-all duration-base ease-inOut focus-visible:outline-none \
             focus-visible:ring-2 focus-visible:ring-offset-2 disabled:cursor-not-allowed \
             disabled:opacity-50 bg-primary-600 text-white hover:bg-primary-700 \
             focus-visible:ring-primary-500 data-[disabled]:bg-primary-300 px-4 py-2 text-base"
        );
    }

    #[test]
    fn test_full_width_only_when_set() {
        assert!(!button("a").render().unwrap().has_class("w-full"));
        assert!(button("a")
            .full_width(true)
            .render()
            .unwrap()
            .has_class("w-full"));
    }

    #[test]
    fn test_loading_disables_and_hides_icons() {
        let root = button("Saving")
            .left_icon("save")
            .right_icon("chevron")
            .loading(true)
            .render()
            .unwrap();
        assert_eq!(root.get_attr("disabled"), Some(""));
        assert_eq!(root.get_attr("aria-busy"), Some("true"));
        assert_eq!(root.parts()[..2], ["root", "spinner"]);
        assert!(root.find("left-icon").is_none());
        assert!(root.find("right-icon").is_none());
    }

    #[test]
    fn test_icons_surround_label() {
        let root = button("Next")
            .left_icon("arrow-left")
            .right_icon("arrow-right")
            .render()
            .unwrap();
        let parts: Vec<&str> = root.children.iter().map(|c| c.part).collect();
        assert_eq!(parts, ["left-icon", "label", "right-icon"]);
        assert_eq!(
            root.find("left-icon").unwrap().get_attr("data-icon"),
            Some("arrow-left")
        );
    }

    #[test]
    fn test_passthrough_attributes_are_forwarded() {
        let root = button("Go")
            .attr("id", "go")
            .attr("data-testid", "go-button")
            .render()
            .unwrap();
        assert_eq!(root.get_attr("id"), Some("go"));
        assert_eq!(root.get_attr("data-testid"), Some("go-button"));
    }
}
