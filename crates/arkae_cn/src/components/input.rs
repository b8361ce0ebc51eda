//! Text input with sizes, an error state and optional icons
//!
//! With an icon on either side the input is wrapped in a `relative` wrapper
//! and padded so text clears the icon.

use std::sync::OnceLock;

use arkae_variants::{cn, ClassList, Selection, VariantSchema};

use crate::element::StyledElement;
use crate::error::Result;
use crate::styled::{impl_passthrough, Passthrough, PassthroughExt, Styled};

static SCHEMA: OnceLock<VariantSchema> = OnceLock::new();

const ICON: &str =
    "pointer-events-none absolute top-1/2 -translate-y-1/2 text-semantic-text-tertiary";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InputSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl InputSize {
    pub fn id(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

pub fn try_schema() -> arkae_variants::Result<VariantSchema> {
    VariantSchema::builder("input")
        .base("w-full rounded-lg border")
        .base("bg-semantic-background-primary text-semantic-text-primary")
        .base("placeholder:text-semantic-text-tertiary")
        .base("transition-colors duration-base")
        .base("focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-offset-1")
        .base(
            "data-[disabled]:opacity-50 data-[disabled]:cursor-not-allowed \
             data-[disabled]:bg-semantic-background-secondary",
        )
        .variant("size", |g| {
            g.option("sm", "px-3 py-1.5 text-sm")
                .option("md", "px-4 py-2 text-base")
                .option("lg", "px-4 py-3 text-lg")
        })
        .variant("hasError", |g| {
            g.when_true(
                "border-error-500 focus-visible:border-error-500 focus-visible:ring-error-500",
            )
            .when_false(
                "border-semantic-border-primary focus-visible:border-semantic-border-focus \
                 focus-visible:ring-semantic-border-focus",
            )
        })
        .default("size", "md")
        .default("hasError", false)
        .build()
}

pub fn schema() -> &'static VariantSchema {
    SCHEMA.get_or_init(|| try_schema().expect("input schema is invalid"))
}

/// Input builder
#[derive(Clone, Debug, Default)]
pub struct Input {
    size: InputSize,
    has_error: bool,
    left_icon: Option<String>,
    right_icon: Option<String>,
    wrapper_class: Option<String>,
    passthrough: Passthrough,
}

impl_passthrough!(Input);

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    pub fn has_error(mut self, has_error: bool) -> Self {
        self.has_error = has_error;
        self
    }

    pub fn left_icon(mut self, icon: impl Into<String>) -> Self {
        self.left_icon = Some(icon.into());
        self
    }

    pub fn right_icon(mut self, icon: impl Into<String>) -> Self {
        self.right_icon = Some(icon.into());
        self
    }

    /// Extra classes for the wrapper rendered when icons are present
    pub fn wrapper_class(mut self, class: impl Into<String>) -> Self {
        self.wrapper_class = Some(class.into());
        self
    }

    pub fn placeholder(self, placeholder: impl Into<String>) -> Self {
        self.attr("placeholder", placeholder)
    }

    pub fn render(&self) -> Result<StyledElement> {
        let input = StyledElement::new("input", self.class_name()?).attrs(&self.passthrough.attrs);
        if self.left_icon.is_none() && self.right_icon.is_none() {
            return Ok(input);
        }

        let mut wrapper =
            StyledElement::new("wrapper", cn!("relative", self.wrapper_class.as_deref()));
        if let Some(icon) = &self.left_icon {
            wrapper = wrapper.child(icon_slot("left-icon", "left-3", icon));
        }
        wrapper = wrapper.child(input);
        if let Some(icon) = &self.right_icon {
            wrapper = wrapper.child(icon_slot("right-icon", "right-3", icon));
        }
        Ok(wrapper)
    }
}

impl Styled for Input {
    fn schema(&self) -> &'static VariantSchema {
        schema()
    }

    fn selection(&self) -> Selection {
        Selection::new()
            .with("size", self.size.id())
            .with("hasError", self.has_error)
    }

    fn override_class(&self) -> Option<&str> {
        self.passthrough.class.as_deref()
    }

    fn extra_classes(&self) -> ClassList {
        let mut extra = ClassList::new();
        if self.left_icon.is_some() {
            extra.push("pl-10");
        }
        if self.right_icon.is_some() {
            extra.push("pr-10");
        }
        extra
    }
}

fn icon_slot(part: &'static str, side: &str, icon: &str) -> StyledElement {
    StyledElement::new(part, format!("{ICON} {side}"))
        .attr("aria-hidden", "true")
        .attr("data-icon", icon)
}

pub fn input() -> Input {
    Input::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_state_swaps_border() {
        let ok = input().render().unwrap();
        assert!(ok.has_class("border-semantic-border-primary"));
        assert!(!ok.has_class("border-error-500"));

        let err = input().has_error(true).render().unwrap();
        assert!(err.has_class("border-error-500"));
        assert!(err.has_class("focus-visible:ring-error-500"));
        assert!(!err.has_class("border-semantic-border-primary"));
    }

    #[test]
    fn test_without_icons_input_is_root() {
        let root = input().placeholder("Email").render().unwrap();
        assert_eq!(root.part, "input");
        assert_eq!(root.get_attr("placeholder"), Some("Email"));
    }

    #[test]
    fn test_icons_pad_and_wrap() {
        let root = input()
            .left_icon("search")
            .wrapper_class("w-64")
            .render()
            .unwrap();
        assert_eq!(root.part, "wrapper");
        assert_eq!(root.class_name, "relative w-64");

        let field = root.find("input").unwrap();
        // the left padding refines px-4 instead of replacing it
        assert!(field.has_class("px-4"));
        assert!(field.has_class("pl-10"));
        assert!(!field.has_class("pr-10"));

        let icon = root.find("left-icon").unwrap();
        assert!(icon.has_class("left-3"));
        assert!(icon.has_class("-translate-y-1/2"));
        assert!(root.find("right-icon").is_none());
    }

    #[test]
    fn test_override_beats_icon_padding() {
        let field = input()
            .right_icon("eye")
            .class("px-2")
            .render()
            .unwrap()
            .find("input")
            .cloned()
            .unwrap();
        assert!(field.has_class("px-2"));
        assert!(!field.has_class("pr-10"));
        assert!(!field.has_class("px-4"));
    }
}
