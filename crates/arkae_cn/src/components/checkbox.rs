//! Checkbox with a check indicator and optional label

use std::sync::OnceLock;

use arkae_variants::{Selection, VariantSchema};

use super::{toggle_container, toggle_state, ToggleVariant};
use crate::element::StyledElement;
use crate::error::Result;
use crate::styled::{impl_passthrough, Passthrough, Styled};

static SCHEMA: OnceLock<VariantSchema> = OnceLock::new();

pub fn try_schema() -> arkae_variants::Result<VariantSchema> {
    VariantSchema::builder("checkbox")
        .base("inline-flex h-5 w-5 items-center justify-center")
        .base("rounded border-2")
        .base("transition-all duration-base")
        .base(
            "focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-offset-2 \
             focus-visible:ring-primary-500",
        )
        .base("data-[disabled]:cursor-not-allowed data-[disabled]:opacity-50")
        .variant("variant", |g| {
            g.option(
                "primary",
                "border-primary-600 data-[checked]:bg-primary-600 \
                 data-[checked]:border-primary-600 hover:border-primary-700",
            )
            .option(
                "secondary",
                "border-secondary-600 data-[checked]:bg-secondary-600 \
                 data-[checked]:border-secondary-600 hover:border-secondary-700",
            )
        })
        .default("variant", "primary")
        .build()
}

pub fn schema() -> &'static VariantSchema {
    SCHEMA.get_or_init(|| try_schema().expect("checkbox schema is invalid"))
}

#[derive(Clone, Debug, Default)]
pub struct Checkbox {
    variant: ToggleVariant,
    checked: bool,
    disabled: bool,
    label: Option<String>,
    passthrough: Passthrough,
}

impl_passthrough!(Checkbox);

impl Checkbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: ToggleVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn render(&self) -> Result<StyledElement> {
        let mut root = StyledElement::new("root", self.class_name()?)
            .attr("role", "checkbox")
            .attrs(&self.passthrough.attrs);
        root = toggle_state(root, self.checked, self.disabled);

        // the indicator is only mounted while checked
        if self.checked {
            root = root.child(
                StyledElement::new("indicator", "text-white")
                    .child(StyledElement::new("checkmark", "h-3.5 w-3.5").attr("aria-hidden", "true")),
            );
        }
        Ok(toggle_container(root, self.label.as_deref()))
    }
}

impl Styled for Checkbox {
    fn schema(&self) -> &'static VariantSchema {
        schema()
    }

    fn selection(&self) -> Selection {
        Selection::new().with("variant", self.variant.id())
    }

    fn override_class(&self) -> Option<&str> {
        self.passthrough.class.as_deref()
    }
}

pub fn checkbox() -> Checkbox {
    Checkbox::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styled::PassthroughExt;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unchecked_has_no_indicator() {
        let container = checkbox().render().unwrap();
        assert_eq!(container.part, "container");
        assert_eq!(container.class_name, "inline-flex items-center gap-2");

        let root = container.find("root").unwrap();
        assert_eq!(root.get_attr("aria-checked"), Some("false"));
        assert_eq!(root.get_attr("data-unchecked"), Some(""));
        assert!(root.find("indicator").is_none());
        assert!(container.find("label").is_none());
    }

    #[test]
    fn test_checked_with_label() {
        let container = checkbox()
            .checked(true)
            .label("Accept terms")
            .render()
            .unwrap();
        assert_eq!(container.parts(), ["container", "root", "indicator", "checkmark", "label"]);
        assert_eq!(
            container.find("label").unwrap().text.as_deref(),
            Some("Accept terms")
        );
        assert_eq!(
            container.find("root").unwrap().get_attr("data-checked"),
            Some("")
        );
    }

    #[test]
    fn test_secondary_variant_and_override() {
        let container = checkbox()
            .variant(ToggleVariant::Secondary)
            .disabled(true)
            .class("rounded-md")
            .render()
            .unwrap();
        let root = container.find("root").unwrap();
        assert!(root.has_class("border-secondary-600"));
        assert!(!root.has_class("border-primary-600"));
        assert!(root.has_class("rounded-md"));
        assert!(!root.has_class("rounded"));
        assert_eq!(root.get_attr("data-disabled"), Some(""));
    }
}
