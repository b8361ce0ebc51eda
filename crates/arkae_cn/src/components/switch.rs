//! Toggle switch with a sliding thumb

use std::sync::OnceLock;

use arkae_variants::{Selection, VariantSchema};

use super::{toggle_container, toggle_state, ToggleVariant};
use crate::element::StyledElement;
use crate::error::Result;
use crate::styled::{impl_passthrough, Passthrough, Styled};

static SCHEMA: OnceLock<VariantSchema> = OnceLock::new();

const THUMB: &str = "inline-block h-4 w-4 transform rounded-full bg-white \
                     transition-transform duration-base \
                     data-[checked]:translate-x-6 data-[unchecked]:translate-x-1";

pub fn try_schema() -> arkae_variants::Result<VariantSchema> {
    VariantSchema::builder("switch")
        .base("relative inline-flex h-6 w-11 items-center rounded-full")
        .base("transition-colors duration-base")
        .base(
            "focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-offset-2 \
             focus-visible:ring-primary-500",
        )
        .base("data-[disabled]:cursor-not-allowed data-[disabled]:opacity-50")
        .variant("variant", |g| {
            g.option(
                "primary",
                "data-[checked]:bg-primary-600 data-[unchecked]:bg-gray-200",
            )
            .option(
                "secondary",
                "data-[checked]:bg-secondary-600 data-[unchecked]:bg-gray-200",
            )
        })
        .default("variant", "primary")
        .build()
}

pub fn schema() -> &'static VariantSchema {
    SCHEMA.get_or_init(|| try_schema().expect("switch schema is invalid"))
}

#[derive(Clone, Debug, Default)]
pub struct Switch {
    variant: ToggleVariant,
    checked: bool,
    disabled: bool,
    label: Option<String>,
    passthrough: Passthrough,
}

impl_passthrough!(Switch);

impl Switch {
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
        let root = StyledElement::new("root", self.class_name()?)
            .attr("role", "switch")
            .attrs(&self.passthrough.attrs);
        let root = toggle_state(root, self.checked, self.disabled).child(toggle_state(
            StyledElement::new("thumb", THUMB),
            self.checked,
            self.disabled,
        ));
        Ok(toggle_container(root, self.label.as_deref()))
    }
}

impl Styled for Switch {
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

pub fn switch() -> Switch {
    Switch::new()
}
