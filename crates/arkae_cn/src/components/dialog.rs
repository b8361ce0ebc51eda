//! Modal dialog
//!
//! A closed dialog renders only its root part carrying `data-state="closed"`;
//! an open one adds the backdrop and the sized popup with its content.

use std::sync::OnceLock;

use arkae_variants::{Selection, VariantSchema};

use crate::element::StyledElement;
use crate::error::Result;
use crate::styled::{impl_passthrough, Passthrough, Styled};

static SCHEMA: OnceLock<VariantSchema> = OnceLock::new();

const BACKDROP: &str = "fixed inset-0 z-modal bg-black/50 backdrop-blur-sm \
                        data-[state=open]:animate-in data-[state=closed]:animate-out \
                        data-[state=closed]:fade-out-0 data-[state=open]:fade-in-0";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DialogSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
    Full,
}

impl DialogSize {
    pub fn id(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Full => "full",
        }
    }
}

pub fn try_schema() -> arkae_variants::Result<VariantSchema> {
    VariantSchema::builder("dialog")
        .base("fixed left-[50%] top-[50%] z-modal")
        .base("translate-x-[-50%] translate-y-[-50%]")
        .base("w-full bg-semantic-background-primary")
        .base("rounded-lg shadow-xl")
        .base("data-[state=open]:animate-in data-[state=closed]:animate-out")
        .base("data-[state=closed]:fade-out-0 data-[state=open]:fade-in-0")
        .base("data-[state=closed]:zoom-out-95 data-[state=open]:zoom-in-95")
        .base("max-h-[90vh] overflow-y-auto")
        .variant("size", |g| {
            g.option("sm", "max-w-sm")
                .option("md", "max-w-md")
                .option("lg", "max-w-lg")
                .option("xl", "max-w-xl")
                .option("full", "max-w-full mx-4")
        })
        .default("size", "md")
        .build()
}

pub fn schema() -> &'static VariantSchema {
    SCHEMA.get_or_init(|| try_schema().expect("dialog schema is invalid"))
}

#[derive(Clone, Debug, Default)]
pub struct Dialog {
    open: bool,
    size: DialogSize,
    content: Vec<StyledElement>,
    passthrough: Passthrough,
}

impl_passthrough!(Dialog);

impl Dialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    pub fn size(mut self, size: DialogSize) -> Self {
        self.size = size;
        self
    }

    /// Append rendered content to the popup
    pub fn child(mut self, child: StyledElement) -> Self {
        self.content.push(child);
        self
    }

    pub fn render(&self) -> Result<StyledElement> {
        let state = if self.open { "open" } else { "closed" };
        let root = StyledElement::new("root", "").attr("data-state", state);
        if !self.open {
            return Ok(root);
        }

        let backdrop = StyledElement::new("backdrop", BACKDROP).attr("data-state", state);
        let popup = StyledElement::new("popup", self.class_name()?)
            .attr("role", "dialog")
            .attr("aria-modal", "true")
            .attr("data-state", state)
            .attrs(&self.passthrough.attrs)
            .children(self.content.iter().cloned());
        Ok(root.child(backdrop).child(popup))
    }
}

impl Styled for Dialog {
    fn schema(&self) -> &'static VariantSchema {
        schema()
    }

    fn selection(&self) -> Selection {
        Selection::new().with("size", self.size.id())
    }

    fn override_class(&self) -> Option<&str> {
        self.passthrough.class.as_deref()
    }
}

/// Dialog heading
#[derive(Clone, Debug, Default)]
pub struct DialogTitle {
    text: String,
    passthrough: Passthrough,
}

impl_passthrough!(DialogTitle);

impl DialogTitle {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn render(&self) -> StyledElement {
        StyledElement::new(
            "title",
            self.passthrough
                .merged("text-lg font-semibold text-semantic-text-primary"),
        )
        .attrs(&self.passthrough.attrs)
        .text(&self.text)
    }
}

/// Supporting text under the title
#[derive(Clone, Debug, Default)]
pub struct DialogDescription {
    text: String,
    passthrough: Passthrough,
}

impl_passthrough!(DialogDescription);

impl DialogDescription {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn render(&self) -> StyledElement {
        StyledElement::new(
            "description",
            self.passthrough
                .merged("text-sm text-semantic-text-secondary"),
        )
        .attrs(&self.passthrough.attrs)
        .text(&self.text)
    }
}

pub fn dialog() -> Dialog {
    Dialog::new()
}

pub fn dialog_title(text: impl Into<String>) -> DialogTitle {
    DialogTitle::new(text)
}

pub fn dialog_description(text: impl Into<String>) -> DialogDescription {
    DialogDescription::new(text)
}
