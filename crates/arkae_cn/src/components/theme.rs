//! Theme scope: applies a color scheme to a subtree
//!
//! The scope carries the `dark` class when dark, a `data-theme` attribute and
//! the semantic custom properties of the built-in token store inline.

use arkae_tokens::{ColorScheme, TokenStore};
use arkae_variants::cn;
use tracing::trace;

use crate::element::StyledElement;
use crate::error::Result;
use crate::styled::{impl_passthrough, Passthrough};

#[derive(Clone, Debug, Default)]
pub struct ThemeScope {
    scheme: ColorScheme,
    content: Vec<StyledElement>,
    passthrough: Passthrough,
}

impl_passthrough!(ThemeScope);

impl ThemeScope {
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme,
            ..Default::default()
        }
    }

    pub fn child(mut self, child: StyledElement) -> Self {
        self.content.push(child);
        self
    }

    pub fn render(&self) -> Result<StyledElement> {
        let variables = TokenStore::builtin().css_variables(self.scheme)?;
        let style = variables
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        trace!(scheme = self.scheme.id(), variables = variables.len(), "theme scope");

        let dark = (self.scheme == ColorScheme::Dark).then_some("dark");
        Ok(
            StyledElement::new("root", cn!(dark, self.passthrough.class.as_deref()))
                .attr("data-theme", self.scheme.id())
                .attr("style", style)
                .attrs(&self.passthrough.attrs)
                .children(self.content.iter().cloned()),
        )
    }
}

pub fn theme_scope(scheme: ColorScheme) -> ThemeScope {
    ThemeScope::new(scheme)
}
