//! Semantic color maps
//!
//! Purpose-named aliases (`background.primary`, `border.focus`, ...) that point
//! at exactly one raw scale entry. One map exists per [`ColorScheme`]; the two
//! maps must carry the same key set, only the referenced entries differ.

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{Result, TokenError};
use crate::tokens::{Palette, BASE_COLOR_SCALE};

/// Appearance mode. Selected by the host application, never computed here.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Reference to a single scale entry
#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize)]
pub struct TokenRef {
    pub scale: Cow<'static, str>,
    pub key: Cow<'static, str>,
}

impl TokenRef {
    pub const fn new(scale: &'static str, key: &'static str) -> Self {
        Self {
            scale: Cow::Borrowed(scale),
            key: Cow::Borrowed(key),
        }
    }

    pub fn palette(palette: Palette, key: &'static str) -> Self {
        Self::new(palette.scale_name(), key)
    }
}

/// Purpose path → scale entry
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SemanticMap {
    entries: IndexMap<Cow<'static, str>, TokenRef>,
}

impl SemanticMap {
    pub fn new<P>(entries: impl IntoIterator<Item = (P, TokenRef)>) -> Result<Self>
    where
        P: Into<Cow<'static, str>>,
    {
        let mut map = IndexMap::new();
        for (path, target) in entries {
            let path = path.into();
            if map.contains_key(&path) {
                return Err(TokenError::DuplicateKey {
                    scale: "semantic".to_string(),
                    key: path.to_string(),
                });
            }
            map.insert(path, target);
        }
        Ok(Self { entries: map })
    }

    pub fn get(&self, path: &str) -> Option<&TokenRef> {
        self.entries.get(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenRef)> {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check that `self` (light) and `other` (dark) declare the same paths
    pub fn check_symmetry(&self, other: &SemanticMap) -> Result<()> {
        let missing_in_dark: Vec<String> = self
            .paths()
            .filter(|p| other.get(p).is_none())
            .map(str::to_string)
            .collect();
        let missing_in_light: Vec<String> = other
            .paths()
            .filter(|p| self.get(p).is_none())
            .map(str::to_string)
            .collect();

        if missing_in_dark.is_empty() && missing_in_light.is_empty() {
            Ok(())
        } else {
            Err(TokenError::AsymmetricSemanticMaps {
                missing_in_dark,
                missing_in_light,
            })
        }
    }
}

const WHITE: TokenRef = TokenRef::new(BASE_COLOR_SCALE, "white");

fn gray(step: &'static str) -> TokenRef {
    TokenRef::palette(Palette::Gray, step)
}

fn primary(step: &'static str) -> TokenRef {
    TokenRef::palette(Palette::Primary, step)
}

/// Shipped light-mode semantic colors
pub fn light() -> Result<SemanticMap> {
    SemanticMap::new([
        ("background.primary", WHITE),
        ("background.secondary", gray("50")),
        ("background.tertiary", gray("100")),
        ("foreground.primary", gray("900")),
        ("foreground.secondary", gray("600")),
        ("foreground.tertiary", gray("500")),
        ("border.primary", gray("200")),
        ("border.secondary", gray("300")),
        ("border.focus", primary("500")),
        ("text.primary", gray("900")),
        ("text.secondary", gray("600")),
        ("text.tertiary", gray("500")),
        ("text.inverse", WHITE),
    ])
}

/// Shipped dark-mode semantic colors
pub fn dark() -> Result<SemanticMap> {
    SemanticMap::new([
        ("background.primary", gray("950")),
        ("background.secondary", gray("900")),
        ("background.tertiary", gray("800")),
        ("foreground.primary", gray("50")),
        ("foreground.secondary", gray("400")),
        ("foreground.tertiary", gray("500")),
        ("border.primary", gray("800")),
        ("border.secondary", gray("700")),
        ("border.focus", primary("400")),
        ("text.primary", gray("50")),
        ("text.secondary", gray("400")),
        ("text.tertiary", gray("500")),
        ("text.inverse", gray("900")),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_maps_are_symmetric() {
        light().unwrap().check_symmetry(&dark().unwrap()).unwrap();
    }

    #[test]
    fn test_asymmetry_reports_both_sides() {
        let light = SemanticMap::new([
            ("background.primary", WHITE),
            ("border.focus", primary("500")),
        ])
        .unwrap();
        let dark = SemanticMap::new([
            ("background.primary", gray("950")),
            ("text.inverse", gray("900")),
        ])
        .unwrap();

        assert_eq!(
            light.check_symmetry(&dark).unwrap_err(),
            TokenError::AsymmetricSemanticMaps {
                missing_in_dark: vec!["border.focus".into()],
                missing_in_light: vec!["text.inverse".into()],
            }
        );
    }

    #[test]
    fn test_scheme_toggle() {
        assert_eq!(ColorScheme::Light.toggle(), ColorScheme::Dark);
        assert_eq!(ColorScheme::Dark.toggle().id(), "light");
    }
}
