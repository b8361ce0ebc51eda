//! The token store
//!
//! A read-only collection of scales plus the light/dark semantic maps. The
//! built-in store is constructed once per process and shared by reference.

use std::sync::OnceLock;

use indexmap::IndexMap;
use tracing::debug;

use crate::color::Color;
use crate::error::{Result, TokenError};
use crate::scale::{Scale, TokenValue};
use crate::semantic::{self, ColorScheme, SemanticMap, TokenRef};
use crate::tokens::{builtin_scales, ColorStep, Palette};

/// Global built-in token store
static BUILTIN: OnceLock<TokenStore> = OnceLock::new();

/// Immutable design-token store
#[derive(Clone, Debug)]
pub struct TokenStore {
    scales: IndexMap<String, Scale>,
    light: SemanticMap,
    dark: SemanticMap,
}

impl TokenStore {
    /// Assemble a store.
    ///
    /// Fails when two scales share a name, when the semantic maps do not
    /// declare the same paths, or when a semantic entry points at a scale
    /// entry that does not exist.
    pub fn new(
        scales: impl IntoIterator<Item = Scale>,
        light: SemanticMap,
        dark: SemanticMap,
    ) -> Result<Self> {
        let mut by_name = IndexMap::new();
        for scale in scales {
            let name = scale.name().to_string();
            if by_name.contains_key(&name) {
                return Err(TokenError::DuplicateKey {
                    scale: "store".to_string(),
                    key: name,
                });
            }
            by_name.insert(name, scale);
        }

        light.check_symmetry(&dark)?;

        let store = Self {
            scales: by_name,
            light,
            dark,
        };
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            for (_, target) in store.semantic_map(scheme).iter() {
                store.get(&target.scale, &target.key)?;
            }
        }

        debug!(
            scales = store.scales.len(),
            semantic_paths = store.light.len(),
            "TokenStore built"
        );
        Ok(store)
    }

    /// The shipped Arkae token set
    pub fn builtin() -> &'static TokenStore {
        BUILTIN.get_or_init(|| {
            Self::try_builtin().expect("built-in Arkae token tables are inconsistent")
        })
    }

    /// Build a fresh copy of the shipped token set
    pub fn try_builtin() -> Result<TokenStore> {
        Self::new(builtin_scales()?, semantic::light()?, semantic::dark()?)
    }

    /// Direct lookup of `scale[key]`
    pub fn get(&self, scale: &str, key: &str) -> Result<&TokenValue> {
        self.scale(scale)?.get(key)
    }

    pub fn scale(&self, name: &str) -> Result<&Scale> {
        self.scales
            .get(name)
            .ok_or_else(|| TokenError::UnknownScale(name.to_string()))
    }

    /// All scales in declaration order
    pub fn scales(&self) -> impl Iterator<Item = &Scale> {
        self.scales.values()
    }

    pub fn semantic_map(&self, scheme: ColorScheme) -> &SemanticMap {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }

    /// Resolve a semantic path for the given appearance mode
    pub fn semantic(&self, scheme: ColorScheme, path: &str) -> Result<&TokenValue> {
        let target = self.semantic_ref(scheme, path)?;
        self.get(&target.scale, &target.key)
    }

    pub fn semantic_ref(&self, scheme: ColorScheme, path: &str) -> Result<&TokenRef> {
        self.semantic_map(scheme)
            .get(path)
            .ok_or_else(|| TokenError::UnknownKey {
                scale: format!("semantic.{}", scheme.id()),
                key: path.to_string(),
            })
    }

    /// Typed palette lookup
    pub fn color(&self, palette: Palette, step: ColorStep) -> Result<Color> {
        let value = self.get(palette.scale_name(), step.key())?;
        parse_color(value)
    }

    /// Semantic lookup parsed as a color
    pub fn semantic_color(&self, scheme: ColorScheme, path: &str) -> Result<Color> {
        parse_color(self.semantic(scheme, path)?)
    }

    /// Purpose paths shared by both semantic maps
    pub fn semantic_paths(&self) -> impl Iterator<Item = &str> {
        self.light.paths()
    }

    /// Names of every scale whose keys include `key`
    pub fn scales_with_key(&self, key: &str) -> Vec<&str> {
        self.scales
            .values()
            .filter(|s| s.contains(key))
            .map(|s| s.name())
            .collect()
    }
}

fn parse_color(value: &TokenValue) -> Result<Color> {
    match value.as_str() {
        Some(literal) => Color::parse_hex(literal),
        None => Err(TokenError::InvalidColor(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{DurationToken, ZIndexToken, DURATION_SCALE, Z_INDEX_SCALE};

    #[test]
    fn test_builtin_lookup() {
        let store = TokenStore::builtin();
        assert_eq!(
            store.get(DURATION_SCALE, DurationToken::Base.key()).unwrap(),
            &TokenValue::text("250ms")
        );
        assert_eq!(
            store
                .get(Z_INDEX_SCALE, ZIndexToken::Modal.key())
                .unwrap()
                .as_number(),
            Some(1400)
        );
    }

    #[test]
    fn test_unknown_scale_and_key() {
        let store = TokenStore::builtin();
        assert_eq!(
            store.get("colour.gray", "500").unwrap_err(),
            TokenError::UnknownScale("colour.gray".into())
        );
        assert_eq!(
            store.get("color.gray", "550").unwrap_err(),
            TokenError::UnknownKey {
                scale: "color.gray".into(),
                key: "550".into()
            }
        );
    }

    #[test]
    fn test_semantic_resolution_per_scheme() {
        let store = TokenStore::builtin();
        assert_eq!(
            store
                .semantic_color(ColorScheme::Light, "border.focus")
                .unwrap()
                .to_hex(),
            "#6366f1"
        );
        assert_eq!(
            store
                .semantic_color(ColorScheme::Dark, "border.focus")
                .unwrap()
                .to_hex(),
            "#818cf8"
        );
        assert!(store.semantic(ColorScheme::Dark, "border.glow").is_err());
    }

    #[test]
    fn test_dangling_semantic_reference_is_rejected() {
        let light = SemanticMap::new([("text.primary", TokenRef::new("color.gray", "901"))])
            .unwrap();
        let dark =
            SemanticMap::new([("text.primary", TokenRef::new("color.gray", "50"))]).unwrap();
        let err = TokenStore::new(builtin_scales().unwrap(), light, dark).unwrap_err();
        assert_eq!(
            err,
            TokenError::UnknownKey {
                scale: "color.gray".into(),
                key: "901".into()
            }
        );
    }

    #[test]
    fn test_color_on_numeric_token_fails() {
        let store = TokenStore::builtin();
        let weight = store.get("font.weight", "bold").unwrap();
        assert!(parse_color(weight).is_err());
    }

    #[test]
    fn test_scales_with_key() {
        let store = TokenStore::builtin();
        let with_2xl = store.scales_with_key("2xl");
        assert!(with_2xl.contains(&"shadow"));
        assert!(with_2xl.contains(&"radius"));
        assert!(with_2xl.contains(&"breakpoint"));
        assert!(!with_2xl.contains(&"duration"));
    }
}
