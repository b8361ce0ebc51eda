//! Token export for theme-configuration generators
//!
//! The whole store is exposed as one nested, serializable structure: dotted
//! scale names become nested objects (`color.gray` → `{"color":{"gray":{..}}}`)
//! and the semantic maps sit under `semanticColors.light` / `semanticColors.dark`.
//! Semantic colors are also emitted as CSS custom properties, matching the
//! `var(--arkae-*)` references a generated theme config points at.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{Result, TokenError};
use crate::scale::TokenValue;
use crate::semantic::ColorScheme;
use crate::store::TokenStore;

/// Prefix shared by every emitted custom property
pub const CSS_VAR_PREFIX: &str = "arkae";

/// A node in the exported token tree
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExportNode {
    Value(TokenValue),
    Group(IndexMap<String, ExportNode>),
}

impl ExportNode {
    fn group() -> Self {
        Self::Group(IndexMap::new())
    }

    /// Walk (creating as needed) the group at `path`
    fn group_at(&mut self, path: &[&str]) -> Result<&mut IndexMap<String, ExportNode>> {
        let mut node = self;
        for segment in path {
            let ExportNode::Group(children) = node else {
                return Err(TokenError::DuplicateKey {
                    scale: "export".to_string(),
                    key: path.join("."),
                });
            };
            node = children
                .entry((*segment).to_string())
                .or_insert_with(ExportNode::group);
        }
        match node {
            ExportNode::Group(children) => Ok(children),
            ExportNode::Value(_) => Err(TokenError::DuplicateKey {
                scale: "export".to_string(),
                key: path.join("."),
            }),
        }
    }

    /// Look up a nested node by dotted segments
    pub fn pointer(&self, path: &[&str]) -> Option<&ExportNode> {
        let mut node = self;
        for segment in path {
            match node {
                ExportNode::Group(children) => node = children.get(*segment)?,
                ExportNode::Value(_) => return None,
            }
        }
        Some(node)
    }
}

/// Nested, read-only view of a [`TokenStore`]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenExport {
    #[serde(flatten)]
    pub scales: ExportNode,
    pub semantic_colors: IndexMap<&'static str, ExportNode>,
}

impl TokenExport {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_json_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// One CSS custom property declaration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CssVariable {
    pub name: String,
    pub value: String,
}

impl fmt::Display for CssVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.name, self.value)
    }
}

/// Custom-property name for a semantic path (`background.primary` → `--arkae-bg-primary`)
pub fn css_var_name(path: &str) -> String {
    let mut name = format!("--{CSS_VAR_PREFIX}");
    for (i, segment) in path.split('.').enumerate() {
        let segment = match (i, segment) {
            (0, "background") => "bg",
            (0, "foreground") => "fg",
            _ => segment,
        };
        name.push('-');
        name.push_str(segment);
    }
    name
}

/// `var(...)` reference for a semantic path, as used in generated theme configs
pub fn css_var_reference(path: &str) -> String {
    format!("var({})", css_var_name(path))
}

impl TokenStore {
    /// Export every scale and both semantic maps as one nested structure
    pub fn export(&self) -> Result<TokenExport> {
        let mut root = ExportNode::group();
        for scale in self.scales() {
            let path: Vec<&str> = scale.name().split('.').collect();
            let group = root.group_at(&path)?;
            for (key, value) in scale.iter() {
                group.insert(key.to_string(), ExportNode::Value(value.clone()));
            }
        }

        let mut semantic_colors = IndexMap::new();
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            let mut tree = ExportNode::group();
            for path in self.semantic_paths() {
                let segments: Vec<&str> = path.split('.').collect();
                let (leaf, parents) = segments
                    .split_last()
                    .ok_or_else(|| TokenError::UnknownKey {
                        scale: format!("semantic.{}", scheme.id()),
                        key: path.to_string(),
                    })?;
                let value = self.semantic(scheme, path)?.clone();
                tree.group_at(parents)?
                    .insert((*leaf).to_string(), ExportNode::Value(value));
            }
            semantic_colors.insert(scheme.id(), tree);
        }

        Ok(TokenExport {
            scales: root,
            semantic_colors,
        })
    }

    /// Custom properties for every semantic path in `scheme`
    pub fn css_variables(&self, scheme: ColorScheme) -> Result<Vec<CssVariable>> {
        self.semantic_paths()
            .map(|path| {
                Ok(CssVariable {
                    name: css_var_name(path),
                    value: self.semantic(scheme, path)?.to_string(),
                })
            })
            .collect()
    }

    /// Class-based dark mode stylesheet: light values on `:root`, dark on `.dark`
    pub fn css_theme(&self) -> Result<String> {
        let mut css = String::new();
        for (selector, scheme) in [(":root", ColorScheme::Light), (".dark", ColorScheme::Dark)] {
            css.push_str(&format!("{selector} {{\n"));
            for var in self.css_variables(scheme)? {
                css.push_str(&format!("  {var}\n"));
            }
            css.push_str("}\n");
        }
        Ok(css)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_var_names() {
        assert_eq!(css_var_name("background.primary"), "--arkae-bg-primary");
        assert_eq!(css_var_name("foreground.tertiary"), "--arkae-fg-tertiary");
        assert_eq!(css_var_name("border.focus"), "--arkae-border-focus");
        assert_eq!(css_var_reference("text.inverse"), "var(--arkae-text-inverse)");
    }

    #[test]
    fn test_export_nests_dotted_scale_names() {
        let export = TokenStore::builtin().export().unwrap();
        assert_eq!(
            export.scales.pointer(&["color", "primary", "500"]),
            Some(&ExportNode::Value(TokenValue::text("#6366f1")))
        );
        // step keys are never split
        assert_eq!(
            export.scales.pointer(&["spacing", "0.5"]),
            Some(&ExportNode::Value(TokenValue::text("0.125rem")))
        );
    }

    #[test]
    fn test_export_rejects_leaf_group_collision() {
        let mut root = ExportNode::group();
        root.group_at(&["color"])
            .unwrap()
            .insert("gray".into(), ExportNode::Value(TokenValue::text("#737373")));
        assert!(root.group_at(&["color", "gray"]).is_err());
    }

    #[test]
    fn test_css_theme_has_both_blocks() {
        let css = TokenStore::builtin().css_theme().unwrap();
        assert!(css.starts_with(":root {\n  --arkae-bg-primary: #ffffff;"));
        assert!(css.contains(".dark {\n  --arkae-bg-primary: #0a0a0a;"));
        assert!(css.ends_with(";\n}\n"));
        assert_eq!(css.matches("}\n").count(), 2);
    }
}
