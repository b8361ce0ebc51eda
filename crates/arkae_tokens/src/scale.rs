//! Ordered token scales

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{Result, TokenError};

/// A literal design value. Opaque to the rest of the system.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// Hex color, length, duration, easing curve, font stack, ...
    Text(Cow<'static, str>),
    /// Font weight, z-index, ...
    Number(i64),
}

impl TokenValue {
    pub const fn text(value: &'static str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }

    pub const fn number(value: i64) -> Self {
        Self::Number(value)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&'static str> for TokenValue {
    fn from(value: &'static str) -> Self {
        Self::text(value)
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

impl From<i64> for TokenValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

/// An ordered mapping from step key to literal value.
///
/// Keys are unique; declaration order is kept because it carries meaning for
/// color scales (`50` lightest through `950` darkest).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Scale {
    #[serde(skip)]
    name: Cow<'static, str>,
    entries: IndexMap<Cow<'static, str>, TokenValue>,
}

impl Scale {
    /// Build a scale, rejecting duplicate keys
    pub fn new<K, V>(
        name: impl Into<Cow<'static, str>>,
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self>
    where
        K: Into<Cow<'static, str>>,
        V: Into<TokenValue>,
    {
        let name = name.into();
        let mut map = IndexMap::new();
        for (key, value) in entries {
            let key = key.into();
            if map.contains_key(&key) {
                return Err(TokenError::DuplicateKey {
                    scale: name.to_string(),
                    key: key.to_string(),
                });
            }
            map.insert(key, value.into());
        }
        Ok(Self { name, entries: map })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Direct lookup, `UnknownKey` when the step is not declared
    pub fn get(&self, key: &str) -> Result<&TokenValue> {
        self.entries.get(key).ok_or_else(|| TokenError::UnknownKey {
            scale: self.name.to_string(),
            key: key.to_string(),
        })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenValue)> {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_keeps_declaration_order() {
        let scale = Scale::new("radius", [("none", "0px"), ("sm", "0.125rem"), ("lg", "0.5rem")])
            .unwrap();
        let keys: Vec<&str> = scale.keys().collect();
        assert_eq!(keys, vec!["none", "sm", "lg"]);
        assert_eq!(scale.get("sm").unwrap(), &TokenValue::text("0.125rem"));
    }

    #[test]
    fn test_scale_rejects_duplicate_keys() {
        let err = Scale::new("radius", [("sm", "1px"), ("sm", "2px")]).unwrap_err();
        assert_eq!(
            err,
            TokenError::DuplicateKey {
                scale: "radius".into(),
                key: "sm".into()
            }
        );
    }

    #[test]
    fn test_unknown_key_names_scale() {
        let scale = Scale::new("z-index", [("modal", 1400i64)]).unwrap();
        assert_eq!(
            scale.get("toast").unwrap_err(),
            TokenError::UnknownKey {
                scale: "z-index".into(),
                key: "toast".into()
            }
        );
    }

    #[test]
    fn test_values_display_as_literals() {
        assert_eq!(TokenValue::text("250ms").to_string(), "250ms");
        assert_eq!(TokenValue::number(1400).to_string(), "1400");
        assert_eq!(TokenValue::number(600).as_number(), Some(600));
        assert_eq!(TokenValue::number(600).as_str(), None);
    }
}
