//! Variant schemas
//!
//! A schema is plain data: base classes, ordered variant groups, ordered
//! compound variants and default selections. It is validated once when built
//! and immutable afterwards, so one schema can be shared by every render.

use std::fmt;

use indexmap::IndexMap;
use tracing::debug;

use crate::class_list::ClassList;
use crate::error::{Result, VariantError};
use crate::resolve::{self, EffectiveSelection};

/// Value selected for a variant group
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum OptionValue {
    Named(String),
    Bool(bool),
}

impl OptionValue {
    /// Option name this value selects (`true`/`false` for booleans)
    pub fn key(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::Bool(true) => "true",
            Self::Bool(false) => "false",
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl From<&str> for OptionValue {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Caller-supplied group → option map; any subset of groups may be present
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    values: IndexMap<String, OptionValue>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, group: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.set(group, value);
        self
    }

    /// Set `group` only when `value` is present
    pub fn with_opt<V: Into<OptionValue>>(self, group: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(group, value),
            None => self,
        }
    }

    pub fn set(&mut self, group: impl Into<String>, value: impl Into<OptionValue>) {
        self.values.insert(group.into(), value.into());
    }

    pub fn get(&self, group: &str) -> Option<&OptionValue> {
        self.values.get(group)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<G, V> FromIterator<(G, V)> for Selection
where
    G: Into<String>,
    V: Into<OptionValue>,
{
    fn from_iter<I: IntoIterator<Item = (G, V)>>(iter: I) -> Self {
        let mut selection = Self::new();
        for (group, value) in iter {
            selection.set(group, value);
        }
        selection
    }
}

/// A named axis of mutually exclusive options
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantGroup {
    name: String,
    options: IndexMap<String, ClassList>,
}

impl VariantGroup {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn option(&self, name: &str) -> Option<&ClassList> {
        self.options.get(name)
    }

    pub fn options(&self) -> impl Iterator<Item = (&str, &ClassList)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Option names are a subset of `{"true", "false"}`
    pub fn is_boolean(&self) -> bool {
        self.options.keys().all(|k| k == "true" || k == "false")
    }

    /// Whether `value` is an acceptable selection for this group.
    ///
    /// `Bool(b)` and `Named("true"/"false")` are interchangeable; boolean
    /// groups also accept the value they declare no classes for.
    pub fn accepts(&self, value: &OptionValue) -> bool {
        let key = value.key();
        self.options.contains_key(key)
            || (self.is_boolean() && matches!(key, "true" | "false"))
    }
}

/// Declares the options of one group
#[derive(Debug, Default)]
pub struct GroupBuilder {
    options: Vec<(String, ClassList)>,
}

impl GroupBuilder {
    pub fn option(mut self, name: impl Into<String>, classes: impl Into<ClassList>) -> Self {
        self.options.push((name.into(), classes.into()));
        self
    }

    pub fn when_true(self, classes: impl Into<ClassList>) -> Self {
        self.option("true", classes)
    }

    pub fn when_false(self, classes: impl Into<ClassList>) -> Self {
        self.option("false", classes)
    }
}

/// Test applied to one group of the effective selection
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Condition {
    Is(String),
    OneOf(Vec<String>),
}

impl Condition {
    pub fn holds(&self, value: &str) -> bool {
        match self {
            Self::Is(expected) => expected == value,
            Self::OneOf(options) => options.iter().any(|o| o == value),
        }
    }

    fn options(&self) -> impl Iterator<Item = &str> {
        let options: &[String] = match self {
            Self::Is(option) => std::slice::from_ref(option),
            Self::OneOf(options) => options,
        };
        options.iter().map(String::as_str)
    }
}

/// Classes applied when every condition holds
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompoundVariant {
    conditions: IndexMap<String, Condition>,
    classes: ClassList,
}

impl CompoundVariant {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn when(mut self, group: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        let value = value.into();
        self.conditions
            .insert(group.into(), Condition::Is(value.key().to_string()));
        self
    }

    pub fn when_any<V: Into<OptionValue>>(
        mut self,
        group: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        let options = values
            .into_iter()
            .map(|v| v.into().key().to_string())
            .collect();
        self.conditions
            .insert(group.into(), Condition::OneOf(options));
        self
    }

    pub fn classes(mut self, classes: impl Into<ClassList>) -> Self {
        self.classes = classes.into();
        self
    }

    pub fn conditions(&self) -> impl Iterator<Item = (&str, &Condition)> {
        self.conditions.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn class_list(&self) -> &ClassList {
        &self.classes
    }

    /// True when every condition holds against the effective selection
    pub fn matches(&self, effective: &EffectiveSelection) -> bool {
        self.conditions.iter().all(|(group, condition)| {
            effective
                .get(group)
                .is_some_and(|value| condition.holds(value))
        })
    }
}

/// Immutable, validated variant schema
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantSchema {
    name: String,
    base: ClassList,
    groups: IndexMap<String, VariantGroup>,
    compounds: Vec<CompoundVariant>,
    defaults: IndexMap<String, OptionValue>,
}

impl VariantSchema {
    pub fn builder(name: impl Into<String>) -> VariantSchemaBuilder {
        VariantSchemaBuilder {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base(&self) -> &ClassList {
        &self.base
    }

    pub fn group(&self, name: &str) -> Option<&VariantGroup> {
        self.groups.get(name)
    }

    pub fn groups(&self) -> impl Iterator<Item = &VariantGroup> {
        self.groups.values()
    }

    pub fn compounds(&self) -> &[CompoundVariant] {
        &self.compounds
    }

    pub fn default_value(&self, group: &str) -> Option<&OptionValue> {
        self.defaults.get(group)
    }

    pub fn defaults(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.defaults.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Resolve `selection` into this schema's class list
    pub fn resolve(&self, selection: &Selection) -> Result<ClassList> {
        resolve::resolve(self, selection)
    }

    /// Resolve and render as one space-separated string
    pub fn class_name(&self, selection: &Selection) -> Result<String> {
        Ok(self.resolve(selection)?.to_string())
    }
}

/// Collects schema parts; invariants are checked in [`build`](Self::build)
#[derive(Debug, Default)]
pub struct VariantSchemaBuilder {
    name: String,
    base: ClassList,
    groups: Vec<(String, GroupBuilder)>,
    compounds: Vec<CompoundVariant>,
    defaults: Vec<(String, OptionValue)>,
}

impl VariantSchemaBuilder {
    /// Append base classes (may be called repeatedly)
    pub fn base(mut self, classes: impl Into<ClassList>) -> Self {
        self.base.extend_from(&classes.into());
        self
    }

    pub fn variant(
        mut self,
        group: impl Into<String>,
        options: impl FnOnce(GroupBuilder) -> GroupBuilder,
    ) -> Self {
        self.groups
            .push((group.into(), options(GroupBuilder::default())));
        self
    }

    pub fn compound(mut self, compound: CompoundVariant) -> Self {
        self.compounds.push(compound);
        self
    }

    pub fn default(mut self, group: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.defaults.push((group.into(), value.into()));
        self
    }

    pub fn build(self) -> Result<VariantSchema> {
        let name = self.name;
        let invalid = |reason: String| VariantError::InvalidSchema {
            schema: name.clone(),
            reason,
        };

        let mut groups = IndexMap::with_capacity(self.groups.len());
        for (group_name, builder) in self.groups {
            if groups.contains_key(&group_name) {
                return Err(invalid(format!("variant group `{group_name}` is declared twice")));
            }
            if builder.options.is_empty() {
                return Err(invalid(format!("variant group `{group_name}` has no options")));
            }
            let mut options = IndexMap::with_capacity(builder.options.len());
            for (option, classes) in builder.options {
                if options.contains_key(&option) {
                    return Err(invalid(format!(
                        "option `{option}` is declared twice in group `{group_name}`"
                    )));
                }
                options.insert(option, classes);
            }
            groups.insert(
                group_name.clone(),
                VariantGroup {
                    name: group_name,
                    options,
                },
            );
        }

        let mut defaults = IndexMap::with_capacity(self.defaults.len());
        for (group_name, value) in self.defaults {
            let Some(group) = groups.get(&group_name) else {
                return Err(invalid(format!(
                    "default references unknown variant group `{group_name}`"
                )));
            };
            if !group.accepts(&value) {
                return Err(invalid(format!(
                    "default `{value}` is not an option of group `{group_name}`"
                )));
            }
            if defaults.insert(group_name.clone(), value).is_some() {
                return Err(invalid(format!(
                    "default for group `{group_name}` is declared twice"
                )));
            }
        }

        for (i, compound) in self.compounds.iter().enumerate() {
            if compound.conditions.is_empty() {
                return Err(invalid(format!("compound variant #{i} has no conditions")));
            }
            for (group_name, condition) in compound.conditions() {
                let Some(group) = groups.get(group_name) else {
                    return Err(invalid(format!(
                        "compound variant #{i} references unknown variant group `{group_name}`"
                    )));
                };
                for option in condition.options() {
                    let value = OptionValue::Named(option.to_string());
                    if !group.accepts(&value) {
                        return Err(invalid(format!(
                            "compound variant #{i} references unknown option `{option}` of group `{group_name}`"
                        )));
                    }
                }
            }
        }

        let schema = VariantSchema {
            name: name.clone(),
            base: self.base,
            groups,
            compounds: self.compounds,
            defaults,
        };
        debug!(
            schema = %schema.name,
            groups = schema.groups.len(),
            compounds = schema.compounds.len(),
            defaults = schema.defaults.len(),
            "VariantSchema built"
        );
        Ok(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(err: VariantError) -> String {
        match err {
            VariantError::InvalidSchema { reason, .. } => reason,
            other => panic!("expected InvalidSchema, got {other:?}"),
        }
    }

    #[test]
    fn test_boolean_shaped_groups() {
        let schema = VariantSchema::builder("toggle")
            .variant("fullWidth", |g| g.when_true("w-full"))
            .variant("tone", |g| g.option("true", "a").option("loud", "b"))
            .build()
            .unwrap();
        assert!(schema.group("fullWidth").unwrap().is_boolean());
        assert!(!schema.group("tone").unwrap().is_boolean());
        assert!(schema
            .group("fullWidth")
            .unwrap()
            .accepts(&OptionValue::Bool(false)));
        let tone = schema.group("tone").unwrap();
        assert!(tone.accepts(&OptionValue::Bool(true)));
        assert!(tone.accepts(&"true".into()));
        assert!(!tone.accepts(&OptionValue::Bool(false)));
        assert!(!tone.accepts(&"false".into()));
    }

    #[test]
    fn test_bool_and_named_true_resolve_alike() {
        let schema = VariantSchema::builder("alert")
            .variant("tone", |g| {
                g.option("true", "font-bold").option("loud", "uppercase")
            })
            .build()
            .unwrap();
        let from_bool = schema.resolve(&Selection::new().with("tone", true)).unwrap();
        let from_name = schema.resolve(&Selection::new().with("tone", "true")).unwrap();
        assert_eq!(from_bool, from_name);
        assert_eq!(from_bool.to_string(), "font-bold");
    }

    #[test]
    fn test_default_for_unknown_group_fails() {
        let err = VariantSchema::builder("button")
            .variant("size", |g| g.option("sm", "px-3"))
            .default("variant", "primary")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            VariantError::InvalidSchema {
                schema: "button".into(),
                reason: "default references unknown variant group `variant`".into(),
            }
        );
    }

    #[test]
    fn test_default_for_unknown_option_fails() {
        let err = VariantSchema::builder("button")
            .variant("size", |g| g.option("sm", "px-3"))
            .default("size", "xl")
            .build()
            .unwrap_err();
        assert!(reason(err).contains("`xl`"));
    }

    #[test]
    fn test_boolean_default_accepts_any_bool() {
        let schema = VariantSchema::builder("input")
            .variant("hasError", |g| g.when_true("border-error-500"))
            .default("hasError", false)
            .build()
            .unwrap();
        assert_eq!(
            schema.default_value("hasError"),
            Some(&OptionValue::Bool(false))
        );
    }

    #[test]
    fn test_duplicate_group_fails() {
        let err = VariantSchema::builder("dup")
            .variant("size", |g| g.option("sm", "a"))
            .variant("size", |g| g.option("lg", "b"))
            .build()
            .unwrap_err();
        assert!(reason(err).contains("declared twice"));
    }

    #[test]
    fn test_duplicate_option_and_empty_group_fail() {
        let dup = VariantSchema::builder("dup")
            .variant("size", |g| g.option("sm", "a").option("sm", "b"))
            .build()
            .unwrap_err();
        assert!(reason(dup).contains("option `sm`"));

        let empty = VariantSchema::builder("empty")
            .variant("size", |g| g)
            .build()
            .unwrap_err();
        assert!(reason(empty).contains("no options"));
    }

    #[test]
    fn test_compound_validation() {
        let base = || {
            VariantSchema::builder("c")
                .variant("variant", |g| g.option("primary", "a").option("danger", "b"))
                .variant("size", |g| g.option("sm", "c"))
        };

        let unknown_group = base()
            .compound(CompoundVariant::new().when("tone", "loud").classes("x"))
            .build()
            .unwrap_err();
        assert!(reason(unknown_group).contains("unknown variant group `tone`"));

        let unknown_option = base()
            .compound(
                CompoundVariant::new()
                    .when_any("variant", ["primary", "ghost"])
                    .classes("x"),
            )
            .build()
            .unwrap_err();
        assert!(reason(unknown_option).contains("unknown option `ghost`"));

        let unconditional = base()
            .compound(CompoundVariant::new().classes("x"))
            .build()
            .unwrap_err();
        assert!(reason(unconditional).contains("no conditions"));
    }

    #[test]
    fn test_selection_helpers() {
        let selection = Selection::new()
            .with("variant", "ghost")
            .with("fullWidth", true)
            .with_opt("size", None::<&str>);
        assert_eq!(selection.len(), 2);
        assert_eq!(selection.get("fullWidth").map(OptionValue::key), Some("true"));

        let collected: Selection = [("size", "lg")].into_iter().collect();
        assert_eq!(
            collected.get("size"),
            Some(&OptionValue::Named("lg".into()))
        );
    }
}
