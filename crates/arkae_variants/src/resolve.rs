//! Variant resolution
//!
//! `(schema, selection) -> ClassList`:
//!
//! 1. base classes
//! 2. per group, in declaration order, the classes of the effective option
//!    (selection, else default; boolean groups fall back to `false`)
//! 3. every compound variant matching the effective selection, in order
//!
//! Duplicates and order are preserved; merging is a separate step.

use indexmap::IndexMap;
use tracing::trace;

use crate::class_list::ClassList;
use crate::error::{Result, VariantError};
use crate::schema::{Selection, VariantSchema};

/// Group → option name after defaults are applied
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EffectiveSelection<'s> {
    values: IndexMap<&'s str, &'s str>,
}

impl<'s> EffectiveSelection<'s> {
    /// Validate `selection` against `schema` and fill in defaults
    pub fn new(schema: &'s VariantSchema, selection: &'s Selection) -> Result<Self> {
        for (group_name, value) in selection.iter() {
            let group = schema
                .group(group_name)
                .ok_or_else(|| VariantError::UnknownGroup {
                    schema: schema.name().to_string(),
                    group: group_name.to_string(),
                })?;
            if !group.accepts(value) {
                return Err(VariantError::UnknownOption {
                    schema: schema.name().to_string(),
                    group: group_name.to_string(),
                    option: value.key().to_string(),
                });
            }
        }

        let mut values = IndexMap::new();
        for group in schema.groups() {
            let value = selection
                .get(group.name())
                .or_else(|| schema.default_value(group.name()))
                .map(|v| v.key());
            match value {
                Some(value) => {
                    values.insert(group.name(), value);
                }
                None if group.is_boolean() => {
                    values.insert(group.name(), "false");
                }
                None => {}
            }
        }
        Ok(Self { values })
    }

    pub fn get(&self, group: &str) -> Option<&'s str> {
        self.values.get(group).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'s str, &'s str)> + '_ {
        self.values.iter().map(|(k, v)| (*k, *v))
    }
}

/// Resolve a selection into the schema's class list
pub fn resolve(schema: &VariantSchema, selection: &Selection) -> Result<ClassList> {
    let effective = EffectiveSelection::new(schema, selection)?;

    let mut classes = schema.base().clone();
    for group in schema.groups() {
        if let Some(option) = effective
            .get(group.name())
            .and_then(|value| group.option(value))
        {
            classes.extend_from(option);
        }
    }

    let mut matched = 0usize;
    for compound in schema.compounds() {
        if compound.matches(&effective) {
            classes.extend_from(compound.class_list());
            matched += 1;
        }
    }

    trace!(
        schema = schema.name(),
        selected = selection.len(),
        compounds = matched,
        classes = classes.len(),
        "resolved variants"
    );
    Ok(classes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::CompoundVariant;
    use pretty_assertions::assert_eq;

    fn button() -> VariantSchema {
        VariantSchema::builder("button")
            .base("btn")
            .variant("variant", |g| g.option("primary", "blue").option("danger", "red"))
            .variant("size", |g| g.option("sm", "small").option("lg", "large"))
            .variant("fullWidth", |g| g.when_true("w-full"))
            .compound(
                CompoundVariant::new()
                    .when("variant", "danger")
                    .when("size", "lg")
                    .classes("shout"),
            )
            .compound(
                CompoundVariant::new()
                    .when("fullWidth", false)
                    .classes("inline"),
            )
            .default("variant", "primary")
            .build()
            .unwrap()
    }

    #[test]
    fn test_effective_selection_fills_defaults() {
        let schema = button();
        let selection = Selection::new().with("size", "lg");
        let effective = EffectiveSelection::new(&schema, &selection).unwrap();
        assert_eq!(
            effective.iter().collect::<Vec<_>>(),
            vec![("variant", "primary"), ("size", "lg"), ("fullWidth", "false")]
        );
    }

    #[test]
    fn test_group_without_default_contributes_nothing() {
        let schema = button();
        let classes = resolve(&schema, &Selection::new()).unwrap();
        assert_eq!(classes.to_string(), "btn blue inline");
    }

    #[test]
    fn test_compounds_see_effective_values() {
        let schema = button();
        let classes = resolve(
            &schema,
            &Selection::new()
                .with("variant", "danger")
                .with("size", "lg")
                .with("fullWidth", true),
        )
        .unwrap();
        assert_eq!(classes.to_string(), "btn red large w-full shout");
    }

    #[test]
    fn test_unknown_group_and_option() {
        let schema = button();
        assert_eq!(
            resolve(&schema, &Selection::new().with("tone", "loud")).unwrap_err(),
            VariantError::UnknownGroup {
                schema: "button".into(),
                group: "tone".into(),
            }
        );
        assert_eq!(
            resolve(&schema, &Selection::new().with("size", "xl")).unwrap_err(),
            VariantError::UnknownOption {
                schema: "button".into(),
                group: "size".into(),
                option: "xl".into(),
            }
        );
        assert_eq!(
            resolve(&schema, &Selection::new().with("size", true)).unwrap_err(),
            VariantError::UnknownOption {
                schema: "button".into(),
                group: "size".into(),
                option: "true".into(),
            }
        );
    }
}
