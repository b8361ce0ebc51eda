//! The `Styled` contract shared by variant-driven components

use arkae_variants::{cn, ClassList, Selection, VariantSchema};
use indexmap::IndexMap;

use crate::error::Result;

/// A component whose root class is computed from a variant schema.
///
/// The final class is `merge(resolve(schema, selection), extra, override)`:
/// caller overrides always win over conflicting schema classes.
pub trait Styled {
    fn schema(&self) -> &'static VariantSchema;

    /// Runtime props as a variant selection
    fn selection(&self) -> Selection;

    /// Caller-supplied override class
    fn override_class(&self) -> Option<&str>;

    /// Classes derived from non-variant props, applied before the override
    fn extra_classes(&self) -> ClassList {
        ClassList::new()
    }

    fn class_name(&self) -> Result<String> {
        let resolved = self.schema().resolve(&self.selection())?;
        Ok(cn!(resolved, self.extra_classes(), self.override_class()))
    }
}

/// Override class and pass-through attributes every component accepts
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Passthrough {
    pub class: Option<String>,
    pub attrs: IndexMap<String, String>,
}

impl Passthrough {
    /// Fixed part classes merged with the override
    pub(crate) fn merged(&self, fixed: &str) -> String {
        cn!(fixed, self.class.as_deref())
    }
}

/// Builder methods for the override class and pass-through attributes
pub trait PassthroughExt: Sized {
    fn passthrough_mut(&mut self) -> &mut Passthrough;

    /// Additional classes; later conflicting utilities win over built-in ones
    fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        let passthrough = self.passthrough_mut();
        passthrough.class = Some(match passthrough.class.take() {
            Some(existing) => format!("{existing} {class}"),
            None => class,
        });
        self
    }

    /// Attribute forwarded verbatim to the component's main part
    fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.passthrough_mut()
            .attrs
            .insert(name.into(), value.into());
        self
    }
}

macro_rules! impl_passthrough {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::styled::PassthroughExt for $ty {
                fn passthrough_mut(&mut self) -> &mut $crate::styled::Passthrough {
                    &mut self.passthrough
                }
            }
        )*
    };
}

pub(crate) use impl_passthrough;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Probe {
        passthrough: Passthrough,
    }

    impl_passthrough!(Probe);

    #[test]
    fn test_class_calls_accumulate() {
        let probe = Probe::default().class("px-2").class("py-1").attr("id", "probe");
        assert_eq!(probe.passthrough.class.as_deref(), Some("px-2 py-1"));
        assert_eq!(probe.passthrough.attrs["id"], "probe");
    }

    #[test]
    fn test_merged_override_wins() {
        let passthrough = Passthrough {
            class: Some("p-4".into()),
            ..Default::default()
        };
        assert_eq!(passthrough.merged("rounded-md p-1 text-sm"), "rounded-md text-sm p-4");
    }
}
