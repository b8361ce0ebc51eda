//! Ordered class lists and the sources the merge utility accepts

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

/// An ordered list of utility classes.
///
/// Order and duplicates are preserved; collapsing them is the merge
/// utility's job.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ClassList {
    classes: SmallVec<[Cow<'static, str>; 8]>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a whitespace-separated class string into entries
    pub fn parse(classes: &str) -> Self {
        let mut list = Self::new();
        list.push_str(classes);
        list
    }

    /// Like [`parse`](Self::parse) but borrows the entries of a static string
    pub fn from_static(classes: &'static str) -> Self {
        Self {
            classes: classes
                .split_ascii_whitespace()
                .map(Cow::Borrowed)
                .collect(),
        }
    }

    /// Append classes, one entry per whitespace-separated token; blank input
    /// is ignored
    pub fn push(&mut self, classes: impl Into<Cow<'static, str>>) {
        match classes.into() {
            Cow::Borrowed(classes) => self
                .classes
                .extend(classes.split_ascii_whitespace().map(Cow::Borrowed)),
            Cow::Owned(class) if is_single_token(&class) => self.classes.push(Cow::Owned(class)),
            Cow::Owned(classes) => self.push_str(&classes),
        }
    }

    /// Append every class from a whitespace-separated string
    pub fn push_str(&mut self, classes: &str) {
        self.classes.extend(
            classes
                .split_ascii_whitespace()
                .map(|c| Cow::Owned(c.to_string())),
        );
    }

    pub fn extend_from(&mut self, other: &ClassList) {
        self.classes.extend(other.classes.iter().cloned());
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.classes.iter().map(|c| &**c)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn contains(&self, class: &str) -> bool {
        self.iter().any(|c| c == class)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(str::to_string).collect()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, class) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(class)?;
        }
        Ok(())
    }
}

impl From<&'static str> for ClassList {
    fn from(classes: &'static str) -> Self {
        Self::from_static(classes)
    }
}

impl From<String> for ClassList {
    fn from(classes: String) -> Self {
        Self::parse(&classes)
    }
}

impl<S: Into<Cow<'static, str>>> FromIterator<S> for ClassList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for class in iter {
            list.push(class);
        }
        list
    }
}

fn is_single_token(class: &str) -> bool {
    !class.is_empty() && !class.bytes().any(|b| b.is_ascii_whitespace())
}

/// Anything that can contribute classes to a merge
pub trait ClassSource {
    /// Append this source's classes to `out`, space separated
    fn write_classes(&self, out: &mut String);
}

fn append(out: &mut String, classes: &str) {
    if classes.trim().is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(classes);
}

impl ClassSource for str {
    fn write_classes(&self, out: &mut String) {
        append(out, self);
    }
}

impl ClassSource for String {
    fn write_classes(&self, out: &mut String) {
        append(out, self);
    }
}

impl ClassSource for Cow<'_, str> {
    fn write_classes(&self, out: &mut String) {
        append(out, self);
    }
}

impl ClassSource for ClassList {
    fn write_classes(&self, out: &mut String) {
        for class in self.iter() {
            append(out, class);
        }
    }
}

impl<T: ClassSource + ?Sized> ClassSource for &T {
    fn write_classes(&self, out: &mut String) {
        (**self).write_classes(out);
    }
}

impl<T: ClassSource> ClassSource for Option<T> {
    fn write_classes(&self, out: &mut String) {
        if let Some(source) = self {
            source.write_classes(out);
        }
    }
}

impl<T: ClassSource> ClassSource for [T] {
    fn write_classes(&self, out: &mut String) {
        for source in self {
            source.write_classes(out);
        }
    }
}

impl<T: ClassSource, const N: usize> ClassSource for [T; N] {
    fn write_classes(&self, out: &mut String) {
        self.as_slice().write_classes(out);
    }
}

impl<T: ClassSource> ClassSource for Vec<T> {
    fn write_classes(&self, out: &mut String) {
        self.as_slice().write_classes(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_on_whitespace() {
        let list = ClassList::parse("  px-4\tpy-2\n px-4 ");
        assert_eq!(list.to_vec(), ["px-4", "py-2", "px-4"]);
        assert_eq!(list.to_string(), "px-4 py-2 px-4");
    }

    #[test]
    fn test_push_ignores_blank() {
        let mut list = ClassList::new();
        list.push("");
        list.push("   ");
        list.push("w-full");
        assert_eq!(list.len(), 1);
        assert!(list.contains("w-full"));
    }

    #[test]
    fn test_entries_are_single_tokens() {
        let list: ClassList = ["px-4 py-2", "rounded"].into_iter().collect();
        assert_eq!(list.len(), 3);
        assert!(list.contains("px-4"));

        let mut list = ClassList::new();
        list.push(String::from(" text-sm  font-medium "));
        list.push(String::from("w-full"));
        assert_eq!(list.to_vec(), ["text-sm", "font-medium", "w-full"]);
    }

    #[test]
    fn test_sources_concatenate() {
        let mut out = String::new();
        "px-4".write_classes(&mut out);
        None::<&str>.write_classes(&mut out);
        Some(String::from("py-2")).write_classes(&mut out);
        ["", "rounded"].write_classes(&mut out);
        ClassList::from("m-1 m-2").write_classes(&mut out);
        assert_eq!(out, "px-4 py-2 rounded m-1 m-2");
    }
}
