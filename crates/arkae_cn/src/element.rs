//! Styled element descriptions
//!
//! Rendering a component yields a tree of named parts, each carrying its final
//! class string and attributes. Mounting the tree onto a widget toolkit is the
//! host's job.

use std::fmt;

use indexmap::IndexMap;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyledElement {
    /// Part name within the component (`root`, `popup`, `left-icon`, ...)
    pub part: &'static str,
    pub class_name: String,
    pub attrs: IndexMap<String, String>,
    pub text: Option<String>,
    pub children: Vec<StyledElement>,
}

impl StyledElement {
    pub fn new(part: &'static str, class_name: impl Into<String>) -> Self {
        Self {
            part,
            class_name: class_name.into(),
            ..Default::default()
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Merge pass-through attributes; existing keys are overwritten
    pub fn attrs(mut self, attrs: &IndexMap<String, String>) -> Self {
        self.attrs
            .extend(attrs.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: StyledElement) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = StyledElement>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class_name.split_ascii_whitespace().any(|c| c == class)
    }

    /// First part with this name, depth first, self included
    pub fn find(&self, part: &str) -> Option<&StyledElement> {
        if self.part == part {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(part))
    }

    /// Every part with this name, depth first
    pub fn find_all<'a>(&'a self, part: &str) -> Vec<&'a StyledElement> {
        let mut found = Vec::new();
        self.collect(part, &mut found);
        found
    }

    fn collect<'a>(&'a self, part: &str, found: &mut Vec<&'a StyledElement>) {
        if self.part == part {
            found.push(self);
        }
        for child in &self.children {
            child.collect(part, found);
        }
    }

    /// Part names in depth-first order
    pub fn parts(&self) -> Vec<&'static str> {
        let mut parts = vec![self.part];
        for child in &self.children {
            parts.extend(child.parts());
        }
        parts
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}<{}", "", self.part, indent = depth * 2)?;
        if !self.class_name.is_empty() {
            write!(f, " class=\"{}\"", self.class_name)?;
        }
        for (name, value) in &self.attrs {
            write!(f, " {name}=\"{value}\"")?;
        }
        match (&self.text, self.children.is_empty()) {
            (None, true) => writeln!(f, " />"),
            (text, _) => {
                writeln!(f, ">")?;
                if let Some(text) = text {
                    writeln!(f, "{:indent$}{text}", "", indent = (depth + 1) * 2)?;
                }
                for child in &self.children {
                    child.write_tree(f, depth + 1)?;
                }
                writeln!(f, "{:indent$}</{}>", "", self.part, indent = depth * 2)
            }
        }
    }
}

/// Indented markup-like dump, handy for snapshots and demos
impl fmt::Display for StyledElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> StyledElement {
        StyledElement::new("root", "relative")
            .attr("data-state", "open")
            .child(StyledElement::new("icon", "absolute left-3"))
            .child(
                StyledElement::new("input", "w-full pl-10")
                    .child(StyledElement::new("icon", "absolute right-3")),
            )
    }

    #[test]
    fn test_find_is_depth_first() {
        let tree = tree();
        assert_eq!(tree.find("icon").unwrap().class_name, "absolute left-3");
        assert_eq!(tree.find_all("icon").len(), 2);
        assert!(tree.find("label").is_none());
        assert_eq!(tree.parts(), vec!["root", "icon", "input", "icon"]);
    }

    #[test]
    fn test_has_class_matches_whole_tokens() {
        let input = StyledElement::new("input", "w-full pl-10");
        assert!(input.has_class("pl-10"));
        assert!(!input.has_class("pl-1"));
    }

    #[test]
    fn test_display_dump() {
        let dump = StyledElement::new("root", "p-2")
            .attr("role", "dialog")
            .child(StyledElement::new("title", "text-lg").text("Hello"))
            .to_string();
        assert_eq!(
            dump,
            "<root class=\"p-2\" role=\"dialog\">\n  <title class=\"text-lg\">\n    Hello\n  </title>\n</root>\n"
        );
    }
}
