//! Utility-class anatomy
//!
//! `dark:hover:!-translate-y-1/2` splits into modifiers (`dark`, `hover`), the
//! important flag, the negative flag and the base utility (`translate-y-1/2`).

use smallvec::SmallVec;

/// A single utility class split into its parts
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedClass<'a> {
    /// Variant modifiers in normalized order
    pub modifiers: SmallVec<[&'a str; 4]>,
    pub important: bool,
    pub negative: bool,
    /// The utility without modifiers, `!` and leading `-`
    pub base: &'a str,
}

impl<'a> ParsedClass<'a> {
    pub fn parse(class: &'a str) -> Self {
        let mut parts = split_top_level(class, b':');
        let mut base = parts.pop().unwrap_or_default();

        let mut important = false;
        if let Some(rest) = base.strip_prefix('!') {
            base = rest;
            important = true;
        } else if let Some(rest) = base.strip_suffix('!') {
            base = rest;
            important = true;
        }

        let mut negative = false;
        if let Some(rest) = base.strip_prefix('-') {
            base = rest;
            negative = true;
        }

        Self {
            modifiers: sort_modifiers(parts),
            important,
            negative,
            base,
        }
    }

    /// `[mask-type:alpha]` style arbitrary property, returning the property name
    pub fn arbitrary_property(&self) -> Option<&'a str> {
        let inner = self.base.strip_prefix('[')?.strip_suffix(']')?;
        let (property, value) = inner.split_once(':')?;
        (!property.is_empty() && !value.is_empty()).then_some(property)
    }

    /// Normalized modifier prefix plus important marker, e.g. `dark:hover:!`
    pub fn variant_key(&self) -> String {
        let mut key = String::new();
        for modifier in &self.modifiers {
            key.push_str(modifier);
            key.push(':');
        }
        if self.important {
            key.push('!');
        }
        key
    }
}

/// Split on `sep` outside `[]` and `()`
pub(crate) fn split_top_level(input: &str, sep: u8) -> SmallVec<[&str; 4]> {
    let mut parts = SmallVec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, byte) in input.bytes().enumerate() {
        match byte {
            b'[' | b'(' => depth += 1,
            b']' | b')' => depth = depth.saturating_sub(1),
            b if b == sep && depth == 0 => {
                parts.push(&input[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&input[start..]);
    parts
}

/// Byte offsets of `-` outside brackets, rightmost first
pub(crate) fn dash_positions(base: &str) -> SmallVec<[usize; 8]> {
    let mut positions = SmallVec::new();
    let mut depth = 0usize;
    for (i, byte) in base.bytes().enumerate() {
        match byte {
            b'[' | b'(' => depth += 1,
            b']' | b')' => depth = depth.saturating_sub(1),
            b'-' if depth == 0 && i > 0 => positions.push(i),
            _ => {}
        }
    }
    positions.reverse();
    positions
}

/// Plain modifiers commute; arbitrary ones (`[&>svg]`) keep their position
fn sort_modifiers<'a>(modifiers: SmallVec<[&'a str; 4]>) -> SmallVec<[&'a str; 4]> {
    if modifiers.len() < 2 {
        return modifiers;
    }
    let mut sorted = SmallVec::new();
    let mut run: SmallVec<[&'a str; 4]> = SmallVec::new();
    for modifier in modifiers {
        if modifier.starts_with('[') {
            run.sort_unstable();
            sorted.extend(run.drain(..));
            sorted.push(modifier);
        } else {
            run.push(modifier);
        }
    }
    run.sort_unstable();
    sorted.extend(run);
    sorted
}
