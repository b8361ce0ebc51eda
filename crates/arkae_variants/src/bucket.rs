//! Conflict buckets
//!
//! Two utilities conflict when they set the same CSS property under the same
//! modifiers. The table below maps a utility prefix plus the shape of its value
//! to a bucket id (`px-4` → `px`, `text-sm` → `font-size`, `text-white` →
//! `text-color`), and records which buckets subsume others (`p` overrides `px`,
//! `pt`, ...). The table is plain data: inspectable, serializable, and
//! extendable through [`MergeConfig`](crate::MergeConfig).

use std::borrow::Cow;
use std::sync::OnceLock;

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::error::ConfigError;
use crate::parse::{dash_positions, ParsedClass};

/// Global built-in bucket table
static BUILTIN: OnceLock<BucketTable> = OnceLock::new();

/// Shape a utility value must have for a rule to apply
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueKind {
    /// The bare utility, no value (`border`, `shadow`)
    Empty,
    /// Anything, including no value
    #[default]
    Any,
    /// Number, fraction, `px`/`full`/`screen`/`auto`/... or arbitrary length
    Length,
    /// Plain number or arbitrary non-color value
    Number,
    /// T-shirt size (`xs` … `9xl`, `base`) or arbitrary non-color value, with an
    /// optional `/<line-height>` suffix
    Size,
    /// Palette color (`gray-500`, `black/50`), semantic color or arbitrary color
    Color,
    /// One of an explicit list
    Keyword(Vec<String>),
}

const LENGTH_KEYWORDS: &[&str] = &[
    "px", "full", "screen", "auto", "min", "max", "fit", "svh", "lvh", "dvh", "svw", "lvw",
    "dvw",
];

const SIZE_KEYWORDS: &[&str] = &["xs", "sm", "base", "md", "lg", "xl"];

const COLOR_KEYWORDS: &[&str] = &["inherit", "current", "transparent", "black", "white"];

impl ValueKind {
    pub fn keyword<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Keyword(words.into_iter().map(Into::into).collect())
    }

    /// Whether `value` (the part after the prefix and its `-`) has this shape
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::Empty => value.is_empty(),
            Self::Any => true,
            Self::Length => {
                is_number(value)
                    || is_fraction(value)
                    || LENGTH_KEYWORDS.contains(&value)
                    || is_arbitrary_non_color(value)
            }
            Self::Number => is_number(value) || is_arbitrary_non_color(value),
            Self::Size => {
                let size = strip_line_height(value);
                is_tshirt_size(size) || is_arbitrary_non_color(size)
            }
            Self::Color => is_color(value),
            Self::Keyword(words) => words.iter().any(|w| w == value),
        }
    }
}

fn is_number(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        && value.bytes().filter(|b| *b == b'.').count() <= 1
        && value.bytes().any(|b| b.is_ascii_digit())
}

fn is_fraction(value: &str) -> bool {
    value
        .split_once('/')
        .is_some_and(|(n, d)| is_number(n) && is_number(d))
}

fn arbitrary_inner(value: &str) -> Option<&str> {
    value.strip_prefix('[')?.strip_suffix(']')
}

fn is_arbitrary_color(value: &str) -> bool {
    arbitrary_inner(value).is_some_and(|inner| {
        ["#", "rgb", "hsl", "oklch", "oklab", "color:"]
            .iter()
            .any(|p| inner.starts_with(p))
    })
}

fn is_arbitrary_non_color(value: &str) -> bool {
    arbitrary_inner(value).is_some() && !is_arbitrary_color(value)
}

/// `sm/6` → `sm`, `[15px]/[1.3]` → `[15px]`
fn strip_line_height(value: &str) -> &str {
    match value.rsplit_once('/') {
        Some((size, line_height))
            if !size.is_empty()
                && (is_number(line_height) || arbitrary_inner(line_height).is_some()) =>
        {
            size
        }
        _ => value,
    }
}

fn is_tshirt_size(value: &str) -> bool {
    if SIZE_KEYWORDS.contains(&value) {
        return true;
    }
    value
        .strip_suffix("xl")
        .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
}

fn is_color(value: &str) -> bool {
    if is_arbitrary_color(value) {
        return true;
    }
    // opacity modifier: `black/50`, `primary-600/[.35]`
    let color = match value.rsplit_once('/') {
        Some((color, alpha)) if is_number(alpha) || arbitrary_inner(alpha).is_some() => color,
        _ => value,
    };
    if COLOR_KEYWORDS.contains(&color) {
        return true;
    }

    let mut segments = color.split('-');
    let Some(first) = segments.next() else {
        return false;
    };
    // `opacity-50` is the legacy `bg-opacity-*` family, not a palette
    if first.is_empty()
        || first == "opacity"
        || !first.bytes().all(|b| b.is_ascii_alphabetic())
    {
        return false;
    }
    match segments.last() {
        Some(last) => first == "semantic" || is_number(last),
        None => false,
    }
}

/// `prefix` + value of shape `value` → `bucket`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketRule {
    pub prefix: String,
    pub bucket: String,
    #[serde(default)]
    pub value: ValueKind,
}

impl BucketRule {
    pub fn new(prefix: impl Into<String>, bucket: impl Into<String>, value: ValueKind) -> Self {
        Self {
            prefix: prefix.into(),
            bucket: bucket.into(),
            value,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.prefix.is_empty() || self.bucket.is_empty() {
            return Err(ConfigError::InvalidRule(format!(
                "rule needs a prefix and a bucket (prefix = {:?}, bucket = {:?})",
                self.prefix, self.bucket
            )));
        }
        if let ValueKind::Keyword(words) = &self.value {
            if words.is_empty() {
                return Err(ConfigError::InvalidRule(format!(
                    "keyword rule for `{}` has an empty keyword list",
                    self.prefix
                )));
            }
        }
        Ok(())
    }
}

/// Prefix → bucket classification plus the bucket override relation
#[derive(Clone, Debug)]
pub struct BucketTable {
    rules: Vec<BucketRule>,
    by_prefix: FxHashMap<String, SmallVec<[usize; 4]>>,
    overrides: IndexMap<String, Vec<String>>,
    class_prefix: Option<String>,
}

impl BucketTable {
    /// Build a table from rules (tried in order per prefix) and overrides.
    ///
    /// Every override key and target must be a bucket some rule produces.
    pub fn new(
        rules: Vec<BucketRule>,
        overrides: IndexMap<String, Vec<String>>,
    ) -> Result<Self, ConfigError> {
        let mut by_prefix: FxHashMap<String, SmallVec<[usize; 4]>> = FxHashMap::default();
        let mut buckets: IndexSet<&str> = IndexSet::new();
        for (i, rule) in rules.iter().enumerate() {
            rule.validate()?;
            by_prefix.entry(rule.prefix.clone()).or_default().push(i);
            buckets.insert(&rule.bucket);
        }

        for (bucket, targets) in &overrides {
            for name in std::iter::once(bucket).chain(targets) {
                if !buckets.contains(name.as_str()) {
                    return Err(ConfigError::UnknownBucket(name.clone()));
                }
            }
        }

        debug!(
            rules = rules.len(),
            prefixes = by_prefix.len(),
            buckets = buckets.len(),
            overrides = overrides.len(),
            "BucketTable built"
        );

        Ok(Self {
            rules,
            by_prefix,
            overrides,
            class_prefix: None,
        })
    }

    /// The shipped Tailwind-compatible table
    pub fn builtin() -> &'static BucketTable {
        BUILTIN.get_or_init(|| Self::tailwind().expect("built-in bucket table is invalid"))
    }

    /// Build a fresh copy of the shipped table
    pub fn tailwind() -> Result<Self, ConfigError> {
        Self::new(default_rules(), default_overrides())
    }

    /// Only classes carrying `prefix` (e.g. `tw-`) are classified
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.class_prefix = (!prefix.is_empty()).then_some(prefix);
        self
    }

    pub fn class_prefix(&self) -> Option<&str> {
        self.class_prefix.as_deref()
    }

    pub fn rules(&self) -> &[BucketRule] {
        &self.rules
    }

    pub fn overrides(&self) -> &IndexMap<String, Vec<String>> {
        &self.overrides
    }

    /// Buckets claimed along with `bucket`
    pub fn overrides_of(&self, bucket: &str) -> &[String] {
        self.overrides.get(bucket).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Bucket of a base utility (no modifiers, `!` or leading `-`).
    ///
    /// Candidates are tried longest prefix first; the rules of one prefix are
    /// tried in declaration order.
    pub fn bucket_of<'a>(&'a self, base: &'a str) -> Option<Cow<'a, str>> {
        let base = match &self.class_prefix {
            Some(prefix) => base.strip_prefix(prefix.as_str())?,
            None => base,
        };

        if let Some(inner) = arbitrary_inner(base) {
            let (property, value) = inner.split_once(':')?;
            if property.is_empty() || value.is_empty() {
                return None;
            }
            return Some(Cow::Owned(format!("[{property}]")));
        }

        if let Some(bucket) = self.match_prefix(base, "") {
            return Some(Cow::Borrowed(bucket));
        }
        dash_positions(base)
            .into_iter()
            .find_map(|i| self.match_prefix(&base[..i], &base[i + 1..]))
            .map(Cow::Borrowed)
    }

    /// Bucket of a full class, modifiers and flags included
    pub fn classify<'a>(&'a self, class: &'a str) -> Option<Cow<'a, str>> {
        let parsed = ParsedClass::parse(class);
        self.classify_parsed(&parsed)
    }

    pub(crate) fn classify_parsed<'a>(&'a self, parsed: &ParsedClass<'a>) -> Option<Cow<'a, str>> {
        self.bucket_of(parsed.base)
    }

    fn match_prefix(&self, prefix: &str, value: &str) -> Option<&str> {
        self.by_prefix.get(prefix)?.iter().find_map(|&i| {
            let rule = &self.rules[i];
            rule.value.matches(value).then_some(rule.bucket.as_str())
        })
    }
}

/// Accumulates rules in declaration order
struct RuleSet(Vec<BucketRule>);

impl RuleSet {
    fn rule(&mut self, prefix: &str, bucket: &str, value: ValueKind) -> &mut Self {
        self.0.push(BucketRule::new(prefix, bucket, value));
        self
    }

    /// Whole-class utilities (`flex`, `hidden`, `italic`) sharing one bucket
    fn exact(&mut self, bucket: &str, classes: &[&str]) -> &mut Self {
        for class in classes {
            self.rule(class, bucket, ValueKind::Empty);
        }
        self
    }

    /// Prefixes that are their own bucket whatever the value
    fn own(&mut self, prefixes: &[&str]) -> &mut Self {
        for prefix in prefixes {
            self.rule(prefix, prefix, ValueKind::Any);
        }
        self
    }

    fn keyword(&mut self, prefix: &str, bucket: &str, words: &[&str]) -> &mut Self {
        self.rule(prefix, bucket, ValueKind::keyword(words.iter().copied()))
    }
}

const SIDES: &[&str] = &["x", "y", "s", "e", "t", "r", "b", "l"];

fn default_rules() -> Vec<BucketRule> {
    let mut set = RuleSet(Vec::new());

    // Layout
    set.exact(
        "display",
        &[
            "block", "inline-block", "inline", "flex", "inline-flex", "table", "inline-table",
            "table-row", "table-cell", "grid", "inline-grid", "contents", "flow-root",
            "list-item", "hidden",
        ],
    )
    .exact("position", &["static", "fixed", "absolute", "relative", "sticky"])
    .exact("visibility", &["visible", "invisible", "collapse"])
    .exact("sr", &["sr-only", "not-sr-only"])
    .exact("isolation", &["isolate", "isolation-auto"])
    .own(&[
        "inset", "inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left", "z",
        "overflow", "overflow-x", "overflow-y", "aspect", "columns", "order",
    ])
    .keyword("object", "object-fit", &["contain", "cover", "fill", "none", "scale-down"])
    .rule("object", "object-position", ValueKind::Any);

    // Flexbox & grid
    set.keyword("flex", "flex-direction", &["row", "row-reverse", "col", "col-reverse"])
        .keyword("flex", "flex-wrap", &["wrap", "wrap-reverse", "nowrap"])
        .rule("flex", "flex", ValueKind::Any)
        .rule("flex-grow", "grow", ValueKind::Any)
        .rule("flex-shrink", "shrink", ValueKind::Any)
        .own(&[
            "basis", "grow", "shrink", "grid-cols", "grid-rows", "col", "col-span",
            "col-start", "col-end", "row", "row-span", "row-start", "row-end", "gap", "gap-x",
            "gap-y", "justify-items", "justify-self", "content", "place-content",
            "place-items", "place-self",
        ])
        .rule("items", "align-items", ValueKind::Any)
        .rule("self", "align-self", ValueKind::Any)
        .rule("justify", "justify-content", ValueKind::Any);

    // Spacing
    set.keyword("space-x", "space-x-reverse", &["reverse"])
        .keyword("space-y", "space-y-reverse", &["reverse"])
        .own(&["p", "m", "space-x", "space-y"]);
    for side in SIDES {
        let padding = format!("p{side}");
        let margin = format!("m{side}");
        set.own(&[padding.as_str(), margin.as_str()]);
    }

    // Sizing
    set.own(&["w", "h", "size", "min-w", "min-h", "max-w", "max-h"]);

    // Typography
    set.keyword(
        "font",
        "font-weight",
        &[
            "thin", "extralight", "light", "normal", "medium", "semibold", "bold",
            "extrabold", "black",
        ],
    )
    .rule("font", "font-weight", ValueKind::Number)
    .rule("font", "font-family", ValueKind::Any)
    .rule("text", "font-size", ValueKind::Size)
    .keyword(
        "text",
        "text-alignment",
        &["left", "center", "right", "justify", "start", "end"],
    )
    .keyword("text", "text-overflow", &["ellipsis", "clip"])
    .keyword("text", "text-wrap", &["wrap", "nowrap", "balance", "pretty"])
    .rule("text", "text-color", ValueKind::Color)
    .exact("text-overflow", &["truncate"])
    .exact("font-style", &["italic", "not-italic"])
    .exact(
        "text-transform",
        &["uppercase", "lowercase", "capitalize", "normal-case"],
    )
    .exact(
        "text-decoration",
        &["underline", "overline", "line-through", "no-underline"],
    )
    .keyword(
        "decoration",
        "decoration-style",
        &["solid", "double", "dotted", "dashed", "wavy"],
    )
    .rule("decoration", "decoration-thickness", ValueKind::Number)
    .rule("decoration", "decoration-color", ValueKind::Color)
    .own(&[
        "leading", "tracking", "whitespace", "break", "indent", "align", "line-clamp",
        "underline-offset",
    ])
    .keyword("list", "list-position", &["inside", "outside"])
    .rule("list", "list-style-type", ValueKind::Any)
    .rule("placeholder", "placeholder-color", ValueKind::Color);

    // Legacy color opacity utilities
    for prefix in [
        "bg-opacity", "text-opacity", "border-opacity", "ring-opacity", "divide-opacity",
        "placeholder-opacity",
    ] {
        set.rule(prefix, prefix, ValueKind::Number);
    }

    // Backgrounds
    set.keyword("bg", "bg-attachment", &["fixed", "local", "scroll"])
        .keyword("bg", "bg-repeat", &["repeat", "no-repeat", "repeat-x", "repeat-y"])
        .keyword("bg", "bg-size", &["auto", "cover", "contain"])
        .keyword("bg", "bg-image", &["none"])
        .rule("bg", "bg-color", ValueKind::Color)
        .rule("bg-gradient-to", "bg-image", ValueKind::Any)
        .rule("bg", "bg-position", ValueKind::Any)
        .own(&["from", "via", "to"]);

    // Borders
    set.rule("border", "border-w", ValueKind::Empty)
        .rule("border", "border-w", ValueKind::Number)
        .keyword(
            "border",
            "border-style",
            &["solid", "dashed", "dotted", "double", "hidden", "none"],
        )
        .rule("border", "border-color", ValueKind::Color);
    for side in SIDES {
        let prefix = format!("border-{side}");
        let width = format!("border-w-{side}");
        let color = format!("border-color-{side}");
        set.rule(&prefix, &width, ValueKind::Empty)
            .rule(&prefix, &width, ValueKind::Number)
            .rule(&prefix, &color, ValueKind::Color);
    }
    set.own(&[
        "rounded", "rounded-s", "rounded-e", "rounded-t", "rounded-r", "rounded-b",
        "rounded-l", "rounded-ss", "rounded-se", "rounded-ee", "rounded-es", "rounded-tl",
        "rounded-tr", "rounded-br", "rounded-bl",
    ])
    .rule("divide-x", "divide-x", ValueKind::Any)
    .rule("divide-y", "divide-y", ValueKind::Any)
    .rule("divide", "divide-color", ValueKind::Color)
    .rule("ring", "ring-w", ValueKind::Empty)
    .rule("ring", "ring-w", ValueKind::Number)
    .keyword("ring", "ring-inset", &["inset"])
    .rule("ring", "ring-color", ValueKind::Color)
    .rule("ring-offset", "ring-offset-w", ValueKind::Number)
    .rule("ring-offset", "ring-offset-color", ValueKind::Color)
    .rule("outline", "outline-style", ValueKind::Empty)
    .keyword("outline", "outline-style", &["none", "dashed", "dotted", "double"])
    .rule("outline", "outline-w", ValueKind::Number)
    .rule("outline", "outline-color", ValueKind::Color)
    .own(&["outline-offset"]);

    // Effects & filters
    set.rule("shadow", "shadow", ValueKind::Empty)
        .keyword("shadow", "shadow", &["inner", "none"])
        .rule("shadow", "shadow", ValueKind::Size)
        .rule("shadow", "shadow-color", ValueKind::Color)
        .own(&[
            "opacity", "mix-blend", "blur", "brightness", "contrast", "grayscale",
            "backdrop-blur", "backdrop-brightness", "backdrop-grayscale", "drop-shadow",
        ]);

    // Transitions & animation
    set.own(&[
        "transition", "duration", "ease", "delay", "animate", "fade-in", "fade-out",
        "zoom-in", "zoom-out", "slide-in-from-top", "slide-in-from-bottom",
        "slide-in-from-left", "slide-in-from-right",
    ]);

    // Transforms
    set.rule("transform", "transform", ValueKind::Any).own(&[
        "scale", "scale-x", "scale-y", "rotate", "translate-x", "translate-y", "skew-x",
        "skew-y", "origin",
    ]);

    // Interactivity & SVG
    set.own(&[
        "cursor", "select", "pointer-events", "resize", "appearance", "touch", "scroll-m",
        "scroll-p", "snap", "will-change", "accent", "caret",
    ])
    .rule("stroke", "stroke-w", ValueKind::Number)
    .rule("stroke", "stroke", ValueKind::Any)
    .rule("fill", "fill", ValueKind::Any);

    set.0
}

fn default_overrides() -> IndexMap<String, Vec<String>> {
    fn entry(bucket: &str, targets: &[&str]) -> (String, Vec<String>) {
        (
            bucket.to_string(),
            targets.iter().map(|t| t.to_string()).collect(),
        )
    }

    let mut overrides: IndexMap<String, Vec<String>> = [
        entry("p", &["px", "py", "ps", "pe", "pt", "pr", "pb", "pl"]),
        entry("px", &["pr", "pl"]),
        entry("py", &["pt", "pb"]),
        entry("m", &["mx", "my", "ms", "me", "mt", "mr", "mb", "ml"]),
        entry("mx", &["mr", "ml"]),
        entry("my", &["mt", "mb"]),
        entry(
            "inset",
            &["inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left"],
        ),
        entry("inset-x", &["right", "left"]),
        entry("inset-y", &["top", "bottom"]),
        entry("size", &["w", "h"]),
        entry("gap", &["gap-x", "gap-y"]),
        entry("overflow", &["overflow-x", "overflow-y"]),
        entry("flex", &["basis", "grow", "shrink"]),
        entry("font-size", &["leading"]),
        entry("scale", &["scale-x", "scale-y"]),
        entry(
            "rounded",
            &[
                "rounded-s", "rounded-e", "rounded-t", "rounded-r", "rounded-b", "rounded-l",
                "rounded-ss", "rounded-se", "rounded-ee", "rounded-es", "rounded-tl",
                "rounded-tr", "rounded-br", "rounded-bl",
            ],
        ),
        entry("rounded-s", &["rounded-ss", "rounded-es"]),
        entry("rounded-e", &["rounded-se", "rounded-ee"]),
        entry("rounded-t", &["rounded-tl", "rounded-tr"]),
        entry("rounded-r", &["rounded-tr", "rounded-br"]),
        entry("rounded-b", &["rounded-br", "rounded-bl"]),
        entry("rounded-l", &["rounded-tl", "rounded-bl"]),
    ]
    .into_iter()
    .collect();

    for kind in ["border-w", "border-color"] {
        let sides = |only: &[&str]| -> Vec<String> {
            only.iter().map(|side| format!("{kind}-{side}")).collect()
        };
        overrides.insert(kind.to_string(), sides(SIDES));
        overrides.insert(format!("{kind}-x"), sides(&["r", "l"]));
        overrides.insert(format!("{kind}-y"), sides(&["t", "b"]));
    }
    overrides
}
