//! Typography tokens

pub const FONT_FAMILY_SCALE: &str = "font.family";
pub const FONT_SIZE_SCALE: &str = "font.size";
pub const FONT_WEIGHT_SCALE: &str = "font.weight";
pub const LINE_HEIGHT_SCALE: &str = "line-height";
pub const LETTER_SPACING_SCALE: &str = "letter-spacing";

/// Comma-separated font stacks
pub const FONT_FAMILIES: &[(&str, &str)] = &[
    (
        "sans",
        "Inter, ui-sans-serif, system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif",
    ),
    ("serif", "ui-serif, Georgia, Cambria, 'Times New Roman', Times, serif"),
    (
        "mono",
        "'JetBrains Mono', ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, monospace",
    ),
];

pub const FONT_SIZES: &[(&str, &str)] = &[
    ("xs", "0.75rem"),
    ("sm", "0.875rem"),
    ("base", "1rem"),
    ("lg", "1.125rem"),
    ("xl", "1.25rem"),
    ("2xl", "1.5rem"),
    ("3xl", "1.875rem"),
    ("4xl", "2.25rem"),
    ("5xl", "3rem"),
    ("6xl", "3.75rem"),
    ("7xl", "4.5rem"),
    ("8xl", "6rem"),
    ("9xl", "8rem"),
];

pub const FONT_WEIGHTS: &[(&str, i64)] = &[
    ("thin", 100),
    ("extralight", 200),
    ("light", 300),
    ("normal", 400),
    ("medium", 500),
    ("semibold", 600),
    ("bold", 700),
    ("extrabold", 800),
    ("black", 900),
];

pub const LINE_HEIGHTS: &[(&str, &str)] = &[
    ("none", "1"),
    ("tight", "1.25"),
    ("snug", "1.375"),
    ("normal", "1.5"),
    ("relaxed", "1.625"),
    ("loose", "2"),
];

pub const LETTER_SPACING: &[(&str, &str)] = &[
    ("tighter", "-0.05em"),
    ("tight", "-0.025em"),
    ("normal", "0em"),
    ("wide", "0.025em"),
    ("wider", "0.05em"),
    ("widest", "0.1em"),
];

/// Font family token keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum FontFamilyToken {
    Sans,
    Serif,
    Mono,
}

impl FontFamilyToken {
    pub fn key(self) -> &'static str {
        match self {
            Self::Sans => "sans",
            Self::Serif => "serif",
            Self::Mono => "mono",
        }
    }
}

/// Split a font stack into its individual families, the shape theme
/// configurations expect.
pub fn font_stack(families: &str) -> Vec<&str> {
    families
        .split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_stack_split() {
        assert_eq!(
            font_stack("Inter, system-ui,  sans-serif"),
            vec!["Inter", "system-ui", "sans-serif"]
        );
        assert!(font_stack("").is_empty());
    }
}
