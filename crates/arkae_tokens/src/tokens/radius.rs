//! Border radius and border width tokens

pub const RADIUS_SCALE: &str = "radius";
pub const BORDER_WIDTH_SCALE: &str = "border-width";

pub const RADII: &[(&str, &str)] = &[
    ("none", "0px"),
    ("sm", "0.125rem"),
    ("base", "0.25rem"),
    ("md", "0.375rem"),
    ("lg", "0.5rem"),
    ("xl", "0.75rem"),
    ("2xl", "1rem"),
    ("3xl", "1.5rem"),
    ("full", "9999px"),
];

pub const BORDER_WIDTHS: &[(&str, &str)] = &[
    ("0", "0px"),
    ("base", "1px"),
    ("2", "2px"),
    ("4", "4px"),
    ("8", "8px"),
];

/// Radius token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RadiusToken {
    None,
    Sm,
    Default,
    Md,
    Lg,
    Xl,
    Xxl,
    Xxxl,
    Full,
}

impl RadiusToken {
    pub fn key(self) -> &'static str {
        match self {
            RadiusToken::None => "none",
            RadiusToken::Sm => "sm",
            RadiusToken::Default => "base",
            RadiusToken::Md => "md",
            RadiusToken::Lg => "lg",
            RadiusToken::Xl => "xl",
            RadiusToken::Xxl => "2xl",
            RadiusToken::Xxxl => "3xl",
            RadiusToken::Full => "full",
        }
    }
}
