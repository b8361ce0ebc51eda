//! Spacing and size tokens
//!
//! Spacing follows a 4px (0.25rem) grid; sizes cover container widths.

pub const SPACING_SCALE: &str = "spacing";
pub const SIZE_SCALE: &str = "size";

pub const SPACING: &[(&str, &str)] = &[
    ("0", "0px"),
    ("px", "1px"),
    ("0.5", "0.125rem"),
    ("1", "0.25rem"),
    ("1.5", "0.375rem"),
    ("2", "0.5rem"),
    ("2.5", "0.625rem"),
    ("3", "0.75rem"),
    ("3.5", "0.875rem"),
    ("4", "1rem"),
    ("5", "1.25rem"),
    ("6", "1.5rem"),
    ("7", "1.75rem"),
    ("8", "2rem"),
    ("9", "2.25rem"),
    ("10", "2.5rem"),
    ("11", "2.75rem"),
    ("12", "3rem"),
    ("14", "3.5rem"),
    ("16", "4rem"),
    ("20", "5rem"),
    ("24", "6rem"),
    ("28", "7rem"),
    ("32", "8rem"),
    ("36", "9rem"),
    ("40", "10rem"),
    ("44", "11rem"),
    ("48", "12rem"),
    ("52", "13rem"),
    ("56", "14rem"),
    ("60", "15rem"),
    ("64", "16rem"),
    ("72", "18rem"),
    ("80", "20rem"),
    ("96", "24rem"),
];

pub const SIZES: &[(&str, &str)] = &[
    ("xs", "20rem"),
    ("sm", "24rem"),
    ("md", "28rem"),
    ("lg", "32rem"),
    ("xl", "36rem"),
    ("2xl", "42rem"),
    ("3xl", "48rem"),
    ("4xl", "56rem"),
    ("5xl", "64rem"),
    ("6xl", "72rem"),
    ("7xl", "80rem"),
    ("full", "100%"),
    ("min", "min-content"),
    ("max", "max-content"),
    ("fit", "fit-content"),
];

/// Spacing token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SpacingToken {
    Px,
    Space0_5,
    Space1,
    Space1_5,
    Space2,
    Space3,
    Space4,
    Space5,
    Space6,
    Space8,
    Space10,
    Space12,
    Space16,
    Space20,
    Space24,
}

impl SpacingToken {
    pub fn key(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Space0_5 => "0.5",
            Self::Space1 => "1",
            Self::Space1_5 => "1.5",
            Self::Space2 => "2",
            Self::Space3 => "3",
            Self::Space4 => "4",
            Self::Space5 => "5",
            Self::Space6 => "6",
            Self::Space8 => "8",
            Self::Space10 => "10",
            Self::Space12 => "12",
            Self::Space16 => "16",
            Self::Space20 => "20",
            Self::Space24 => "24",
        }
    }
}
