//! Color tokens
//!
//! Base colors plus seven 11-step palettes. Steps run from `50` (lightest) to
//! `950` (darkest).

use crate::scale::Scale;
use crate::Result;

use super::table_scale;

/// Scale holding the standalone `white` / `black` colors
pub const BASE_COLOR_SCALE: &str = "color.base";

pub const BASE_COLORS: &[(&str, &str)] = &[("white", "#ffffff"), ("black", "#000000")];

/// Palette step keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum ColorStep {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

impl ColorStep {
    /// Scale key for this step
    pub fn key(self) -> &'static str {
        match self {
            Self::S50 => "50",
            Self::S100 => "100",
            Self::S200 => "200",
            Self::S300 => "300",
            Self::S400 => "400",
            Self::S500 => "500",
            Self::S600 => "600",
            Self::S700 => "700",
            Self::S800 => "800",
            Self::S900 => "900",
            Self::S950 => "950",
        }
    }

    /// All steps, lightest first
    pub fn all() -> &'static [ColorStep] {
        const STEPS: [ColorStep; 11] = [
            ColorStep::S50,
            ColorStep::S100,
            ColorStep::S200,
            ColorStep::S300,
            ColorStep::S400,
            ColorStep::S500,
            ColorStep::S600,
            ColorStep::S700,
            ColorStep::S800,
            ColorStep::S900,
            ColorStep::S950,
        ];
        &STEPS
    }
}

/// Named color palettes
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Palette {
    /// Neutral gray scale
    Gray,
    /// Brand color (indigo)
    Primary,
    /// Secondary brand color (purple)
    Secondary,
    /// Success (green)
    Success,
    /// Warning (yellow)
    Warning,
    /// Error (red)
    Error,
    /// Info (blue)
    Info,
}

impl Palette {
    /// Utility-class name of the palette (`bg-primary-600`)
    pub fn id(self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    /// Name of the backing scale in the token store
    pub fn scale_name(self) -> &'static str {
        match self {
            Self::Gray => "color.gray",
            Self::Primary => "color.primary",
            Self::Secondary => "color.secondary",
            Self::Success => "color.success",
            Self::Warning => "color.warning",
            Self::Error => "color.error",
            Self::Info => "color.info",
        }
    }

    pub fn all() -> &'static [Palette] {
        const PALETTES: [Palette; 7] = [
            Palette::Gray,
            Palette::Primary,
            Palette::Secondary,
            Palette::Success,
            Palette::Warning,
            Palette::Error,
            Palette::Info,
        ];
        &PALETTES
    }

    /// Hex literals for every step, lightest first
    pub fn steps(self) -> &'static [&'static str; 11] {
        match self {
            Self::Gray => &GRAY,
            Self::Primary => &PRIMARY,
            Self::Secondary => &SECONDARY,
            Self::Success => &SUCCESS,
            Self::Warning => &WARNING,
            Self::Error => &ERROR,
            Self::Info => &INFO,
        }
    }

    pub(crate) fn scale(self) -> Result<Scale> {
        let table: Vec<(&'static str, &'static str)> = ColorStep::all()
            .iter()
            .zip(self.steps().iter())
            .map(|(step, hex)| (step.key(), *hex))
            .collect();
        table_scale(self.scale_name(), &table)
    }
}

const GRAY: [&str; 11] = [
    "#fafafa", "#f5f5f5", "#e5e5e5", "#d4d4d4", "#a3a3a3", "#737373", "#525252", "#404040",
    "#262626", "#171717", "#0a0a0a",
];

const PRIMARY: [&str; 11] = [
    "#eef2ff", "#e0e7ff", "#c7d2fe", "#a5b4fc", "#818cf8", "#6366f1", "#4f46e5", "#4338ca",
    "#3730a3", "#312e81", "#1e1b4b",
];

const SECONDARY: [&str; 11] = [
    "#faf5ff", "#f3e8ff", "#e9d5ff", "#d8b4fe", "#c084fc", "#a855f7", "#9333ea", "#7e22ce",
    "#6b21a8", "#581c87", "#3b0764",
];

const SUCCESS: [&str; 11] = [
    "#f0fdf4", "#dcfce7", "#bbf7d0", "#86efac", "#4ade80", "#22c55e", "#16a34a", "#15803d",
    "#166534", "#14532d", "#052e16",
];

const WARNING: [&str; 11] = [
    "#fefce8", "#fef9c3", "#fef08a", "#fde047", "#facc15", "#eab308", "#ca8a04", "#a16207",
    "#854d0e", "#713f12", "#422006",
];

const ERROR: [&str; 11] = [
    "#fef2f2", "#fee2e2", "#fecaca", "#fca5a5", "#f87171", "#ef4444", "#dc2626", "#b91c1c",
    "#991b1b", "#7f1d1d", "#450a0a",
];

const INFO: [&str; 11] = [
    "#eff6ff", "#dbeafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6", "#2563eb", "#1d4ed8",
    "#1e40af", "#1e3a8a", "#172554",
];
