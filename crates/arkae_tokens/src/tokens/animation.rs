//! Animation tokens - durations and easing curves

pub const DURATION_SCALE: &str = "duration";
pub const EASING_SCALE: &str = "easing";

pub const DURATIONS: &[(&str, &str)] = &[
    ("instant", "0ms"),
    ("fast", "150ms"),
    ("base", "250ms"),
    ("slow", "350ms"),
    ("slower", "500ms"),
];

pub const EASINGS: &[(&str, &str)] = &[
    ("linear", "linear"),
    ("in", "cubic-bezier(0.4, 0, 1, 1)"),
    ("out", "cubic-bezier(0, 0, 0.2, 1)"),
    ("inOut", "cubic-bezier(0.4, 0, 0.2, 1)"),
    ("bounce", "cubic-bezier(0.68, -0.55, 0.265, 1.55)"),
];

/// Duration token keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum DurationToken {
    Instant,
    Fast,
    Base,
    Slow,
    Slower,
}

impl DurationToken {
    pub fn key(self) -> &'static str {
        match self {
            Self::Instant => "instant",
            Self::Fast => "fast",
            Self::Base => "base",
            Self::Slow => "slow",
            Self::Slower => "slower",
        }
    }
}

/// Easing token keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum EasingToken {
    Linear,
    In,
    Out,
    InOut,
    Bounce,
}

impl EasingToken {
    pub fn key(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::In => "in",
            Self::Out => "out",
            Self::InOut => "inOut",
            Self::Bounce => "bounce",
        }
    }
}
