//! Z-index tokens - layering for stacking contexts

pub const Z_INDEX_SCALE: &str = "z-index";

pub const Z_INDEX: &[(&str, i64)] = &[
    ("base", 0),
    ("dropdown", 1000),
    ("sticky", 1100),
    ("fixed", 1200),
    ("overlay", 1300),
    ("modal", 1400),
    ("popover", 1500),
    ("tooltip", 1600),
    ("notification", 1700),
];

/// Z-index layer keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ZIndexToken {
    Base,
    Dropdown,
    Sticky,
    Fixed,
    Overlay,
    Modal,
    Popover,
    Tooltip,
    Notification,
}

impl ZIndexToken {
    pub fn key(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Dropdown => "dropdown",
            Self::Sticky => "sticky",
            Self::Fixed => "fixed",
            Self::Overlay => "overlay",
            Self::Modal => "modal",
            Self::Popover => "popover",
            Self::Tooltip => "tooltip",
            Self::Notification => "notification",
        }
    }
}
