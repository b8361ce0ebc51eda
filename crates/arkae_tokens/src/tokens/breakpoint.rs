//! Breakpoint tokens (data only; nothing here evaluates media queries)

pub const BREAKPOINT_SCALE: &str = "breakpoint";

pub const BREAKPOINTS: &[(&str, &str)] = &[
    ("sm", "640px"),
    ("md", "768px"),
    ("lg", "1024px"),
    ("xl", "1280px"),
    ("2xl", "1536px"),
];
