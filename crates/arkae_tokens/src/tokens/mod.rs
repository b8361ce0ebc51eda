//! Raw design token tables
//!
//! Each module owns one design dimension:
//! - Colors (base, gray, brand and status palettes)
//! - Spacing and sizes
//! - Typography (families, sizes, weights, line heights, letter spacing)
//! - Shadows
//! - Border radii and widths
//! - Animation durations and easings
//! - Breakpoints
//! - Z-index layers

mod animation;
mod breakpoint;
mod color;
mod radius;
mod shadow;
mod spacing;
mod typography;
mod z_index;

pub use animation::*;
pub use breakpoint::*;
pub use color::*;
pub use radius::*;
pub use shadow::*;
pub use spacing::*;
pub use typography::*;
pub use z_index::*;

use crate::scale::{Scale, TokenValue};
use crate::Result;

/// Build a scale from a static `(key, value)` table
pub(crate) fn table_scale<V>(name: &'static str, table: &[(&'static str, V)]) -> Result<Scale>
where
    V: Into<TokenValue> + Copy,
{
    Scale::new(name, table.iter().map(|(k, v)| (*k, *v)))
}

/// Every raw scale shipped with Arkae, in export order
pub fn builtin_scales() -> Result<Vec<Scale>> {
    let mut scales = vec![table_scale(BASE_COLOR_SCALE, BASE_COLORS)?];
    for palette in Palette::all() {
        scales.push(palette.scale()?);
    }
    scales.extend([
        table_scale(SPACING_SCALE, SPACING)?,
        table_scale(SIZE_SCALE, SIZES)?,
        table_scale(FONT_FAMILY_SCALE, FONT_FAMILIES)?,
        table_scale(FONT_SIZE_SCALE, FONT_SIZES)?,
        table_scale(FONT_WEIGHT_SCALE, FONT_WEIGHTS)?,
        table_scale(LINE_HEIGHT_SCALE, LINE_HEIGHTS)?,
        table_scale(LETTER_SPACING_SCALE, LETTER_SPACING)?,
        table_scale(SHADOW_SCALE, SHADOWS)?,
        table_scale(RADIUS_SCALE, RADII)?,
        table_scale(BORDER_WIDTH_SCALE, BORDER_WIDTHS)?,
        table_scale(DURATION_SCALE, DURATIONS)?,
        table_scale(EASING_SCALE, EASINGS)?,
        table_scale(BREAKPOINT_SCALE, BREAKPOINTS)?,
        table_scale(Z_INDEX_SCALE, Z_INDEX)?,
    ]);
    Ok(scales)
}
