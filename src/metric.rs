//! Error metrics used to rank candidates. Lower is always better.
use crate::color::{self, Color};

/// Weight of the foreground color distance
pub const FG_WEIGHT: f64 = 0.4;
/// Weight of the background color distance
pub const BG_WEIGHT: f64 = 0.4;
/// Weight of the lightness mismatch between target and glyph ink
pub const COVERAGE_WEIGHT: f64 = 0.2;

/// Error of drawing a glyph of the given density in `fg` on top of `bg`
/// when the cell should look like `target`
pub fn glyph_error(target: Color, fg: Color, bg: Color, density: f64) -> f64 {
    glyph_error_with_ink(target, fg, bg, density * 255.0)
}

/// Same as [`glyph_error`] but with the glyph density already scaled to `[0, 255]`
#[inline]
pub fn glyph_error_with_ink(target: Color, fg: Color, bg: Color, ink: f64) -> f64 {
    let coverage_error = (color::brightness(target) - ink).abs();
    FG_WEIGHT * color::distance(target, fg)
        + BG_WEIGHT * color::distance(target, bg)
        + COVERAGE_WEIGHT * coverage_error
}

/// Error of approximating `target` by a single representative color
#[inline]
pub fn fill_error(target: Color, representative: Color) -> f64 {
    color::distance(target, representative)
}
