//! Picking the foreground, background and glyph for a single character cell
use crate::ascii::density::DensityTable;
use crate::color::{self, Color};
use crate::matcher::Matcher;
use crate::metric;
use crate::palette::{Palette, VgaColor};

/// Background brightness above which text is drawn in black
pub const CONTRAST_THRESHOLD: f64 = 128.0;

/// Outcome of the search for one cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub glyph: char,
    /// Foreground after contrast correction, this is what gets drawn
    pub fg: VgaColor,
    pub bg: VgaColor,
    /// Foreground the error search settled on before contrast correction
    pub scored_fg: VgaColor,
    /// Error of the (scored_fg, bg, glyph) triple
    pub error: f64,
}

/// One entry of the flat search space, with colors and ink already looked up
#[derive(Debug, Clone, Copy)]
struct Candidate {
    fg: VgaColor,
    bg: VgaColor,
    glyph: char,
    fg_rgb: Color,
    bg_rgb: Color,
    ink: f64,
}

/// Searches every (fg, bg, glyph) triple for each cell
#[derive(Debug)]
pub struct AsciiMatcher {
    palette: Palette,
    candidates: Vec<Candidate>,
}

impl AsciiMatcher {
    /// Build the candidate list in enumeration order: foreground, then background, then glyph
    pub fn new(palette: Palette, densities: &DensityTable) -> Self {
        let mut candidates = Vec::with_capacity(palette.iter().count().pow(2) * densities.len());
        for (fg, fg_rgb) in palette.iter() {
            for (bg, bg_rgb) in palette.iter() {
                for &(glyph, density) in densities.entries() {
                    candidates.push(Candidate {
                        fg,
                        bg,
                        glyph,
                        fg_rgb,
                        bg_rgb,
                        ink: density * 255.0,
                    });
                }
            }
        }
        Self {
            palette,
            candidates,
        }
    }

    pub fn num_candidates(&self) -> usize {
        self.candidates.len()
    }

    /// Readable text color for a given background
    pub fn contrast_fg(&self, bg: VgaColor) -> VgaColor {
        if color::brightness(self.palette.rgb(bg)) > CONTRAST_THRESHOLD {
            VgaColor::Black
        } else {
            VgaColor::White
        }
    }
}

impl Matcher for AsciiMatcher {
    type Output = Cell;

    fn best_match(&self, target: Color) -> Cell {
        // With no glyphs there is nothing to score, fall back to a blank cell
        let mut best = Cell {
            glyph: ' ',
            fg: VgaColor::White,
            bg: VgaColor::Black,
            scored_fg: VgaColor::White,
            error: f64::INFINITY,
        };
        for candidate in self.candidates.iter() {
            let error = metric::glyph_error_with_ink(
                target,
                candidate.fg_rgb,
                candidate.bg_rgb,
                candidate.ink,
            );
            // Strict comparison keeps the first candidate on ties
            if error < best.error {
                best = Cell {
                    glyph: candidate.glyph,
                    fg: candidate.fg,
                    bg: candidate.bg,
                    scored_fg: candidate.fg,
                    error,
                };
            }
        }
        best.fg = self.contrast_fg(best.bg);
        best
    }
}
