//! Approximating the average color of a block by a palette color or a dithered pair
use crate::color::Color;
use crate::matcher::Matcher;
use crate::metric;
use crate::palette::{all_pairs, ColorPair, Palette, VgaColor};

/// How a block is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    /// Uniform fill
    Single(VgaColor),
    /// 2x2-cell checkerboard, first color on even cells
    Checkerboard(VgaColor, VgaColor),
}

/// Outcome of the search for one block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub representation: Representation,
    pub error: f64,
}

#[derive(Debug, Clone, Copy)]
enum Origin {
    Single(VgaColor),
    Pair(ColorPair),
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    origin: Origin,
    representative: Color,
}

impl Candidate {
    fn representation(&self) -> Representation {
        match self.origin {
            Origin::Single(c) => Representation::Single(c),
            Origin::Pair(pair) if pair.is_self_pair() => Representation::Single(pair.first),
            Origin::Pair(pair) => Representation::Checkerboard(pair.first, pair.second),
        }
    }
}

/// Searches single colors and then color pairs for each block
#[derive(Debug)]
pub struct PixelateMatcher {
    palette: Palette,
    candidates: Vec<Candidate>,
}

impl PixelateMatcher {
    pub fn new(palette: Palette) -> Self {
        let singles = palette.iter().map(|(name, rgb)| Candidate {
            origin: Origin::Single(name),
            representative: rgb,
        });
        let pairs = all_pairs().into_iter().map(|pair| Candidate {
            origin: Origin::Pair(pair),
            representative: palette.average_color(pair),
        });
        let candidates = singles.chain(pairs).collect();
        Self {
            palette,
            candidates,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn num_candidates(&self) -> usize {
        self.candidates.len()
    }
}

impl Default for PixelateMatcher {
    fn default() -> Self {
        Self::new(Palette::muted())
    }
}

impl Matcher for PixelateMatcher {
    type Output = Block;

    fn best_match(&self, target: Color) -> Block {
        let mut best = Block {
            representation: Representation::Single(VgaColor::Black),
            error: f64::INFINITY,
        };
        for candidate in self.candidates.iter() {
            let error = metric::fill_error(target, candidate.representative);
            // Singles come first, so a self-pair can never displace its single
            if error < best.error {
                best = Block {
                    representation: candidate.representation(),
                    error,
                };
            }
        }
        best
    }
}
