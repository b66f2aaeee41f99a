//! The 16 text-mode VGA colors, in both of their flavours
use crate::color::{self, Color};
use std::fmt;

pub const NUM_COLORS: usize = 16;

/// Escape sequence that resets terminal colors
pub const RESET: &str = "\x1b[0m";

/// Canonical names of the palette entries, in enumeration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VgaColor {
    Black,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Brown,
    LightGray,
    DarkGray,
    LightBlue,
    LightGreen,
    LightCyan,
    LightRed,
    LightMagenta,
    Yellow,
    White,
}

impl VgaColor {
    pub const ALL: [VgaColor; NUM_COLORS] = [
        VgaColor::Black,
        VgaColor::Blue,
        VgaColor::Green,
        VgaColor::Cyan,
        VgaColor::Red,
        VgaColor::Magenta,
        VgaColor::Brown,
        VgaColor::LightGray,
        VgaColor::DarkGray,
        VgaColor::LightBlue,
        VgaColor::LightGreen,
        VgaColor::LightCyan,
        VgaColor::LightRed,
        VgaColor::LightMagenta,
        VgaColor::Yellow,
        VgaColor::White,
    ];

    /// Position in the canonical order
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            VgaColor::Black => "black",
            VgaColor::Blue => "blue",
            VgaColor::Green => "green",
            VgaColor::Cyan => "cyan",
            VgaColor::Red => "red",
            VgaColor::Magenta => "magenta",
            VgaColor::Brown => "brown",
            VgaColor::LightGray => "light_gray",
            VgaColor::DarkGray => "dark_gray",
            VgaColor::LightBlue => "light_blue",
            VgaColor::LightGreen => "light_green",
            VgaColor::LightCyan => "light_cyan",
            VgaColor::LightRed => "light_red",
            VgaColor::LightMagenta => "light_magenta",
            VgaColor::Yellow => "yellow",
            VgaColor::White => "white",
        }
    }

    /// SGR parameter selecting this color as the foreground
    fn sgr_foreground(self) -> u8 {
        match self {
            VgaColor::Black => 30,
            VgaColor::Red => 31,
            VgaColor::Green => 32,
            VgaColor::Brown => 33,
            VgaColor::Blue => 34,
            VgaColor::Magenta => 35,
            VgaColor::Cyan => 36,
            VgaColor::LightGray => 37,
            VgaColor::DarkGray => 90,
            VgaColor::LightRed => 91,
            VgaColor::LightGreen => 92,
            VgaColor::Yellow => 93,
            VgaColor::LightBlue => 94,
            VgaColor::LightMagenta => 95,
            VgaColor::LightCyan => 96,
            VgaColor::White => 97,
        }
    }

    /// Escape sequence switching the terminal foreground to this color
    pub fn ansi_fg(self) -> String {
        format!("\x1b[{}m", self.sgr_foreground())
    }

    /// Escape sequence switching the terminal background to this color
    pub fn ansi_bg(self) -> String {
        // Background codes sit 10 above their foreground counterparts
        format!("\x1b[{}m", self.sgr_foreground() + 10)
    }
}

impl fmt::Display for VgaColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unordered pair of palette entries, dithered together in a checkerboard.
/// Both entries may be the same color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorPair {
    pub first: VgaColor,
    pub second: VgaColor,
}

impl ColorPair {
    pub fn new(first: VgaColor, second: VgaColor) -> Self {
        Self { first, second }
    }
    pub fn is_self_pair(&self) -> bool {
        self.first == self.second
    }
}

/// Every unordered pair of palette entries, self-pairs included, ordered by
/// first entry and then second entry in palette order
pub fn all_pairs() -> Vec<ColorPair> {
    let mut pairs = Vec::with_capacity(NUM_COLORS * (NUM_COLORS + 1) / 2);
    for (i, first) in VgaColor::ALL.iter().enumerate() {
        for second in VgaColor::ALL[i..].iter() {
            pairs.push(ColorPair::new(*first, *second));
        }
    }
    pairs
}

/// Fixed mapping from the 16 names to RGB values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Color; NUM_COLORS],
}

impl Palette {
    /// The ANSI-style palette used for colored text
    pub fn bright() -> Self {
        Self {
            colors: [
                Color::new(0, 0, 0),
                Color::new(0, 0, 128),
                Color::new(0, 128, 0),
                Color::new(0, 128, 128),
                Color::new(128, 0, 0),
                Color::new(128, 0, 128),
                Color::new(128, 128, 0),
                Color::new(192, 192, 192),
                Color::new(128, 128, 128),
                Color::new(0, 0, 255),
                Color::new(0, 255, 0),
                Color::new(0, 255, 255),
                Color::new(255, 0, 0),
                Color::new(255, 0, 255),
                Color::new(255, 255, 0),
                Color::new(255, 255, 255),
            ],
        }
    }

    /// The darker palette used for pixelation.
    /// Note that red and brown share a value here.
    pub fn muted() -> Self {
        Self {
            colors: [
                Color::new(0, 0, 0),
                Color::new(0, 0, 64),
                Color::new(0, 64, 0),
                Color::new(0, 64, 64),
                Color::new(64, 0, 0),
                Color::new(64, 0, 64),
                Color::new(64, 0, 0),
                Color::new(64, 64, 64),
                Color::new(32, 32, 32),
                Color::new(0, 0, 255),
                Color::new(0, 255, 0),
                Color::new(0, 255, 255),
                Color::new(255, 0, 0),
                Color::new(255, 0, 255),
                Color::new(255, 255, 0),
                Color::new(255, 255, 255),
            ],
        }
    }

    pub fn rgb(&self, name: VgaColor) -> Color {
        self.colors[name.index()]
    }

    /// Entries with their names, in palette order
    pub fn iter(&self) -> impl Iterator<Item = (VgaColor, Color)> + '_ {
        VgaColor::ALL.iter().map(|name| (*name, self.rgb(*name)))
    }

    /// Color a checkerboard of the pair looks like from a distance
    pub fn average_color(&self, pair: ColorPair) -> Color {
        color::midpoint(self.rgb(pair.first), self.rgb(pair.second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_pairs() {
        let pairs = all_pairs();
        assert_eq!(pairs.len(), 136);
        assert_eq!(pairs[0], ColorPair::new(VgaColor::Black, VgaColor::Black));
        assert_eq!(pairs[1], ColorPair::new(VgaColor::Black, VgaColor::Blue));
        assert_eq!(pairs[16], ColorPair::new(VgaColor::Blue, VgaColor::Blue));
        assert_eq!(
            pairs[135],
            ColorPair::new(VgaColor::White, VgaColor::White)
        );
        assert_eq!(pairs.iter().filter(|p| p.is_self_pair()).count(), 16);
        // No pair shows up twice in either order
        for (i, p) in pairs.iter().enumerate() {
            for q in pairs[i + 1..].iter() {
                assert!(!(p.first == q.second && p.second == q.first));
                assert_ne!(p, q);
            }
        }
    }

    #[test]
    fn test_average_color_integrity() {
        for palette in [Palette::bright(), Palette::muted()] {
            for a in VgaColor::ALL {
                for b in VgaColor::ALL {
                    let (ca, cb) = (palette.rgb(a), palette.rgb(b));
                    let avg = palette.average_color(ColorPair::new(a, b));
                    assert_eq!(avg.r as u16, (ca.r as u16 + cb.r as u16) / 2);
                    assert_eq!(avg.g as u16, (ca.g as u16 + cb.g as u16) / 2);
                    assert_eq!(avg.b as u16, (ca.b as u16 + cb.b as u16) / 2);
                    assert_eq!(avg, palette.average_color(ColorPair::new(b, a)));
                }
            }
        }
    }

    #[test]
    fn test_palettes_are_distinct() {
        let bright = Palette::bright();
        let muted = Palette::muted();
        assert_ne!(bright, muted);
        assert_eq!(bright.rgb(VgaColor::LightGray), Color::new(192, 192, 192));
        assert_eq!(muted.rgb(VgaColor::LightGray), Color::new(64, 64, 64));
        assert_eq!(muted.rgb(VgaColor::Red), muted.rgb(VgaColor::Brown));
        assert_eq!(bright.iter().count(), NUM_COLORS);
    }

    #[test]
    fn test_ansi_codes() {
        assert_eq!(VgaColor::Black.ansi_fg(), "\x1b[30m");
        assert_eq!(VgaColor::Black.ansi_bg(), "\x1b[40m");
        assert_eq!(VgaColor::Brown.ansi_fg(), "\x1b[33m");
        assert_eq!(VgaColor::DarkGray.ansi_bg(), "\x1b[100m");
        assert_eq!(VgaColor::White.ansi_fg(), "\x1b[97m");
        assert_eq!(VgaColor::White.ansi_bg(), "\x1b[107m");
        assert_eq!(VgaColor::LightCyan.to_string(), "light_cyan");
    }
}
