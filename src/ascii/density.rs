//! Precomputed ink coverage of every candidate glyph
use crate::ascii::glyph_render::{GlyphError, GlyphRasterizer, INK};
use image::GrayImage;
use tracing::{debug, warn};

/// Canvas side length glyphs are measured at
pub const DEFAULT_FONT_SIZE: u32 = 16;

/// Punctuation and symbols searched over by default, in enumeration order
pub const DEFAULT_GLYPHS: [char; 21] = [
    '#', '@', '%', '&', '*', '+', '=', '-', '.', ':', ',', '"', '\'', '^', '~', '!', '|', '/',
    '\\', ';', '_',
];

/// Fraction of the canvas covered by ink, weighted by brightness
pub fn coverage(bitmap: &GrayImage) -> f64 {
    let pixel_count = bitmap.width() as u64 * bitmap.height() as u64;
    if pixel_count == 0 {
        return 0.0;
    }
    let total: u64 = bitmap.pixels().map(|p| p.0[0] as u64).sum();
    total as f64 / (pixel_count as f64 * INK as f64)
}

/// Density of each glyph, kept in candidate order.
/// Built once and only read afterwards.
#[derive(Debug)]
pub struct DensityTable {
    entries: Vec<(char, f64)>,
    failures: Vec<(char, GlyphError)>,
}

impl DensityTable {
    /// Measure every glyph with `rasterizer` at `size`x`size` pixels.
    /// Glyphs that fail to render keep a density of zero and stay candidates.
    pub fn compute<R: GlyphRasterizer + ?Sized>(rasterizer: &R, glyphs: &[char], size: u32) -> Self {
        let mut entries = Vec::with_capacity(glyphs.len());
        let mut failures = vec![];
        for &symbol in glyphs.iter() {
            let density = match rasterizer.render_glyph_bitmap(symbol, size) {
                Ok(bitmap) => coverage(&bitmap),
                Err(e) => {
                    warn!(glyph = ?symbol, error = %e, "could not rasterize glyph, using zero density");
                    failures.push((symbol, e));
                    0.0
                }
            };
            debug!(glyph = ?symbol, density, "measured glyph");
            entries.push((symbol, density));
        }
        Self { entries, failures }
    }

    /// Table with given densities, clamped to `[0, 1]`
    pub fn from_densities<I: IntoIterator<Item = (char, f64)>>(densities: I) -> Self {
        Self {
            entries: densities
                .into_iter()
                .map(|(c, d)| (c, d.clamp(0.0, 1.0)))
                .collect(),
            failures: vec![],
        }
    }

    pub fn density(&self, symbol: char) -> Option<f64> {
        self.entries
            .iter()
            .find(|(c, _)| *c == symbol)
            .map(|(_, d)| *d)
    }

    /// Glyphs and their densities in candidate order
    pub fn entries(&self) -> &[(char, f64)] {
        &self.entries
    }

    /// Glyphs the rasterizer could not draw
    pub fn failures(&self) -> &[(char, GlyphError)] {
        &self.failures
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::glyph_render::{BuiltinRasterizer, TrueTypeRasterizer};
    use image::Luma;

    struct FailingRasterizer;

    impl GlyphRasterizer for FailingRasterizer {
        fn render_glyph_bitmap(&self, symbol: char, _size: u32) -> Result<GrayImage, GlyphError> {
            Err(GlyphError::MissingGlyph(symbol))
        }
    }

    #[test]
    fn test_coverage() {
        let mut img = GrayImage::new(2, 2);
        assert_eq!(coverage(&img), 0.0);
        img.put_pixel(0, 0, Luma([255]));
        assert_eq!(coverage(&img), 0.25);
        for p in img.pixels_mut() {
            *p = Luma([255]);
        }
        assert_eq!(coverage(&img), 1.0);
        assert_eq!(coverage(&GrayImage::new(0, 0)), 0.0);
    }

    #[test]
    fn test_densities_in_bounds() {
        let table = DensityTable::compute(&BuiltinRasterizer, &DEFAULT_GLYPHS, DEFAULT_FONT_SIZE);
        assert_eq!(table.len(), DEFAULT_GLYPHS.len());
        assert!(table.failures().is_empty());
        for (symbol, density) in table.entries() {
            assert!((0.0..=1.0).contains(density), "{symbol:?} has density {density}");
        }
        // Keeps the candidate order
        let order: Vec<char> = table.entries().iter().map(|(c, _)| *c).collect();
        assert_eq!(order, DEFAULT_GLYPHS.to_vec());
    }

    #[test]
    fn test_relative_densities() {
        let table = DensityTable::compute(&BuiltinRasterizer, &DEFAULT_GLYPHS, DEFAULT_FONT_SIZE);
        let hash = table.density('#').unwrap();
        let dot = table.density('.').unwrap();
        assert!(hash > dot);
        assert!(dot > 0.0);
        assert_eq!(table.density('?'), None);
    }

    #[test]
    fn test_failed_glyph_stays_candidate() {
        let table = DensityTable::compute(&FailingRasterizer, &['#', '@'], DEFAULT_FONT_SIZE);
        assert_eq!(table.len(), 2);
        assert_eq!(table.density('#'), Some(0.0));
        assert_eq!(table.density('@'), Some(0.0));
        assert_eq!(table.failures().len(), 2);
        assert_eq!(table.failures()[0].0, '#');
    }

    #[test]
    fn test_unsupported_glyph_in_builtin_font() {
        let table = DensityTable::compute(&BuiltinRasterizer, &['#', '▒'], DEFAULT_FONT_SIZE);
        assert!(table.density('#').unwrap() > 0.0);
        assert_eq!(table.density('▒'), Some(0.0));
        assert_eq!(table.failures().len(), 1);
    }

    fn dejavu_mono() -> TrueTypeRasterizer {
        TrueTypeRasterizer::from_bytes(include_bytes!("../../data/DejaVuSansMono.ttf").to_vec()).unwrap()
    }

    #[test]
    fn test_truetype_densities_in_bounds() {
        let table = DensityTable::compute(&dejavu_mono(), &DEFAULT_GLYPHS, DEFAULT_FONT_SIZE);
        assert!(table.failures().is_empty());
        for (symbol, density) in table.entries() {
            assert!((0.0..=1.0).contains(density), "{symbol:?} has density {density}");
        }
        let order: Vec<char> = table.entries().iter().map(|(c, _)| *c).collect();
        assert_eq!(order, DEFAULT_GLYPHS.to_vec());
        assert!(table.density('@').unwrap() > table.density('.').unwrap());
    }

    #[test]
    fn test_truetype_missing_glyph_gets_zero_density() {
        let table = DensityTable::compute(&dejavu_mono(), &['#', '漢', ' '], DEFAULT_FONT_SIZE);
        assert_eq!(table.len(), 3);
        assert!(table.density('#').unwrap() > 0.0);
        assert_eq!(table.density('漢'), Some(0.0));
        assert_eq!(table.density(' '), Some(0.0));
        assert_eq!(table.failures().len(), 1);
        assert!(matches!(table.failures()[0], ('漢', GlyphError::MissingGlyph('漢'))));
    }

    #[test]
    fn test_from_densities_clamps() {
        let table = DensityTable::from_densities([('a', 1.5), ('b', -0.5), ('c', 0.5)]);
        assert_eq!(table.density('a'), Some(1.0));
        assert_eq!(table.density('b'), Some(0.0));
        assert_eq!(table.density('c'), Some(0.5));
    }
}
