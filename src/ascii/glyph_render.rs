//! Rendering glyphs to grayscale bitmaps so that their ink coverage can be measured
use crate::ascii::builtin_font::{glyph_rows, BUILTIN_GLYPH_SIZE};
use ab_glyph::{point, Font, FontVec, InvalidFont, ScaleFont};
use image::{GrayImage, Luma};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Brightness used to draw ink on the blank canvas
pub const INK: u8 = u8::MAX;

#[derive(Error, Debug)]
pub enum GlyphError {
    #[error("font has no glyph for {0:?}")]
    MissingGlyph(char),
    #[error("invalid font data: {0}")]
    InvalidFont(#[from] InvalidFont),
    #[error("could not read font file {path}")]
    FontIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Backend that can draw a single glyph in white onto a black square canvas
pub trait GlyphRasterizer {
    fn render_glyph_bitmap(&self, symbol: char, size: u32) -> Result<GrayImage, GlyphError>;
}

/// Rasterizes glyphs from a TrueType/OpenType font
pub struct TrueTypeRasterizer {
    font: FontVec,
}

impl TrueTypeRasterizer {
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, GlyphError> {
        let font = FontVec::try_from_vec(data)?;
        Ok(Self { font })
    }
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GlyphError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| GlyphError::FontIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(data)
    }
}

impl GlyphRasterizer for TrueTypeRasterizer {
    fn render_glyph_bitmap(&self, symbol: char, size: u32) -> Result<GrayImage, GlyphError> {
        let mut canvas = GrayImage::new(size, size);
        let glyph_id = self.font.glyph_id(symbol);
        if glyph_id.0 == 0 && !symbol.is_whitespace() {
            return Err(GlyphError::MissingGlyph(symbol));
        }
        // Text is drawn from the top left corner, so the baseline sits one ascent down
        let ascent = self.font.as_scaled(size as f32).ascent();
        let glyph = glyph_id.with_scale_and_position(size as f32, point(0.0, ascent));
        // Whitespace has no outline and leaves the canvas blank
        if let Some(outline) = self.font.outline_glyph(glyph) {
            let bounds = outline.px_bounds();
            outline.draw(|x, y, c| {
                let px = x as i64 + bounds.min.x as i64;
                let py = y as i64 + bounds.min.y as i64;
                // Ink falling outside the canvas is clipped
                if px >= 0 && py >= 0 && px < size as i64 && py < size as i64 {
                    let value = (c.clamp(0.0, 1.0) * INK as f32).round() as u8;
                    canvas.put_pixel(px as u32, py as u32, Luma([value]));
                }
            });
        }
        Ok(canvas)
    }
}

/// Rasterizes glyphs from the built-in 8x8 bitmap font, scaled by nearest neighbour
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinRasterizer;

impl GlyphRasterizer for BuiltinRasterizer {
    fn render_glyph_bitmap(&self, symbol: char, size: u32) -> Result<GrayImage, GlyphError> {
        let rows = glyph_rows(symbol).ok_or(GlyphError::MissingGlyph(symbol))?;
        let scale = (size as usize / BUILTIN_GLYPH_SIZE).max(1);
        let mut canvas = GrayImage::new(size, size);
        for (row_idx, row) in rows.iter().enumerate() {
            for col_idx in 0..BUILTIN_GLYPH_SIZE {
                if row & (0x80 >> col_idx) == 0 {
                    continue;
                }
                for dy in 0..scale {
                    for dx in 0..scale {
                        let x = (col_idx * scale + dx) as u32;
                        let y = (row_idx * scale + dy) as u32;
                        if x < size && y < size {
                            canvas.put_pixel(x, y, Luma([INK]));
                        }
                    }
                }
            }
        }
        Ok(canvas)
    }
}

/// Rasterizer picked from an optional font file, falling back to the built-in font
pub fn rasterizer_for(font_path: Option<&Path>) -> Result<Box<dyn GlyphRasterizer>, GlyphError> {
    match font_path {
        Some(path) => Ok(Box::new(TrueTypeRasterizer::from_file(path)?)),
        None => Ok(Box::new(BuiltinRasterizer)),
    }
}
