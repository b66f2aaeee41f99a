//! End to end conversions from a loaded image to the two kinds of output
use crate::ascii::density::{DensityTable, DEFAULT_FONT_SIZE, DEFAULT_GLYPHS};
use crate::ascii::glyph_render::{rasterizer_for, GlyphError};
use crate::ascii::search::{AsciiMatcher, Cell};
use crate::grid::{match_blocks, match_cells, Grid, GridError};
use crate::palette::Palette;
use crate::pixelate::{Block, PixelateMatcher};
use crate::render;
use crate::source::resize_to_grid;
use derive_setters::Setters;
use image::RgbImage;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_WIDTH: u32 = 40;
pub const DEFAULT_HEIGHT: u32 = 5;
pub const DEFAULT_BLOCK_SIZE: u32 = 12;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    Glyph(#[from] GlyphError),
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Settings for colored character output
#[derive(Debug, Clone, Setters)]
pub struct AsciiOptions {
    /// Output width in characters
    pub width: u32,
    /// Output height in characters
    pub height: u32,
    /// Canvas size glyph densities are measured at
    pub font_size: u32,
    /// Candidate glyphs, earlier ones win ties
    #[setters(into)]
    pub glyphs: Vec<char>,
    /// Font file to measure glyphs with instead of the built-in bitmap font
    #[setters(strip_option)]
    pub font: Option<PathBuf>,
}

impl Default for AsciiOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            font_size: DEFAULT_FONT_SIZE,
            glyphs: DEFAULT_GLYPHS.to_vec(),
            font: None,
        }
    }
}

/// Settings for block pixelation
#[derive(Debug, Clone, Setters)]
pub struct PixelateOptions {
    /// Side length of a block in source pixels
    pub block_size: u32,
}

impl Default for PixelateOptions {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

/// Character grid ready to be printed or saved
#[derive(Debug)]
pub struct AsciiArt {
    pub cells: Grid<Cell>,
    /// Glyphs that could not be rasterized and were scored with zero density
    pub failed_glyphs: Vec<char>,
}

impl AsciiArt {
    pub fn ansi_text(&self) -> String {
        render::ansi_text(&self.cells)
    }
    pub fn plain_text(&self) -> String {
        render::plain_text(&self.cells)
    }
}

/// Measure the candidate glyphs once, with the requested font or the built-in one
pub fn density_table(options: &AsciiOptions) -> Result<DensityTable, ConvertError> {
    let rasterizer = rasterizer_for(options.font.as_deref())?;
    let table = DensityTable::compute(&*rasterizer, &options.glyphs, options.font_size);
    if !table.failures().is_empty() {
        warn!(
            count = table.failures().len(),
            "some glyphs could not be rasterized"
        );
    }
    Ok(table)
}

/// Resize `img` to the character grid and pick colors and a glyph for every cell
pub fn image_to_ascii(img: &RgbImage, options: &AsciiOptions) -> Result<AsciiArt, ConvertError> {
    if img.width() == 0 || img.height() == 0 {
        return Err(GridError::ZeroDimensions {
            width: img.width(),
            height: img.height(),
        }
        .into());
    }
    if options.width == 0 || options.height == 0 {
        return Err(GridError::ZeroDimensions {
            width: options.width,
            height: options.height,
        }
        .into());
    }
    let table = density_table(options)?;
    let matcher = AsciiMatcher::new(Palette::bright(), &table);
    let resized = resize_to_grid(img, options.width, options.height);
    let cells = match_cells(&resized, &matcher)?;
    info!(
        width = cells.width(),
        height = cells.height(),
        candidates = matcher.num_candidates(),
        "converted image to ascii"
    );
    Ok(AsciiArt {
        cells,
        failed_glyphs: table.failures().iter().map(|(c, _)| *c).collect(),
    })
}

/// Blocks chosen for every whole block of `img`
pub fn pixelate_blocks(
    img: &RgbImage,
    matcher: &PixelateMatcher,
    options: &PixelateOptions,
) -> Result<Grid<Block>, ConvertError> {
    Ok(match_blocks(img, matcher, options.block_size)?)
}

/// Pixelate `img` with the muted palette into a new image of whole blocks
pub fn pixelate_image(img: &RgbImage, options: &PixelateOptions) -> Result<RgbImage, ConvertError> {
    let matcher = PixelateMatcher::new(Palette::muted());
    let blocks = pixelate_blocks(img, &matcher, options)?;
    info!(
        cols = blocks.width(),
        rows = blocks.height(),
        block_size = options.block_size,
        "pixelated image"
    );
    Ok(render::pixel_buffer(
        &blocks,
        matcher.palette(),
        options.block_size,
    ))
}
