//! Running a matcher over every cell or block of an image
use crate::matcher::Matcher;
use crate::source::ImageSource;
use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GridError {
    #[error("block size must be at least one pixel")]
    ZeroBlockSize,
    #[error("grid must be at least one cell wide and tall, got {width}x{height}")]
    ZeroDimensions { width: u32, height: u32 },
    #[error("expected {expected} items for the grid, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("block size {block_size} does not fit in a {width}x{height} image")]
    BlockLargerThanImage {
        block_size: u32,
        width: u32,
        height: u32,
    },
}

/// Row-major grid of search results
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    width: u32,
    height: u32,
    items: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid from row-major items
    pub fn from_items(width: u32, height: u32, items: Vec<T>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroDimensions { width, height });
        }
        let expected = width as usize * height as usize;
        if items.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                actual: items.len(),
            });
        }
        Ok(Self {
            width,
            height,
            items,
        })
    }
    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
    pub fn get(&self, x: u32, y: u32) -> Option<&T> {
        if x < self.width && y < self.height {
            self.items.get(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.items.chunks(self.width as usize)
    }
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

/// Search every pixel of a source that has already been resized to the cell grid
pub fn match_cells<S, M>(source: &S, matcher: &M) -> Result<Grid<M::Output>, GridError>
where
    S: ImageSource + Sync,
    M: Matcher,
{
    let (width, height) = source.dimensions();
    if width == 0 || height == 0 {
        return Err(GridError::ZeroDimensions { width, height });
    }
    debug!(width, height, "matching cells");
    let items = (0..width as usize * height as usize)
        .into_par_iter()
        .map(|idx| {
            let x = (idx % width as usize) as u32;
            let y = (idx / width as usize) as u32;
            let target = source.sample_cell(x, y).unwrap_or_default();
            matcher.best_match(target)
        })
        .collect();
    Grid::from_items(width, height, items)
}

/// Search the average color of every whole `block_size` block.
/// Any remainder narrower than a block at the right and bottom edges is cropped.
pub fn match_blocks<S, M>(
    source: &S,
    matcher: &M,
    block_size: u32,
) -> Result<Grid<M::Output>, GridError>
where
    S: ImageSource + Sync,
    M: Matcher,
{
    if block_size == 0 {
        return Err(GridError::ZeroBlockSize);
    }
    let (width, height) = source.dimensions();
    let (cols, rows) = (width / block_size, height / block_size);
    if cols == 0 || rows == 0 {
        return Err(GridError::BlockLargerThanImage {
            block_size,
            width,
            height,
        });
    }
    debug!(cols, rows, block_size, "matching blocks");
    let items = (0..cols as usize * rows as usize)
        .into_par_iter()
        .map(|idx| {
            let bx = (idx % cols as usize) as u32;
            let by = (idx / cols as usize) as u32;
            let target = source
                .sample_block_average(bx, by, block_size)
                .unwrap_or_default();
            matcher.best_match(target)
        })
        .collect();
    Grid::from_items(cols, rows, items)
}
