//! Reading target colors out of an image
use crate::color::Color;
use image::imageops::{self, FilterType};
use image::RgbImage;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("could not read image {path}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("image has no pixels")]
    Empty,
}

/// Grid of RGB samples the matchers read from
pub trait ImageSource {
    /// Width and height in pixels
    fn dimensions(&self) -> (u32, u32);

    /// Color at `(x, y)`, or `None` outside the image
    fn pixel(&self, x: u32, y: u32) -> Option<Color>;

    /// Target color of one character cell.
    /// The source is expected to already be resized to the cell grid.
    fn sample_cell(&self, x: u32, y: u32) -> Option<Color> {
        self.pixel(x, y)
    }

    /// Truncated mean over the `block_size`x`block_size` block at block coordinates `(block_x, block_y)`.
    /// Pixels outside the image are left out of the mean, and a block with
    /// no pixels inside the image gives `None`.
    /// The grid driver crops partial edge blocks, so it only asks for whole ones.
    fn sample_block_average(&self, block_x: u32, block_y: u32, block_size: u32) -> Option<Color> {
        let (width, height) = self.dimensions();
        let (mut r, mut g, mut b, mut count) = (0u64, 0u64, 0u64, 0u64);
        let x0 = block_x as u64 * block_size as u64;
        let y0 = block_y as u64 * block_size as u64;
        // Rows and columns past the image edge are skipped
        let x1 = (x0 + block_size as u64).min(width as u64);
        let y1 = (y0 + block_size as u64).min(height as u64);
        for y in y0..y1 {
            for x in x0..x1 {
                if let Some(p) = self.pixel(x as u32, y as u32) {
                    r += p.r as u64;
                    g += p.g as u64;
                    b += p.b as u64;
                    count += 1;
                }
            }
        }
        if count == 0 {
            return None;
        }
        Some(Color::new(
            (r / count) as u8,
            (g / count) as u8,
            (b / count) as u8,
        ))
    }
}

impl ImageSource for RgbImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }
    fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width() && y < self.height() {
            let [r, g, b] = self.get_pixel(x, y).0;
            Some(Color::new(r, g, b))
        } else {
            None
        }
    }
}

/// Open an image file and convert it to 8-bit RGB
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RgbImage, SourceError> {
    let path = path.as_ref();
    let img = image::open(path)
        .map_err(|source| SourceError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgb8();
    if img.width() == 0 || img.height() == 0 {
        return Err(SourceError::Empty);
    }
    debug!(width = img.width(), height = img.height(), path = %path.display(), "loaded image");
    Ok(img)
}

/// Resize to exactly one pixel per character cell
pub fn resize_to_grid(img: &RgbImage, width: u32, height: u32) -> RgbImage {
    imageops::resize(img, width, height, FilterType::CatmullRom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_pixel_bounds() {
        let img = RgbImage::from_pixel(3, 2, Rgb([1, 2, 3]));
        assert_eq!(img.pixel(2, 1), Some(Color::new(1, 2, 3)));
        assert_eq!(img.pixel(3, 0), None);
        assert_eq!(img.pixel(0, 2), None);
        assert_eq!(img.sample_cell(0, 0), Some(Color::new(1, 2, 3)));
    }

    #[test]
    fn test_block_average_truncates() {
        let mut img = RgbImage::new(2, 2);
        img.put_pixel(0, 0, Rgb([255, 10, 1]));
        img.put_pixel(1, 0, Rgb([0, 10, 0]));
        img.put_pixel(0, 1, Rgb([0, 10, 0]));
        img.put_pixel(1, 1, Rgb([0, 11, 0]));
        assert_eq!(img.sample_block_average(0, 0, 2), Some(Color::new(63, 10, 0)));
    }

    #[test]
    fn test_partial_edge_block() {
        // 3x3 image with 2x2 blocks leaves a one pixel wide edge
        let mut img = RgbImage::from_pixel(3, 3, Rgb([0, 0, 0]));
        img.put_pixel(2, 0, Rgb([100, 100, 100]));
        img.put_pixel(2, 1, Rgb([50, 50, 50]));
        assert_eq!(img.sample_block_average(1, 0, 2), Some(Color::new(75, 75, 75)));
        assert_eq!(img.sample_block_average(1, 1, 2), Some(Color::new(0, 0, 0)));
    }

    #[test]
    fn test_block_fully_outside() {
        let img = RgbImage::from_pixel(4, 4, Rgb([9, 9, 9]));
        assert_eq!(img.sample_block_average(2, 0, 2), None);
        assert_eq!(img.sample_block_average(u32::MAX, u32::MAX, u32::MAX), None);
    }

    #[test]
    fn test_load_missing_image() {
        let res = load_image("/no/such/image.png");
        assert!(matches!(res, Err(SourceError::Unavailable { .. })));
    }

    #[test]
    fn test_resize_to_grid() {
        let img = RgbImage::from_pixel(40, 30, Rgb([200, 100, 50]));
        let small = resize_to_grid(&img, 8, 3);
        assert_eq!(small.dimensions(), (8, 3));
        let p = small.pixel(7, 2).unwrap();
        assert!(p.r.abs_diff(200) <= 1 && p.g.abs_diff(100) <= 1 && p.b.abs_diff(50) <= 1);
    }
}
