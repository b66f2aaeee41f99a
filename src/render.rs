//! Turning search results into text or pixels
use crate::ascii::search::Cell;
use crate::grid::Grid;
use crate::palette::{Palette, VgaColor, RESET};
use crate::pixelate::{Block, Representation};
use image::{Rgb, RgbImage};

/// Rows of glyphs wrapped in background and foreground escape codes, reset after each cell
pub fn ansi_text(grid: &Grid<Cell>) -> String {
    grid.rows()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    format!(
                        "{}{}{}{}",
                        cell.bg.ansi_bg(),
                        cell.fg.ansi_fg(),
                        cell.glyph,
                        RESET
                    )
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Glyphs only, one line per row
pub fn plain_text(grid: &Grid<Cell>) -> String {
    let mut out = String::with_capacity((grid.width() as usize + 1) * grid.height() as usize);
    for row in grid.rows() {
        out.extend(row.iter().map(|cell| cell.glyph));
        out.push('\n');
    }
    out
}

/// Which of the two checkerboard colors sits at a position inside a block
pub fn checkerboard_pick(local_x: u32, local_y: u32, first: VgaColor, second: VgaColor) -> VgaColor {
    if (local_x / 2 + local_y / 2) % 2 == 0 {
        first
    } else {
        second
    }
}

/// Full resolution image with every block filled or dithered
pub fn pixel_buffer(grid: &Grid<Block>, palette: &Palette, block_size: u32) -> RgbImage {
    let width = grid.width() * block_size;
    let height = grid.height() * block_size;
    RgbImage::from_fn(width, height, |x, y| {
        let (local_x, local_y) = (x % block_size, y % block_size);
        let name = match grid.get(x / block_size, y / block_size) {
            Some(block) => match block.representation {
                Representation::Single(c) => c,
                Representation::Checkerboard(first, second) => {
                    checkerboard_pick(local_x, local_y, first, second)
                }
            },
            None => VgaColor::Black,
        };
        let color = palette.rgb(name);
        Rgb([color.r, color.g, color.b])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(glyph: char, fg: VgaColor, bg: VgaColor) -> Cell {
        Cell {
            glyph,
            fg,
            bg,
            scored_fg: fg,
            error: 0.0,
        }
    }

    fn block(representation: Representation) -> Block {
        Block {
            representation,
            error: 0.0,
        }
    }

    #[test]
    fn test_ansi_text() {
        let grid = Grid::from_items(
            2,
            2,
            vec![
                cell('#', VgaColor::Black, VgaColor::White),
                cell('.', VgaColor::White, VgaColor::Black),
                cell('@', VgaColor::White, VgaColor::Blue),
                cell('-', VgaColor::Black, VgaColor::Yellow),
            ],
        )
        .unwrap();
        let text = ansi_text(&grid);
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "\x1b[107m\x1b[30m#\x1b[0m\x1b[40m\x1b[97m.\x1b[0m"
        );
        assert_eq!(
            lines[1],
            "\x1b[44m\x1b[97m@\x1b[0m\x1b[103m\x1b[30m-\x1b[0m"
        );
    }

    #[test]
    fn test_plain_text() {
        let grid = Grid::from_items(
            3,
            1,
            vec![
                cell('#', VgaColor::Black, VgaColor::White),
                cell('/', VgaColor::White, VgaColor::Black),
                cell('\\', VgaColor::White, VgaColor::Black),
            ],
        )
        .unwrap();
        assert_eq!(plain_text(&grid), "#/\\\n");
    }

    #[test]
    fn test_single_fill() {
        let palette = Palette::muted();
        let grid = Grid::from_items(
            2,
            1,
            vec![
                block(Representation::Single(VgaColor::White)),
                block(Representation::Single(VgaColor::Blue)),
            ],
        )
        .unwrap();
        let img = pixel_buffer(&grid, &palette, 3);
        assert_eq!(img.dimensions(), (6, 3));
        for (x, _, p) in img.enumerate_pixels() {
            let expected = if x < 3 { VgaColor::White } else { VgaColor::Blue };
            let c = palette.rgb(expected);
            assert_eq!(*p, Rgb([c.r, c.g, c.b]));
        }
    }

    #[test]
    fn test_checkerboard_pattern() {
        let palette = Palette::muted();
        let (first, second) = (VgaColor::LightRed, VgaColor::LightCyan);
        let block_size = 7;
        let grid = Grid::from_items(
            2,
            2,
            vec![block(Representation::Checkerboard(first, second)); 4],
        )
        .unwrap();
        let img = pixel_buffer(&grid, &palette, block_size);
        let (c1, c2) = (palette.rgb(first), palette.rgb(second));
        for (x, y, p) in img.enumerate_pixels() {
            let (lx, ly) = (x % block_size, y % block_size);
            let expected = if (lx / 2 + ly / 2) % 2 == 0 { c1 } else { c2 };
            assert_eq!(*p, Rgb([expected.r, expected.g, expected.b]));
        }
        // Cells are two pixels wide
        assert_eq!(checkerboard_pick(1, 1, first, second), first);
        assert_eq!(checkerboard_pick(2, 0, first, second), second);
        assert_eq!(checkerboard_pick(2, 2, first, second), first);
    }
}
