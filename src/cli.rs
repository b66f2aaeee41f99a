//! Command line arguments
use crate::ascii::density::{DEFAULT_FONT_SIZE, DEFAULT_GLYPHS};
use crate::convert::{
    AsciiOptions, PixelateOptions, DEFAULT_BLOCK_SIZE, DEFAULT_HEIGHT, DEFAULT_WIDTH,
};
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(version, about = "Render images with the 16 VGA text-mode colors")]
pub struct Cli {
    /// Log more, repeat for even more
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Colored characters with a foreground and background per cell
    Ascii(AsciiArgs),
    /// Blocks of one color or a checkerboard of two
    Pixelate(PixelateArgs),
}

#[derive(Args, Debug)]
pub struct AsciiArgs {
    /// Image to convert
    pub input: PathBuf,

    /// Output width in characters
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Output height in characters
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Size the output to the current terminal instead
    #[arg(long, conflicts_with_all = ["width", "height"])]
    pub fit: bool,

    /// TrueType/OpenType font used to measure glyph coverage
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Canvas size glyphs are measured at
    #[arg(long, default_value_t = DEFAULT_FONT_SIZE)]
    pub font_size: u32,

    /// Candidate glyphs, in tie-breaking order
    #[arg(long, default_value_t = DEFAULT_GLYPHS.iter().collect::<String>())]
    pub glyphs: String,

    /// File the uncolored characters are saved to
    #[arg(short, long, default_value = "output.txt")]
    pub output: PathBuf,

    /// Do not print the colored characters to the terminal
    #[arg(long)]
    pub quiet: bool,
}

impl AsciiArgs {
    /// Options for a grid of `width` by `height` characters
    pub fn options(&self, width: u32, height: u32) -> AsciiOptions {
        let options = AsciiOptions::default()
            .width(width)
            .height(height)
            .font_size(self.font_size)
            .glyphs(self.glyphs.chars().collect::<Vec<_>>());
        match &self.font {
            Some(path) => options.font(path.clone()),
            None => options,
        }
    }
}

#[derive(Args, Debug)]
pub struct PixelateArgs {
    /// Image to convert
    pub input: PathBuf,

    /// Side length of a block in pixels
    #[arg(short = 's', long, default_value_t = DEFAULT_BLOCK_SIZE)]
    pub pixel_size: u32,

    /// Where the pixelated image is saved, the format follows the extension
    #[arg(short, long, default_value = "output_pixelized.png")]
    pub output: PathBuf,
}

impl PixelateArgs {
    pub fn options(&self) -> PixelateOptions {
        PixelateOptions::default().block_size(self.pixel_size)
    }
}

/// Where the result went and how long rendering took, written after every run
pub fn write_summary<W: Write>(
    out: &mut W,
    what: &str,
    output: &Path,
    elapsed: Duration,
) -> std::io::Result<()> {
    writeln!(out, "{what} saved to {}", output.display())?;
    writeln!(out, "Total time: {:.4} seconds", elapsed.as_secs_f64())
}
