pub mod cli;
pub mod color;
pub mod convert;
pub mod grid;
pub mod matcher;
pub mod metric;
pub mod palette;
pub mod pixelate;
pub mod render;
pub mod source;

/// Module for matching colored characters to image cells
pub mod ascii;
