use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::time::Instant;
use vga_art::cli::{write_summary, AsciiArgs, Cli, Command, PixelateArgs};
use vga_art::convert::{image_to_ascii, pixelate_image};
use vga_art::source::load_image;

fn run_ascii(args: &AsciiArgs) -> Result<()> {
    let (width, height) = if args.fit {
        let (cols, rows) = crossterm::terminal::size().context("could not query terminal size")?;
        // Leave a line for the prompt
        (cols as u32, rows.saturating_sub(1).max(1) as u32)
    } else {
        (args.width, args.height)
    };
    let img = load_image(&args.input)?;

    let start = Instant::now();
    let art = image_to_ascii(&img, &args.options(width, height))?;
    let elapsed = start.elapsed();

    if !args.quiet {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", art.ansi_text())?;
    }
    std::fs::write(&args.output, art.plain_text())
        .with_context(|| format!("could not write {}", args.output.display()))?;
    write_summary(&mut std::io::stderr(), "ASCII art", &args.output, elapsed)?;
    Ok(())
}

fn run_pixelate(args: &PixelateArgs) -> Result<()> {
    let img = load_image(&args.input)?;

    let start = Instant::now();
    let pixelated = pixelate_image(&img, &args.options())?;
    let elapsed = start.elapsed();

    pixelated
        .save(&args.output)
        .with_context(|| format!("could not save {}", args.output.display()))?;
    write_summary(&mut std::io::stderr(), "Pixelated image", &args.output, elapsed)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Command::Ascii(args) => run_ascii(args),
        Command::Pixelate(args) => run_pixelate(args),
    }
}
