use std::io::{self, Write};

use pixel_engine_edit::{DrawingSession, Palette, PixelGrid};

use crate::options::OutputFormat;

/// Character used for colors that have no palette slot
pub const UNKNOWN_COLOR: char = '?';

pub fn write_grid(out: &mut dyn Write, session: &DrawingSession, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Hex => write_hex(out, session.grid()),
        OutputFormat::Palette => write_palette(out, session.grid(), session.palette()),
    }
}

/// One line per row, cells as space separated `#rrggbb`.
pub fn write_hex(out: &mut dyn Write, grid: &PixelGrid) -> io::Result<()> {
    for row in grid.rows() {
        let line: Vec<String> = row.iter().map(|c| c.to_hex()).collect();
        writeln!(out, "{}", line.join(" "))?;
    }
    Ok(())
}

/// One line per row, one character per cell: the palette index in base 36.
pub fn write_palette(out: &mut dyn Write, grid: &PixelGrid, palette: &Palette) -> io::Result<()> {
    for row in grid.rows() {
        let line: String = row
            .iter()
            .map(|c| palette.position(*c).and_then(palette_char).unwrap_or(UNKNOWN_COLOR))
            .collect();
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn palette_char(index: usize) -> Option<char> {
    char::from_digit(u32::try_from(index).ok()?, 36)
}
