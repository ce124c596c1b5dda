//! Shared test helpers for grid tests

#![allow(dead_code)]

use pixel_engine_edit::{CellPos, ChangedCell, Color, PixelGrid};

pub const WHITE: Color = Color::WHITE;
pub const BLACK: Color = Color::BLACK;
pub const RED: Color = Color::new(0xFF, 0x00, 0x00);
pub const GREEN: Color = Color::new(0x00, 0xFF, 0x00);
pub const BLUE: Color = Color::new(0x00, 0x00, 0xFF);

/// Create a grid from rows of characters: `.` white, `#` black, `r` red,
/// `g` green, `b` blue.
pub fn grid_from_pattern(pattern: &[&str]) -> PixelGrid {
    let size = pattern.len() as i32;
    let mut grid = PixelGrid::new(size, WHITE).unwrap();
    for (row, line) in pattern.iter().enumerate() {
        assert_eq!(pattern.len(), line.len(), "pattern must be square (row {row})");
        for (col, ch) in line.chars().enumerate() {
            grid.set(row as i32, col as i32, color_for(ch)).unwrap();
        }
    }
    grid
}

/// Render a grid back into the pattern notation of `grid_from_pattern`.
pub fn grid_to_pattern(grid: &PixelGrid) -> Vec<String> {
    grid.rows().map(|row| row.iter().map(|c| char_for(*c)).collect()).collect()
}

pub fn color_for(ch: char) -> Color {
    match ch {
        '.' => WHITE,
        '#' => BLACK,
        'r' => RED,
        'g' => GREEN,
        'b' => BLUE,
        _ => panic!("unknown pattern char {ch:?}"),
    }
}

pub fn char_for(color: Color) -> char {
    match color {
        WHITE => '.',
        BLACK => '#',
        RED => 'r',
        GREEN => 'g',
        BLUE => 'b',
        _ => '?',
    }
}

/// Positions of a diff, sorted so tests do not depend on visitation order
pub fn sorted_positions(diff: &[ChangedCell]) -> Vec<CellPos> {
    let mut positions: Vec<CellPos> = diff.iter().map(|c| c.pos).collect();
    positions.sort();
    positions
}

/// Assert that a grid matches a pattern, printing both on mismatch
pub fn assert_grid_equals(grid: &PixelGrid, expected: &[&str], message: &str) {
    let actual = grid_to_pattern(grid);
    let expected: Vec<String> = expected.iter().map(|s| (*s).to_string()).collect();
    pretty_assertions::assert_eq!(expected, actual, "{}", message);
}
