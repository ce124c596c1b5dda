use std::cell::Cell;

use pixel_engine_edit::{CellPos, brushes::flood_fill_points};

fn bool_grid(pattern: &[&str]) -> Vec<Vec<bool>> {
    pattern.iter().map(|line| line.chars().map(|c| c == '#').collect()).collect()
}

#[test]
fn test_points_on_bool_grid() {
    let grid = bool_grid(&[
        "....", //
        "####", //
        "....", //
        "....",
    ]);

    let mut points = flood_fill_points(CellPos::new(3, 0), 4, |p| grid[p.row as usize][p.col as usize]);
    points.sort();

    let expected: Vec<CellPos> = (2..4).flat_map(|row| (0..4).map(move |col| CellPos::new(row, col))).collect();
    assert_eq!(expected, points);
}

#[test]
fn test_each_cell_examined_once() {
    let reads = Cell::new(0usize);
    let size = 20;

    let points = flood_fill_points(CellPos::new(0, 0), size, |_| {
        reads.set(reads.get() + 1);
        0u8
    });

    assert_eq!((size * size) as usize, points.len());
    // the seed read plus one read per other cell
    assert_eq!((size * size) as usize, reads.get());
}

#[test]
fn test_seed_is_first() {
    let points = flood_fill_points(CellPos::new(2, 3), 5, |_| true);
    assert_eq!(CellPos::new(2, 3), points[0]);
}
