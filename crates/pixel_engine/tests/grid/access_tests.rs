use pixel_engine::{CellPos, Color, EngineError, PixelGrid};
use pretty_assertions::assert_eq;

const RED: Color = Color::new(0xFF, 0, 0);

#[test]
fn test_new_fills_background() {
    let grid = PixelGrid::new(16, Color::WHITE).unwrap();
    assert_eq!(16, grid.size());
    assert_eq!(256, grid.len());
    assert!(grid.cells().iter().all(|c| *c == Color::WHITE));
}

#[test]
fn test_new_rejects_non_positive_size() {
    assert_eq!(Err(EngineError::InvalidSize { size: 0 }), PixelGrid::new(0, Color::WHITE));
    assert_eq!(Err(EngineError::InvalidSize { size: -3 }), PixelGrid::new(-3, Color::WHITE));
}

#[test]
fn test_new_rejects_oversize() {
    let size = pixel_engine::MAX_GRID_SIZE + 1;
    assert_eq!(Err(EngineError::InvalidSize { size }), PixelGrid::new(size, Color::WHITE));
}

#[test]
fn test_set_then_get() {
    let mut grid = PixelGrid::new(4, Color::WHITE).unwrap();
    grid.set(2, 3, RED).unwrap();

    assert_eq!(RED, grid.get(2, 3).unwrap());
    for row in 0..4 {
        for col in 0..4 {
            if (row, col) != (2, 3) {
                assert_eq!(Color::WHITE, grid.get(row, col).unwrap(), "cell ({row}, {col}) should be untouched");
            }
        }
    }
}

#[test]
fn test_set_overwrites_in_place() {
    let mut grid = PixelGrid::new(3, Color::WHITE).unwrap();
    grid.set(1, 1, RED).unwrap();
    grid.set(1, 1, Color::BLACK).unwrap();
    assert_eq!(Color::BLACK, grid.get(1, 1).unwrap());
    assert_eq!(9, grid.len());
}

#[test]
fn test_get_out_of_bounds() {
    let grid = PixelGrid::new(4, Color::WHITE).unwrap();
    assert_eq!(Err(EngineError::OutOfBounds { row: 4, col: 0, size: 4 }), grid.get(4, 0));
    assert_eq!(Err(EngineError::OutOfBounds { row: 0, col: -1, size: 4 }), grid.get(0, -1));
}

#[test]
fn test_set_out_of_bounds_leaves_grid_unchanged() {
    let mut grid = PixelGrid::new(4, Color::WHITE).unwrap();
    let before = grid.clone();

    let err = grid.set(-1, 2, RED).unwrap_err();
    assert!(err.is_out_of_bounds());
    assert!(grid.set(0, 4, RED).is_err());

    assert_eq!(before, grid);
}

#[test]
fn test_flat_index_addressing() {
    let mut grid = PixelGrid::new(5, Color::WHITE).unwrap();

    assert_eq!(7, grid.index_of(CellPos::new(1, 2)).unwrap());
    assert_eq!(CellPos::new(1, 2), grid.position_of(7));

    grid.set_index(7, RED).unwrap();
    assert_eq!(RED, grid.get(1, 2).unwrap());
    assert_eq!(RED, grid.get_index(7).unwrap());
}

#[test]
fn test_flat_index_out_of_bounds() {
    let mut grid = PixelGrid::new(2, Color::WHITE).unwrap();
    assert_eq!(Err(EngineError::OutOfBounds { row: 2, col: 0, size: 2 }), grid.get_index(4));
    assert!(grid.set_index(4, RED).is_err());
    assert_eq!(4, grid.count(Color::WHITE));
}

#[test]
fn test_clear() {
    let mut grid = PixelGrid::new(4, Color::WHITE).unwrap();
    grid.set(0, 0, RED).unwrap();
    grid.set(3, 3, RED).unwrap();

    grid.clear(Color::BLACK);

    assert_eq!(16, grid.len());
    assert_eq!(16, grid.count(Color::BLACK));
}

#[test]
fn test_rows_projection() {
    let mut grid = PixelGrid::new(3, Color::WHITE).unwrap();
    grid.set(1, 0, RED).unwrap();

    let rows: Vec<&[Color]> = grid.rows().collect();
    assert_eq!(3, rows.len());
    assert_eq!(&[RED, Color::WHITE, Color::WHITE], rows[1]);
}
