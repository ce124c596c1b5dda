use pixel_engine::{Color, EngineError, PixelGrid};

#[test]
fn test_resize_resets_all_cells() {
    let mut grid = PixelGrid::new(4, Color::WHITE).unwrap();
    for i in 0..4 {
        grid.set(i, i, Color::BLACK).unwrap();
    }

    let resized = grid.resized(6, Color::WHITE).unwrap();

    assert_eq!(6, resized.size());
    assert_eq!(36, resized.len());
    assert_eq!(36, resized.count(Color::WHITE));
}

#[test]
fn test_resize_smaller_discards_contents() {
    let mut grid = PixelGrid::new(8, Color::WHITE).unwrap();
    grid.set(0, 0, Color::BLACK).unwrap();

    let resized = grid.resized(2, Color::WHITE).unwrap();

    assert_eq!(4, resized.len());
    assert_eq!(Color::WHITE, resized.get(0, 0).unwrap());
}

#[test]
fn test_resize_same_size_is_fresh() {
    let mut grid = PixelGrid::new(3, Color::WHITE).unwrap();
    grid.set(1, 1, Color::BLACK).unwrap();

    let resized = grid.resized(3, Color::WHITE).unwrap();

    assert_eq!(9, resized.count(Color::WHITE));
    // the source grid is left as it was
    assert_eq!(Color::BLACK, grid.get(1, 1).unwrap());
}

#[test]
fn test_resize_invalid_size() {
    let grid = PixelGrid::new(3, Color::WHITE).unwrap();
    assert_eq!(Err(EngineError::InvalidSize { size: 0 }), grid.resized(0, Color::WHITE));
}

#[test]
fn test_resize_to_single_cell() {
    let grid = PixelGrid::new(16, Color::WHITE).unwrap();
    let resized = grid.resized(1, Color::BLACK).unwrap();
    assert_eq!(1, resized.len());
    assert_eq!(Color::BLACK, resized.get(0, 0).unwrap());
}
