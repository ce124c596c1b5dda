//! Flood fill on a `PixelGrid`

use pixel_engine::{CellPos, ChangedCell, Color, PixelGrid, Result};

use crate::brushes;

/// Replaces the 4-connected region of the seed's color with `new_color`.
///
/// Filling with the color already at the seed is a no-op and returns an
/// empty diff. Otherwise every cell of the region changes, so the diff holds
/// exactly the region, seed first.
///
/// # Errors
///
/// `EngineError::OutOfBounds` if the seed lies outside the grid. The grid is
/// left unchanged.
pub fn flood_fill(grid: &mut PixelGrid, row: i32, col: i32, new_color: Color) -> Result<Vec<ChangedCell>> {
    let target_color = grid.get(row, col)?;
    if target_color == new_color {
        return Ok(Vec::new());
    }

    let seed = CellPos::new(row, col);
    let size = grid.size();
    let region = {
        let snapshot = &*grid;
        brushes::flood_fill_points(seed, size, |pos| snapshot.get(pos.row, pos.col).ok())
    };

    let mut changed = Vec::with_capacity(region.len());
    for pos in region {
        grid.set(pos.row, pos.col, new_color)?;
        changed.push(ChangedCell::new(pos, new_color));
    }

    log::debug!("flood fill at {seed}: {target_color} -> {new_color}, {} cells", changed.len());
    Ok(changed)
}
