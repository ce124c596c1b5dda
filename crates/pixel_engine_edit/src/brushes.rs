//! Brush algorithms for the pixel grid
//!
//! Contains the pure point computations, without touching any grid:
//! - Lines (Bresenham's algorithm), used to interpolate pointer strokes, and clipping of a stroke segment to the grid
//! - Flood fill (4-connected BFS)

use std::collections::VecDeque;

use pixel_engine::{CellPos, MAX_GRID_SIZE};

// ═══════════════════════════════════════════════════════════════════════════
// Bresenham Line Algorithm
// ═══════════════════════════════════════════════════════════════════════════

/// Bresenham's line algorithm - returns the cells along the line
///
/// Produces a connected series of cells from `from` to `to`, both ends
/// included. Coordinates are not bounds checked and one cell is produced per
/// step, so clip with `clip_line` first when the ends come from a pointer.
pub fn bresenham_line(from: CellPos, to: CellPos) -> Vec<CellPos> {
    let mut points = Vec::new();

    let (to_col, to_row) = (i64::from(to.col), i64::from(to.row));
    let dx = (to_col - i64::from(from.col)).abs();
    let dy = -(to_row - i64::from(from.row)).abs();
    let sx = if from.col < to.col { 1 } else { -1 };
    let sy = if from.row < to.row { 1 } else { -1 };
    let mut err = dx + dy;

    let mut col = i64::from(from.col);
    let mut row = i64::from(from.row);

    loop {
        // row and col never leave the from..=to range
        points.push(CellPos::new(row as i32, col as i32));

        if col == to_col && row == to_row {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            if col == to_col {
                break;
            }
            err += dy;
            col += sx;
        }
        if e2 <= dx {
            if row == to_row {
                break;
            }
            err += dx;
            row += sy;
        }
    }

    points
}

/// Clips the segment `from`-`to` to a `size` x `size` grid (Liang-Barsky).
///
/// Returns the cells where the segment enters and leaves the grid, or `None`
/// if it misses the grid entirely. Ends already inside are returned as is.
pub fn clip_line(from: CellPos, to: CellPos, size: i32) -> Option<(CellPos, CellPos)> {
    if size <= 0 {
        return None;
    }
    let (x0, y0) = (f64::from(from.col), f64::from(from.row));
    let dx = f64::from(to.col) - x0;
    let dy = f64::from(to.row) - y0;
    // cell centers are integers, so the grid covers -0.5..size-0.5
    let min = -0.5;
    let max = f64::from(size) - 0.5;

    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for (p, q) in [(-dx, x0 - min), (dx, max - x0), (-dy, y0 - min), (dy, max - y0)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    let last = f64::from(size - 1);
    let at = |t: f64| {
        let row = (y0 + t * dy).round().clamp(0.0, last);
        let col = (x0 + t * dx).round().clamp(0.0, last);
        CellPos::new(row as i32, col as i32)
    };
    Some((at(t0), at(t1)))
}

// ═══════════════════════════════════════════════════════════════════════════
// Flood Fill Algorithm
// ═══════════════════════════════════════════════════════════════════════════

/// Compute the flood fill region using 4-connected BFS
///
/// Returns the cells reachable from `start` through cells whose value equals
/// the value at `start`, in visitation order (seed first). Nothing is
/// modified; the caller writes the new color.
///
/// The target value is read once at entry and every membership test compares
/// against it. A visited bitmap keyed by flat index guarantees each cell is
/// examined at most once: O(size²) time and memory.
///
/// # Arguments
/// * `start` - Seed cell
/// * `size` - Edge length of the square grid, at most `MAX_GRID_SIZE`
/// * `get_pixel` - Current value at an in-bounds cell
///
/// # Returns
/// The region, or an empty vector if `start` is outside the grid or `size`
/// exceeds `MAX_GRID_SIZE`
pub fn flood_fill_points<T, F>(start: CellPos, size: i32, get_pixel: F) -> Vec<CellPos>
where
    T: PartialEq,
    F: Fn(CellPos) -> T,
{
    let mut result = Vec::new();
    if size > MAX_GRID_SIZE {
        log::warn!("flood fill on {size}x{size} exceeds the grid limit {MAX_GRID_SIZE}");
        return result;
    }

    let inside = |p: CellPos| p.row >= 0 && p.row < size && p.col >= 0 && p.col < size;
    if !inside(start) {
        return result;
    }

    let width = size as usize;
    let index = |p: CellPos| p.row as usize * width + p.col as usize;

    let target_value = get_pixel(start);

    let mut visited = vec![false; width * width];
    let mut queue = VecDeque::new();
    visited[index(start)] = true;
    queue.push_back(start);

    while let Some(pos) = queue.pop_front() {
        result.push(pos);

        for next in pos.neighbors4() {
            if !inside(next) {
                continue;
            }
            let idx = index(next);
            if visited[idx] {
                continue;
            }
            visited[idx] = true;

            if get_pixel(next) == target_value {
                queue.push_back(next);
            }
        }
    }

    result
}
