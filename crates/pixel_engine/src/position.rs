use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Address of one grid cell.
///
/// Signed so that coordinates coming from a stale pointer mapping can be
/// represented and rejected by bounds checks instead of wrapping.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellPos {
    pub row: i32,
    pub col: i32,
}

impl std::fmt::Display for CellPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(row: {}, col: {})", self.row, self.col)
    }
}

impl CellPos {
    pub const fn new(row: i32, col: i32) -> Self {
        CellPos { row, col }
    }

    /// Up, down, left and right neighbours. No diagonals, no bounds check.
    pub fn neighbors4(self) -> [CellPos; 4] {
        [
            CellPos::new(self.row - 1, self.col),
            CellPos::new(self.row + 1, self.col),
            CellPos::new(self.row, self.col - 1),
            CellPos::new(self.row, self.col + 1),
        ]
    }
}

impl From<(i32, i32)> for CellPos {
    fn from(value: (i32, i32)) -> Self {
        CellPos::new(value.0, value.1)
    }
}

impl From<CellPos> for (i32, i32) {
    fn from(value: CellPos) -> Self {
        (value.row, value.col)
    }
}

impl Add<CellPos> for CellPos {
    type Output = CellPos;

    fn add(self, rhs: CellPos) -> CellPos {
        CellPos::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub<CellPos> for CellPos {
    type Output = CellPos;

    fn sub(self, rhs: CellPos) -> CellPos {
        CellPos::new(self.row - rhs.row, self.col - rhs.col)
    }
}
