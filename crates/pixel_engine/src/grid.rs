//! Square pixel grid
//!
//! Cells are plain color values stored row-major in one flat vector:
//! `index = row * size + col`. The vector always holds exactly `size * size`
//! entries; resizing builds a new grid instead of reshaping this one.

use crate::{CellPos, Color, EngineError, Result};

/// Largest accepted edge length.
pub const MAX_GRID_SIZE: i32 = 4096;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    size: i32,
    cells: Vec<Color>,
}

impl PixelGrid {
    /// Allocates a `size` x `size` grid with every cell set to `background`.
    ///
    /// # Errors
    ///
    /// `EngineError::InvalidSize` if `size` is not in `1..=MAX_GRID_SIZE`.
    pub fn new(size: i32, background: Color) -> Result<Self> {
        if size <= 0 || size > MAX_GRID_SIZE {
            return Err(EngineError::InvalidSize { size });
        }
        let len = size as usize * size as usize;
        Ok(Self {
            size,
            cells: vec![background; len],
        })
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Number of cells (`size * size`)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_inside(&self, pos: CellPos) -> bool {
        pos.row >= 0 && pos.row < self.size && pos.col >= 0 && pos.col < self.size
    }

    /// Flat index of `pos`.
    ///
    /// # Errors
    ///
    /// `EngineError::OutOfBounds` if `pos` lies outside the grid.
    pub fn index_of(&self, pos: CellPos) -> Result<usize> {
        if !self.is_inside(pos) {
            return Err(self.out_of_bounds(pos));
        }
        Ok(pos.row as usize * self.size as usize + pos.col as usize)
    }

    /// Inverse of `index_of`. Does not check that `index < len()`.
    pub fn position_of(&self, index: usize) -> CellPos {
        let size = self.size as usize;
        CellPos::new((index / size) as i32, (index % size) as i32)
    }

    pub fn get(&self, row: i32, col: i32) -> Result<Color> {
        let idx = self.index_of(CellPos::new(row, col))?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, row: i32, col: i32, color: Color) -> Result<()> {
        let idx = self.index_of(CellPos::new(row, col))?;
        self.cells[idx] = color;
        Ok(())
    }

    pub fn get_index(&self, index: usize) -> Result<Color> {
        self.cells.get(index).copied().ok_or_else(|| self.out_of_bounds(self.position_of(index)))
    }

    pub fn set_index(&mut self, index: usize, color: Color) -> Result<()> {
        let pos = self.position_of(index);
        match self.cells.get_mut(index) {
            Some(cell) => {
                *cell = color;
                Ok(())
            }
            None => Err(self.out_of_bounds(pos)),
        }
    }

    /// Sets every cell to `background`.
    pub fn clear(&mut self, background: Color) {
        self.cells.fill(background);
    }

    /// Returns a fresh grid of `new_size`, all cells `background`.
    ///
    /// The current contents are not carried over; this is a reallocation,
    /// not a resampling.
    pub fn resized(&self, new_size: i32, background: Color) -> Result<PixelGrid> {
        log::debug!("resizing grid {0}x{0} -> {1}x{1}", self.size, new_size);
        PixelGrid::new(new_size, background)
    }

    /// Row-major cell colors
    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    /// Rows top to bottom, each `size` cells wide
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.cells.chunks(self.size as usize)
    }

    /// Number of cells holding `color`
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|c| **c == color).count()
    }

    fn out_of_bounds(&self, pos: CellPos) -> EngineError {
        EngineError::OutOfBounds {
            row: pos.row,
            col: pos.col,
            size: self.size,
        }
    }
}
