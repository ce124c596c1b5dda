//! Tool definitions for pixel editing
//!
//! Exactly one tool is active in a session. Pencil and eraser paint single
//! cells and keep painting while the pointer is dragged; fill acts once on
//! pointer down.

use std::str::FromStr;

use pixel_engine::{CellPos, ChangedCell, Color, EngineError, PixelGrid, Result};
use serde::{Deserialize, Serialize};

use crate::fill;

/// Available editing tools
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Paint single cells with the current color
    #[default]
    Pencil,
    /// Reset single cells to the background color
    Eraser,
    /// Flood fill the region under the pointer
    Fill,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::Pencil, Tool::Eraser, Tool::Fill];

    /// Lowercase identifier used in config files and scripts
    pub fn id(&self) -> &'static str {
        match self {
            Tool::Pencil => "pencil",
            Tool::Eraser => "eraser",
            Tool::Fill => "fill",
        }
    }

    /// Get the display name
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Pencil => "Pencil",
            Tool::Eraser => "Eraser",
            Tool::Fill => "Fill",
        }
    }

    /// Whether dragging the pointer keeps applying the tool
    pub fn is_stroke_tool(&self) -> bool {
        matches!(self, Tool::Pencil | Tool::Eraser)
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Tool {
    type Err = EngineError;

    /// Accepts the lowercase tool name, case-insensitive, with an optional
    /// `-tool` suffix (`pencil`, `Eraser`, `fill-tool`).
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        let name = name.strip_suffix("-tool").unwrap_or(&name);
        Tool::ALL
            .into_iter()
            .find(|tool| tool.id() == name)
            .ok_or_else(|| EngineError::unknown_tool(s))
    }
}

/// Applies `tool` at one cell and returns the cells that changed.
///
/// * `Pencil` writes `color`, `Eraser` writes `background`; each reports the
///   cell only if its color actually changed.
/// * `Fill` flood fills from the cell with `color`.
///
/// # Errors
///
/// `EngineError::OutOfBounds` for a cell outside the grid; nothing is written.
pub fn apply(tool: Tool, grid: &mut PixelGrid, row: i32, col: i32, color: Color, background: Color) -> Result<Vec<ChangedCell>> {
    match tool {
        Tool::Pencil => set_cell(grid, row, col, color),
        Tool::Eraser => set_cell(grid, row, col, background),
        Tool::Fill => fill::flood_fill(grid, row, col, color),
    }
}

fn set_cell(grid: &mut PixelGrid, row: i32, col: i32, color: Color) -> Result<Vec<ChangedCell>> {
    if grid.get(row, col)? == color {
        return Ok(Vec::new());
    }
    grid.set(row, col, color)?;
    Ok(vec![ChangedCell::new(CellPos::new(row, col), color)])
}
