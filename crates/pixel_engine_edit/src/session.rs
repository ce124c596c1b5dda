//! Drawing session
//!
//! The session is the grid handle the UI holds. It owns the grid together
//! with everything the user has selected (tool, color, background, palette)
//! and the pointer stroke in progress. Each session is independent; the UI
//! keeps one per canvas.
//!
//! # Pointer strokes
//!
//! Mouse and touch input both reduce to the same three calls once the UI has
//! mapped the pointer to a cell:
//!
//! | pointer event       | call                 |
//! |---------------------|----------------------|
//! | down                | `begin_stroke`       |
//! | move                | `continue_stroke`    |
//! | up / leave / cancel | `end_stroke`         |
//!
//! While a stroke tool is active, `continue_stroke` paints every cell on the
//! straight line from the previous pointer cell, so fast pointer movement does
//! not leave gaps.

use pixel_engine::{CellPos, ChangedCell, Color, EngineError, Palette, PixelGrid, Result, palette};
use serde::{Deserialize, Serialize};

use crate::{Tool, brushes, tools};

/// Grid size used when nothing else is configured
pub const DEFAULT_GRID_SIZE: i32 = 16;

/// Initial values for a `DrawingSession`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSettings {
    #[serde(default = "default_grid_size")]
    pub grid_size: i32,

    #[serde(default = "default_background")]
    pub background: Color,

    #[serde(default = "default_color")]
    pub color: Color,

    #[serde(default)]
    pub tool: Tool,

    /// Selectable swatches; empty means the default palette
    #[serde(default)]
    pub palette: Vec<Color>,
}

fn default_grid_size() -> i32 {
    DEFAULT_GRID_SIZE
}
fn default_background() -> Color {
    palette::DEFAULT_BACKGROUND
}
fn default_color() -> Color {
    palette::DEFAULT_COLOR
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            background: palette::DEFAULT_BACKGROUND,
            color: palette::DEFAULT_COLOR,
            tool: Tool::default(),
            palette: Vec::new(),
        }
    }
}

impl SessionSettings {
    pub fn palette(&self) -> Palette {
        if self.palette.is_empty() {
            Palette::default()
        } else {
            Palette::from_slice(&self.palette)
        }
    }
}

#[derive(Clone, Debug, Default)]
struct StrokeState {
    is_drawing: bool,
    last_cell: Option<CellPos>,
}

/// One canvas: the grid plus the user's current selections
#[derive(Clone, Debug)]
pub struct DrawingSession {
    grid: PixelGrid,
    tool: Tool,
    color: Color,
    background: Color,
    palette: Palette,
    stroke: StrokeState,
}

impl DrawingSession {
    /// Creates a session with a `size` x `size` white grid, black pencil.
    pub fn new(size: i32) -> Result<Self> {
        Self::with_background(size, palette::DEFAULT_BACKGROUND)
    }

    pub fn with_background(size: i32, background: Color) -> Result<Self> {
        Self::from_settings(&SessionSettings {
            grid_size: size,
            background,
            ..Default::default()
        })
    }

    pub fn from_settings(settings: &SessionSettings) -> Result<Self> {
        let grid = PixelGrid::new(settings.grid_size, settings.background)?;
        log::debug!("new drawing session {0}x{0}, background {1}", settings.grid_size, settings.background);
        Ok(Self {
            grid,
            tool: settings.tool,
            color: settings.color,
            background: settings.background,
            palette: settings.palette(),
            stroke: StrokeState::default(),
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Getters / Setters
    // ═══════════════════════════════════════════════════════════════════════

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn size(&self) -> i32 {
        self.grid.size()
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Makes palette swatch `index` the current color and returns it.
    pub fn select_palette(&mut self, index: usize) -> Result<Color> {
        let color = self.palette.get(index)?;
        self.color = color;
        Ok(color)
    }

    pub fn get_cell(&self, row: i32, col: i32) -> Result<Color> {
        self.grid.get(row, col)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Grid Operations
    // ═══════════════════════════════════════════════════════════════════════

    /// Replaces the grid with an empty one of `new_size`.
    ///
    /// On error the current grid is kept. A stroke in progress is ended since
    /// its cells refer to the old grid.
    pub fn resize_grid(&mut self, new_size: i32) -> Result<()> {
        match self.grid.resized(new_size, self.background) {
            Ok(grid) => {
                self.grid = grid;
                self.stroke = StrokeState::default();
                Ok(())
            }
            Err(err) => {
                log::warn!("resize_grid({new_size}) rejected: {err}");
                Err(err)
            }
        }
    }

    /// Resets every cell to the background. The diff lists all cells.
    pub fn clear(&mut self) -> Vec<ChangedCell> {
        self.grid.clear(self.background);
        (0..self.grid.len())
            .map(|idx| ChangedCell::new(self.grid.position_of(idx), self.background))
            .collect()
    }

    /// Applies `tool` with `color` at one cell, regardless of the session's
    /// current selections.
    pub fn paint(&mut self, tool: Tool, row: i32, col: i32, color: Color) -> Result<Vec<ChangedCell>> {
        tools::apply(tool, &mut self.grid, row, col, color, self.background).inspect_err(|err| {
            log::warn!("{tool} at (row: {row}, col: {col}) rejected: {err}");
        })
    }

    /// Applies the current tool and color at one cell.
    pub fn apply(&mut self, row: i32, col: i32) -> Result<Vec<ChangedCell>> {
        self.paint(self.tool, row, col, self.color)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Pointer Strokes
    // ═══════════════════════════════════════════════════════════════════════

    pub fn is_drawing(&self) -> bool {
        self.stroke.is_drawing
    }

    /// Pointer down on a cell.
    ///
    /// A rejected start cell does not begin a stroke.
    pub fn begin_stroke(&mut self, row: i32, col: i32) -> Result<Vec<ChangedCell>> {
        let changed = self.apply(row, col)?;
        self.stroke = StrokeState {
            is_drawing: true,
            last_cell: Some(CellPos::new(row, col)),
        };
        Ok(changed)
    }

    /// Pointer moved onto a cell.
    ///
    /// Does nothing unless a stroke is in progress and the active tool is a
    /// stroke tool. The line from the previous cell is clipped to the grid
    /// first, so far off coordinates are cheap; the stroke continues from the
    /// new cell either way.
    pub fn continue_stroke(&mut self, row: i32, col: i32) -> Vec<ChangedCell> {
        if !self.stroke.is_drawing || !self.tool.is_stroke_tool() {
            return Vec::new();
        }

        let to = CellPos::new(row, col);
        let from = self.stroke.last_cell.unwrap_or(to);
        self.stroke.last_cell = Some(to);

        let mut changed = Vec::new();
        let Some((from, to)) = brushes::clip_line(from, to, self.grid.size()) else {
            return changed;
        };
        for pos in brushes::bresenham_line(from, to) {
            match tools::apply(self.tool, &mut self.grid, pos.row, pos.col, self.color, self.background) {
                Ok(cells) => changed.extend(cells),
                Err(err) => log::warn!("stroke cell {pos} rejected: {err}"),
            }
        }
        changed
    }

    /// Pointer released or left the canvas.
    pub fn end_stroke(&mut self) {
        self.stroke = StrokeState::default();
    }
}

impl TryFrom<&SessionSettings> for DrawingSession {
    type Error = EngineError;

    fn try_from(settings: &SessionSettings) -> Result<Self> {
        DrawingSession::from_settings(settings)
    }
}
