//! Unified error types for pixel_engine

use thiserror::Error;

/// Main error type for grid and editing operations
///
/// Every variant is recoverable: the operation that produced it was rejected
/// as a whole and left the grid untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    // === Grid Errors ===
    #[error("Invalid grid size {size} (must be 1..={max})", max = crate::MAX_GRID_SIZE)]
    InvalidSize { size: i32 },

    #[error("Cell (row: {row}, col: {col}) out of bounds for {size}x{size} grid")]
    OutOfBounds { row: i32, col: i32, size: i32 },

    // === Color Errors ===
    #[error("Invalid hex color: {value}")]
    InvalidHexColor { value: String },

    #[error("Palette index {index} out of range (0..{len})")]
    PaletteIndexOutOfRange { index: usize, len: usize },

    // === Tool Errors ===
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },
}

/// Result type alias for pixel_engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

// === Convenience constructors ===
impl EngineError {
    pub fn invalid_hex_color(value: impl Into<String>) -> Self {
        Self::InvalidHexColor { value: value.into() }
    }

    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool { name: name.into() }
    }

    /// True for errors caused by stale or bogus coordinates from the caller
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}
