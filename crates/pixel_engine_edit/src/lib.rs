//! Editing layer on top of `pixel_engine`
//!
//! - `brushes` - pure point algorithms (line, flood fill region)
//! - `fill` - flood fill applied to a grid
//! - `tools` - the tool enum and single-cell dispatch
//! - `session` - `DrawingSession`, the per-canvas state the UI talks to

pub mod brushes;
pub mod fill;

pub mod session;
pub use session::{DEFAULT_GRID_SIZE, DrawingSession, SessionSettings};

pub mod tools;
pub use tools::Tool;

// Re-export the model types callers need alongside the session
pub use pixel_engine::{CellPos, ChangedCell, Color, EngineError, Palette, PixelGrid, Result};
