#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::return_self_not_must_use
)]
//! Grid and color model for pixel-art drawing.
//!
//! This crate is the leaf of the workspace: it owns cell storage and color
//! equality and knows nothing about tools or input. Editing operations live
//! in `pixel_engine_edit`.

mod color;
pub use color::*;

mod error;
pub use error::*;

mod grid;
pub use grid::*;

mod position;
pub use position::*;

pub mod palette;
pub use palette::Palette;

/// One entry of an operation's diff: a cell whose color changed and the color
/// it changed to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChangedCell {
    pub pos: CellPos,
    pub color: Color,
}

impl ChangedCell {
    pub fn new(pos: CellPos, color: Color) -> Self {
        Self { pos, color }
    }

    pub fn row(&self) -> i32 {
        self.pos.row
    }

    pub fn col(&self) -> i32 {
        self.pos.col
    }
}
