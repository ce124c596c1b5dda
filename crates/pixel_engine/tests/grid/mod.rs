//! Tests for the grid model
//!
//! Bounds checks must reject without touching any cell, and every operation
//! must keep `cells.len() == size * size`.

mod access_tests;
mod resize_tests;
