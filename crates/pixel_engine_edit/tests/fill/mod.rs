//! Tests for flood fill
//!
//! These tests verify that a fill:
//! 1. Changes exactly the 4-connected region of the seed color
//! 2. Reports every changed cell once in its diff
//! 3. Rejects bad seeds without touching the grid
