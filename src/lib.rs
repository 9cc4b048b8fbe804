//! Conway's Game of Life (B3/S23) on a bounded grid.

pub mod grid;
pub mod stats;
pub use grid::{GridError, World, WorldConfig};
