//! Bounded Game of Life grid with incrementally maintained neighbor counts.

mod arena;
mod cell;
mod error;
mod rules;
mod seed;
mod world;

pub use cell::{ALIVE_GLYPH, Cell, CellIdx, DEAD_GLYPH, MAX_NEIGHBORS};
pub use error::GridError;
pub use rules::next_state;
pub use seed::{DEFAULT_ALIVE_PROBABILITY, InitialState, Pattern, RandomDensity};
pub use world::{World, WorldConfig};
