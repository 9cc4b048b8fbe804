//! Initial-state providers used while a world is allocated.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.20;

/// Decides whether the cell at `(x, y)` starts alive. Called exactly once per
/// coordinate, in row-major order.
pub trait InitialState {
    fn is_alive(&mut self, x: u32, y: u32) -> bool;
}

impl<F> InitialState for F
where
    F: FnMut(u32, u32) -> bool,
{
    fn is_alive(&mut self, x: u32, y: u32) -> bool {
        self(x, y)
    }
}

/// Independent Bernoulli draw per cell from a seeded RNG.
pub struct RandomDensity {
    rng: StdRng,
    probability: f64,
}

impl RandomDensity {
    /// `probability` must already be validated to lie in `[0, 1]`.
    pub fn new(probability: f64, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            probability,
        }
    }
}

impl InitialState for RandomDensity {
    fn is_alive(&mut self, _x: u32, _y: u32) -> bool {
        self.rng.random_bool(self.probability)
    }
}

/// Alive exactly at the listed coordinates.
#[derive(Clone, Debug, Default)]
pub struct Pattern {
    live: HashSet<(u32, u32)>,
}

impl Pattern {
    pub fn new<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        Self {
            live: cells.into_iter().collect(),
        }
    }

    /// Shift every cell by `(dx, dy)`.
    pub fn offset(&self, dx: u32, dy: u32) -> Self {
        Self::new(self.live.iter().map(|&(x, y)| (x + dx, y + dy)))
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

impl InitialState for Pattern {
    fn is_alive(&mut self, x: u32, y: u32) -> bool {
        self.live.contains(&(x, y))
    }
}
