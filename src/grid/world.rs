//! Bounded Life world: cell ownership, neighbor linking, generation stepping
//! and rendering.

use std::fmt;

use rand::Rng;
use rayon::prelude::*;
use tracing::{debug, trace};

use super::arena::CellArena;
use super::cell::{Cell, CellIdx};
use super::error::GridError;
use super::seed::{DEFAULT_ALIVE_PROBABILITY, InitialState, RandomDensity};

/// Grids below this many cells run phase A serially even with a pool.
pub(crate) const PARALLEL_MIN_CELLS: usize = 16_384;

const DEFAULT_WIDTH: u32 = 150;
const DEFAULT_HEIGHT: u32 = 40;

const DIRECTIONS: [(i64, i64); 8] = [
    // above
    (-1, 1),
    (0, 1),
    (1, 1),
    // sides
    (-1, 0),
    (1, 0),
    // below
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Configuration for a world instance.
///
/// Use `WorldConfig::new(width, height)` for the default density and a fresh
/// random seed, then customise via the builder methods.
#[derive(Clone, Debug)]
pub struct WorldConfig {
    pub width: u32,
    pub height: u32,
    /// Chance that each cell starts alive.
    pub initial_alive_probability: f64,
    /// RNG seed for the initial state. `None` draws one from the thread RNG.
    pub seed: Option<u64>,
    /// Threads for phase A. `None` means single-threaded.
    pub thread_count: Option<usize>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl WorldConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            initial_alive_probability: DEFAULT_ALIVE_PROBABILITY,
            seed: None,
            thread_count: None,
        }
    }

    pub fn initial_alive_probability(mut self, probability: f64) -> Self {
        self.initial_alive_probability = probability;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set an explicit thread count for phase A.
    pub fn thread_count(mut self, n: usize) -> Self {
        self.thread_count = Some(n.max(1));
        self
    }
}

pub struct World {
    width: u32,
    height: u32,
    tick: u64,
    cells: Vec<Cell>,
    pool: Option<rayon::ThreadPool>,
}

impl World {
    /// Random world with the default density.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        Self::with_config(&WorldConfig::new(width, height))
    }

    /// Random world as described by `config`.
    pub fn with_config(config: &WorldConfig) -> Result<Self, GridError> {
        let probability = config.initial_alive_probability;
        if !(0.0..=1.0).contains(&probability) {
            return Err(GridError::InvalidProbability(probability));
        }
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        debug!(seed, probability, "seeding random world");
        Self::with_provider(config, RandomDensity::new(probability, seed))
    }

    /// Single-threaded world whose initial state comes from `provider`.
    pub fn from_provider<P: InitialState>(
        width: u32,
        height: u32,
        provider: P,
    ) -> Result<Self, GridError> {
        Self::with_provider(&WorldConfig::new(width, height), provider)
    }

    /// World with the dimensions and threading of `config` and the initial
    /// state of `provider`. The config's probability and seed are ignored.
    pub fn with_provider<P: InitialState>(
        config: &WorldConfig,
        mut provider: P,
    ) -> Result<Self, GridError> {
        let (width, height) = (config.width, config.height);
        let total = u64::from(width) * u64::from(height);
        if width == 0 || height == 0 || total > u64::from(u32::MAX) {
            return Err(GridError::InvalidDimension { width, height });
        }

        let pool = match config.thread_count {
            Some(n) if n > 1 => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()?,
            ),
            _ => None,
        };

        let mut arena = CellArena::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let alive = provider.is_alive(x, y);
                arena.add_cell(x, y, alive)?;
            }
        }
        // Every coordinate was visited exactly once above.
        let cells = arena
            .into_cells()
            .ok_or(GridError::InvalidDimension { width, height })?;

        let mut world = Self {
            width,
            height,
            tick: 0,
            cells,
            pool,
        };
        world.link_neighbors();
        world.seed_neighbor_counts();

        debug!(
            width,
            height,
            threads = config.thread_count.unwrap_or(1),
            population = world.population(),
            "world constructed"
        );
        Ok(world)
    }

    #[inline]
    fn idx_at(&self, x: u32, y: u32) -> Option<CellIdx> {
        (x < self.width && y < self.height).then(|| CellIdx(y * self.width + x))
    }

    fn link_neighbors(&mut self) {
        let (width, height) = (i64::from(self.width), i64::from(self.height));
        for i in 0..self.cells.len() {
            let (x, y) = self.cells[i].coords();
            for &(dx, dy) in &DIRECTIONS {
                let nx = i64::from(x) + dx;
                let ny = i64::from(y) + dy;
                if nx < 0 || ny < 0 || nx >= width || ny >= height {
                    continue;
                }
                let nb = CellIdx((ny * width + nx) as u32);
                self.cells[i].link_neighbor(nb);
            }
        }
    }

    fn seed_neighbor_counts(&mut self) {
        for i in 0..self.cells.len() {
            let count = self.cells[i].scan_alive_neighbors(&self.cells);
            self.cells[i].alive_neighbors = count;
        }
    }

    /// Advance exactly one generation.
    pub fn tick(&mut self) {
        // Phase A: every next state is computed from the current generation
        // before any cell is committed.
        match &self.pool {
            Some(pool) if self.cells.len() >= PARALLEL_MIN_CELLS => {
                let cells = &mut self.cells;
                pool.install(|| cells.par_iter_mut().for_each(Cell::prepare_next));
            }
            _ => self.cells.iter_mut().for_each(Cell::prepare_next),
        }

        // Phase B: commit flips and push the delta into neighbor counters.
        let mut flips = 0usize;
        for i in 0..self.cells.len() {
            let cell = &mut self.cells[i];
            if cell.next_state == cell.alive {
                continue;
            }
            cell.alive = cell.next_state;
            let born = cell.alive;
            let (links, len) = cell.neighbor_links();
            for nb in &links[..len] {
                let counter = &mut self.cells[nb.index()].alive_neighbors;
                if born {
                    *counter += 1;
                } else {
                    *counter -= 1;
                }
            }
            flips += 1;
        }

        self.tick += 1;
        trace!(generation = self.tick, flips, "tick");
    }

    /// Row-major snapshot, one line per row.
    pub fn render(&self) -> String {
        let width = self.width as usize;
        let mut rendering = String::with_capacity(self.cells.len() + self.height as usize);
        for row in self.cells.chunks(width) {
            for cell in row {
                rendering.push(cell.render_symbol());
            }
            rendering.push('\n');
        }
        rendering
    }

    /// Number of generations advanced since construction.
    pub fn generation(&self) -> u64 {
        self.tick
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell_at(&self, x: u32, y: u32) -> Option<&Cell> {
        self.idx_at(x, y).map(|idx| &self.cells[idx.index()])
    }

    /// Out-of-bounds coordinates read as dead.
    pub fn is_alive(&self, x: u32, y: u32) -> bool {
        self.cell_at(x, y).is_some_and(Cell::is_alive)
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Visit live cells in row-major order.
    pub fn for_each_live<F: FnMut(u32, u32)>(&self, mut f: F) {
        for cell in self.cells.iter().filter(|cell| cell.is_alive()) {
            let (x, y) = cell.coords();
            f(x, y);
        }
    }

    /// Whether every maintained counter matches a fresh neighbor scan.
    pub fn counters_consistent(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.alive_neighbor_count() == cell.scan_alive_neighbors(&self.cells))
    }
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("World")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("tick", &self.tick)
            .field("threads", &self.pool.as_ref().map(|p| p.current_num_threads()))
            .finish()
    }
}
