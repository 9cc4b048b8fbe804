//! Single grid position: state, cached neighbor links and the live
//! alive-neighbor counter.

use super::rules;

pub const MAX_NEIGHBORS: usize = 8;

pub const ALIVE_GLYPH: char = 'o';
pub const DEAD_GLYPH: char = ' ';

/// Flat index of a cell in the world's row-major store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellIdx(pub u32);

impl CellIdx {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
pub struct Cell {
    x: u32,
    y: u32,
    pub(crate) alive: bool,
    pub(crate) next_state: bool,
    neighbors: [CellIdx; MAX_NEIGHBORS],
    neighbor_len: u8,
    pub(crate) alive_neighbors: u8,
}

impl Cell {
    pub fn new(x: u32, y: u32, alive: bool) -> Self {
        Self {
            x,
            y,
            alive,
            next_state: alive,
            neighbors: [CellIdx(0); MAX_NEIGHBORS],
            neighbor_len: 0,
            alive_neighbors: 0,
        }
    }

    #[inline]
    pub fn coords(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[inline]
    pub fn neighbors(&self) -> &[CellIdx] {
        &self.neighbors[..self.neighbor_len as usize]
    }

    /// Alive neighbors as maintained by the world on every flip.
    #[inline(always)]
    pub fn alive_neighbor_count(&self) -> u8 {
        self.alive_neighbors
    }

    /// Alive neighbors by walking the cached neighbor list.
    pub fn scan_alive_neighbors(&self, cells: &[Cell]) -> u8 {
        let mut count = 0u8;
        for &nb in self.neighbors() {
            if cells[nb.index()].alive {
                count += 1;
            }
        }
        count
    }

    #[inline]
    pub fn render_symbol(&self) -> char {
        if self.alive { ALIVE_GLYPH } else { DEAD_GLYPH }
    }

    /// Neighbor links are set once while the world is linked.
    pub(crate) fn link_neighbor(&mut self, idx: CellIdx) {
        debug_assert!((self.neighbor_len as usize) < MAX_NEIGHBORS);
        debug_assert!(!self.neighbors().contains(&idx));
        self.neighbors[self.neighbor_len as usize] = idx;
        self.neighbor_len += 1;
    }

    /// Copy of the neighbor links, for updating siblings while this cell is
    /// borrowed out of the store.
    #[inline(always)]
    pub(crate) fn neighbor_links(&self) -> ([CellIdx; MAX_NEIGHBORS], usize) {
        (self.neighbors, self.neighbor_len as usize)
    }

    /// Phase A of a tick: reads only this cell's own state and counter.
    #[inline(always)]
    pub(crate) fn prepare_next(&mut self) {
        self.next_state = rules::next_state(self.alive, self.alive_neighbors);
    }
}
