//! Construction-time cell store.
//!
//! Slots are addressed by coordinate while the grid is being allocated and
//! sealed into a dense row-major `Vec<Cell>` once every slot is filled.

use super::cell::{Cell, CellIdx};
use super::error::GridError;

pub struct CellArena {
    width: u32,
    height: u32,
    slots: Vec<Option<Cell>>,
    filled: usize,
}

impl CellArena {
    /// Caller validates the dimensions before building an arena.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        let mut slots = Vec::with_capacity(len);
        slots.resize_with(len, || None);
        Self {
            width,
            height,
            slots,
            filled: 0,
        }
    }

    #[inline]
    fn slot_of(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn add_cell(&mut self, x: u32, y: u32, alive: bool) -> Result<CellIdx, GridError> {
        let slot = self.slot_of(x, y).ok_or(GridError::InvalidDimension {
            width: self.width,
            height: self.height,
        })?;
        if self.slots[slot].is_some() {
            return Err(GridError::LocationOccupied { x, y });
        }
        self.slots[slot] = Some(Cell::new(x, y, alive));
        self.filled += 1;
        Ok(CellIdx(slot as u32))
    }

    pub fn is_full(&self) -> bool {
        self.filled == self.slots.len()
    }

    /// Seal the arena into the dense store. Returns `None` while any slot is
    /// still empty.
    pub fn into_cells(self) -> Option<Vec<Cell>> {
        if !self.is_full() {
            return None;
        }
        self.slots.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::CellArena;
    use crate::grid::GridError;

    #[test]
    fn add_cell_rejects_occupied_location() {
        let mut arena = CellArena::new(2, 2);
        arena.add_cell(1, 0, true).unwrap();
        let err = arena.add_cell(1, 0, false).unwrap_err();
        assert!(matches!(err, GridError::LocationOccupied { x: 1, y: 0 }));
    }

    #[test]
    fn add_cell_rejects_out_of_bounds() {
        let mut arena = CellArena::new(2, 2);
        assert!(matches!(
            arena.add_cell(2, 0, true),
            Err(GridError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn seals_only_when_full() {
        let mut arena = CellArena::new(2, 1);
        let idx = arena.add_cell(1, 0, true).unwrap();
        assert_eq!(idx.index(), 1);
        assert!(!arena.is_full());
        arena.add_cell(0, 0, false).unwrap();

        let cells = arena.into_cells().expect("arena is full");
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].coords(), (0, 0));
        assert!(cells[1].is_alive());
    }
}
