//! Transition rule for B3/S23.

/// Neighbor counts that bring a dead cell to life.
const BIRTH: u16 = 1 << 3;
/// Neighbor counts that keep a live cell alive.
const SURVIVAL: u16 = (1 << 2) | (1 << 3);

/// Next state of a cell given its current state and alive-neighbor count.
#[inline(always)]
pub fn next_state(alive: bool, alive_neighbors: u8) -> bool {
    let mask = if alive { SURVIVAL } else { BIRTH };
    // Counts past 8 cannot occur; the shift saturates them to dead.
    alive_neighbors < 16 && (mask >> alive_neighbors) & 1 == 1
}
