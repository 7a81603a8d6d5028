use rand::Rng;

use crate::grid::{Cell, Grid};
use crate::snake::Position;

/// Picks a food cell uniformly at random among the currently empty cells.
///
/// Returns `None` when no empty cell remains, which the board treats as the
/// winning fill. Generic over the generator so callers can hand in a seeded
/// one and replay exact placements.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, grid: &Grid) -> Option<Position> {
    let candidates: Vec<Position> = grid.positions_of(Cell::Empty).collect();
    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}
