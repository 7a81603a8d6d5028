use thiserror::Error;

use crate::config::{MIN_GRID_HEIGHT, MIN_GRID_WIDTH};

/// Errors reported by board construction and explicit food placement.
///
/// Everything else the engine can be asked to do is either legal or a
/// deliberate no-op (reverse steering, calls after game over), so the
/// taxonomy stays small.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum BoardError {
    /// The requested grid cannot host the initial snake.
    #[error(
        "grid {width}x{height} is smaller than the minimum {}x{}",
        MIN_GRID_WIDTH,
        MIN_GRID_HEIGHT
    )]
    InvalidDimensions { width: u16, height: u16 },

    /// The food target lies outside the grid.
    #[error("position ({x}, {y}) is outside the grid")]
    OutOfBounds { x: i32, y: i32 },

    /// The food target is already covered by the snake.
    #[error("cell ({x}, {y}) is not empty")]
    CellOccupied { x: i32, y: i32 },
}
