//! Deterministic, discrete-time simulation engine for grid snake games.
//!
//! The [`Board`] owns the complete simulation state: a flat row-major cell
//! buffer, the snake body, the heading, the food cell, and the score. An
//! embedder drives it through [`Board::change_direction`] and
//! [`Board::tick`], then reads [`Board::cells`] and [`Board::score`] to
//! draw. One call to `tick` advances exactly one logical step; pacing,
//! input mapping, and rendering are the embedder's concern. The engine
//! performs no I/O and carries no rendering or platform dependencies.
//!
//! ```
//! use snake_engine::{Board, BoardConfig, Direction, GameStatus};
//!
//! let mut board = Board::new_with_seed(BoardConfig::new(12, 12), 7)
//!     .expect("12x12 is above the minimum grid");
//!
//! board.change_direction(Direction::Down);
//! board.tick();
//!
//! assert_eq!(board.status(), GameStatus::Running);
//! assert_eq!(board.direction(), Direction::Down);
//! assert_eq!(board.cells().len(), 12 * 12);
//! ```

pub mod board;
pub mod config;
pub mod direction;
pub mod error;
pub mod food;
pub mod grid;
pub mod snake;

pub use board::{Board, DeathReason, GameStatus};
pub use config::{BoardConfig, BoundaryPolicy, GridSize};
pub use direction::Direction;
pub use error::BoardError;
pub use grid::{Cell, Grid};
pub use snake::{Position, Snake};
