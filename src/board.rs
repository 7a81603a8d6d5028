use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{
    BoardConfig, BoundaryPolicy, GridSize, INITIAL_SNAKE_LENGTH, MIN_GRID_HEIGHT, MIN_GRID_WIDTH,
    POINTS_PER_FOOD,
};
use crate::direction::Direction;
use crate::error::BoardError;
use crate::food;
use crate::grid::{Cell, Grid};
use crate::snake::{Position, Snake};

/// Current high-level run state.
///
/// `Lost` and `Won` are terminal: every mutator becomes a no-op once either
/// is reached, so embedders do not need to guard their call sites.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Lost,
    Won,
}

impl GameStatus {
    /// Returns true for `Lost` and `Won`.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != Self::Running
    }
}

/// Which collision ended a lost run.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    Wall,
    SelfCollision,
}

/// Complete simulation state for one snake run.
///
/// The board owns the cell buffer, the snake body, the heading, the food
/// cell, and the score, and is mutated only through [`Board::tick`],
/// [`Board::change_direction`], and the placement helpers. All queries are
/// side-effect free.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    snake: Snake,
    food: Option<Position>,
    score: u32,
    tick_count: u64,
    status: GameStatus,
    death_reason: Option<DeathReason>,
    boundary: BoundaryPolicy,
    rng: StdRng,
}

impl Board {
    /// Creates a board with entropy-seeded food placement.
    pub fn new(config: BoardConfig) -> Result<Self, BoardError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic board for tests and reproducible simulations.
    pub fn new_with_seed(config: BoardConfig, seed: u64) -> Result<Self, BoardError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: BoardConfig, rng: StdRng) -> Result<Self, BoardError> {
        let GridSize { width, height } = config.size;
        if width < MIN_GRID_WIDTH || height < MIN_GRID_HEIGHT {
            return Err(BoardError::InvalidDimensions { width, height });
        }

        let mut board = Self {
            grid: Grid::new(config.size),
            snake: initial_snake(config.size),
            food: None,
            score: 0,
            tick_count: 0,
            status: GameStatus::Running,
            death_reason: None,
            boundary: config.boundary,
            rng,
        };
        board.occupy_snake_cells();
        board.respawn_food();
        Ok(board)
    }

    /// Advances the simulation by one tick.
    ///
    /// Applies any buffered heading, moves the head one cell, and resolves
    /// boundary, self-collision, growth, and food respawn in that order. A
    /// losing tick returns before the move commits, so the cell buffer and
    /// score stay exactly as of the previous tick.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }

        self.tick_count += 1;

        let heading = self.snake.apply_pending_direction();
        let candidate = self.snake.head().stepped(heading);
        let candidate = match self.boundary {
            BoundaryPolicy::Walls => {
                if !candidate.is_within_bounds(self.grid.size()) {
                    self.end_run(DeathReason::Wall);
                    return;
                }
                candidate
            }
            BoundaryPolicy::Torus => candidate.wrapped(self.grid.size()),
        };

        let grows = self.food == Some(candidate);
        // A non-growth move frees the tail cell in the same instant the head
        // enters, so stepping onto the tail is legal then and only then.
        let enters_vacating_tail = !grows && candidate == self.snake.tail();
        if self.grid.get(candidate) == Cell::Occupied && !enters_vacating_tail {
            self.end_run(DeathReason::SelfCollision);
            return;
        }

        if grows {
            self.score += POINTS_PER_FOOD;
            self.food = None;
        }

        if let Some(vacated) = self.snake.advance(candidate, grows) {
            self.grid.set(vacated, Cell::Empty);
        }
        self.grid.set(candidate, Cell::Occupied);
        debug_assert_eq!(self.grid.get(self.snake.head()), Cell::Occupied);

        if grows {
            self.respawn_food();
        }
    }

    /// Requests a heading change to apply on the next tick.
    ///
    /// The exact reverse of the current heading is silently ignored; holding
    /// the opposite key must not fold the snake onto itself mid-step. Also a
    /// no-op once the run has ended.
    pub fn change_direction(&mut self, direction: Direction) {
        if self.status != GameStatus::Running {
            return;
        }
        self.snake.steer(direction);
    }

    /// Moves the food to an explicit cell.
    ///
    /// Meant for embedders that script placement instead of relying on the
    /// seeded generator; any current food is relocated. The target must lie
    /// inside the grid on a cell free of the snake. Re-placing onto the
    /// current food cell is accepted, and a finished run is left untouched.
    pub fn place_food(&mut self, position: Position) -> Result<(), BoardError> {
        if self.status != GameStatus::Running {
            return Ok(());
        }
        if !position.is_within_bounds(self.grid.size()) {
            return Err(BoardError::OutOfBounds {
                x: position.x,
                y: position.y,
            });
        }
        if self.food == Some(position) {
            return Ok(());
        }
        if self.grid.get(position) != Cell::Empty {
            return Err(BoardError::CellOccupied {
                x: position.x,
                y: position.y,
            });
        }

        if let Some(previous) = self.food.take() {
            self.grid.set(previous, Cell::Empty);
        }
        self.grid.set(position, Cell::Food);
        self.food = Some(position);
        Ok(())
    }

    /// Restarts the run in place: initial snake, fresh food, zeroed score
    /// and tick count.
    ///
    /// The random stream continues rather than reseeding, so consecutive
    /// rounds draw different food placements.
    pub fn reset(&mut self) {
        debug!("board reset after {} ticks", self.tick_count);

        self.grid.clear();
        self.snake = initial_snake(self.grid.size());
        self.food = None;
        self.score = 0;
        self.tick_count = 0;
        self.status = GameStatus::Running;
        self.death_reason = None;
        self.occupy_snake_cells();
        self.respawn_food();
    }

    /// Returns the snake's current heading. A buffered request is not
    /// visible until the next tick applies it.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.snake.direction()
    }

    /// Returns the current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns the cell-status buffer, row-major, one entry per grid cell.
    ///
    /// The slice reflects the most recently completed tick. The board reuses
    /// the backing storage, so the borrow ends before the next call to
    /// [`Board::tick`] and must be taken again afterwards.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        self.grid.cells()
    }

    /// Returns the buffer index of `position`, `y * width + x`.
    ///
    /// # Panics
    /// Panics if `position` lies outside the grid.
    #[must_use]
    pub fn index_of(&self, position: Position) -> usize {
        self.grid.index_of(position)
    }

    /// Returns the grid dimensions.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.grid.size()
    }

    /// Returns the grid width in cells.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.grid.size().width
    }

    /// Returns the grid height in cells.
    #[must_use]
    pub fn height(&self) -> u16 {
        self.grid.size().height
    }

    /// Returns the run status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the collision that ended the run; `None` unless `Lost`.
    #[must_use]
    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    /// Returns ticks advanced since construction or the last reset.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Returns the live food position, `None` once a winning fill leaves no
    /// room for another.
    #[must_use]
    pub fn food(&self) -> Option<Position> {
        self.food
    }

    /// Returns a read-only view of the snake.
    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Returns a read-only view of the cell buffer and its geometry.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    fn occupy_snake_cells(&mut self) {
        for segment in self.snake.segments() {
            self.grid.set(*segment, Cell::Occupied);
        }
    }

    fn respawn_food(&mut self) {
        match food::spawn_position(&mut self.rng, &self.grid) {
            Some(position) => {
                self.grid.set(position, Cell::Food);
                self.food = Some(position);
            }
            None => {
                self.status = GameStatus::Won;
                debug!(
                    "grid full at tick {}: run won with score {}",
                    self.tick_count, self.score
                );
            }
        }
    }

    fn end_run(&mut self, reason: DeathReason) {
        self.status = GameStatus::Lost;
        self.death_reason = Some(reason);
        debug!("run ended by {:?} at tick {}", reason, self.tick_count);
    }
}

fn initial_snake(size: GridSize) -> Snake {
    let head = Position {
        x: i32::from(size.width / 2),
        y: i32::from(size.height / 2),
    };
    Snake::new(head, Direction::Right, INITIAL_SNAKE_LENGTH)
}
