/// Smallest grid width that can host the initial snake.
pub const MIN_GRID_WIDTH: u16 = 4;

/// Smallest grid height that can host the initial snake.
pub const MIN_GRID_HEIGHT: u16 = 4;

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 32;

/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 32;

/// Segments in a freshly constructed snake.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Score granted per food eaten.
pub const POINTS_PER_FOOD: u32 = 1;

/// Logical grid dimensions passed through the engine as a named type.
///
/// Makes width vs. height unambiguous at every call site.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Behavior of the grid edge during movement.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum BoundaryPolicy {
    /// Moving past an edge ends the run.
    #[default]
    Walls,
    /// Coordinates wrap to the opposite edge.
    Torus,
}

/// Construction parameters for a board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BoardConfig {
    pub size: GridSize,
    pub boundary: BoundaryPolicy,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: GridSize {
                width: DEFAULT_GRID_WIDTH,
                height: DEFAULT_GRID_HEIGHT,
            },
            boundary: BoundaryPolicy::Walls,
        }
    }
}

impl BoardConfig {
    /// Creates a walls-bounded configuration with the given dimensions.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            size: GridSize { width, height },
            boundary: BoundaryPolicy::Walls,
        }
    }
}
