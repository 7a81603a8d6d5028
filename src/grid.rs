use crate::config::GridSize;
use crate::snake::Position;

/// Semantic state of one grid cell, one byte per cell.
///
/// `Occupied` and `Food` may share a render color, but stay distinct here
/// because collision and growth decisions depend on the difference.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Empty = 0,
    Occupied = 1,
    Food = 2,
}

/// Flat cell-status buffer covering the whole grid.
///
/// Cells are stored in row-major order: the cell at `(x, y)` lives at index
/// `y * width + x`. The board reuses this storage across ticks, which is
/// what makes the zero-copy `cells` view possible.
#[derive(Debug, Clone)]
pub struct Grid {
    size: GridSize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an all-empty grid.
    #[must_use]
    pub(crate) fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.total_cells()],
        }
    }

    /// Returns the grid dimensions.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the buffer index of `position`.
    ///
    /// # Panics
    /// Panics if `position` lies outside the grid.
    #[must_use]
    pub fn index_of(&self, position: Position) -> usize {
        assert!(
            position.is_within_bounds(self.size),
            "position ({}, {}) outside {}x{} grid",
            position.x,
            position.y,
            self.size.width,
            self.size.height,
        );
        (position.y as usize) * usize::from(self.size.width) + (position.x as usize)
    }

    /// Returns the status of the cell at `position`.
    #[must_use]
    pub fn get(&self, position: Position) -> Cell {
        self.cells[self.index_of(position)]
    }

    /// Sets the status of the cell at `position`.
    pub(crate) fn set(&mut self, position: Position, cell: Cell) {
        let index = self.index_of(position);
        self.cells[index] = cell;
    }

    /// Returns the cells as a flat slice in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Counts cells currently holding `cell`.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .filter(|&&candidate| candidate == cell)
            .count()
    }

    /// Iterates positions of all cells currently holding `cell`, in buffer
    /// order.
    pub(crate) fn positions_of(&self, cell: Cell) -> impl Iterator<Item = Position> + '_ {
        let width = usize::from(self.size.width);
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(index, &candidate)| {
                if candidate == cell {
                    Some(Position {
                        x: (index % width) as i32,
                        y: (index / width) as i32,
                    })
                } else {
                    None
                }
            })
    }

    /// Resets every cell to `Empty`.
    pub(crate) fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}
