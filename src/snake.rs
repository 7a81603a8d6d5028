use std::collections::VecDeque;

use crate::config::GridSize;
use crate::direction::Direction;

/// Grid position in logical cell coordinates.
///
/// Coordinates are signed so a candidate head one step past the grid edge is
/// representable before the boundary check runs.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns the neighboring position one cell along `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns this position wrapped into bounds on both axes.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: wrap_axis(self.x, i32::from(bounds.width)),
            y: wrap_axis(self.y, i32::from(bounds.height)),
        }
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    let wrapped = value % upper_bound;
    if wrapped < 0 {
        wrapped + upper_bound
    } else {
        wrapped
    }
}

/// Snake body and direction buffering.
///
/// The body is ordered head first; the back segment is the tail, the first
/// to vacate on a non-growth move. Movement itself is coordinated by the
/// board, which keeps the cell buffer in sync with every change here.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending_direction: Option<Direction>,
}

impl Snake {
    /// Creates a snake of `length` segments with its head at `head` and the
    /// body extending away opposite `direction`.
    #[must_use]
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        debug_assert!(length >= 1);

        let reverse = direction.opposite();
        let mut body = VecDeque::with_capacity(length);
        let mut segment = head;
        for _ in 0..length {
            body.push_back(segment);
            segment = segment.stepped(reverse);
        }

        Self {
            body,
            direction,
            pending_direction: None,
        }
    }

    /// Buffers a heading change for the next movement tick.
    ///
    /// The exact reverse of the current heading is rejected; the check runs
    /// against the current heading, not an earlier buffered request, and a
    /// later request replaces an earlier one.
    pub(crate) fn steer(&mut self, direction: Direction) {
        if direction == self.direction.opposite() {
            return;
        }
        self.pending_direction = Some(direction);
    }

    /// Promotes any buffered heading and returns the active one.
    pub(crate) fn apply_pending_direction(&mut self) -> Direction {
        if let Some(pending) = self.pending_direction.take() {
            self.direction = pending;
        }
        self.direction
    }

    /// Moves the head to `next_head`. On a non-growth move the tail is
    /// popped and returned so the caller can vacate its cell.
    pub(crate) fn advance(&mut self, next_head: Position, grow: bool) -> Option<Position> {
        debug_assert!(!self.body.is_empty());

        let vacated = if grow { None } else { self.body.pop_back() };
        self.body.push_front(next_head);
        vacated
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
