/// Canonical movement directions.
///
/// Discriminants follow the clockwise cyclic ordering, so for any direction
/// `d` the reverse is `(d + 2) mod 4`. Renderers translating raw input may
/// rely on that arithmetic.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    /// Returns the unit cell offset `(dx, dy)`. The y axis grows downward.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Direction;

    const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn opposite_matches_cyclic_discriminant_law() {
        for direction in ALL {
            let reversed = (direction as u8 + 2) % 4;
            assert_eq!(direction.opposite() as u8, reversed);
        }
    }

    #[test]
    fn opposite_deltas_cancel_out() {
        for direction in ALL {
            let (dx, dy) = direction.delta();
            let (rx, ry) = direction.opposite().delta();
            assert_eq!((dx + rx, dy + ry), (0, 0));
        }
    }
}
