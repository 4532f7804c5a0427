//! Board geometry primitives: cells and movement directions.
//!
//! ## Position
//!
//! A cell on the 9×9 board. `x` is the column, `y` the row; row 0 is the
//! black player's starting edge and row 8 the white player's. Positions are
//! immutable value types.
//!
//! ## Direction
//!
//! The four orthogonal movement directions. `North` decreases `y` (toward
//! row 0), `South` increases it.

use serde::{Deserialize, Serialize};

/// Number of cells along each board edge.
pub const BOARD_SIZE: u8 = 9;

/// Exclusive upper bound for wall anchor coordinates (the interior
/// intersection grid is 8×8).
pub const WALL_GRID_SIZE: u8 = BOARD_SIZE - 1;

/// A cell on the board.
///
/// ```
/// use quoridor_core::core::Position;
///
/// let p = Position::new(4, 8);
/// assert_eq!(p.x, 4);
/// assert!(Position::in_bounds(4, 8));
/// assert!(!Position::in_bounds(9, 0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    /// Create a position. Panics if out of bounds; use [`Position::in_bounds`]
    /// first when the coordinates come from untrusted input.
    #[must_use]
    pub fn new(x: u8, y: u8) -> Self {
        assert!(Self::in_bounds(x, y), "position ({x},{y}) off the board");
        Self { x, y }
    }

    /// Check whether `(x, y)` lies on the board.
    #[must_use]
    pub const fn in_bounds(x: u8, y: u8) -> bool {
        x < BOARD_SIZE && y < BOARD_SIZE
    }

    /// The adjacent cell in `dir`, or `None` at the board edge.
    #[must_use]
    pub fn step(self, dir: Direction) -> Option<Self> {
        let (dx, dy) = dir.delta();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Self::in_bounds(x, y).then_some(Self { x, y })
    }

    /// Dense index into a `BOARD_SIZE²` array, for visited sets.
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * BOARD_SIZE as usize + self.x as usize
    }

    /// Whether the two cells share a unit edge.
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx + dy == 1
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Orthogonal movement direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All four directions, in scan order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit offset `(dx, dy)` for this direction.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// The two directions perpendicular to this one (±90°).
    #[must_use]
    pub const fn perpendiculars(self) -> [Direction; 2] {
        match self {
            Direction::North | Direction::South => [Direction::East, Direction::West],
            Direction::East | Direction::West => [Direction::North, Direction::South],
        }
    }
}
