//! Wall value types: orientation, blocked edges, conflict detection.
//!
//! A wall is anchored at an interior grid intersection and spans two cell
//! widths. Anchors live on the 8×8 intersection grid (`0..=7` both axes).
//! A horizontal wall at `(wx, wy)` blocks the vertical traversals
//! `(wx, wy)↔(wx, wy+1)` and `(wx+1, wy)↔(wx+1, wy+1)`; a vertical wall at
//! `(wx, wy)` blocks the horizontal traversals `(wx, wy)↔(wx+1, wy)` and
//! `(wx, wy+1)↔(wx+1, wy+1)`.
//!
//! Walls are immutable once placed; the placed set only ever grows.

use serde::{Deserialize, Serialize};

use crate::core::{Position, WALL_GRID_SIZE};

/// Wall orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// An undirected unit edge between two orthogonally adjacent cells.
///
/// Endpoints are stored in sorted order so the same edge always compares
/// equal regardless of traversal direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge(Position, Position);

impl Edge {
    /// Create an edge between two adjacent cells.
    #[must_use]
    pub fn new(a: Position, b: Position) -> Self {
        debug_assert!(a.is_adjacent(b), "edge endpoints must be adjacent");
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }
}

/// A placed (or candidate) wall.
///
/// The wire representation matches the host protocol:
/// `{"anchor":{"x":..,"y":..},"horizontal":bool}`. Anchors are not
/// range-checked on deserialization; wall legality checking rejects
/// out-of-range anchors with a specific reason instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "WireWall", into = "WireWall")]
pub struct Wall {
    pub anchor: Position,
    pub orientation: Orientation,
}

#[derive(Serialize, Deserialize)]
struct WireWall {
    anchor: Position,
    horizontal: bool,
}

impl From<WireWall> for Wall {
    fn from(w: WireWall) -> Self {
        let orientation = if w.horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        Self {
            anchor: w.anchor,
            orientation,
        }
    }
}

impl From<Wall> for WireWall {
    fn from(w: Wall) -> Self {
        Self {
            anchor: w.anchor,
            horizontal: w.orientation == Orientation::Horizontal,
        }
    }
}

impl Wall {
    /// Create a wall at the given intersection.
    #[must_use]
    pub fn new(anchor: Position, orientation: Orientation) -> Self {
        Self {
            anchor,
            orientation,
        }
    }

    /// Horizontal wall at intersection `(x, y)`.
    #[must_use]
    pub fn horizontal(x: u8, y: u8) -> Self {
        Self::new(Position { x, y }, Orientation::Horizontal)
    }

    /// Vertical wall at intersection `(x, y)`.
    #[must_use]
    pub fn vertical(x: u8, y: u8) -> Self {
        Self::new(Position { x, y }, Orientation::Vertical)
    }

    /// Whether the anchor lies on the interior intersection grid.
    #[must_use]
    pub fn anchor_in_bounds(&self) -> bool {
        self.anchor.x < WALL_GRID_SIZE && self.anchor.y < WALL_GRID_SIZE
    }

    /// The two unit edges this wall blocks.
    ///
    /// Only meaningful for in-bounds anchors; callers validate bounds first.
    #[must_use]
    pub fn blocked_edges(&self) -> [Edge; 2] {
        let Position { x, y } = self.anchor;
        match self.orientation {
            Orientation::Horizontal => [
                Edge::new(Position { x, y }, Position { x, y: y + 1 }),
                Edge::new(Position { x: x + 1, y }, Position { x: x + 1, y: y + 1 }),
            ],
            Orientation::Vertical => [
                Edge::new(Position { x, y }, Position { x: x + 1, y }),
                Edge::new(Position { x, y: y + 1 }, Position { x: x + 1, y: y + 1 }),
            ],
        }
    }

    /// Whether this wall blocks traversal of the edge `from↔to`.
    #[must_use]
    pub fn blocks_edge(&self, from: Position, to: Position) -> bool {
        let edge = Edge::new(from, to);
        self.blocked_edges().contains(&edge)
    }

    /// Overlap/conflict test against another wall.
    ///
    /// Two walls conflict if they block any shared edge (parallel overlap)
    /// or share an anchor (which covers perpendicular walls crossing at the
    /// same intersection center).
    #[must_use]
    pub fn conflicts_with(&self, other: &Wall) -> bool {
        if self.anchor == other.anchor {
            return true;
        }
        let theirs = other.blocked_edges();
        self.blocked_edges().iter().any(|e| theirs.contains(e))
    }
}

impl std::fmt::Display for Wall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self.orientation {
            Orientation::Horizontal => "H",
            Orientation::Vertical => "V",
        };
        write!(f, "{}@{}", tag, self.anchor)
    }
}
