//! The board: static 9×9 geometry plus the placed wall sequence.
//!
//! Walls are kept in an `im::Vector` in placement order (audit/debug only;
//! legality never depends on order). The persistent structure makes
//! [`Board::with_wall`] an O(log n) copy, which is how candidate walls are
//! tested against the reachability invariant without touching the real
//! board.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::wall::{Edge, Wall};
use crate::core::{Position, BOARD_SIZE};

/// Board state: size constant and placed walls, in placement order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    size: u8,
    walls: Vector<Wall>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty 9×9 board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            size: BOARD_SIZE,
            walls: Vector::new(),
        }
    }

    /// Board edge length.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Placed walls, oldest first.
    pub fn walls(&self) -> impl Iterator<Item = &Wall> {
        self.walls.iter()
    }

    /// Number of placed walls.
    #[must_use]
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Whether a cell lies on the board.
    #[must_use]
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    /// Whether any placed wall blocks traversal between two adjacent cells.
    #[must_use]
    pub fn blocks_edge(&self, from: Position, to: Position) -> bool {
        self.walls.iter().any(|w| w.blocks_edge(from, to))
    }

    /// Whether `candidate` overlaps/conflicts with any placed wall.
    #[must_use]
    pub fn conflicts(&self, candidate: &Wall) -> bool {
        self.walls.iter().any(|w| w.conflicts_with(candidate))
    }

    /// Append a wall. The caller has already validated it.
    pub fn push_wall(&mut self, wall: Wall) {
        self.walls.push_back(wall);
    }

    /// A copy of this board with `wall` appended, for tentative checks.
    #[must_use]
    pub fn with_wall(&self, wall: Wall) -> Self {
        let mut next = self.clone();
        next.push_wall(wall);
        next
    }

    /// Every edge blocked by the placed walls, as a hash set.
    ///
    /// Built once per reachability or move-generation query so the inner
    /// loops do O(1) lookups instead of scanning the wall list per edge.
    #[must_use]
    pub fn blocked_edge_set(&self) -> FxHashSet<Edge> {
        let mut set = FxHashSet::default();
        for wall in &self.walls {
            for edge in wall.blocked_edges() {
                set.insert(edge);
            }
        }
        set
    }
}

/// Precomputed open-edge query over a board's walls.
///
/// Cheap to build (two edges per wall) and consulted heavily by BFS and
/// move generation.
pub struct EdgeIndex {
    blocked: FxHashSet<Edge>,
}

impl EdgeIndex {
    /// Index the blocked edges of `board`.
    #[must_use]
    pub fn new(board: &Board) -> Self {
        Self {
            blocked: board.blocked_edge_set(),
        }
    }

    /// Whether traversal between two adjacent cells is open.
    #[must_use]
    pub fn is_open(&self, from: Position, to: Position) -> bool {
        !self.blocked.contains(&Edge::new(from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::wall::Orientation;

    #[test]
    fn test_empty_board() {
        let board = Board::new();
        assert_eq!(board.size(), 9);
        assert_eq!(board.wall_count(), 0);
        assert!(!board.blocks_edge(Position::new(4, 4), Position::new(4, 5)));
    }

    #[test]
    fn test_push_and_query() {
        let mut board = Board::new();
        board.push_wall(Wall::horizontal(4, 4));

        assert_eq!(board.wall_count(), 1);
        assert!(board.blocks_edge(Position::new(4, 4), Position::new(4, 5)));
        assert!(board.blocks_edge(Position::new(5, 4), Position::new(5, 5)));
        assert!(!board.blocks_edge(Position::new(3, 4), Position::new(3, 5)));
    }

    #[test]
    fn test_with_wall_leaves_original_untouched() {
        let board = Board::new();
        let tentative = board.with_wall(Wall::vertical(2, 2));

        assert_eq!(board.wall_count(), 0);
        assert_eq!(tentative.wall_count(), 1);
        assert!(tentative.blocks_edge(Position::new(2, 2), Position::new(3, 2)));
        assert!(!board.blocks_edge(Position::new(2, 2), Position::new(3, 2)));
    }

    #[test]
    fn test_conflicts_against_placed_set() {
        let mut board = Board::new();
        board.push_wall(Wall::horizontal(4, 4));

        assert!(board.conflicts(&Wall::horizontal(4, 4)));
        assert!(board.conflicts(&Wall::horizontal(5, 4)));
        assert!(board.conflicts(&Wall::vertical(4, 4)));
        assert!(!board.conflicts(&Wall::horizontal(6, 4)));
    }

    #[test]
    fn test_placement_order_preserved() {
        let mut board = Board::new();
        let first = Wall::horizontal(0, 0);
        let second = Wall::vertical(5, 5);
        board.push_wall(first);
        board.push_wall(second);

        let placed: Vec<Wall> = board.walls().copied().collect();
        assert_eq!(placed, vec![first, second]);
    }

    #[test]
    fn test_edge_index() {
        let mut board = Board::new();
        board.push_wall(Wall::new(Position::new(4, 4), Orientation::Horizontal));
        let index = EdgeIndex::new(&board);

        assert!(!index.is_open(Position::new(4, 4), Position::new(4, 5)));
        assert!(index.is_open(Position::new(4, 4), Position::new(5, 4)));
    }
}
