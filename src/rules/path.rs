//! Path reachability: breadth-first search over open cells.
//!
//! Answers "can a pawn at `start` reach any cell in `goal_row` without
//! crossing a blocking wall?". Pawn occupancy does not block paths; this is
//! a hypothetical-mobility check, not a move check. Deterministic, bounded
//! by board size (at most 81 cells), and called with the candidate wall
//! already on the board when validating a tentative placement.

use std::collections::VecDeque;

use crate::board::{Board, EdgeIndex};
use crate::core::{Direction, Position, BOARD_SIZE};

/// Whether `start` can reach any cell whose row is `goal_row`.
#[must_use]
pub fn has_path(board: &Board, start: Position, goal_row: u8) -> bool {
    if start.y == goal_row {
        return true;
    }

    let edges = EdgeIndex::new(board);
    let mut visited = [false; (BOARD_SIZE as usize) * (BOARD_SIZE as usize)];
    let mut frontier = VecDeque::new();

    visited[start.index()] = true;
    frontier.push_back(start);

    while let Some(cell) = frontier.pop_front() {
        for dir in Direction::ALL {
            let Some(next) = cell.step(dir) else {
                continue;
            };
            if visited[next.index()] || !edges.is_open(cell, next) {
                continue;
            }
            if next.y == goal_row {
                return true;
            }
            visited[next.index()] = true;
            frontier.push_back(next);
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Wall;

    #[test]
    fn test_open_board_reaches_both_edges() {
        let board = Board::new();
        assert!(has_path(&board, Position::new(4, 8), 0));
        assert!(has_path(&board, Position::new(4, 0), 8));
    }

    #[test]
    fn test_already_on_goal_row() {
        let board = Board::new();
        assert!(has_path(&board, Position::new(0, 0), 0));
    }

    #[test]
    fn test_walls_force_a_detour() {
        // Wall off most of row 4; the gap at the east edge stays open.
        let mut board = Board::new();
        for x in [0, 2, 4] {
            board.push_wall(Wall::horizontal(x, 4));
        }
        assert!(has_path(&board, Position::new(4, 8), 0));
    }

    #[test]
    fn test_sealed_pocket_blocks() {
        // V(0,0) + H(0,1) fence off cells (0,0) and (0,1) in the northwest
        // corner. Neither wall conflicts with the other, so this is a
        // legally reachable position.
        let mut board = Board::new();
        board.push_wall(Wall::vertical(0, 0));
        board.push_wall(Wall::horizontal(0, 1));

        assert!(!has_path(&board, Position::new(0, 0), 8));
        assert!(!has_path(&board, Position::new(0, 1), 8));
        // Row 0 is inside the pocket, so it stays reachable from within.
        assert!(has_path(&board, Position::new(0, 1), 0));
        // Cells outside the pocket are unaffected.
        assert!(has_path(&board, Position::new(4, 0), 8));
        assert!(has_path(&board, Position::new(1, 0), 8));
    }

    #[test]
    fn test_pawns_do_not_block_paths() {
        // Reachability ignores occupancy entirely; nothing to set up, the
        // query only sees walls.
        let board = Board::new();
        assert!(has_path(&board, Position::new(4, 1), 0));
    }
}
