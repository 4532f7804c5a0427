//! Wall legality: bounds, stock, overlap, and the reachability invariant.
//!
//! Checks run in a fixed order and short-circuit on the first failure, so
//! the reported reason is always the earliest violated rule. The
//! reachability check clones the board persistently (cheap via `im`) with
//! the candidate included and runs BFS once per player.

use crate::board::{Board, Wall};
use crate::error::WallError;
use crate::rules::path::has_path;

/// A pawn whose goal-row reachability must survive the placement.
#[derive(Clone, Copy, Debug)]
pub struct PawnGoal {
    pub position: crate::core::Position,
    pub goal_row: u8,
}

/// Validate `candidate` against the placed walls and the reachability
/// invariant for every pawn in `pawns`.
///
/// Check order: anchor bounds, wall stock, overlap, reachability. Succeeds
/// only if, with the candidate placed, every pawn still has a path to its
/// goal row.
pub fn check_placement(
    board: &Board,
    walls_remaining: u8,
    candidate: Wall,
    pawns: &[PawnGoal],
) -> Result<(), WallError> {
    if !candidate.anchor_in_bounds() {
        return Err(WallError::OutOfBounds);
    }
    if walls_remaining == 0 {
        return Err(WallError::NoWallsRemaining);
    }
    if board.conflicts(&candidate) {
        return Err(WallError::Overlap);
    }

    let tentative = board.with_wall(candidate);
    for pawn in pawns {
        if !has_path(&tentative, pawn.position, pawn.goal_row) {
            return Err(WallError::BlocksPath);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    fn both_pawns() -> [PawnGoal; 2] {
        [
            PawnGoal {
                position: Position::new(4, 8),
                goal_row: 0,
            },
            PawnGoal {
                position: Position::new(4, 0),
                goal_row: 8,
            },
        ]
    }

    #[test]
    fn test_valid_placement() {
        let board = Board::new();
        assert_eq!(
            check_placement(&board, 10, Wall::horizontal(4, 4), &both_pawns()),
            Ok(())
        );
    }

    #[test]
    fn test_out_of_bounds_anchor() {
        let board = Board::new();
        assert_eq!(
            check_placement(&board, 10, Wall::horizontal(8, 4), &both_pawns()),
            Err(WallError::OutOfBounds)
        );
        assert_eq!(
            check_placement(&board, 10, Wall::vertical(4, 8), &both_pawns()),
            Err(WallError::OutOfBounds)
        );
    }

    #[test]
    fn test_no_walls_remaining() {
        let board = Board::new();
        assert_eq!(
            check_placement(&board, 0, Wall::horizontal(4, 4), &both_pawns()),
            Err(WallError::NoWallsRemaining)
        );
    }

    #[test]
    fn test_overlap_detected() {
        let mut board = Board::new();
        board.push_wall(Wall::horizontal(4, 4));

        for candidate in [
            Wall::horizontal(4, 4),
            Wall::horizontal(5, 4),
            Wall::vertical(4, 4),
        ] {
            assert_eq!(
                check_placement(&board, 10, candidate, &both_pawns()),
                Err(WallError::Overlap),
                "{candidate} should overlap"
            );
        }
    }

    #[test]
    fn test_bounds_checked_before_stock() {
        // Short-circuit order: an out-of-bounds anchor wins over empty stock.
        let board = Board::new();
        assert_eq!(
            check_placement(&board, 0, Wall::horizontal(8, 8), &both_pawns()),
            Err(WallError::OutOfBounds)
        );
    }

    #[test]
    fn test_sealing_wall_rejected() {
        // V(0,0) is placed; H(0,1) would close the northwest pocket around
        // a pawn sitting at (0,1) whose goal is row 8.
        let mut board = Board::new();
        board.push_wall(Wall::vertical(0, 0));

        let pawns = [
            PawnGoal {
                position: Position::new(0, 1),
                goal_row: 8,
            },
            PawnGoal {
                position: Position::new(4, 0),
                goal_row: 8,
            },
        ];
        assert_eq!(
            check_placement(&board, 10, Wall::horizontal(0, 1), &pawns),
            Err(WallError::BlocksPath)
        );
        // The same wall is fine when no pawn is trapped by it.
        assert_eq!(
            check_placement(&board, 10, Wall::horizontal(0, 1), &both_pawns()),
            Ok(())
        );
    }

    #[test]
    fn test_rejection_leaves_board_unchanged() {
        let mut board = Board::new();
        board.push_wall(Wall::horizontal(4, 4));
        let before = board.wall_count();

        let _ = check_placement(&board, 10, Wall::horizontal(4, 4), &both_pawns());
        assert_eq!(board.wall_count(), before);
    }
}
