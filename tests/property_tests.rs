//! Property tests over random boards.
//!
//! The placement checker is the only gate between random wall candidates
//! and the board, so these properties pin down the invariants the rest of
//! the crate leans on: accepted walls never seal a player in, and move
//! generation stays inside its structural bounds whatever the board looks
//! like.

use proptest::prelude::*;
use quoridor_core::board::{Board, Wall};
use quoridor_core::core::Position;
use quoridor_core::rules::{check_placement, has_path, legal_moves, PawnGoal};
use quoridor_core::state::STARTING_WALLS;

fn arb_wall() -> impl Strategy<Value = Wall> {
    (0u8..8, 0u8..8, any::<bool>()).prop_map(|(x, y, horizontal)| {
        if horizontal {
            Wall::horizontal(x, y)
        } else {
            Wall::vertical(x, y)
        }
    })
}

fn arb_position() -> impl Strategy<Value = Position> {
    (0u8..9, 0u8..9).prop_map(|(x, y)| Position::new(x, y))
}

fn starting_pawns() -> [PawnGoal; 2] {
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

/// Build a board by pushing each candidate through the placement checker,
/// dropping rejects, with the combined two-player stock as the cap.
fn board_from(candidates: &[Wall]) -> Board {
    let mut board = Board::new();
    let mut remaining = 2 * STARTING_WALLS;
    for &wall in candidates {
        if remaining == 0 {
            break;
        }
        if check_placement(&board, remaining, wall, &starting_pawns()).is_ok() {
            board.push_wall(wall);
            remaining -= 1;
        }
    }
    board
}

proptest! {
    /// No sequence of accepted placements ever cuts a player off from
    /// their goal row.
    #[test]
    fn prop_accepted_walls_never_seal(candidates in prop::collection::vec(arb_wall(), 0..40)) {
        let board = board_from(&candidates);
        for pawn in starting_pawns() {
            prop_assert!(has_path(&board, pawn.position, pawn.goal_row));
        }
    }

    /// Accepted walls never overlap: every pair of placed walls is
    /// conflict-free and all blocked edges are distinct.
    #[test]
    fn prop_placed_walls_are_disjoint(candidates in prop::collection::vec(arb_wall(), 0..40)) {
        let board = board_from(&candidates);
        let walls: Vec<Wall> = board.walls().copied().collect();
        for (i, a) in walls.iter().enumerate() {
            for b in walls.iter().skip(i + 1) {
                prop_assert!(!a.conflicts_with(b), "{a} and {b} overlap");
            }
        }
    }

    /// Move generation stays within structural bounds on any reachable
    /// board: at most 4 plain steps, at most 2 jump destinations, never
    /// the opponent's cell, no duplicates.
    #[test]
    fn prop_move_set_bounds(
        candidates in prop::collection::vec(arb_wall(), 0..20),
        mover in arb_position(),
        opponent in arb_position(),
    ) {
        prop_assume!(mover != opponent);
        let board = board_from(&candidates);
        let moves = legal_moves(&board, mover, opponent);

        prop_assert!(moves.normal.len() <= 4);
        prop_assert!(moves.jumps.len() <= 2);
        prop_assert!(!moves.contains(opponent));
        prop_assert!(!moves.contains(mover));

        let all: Vec<Position> = moves.iter().collect();
        for (i, a) in all.iter().enumerate() {
            for b in all.iter().skip(i + 1) {
                prop_assert_ne!(a, b);
            }
        }
    }

    /// Every generated destination is actually reachable: plain steps are
    /// adjacent and unblocked, jumps are exactly two steps away.
    #[test]
    fn prop_destinations_are_coherent(
        candidates in prop::collection::vec(arb_wall(), 0..20),
        mover in arb_position(),
        opponent in arb_position(),
    ) {
        prop_assume!(mover != opponent);
        let board = board_from(&candidates);
        let moves = legal_moves(&board, mover, opponent);

        for dest in &moves.normal {
            prop_assert!(mover.is_adjacent(*dest));
            prop_assert!(!board.blocks_edge(mover, *dest));
        }
        for dest in &moves.jumps {
            // Jumps only exist when the opponent is adjacent, and land a
            // king-move away from the mover.
            prop_assert!(mover.is_adjacent(opponent));
            let dx = (i16::from(dest.x) - i16::from(mover.x)).abs();
            let dy = (i16::from(dest.y) - i16::from(mover.y)).abs();
            prop_assert!(dx + dy == 2, "jump {dest} is not two steps from {mover}");
        }
    }
}
