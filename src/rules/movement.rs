//! Move legality: straight steps, straight jumps, diagonal-around moves.
//!
//! Pure computation over board geometry and the two pawn positions. The
//! match state machine consults this for server-side authority; a client
//! may call the same code path for move hinting, so the rules live in
//! exactly one place.

use smallvec::SmallVec;

use crate::board::{Board, EdgeIndex};
use crate::core::{Direction, Position};

/// Legal destinations for the moving pawn.
///
/// Normal steps and jump/diagonal moves are split for UI hinting; both are
/// equally legal. A pawn has at most 4 normal moves, and at most 4
/// jump/diagonal destinations (one straight jump, or up to two diagonals,
/// per adjacent opponent direction — with a single opponent, never more
/// than 2 in practice).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LegalMoves {
    pub normal: SmallVec<[Position; 4]>,
    pub jumps: SmallVec<[Position; 4]>,
}

impl LegalMoves {
    /// Whether `dest` is a legal destination of either kind.
    #[must_use]
    pub fn contains(&self, dest: Position) -> bool {
        self.normal.contains(&dest) || self.jumps.contains(&dest)
    }

    /// All legal destinations, normal moves first.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.normal.iter().chain(self.jumps.iter()).copied()
    }

    /// Total number of legal destinations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.normal.len() + self.jumps.len()
    }

    /// Whether the pawn has no legal move at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.normal.is_empty() && self.jumps.is_empty()
    }
}

/// Compute the legal destinations for a pawn at `mover` with the opponent
/// pawn at `opponent`.
///
/// Per orthogonal direction: an open, unoccupied adjacent cell is a normal
/// move. If the adjacent cell holds the opponent, the straight jump over it
/// is legal when the far cell is on the board and the far edge is open;
/// otherwise the two wall-aware diagonal escapes around the opponent are
/// considered independently.
#[must_use]
pub fn legal_moves(board: &Board, mover: Position, opponent: Position) -> LegalMoves {
    let edges = EdgeIndex::new(board);
    let mut moves = LegalMoves::default();

    for dir in Direction::ALL {
        let Some(adj) = mover.step(dir) else {
            continue;
        };
        if !edges.is_open(mover, adj) {
            continue;
        }

        if adj != opponent {
            moves.normal.push(adj);
            continue;
        }

        // Adjacent cell is occupied by the opponent: try the straight jump.
        if let Some(jump) = adj.step(dir) {
            if edges.is_open(adj, jump) {
                moves.jumps.push(jump);
                continue;
            }
        }

        // Jump cell off the board or wall-blocked: diagonal escapes. Each
        // perpendicular is evaluated on its own; zero, one, or two may be
        // open.
        for perp in dir.perpendiculars() {
            let Some(diag) = adj.step(perp) else {
                continue;
            };
            if edges.is_open(adj, diag) {
                moves.jumps.push(diag);
            }
        }
    }

    moves
}
