//! Rule engines: path reachability, move legality, wall legality.
//!
//! Everything here is pure and side-effect-free. The match state machine is
//! the only caller that mutates state; clients may reuse these functions
//! directly for move hinting without forking the rules.

pub mod movement;
pub mod path;
pub mod walls;

pub use movement::{legal_moves, LegalMoves};
pub use path::has_path;
pub use walls::{check_placement, PawnGoal};
