//! Core types: positions, directions, player identity.
//!
//! These are the game-agnostic building blocks shared by the board model,
//! the rules, and the match state machine.

pub mod player_id;
pub mod position;

pub use player_id::PlayerId;
pub use position::{Direction, Position, BOARD_SIZE, WALL_GRID_SIZE};
