//! Match state machine: seats, turn order, win detection, event emission.

pub mod game;

pub use game::{Color, Emitted, GameState, Phase, Player, STARTING_WALLS};
