//! Rejection taxonomy.
//!
//! Every rejection is local and non-fatal: the match state is left untouched
//! and the reason is reported back to the acting client only. Each variant
//! carries a stable machine-readable code for the wire.

use thiserror::Error;

use crate::core::{PlayerId, Position};

/// Why a candidate wall was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WallError {
    /// Anchor outside the interior intersection grid.
    #[error("wall anchor is outside the board")]
    OutOfBounds,

    /// The placing player has no walls left.
    #[error("no walls remaining")]
    NoWallsRemaining,

    /// Overlaps or crosses a previously placed wall.
    #[error("wall overlaps an existing wall")]
    Overlap,

    /// Would leave a player with no path to their goal row.
    #[error("wall would seal off a player's path to their goal row")]
    BlocksPath,
}

impl WallError {
    /// Stable reason code for the wire.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            WallError::OutOfBounds => "illegal_wall_out_of_bounds",
            WallError::NoWallsRemaining => "illegal_wall_no_walls_remaining",
            WallError::Overlap => "illegal_wall_overlap",
            WallError::BlocksPath => "illegal_wall_blocks_path",
        }
    }
}

/// Why a player action was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Malformed or unparseable payload.
    #[error("invalid action: {0}")]
    InvalidAction(String),

    /// Action from a player who is not on turn (or not seated).
    #[error("it is not {0}'s turn")]
    OutOfTurn(PlayerId),

    /// Requested destination is not a legal move.
    #[error("illegal move to {0}")]
    IllegalMove(Position),

    /// Wall placement refused, with the specific reason.
    #[error("illegal wall: {0}")]
    IllegalWall(#[from] WallError),

    /// The match has already finished.
    #[error("match is finished")]
    MatchFinished,

    /// The match has not started (fewer than two players seated).
    #[error("match has not started")]
    NotStarted,
}

impl ActionError {
    /// Stable reason code for the wire.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ActionError::InvalidAction(_) => "invalid_action",
            ActionError::OutOfTurn(_) => "out_of_turn",
            ActionError::IllegalMove(_) => "illegal_move",
            ActionError::IllegalWall(e) => e.code(),
            ActionError::MatchFinished => "match_finished",
            ActionError::NotStarted => "not_started",
        }
    }
}

/// Why a join request was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum JoinError {
    /// Both seats are already filled.
    #[error("match is full")]
    MatchFull,

    /// The player already occupies a seat.
    #[error("{0} already joined")]
    AlreadyJoined(PlayerId),
}

impl JoinError {
    /// Stable reason code for the wire.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            JoinError::MatchFull => "match_full",
            JoinError::AlreadyJoined(_) => "already_joined",
        }
    }
}
