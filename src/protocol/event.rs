//! Broadcast events and private error notices.
//!
//! Every accepted transition produces one or more [`MatchEvent`]s, each
//! serialized as a tagged envelope `{type, data}` and fanned out to all
//! connected clients. Rejections become an [`ErrorNotice`] sent to the
//! acting client only.

use serde::Serialize;

use super::message::Snapshot;
use crate::core::PlayerId;
use crate::error::{ActionError, JoinError};
use crate::state::Player;

/// A state-change broadcast to every connected client.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum MatchEvent {
    /// A seat was filled.
    PlayerJoined { player: Player, game_state: Snapshot },
    /// Both seats filled; play begins.
    GameStarted(Snapshot),
    /// A move or wall was accepted, or the match finished by forfeit.
    GameStateUpdate(Snapshot),
    /// A seat was vacated.
    PlayerLeft { player_id: PlayerId },
    /// The match was torn down.
    MatchTerminated { reason: String },
}

impl MatchEvent {
    pub fn player_joined(player: Player, game_state: Snapshot) -> Self {
        Self::PlayerJoined { player, game_state }
    }

    pub fn game_started(snapshot: Snapshot) -> Self {
        Self::GameStarted(snapshot)
    }

    pub fn game_state_update(snapshot: Snapshot) -> Self {
        Self::GameStateUpdate(snapshot)
    }

    pub fn player_left(player_id: PlayerId) -> Self {
        Self::PlayerLeft { player_id }
    }

    pub fn match_terminated(reason: impl Into<String>) -> Self {
        Self::MatchTerminated {
            reason: reason.into(),
        }
    }
}

/// A rejection report for the acting client.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ErrorNotice {
    ActionRejected {
        /// Stable machine-readable reason code.
        code: &'static str,
        /// Human-readable description.
        message: String,
    },
}

impl ErrorNotice {
    /// Build the notice for a rejected action.
    #[must_use]
    pub fn rejected(error: &ActionError) -> Self {
        Self::ActionRejected {
            code: error.code(),
            message: error.to_string(),
        }
    }

    /// Build the notice for a refused join.
    #[must_use]
    pub fn join_refused(error: &JoinError) -> Self {
        Self::ActionRejected {
            code: error.code(),
            message: error.to_string(),
        }
    }
}
