//! Wire-format types: incoming actions and the broadcast snapshot.
//!
//! Action payloads arrive as JSON with a `type` tag:
//! `{"type":"move","position":{"x":4,"y":7}}` or
//! `{"type":"place_wall","wall":{"anchor":{"x":3,"y":4},"horizontal":true}}`.
//!
//! The snapshot mirrors the host protocol:
//! `{players, board: {size, walls}, current_turn, winner, game_started}`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Wall};
use crate::core::{PlayerId, Position};
use crate::state::{GameState, Phase, Player};

/// A player action as received from the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionPayload {
    /// Move the pawn to `position`.
    Move { position: Position },
    /// Place a wall.
    PlaceWall { wall: Wall },
}

/// Serialized view of a whole match, broadcast after every accepted
/// transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Seated players, keyed by id.
    pub players: BTreeMap<PlayerId, Player>,
    /// Board geometry and placed walls: `{size, walls}`.
    pub board: Board,
    /// Player on turn, absent while waiting or finished.
    pub current_turn: Option<PlayerId>,
    /// Winner, once decided.
    pub winner: Option<PlayerId>,
    /// True exactly while the match is in progress.
    pub game_started: bool,
}

impl Snapshot {
    /// Capture the current state.
    #[must_use]
    pub fn of(state: &GameState) -> Self {
        Self {
            players: state
                .players()
                .iter()
                .map(|p| (p.id.clone(), p.clone()))
                .collect(),
            board: state.board().clone(),
            current_turn: state.current_turn().cloned(),
            winner: state.winner().cloned(),
            game_started: state.phase() == Phase::InProgress,
        }
    }
}
