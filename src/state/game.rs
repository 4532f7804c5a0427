//! Authoritative match state and its transition functions.
//!
//! `GameState` owns the two seats, the board, turn order, and win
//! detection. All mutation goes through the transition methods here
//! (`join`, `leave`, `apply`); accepted transitions return the events to
//! broadcast, rejected ones return an error and leave the state untouched.
//!
//! ## Seats
//!
//! Join order decides everything: the first joiner is white, starts at
//! (4,8), aims for row 0, and moves first; the second is black, starts at
//! (4,0), aims for row 8. The match starts the instant the second seat
//! fills — there is no separate start action.
//!
//! ## Disconnects
//!
//! A player leaving an in-progress match forfeits it: the remaining player
//! is recorded as winner and the match finishes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{PlayerId, Position, BOARD_SIZE};
use crate::error::{ActionError, JoinError};
use crate::protocol::{ActionPayload, MatchEvent};
use crate::rules::{check_placement, legal_moves, LegalMoves, PawnGoal};

/// Walls each player starts with.
pub const STARTING_WALLS: u8 = 10;

/// Seat color, derived from join order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Starting cell for this color.
    #[must_use]
    pub fn start_position(self) -> Position {
        let mid = BOARD_SIZE / 2;
        match self {
            Color::White => Position::new(mid, BOARD_SIZE - 1),
            Color::Black => Position::new(mid, 0),
        }
    }

    /// The row this color must reach to win (the opponent's starting edge).
    #[must_use]
    pub fn goal_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => BOARD_SIZE - 1,
        }
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    #[serde(rename = "username")]
    pub name: String,
    pub position: Position,
    #[serde(rename = "walls")]
    pub walls_remaining: u8,
    pub goal_row: u8,
    pub color: Color,
}

impl Player {
    fn seated(id: PlayerId, name: String, color: Color) -> Self {
        Self {
            id,
            name,
            position: color.start_position(),
            walls_remaining: STARTING_WALLS,
            goal_row: color.goal_row(),
            color,
        }
    }
}

/// Match lifecycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Zero or one players seated.
    Waiting,
    /// Both seats filled, turns being taken.
    InProgress,
    /// Winner decided or match abandoned. Terminal.
    Finished,
}

/// Authoritative state of one match.
///
/// Owned exclusively by the per-match sequential loop; nothing outside the
/// transition methods mutates it.
#[derive(Clone, Debug)]
pub struct GameState {
    players: Vec<Player>,
    board: Board,
    current_turn: Option<PlayerId>,
    winner: Option<PlayerId>,
    phase: Phase,
    created_at: i64,
}

/// Events produced by a single transition (at most two).
pub type Emitted = SmallVec<[MatchEvent; 2]>;

impl GameState {
    /// Fresh empty match. `created_at` is unix seconds, supplied by the
    /// host so the core stays clock-free.
    #[must_use]
    pub fn new(created_at: i64) -> Self {
        Self {
            players: Vec::with_capacity(2),
            board: Board::new(),
            current_turn: None,
            winner: None,
            phase: Phase::Waiting,
            created_at,
        }
    }

    // === Read access ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Seated players, in join order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn current_turn(&self) -> Option<&PlayerId> {
        self.current_turn.as_ref()
    }

    #[must_use]
    pub fn winner(&self) -> Option<&PlayerId> {
        self.winner.as_ref()
    }

    #[must_use]
    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    /// Look up a seated player.
    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// The other seated player, if both seats are filled.
    #[must_use]
    pub fn opponent(&self, id: &PlayerId) -> Option<&Player> {
        if self.players.len() < 2 {
            return None;
        }
        self.players.iter().find(|p| &p.id != id)
    }

    /// Legal destinations for a seated player's pawn. `None` until both
    /// seats are filled. Usable for client-side move hinting; the same
    /// computation authorizes moves in [`GameState::apply`].
    #[must_use]
    pub fn legal_moves_for(&self, id: &PlayerId) -> Option<LegalMoves> {
        let mover = self.player(id)?;
        let opponent = self.opponent(id)?;
        Some(legal_moves(&self.board, mover.position, opponent.position))
    }

    // === Transitions ===

    /// Seat a player. On the second join the match starts: colors,
    /// positions, and the first turn are assigned and play begins.
    pub fn join(&mut self, id: PlayerId, name: impl Into<String>) -> Result<Emitted, JoinError> {
        if self.players.len() >= 2 {
            return Err(JoinError::MatchFull);
        }
        if self.player(&id).is_some() {
            return Err(JoinError::AlreadyJoined(id));
        }

        let color = if self.players.is_empty() {
            Color::White
        } else {
            Color::Black
        };
        let player = Player::seated(id, name.into(), color);
        tracing::info!(player = %player.id, ?color, "player joined");
        self.players.push(player.clone());

        let mut events: Emitted = SmallVec::new();
        events.push(MatchEvent::player_joined(player, self.snapshot()));

        if self.players.len() == 2 {
            self.phase = Phase::InProgress;
            self.current_turn = Some(self.players[0].id.clone());
            tracing::info!(first_turn = %self.players[0].id, "match started");
            events.push(MatchEvent::game_started(self.snapshot()));
        }

        Ok(events)
    }

    /// Unseat a player. Leaving an in-progress match forfeits it to the
    /// remaining player. Unknown ids are ignored.
    pub fn leave(&mut self, id: &PlayerId) -> Emitted {
        let mut events: Emitted = SmallVec::new();
        let Some(idx) = self.players.iter().position(|p| &p.id == id) else {
            return events;
        };

        self.players.remove(idx);
        tracing::info!(player = %id, "player left");
        events.push(MatchEvent::player_left(id.clone()));

        if self.phase == Phase::InProgress {
            self.winner = self.players.first().map(|p| p.id.clone());
            self.phase = Phase::Finished;
            self.current_turn = None;
            if let Some(winner) = &self.winner {
                tracing::info!(%winner, "match forfeited");
            }
            events.push(MatchEvent::game_state_update(self.snapshot()));
        }

        events
    }

    /// Apply a move or wall placement requested by `id`.
    ///
    /// Rejections leave the state byte-identical; the caller reports the
    /// error privately to the acting client.
    pub fn apply(&mut self, id: &PlayerId, action: &ActionPayload) -> Result<Emitted, ActionError> {
        match self.phase {
            Phase::Finished => return Err(ActionError::MatchFinished),
            Phase::Waiting => return Err(ActionError::NotStarted),
            Phase::InProgress => {}
        }
        if self.player(id).is_none() {
            return Err(ActionError::InvalidAction(format!("{id} is not seated")));
        }
        if self.current_turn.as_ref() != Some(id) {
            return Err(ActionError::OutOfTurn(id.clone()));
        }

        match action {
            ActionPayload::Move { position } => self.apply_move(id, *position),
            ActionPayload::PlaceWall { wall } => self.apply_wall(id, *wall),
        }
    }

    fn apply_move(&mut self, id: &PlayerId, dest: Position) -> Result<Emitted, ActionError> {
        let legal = self
            .legal_moves_for(id)
            .ok_or_else(|| ActionError::OutOfTurn(id.clone()))?;
        if !legal.contains(dest) {
            tracing::debug!(player = %id, %dest, "illegal move rejected");
            return Err(ActionError::IllegalMove(dest));
        }

        let goal_row = {
            let mover = self.player_mut(id);
            mover.position = dest;
            mover.goal_row
        };

        if dest.y == goal_row {
            self.winner = Some(id.clone());
            self.phase = Phase::Finished;
            self.current_turn = None;
            tracing::info!(winner = %id, "match won");
        } else {
            self.advance_turn(id);
        }

        Ok(SmallVec::from_iter([MatchEvent::game_state_update(
            self.snapshot(),
        )]))
    }

    fn apply_wall(&mut self, id: &PlayerId, wall: crate::board::Wall) -> Result<Emitted, ActionError> {
        let placer = self.player(id).expect("seat checked in apply");
        let pawns: Vec<PawnGoal> = self
            .players
            .iter()
            .map(|p| PawnGoal {
                position: p.position,
                goal_row: p.goal_row,
            })
            .collect();

        if let Err(reason) = check_placement(&self.board, placer.walls_remaining, wall, &pawns) {
            tracing::debug!(player = %id, %wall, %reason, "illegal wall rejected");
            return Err(reason.into());
        }

        self.board.push_wall(wall);
        self.player_mut(id).walls_remaining -= 1;
        self.advance_turn(id);

        Ok(SmallVec::from_iter([MatchEvent::game_state_update(
            self.snapshot(),
        )]))
    }

    fn advance_turn(&mut self, just_acted: &PlayerId) {
        self.current_turn = self
            .players
            .iter()
            .find(|p| &p.id != just_acted)
            .map(|p| p.id.clone());
    }

    fn player_mut(&mut self, id: &PlayerId) -> &mut Player {
        self.players
            .iter_mut()
            .find(|p| &p.id == id)
            .expect("caller verified the seat")
    }

    /// Serialized view of the whole match for broadcast.
    #[must_use]
    pub fn snapshot(&self) -> crate::protocol::Snapshot {
        crate::protocol::Snapshot::of(self)
    }
}
