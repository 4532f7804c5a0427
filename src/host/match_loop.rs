//! Per-match command loop.
//!
//! Each match is mutated by exactly one logical sequential process: the
//! host enqueues joins, leaves, and raw action payloads on a channel, and
//! [`MatchLoop::run`] drains them one at a time. Every legality check
//! therefore observes a consistent `GameState`, and actions from the two
//! players can never race. No handler blocks on I/O; each command is
//! processed to completion within one loop tick.
//!
//! State is fully isolated per match — hosts spawn one loop per match and
//! nothing is shared between them. The only outward channel is the
//! [`Broadcaster`], which the loop treats as fire-and-forget: a delivery
//! failure to one client is the host's concern and must not stall the loop.

use std::sync::mpsc::{channel, Receiver, Sender};

use crate::core::PlayerId;
use crate::protocol::{ActionPayload, ErrorNotice, MatchEvent};
use crate::state::GameState;

/// A command enqueued by the host.
#[derive(Clone, Debug)]
pub enum Command {
    /// A player connected to the match.
    Join {
        player_id: PlayerId,
        display_name: String,
    },
    /// A player disconnected.
    Leave { player_id: PlayerId },
    /// A raw action payload from a player, parsed inside the loop so that
    /// malformed JSON is rejected like any other invalid action.
    Action { player_id: PlayerId, payload: String },
    /// Tear the match down.
    Terminate { reason: String },
}

/// Outbound fan-out to connected clients.
///
/// Both methods are fire-and-forget: implementations swallow delivery
/// failures (log, drop the client, whatever the host prefers) rather than
/// surfacing them into the match loop.
pub trait Broadcaster {
    /// Deliver an event to every connected client.
    fn broadcast(&mut self, event: &MatchEvent);

    /// Deliver a private rejection notice to one client.
    fn notify(&mut self, player: &PlayerId, notice: &ErrorNotice);
}

/// Host-side handle for enqueueing commands.
///
/// Cheap to clone; all clones feed the same match loop. Sends after the
/// loop has exited are silently dropped.
#[derive(Clone)]
pub struct MatchHandle {
    tx: Sender<Command>,
}

impl MatchHandle {
    /// A player joined the match.
    pub fn on_join(&self, player_id: PlayerId, display_name: impl Into<String>) {
        self.send(Command::Join {
            player_id,
            display_name: display_name.into(),
        });
    }

    /// A player left the match.
    pub fn on_leave(&self, player_id: PlayerId) {
        self.send(Command::Leave { player_id });
    }

    /// A player sent an action payload.
    pub fn on_action(&self, player_id: PlayerId, payload: impl Into<String>) {
        self.send(Command::Action {
            player_id,
            payload: payload.into(),
        });
    }

    /// Tear the match down with a reason.
    pub fn terminate(&self, reason: impl Into<String>) {
        self.send(Command::Terminate {
            reason: reason.into(),
        });
    }

    fn send(&self, command: Command) {
        if self.tx.send(command).is_err() {
            tracing::debug!("match loop already stopped, command dropped");
        }
    }
}

/// The sequential loop owning one match's authoritative state.
pub struct MatchLoop {
    state: GameState,
    rx: Receiver<Command>,
}

impl MatchLoop {
    /// Create a match and its command handle. `created_at` is unix seconds.
    #[must_use]
    pub fn new(created_at: i64) -> (MatchHandle, MatchLoop) {
        let (tx, rx) = channel();
        (
            MatchHandle { tx },
            MatchLoop {
                state: GameState::new(created_at),
                rx,
            },
        )
    }

    /// Read access for tests and host-side inspection.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Drain commands until the match ends.
    ///
    /// Exits when termination is requested, when the last player leaves, or
    /// when every handle has been dropped. The `GameState` is dropped with
    /// the loop; a new match means a new loop.
    pub fn run(mut self, broadcaster: &mut dyn Broadcaster) {
        while let Ok(command) = self.rx.recv() {
            if self.process(command, broadcaster) == Flow::Stop {
                return;
            }
        }
    }

    /// Handle a single command. Exposed for hosts that drive the loop from
    /// their own scheduler instead of a dedicated thread.
    pub fn process(&mut self, command: Command, broadcaster: &mut dyn Broadcaster) -> Flow {
        match command {
            Command::Join {
                player_id,
                display_name,
            } => match self.state.join(player_id.clone(), display_name) {
                Ok(events) => {
                    for event in &events {
                        broadcaster.broadcast(event);
                    }
                }
                Err(reason) => {
                    tracing::debug!(player = %player_id, %reason, "join refused");
                    broadcaster.notify(&player_id, &ErrorNotice::join_refused(&reason));
                }
            },

            Command::Leave { player_id } => {
                for event in &self.state.leave(&player_id) {
                    broadcaster.broadcast(event);
                }
                if self.state.players().is_empty() {
                    broadcaster.broadcast(&MatchEvent::match_terminated("all players left"));
                    return Flow::Stop;
                }
            }

            Command::Action { player_id, payload } => {
                let result = serde_json::from_str::<ActionPayload>(&payload)
                    .map_err(|e| crate::error::ActionError::InvalidAction(e.to_string()))
                    .and_then(|action| self.state.apply(&player_id, &action));
                match result {
                    Ok(events) => {
                        for event in &events {
                            broadcaster.broadcast(event);
                        }
                    }
                    Err(error) => {
                        broadcaster.notify(&player_id, &ErrorNotice::rejected(&error));
                    }
                }
            }

            Command::Terminate { reason } => {
                tracing::info!(%reason, "match terminated");
                broadcaster.broadcast(&MatchEvent::match_terminated(reason));
                return Flow::Stop;
            }
        }

        Flow::Continue
    }
}

/// Whether the loop keeps draining after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}
