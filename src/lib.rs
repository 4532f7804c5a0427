//! # quoridor-core
//!
//! Authoritative rule engine and state-synchronization core for two-player
//! Quoridor matches.
//!
//! ## Design Principles
//!
//! 1. **One Rule Implementation**: move legality, wall legality, and win
//!    detection live in exactly one pure code path, used both for
//!    server-side authority and for client-side move hinting. Divergent
//!    duplicate rule code is the bug this crate exists to remove.
//!
//! 2. **Sequential Authority**: each match's state is owned by a single
//!    sequential loop draining a command queue. Legality checks always see
//!    a consistent snapshot; nothing races.
//!
//! 3. **Local, Non-Fatal Rejection**: bad actions never corrupt or
//!    terminate a match. They are refused with a stable reason code
//!    reported privately to the acting client.
//!
//! ## Architecture
//!
//! - **Reachability Invariant**: every wall placement is checked with BFS
//!   so that neither player can ever be fully sealed off from their goal
//!   row.
//!
//! - **Persistent Data Structures**: the wall list is an `im` vector, so
//!   tentative placements are validated against an O(log n) board copy.
//!
//! - **JSON Wire Format**: action payloads and broadcast envelopes match
//!   the host protocol exactly; parsing failures surface as ordinary
//!   rejections.
//!
//! ## Modules
//!
//! - `core`: positions, directions, player identity
//! - `board`: grid geometry, wall addressing, edge-blocking queries
//! - `rules`: path reachability, move legality, wall legality
//! - `state`: authoritative match state machine and event emission
//! - `protocol`: action payloads, snapshots, broadcast envelopes
//! - `host`: per-match command loop and broadcast seam
//! - `error`: rejection taxonomy with stable reason codes

pub mod board;
pub mod core;
pub mod error;
pub mod host;
pub mod protocol;
pub mod rules;
pub mod state;

// Re-export commonly used types
pub use crate::core::{Direction, PlayerId, Position, BOARD_SIZE, WALL_GRID_SIZE};

pub use crate::board::{Board, Edge, EdgeIndex, Orientation, Wall};

pub use crate::rules::{check_placement, has_path, legal_moves, LegalMoves, PawnGoal};

pub use crate::state::{Color, Emitted, GameState, Phase, Player, STARTING_WALLS};

pub use crate::protocol::{ActionPayload, ErrorNotice, MatchEvent, Snapshot};

pub use crate::host::{Broadcaster, Command, Flow, MatchHandle, MatchLoop};

pub use crate::error::{ActionError, JoinError, WallError};
