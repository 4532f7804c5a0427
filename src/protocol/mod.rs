//! Host-facing wire formats: action payloads, snapshots, broadcast events.

pub mod event;
pub mod message;

pub use event::{ErrorNotice, MatchEvent};
pub use message::{ActionPayload, Snapshot};
