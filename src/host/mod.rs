//! Host integration: the per-match command queue and broadcast seam.

pub mod match_loop;

pub use match_loop::{Broadcaster, Command, Flow, MatchHandle, MatchLoop};
