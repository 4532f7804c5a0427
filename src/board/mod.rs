//! Board model: grid geometry, wall-slot addressing, edge-blocking queries.

pub mod grid;
pub mod wall;

pub use grid::{Board, EdgeIndex};
pub use wall::{Edge, Orientation, Wall};
