//! Collaborator seams consumed by the planner.
//!
//! The planner never searches the grid itself; shortest-path queries go
//! through [`PathOracle`] so hosts can supply their own search (the runtime
//! crate ships an A* implementation).
use crate::action::Move;
use crate::grid::{Grid, Position};

/// Shortest-path search between two grid cells.
///
/// Contract: the returned presses walk `start` to `goal` stepping only on
/// walkable tiles; `None` means no route exists. An unreachable goal is an
/// expected outcome, not an error, and implementations must not panic on
/// out-of-bounds input.
pub trait PathOracle: Send + Sync {
    fn find_path(&self, grid: &Grid, start: Position, goal: Position) -> Option<Vec<Move>>;
}
