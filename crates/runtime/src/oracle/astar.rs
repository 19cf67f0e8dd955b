//! A* search over the walkable tiles of a grid.
use nav_core::{Direction, Grid, Move, PathOracle, Position, moves_from_positions};
use pathfinding::prelude::astar;

/// [`PathOracle`] backed by `pathfinding`'s A* over 4-connected walkable
/// tiles with unit step cost and a Manhattan-distance heuristic.
///
/// The search honors the planner's routing rules by construction: only
/// walkable successors are expanded, so a returned route can never step on
/// blocked or water cells.
#[derive(Clone, Copy, Debug, Default)]
pub struct AstarOracle;

impl AstarOracle {
    pub fn new() -> Self {
        Self
    }
}

impl PathOracle for AstarOracle {
    fn find_path(&self, grid: &Grid, start: Position, goal: Position) -> Option<Vec<Move>> {
        if !grid.is_walkable(goal) {
            return None;
        }

        let (path, _cost) = astar(
            &start,
            |&position| successors(grid, position),
            |&position| manhattan(position, goal),
            |&position| position == goal,
        )?;

        Some(moves_from_positions(&path))
    }
}

fn successors(grid: &Grid, from: Position) -> Vec<(Position, u32)> {
    Direction::CARDINALS
        .iter()
        .map(|direction| direction.step(from))
        .filter(|&next| grid.is_walkable(next))
        .map(|next| (next, 1))
        .collect()
}

fn manhattan(from: Position, to: Position) -> u32 {
    from.x.abs_diff(to.x) + from.row.abs_diff(to.row)
}
