//! First-success iteration over a phase's priority list.
use crate::action::Move;
use crate::config::PlannerConfig;
use crate::direction::{AxisWeights, Direction, WeightedDirection};
use crate::env::PathOracle;
use crate::grid::{Grid, Position};

use super::{amplify, goal};

/// A successfully resolved priority entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    /// The priority entry that produced the route.
    pub direction: Direction,
    /// Destination the route walks to.
    pub goal: Position,
    /// Amplified presses ending in the terminal confirm.
    pub moves: Vec<Move>,
}

/// Tries priority entries in order and returns the first that yields a
/// goal, amplified by the entry's weight and terminated with a confirm
/// press. First-success, not globally optimal: a usable route in the most
/// preferred direction always wins over a better route further down the
/// list. `None` means every entry was blocked; the planner then falls back
/// to a fixed escape pattern.
pub fn resolve(
    grid: &Grid,
    player: Position,
    priority: &[WeightedDirection],
    oracle: &dyn PathOracle,
    config: &PlannerConfig,
) -> Option<Resolution> {
    for entry in priority {
        tracing::debug!(direction = %entry.direction, weight = entry.weight, "trying priority entry");

        let Some((goal, route)) = goal::select_goal(grid, player, entry.direction, oracle, config)
        else {
            continue;
        };

        let weights = AxisWeights::from(*entry);
        let mut moves = amplify::amplify(route, &weights);
        moves.push(Move::Confirm);

        return Some(Resolution {
            direction: entry.direction,
            goal,
            moves,
        });
    }

    None
}
