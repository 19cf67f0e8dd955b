//! Goal selection: scoring candidate destinations for a direction.
use crate::action::Move;
use crate::config::PlannerConfig;
use crate::direction::Direction;
use crate::env::PathOracle;
use crate::grid::{Grid, Position};

use super::escape;

/// A scored goal candidate.
///
/// Ordering is an explicit lexicographic comparison: `primary` progress
/// first, then `secondary`, then position for a deterministic total order.
/// For cardinal requests `secondary` is the negated lateral deviation, so
/// "furthest along the axis, then closest to the player's row/column" falls
/// out of one comparator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Candidate {
    position: Position,
    primary: i32,
    secondary: i32,
}

/// Picks a reachable, non-dead-end destination that makes the most progress
/// in `direction`, along with the route to it.
///
/// Walks every walkable tile at least `min_progress` units beyond the
/// player along the implied axis (diagonals accept progress on either
/// component axis), scores them, and probes the best `max_candidates`
/// against the path oracle. `None` is an expected outcome meaning the
/// direction is blocked, not a failure.
pub fn select_goal(
    grid: &Grid,
    player: Position,
    direction: Direction,
    oracle: &dyn PathOracle,
    config: &PlannerConfig,
) -> Option<(Position, Vec<Move>)> {
    let mut candidates = collect_candidates(grid, player, direction, config);
    candidates.sort_by(|a, b| {
        b.primary
            .cmp(&a.primary)
            .then(b.secondary.cmp(&a.secondary))
            .then(a.position.cmp(&b.position))
    });

    tracing::debug!(
        %direction,
        total = candidates.len(),
        "scored goal candidates"
    );

    for candidate in candidates.iter().take(config.max_candidates) {
        if escape::is_dead_end(grid, candidate.position, direction, config) {
            tracing::debug!(position = %candidate.position, "skipping dead-end candidate");
            continue;
        }
        let Some(route) = oracle.find_path(grid, player, candidate.position) else {
            continue;
        };
        if route.is_empty() {
            continue;
        }
        tracing::debug!(
            goal = %candidate.position,
            steps = route.len(),
            "selected goal"
        );
        return Some((candidate.position, route));
    }

    None
}

fn collect_candidates(
    grid: &Grid,
    player: Position,
    direction: Direction,
    config: &PlannerConfig,
) -> Vec<Candidate> {
    grid.walkable_positions()
        .filter_map(|position| score(player, position, direction, config.min_progress))
        .collect()
}

/// Scores one walkable tile, or `None` when it is not far enough along the
/// requested axis/axes.
fn score(
    player: Position,
    position: Position,
    direction: Direction,
    min_progress: i32,
) -> Option<Candidate> {
    if direction.is_diagonal() {
        let vertical = direction.vertical_component().expect("diagonal has both axes");
        let horizontal = direction
            .horizontal_component()
            .expect("diagonal has both axes");
        let primary = progress_along(vertical, player, position);
        let secondary = progress_along(horizontal, player, position);
        // Either axis clearing the bar qualifies the tile.
        if primary < min_progress && secondary < min_progress {
            return None;
        }
        Some(Candidate {
            position,
            primary,
            secondary,
        })
    } else {
        let progress = progress_along(direction, player, position);
        if progress < min_progress {
            return None;
        }
        Some(Candidate {
            position,
            primary: progress,
            secondary: -lateral_deviation(direction, player, position),
        })
    }
}

/// Signed distance from `from` to `to` along a cardinal direction.
fn progress_along(direction: Direction, from: Position, to: Position) -> i32 {
    let (dx, drow) = direction.delta();
    (to.x - from.x) * dx + (to.row - from.row) * drow
}

/// Distance off the player's own row or column, perpendicular to a cardinal
/// travel direction.
fn lateral_deviation(direction: Direction, from: Position, to: Position) -> i32 {
    match direction {
        Direction::North | Direction::South => (to.x - from.x).abs(),
        Direction::East | Direction::West => (to.row - from.row).abs(),
        _ => 0,
    }
}
