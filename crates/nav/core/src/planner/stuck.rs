//! No-progress detection and the recovery escape sequence.
use crate::action::Move;
use crate::config::PlannerConfig;
use crate::direction::Direction;
use crate::grid::{Grid, Position};

use super::{PlannerState, escape};

/// Compact identity of the player's observed situation, compared across
/// calls to detect a lack of progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fingerprint {
    location_id: String,
    x: i32,
    row: i32,
}

impl Fingerprint {
    pub fn new(location_id: &str, position: Position) -> Self {
        Self {
            location_id: location_id.to_string(),
            x: position.x,
            row: position.row,
        }
    }
}

/// Number of the four immediate neighbors that cannot be walked onto.
pub(crate) fn blocked_neighbor_count(grid: &Grid, position: Position) -> usize {
    Direction::CARDINALS
        .iter()
        .filter(|&&direction| !grid.is_walkable(direction.step(position)))
        .count()
}

/// Folds this call's observation into the detector state and reports
/// whether recovery should take over.
///
/// An unchanged fingerprint bumps the repeat counter; any change resets it
/// and stores the new fingerprint. Stuck fires once the counter reaches the
/// configured threshold, or when the player is boxed in on at least
/// `blocked_neighbor_threshold` sides. The boxed-in check stays quiet until
/// a previous observation exists in this context, so the first call of a
/// fresh session still reaches the resolver and its ordinary fallback.
/// Firing resets the counter.
pub(crate) fn observe(
    state: &mut PlannerState,
    fingerprint: Fingerprint,
    blocked_neighbors: usize,
    config: &PlannerConfig,
) -> bool {
    let had_previous = state.last_fingerprint.is_some();
    let repeated = state.last_fingerprint.as_ref() == Some(&fingerprint);

    if repeated {
        state.repeat_count += 1;
    } else {
        state.repeat_count = 0;
        state.last_fingerprint = Some(fingerprint);
    }

    let no_progress = repeated && state.repeat_count >= config.stuck_repeat_threshold;
    let boxed_in = had_previous && blocked_neighbors >= config.blocked_neighbor_threshold;

    if no_progress || boxed_in {
        state.repeat_count = 0;
        return true;
    }
    false
}

/// The guaranteed-progress sequence substituted for a planned route when
/// stuck: a short cancel prefix to back out of any input capture, a long
/// zig-zag in the phase's primary direction, and the terminal confirm.
pub(crate) fn recovery_sequence(primary: Direction, config: &PlannerConfig) -> Vec<Move> {
    let mut moves = Vec::with_capacity(config.cancel_prefix_len + config.recovery_pattern_len + 1);
    moves.extend(std::iter::repeat(Move::Cancel).take(config.cancel_prefix_len));
    moves.extend(escape::zigzag(primary, config.recovery_pattern_len));
    moves.push(Move::Confirm);
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fp(x: i32, row: i32) -> Fingerprint {
        Fingerprint::new("route_104", Position::new(x, row))
    }

    #[test]
    fn second_identical_observation_fires() {
        let config = PlannerConfig::default();
        let mut state = PlannerState::new();

        assert!(!observe(&mut state, fp(3, 4), 0, &config));
        assert!(observe(&mut state, fp(3, 4), 0, &config));
    }

    #[test]
    fn position_change_resets_the_counter() {
        let config = PlannerConfig::default();
        let mut state = PlannerState::new();

        observe(&mut state, fp(3, 4), 0, &config);
        observe(&mut state, fp(3, 4), 0, &config);
        assert!(!observe(&mut state, fp(4, 4), 0, &config));
        assert_eq!(state.repeat_count, 0);
    }

    #[test]
    fn location_switch_is_progress() {
        let config = PlannerConfig::default();
        let mut state = PlannerState::new();

        observe(&mut state, fp(3, 4), 0, &config);
        let elsewhere = Fingerprint::new("petalburg_woods", Position::new(3, 4));
        assert!(!observe(&mut state, elsewhere, 0, &config));
    }

    #[test]
    fn boxed_in_fires_after_first_observation() {
        let config = PlannerConfig::default();
        let mut state = PlannerState::new();

        // First call of a fresh session: boxed-in alone stays quiet.
        assert!(!observe(&mut state, fp(3, 4), 4, &config));
        // Position changed, so no repeat, but the box-in check now applies.
        assert!(observe(&mut state, fp(4, 4), 3, &config));
    }

    #[test]
    fn blocked_neighbors_counted_against_the_grid() {
        let grid = Grid::from_ascii(
            ".#.\n\
             #P#\n\
             .#.",
            "boxed",
        );
        let player = grid.player().unwrap();
        assert_eq!(blocked_neighbor_count(&grid, player), 4);

        let open = Grid::from_ascii(
            "...\n\
             .P.\n\
             ...",
            "open",
        );
        let player = open.player().unwrap();
        assert_eq!(blocked_neighbor_count(&open, player), 0);
    }

    #[test]
    fn recovery_sequence_shape() {
        let config = PlannerConfig::default();
        let moves = recovery_sequence(Direction::East, &config);
        assert_eq!(
            moves.len(),
            config.cancel_prefix_len + config.recovery_pattern_len + 1
        );
        assert_eq!(moves[0], Move::Cancel);
        assert_eq!(moves[1], Move::Cancel);
        assert!(moves[2..18].iter().all(|&m| m == Move::Right));
        assert_eq!(*moves.last().unwrap(), Move::Confirm);
    }
}
