//! Phase progression across a multi-leg journey.
use crate::direction::WeightedDirection;

use super::PlannerState;

/// One leg of a journey: the direction priorities to follow and how many
/// tracked moves they govern before the next leg takes over.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhaseConfig {
    pub priority: Vec<WeightedDirection>,
    pub move_threshold: u32,
}

impl PhaseConfig {
    pub fn new(priority: Vec<WeightedDirection>, move_threshold: u32) -> Self {
        Self {
            priority,
            move_threshold,
        }
    }
}

/// Advances the phase index while the current phase's move budget is spent,
/// clamped to the last phase (which sticks forever). A bounded loop rather
/// than re-entrant planning: several starved phases can be skipped in one
/// call, but never more than the plan's length.
pub(crate) fn advance(state: &mut PlannerState, phases: &[PhaseConfig]) {
    if phases.is_empty() {
        return;
    }
    if state.phase_index >= phases.len() {
        state.phase_index = phases.len() - 1;
    }

    while state.phase_index + 1 < phases.len()
        && state.moves_in_phase >= phases[state.phase_index].move_threshold
    {
        state.phase_index += 1;
        state.moves_in_phase = 0;
        tracing::debug!(phase = state.phase_index, "move threshold reached, advancing phase");
    }
}
