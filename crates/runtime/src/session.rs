//! Caller-facing planning session.
use nav_core::{Grid, Move, PhaseConfig, Planner, PlannerConfig, PlannerState};

use crate::oracle::AstarOracle;

/// Owns one agent's planning state across calls.
///
/// One session per independently navigating agent; sharing a session
/// between agents corrupts the stuck detector and the phase controller.
/// Calls are synchronous and must not overlap for the same session.
pub struct NavSession {
    planner: Planner,
    state: PlannerState,
    phases: Vec<PhaseConfig>,
    oracle: AstarOracle,
}

impl NavSession {
    pub fn new(phases: Vec<PhaseConfig>) -> Self {
        Self::with_config(phases, PlannerConfig::default())
    }

    pub fn with_config(phases: Vec<PhaseConfig>, config: PlannerConfig) -> Self {
        Self {
            planner: Planner::with_config(config),
            state: PlannerState::new(),
            phases,
            oracle: AstarOracle::new(),
        }
    }

    /// Produces the next action sequence for the current grid snapshot.
    ///
    /// Degrades rather than fails: an unusable grid yields an empty
    /// sequence, a blocked map yields an escape pattern. Advances phase and
    /// stuck state as a side effect.
    pub fn plan(&mut self, grid: &Grid) -> Vec<Move> {
        let moves = self
            .planner
            .plan(&mut self.state, grid, &self.phases, &self.oracle);
        tracing::debug!(
            phase = self.state.phase_index(),
            presses = moves.len(),
            "planned action sequence"
        );
        moves
    }

    /// Clears phase and stuck state. Call when the navigation scenario
    /// changes (location switch, new objective).
    pub fn reset_planning_context(&mut self) {
        self.state.reset();
        tracing::debug!("planning context reset");
    }

    pub fn state(&self) -> &PlannerState {
        &self.state
    }

    pub fn phases(&self) -> &[PhaseConfig] {
        &self.phases
    }
}
