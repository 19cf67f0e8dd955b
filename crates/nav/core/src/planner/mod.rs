//! The planning pipeline.
//!
//! One planning call flows: phase controller supplies the active priority
//! list → stuck detector (short-circuits to recovery) → priority resolver
//! (goal selection + path oracle + dead-end filter) → movement amplifier →
//! action sequence. The issued move count feeds back into phase and stuck
//! state. All session state lives in a caller-owned [`PlannerState`]; the
//! planner itself is stateless and reusable.
mod amplify;
mod escape;
mod goal;
mod phase;
mod resolver;
mod stuck;

pub use amplify::amplify;
pub use escape::{is_dead_end, zigzag};
pub use goal::select_goal;
pub use phase::PhaseConfig;
pub use resolver::{Resolution, resolve};
pub use stuck::Fingerprint;

use arrayvec::ArrayVec;

use crate::action::{Move, cardinal_count};
use crate::config::PlannerConfig;
use crate::env::PathOracle;
use crate::error::PlanError;
use crate::grid::Grid;

/// Mutable per-session planning state, owned by the caller.
///
/// One value per independently navigating agent; sharing a state between
/// agents corrupts both the stuck detector and the phase controller. Reset
/// it whenever the navigation context changes (location switch, scenario
/// restart).
#[derive(Clone, Debug, Default)]
pub struct PlannerState {
    pub(crate) last_fingerprint: Option<Fingerprint>,
    pub(crate) repeat_count: u32,
    pub(crate) phase_index: usize,
    pub(crate) moves_in_phase: u32,
    recent_moves: ArrayVec<Move, { PlannerConfig::MAX_RECENT_MOVES }>,
}

impl PlannerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears phase and stuck state. Call on context change.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn phase_index(&self) -> usize {
        self.phase_index
    }

    pub fn moves_in_phase(&self) -> u32 {
        self.moves_in_phase
    }

    pub fn repeat_count(&self) -> u32 {
        self.repeat_count
    }

    /// Most recently issued presses, oldest first, bounded by
    /// [`PlannerConfig::MAX_RECENT_MOVES`].
    pub fn recent_moves(&self) -> &[Move] {
        &self.recent_moves
    }

    fn record_moves(&mut self, moves: &[Move]) {
        for &press in moves {
            if self.recent_moves.is_full() {
                self.recent_moves.remove(0);
            }
            self.recent_moves.push(press);
        }
    }
}

/// Stateless planning façade binding the pipeline together.
#[derive(Clone, Debug, Default)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Produces the next action sequence for the agent.
    ///
    /// Never fails: degenerate inputs (no grid, no player, no phases)
    /// degrade to an empty sequence, and a fully blocked map degrades to a
    /// fixed escape pattern. Any non-empty result ends with a confirm
    /// press. Advances phase and stuck state as a side effect.
    pub fn plan(
        &self,
        state: &mut PlannerState,
        grid: &Grid,
        phases: &[PhaseConfig],
        oracle: &dyn PathOracle,
    ) -> Vec<Move> {
        match self.try_plan(state, grid, phases, oracle) {
            Ok(moves) => moves,
            Err(err) => {
                tracing::warn!(%err, "planning degraded to an empty sequence");
                Vec::new()
            }
        }
    }

    fn try_plan(
        &self,
        state: &mut PlannerState,
        grid: &Grid,
        phases: &[PhaseConfig],
        oracle: &dyn PathOracle,
    ) -> Result<Vec<Move>, PlanError> {
        if grid.is_empty() {
            return Err(PlanError::EmptyGrid);
        }
        let player = grid.player().ok_or(PlanError::PlayerNotFound)?;
        if phases.is_empty() {
            return Err(PlanError::EmptyPhasePlan);
        }

        phase::advance(state, phases);
        let active = &phases[state.phase_index];
        let primary = active
            .priority
            .first()
            .ok_or(PlanError::EmptyPriorityList)?
            .direction;

        let fingerprint = Fingerprint::new(grid.location_id(), player);
        let blocked = stuck::blocked_neighbor_count(grid, player);

        let moves = if stuck::observe(state, fingerprint, blocked, &self.config) {
            tracing::debug!(%primary, blocked, "no progress observed, emitting recovery pattern");
            stuck::recovery_sequence(primary, &self.config)
        } else if let Some(resolution) =
            resolver::resolve(grid, player, &active.priority, oracle, &self.config)
        {
            tracing::debug!(
                direction = %resolution.direction,
                goal = %resolution.goal,
                steps = resolution.moves.len(),
                "resolved route"
            );
            resolution.moves
        } else {
            tracing::debug!(%primary, "every priority entry blocked, using fallback pattern");
            let mut moves = escape::zigzag(primary, self.config.fallback_pattern_len);
            moves.push(Move::Confirm);
            moves
        };

        state.moves_in_phase += cardinal_count(&moves) as u32;
        state.record_moves(&moves);
        Ok(moves)
    }
}
