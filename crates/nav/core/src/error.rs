//! Planner error taxonomy.
//!
//! Every variant is recoverable: [`Planner::plan`](crate::Planner::plan)
//! degrades to an empty action sequence instead of surfacing these to the
//! caller. A blocked direction or a failed path search is not an error at
//! all; the resolver simply advances to the next candidate.

/// Degenerate inputs that make a planning call produce no actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("grid has no tiles")]
    EmptyGrid,

    #[error("no player marker on the grid")]
    PlayerNotFound,

    #[error("phase plan has no phases")]
    EmptyPhasePlan,

    #[error("active phase has an empty priority list")]
    EmptyPriorityList,
}
