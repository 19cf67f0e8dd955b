//! Host-side collaborators for the navigation planner.
//!
//! `nav-runtime` supplies the pieces `nav-core` consumes through its seams:
//! a grid builder turning raw tile observations into a [`nav_core::Grid`],
//! an A* [`nav_core::PathOracle`] implementation, a JSON phase-plan loader,
//! and the caller-facing [`NavSession`] that owns planner state across
//! calls.
pub mod error;
pub mod grid_builder;
pub mod oracle;
pub mod phase_plan;
pub mod session;

pub use error::{GridBuildError, PhasePlanError};
pub use grid_builder::{NpcSpec, RawTile, build_grid};
pub use oracle::AstarOracle;
pub use phase_plan::{load_phase_plan, parse_phase_plan};
pub use session::NavSession;
