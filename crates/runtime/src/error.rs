//! Runtime error types.

/// Failures while assembling a grid from raw observations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridBuildError {
    #[error("no tiles supplied")]
    NoTiles,

    #[error("player coordinates ({x}, {y}) fall outside the observed tiles")]
    PlayerOutOfBounds { x: i32, y: i32 },
}

/// Failures while loading a phase-plan file.
#[derive(Debug, thiserror::Error)]
pub enum PhasePlanError {
    #[error("failed to read phase plan: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse phase plan: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Direction(#[from] nav_core::DirectionParseError),

    #[error("phase plan has no phases")]
    Empty,
}
