/// Planner tuning parameters.
///
/// Defaults reproduce the behavior of the navigation harness this planner
/// was extracted from; everything a caller might reasonably want to tune is
/// a field rather than a constant.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerConfig {
    /// Minimum progress, in tiles, a goal candidate must make along the
    /// requested axis before it is considered.
    pub min_progress: i32,
    /// Upper bound on scored candidates probed against the path oracle per
    /// goal-selection attempt.
    pub max_candidates: usize,
    /// Consecutive unchanged-position observations before recovery kicks
    /// in. The extracted harness used 1 (recover on the first repeat).
    pub stuck_repeat_threshold: u32,
    /// Immediate neighbors that must be unwalkable for the boxed-in check.
    pub blocked_neighbor_threshold: usize,
    /// Length of the escape pattern emitted by stuck recovery.
    pub recovery_pattern_len: usize,
    /// Length of the escape pattern used when every priority entry fails.
    pub fallback_pattern_len: usize,
    /// Cancel presses emitted ahead of a recovery pattern to back out of
    /// any menu or dialogue capturing input.
    pub cancel_prefix_len: usize,
    /// Walkable non-reverse neighbors a destination needs to avoid being
    /// classified a dead end.
    pub dead_end_min_exits: usize,
}

impl PlannerConfig {
    // ===== compile-time constants used as type parameters =====
    /// Capacity of the rolling window of recently issued presses.
    pub const MAX_RECENT_MOVES: usize = 32;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MIN_PROGRESS: i32 = 2;
    pub const DEFAULT_MAX_CANDIDATES: usize = 20;
    pub const DEFAULT_STUCK_REPEAT_THRESHOLD: u32 = 1;
    pub const DEFAULT_BLOCKED_NEIGHBOR_THRESHOLD: usize = 3;
    pub const DEFAULT_RECOVERY_PATTERN_LEN: usize = 16;
    pub const DEFAULT_FALLBACK_PATTERN_LEN: usize = 8;
    pub const DEFAULT_CANCEL_PREFIX_LEN: usize = 2;
    pub const DEFAULT_DEAD_END_MIN_EXITS: usize = 2;

    pub fn new() -> Self {
        Self {
            min_progress: Self::DEFAULT_MIN_PROGRESS,
            max_candidates: Self::DEFAULT_MAX_CANDIDATES,
            stuck_repeat_threshold: Self::DEFAULT_STUCK_REPEAT_THRESHOLD,
            blocked_neighbor_threshold: Self::DEFAULT_BLOCKED_NEIGHBOR_THRESHOLD,
            recovery_pattern_len: Self::DEFAULT_RECOVERY_PATTERN_LEN,
            fallback_pattern_len: Self::DEFAULT_FALLBACK_PATTERN_LEN,
            cancel_prefix_len: Self::DEFAULT_CANCEL_PREFIX_LEN,
            dead_end_min_exits: Self::DEFAULT_DEAD_END_MIN_EXITS,
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::new()
    }
}
