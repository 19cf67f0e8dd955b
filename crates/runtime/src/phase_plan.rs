//! Declarative multi-leg journey descriptions.
//!
//! A phase plan is a JSON document listing each leg's direction priorities
//! (weighted tokens such as `"NORTH"` or `"EASTx13"`) and the move budget
//! after which the next leg takes over:
//!
//! ```json
//! {
//!   "phases": [
//!     { "priority": ["EAST", "NORTH", "WEST"], "move_threshold": 40 },
//!     { "priority": ["NORTHx2"], "move_threshold": 60 }
//!   ]
//! }
//! ```
use std::path::Path;

use nav_core::{PhaseConfig, WeightedDirection};
use serde::Deserialize;

use crate::error::PhasePlanError;

#[derive(Debug, Deserialize)]
struct PhasePlanFile {
    phases: Vec<PhaseEntry>,
}

#[derive(Debug, Deserialize)]
struct PhaseEntry {
    priority: Vec<String>,
    move_threshold: u32,
}

/// Parses a phase plan from its JSON text.
pub fn parse_phase_plan(json: &str) -> Result<Vec<PhaseConfig>, PhasePlanError> {
    let file: PhasePlanFile = serde_json::from_str(json)?;
    if file.phases.is_empty() {
        return Err(PhasePlanError::Empty);
    }

    file.phases
        .into_iter()
        .map(|entry| {
            let priority = entry
                .priority
                .iter()
                .map(|token| token.parse::<WeightedDirection>())
                .collect::<Result<Vec<_>, _>>()?;
            Ok(PhaseConfig::new(priority, entry.move_threshold))
        })
        .collect()
}

/// Reads and parses a phase plan file.
pub fn load_phase_plan(path: &Path) -> Result<Vec<PhaseConfig>, PhasePlanError> {
    parse_phase_plan(&std::fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nav_core::Direction;

    #[test]
    fn well_formed_plan_parses() {
        let phases = parse_phase_plan(
            r#"{
                "phases": [
                    { "priority": ["EAST", "NORTH", "WEST"], "move_threshold": 40 },
                    { "priority": ["NORTHx2", "EASTx13"], "move_threshold": 60 }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(phases.len(), 2);
        assert_eq!(phases[0].priority[0].direction, Direction::East);
        assert_eq!(phases[0].move_threshold, 40);
        assert_eq!(phases[1].priority[1].direction, Direction::East);
        assert_eq!(phases[1].priority[1].weight, 13.0);
    }

    #[test]
    fn empty_plan_is_rejected() {
        assert!(matches!(
            parse_phase_plan(r#"{ "phases": [] }"#),
            Err(PhasePlanError::Empty)
        ));
    }

    #[test]
    fn bad_tokens_are_rejected() {
        assert!(matches!(
            parse_phase_plan(
                r#"{ "phases": [ { "priority": ["SIDEWAYS"], "move_threshold": 1 } ] }"#
            ),
            Err(PhasePlanError::Direction(_))
        ));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(
            parse_phase_plan("not json"),
            Err(PhasePlanError::Parse(_))
        ));
    }
}
