//! Discrete controller actions emitted by the planner.
use crate::grid::Position;

/// One button press in an action sequence.
///
/// Cardinal presses map 1:1 onto visual directions (Up is north). `Confirm`
/// and `Cancel` display as the controller's `A`/`B` so action chains print
/// exactly as the consuming harness expects them.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
    #[strum(to_string = "A")]
    Confirm,
    #[strum(to_string = "B")]
    Cancel,
}

impl Move {
    pub const CARDINALS: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    pub fn is_cardinal(self) -> bool {
        !matches!(self, Move::Confirm | Move::Cancel)
    }

    /// Column/row delta of one press; `Confirm`/`Cancel` do not move.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Move::Up => (0, -1),
            Move::Down => (0, 1),
            Move::Left => (-1, 0),
            Move::Right => (1, 0),
            Move::Confirm | Move::Cancel => (0, 0),
        }
    }
}

/// Number of cardinal presses in a sequence; this is the count the phase
/// controller tracks.
pub fn cardinal_count(moves: &[Move]) -> usize {
    moves.iter().filter(|m| m.is_cardinal()).count()
}

/// Converts a path of adjacent grid positions into the presses that walk it.
///
/// Pairs that are not cardinal-adjacent are skipped; a path oracle that
/// produces them is violating its contract.
pub fn moves_from_positions(path: &[Position]) -> Vec<Move> {
    path.windows(2)
        .filter_map(|pair| step_between(pair[0], pair[1]))
        .collect()
}

fn step_between(from: Position, to: Position) -> Option<Move> {
    match (to.x - from.x, to.row - from.row) {
        (0, -1) => Some(Move::Up),
        (0, 1) => Some(Move::Down),
        (-1, 0) => Some(Move::Left),
        (1, 0) => Some(Move::Right),
        _ => None,
    }
}
