//! Route stretching according to per-axis weights.
use crate::action::Move;
use crate::direction::AxisWeights;

/// Appends extra same-direction presses for every axis whose coefficient
/// exceeds 1.0.
///
/// For an axis with coefficient `c` and `n` presses already in the route,
/// `ceil(n * (c - 1))` extra presses are appended at the end, never
/// interleaved, so the original route is walked first and then overshot.
/// Coefficients at or below 1.0 add nothing; the result is never shorter
/// than the input.
pub fn amplify(mut moves: Vec<Move>, weights: &AxisWeights) -> Vec<Move> {
    for press in Move::CARDINALS {
        let coefficient = weights.coefficient(press);
        if coefficient <= 1.0 {
            continue;
        }

        let count = moves.iter().filter(|&&m| m == press).count();
        if count == 0 {
            continue;
        }

        let extra = (count as f32 * (coefficient - 1.0)).ceil() as usize;
        moves.extend(std::iter::repeat(press).take(extra));
    }
    moves
}
