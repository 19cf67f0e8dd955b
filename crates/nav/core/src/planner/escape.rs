//! Dead-end filtering and the fixed escape patterns.
use crate::action::Move;
use crate::config::PlannerConfig;
use crate::direction::Direction;
use crate::grid::{Grid, Position};

/// Tests whether `destination` is a dead end when entered travelling in
/// `approach`.
///
/// The neighbor directly opposite the travel axis is ignored (walking back
/// out the way we came does not count as an exit); of the remaining three
/// neighbors, fewer than `dead_end_min_exits` walkable ones marks a dead
/// end. Turning at the destination is fine, reversing is not. For diagonal
/// approaches the reverse of the vertical component is the ignored
/// neighbor.
pub fn is_dead_end(
    grid: &Grid,
    destination: Position,
    approach: Direction,
    config: &PlannerConfig,
) -> bool {
    let reverse = match approach.vertical_component() {
        Some(vertical) => vertical.opposite(),
        None => approach.opposite(),
    };

    let exits = Direction::CARDINALS
        .iter()
        .filter(|&&neighbor| neighbor != reverse)
        .filter(|&&neighbor| grid.is_walkable(neighbor.step(destination)))
        .count();

    exits < config.dead_end_min_exits
}

/// Produces `len` presses of the escape motif for `direction`.
///
/// Cardinal motifs are the single press repeated; diagonal motifs are a
/// fixed 4-press oscillation that makes net progress on both axes without
/// retracing the full approach. Used whenever search-based routing cannot
/// produce a forward route.
pub fn zigzag(direction: Direction, len: usize) -> Vec<Move> {
    motif(direction).iter().copied().cycle().take(len).collect()
}

fn motif(direction: Direction) -> &'static [Move] {
    match direction {
        Direction::North => &[Move::Up],
        Direction::South => &[Move::Down],
        Direction::East => &[Move::Right],
        Direction::West => &[Move::Left],
        Direction::NorthEast => &[Move::Up, Move::Up, Move::Right, Move::Down],
        Direction::NorthWest => &[Move::Up, Move::Up, Move::Left, Move::Down],
        Direction::SouthEast => &[Move::Down, Move::Down, Move::Right, Move::Up],
        Direction::SouthWest => &[Move::Down, Move::Down, Move::Left, Move::Up],
    }
}
