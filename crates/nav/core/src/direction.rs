//! Travel directions, per-direction weights, and the weighted-token parser.
//!
//! Priority lists are written as comma-separated tokens such as
//! `NORTH,EASTx13,NW`. A token is a direction name (long or short form)
//! optionally followed by `x<weight>`; the weight biases the movement
//! amplifier and defaults to 1.0.
use std::str::FromStr;

use crate::action::Move;
use crate::grid::Position;

/// One of the eight compass directions the planner can be asked to travel.
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
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Direction {
    #[strum(to_string = "NORTH", serialize = "N")]
    North,
    #[strum(to_string = "SOUTH", serialize = "S")]
    South,
    #[strum(to_string = "EAST", serialize = "E")]
    East,
    #[strum(to_string = "WEST", serialize = "W")]
    West,
    #[strum(to_string = "NORTH_EAST", serialize = "NE")]
    NorthEast,
    #[strum(to_string = "NORTH_WEST", serialize = "NW")]
    NorthWest,
    #[strum(to_string = "SOUTH_EAST", serialize = "SE")]
    SouthEast,
    #[strum(to_string = "SOUTH_WEST", serialize = "SW")]
    SouthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    pub const CARDINALS: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn is_diagonal(self) -> bool {
        !matches!(
            self,
            Direction::North | Direction::South | Direction::East | Direction::West
        )
    }

    /// Cardinal components of this direction; one entry for cardinals, two
    /// (vertical first) for diagonals.
    pub fn components(self) -> &'static [Direction] {
        match self {
            Direction::North => &[Direction::North],
            Direction::South => &[Direction::South],
            Direction::East => &[Direction::East],
            Direction::West => &[Direction::West],
            Direction::NorthEast => &[Direction::North, Direction::East],
            Direction::NorthWest => &[Direction::North, Direction::West],
            Direction::SouthEast => &[Direction::South, Direction::East],
            Direction::SouthWest => &[Direction::South, Direction::West],
        }
    }

    /// North/South part of this direction, if any.
    pub fn vertical_component(self) -> Option<Direction> {
        match self {
            Direction::North | Direction::NorthEast | Direction::NorthWest => {
                Some(Direction::North)
            }
            Direction::South | Direction::SouthEast | Direction::SouthWest => {
                Some(Direction::South)
            }
            Direction::East | Direction::West => None,
        }
    }

    /// East/West part of this direction, if any.
    pub fn horizontal_component(self) -> Option<Direction> {
        match self {
            Direction::East | Direction::NorthEast | Direction::SouthEast => Some(Direction::East),
            Direction::West | Direction::NorthWest | Direction::SouthWest => Some(Direction::West),
            Direction::North | Direction::South => None,
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::NorthEast => Direction::SouthWest,
            Direction::NorthWest => Direction::SouthEast,
            Direction::SouthEast => Direction::NorthWest,
            Direction::SouthWest => Direction::NorthEast,
        }
    }

    /// Column/row delta of one step (row 0 is the topmost grid row, so
    /// north decreases the row index).
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::NorthEast => (1, -1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (-1, 1),
        }
    }

    /// Position one step from `from` in this direction.
    pub fn step(self, from: Position) -> Position {
        let (dx, drow) = self.delta();
        from.offset(dx, drow)
    }

    /// Controller press for a cardinal direction; diagonals have no single
    /// press and return `None`.
    pub fn as_move(self) -> Option<Move> {
        match self {
            Direction::North => Some(Move::Up),
            Direction::South => Some(Move::Down),
            Direction::East => Some(Move::Right),
            Direction::West => Some(Move::Left),
            _ => None,
        }
    }
}

/// Failure modes of the weighted-token parser.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DirectionParseError {
    #[error("unknown direction in token `{token}`")]
    UnknownDirection { token: String },

    #[error("invalid weight in token `{token}`")]
    InvalidWeight { token: String },

    #[error("weight must be positive in token `{token}`")]
    NonPositiveWeight { token: String },
}

/// A direction with its amplification weight.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedDirection {
    pub direction: Direction,
    pub weight: f32,
}

impl WeightedDirection {
    pub const DEFAULT_WEIGHT: f32 = 1.0;

    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            weight: Self::DEFAULT_WEIGHT,
        }
    }

    pub fn with_weight(direction: Direction, weight: f32) -> Self {
        Self { direction, weight }
    }
}

impl From<Direction> for WeightedDirection {
    fn from(direction: Direction) -> Self {
        Self::new(direction)
    }
}

impl FromStr for WeightedDirection {
    type Err = DirectionParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        let (name, weight) = match token.split_once(['x', 'X']) {
            Some((name, raw)) => {
                let weight: f32 =
                    raw.trim()
                        .parse()
                        .map_err(|_| DirectionParseError::InvalidWeight {
                            token: token.to_string(),
                        })?;
                if !weight.is_finite() || weight <= 0.0 {
                    return Err(DirectionParseError::NonPositiveWeight {
                        token: token.to_string(),
                    });
                }
                (name, weight)
            }
            None => (token, Self::DEFAULT_WEIGHT),
        };

        let direction =
            name.trim()
                .parse()
                .map_err(|_| DirectionParseError::UnknownDirection {
                    token: name.trim().to_string(),
                })?;
        Ok(Self { direction, weight })
    }
}

/// Parses a comma-separated priority list such as `NORTH,EASTx13,NW`.
pub fn parse_priority_list(list: &str) -> Result<Vec<WeightedDirection>, DirectionParseError> {
    list.split(',')
        .filter(|token| !token.trim().is_empty())
        .map(str::parse)
        .collect()
}

/// Per-axis amplification coefficients derived from a weighted direction.
///
/// A cardinal token weights its own axis; a diagonal token weights both of
/// its component axes. Axes not mentioned stay at 1.0 (neutral).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisWeights {
    pub north: f32,
    pub south: f32,
    pub east: f32,
    pub west: f32,
}

impl AxisWeights {
    pub const NEUTRAL: Self = Self {
        north: 1.0,
        south: 1.0,
        east: 1.0,
        west: 1.0,
    };

    /// Coefficient applied to a cardinal press; button presses are 1.0.
    pub fn coefficient(&self, m: Move) -> f32 {
        match m {
            Move::Up => self.north,
            Move::Down => self.south,
            Move::Right => self.east,
            Move::Left => self.west,
            Move::Confirm | Move::Cancel => 1.0,
        }
    }

    fn set(&mut self, axis: Direction, weight: f32) {
        match axis {
            Direction::North => self.north = weight,
            Direction::South => self.south = weight,
            Direction::East => self.east = weight,
            Direction::West => self.west = weight,
            // Diagonals never appear in components().
            _ => {}
        }
    }
}

impl Default for AxisWeights {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl From<WeightedDirection> for AxisWeights {
    fn from(entry: WeightedDirection) -> Self {
        let mut weights = Self::NEUTRAL;
        for &axis in entry.direction.components() {
            weights.set(axis, entry.weight);
        }
        weights
    }
}
