//! Tile grid model shared by the planner and its collaborators.
//!
//! A [`Grid`] is a rectangular, read-only snapshot of the map for one
//! planning call: ordered rows of [`Tile`] values with row 0 topmost. The
//! "visual" Y axis grows northward, so `visual_y = height - 1 - row`.
use std::fmt;

/// Classification of one map cell.
///
/// Only [`Tile::Walkable`] is a valid path node; everything else blocks
/// routing, even when the cell is enterable in the source game (doors and
/// stairs trigger transitions the planner must not walk through blindly).
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Tile {
    Walkable,
    Blocked,
    Water,
    Door,
    Stairs,
    PlayerMarker,
    #[default]
    Unknown,
}

impl Tile {
    /// Decodes the single-character map symbols used by the raw map feed.
    ///
    /// `~` is tall grass in the source maps and walks like a floor tile.
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            '.' | '~' => Tile::Walkable,
            '#' => Tile::Blocked,
            'W' => Tile::Water,
            'D' => Tile::Door,
            'S' => Tile::Stairs,
            'P' => Tile::PlayerMarker,
            _ => Tile::Unknown,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Tile::Walkable => '.',
            Tile::Blocked => '#',
            Tile::Water => 'W',
            Tile::Door => 'D',
            Tile::Stairs => 'S',
            Tile::PlayerMarker => 'P',
            Tile::Unknown => '?',
        }
    }

    pub fn is_walkable(self) -> bool {
        matches!(self, Tile::Walkable)
    }
}

/// Discrete grid position: column plus row index (row 0 is topmost).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub row: i32,
}

impl Position {
    pub const fn new(x: i32, row: i32) -> Self {
        Self { x, row }
    }

    /// Returns the position shifted by the given column/row deltas.
    pub const fn offset(self, dx: i32, drow: i32) -> Self {
        Self {
            x: self.x + dx,
            row: self.row + drow,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.row)
    }
}

/// Rectangular tile snapshot for one planning call.
///
/// Built once by a collaborator (see the runtime grid builder) and consumed
/// read-only; the planner never mutates a grid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: Vec<Vec<Tile>>,
    width: usize,
    location_id: String,
}

impl Grid {
    /// Creates a grid from row-major tiles. Short rows are padded with
    /// [`Tile::Unknown`] so the grid is always rectangular.
    pub fn new(mut rows: Vec<Vec<Tile>>, location_id: impl Into<String>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, Tile::Unknown);
        }
        Self {
            rows,
            width,
            location_id: location_id.into(),
        }
    }

    /// Parses an ASCII map, one row per line, using the [`Tile::from_symbol`]
    /// vocabulary. Blank lines are skipped.
    pub fn from_ascii(art: &str, location_id: impl Into<String>) -> Self {
        let rows = art
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().map(Tile::from_symbol).collect())
            .collect();
        Self::new(rows, location_id)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.width == 0
    }

    /// Identifier of the location this snapshot was observed in; part of the
    /// stuck detector's fingerprint.
    pub fn location_id(&self) -> &str {
        &self.location_id
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.row >= 0
            && (position.x as usize) < self.width
            && (position.row as usize) < self.rows.len()
    }

    pub fn tile(&self, position: Position) -> Option<Tile> {
        if !self.contains(position) {
            return None;
        }
        Some(self.rows[position.row as usize][position.x as usize])
    }

    /// True when the cell exists and is a legal path node. Out-of-bounds
    /// cells are not walkable.
    pub fn is_walkable(&self, position: Position) -> bool {
        self.tile(position).is_some_and(Tile::is_walkable)
    }

    /// Visual Y coordinate of a position (grows northward).
    pub fn visual_y(&self, position: Position) -> i32 {
        self.height() as i32 - 1 - position.row
    }

    /// Locates the player marker. Exactly one is expected; the first match
    /// in row-major order wins if a malformed feed placed several.
    pub fn player(&self) -> Option<Position> {
        self.rows.iter().enumerate().find_map(|(row, tiles)| {
            tiles
                .iter()
                .position(|&tile| tile == Tile::PlayerMarker)
                .map(|x| Position::new(x as i32, row as i32))
        })
    }

    /// Iterates every walkable position in row-major order.
    pub fn walkable_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, tiles)| {
            tiles
                .iter()
                .enumerate()
                .filter(|(_, tile)| tile.is_walkable())
                .map(move |(x, _)| Position::new(x as i32, row as i32))
        })
    }

    /// Returns a copy of this grid with the player marker moved to `to`.
    ///
    /// The old marker cell becomes walkable. Fails when `to` is not a
    /// walkable cell of this grid.
    pub fn with_player_at(&self, to: Position) -> Option<Grid> {
        if !self.is_walkable(to) {
            return None;
        }
        let mut moved = self.clone();
        if let Some(old) = self.player() {
            moved.rows[old.row as usize][old.x as usize] = Tile::Walkable;
        }
        moved.rows[to.row as usize][to.x as usize] = Tile::PlayerMarker;
        Some(moved)
    }
}
