//! Builds planner grids from raw map observations.
//!
//! Raw tiles arrive in game coordinates (y grows northward). The builder
//! lays them out row-major with the northernmost observed row first, marks
//! NPC cells as blocked for routing, and places exactly one player marker.
use nav_core::{Grid, Tile};

use crate::error::GridBuildError;

/// One observed map cell in game coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawTile {
    pub x: i32,
    pub y: i32,
    pub symbol: char,
}

impl RawTile {
    pub fn new(x: i32, y: i32, symbol: char) -> Self {
        Self { x, y, symbol }
    }
}

/// An NPC occupying (and blocking) its cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NpcSpec {
    pub x: i32,
    pub y: i32,
}

impl NpcSpec {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Assembles a [`Grid`] covering the bounding box of the observed tiles.
///
/// Cells never observed stay [`Tile::Unknown`] (unwalkable). NPCs outside
/// the box are dropped; a player outside the box is an error because every
/// downstream component keys off the marker.
pub fn build_grid(
    tiles: &[RawTile],
    npcs: &[NpcSpec],
    player: (i32, i32),
    location_id: &str,
) -> Result<Grid, GridBuildError> {
    if tiles.is_empty() {
        return Err(GridBuildError::NoTiles);
    }

    let min_x = tiles.iter().map(|t| t.x).min().expect("tiles not empty");
    let max_x = tiles.iter().map(|t| t.x).max().expect("tiles not empty");
    let min_y = tiles.iter().map(|t| t.y).min().expect("tiles not empty");
    let max_y = tiles.iter().map(|t| t.y).max().expect("tiles not empty");

    let width = (max_x - min_x + 1) as usize;
    let height = (max_y - min_y + 1) as usize;

    let (player_x, player_y) = player;
    if player_x < min_x || player_x > max_x || player_y < min_y || player_y > max_y {
        return Err(GridBuildError::PlayerOutOfBounds {
            x: player_x,
            y: player_y,
        });
    }

    // Game y grows northward; row 0 is the northernmost observed row.
    let row_of = |y: i32| (max_y - y) as usize;
    let col_of = |x: i32| (x - min_x) as usize;

    let mut rows = vec![vec![Tile::Unknown; width]; height];
    for tile in tiles {
        rows[row_of(tile.y)][col_of(tile.x)] = Tile::from_symbol(tile.symbol);
    }

    for npc in npcs {
        if npc.x < min_x || npc.x > max_x || npc.y < min_y || npc.y > max_y {
            tracing::debug!(x = npc.x, y = npc.y, "dropping NPC outside the observed box");
            continue;
        }
        rows[row_of(npc.y)][col_of(npc.x)] = Tile::Blocked;
    }

    rows[row_of(player_y)][col_of(player_x)] = Tile::PlayerMarker;

    Ok(Grid::new(rows, location_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nav_core::Position;

    fn floor(x: i32, y: i32) -> RawTile {
        RawTile::new(x, y, '.')
    }

    #[test]
    fn player_lands_on_the_expected_row() {
        // 3x3 box, player in the middle; y=2 is the northern row.
        let tiles: Vec<RawTile> = (0..3)
            .flat_map(|x| (0..3).map(move |y| floor(x, y)))
            .collect();
        let grid = build_grid(&tiles, &[], (1, 1), "littleroot").unwrap();

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.player(), Some(Position::new(1, 1)));
        assert_eq!(grid.location_id(), "littleroot");
    }

    #[test]
    fn npcs_block_their_cells() {
        let tiles: Vec<RawTile> = (0..3)
            .flat_map(|x| (0..3).map(move |y| floor(x, y)))
            .collect();
        let grid = build_grid(&tiles, &[NpcSpec::new(2, 2)], (0, 0), "town").unwrap();

        // (2, 2) is the north-east corner: row 0, col 2.
        assert_eq!(grid.tile(Position::new(2, 0)), Some(Tile::Blocked));
    }

    #[test]
    fn unobserved_cells_stay_unknown() {
        // Only the two corners observed; the rest of the box is unknown.
        let tiles = [floor(0, 0), floor(2, 2)];
        let grid = build_grid(&tiles, &[], (0, 0), "sparse").unwrap();

        assert_eq!(grid.tile(Position::new(1, 1)), Some(Tile::Unknown));
        assert!(!grid.is_walkable(Position::new(1, 1)));
    }

    #[test]
    fn empty_feed_is_an_error() {
        assert_eq!(
            build_grid(&[], &[], (0, 0), "void"),
            Err(GridBuildError::NoTiles)
        );
    }

    #[test]
    fn player_outside_the_box_is_an_error() {
        let tiles = [floor(0, 0)];
        assert_eq!(
            build_grid(&tiles, &[], (5, 5), "void"),
            Err(GridBuildError::PlayerOutOfBounds { x: 5, y: 5 })
        );
    }

    #[test]
    fn symbols_map_to_tile_kinds() {
        let tiles = [
            RawTile::new(0, 0, '#'),
            RawTile::new(1, 0, 'W'),
            RawTile::new(2, 0, 'D'),
            RawTile::new(3, 0, 'S'),
            RawTile::new(4, 0, '~'),
            RawTile::new(5, 0, '.'),
        ];
        let grid = build_grid(&tiles, &[], (5, 0), "legend").unwrap();

        assert_eq!(grid.tile(Position::new(0, 0)), Some(Tile::Blocked));
        assert_eq!(grid.tile(Position::new(1, 0)), Some(Tile::Water));
        assert_eq!(grid.tile(Position::new(2, 0)), Some(Tile::Door));
        assert_eq!(grid.tile(Position::new(3, 0)), Some(Tile::Stairs));
        assert_eq!(grid.tile(Position::new(4, 0)), Some(Tile::Walkable));
        assert_eq!(grid.player(), Some(Position::new(5, 0)));
    }
}
