//! # Tile Board
//!
//! The fixed set of clickable number tiles and their screen regions.

use crate::config::{TILES_PER_ROW, TILE_COUNT, TILE_ORIGIN, TILE_SIZE, TILE_SPACING};
use macroquad::prelude::{Rect, Vec2};

/// A clickable number tile.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// Operand the tile stands for, 0 through 9
    pub value: u8,
    /// Screen region in pixels
    pub region: Rect,
    /// Image file name inside the asset directory
    pub asset_name: String,
}

impl Tile {
    /// Returns true if the screen point lies inside this tile.
    pub fn contains(&self, point: Vec2) -> bool {
        self.region.contains(point)
    }
}

/// The board of tiles, created once and never changed.
#[derive(Debug, Clone)]
pub struct TileBoard {
    tiles: Vec<Tile>,
}

impl TileBoard {
    /// Lays out the standard board: two rows of five tiles.
    ///
    /// Tile `i` uses the image `"{i + 1}.png"` and has value `(i + 1) % 10`, so
    /// the tenth tile is the zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use make_ten::TileBoard;
    ///
    /// let board = TileBoard::standard();
    /// assert_eq!(board.tiles().len(), 10);
    /// assert_eq!(board.tiles()[0].value, 1);
    /// assert_eq!(board.tiles()[9].value, 0);
    /// assert_eq!(board.tiles()[9].asset_name, "10.png");
    /// ```
    pub fn standard() -> Self {
        let tiles = (0..TILE_COUNT)
            .map(|index| {
                let column = (index % TILES_PER_ROW) as f32;
                let row = (index / TILES_PER_ROW) as f32;
                let number = index + 1;
                Tile {
                    value: (number % 10) as u8,
                    region: Rect::new(
                        TILE_ORIGIN.0 + column * TILE_SPACING,
                        TILE_ORIGIN.1 + row * TILE_SPACING,
                        TILE_SIZE,
                        TILE_SIZE,
                    ),
                    asset_name: format!("{}.png", number),
                }
            })
            .collect();
        Self { tiles }
    }

    /// All tiles in their fixed order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Finds the first tile whose region contains `point`.
    pub fn tile_at(&self, point: Vec2) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.contains(point))
    }
}

impl Default for TileBoard {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::prelude::vec2;

    #[test]
    fn test_board_values_cover_all_digits() {
        let board = TileBoard::standard();
        let mut values: Vec<u8> = board.tiles().iter().map(|t| t.value).collect();
        values.sort_unstable();
        assert_eq!(values, (0..=9).collect::<Vec<u8>>());
    }

    #[test]
    fn test_board_layout() {
        let board = TileBoard::standard();
        let first = &board.tiles()[0];
        assert_eq!(first.region, Rect::new(100.0, 300.0, 80.0, 80.0));

        let sixth = &board.tiles()[5];
        assert_eq!(sixth.region, Rect::new(100.0, 420.0, 80.0, 80.0));
        assert_eq!(sixth.value, 6);

        let last = &board.tiles()[9];
        assert_eq!(last.region, Rect::new(580.0, 420.0, 80.0, 80.0));
    }

    #[test]
    fn test_regions_do_not_overlap() {
        let board = TileBoard::standard();
        for (i, a) in board.tiles().iter().enumerate() {
            for b in board.tiles().iter().skip(i + 1) {
                assert!(!a.region.overlaps(&b.region), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_tile_at_hits_and_misses() {
        let board = TileBoard::standard();
        assert_eq!(board.tile_at(vec2(140.0, 340.0)).map(|t| t.value), Some(1));
        assert_eq!(board.tile_at(vec2(340.0, 340.0)).map(|t| t.value), Some(3));
        assert_eq!(board.tile_at(vec2(620.0, 460.0)).map(|t| t.value), Some(0));
        // Gap between the first two tiles.
        assert!(board.tile_at(vec2(200.0, 340.0)).is_none());
        assert!(board.tile_at(vec2(10.0, 10.0)).is_none());
    }
}
