//! The dungeon grid.
//!
//! A deliberately small model: a bounded tile grid with lit/known masks.
//! Real level generation and field-of-view live outside this crate; effects
//! only need enough structure to detonate against, light up, and reveal.

use serde::{Deserialize, Serialize};

/// One grid square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Floor,
    Wall,
    Rubble,
    Door,
    Trap,
    Glyph,
    GoldVein,
    StairsDown,
}

impl Tile {
    /// Does this tile stop bolts, beams, and rays?
    #[must_use]
    pub const fn blocks_projection(self) -> bool {
        matches!(self, Tile::Wall | Tile::Rubble | Tile::Door | Tile::GoldVein)
    }
}

/// A bounded dungeon level.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Dungeon {
    width: i32,
    height: i32,
    pub depth: i32,
    tiles: Vec<Tile>,
    lit: Vec<bool>,
    known: Vec<bool>,
}

impl Dungeon {
    /// An open level: floor interior, solid wall border.
    #[must_use]
    pub fn new(width: i32, height: i32, depth: i32) -> Self {
        assert!(width >= 3 && height >= 3, "dungeon too small");
        let size = (width * height) as usize;
        let mut dungeon = Self {
            width,
            height,
            depth,
            tiles: vec![Tile::Floor; size],
            lit: vec![false; size],
            known: vec![false; size],
        };
        for x in 0..width {
            dungeon.set_tile((x, 0), Tile::Wall);
            dungeon.set_tile((x, height - 1), Tile::Wall);
        }
        for y in 0..height {
            dungeon.set_tile((0, y), Tile::Wall);
            dungeon.set_tile((width - 1, y), Tile::Wall);
        }
        dungeon
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[must_use]
    pub fn in_bounds(&self, pos: (i32, i32)) -> bool {
        pos.0 >= 0 && pos.0 < self.width && pos.1 >= 0 && pos.1 < self.height
    }

    fn idx(&self, pos: (i32, i32)) -> usize {
        debug_assert!(self.in_bounds(pos));
        (pos.1 * self.width + pos.0) as usize
    }

    #[must_use]
    pub fn tile(&self, pos: (i32, i32)) -> Tile {
        self.tiles[self.idx(pos)]
    }

    pub fn set_tile(&mut self, pos: (i32, i32), tile: Tile) {
        let i = self.idx(pos);
        self.tiles[i] = tile;
    }

    #[must_use]
    pub fn is_lit(&self, pos: (i32, i32)) -> bool {
        self.lit[self.idx(pos)]
    }

    /// Light a square. Returns whether it was previously dark.
    pub fn light(&mut self, pos: (i32, i32)) -> bool {
        let i = self.idx(pos);
        let changed = !self.lit[i];
        self.lit[i] = true;
        self.known[i] = true;
        changed
    }

    /// Darken a square. Returns whether it was previously lit.
    pub fn unlight(&mut self, pos: (i32, i32)) -> bool {
        let i = self.idx(pos);
        let changed = self.lit[i];
        self.lit[i] = false;
        changed
    }

    #[must_use]
    pub fn is_known(&self, pos: (i32, i32)) -> bool {
        self.known[self.idx(pos)]
    }

    /// Mark a square as known to the player. Returns whether it was new.
    pub fn mark_known(&mut self, pos: (i32, i32)) -> bool {
        let i = self.idx(pos);
        let changed = !self.known[i];
        self.known[i] = true;
        changed
    }

    /// Forget a square (destruction, earthquakes).
    pub fn forget(&mut self, pos: (i32, i32)) {
        let i = self.idx(pos);
        self.known[i] = false;
        self.lit[i] = false;
    }

    /// Iterate all positions.
    pub fn positions(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let (w, h) = (self.width, self.height);
        (0..h).flat_map(move |y| (0..w).map(move |x| (x, y)))
    }

    /// Count tiles of one kind, for inspection.
    #[must_use]
    pub fn count_tiles(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_is_wall() {
        let d = Dungeon::new(10, 8, 1);
        assert_eq!(d.tile((0, 0)), Tile::Wall);
        assert_eq!(d.tile((9, 7)), Tile::Wall);
        assert_eq!(d.tile((5, 4)), Tile::Floor);
    }

    #[test]
    fn test_light_reports_change() {
        let mut d = Dungeon::new(10, 8, 1);
        assert!(d.light((3, 3)));
        assert!(!d.light((3, 3)));
        assert!(d.unlight((3, 3)));
        assert!(!d.unlight((3, 3)));
    }

    #[test]
    fn test_light_marks_known() {
        let mut d = Dungeon::new(10, 8, 1);
        d.light((3, 3));
        assert!(d.is_known((3, 3)));
        d.forget((3, 3));
        assert!(!d.is_known((3, 3)));
        assert!(!d.is_lit((3, 3)));
    }
}
