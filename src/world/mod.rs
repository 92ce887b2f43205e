//! The mutable game state effects operate on.
//!
//! `GameWorld` owns the player record, the monster list, the dungeon grid,
//! the shared RNG, and the player-facing message list. Every collaborator
//! the effect handlers need is an inherent method here (or in the sibling
//! files for monsters and projection), so handlers receive one explicit
//! state handle instead of reaching for globals.
//!
//! Item interactions (enchanting, identifying, curses, recharging) are
//! modeled as a thin `ItemState`: enough observable surface for the
//! corresponding effects to report success or a no-op; real inventory
//! management lives outside this crate.

mod dungeon;
mod monsters;
mod projection;

use serde::{Deserialize, Serialize};

pub use dungeon::{Dungeon, Tile};
pub use monsters::{Monster, SummonKind};
pub use projection::{DamageType, MAX_RANGE};

use crate::core::{Direction, GameRng};
use crate::player::{Player, MAX_DEPTH};

/// Default level dimensions.
const LEVEL_WIDTH: i32 = 66;
const LEVEL_HEIGHT: i32 = 22;

/// Radius of detection effects.
const DETECT_RADIUS: i32 = 30;
/// Enchantment cap per bonus.
const ENCHANT_MAX: i32 = 15;

/// Classification of a player-facing message, for sound/color hooks in the
/// UI layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKind {
    Generic,
    BreatheAcid,
    BreatheElec,
    BreatheFire,
    BreatheFrost,
    BreatheGas,
    BreatheConfusion,
    BreatheSound,
    BreatheShards,
    BreatheChaos,
    BreatheDisenchant,
    BreatheLight,
    BreatheDark,
    BreatheElements,
    SummonMonster,
    SummonUndead,
    TeleportLevel,
}

/// One line of flavor text shown to the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

/// Equipment/inventory surface the item effects act against.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ItemState {
    pub to_hit: i32,
    pub to_dam: i32,
    pub to_ac: i32,
    pub weapon_cursed: bool,
    pub armor_cursed: bool,
    pub bolts_branded: bool,
    /// Unidentified items carried.
    pub unidentified: u32,
    /// Charges in the wielded wand/staff.
    pub charges: i32,
    /// Objects conjured by acquirement effects.
    pub treasure_drops: u32,
}

/// Complete game state handle passed into every effect handler.
#[derive(Clone, Debug)]
pub struct GameWorld {
    pub player: Player,
    pub monsters: Vec<Monster>,
    pub dungeon: Dungeon,
    pub rng: GameRng,
    pub items: ItemState,
    messages: Vec<Message>,
}

impl GameWorld {
    /// A fresh world: an open level with the player in the middle and no
    /// monsters.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let dungeon = Dungeon::new(LEVEL_WIDTH, LEVEL_HEIGHT, 1);
        let player = Player::new((LEVEL_WIDTH / 2, LEVEL_HEIGHT / 2));
        Self {
            player,
            monsters: Vec::new(),
            dungeon,
            rng: GameRng::new(seed),
            items: ItemState::default(),
            messages: Vec::new(),
        }
    }

    // === Messages ===

    /// Emit a generic message.
    pub fn msg(&mut self, text: impl Into<String>) {
        self.msgt(MessageKind::Generic, text);
    }

    /// Emit a classified message.
    pub fn msgt(&mut self, kind: MessageKind, text: impl Into<String>) {
        self.messages.push(Message {
            kind,
            text: text.into(),
        });
    }

    /// All messages emitted so far.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Drain the message list (the UI layer consumes it each turn).
    pub fn take_messages(&mut self) -> Vec<Message> {
        std::mem::take(&mut self.messages)
    }

    // === Movement / teleports ===

    /// A random free floor square, optionally within `range` of a center.
    pub(crate) fn random_floor(&mut self, within: Option<((i32, i32), i32)>) -> Option<(i32, i32)> {
        for _ in 0..200 {
            let pos = match within {
                Some((center, range)) => (
                    center.0 + self.rng.rand_spread(0, range),
                    center.1 + self.rng.rand_spread(0, range),
                ),
                None => (
                    self.rng.randint0(self.dungeon.width()),
                    self.rng.randint0(self.dungeon.height()),
                ),
            };
            if self.dungeon.in_bounds(pos)
                && self.dungeon.tile(pos) == Tile::Floor
                && self.monster_at(pos).is_none()
                && pos != self.player.pos
            {
                return Some(pos);
            }
        }
        None
    }

    /// Teleport the player up to `range` squares away.
    pub fn teleport_player(&mut self, range: i32) {
        let center = self.player.pos;
        if let Some(pos) = self.random_floor(Some((center, range))) {
            self.player.pos = pos;
        }
    }

    /// Teleport the player one level up or down.
    pub fn teleport_player_level(&mut self) {
        if self.player.depth <= 1 || self.rng.one_in(2) {
            self.msgt(MessageKind::TeleportLevel, "You sink through the floor.");
            self.player.depth = (self.player.depth + 1).min(MAX_DEPTH);
        } else {
            self.msgt(MessageKind::TeleportLevel, "You rise up through the ceiling.");
            self.player.depth -= 1;
        }
        self.player.max_depth = self.player.max_depth.max(self.player.depth);
    }

    /// Toggle word-of-recall. Returns true (the toggle always happens).
    pub fn set_recall(&mut self) -> bool {
        if self.player.word_of_recall {
            self.msg("A tension leaves the air around you...");
            self.player.word_of_recall = false;
        } else {
            self.msg("The air about you becomes charged...");
            self.player.word_of_recall = true;
        }
        true
    }

    // === Detection and map knowledge ===

    fn near_player(&self, pos: (i32, i32), radius: i32) -> bool {
        let p = self.player.pos;
        (pos.0 - p.0).abs().max((pos.1 - p.1).abs()) <= radius
    }

    fn detect_tiles(&mut self, matches: impl Fn(Tile) -> bool) -> bool {
        let mut found = false;
        for pos in self.dungeon.positions().collect::<Vec<_>>() {
            if self.near_player(pos, DETECT_RADIUS) && matches(self.dungeon.tile(pos)) {
                found |= self.dungeon.mark_known(pos);
            }
        }
        found
    }

    /// Reveal nearby traps. Returns whether any new ones were found.
    pub fn detect_traps(&mut self, _aware: bool) -> bool {
        self.detect_tiles(|t| t == Tile::Trap)
    }

    /// Reveal nearby doors and stairs.
    pub fn detect_doorstairs(&mut self, _aware: bool) -> bool {
        self.detect_tiles(|t| matches!(t, Tile::Door | Tile::StairsDown))
    }

    /// Reveal nearby treasure veins.
    pub fn detect_treasure(&mut self, _aware: bool, _full: bool) -> bool {
        self.detect_tiles(|t| t == Tile::GoldVein)
    }

    /// Reveal invisible monsters nearby.
    pub fn detect_monsters_invis(&mut self, _aware: bool) -> bool {
        let mut found = false;
        for i in 0..self.monsters.len() {
            if self.near_player(self.monsters[i].pos, DETECT_RADIUS) && !self.monsters[i].visible {
                self.monsters[i].visible = true;
                found = true;
            }
        }
        found
    }

    /// Reveal evil monsters nearby.
    pub fn detect_monsters_evil(&mut self, _aware: bool) -> bool {
        let mut found = false;
        for i in 0..self.monsters.len() {
            if self.near_player(self.monsters[i].pos, DETECT_RADIUS)
                && self.monsters[i].evil
                && !self.monsters[i].visible
            {
                self.monsters[i].visible = true;
                found = true;
            }
        }
        found
    }

    /// Reveal every monster on the level.
    pub fn detect_monsters_entire_level(&mut self) -> bool {
        let mut found = false;
        for m in self.monsters.iter_mut() {
            if !m.visible {
                m.visible = true;
                found = true;
            }
        }
        found
    }

    /// Run every detection at once.
    pub fn detect_all(&mut self, aware: bool) -> bool {
        let mut found = self.detect_traps(aware);
        found |= self.detect_doorstairs(aware);
        found |= self.detect_treasure(aware, false);
        found |= self.detect_monsters_invis(aware);
        found |= self.detect_monsters_evil(aware);
        found
    }

    /// Map the area around the player.
    pub fn map_area(&mut self) {
        for pos in self.dungeon.positions().collect::<Vec<_>>() {
            if self.near_player(pos, DETECT_RADIUS) {
                self.dungeon.mark_known(pos);
            }
        }
    }

    /// Reveal the whole level; `lit` also lights it.
    pub fn wiz_light(&mut self, lit: bool) {
        for pos in self.dungeon.positions().collect::<Vec<_>>() {
            self.dungeon.mark_known(pos);
            if lit {
                self.dungeon.light(pos);
            }
        }
    }

    // === Dungeon mutation ===

    /// Scatter traps on the floor squares around the player.
    pub fn trap_creation(&mut self) {
        let center = self.player.pos;
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            let pos = (center.0 + dx, center.1 + dy);
            if self.dungeon.in_bounds(pos) && self.dungeon.tile(pos) == Tile::Floor {
                self.dungeon.set_tile(pos, Tile::Trap);
            }
        }
    }

    /// Destroy doors (and disarm traps) adjacent to the player.
    pub fn destroy_doors_touch(&mut self) -> bool {
        let center = self.player.pos;
        let mut destroyed = false;
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            let pos = (center.0 + dx, center.1 + dy);
            if self.dungeon.in_bounds(pos)
                && matches!(self.dungeon.tile(pos), Tile::Door | Tile::Trap)
            {
                self.dungeon.set_tile(pos, Tile::Floor);
                destroyed = true;
            }
        }
        destroyed
    }

    fn first_tile_in_dir(&self, dir: Option<Direction>, matches: impl Fn(Tile) -> bool) -> Option<(i32, i32)> {
        let dir = dir?;
        let (dx, dy) = dir.delta();
        let mut pos = self.player.pos;
        for _ in 0..MAX_RANGE {
            pos = (pos.0 + dx, pos.1 + dy);
            if !self.dungeon.in_bounds(pos) {
                return None;
            }
            let tile = self.dungeon.tile(pos);
            if matches(tile) {
                return Some(pos);
            }
            if tile.blocks_projection() {
                return None;
            }
        }
        None
    }

    /// Destroy the first door along an aimed ray.
    pub fn destroy_door(&mut self, dir: Option<Direction>) -> bool {
        if let Some(pos) = self.first_tile_in_dir(dir, |t| t == Tile::Door) {
            self.dungeon.set_tile(pos, Tile::Floor);
            return true;
        }
        false
    }

    /// Disarm the first trap along an aimed ray.
    pub fn disarm_trap(&mut self, dir: Option<Direction>) -> bool {
        if let Some(pos) = self.first_tile_in_dir(dir, |t| t == Tile::Trap) {
            self.dungeon.set_tile(pos, Tile::Floor);
            return true;
        }
        false
    }

    /// Melt the first wall section along an aimed ray.
    pub fn wall_to_mud(&mut self, dir: Option<Direction>) -> bool {
        if let Some(pos) =
            self.first_tile_in_dir(dir, |t| matches!(t, Tile::Wall | Tile::Rubble | Tile::GoldVein))
        {
            // The outer border must stay solid.
            if pos.0 == 0
                || pos.1 == 0
                || pos.0 == self.dungeon.width() - 1
                || pos.1 == self.dungeon.height() - 1
            {
                return false;
            }
            self.dungeon.set_tile(pos, Tile::Floor);
            return true;
        }
        false
    }

    /// Inscribe a protective glyph under the player.
    pub fn warding_glyph(&mut self) {
        let pos = self.player.pos;
        if self.dungeon.tile(pos) == Tile::Floor {
            self.dungeon.set_tile(pos, Tile::Glyph);
        }
    }

    /// Shake the dungeon: some squares collapse into rubble, monsters in
    /// the radius are crushed.
    pub fn earthquake(&mut self, radius: i32) {
        let center = self.player.pos;
        for pos in self.dungeon.positions().collect::<Vec<_>>() {
            if pos == center || !self.near_player(pos, radius) {
                continue;
            }
            if self.dungeon.tile(pos) == Tile::Floor && self.rng.one_in(4) {
                self.dungeon.set_tile(pos, Tile::Rubble);
                self.dungeon.forget(pos);
            }
        }
        for i in 0..self.monsters.len() {
            if self.near_player(self.monsters[i].pos, radius) {
                let crush = self.rng.randint1(8) + self.rng.randint1(8);
                self.monsters[i].hp -= crush;
            }
        }
        self.reap();
    }

    /// Annihilate the area around the player: terrain churned, map
    /// forgotten, non-unique monsters destroyed.
    pub fn destroy_area(&mut self, radius: i32, _full: bool) {
        let center = self.player.pos;
        for pos in self.dungeon.positions().collect::<Vec<_>>() {
            if pos == center || !self.near_player(pos, radius) {
                continue;
            }
            if self.rng.one_in(3) {
                self.dungeon.set_tile(pos, Tile::Rubble);
            }
            self.dungeon.forget(pos);
        }
        let ppos = self.player.pos;
        self.monsters.retain(|m| {
            m.unique || (m.pos.0 - ppos.0).abs().max((m.pos.1 - ppos.1).abs()) > radius
        });
    }

    /// Attack roll for a mechanical trap of the given power against the
    /// player's armor.
    pub fn trap_check_hit(&mut self, power: i32) -> bool {
        self.rng.randint0(power.max(1)) >= self.player.armor * 3 / 4
    }

    // === Item boundary ===

    /// Enchant equipment bonuses. Returns whether anything improved.
    pub fn enchant(&mut self, to_hit: i32, to_dam: i32, to_ac: i32) -> bool {
        let mut improved = false;
        if to_hit > 0 && self.items.to_hit < ENCHANT_MAX {
            self.items.to_hit = (self.items.to_hit + to_hit).min(ENCHANT_MAX);
            improved = true;
        }
        if to_dam > 0 && self.items.to_dam < ENCHANT_MAX {
            self.items.to_dam = (self.items.to_dam + to_dam).min(ENCHANT_MAX);
            improved = true;
        }
        if to_ac > 0 && self.items.to_ac < ENCHANT_MAX {
            self.items.to_ac = (self.items.to_ac + to_ac).min(ENCHANT_MAX);
            improved = true;
        }
        improved
    }

    /// Identify one carried item. Returns whether one was unknown.
    pub fn identify_item(&mut self) -> bool {
        if self.items.unidentified == 0 {
            return false;
        }
        self.items.unidentified -= 1;
        true
    }

    /// Identify everything carried.
    pub fn identify_pack(&mut self) {
        self.items.unidentified = 0;
    }

    /// Lift a curse from one piece of equipment.
    pub fn remove_curse(&mut self) -> bool {
        if self.items.weapon_cursed {
            self.items.weapon_cursed = false;
            return true;
        }
        if self.items.armor_cursed {
            self.items.armor_cursed = false;
            return true;
        }
        false
    }

    /// Lift every curse.
    pub fn remove_all_curse(&mut self) {
        self.items.weapon_cursed = false;
        self.items.armor_cursed = false;
    }

    /// Curse the wielded weapon. Returns whether it was clean.
    pub fn curse_weapon(&mut self) -> bool {
        if self.items.weapon_cursed {
            return false;
        }
        self.items.weapon_cursed = true;
        self.items.to_hit = -(self.rng.randint1(5) + 5);
        self.items.to_dam = -(self.rng.randint1(5) + 5);
        true
    }

    /// Curse the worn armor. Returns whether it was clean.
    pub fn curse_armor(&mut self) -> bool {
        if self.items.armor_cursed {
            return false;
        }
        self.items.armor_cursed = true;
        self.items.to_ac = -(self.rng.randint1(5) + 5);
        true
    }

    /// Recharge the wielded wand/staff.
    pub fn recharge(&mut self, strength: i32) -> bool {
        self.items.charges += strength / 10 + self.rng.randint1(5);
        true
    }

    /// Repair disenchanted equipment. Returns whether anything was below
    /// zero.
    pub fn restore_item(&mut self) -> bool {
        let mut repaired = false;
        for bonus in [&mut self.items.to_hit, &mut self.items.to_dam, &mut self.items.to_ac] {
            if *bonus < 0 {
                *bonus = 0;
                repaired = true;
            }
        }
        repaired
    }

    /// Brand the carried bolts with fire. Returns whether they were
    /// unbranded.
    pub fn brand_bolts(&mut self) -> bool {
        if self.items.bolts_branded {
            return false;
        }
        self.items.bolts_branded = true;
        true
    }

    /// Conjure excellent objects at the player's feet.
    pub fn acquirement(&mut self, count: i32) {
        self.items.treasure_drops += count.max(0) as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_accumulate() {
        let mut w = GameWorld::new(1);
        w.msg("one");
        w.msgt(MessageKind::SummonMonster, "two");
        assert_eq!(w.messages().len(), 2);
        assert_eq!(w.messages()[1].kind, MessageKind::SummonMonster);

        let taken = w.take_messages();
        assert_eq!(taken.len(), 2);
        assert!(w.messages().is_empty());
    }

    #[test]
    fn test_teleport_player_moves_within_range() {
        let mut w = GameWorld::new(42);
        let start = w.player.pos;
        w.teleport_player(10);
        let end = w.player.pos;
        assert_ne!(start, end);
        assert!((end.0 - start.0).abs() <= 10 && (end.1 - start.1).abs() <= 10);
    }

    #[test]
    fn test_detect_traps_only_marks_traps() {
        let mut w = GameWorld::new(42);
        let ppos = w.player.pos;
        let trap = (ppos.0 + 3, ppos.1);
        w.dungeon.set_tile(trap, Tile::Trap);

        assert!(w.detect_traps(true));
        assert!(w.dungeon.is_known(trap));
        // Second detection finds nothing new.
        assert!(!w.detect_traps(true));
    }

    #[test]
    fn test_enchant_caps() {
        let mut w = GameWorld::new(42);
        assert!(w.enchant(20, 0, 0));
        assert_eq!(w.items.to_hit, 15);
        assert!(!w.enchant(1, 0, 0));
    }

    #[test]
    fn test_curse_and_remove() {
        let mut w = GameWorld::new(42);
        assert!(w.curse_weapon());
        assert!(w.items.to_hit < 0);
        assert!(w.remove_curse());
        assert!(!w.items.weapon_cursed);
        assert!(!w.remove_curse());
        assert!(w.restore_item());
        assert_eq!(w.items.to_hit, 0);
    }

    #[test]
    fn test_wall_to_mud_keeps_border() {
        let mut w = GameWorld::new(42);
        w.player.pos = (1, 1);
        // Everything west of the player is the border wall.
        assert!(!w.wall_to_mud(Some(Direction::West)));
        assert_eq!(w.dungeon.tile((0, 1)), Tile::Wall);
    }

    #[test]
    fn test_wall_to_mud_melts_interior_wall() {
        let mut w = GameWorld::new(42);
        let ppos = w.player.pos;
        let wall = (ppos.0 + 2, ppos.1);
        w.dungeon.set_tile(wall, Tile::Wall);
        assert!(w.wall_to_mud(Some(Direction::East)));
        assert_eq!(w.dungeon.tile(wall), Tile::Floor);
    }

    #[test]
    fn test_warding_glyph() {
        let mut w = GameWorld::new(42);
        w.warding_glyph();
        assert_eq!(w.dungeon.tile(w.player.pos), Tile::Glyph);
    }

    #[test]
    fn test_destroy_area_spares_uniques() {
        let mut w = GameWorld::new(42);
        let ppos = w.player.pos;
        w.monsters.push(Monster::new((ppos.0 + 2, ppos.1), 30));
        w.monsters
            .push(Monster::new((ppos.0 + 3, ppos.1), 30).with_unique());
        w.destroy_area(15, true);
        assert_eq!(w.monsters.len(), 1);
        assert!(w.monsters[0].unique);
    }
}
