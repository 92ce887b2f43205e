//! Monsters and the monster-affecting effect primitives.
//!
//! Monster AI and pathing are outside this crate; a monster here is the
//! minimal record the effect engine mutates: position, hit points, a few
//! flags, and condition timers.

use serde::{Deserialize, Serialize};

use super::GameWorld;
use crate::core::Direction;
use crate::world::dungeon::Tile;

/// How long a put-to-sleep monster stays down.
const SLEEP_DURATION: i32 = 500;
/// Radius of level-wide monster sweeps (dispel, mass banishment).
const SWEEP_RADIUS: i32 = 20;

/// A monster on the current level.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Monster {
    pub pos: (i32, i32),
    pub hp: i32,
    pub max_hp: i32,
    /// Speed step relative to normal, clamped to [-2, 2].
    pub speed: i32,
    pub confused: i32,
    pub afraid: i32,
    pub asleep: i32,
    pub undead: bool,
    pub evil: bool,
    pub unique: bool,
    pub visible: bool,
    /// Immune to confusion.
    pub no_conf: bool,
    /// Revealed by probing.
    pub probed: bool,
}

impl Monster {
    #[must_use]
    pub fn new(pos: (i32, i32), hp: i32) -> Self {
        Self {
            pos,
            hp,
            max_hp: hp,
            speed: 0,
            confused: 0,
            afraid: 0,
            asleep: 0,
            undead: false,
            evil: false,
            unique: false,
            visible: true,
            no_conf: false,
            probed: false,
        }
    }

    #[must_use]
    pub fn with_undead(mut self) -> Self {
        self.undead = true;
        self
    }

    #[must_use]
    pub fn with_evil(mut self) -> Self {
        self.evil = true;
        self
    }

    #[must_use]
    pub fn with_unique(mut self) -> Self {
        self.unique = true;
        self
    }

    #[must_use]
    pub fn with_no_conf(mut self) -> Self {
        self.no_conf = true;
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// What kind of monster a summon produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SummonKind {
    Any,
    Undead,
}

impl GameWorld {
    /// Index of the monster at a position, if any.
    #[must_use]
    pub fn monster_at(&self, pos: (i32, i32)) -> Option<usize> {
        self.monsters.iter().position(|m| m.pos == pos)
    }

    /// Remove slain monsters.
    pub(crate) fn reap(&mut self) {
        self.monsters.retain(|m| m.hp > 0);
    }

    fn chebyshev(a: (i32, i32), b: (i32, i32)) -> i32 {
        (a.0 - b.0).abs().max((a.1 - b.1).abs())
    }

    /// A free floor square adjacent to `pos`, if one exists.
    fn adjacent_floor(&self, pos: (i32, i32)) -> Option<(i32, i32)> {
        Direction::ALL.iter().map(|d| d.delta()).find_map(|(dx, dy)| {
            let p = (pos.0 + dx, pos.1 + dy);
            (self.dungeon.in_bounds(p)
                && self.dungeon.tile(p) == Tile::Floor
                && self.monster_at(p).is_none()
                && p != self.player.pos)
                .then_some(p)
        })
    }

    // === Single-target primitives (first monster along an aimed ray) ===

    /// Clone the first monster in the given direction.
    pub fn clone_monster(&mut self, dir: Option<Direction>) -> bool {
        let Some(idx) = self.first_monster_in_dir(dir) else {
            return false;
        };
        let Some(pos) = self.adjacent_floor(self.monsters[idx].pos) else {
            return false;
        };
        let mut copy = self.monsters[idx].clone();
        copy.pos = pos;
        let visible = copy.visible;
        self.monsters.push(copy);
        visible
    }

    /// Hasten the first monster in the given direction.
    pub fn speed_monster(&mut self, dir: Option<Direction>) -> bool {
        let Some(idx) = self.first_monster_in_dir(dir) else {
            return false;
        };
        let m = &mut self.monsters[idx];
        m.speed = (m.speed + 1).min(2);
        m.visible
    }

    /// Slow the first monster in the given direction.
    pub fn slow_monster(&mut self, dir: Option<Direction>) -> bool {
        let Some(idx) = self.first_monster_in_dir(dir) else {
            return false;
        };
        let m = &mut self.monsters[idx];
        m.speed = (m.speed - 1).max(-2);
        m.visible
    }

    /// Heal the first monster in the given direction to full.
    pub fn heal_monster(&mut self, dir: Option<Direction>) -> bool {
        let Some(idx) = self.first_monster_in_dir(dir) else {
            return false;
        };
        let m = &mut self.monsters[idx];
        if m.hp >= m.max_hp {
            return false;
        }
        m.hp = m.max_hp;
        m.visible
    }

    /// Confuse the first monster in the given direction.
    ///
    /// Immune monsters shrug it off; nothing is observed.
    pub fn confuse_monster(&mut self, dir: Option<Direction>, power: i32, _aware: bool) -> bool {
        let Some(idx) = self.first_monster_in_dir(dir) else {
            return false;
        };
        let m = &mut self.monsters[idx];
        if m.no_conf {
            return false;
        }
        m.confused += power;
        m.visible
    }

    /// Scare the first monster in the given direction.
    pub fn fear_monster(&mut self, dir: Option<Direction>, power: i32, _aware: bool) -> bool {
        let Some(idx) = self.first_monster_in_dir(dir) else {
            return false;
        };
        let m = &mut self.monsters[idx];
        m.afraid += power;
        m.visible
    }

    /// Put the first monster in the given direction to sleep.
    pub fn sleep_monster(&mut self, dir: Option<Direction>, _aware: bool) -> bool {
        let Some(idx) = self.first_monster_in_dir(dir) else {
            return false;
        };
        let m = &mut self.monsters[idx];
        m.asleep = SLEEP_DURATION;
        m.visible
    }

    /// Polymorph the first monster in the given direction into a fresh one.
    pub fn poly_monster(&mut self, dir: Option<Direction>) -> bool {
        let Some(idx) = self.first_monster_in_dir(dir) else {
            return false;
        };
        let depth = self.dungeon.depth;
        let hp = self.rng.randint1(depth * 10 + 20);
        let undead = self.rng.one_in(4);
        let evil = self.rng.one_in(2);
        let m = &mut self.monsters[idx];
        let visible = m.visible;
        m.hp = hp;
        m.max_hp = hp;
        m.undead = undead;
        m.evil = evil;
        m.confused = 0;
        m.afraid = 0;
        m.asleep = 0;
        m.speed = 0;
        visible
    }

    /// Teleport the first monster in the given direction far away.
    pub fn teleport_monster(&mut self, dir: Option<Direction>) -> bool {
        let Some(idx) = self.first_monster_in_dir(dir) else {
            return false;
        };
        let Some(pos) = self.random_floor(None) else {
            return false;
        };
        let m = &mut self.monsters[idx];
        let visible = m.visible;
        m.pos = pos;
        visible
    }

    // === Level-wide primitives ===

    /// Hasten every monster in view.
    pub fn speed_monsters(&mut self) -> bool {
        let mut seen = false;
        for m in self.monsters.iter_mut().filter(|m| m.visible) {
            m.speed = (m.speed + 1).min(2);
            seen = true;
        }
        seen
    }

    /// Slow every monster in view.
    pub fn slow_monsters(&mut self) -> bool {
        let mut seen = false;
        for m in self.monsters.iter_mut().filter(|m| m.visible) {
            m.speed = (m.speed - 1).max(-2);
            seen = true;
        }
        seen
    }

    /// Put every monster in view to sleep.
    pub fn sleep_monsters(&mut self, _aware: bool) -> bool {
        let mut seen = false;
        for m in self.monsters.iter_mut().filter(|m| m.visible) {
            m.asleep = SLEEP_DURATION;
            seen = true;
        }
        seen
    }

    /// Confuse every non-immune monster in view.
    pub fn confuse_monsters(&mut self, _aware: bool) -> bool {
        let mut seen = false;
        for m in self.monsters.iter_mut().filter(|m| m.visible && !m.no_conf) {
            m.confused += 10;
            seen = true;
        }
        seen
    }

    /// Put monsters adjacent to the player to sleep.
    pub fn sleep_monsters_touch(&mut self, _aware: bool) -> bool {
        let ppos = self.player.pos;
        let mut seen = false;
        for m in self.monsters.iter_mut() {
            if Self::chebyshev(m.pos, ppos) <= 1 {
                m.asleep = SLEEP_DURATION;
                seen |= m.visible;
            }
        }
        seen
    }

    /// Wake everything on the level.
    pub fn aggravate_monsters(&mut self) {
        for m in self.monsters.iter_mut() {
            m.asleep = 0;
        }
    }

    fn dispel_where(&mut self, damage: i32, pred: impl Fn(&Monster) -> bool) -> bool {
        let ppos = self.player.pos;
        let mut seen = false;
        for m in self.monsters.iter_mut() {
            if Self::chebyshev(m.pos, ppos) <= SWEEP_RADIUS && pred(m) {
                m.hp -= damage;
                seen |= m.visible;
            }
        }
        self.reap();
        seen
    }

    /// Damage every evil monster in range.
    pub fn dispel_evil(&mut self, damage: i32) -> bool {
        self.dispel_where(damage, |m| m.evil)
    }

    /// Damage every undead monster in range.
    pub fn dispel_undead(&mut self, damage: i32) -> bool {
        self.dispel_where(damage, |m| m.undead)
    }

    /// Damage every monster in range.
    pub fn dispel_monsters(&mut self, damage: i32) -> bool {
        self.dispel_where(damage, |_| true)
    }

    /// Remove every non-unique monster on the level. The strain costs the
    /// player 1d4 hit points per monster banished.
    pub fn banishment(&mut self) -> bool {
        let before = self.monsters.len();
        self.monsters.retain(|m| m.unique);
        let banished = before - self.monsters.len();
        for _ in 0..banished {
            let pain = self.rng.randint1(4);
            self.player.take_hit(pain, "the strain of casting Banishment");
        }
        banished > 0
    }

    /// Remove every non-unique monster near the player.
    pub fn mass_banishment(&mut self) -> bool {
        let ppos = self.player.pos;
        let before = self.monsters.len();
        self.monsters
            .retain(|m| m.unique || Self::chebyshev(m.pos, ppos) > SWEEP_RADIUS);
        let banished = before - self.monsters.len();
        for _ in 0..banished {
            let pain = self.rng.randint1(3);
            self.player.take_hit(pain, "the strain of casting Mass Banishment");
        }
        banished > 0
    }

    /// Learn the health of every visible monster.
    pub fn probing(&mut self) -> bool {
        let mut seen = false;
        let mut reports = Vec::new();
        for m in self.monsters.iter_mut().filter(|m| m.visible) {
            m.probed = true;
            reports.push(format!("A monster has {} hit points.", m.hp));
            seen = true;
        }
        for text in reports {
            self.msg(text);
        }
        seen
    }

    /// Place a new monster next to the player. Fails when no floor square
    /// is free.
    pub fn summon_specific(&mut self, kind: SummonKind, depth: i32) -> bool {
        let Some(pos) = self.adjacent_floor(self.player.pos) else {
            return false;
        };
        let hp = 5 + depth * 2 + self.rng.randint1(depth.max(1) * 2);
        let mut monster = Monster::new(pos, hp);
        if matches!(kind, SummonKind::Undead) {
            monster = monster.with_undead().with_evil();
        }
        self.monsters.push(monster);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> GameWorld {
        GameWorld::new(42)
    }

    #[test]
    fn test_summon_places_adjacent() {
        let mut w = world();
        assert!(w.summon_specific(SummonKind::Any, 5));
        let ppos = w.player.pos;
        let m = &w.monsters[0];
        assert_eq!(GameWorld::chebyshev(m.pos, ppos), 1);
    }

    #[test]
    fn test_summon_undead_flags() {
        let mut w = world();
        assert!(w.summon_specific(SummonKind::Undead, 5));
        assert!(w.monsters[0].undead);
    }

    #[test]
    fn test_banishment_spares_uniques() {
        let mut w = world();
        let ppos = w.player.pos;
        w.monsters.push(Monster::new((ppos.0 + 2, ppos.1), 30));
        w.monsters.push(Monster::new((ppos.0 + 3, ppos.1), 30).with_unique());

        let hp_before = w.player.hp;
        assert!(w.banishment());
        assert_eq!(w.monsters.len(), 1);
        assert!(w.monsters[0].unique);
        assert!(w.player.hp < hp_before);
    }

    #[test]
    fn test_dispel_evil_ignores_others() {
        let mut w = world();
        let ppos = w.player.pos;
        w.monsters.push(Monster::new((ppos.0 + 2, ppos.1), 30).with_evil());
        w.monsters.push(Monster::new((ppos.0 + 3, ppos.1), 30));

        assert!(w.dispel_evil(10));
        assert_eq!(w.monsters[0].hp, 20);
        assert_eq!(w.monsters[1].hp, 30);
    }

    #[test]
    fn test_dispel_kills_and_reaps() {
        let mut w = world();
        let ppos = w.player.pos;
        w.monsters.push(Monster::new((ppos.0 + 2, ppos.1), 5));
        assert!(w.dispel_monsters(10));
        assert!(w.monsters.is_empty());
    }

    #[test]
    fn test_confuse_immune_monster() {
        let mut w = world();
        let ppos = w.player.pos;
        w.monsters
            .push(Monster::new((ppos.0 + 2, ppos.1), 30).with_no_conf());
        assert!(!w.confuse_monster(Some(Direction::East), 10, true));
        assert_eq!(w.monsters[0].confused, 0);
    }

    #[test]
    fn test_clone_monster() {
        let mut w = world();
        let ppos = w.player.pos;
        w.monsters.push(Monster::new((ppos.0 + 2, ppos.1), 30));
        assert!(w.clone_monster(Some(Direction::East)));
        assert_eq!(w.monsters.len(), 2);
    }
}
