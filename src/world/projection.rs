//! Projectile and area delivery: bolts, beams, balls, rays of light.
//!
//! Geometry here is a straight-ray walk on the tile grid, not a real
//! line-of-sight implementation. A bolt stops at the first monster on the
//! ray; a beam punches through and affects everything on it; a ball
//! resolves a target square (first monster hit, or the end of the ray) and
//! detonates with a fixed radius around it.
//!
//! All of these return whether anything *visible* was affected, which is
//! what feeds the observability flag upstream.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::GameWorld;
use crate::core::{damroll, Direction};

/// How far projectiles travel.
pub const MAX_RANGE: i32 = 18;

/// Elemental/typed damage carried by a projection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageType {
    Missile,
    Acid,
    Elec,
    Fire,
    Cold,
    Poison,
    Light,
    Dark,
    Confusion,
    Sound,
    Shards,
    Chaos,
    Disenchant,
    Ice,
    Mana,
    Arrow,
}

impl GameWorld {
    /// Squares along a ray from the player, stopping before the first
    /// blocking tile and at maximum range.
    pub(crate) fn ray_positions(&self, dir: Direction) -> Vec<(i32, i32)> {
        let (dx, dy) = dir.delta();
        let mut out = Vec::new();
        let mut pos = self.player.pos;
        for _ in 0..MAX_RANGE {
            pos = (pos.0 + dx, pos.1 + dy);
            if !self.dungeon.in_bounds(pos) || self.dungeon.tile(pos).blocks_projection() {
                break;
            }
            out.push(pos);
        }
        out
    }

    /// First monster along an aimed ray.
    pub(crate) fn first_monster_in_dir(&self, dir: Option<Direction>) -> Option<usize> {
        let dir = dir?;
        self.ray_positions(dir)
            .into_iter()
            .find_map(|pos| self.monster_at(pos))
    }

    fn hit_monster(&mut self, idx: usize, damage: i32, _damage_type: DamageType) -> bool {
        let m = &mut self.monsters[idx];
        m.hp -= damage;
        m.asleep = 0;
        m.visible
    }

    /// Single-target straight-line projectile.
    pub fn fire_bolt(&mut self, damage_type: DamageType, dir: Option<Direction>, damage: i32) -> bool {
        let Some(idx) = self.first_monster_in_dir(dir) else {
            return false;
        };
        let seen = self.hit_monster(idx, damage, damage_type);
        self.reap();
        seen
    }

    /// Penetrating bolt: hits every monster along the ray.
    pub fn fire_beam(&mut self, damage_type: DamageType, dir: Option<Direction>, damage: i32) -> bool {
        let Some(dir) = dir else {
            return false;
        };
        let hits: SmallVec<[usize; 8]> = self
            .ray_positions(dir)
            .into_iter()
            .filter_map(|pos| self.monster_at(pos))
            .collect();
        let mut seen = false;
        for idx in hits {
            seen |= self.hit_monster(idx, damage, damage_type);
        }
        self.reap();
        seen
    }

    /// Draw once against `beam_chance` percent to fire a beam instead of a
    /// bolt.
    pub fn fire_bolt_or_beam(
        &mut self,
        beam_chance: i32,
        damage_type: DamageType,
        dir: Option<Direction>,
        damage: i32,
    ) -> bool {
        if self.rng.randint0(100) < beam_chance {
            self.fire_beam(damage_type, dir, damage)
        } else {
            self.fire_bolt(damage_type, dir, damage)
        }
    }

    /// The square an aimed ball detonates on: the first monster hit, or the
    /// far end of the ray.
    fn ball_target(&self, dir: Direction) -> (i32, i32) {
        let ray = self.ray_positions(dir);
        ray.iter()
            .copied()
            .find(|&pos| self.monster_at(pos).is_some())
            .or_else(|| ray.last().copied())
            .unwrap_or(self.player.pos)
    }

    /// Area detonation at the resolved target square.
    pub fn fire_ball(
        &mut self,
        damage_type: DamageType,
        dir: Option<Direction>,
        damage: i32,
        radius: i32,
    ) -> bool {
        let Some(dir) = dir else {
            return false;
        };
        let center = self.ball_target(dir);
        let hits: SmallVec<[usize; 8]> = self
            .monsters
            .iter()
            .enumerate()
            .filter(|(_, m)| {
                (m.pos.0 - center.0).abs().max((m.pos.1 - center.1).abs()) <= radius
            })
            .map(|(i, _)| i)
            .collect();
        let mut seen = false;
        for idx in hits {
            seen |= self.hit_monster(idx, damage, damage_type);
        }
        self.reap();
        seen
    }

    /// Drain life from the first living monster along the ray. Undead are
    /// unaffected.
    pub fn drain_life(&mut self, dir: Option<Direction>, damage: i32) -> bool {
        let Some(idx) = self.first_monster_in_dir(dir) else {
            return false;
        };
        if self.monsters[idx].undead {
            return false;
        }
        let seen = self.hit_monster(idx, damage, DamageType::Mana);
        self.reap();
        seen
    }

    // === Light rays and areas ===

    /// Light every square along the ray. Returns whether anything changed
    /// or a visible monster stands in the light.
    pub fn light_line(&mut self, dir: Option<Direction>) -> bool {
        let Some(dir) = dir else {
            return false;
        };
        let mut noticed = false;
        for pos in self.ray_positions(dir) {
            noticed |= self.dungeon.light(pos);
            if let Some(idx) = self.monster_at(pos) {
                noticed |= self.monsters[idx].visible;
            }
        }
        noticed
    }

    /// Light the ray and sear everything on it with 10d8 light damage.
    pub fn strong_light_line(&mut self, dir: Option<Direction>) -> bool {
        let damage = damroll(&mut self.rng, 10, 8);
        let lit = self.light_line(dir);
        let burned = self.fire_beam(DamageType::Light, dir, damage);
        lit || burned
    }

    /// Light the area around the player, damaging monsters caught in it.
    pub fn light_area(&mut self, damage: i32, radius: i32) -> bool {
        let center = self.player.pos;
        let mut noticed = false;
        for pos in self.dungeon.positions().collect::<Vec<_>>() {
            if (pos.0 - center.0).abs().max((pos.1 - center.1).abs()) <= radius {
                noticed |= self.dungeon.light(pos);
            }
        }
        let hits: SmallVec<[usize; 8]> = self
            .monsters
            .iter()
            .enumerate()
            .filter(|(_, m)| {
                (m.pos.0 - center.0).abs().max((m.pos.1 - center.1).abs()) <= radius
            })
            .map(|(i, _)| i)
            .collect();
        for idx in hits {
            noticed |= self.hit_monster(idx, damage, DamageType::Light);
        }
        self.reap();
        noticed
    }

    /// Darken the area around the player.
    pub fn unlight_area(&mut self, damage: i32, radius: i32) -> bool {
        let center = self.player.pos;
        let mut noticed = false;
        for pos in self.dungeon.positions().collect::<Vec<_>>() {
            if (pos.0 - center.0).abs().max((pos.1 - center.1).abs()) <= radius {
                noticed |= self.dungeon.unlight(pos);
            }
        }
        let hits: SmallVec<[usize; 8]> = self
            .monsters
            .iter()
            .enumerate()
            .filter(|(_, m)| {
                (m.pos.0 - center.0).abs().max((m.pos.1 - center.1).abs()) <= radius
            })
            .map(|(i, _)| i)
            .collect();
        for idx in hits {
            noticed |= self.hit_monster(idx, damage, DamageType::Dark);
        }
        self.reap();
        noticed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Monster;

    fn world() -> GameWorld {
        GameWorld::new(42)
    }

    #[test]
    fn test_bolt_hits_first_monster_only() {
        let mut w = world();
        let ppos = w.player.pos;
        w.monsters.push(Monster::new((ppos.0 + 2, ppos.1), 50));
        w.monsters.push(Monster::new((ppos.0 + 4, ppos.1), 50));

        assert!(w.fire_bolt(DamageType::Fire, Some(Direction::East), 10));
        assert_eq!(w.monsters[0].hp, 40);
        assert_eq!(w.monsters[1].hp, 50);
    }

    #[test]
    fn test_beam_hits_everything_on_ray() {
        let mut w = world();
        let ppos = w.player.pos;
        w.monsters.push(Monster::new((ppos.0 + 2, ppos.1), 50));
        w.monsters.push(Monster::new((ppos.0 + 4, ppos.1), 50));

        assert!(w.fire_beam(DamageType::Elec, Some(Direction::East), 10));
        assert_eq!(w.monsters[0].hp, 40);
        assert_eq!(w.monsters[1].hp, 40);
    }

    #[test]
    fn test_ball_detonates_on_first_monster() {
        let mut w = world();
        let ppos = w.player.pos;
        w.monsters.push(Monster::new((ppos.0 + 3, ppos.1), 50));
        // Bystander inside the blast radius of the first monster.
        w.monsters.push(Monster::new((ppos.0 + 4, ppos.1 + 1), 50));
        // Far outside.
        w.monsters.push(Monster::new((ppos.0 + 9, ppos.1), 50));

        assert!(w.fire_ball(DamageType::Fire, Some(Direction::East), 10, 2));
        assert_eq!(w.monsters[0].hp, 40);
        assert_eq!(w.monsters[1].hp, 40);
        assert_eq!(w.monsters[2].hp, 50);
    }

    #[test]
    fn test_bolt_without_direction_is_noop() {
        let mut w = world();
        let ppos = w.player.pos;
        w.monsters.push(Monster::new((ppos.0 + 2, ppos.1), 50));
        assert!(!w.fire_bolt(DamageType::Fire, None, 10));
        assert_eq!(w.monsters[0].hp, 50);
    }

    #[test]
    fn test_drain_life_skips_undead() {
        let mut w = world();
        let ppos = w.player.pos;
        w.monsters
            .push(Monster::new((ppos.0 + 2, ppos.1), 50).with_undead());
        assert!(!w.drain_life(Some(Direction::East), 90));
        assert_eq!(w.monsters[0].hp, 50);
    }

    #[test]
    fn test_kill_removes_monster() {
        let mut w = world();
        let ppos = w.player.pos;
        w.monsters.push(Monster::new((ppos.0 + 2, ppos.1), 5));
        assert!(w.fire_bolt(DamageType::Fire, Some(Direction::East), 10));
        assert!(w.monsters.is_empty());
    }

    #[test]
    fn test_projection_stops_at_wall() {
        let mut w = world();
        let ppos = w.player.pos;
        w.dungeon
            .set_tile((ppos.0 + 2, ppos.1), crate::world::Tile::Wall);
        w.monsters.push(Monster::new((ppos.0 + 4, ppos.1), 50));
        assert!(!w.fire_bolt(DamageType::Fire, Some(Direction::East), 10));
        assert_eq!(w.monsters[0].hp, 50);
    }

    #[test]
    fn test_light_line_lights_ray() {
        let mut w = world();
        let ppos = w.player.pos;
        assert!(w.light_line(Some(Direction::East)));
        assert!(w.dungeon.is_lit((ppos.0 + 1, ppos.1)));
    }
}
