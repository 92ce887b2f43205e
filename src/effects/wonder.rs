//! The wand of wonder.
//!
//! One die roll of 1d100 plus a fifth of the character level selects a
//! band from a fixed table; higher rolls give stronger results, and the
//! level bonus slides low-level junk out of reach as the character grows.
//! Rolls above 100 always announce themselves and are always observable,
//! whatever the selected band does.

use crate::core::{damroll, Direction};
use crate::world::{DamageType, GameWorld};

/// What one band of the wonder table does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WonderAction {
    CloneMonster,
    SpeedMonster,
    HealMonster,
    PolyMonster,
    MagicMissile,
    ConfuseMonster,
    PoisonBall,
    LightLine,
    ElecBeam,
    ColdBolt,
    AcidBolt,
    FireBolt,
    DrainLife,
    ElecBall,
    AcidBall,
    IceBall,
    FireBall,
    DrainLifeHeavy,
    Earthquake,
    DestroyArea,
    Banish,
    DispelMonsters,
    Finale,
}

/// The wonder table: `(exclusive upper bound, action)`, first match wins.
pub const WONDER_BANDS: [(i32, WonderAction); 23] = [
    (8, WonderAction::CloneMonster),
    (14, WonderAction::SpeedMonster),
    (26, WonderAction::HealMonster),
    (31, WonderAction::PolyMonster),
    (36, WonderAction::MagicMissile),
    (41, WonderAction::ConfuseMonster),
    (46, WonderAction::PoisonBall),
    (51, WonderAction::LightLine),
    (56, WonderAction::ElecBeam),
    (61, WonderAction::ColdBolt),
    (66, WonderAction::AcidBolt),
    (71, WonderAction::FireBolt),
    (76, WonderAction::DrainLife),
    (81, WonderAction::ElecBall),
    (86, WonderAction::AcidBall),
    (91, WonderAction::IceBall),
    (96, WonderAction::FireBall),
    (101, WonderAction::DrainLifeHeavy),
    (104, WonderAction::Earthquake),
    (106, WonderAction::DestroyArea),
    (108, WonderAction::Banish),
    (110, WonderAction::DispelMonsters),
    (i32::MAX, WonderAction::Finale),
];

/// The band a die roll lands in.
#[must_use]
pub fn wonder_band(die: i32) -> WonderAction {
    WONDER_BANDS
        .iter()
        .find(|&&(bound, _)| die < bound)
        .map(|&(_, action)| action)
        .unwrap_or(WonderAction::Finale)
}

/// Resolve one wonder roll. Returns whether the result was visible.
pub fn resolve_wonder(world: &mut GameWorld, dir: Option<Direction>, die: i32, beam: i32) -> bool {
    let plev = world.player.level;
    let mut visible = false;

    if die > 100 {
        world.msg("You feel a surge of power!");
        visible = true;
    }

    match wonder_band(die) {
        WonderAction::CloneMonster => visible = world.clone_monster(dir),
        WonderAction::SpeedMonster => visible = world.speed_monster(dir),
        WonderAction::HealMonster => visible = world.heal_monster(dir),
        WonderAction::PolyMonster => visible = world.poly_monster(dir),
        WonderAction::MagicMissile => {
            let dam = damroll(&mut world.rng, 3 + ((plev - 1) / 5), 4);
            visible = world.fire_bolt_or_beam(beam - 10, DamageType::Missile, dir, dam);
        }
        WonderAction::ConfuseMonster => visible = world.confuse_monster(dir, plev, false),
        WonderAction::PoisonBall => {
            visible = world.fire_ball(DamageType::Poison, dir, 20 + plev / 2, 3);
        }
        WonderAction::LightLine => visible = world.light_line(dir),
        WonderAction::ElecBeam => {
            let dam = damroll(&mut world.rng, 3 + (plev - 5) / 6, 6);
            visible = world.fire_beam(DamageType::Elec, dir, dam);
        }
        WonderAction::ColdBolt => {
            let dam = damroll(&mut world.rng, 5 + (plev - 5) / 4, 8);
            visible = world.fire_bolt_or_beam(beam - 10, DamageType::Cold, dir, dam);
        }
        WonderAction::AcidBolt => {
            let dam = damroll(&mut world.rng, 6 + (plev - 5) / 4, 8);
            visible = world.fire_bolt_or_beam(beam, DamageType::Acid, dir, dam);
        }
        WonderAction::FireBolt => {
            let dam = damroll(&mut world.rng, 8 + (plev - 5) / 4, 8);
            visible = world.fire_bolt_or_beam(beam, DamageType::Fire, dir, dam);
        }
        WonderAction::DrainLife => visible = world.drain_life(dir, 75),
        WonderAction::ElecBall => visible = world.fire_ball(DamageType::Elec, dir, 30 + plev / 2, 2),
        WonderAction::AcidBall => visible = world.fire_ball(DamageType::Acid, dir, 40 + plev, 2),
        WonderAction::IceBall => visible = world.fire_ball(DamageType::Ice, dir, 70 + plev, 3),
        WonderAction::FireBall => visible = world.fire_ball(DamageType::Fire, dir, 80 + plev, 3),
        // From here on the roll was above 100 and `visible` is already set.
        WonderAction::DrainLifeHeavy => {
            world.drain_life(dir, 100 + plev);
        }
        WonderAction::Earthquake => world.earthquake(12),
        WonderAction::DestroyArea => world.destroy_area(15, true),
        WonderAction::Banish => {
            world.banishment();
        }
        WonderAction::DispelMonsters => {
            world.dispel_monsters(120);
        }
        WonderAction::Finale => {
            world.dispel_monsters(150);
            world.slow_monsters();
            world.sleep_monsters(true);
            world.player.heal(300);
        }
    }

    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Monster;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(wonder_band(1), WonderAction::CloneMonster);
        assert_eq!(wonder_band(7), WonderAction::CloneMonster);
        assert_eq!(wonder_band(8), WonderAction::SpeedMonster);
        assert_eq!(wonder_band(25), WonderAction::HealMonster);
        assert_eq!(wonder_band(26), WonderAction::PolyMonster);
        assert_eq!(wonder_band(95), WonderAction::FireBall);
        assert_eq!(wonder_band(100), WonderAction::DrainLifeHeavy);
        assert_eq!(wonder_band(103), WonderAction::Earthquake);
        assert_eq!(wonder_band(105), WonderAction::DestroyArea);
        assert_eq!(wonder_band(107), WonderAction::Banish);
        assert_eq!(wonder_band(109), WonderAction::DispelMonsters);
        assert_eq!(wonder_band(110), WonderAction::Finale);
        assert_eq!(wonder_band(120), WonderAction::Finale);
    }

    #[test]
    fn test_bands_are_sorted_and_exhaustive() {
        let mut prev = 0;
        for (bound, _) in WONDER_BANDS {
            assert!(bound > prev);
            prev = bound;
        }
        assert_eq!(WONDER_BANDS[WONDER_BANDS.len() - 1].0, i32::MAX);
    }

    #[test]
    fn test_surge_roll_is_always_visible() {
        let mut world = GameWorld::new(42);
        // No monsters at all: the heavy drain hits nothing, but a surge
        // roll announces itself regardless.
        assert!(resolve_wonder(&mut world, None, 105, 0));
        assert_eq!(world.messages()[0].text, "You feel a surge of power!");
    }

    #[test]
    fn test_low_roll_visibility_tracks_the_action() {
        let mut world = GameWorld::new(42);
        // Die 1 tries to clone; with no target nothing is visible.
        assert!(!resolve_wonder(&mut world, None, 1, 0));
        assert!(world.messages().is_empty());
    }

    #[test]
    fn test_finale_heals_and_sweeps() {
        let mut world = GameWorld::new(42);
        let ppos = world.player.pos;
        world.player.hp = 10;
        world.monsters.push(Monster::new((ppos.0 + 2, ppos.1), 1000));

        assert!(resolve_wonder(&mut world, None, 111, 0));
        assert_eq!(world.player.hp, 100);
        assert_eq!(world.monsters[0].hp, 850);
        assert_eq!(world.monsters[0].speed, -1);
        assert!(world.monsters[0].asleep > 0);
    }
}
