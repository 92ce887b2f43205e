//! End-to-end effect resolution scenarios.

use rogue_effects::core::Direction;
use rogue_effects::effects::{EffectKind, Effects};
use rogue_effects::player::TimedStatus;
use rogue_effects::world::{GameWorld, MessageKind, Monster};

fn resolve(effects: &Effects, world: &mut GameWorld, kind: EffectKind) -> (bool, bool) {
    resolve_aimed(effects, world, kind, None, 0)
}

fn resolve_aimed(
    effects: &Effects,
    world: &mut GameWorld,
    kind: EffectKind,
    dir: Option<Direction>,
    boost: i32,
) -> (bool, bool) {
    let mut ident = false;
    let completed = effects.resolve(world, kind.id(), &mut ident, true, dir, 0, boost);
    (completed, ident)
}

#[test]
fn test_invalid_id_does_not_mutate_state() {
    let effects = Effects::new();
    let mut world = GameWorld::new(7);
    let ppos = world.player.pos;
    world.monsters.push(Monster::new((ppos.0 + 2, ppos.1), 50));
    let snapshot_hp = world.player.hp;

    let mut ident = false;
    assert!(!effects.resolve(&mut world, 0, &mut ident, true, None, 0, 0));
    assert!(!effects.resolve(&mut world, 5000, &mut ident, true, None, 0, 0));

    assert!(!ident);
    assert_eq!(world.player.hp, snapshot_hp);
    assert_eq!(world.monsters[0].hp, 50);
    assert_eq!(world.messages().len(), 2);
    for m in world.messages() {
        assert!(m.text.starts_with("Bad effect"));
    }
}

#[test]
fn test_reserved_id_emits_single_notice() {
    let effects = Effects::new();
    let mut world = GameWorld::new(7);

    let (completed, ident) = resolve(&effects, &mut world, EffectKind::Reserved);
    assert!(!completed);
    assert!(!ident);
    assert_eq!(world.messages().len(), 1);
    assert_eq!(world.messages()[0].text, "Effect not handled.");
}

#[test]
fn test_boost_scales_bolt_damage() {
    let effects = Effects::new();
    // Twin worlds with the same seed roll the same 9d8.
    let mut plain = GameWorld::new(42);
    let mut boosted = GameWorld::new(42);
    for w in [&mut plain, &mut boosted] {
        let ppos = w.player.pos;
        w.monsters.push(Monster::new((ppos.0 + 2, ppos.1), 1000));
    }

    resolve_aimed(&effects, &mut plain, EffectKind::FireBolt, Some(Direction::East), 0);
    resolve_aimed(&effects, &mut boosted, EffectKind::FireBolt, Some(Direction::East), 50);

    let base = 1000 - plain.monsters[0].hp;
    let scaled = 1000 - boosted.monsters[0].hp;
    assert!((9..=72).contains(&base));
    assert_eq!(scaled, base * 150 / 100);
}

#[test]
fn test_bolt_identifies_even_without_target() {
    let effects = Effects::new();
    let mut world = GameWorld::new(42);

    let (completed, ident) =
        resolve_aimed(&effects, &mut world, EffectKind::FireBolt, Some(Direction::East), 0);
    assert!(completed);
    assert!(ident);
}

#[test]
fn test_cure_light_heals_but_clear_overwrites_ident() {
    let effects = Effects::new();
    let mut world = GameWorld::new(42);
    world.player.hp = 50;

    // Not blind, not cut, not confused: the blind-clear runs after the
    // heal and overwrites the flag. The heal still happens.
    let (completed, ident) = resolve(&effects, &mut world, EffectKind::CureLight);
    assert!(completed);
    assert!(!ident);
    assert_eq!(world.player.hp, 70);
}

#[test]
fn test_cure_light_observable_when_blind() {
    let effects = Effects::new();
    let mut world = GameWorld::new(42);
    world.player.inc_timed(TimedStatus::Blind, 10);

    let (completed, ident) = resolve(&effects, &mut world, EffectKind::CureLight);
    assert!(completed);
    assert!(ident);
    assert_eq!(world.player.timed(TimedStatus::Blind), 0);
}

#[test]
fn test_cure_critical_reports_any_cleared_status() {
    let effects = Effects::new();
    let mut world = GameWorld::new(42);
    // Only the first status in the list is active; any-of semantics must
    // still report it.
    world.player.inc_timed(TimedStatus::Blind, 10);

    let (_, ident) = resolve(&effects, &mut world, EffectKind::CureCritical);
    assert!(ident);

    // Nothing active and full health: completed but unobservable.
    let (completed, ident) = resolve(&effects, &mut world, EffectKind::CureCritical);
    assert!(completed);
    assert!(!ident);
}

#[test]
fn test_haste_sets_then_trickles() {
    let effects = Effects::new();
    let mut world = GameWorld::new(42);

    let (_, ident) = resolve(&effects, &mut world, EffectKind::Haste);
    assert!(ident);
    let fresh = world.player.timed(TimedStatus::Hasted);
    assert!((22..=40).contains(&fresh));

    // Already hasted: only a 5-turn trickle, and nothing new observed.
    let (_, ident) = resolve(&effects, &mut world, EffectKind::Haste);
    assert!(!ident);
    assert_eq!(world.player.timed(TimedStatus::Hasted), fresh + 5);
}

#[test]
fn test_deep_descent_blocked_at_bottom() {
    let effects = Effects::new();
    let mut world = GameWorld::new(42);
    world.player.depth = 126;
    world.player.max_depth = 126;

    let (completed, ident) = resolve(&effects, &mut world, EffectKind::DeepDescent);
    assert!(!completed);
    assert!(ident);
    assert_eq!(world.player.deep_descent, 0);
    assert_eq!(world.messages()[0].kind, MessageKind::TeleportLevel);
}

#[test]
fn test_deep_descent_arms_countdown() {
    let effects = Effects::new();
    let mut world = GameWorld::new(42);

    let (completed, ident) = resolve(&effects, &mut world, EffectKind::DeepDescent);
    assert!(completed);
    assert!(ident);
    assert!((4..=7).contains(&world.player.deep_descent));
}

#[test]
fn test_trap_door_descends_and_caps() {
    let effects = Effects::new();
    let mut world = GameWorld::new(42);
    world.player.depth = 5;
    world.player.max_depth = 5;

    let (completed, _) = resolve(&effects, &mut world, EffectKind::TrapDoor);
    assert!(completed);
    assert_eq!(world.player.depth, 6);
    assert_eq!(world.player.max_depth, 6);
    assert!(world.player.hp < world.player.max_hp);
}

#[test]
fn test_trap_door_feather_fall_spares_damage() {
    let effects = Effects::new();
    let mut world = GameWorld::new(42);
    world.player.resist.feather_fall = true;

    resolve(&effects, &mut world, EffectKind::TrapDoor);
    assert_eq!(world.player.hp, world.player.max_hp);
    assert_eq!(
        world.messages()[1].text,
        "You float gently down to the next level."
    );
}

#[test]
fn test_star_ball_needs_no_direction() {
    let effects = Effects::new();
    let mut world = GameWorld::new(42);
    let ppos = world.player.pos;
    world.monsters.push(Monster::new((ppos.0 + 2, ppos.1), 1000));
    world.monsters.push(Monster::new((ppos.0 - 2, ppos.1), 1000));

    let (completed, ident) = resolve(&effects, &mut world, EffectKind::StarBall);
    assert!(completed);
    assert!(ident);
    // Every monster around the player is caught by at least one of the
    // eight detonations.
    assert!(world.monsters.iter().all(|m| m.hp < 1000));
}

#[test]
fn test_multihued_breath_is_uniform_over_variants() {
    let effects = Effects::new();
    let mut counts = std::collections::HashMap::new();

    const TRIALS: i64 = 2000;
    for seed in 0..TRIALS {
        let mut world = GameWorld::new(seed as u64);
        resolve_aimed(
            &effects,
            &mut world,
            EffectKind::DragonMultihued,
            Some(Direction::East),
            0,
        );
        *counts.entry(world.messages()[0].kind).or_insert(0i64) += 1;
    }

    assert_eq!(counts.len(), 5);
    // Each variant should land near TRIALS / 5; the band is about five
    // standard deviations wide, so a uniform draw clears it comfortably
    // and a skewed one does not.
    let expected = TRIALS / 5;
    for kind in [
        MessageKind::BreatheElec,
        MessageKind::BreatheFrost,
        MessageKind::BreatheAcid,
        MessageKind::BreatheGas,
        MessageKind::BreatheFire,
    ] {
        let n = counts.get(&kind).copied().unwrap_or(0);
        assert!(
            (n - expected).abs() < 90,
            "{kind:?} drawn {n} times, expected about {expected}"
        );
    }
}

#[test]
fn test_resolution_is_deterministic() {
    let effects = Effects::new();
    let script = [
        EffectKind::FireBall,
        EffectKind::Wonder,
        EffectKind::CureCritical,
        EffectKind::TelePhase,
        EffectKind::DragonChaos,
    ];

    let run = |seed: u64| {
        let mut world = GameWorld::new(seed);
        let ppos = world.player.pos;
        world.monsters.push(Monster::new((ppos.0 + 3, ppos.1), 5000));
        for kind in script {
            resolve_aimed(&effects, &mut world, kind, Some(Direction::East), 17);
        }
        (
            world.player.pos,
            world.monsters.first().map(|m| m.hp),
            world.take_messages(),
        )
    };

    assert_eq!(run(99), run(99));
    assert_eq!(run(100), run(100));
}

#[test]
fn test_registry_describes_every_id() {
    let effects = Effects::new();
    let registry = effects.registry();

    for kind in EffectKind::ALL {
        let desc = registry.desc(kind.id());
        assert!(desc.is_some_and(|d| !d.is_empty()), "no desc for {kind:?}");
    }
    assert!(registry.aim(EffectKind::FireBolt.id()));
    assert!(registry.aim(EffectKind::Wonder.id()));
    assert!(!registry.aim(EffectKind::CureLight.id()));
    assert!(!registry.aim(EffectKind::StarBall.id()));
    assert!(registry.lookup(0).is_none());
}

#[test]
fn test_gain_exp_stops_at_ceiling() {
    let effects = Effects::new();
    let mut world = GameWorld::new(42);

    let (completed, ident) = resolve(&effects, &mut world, EffectKind::GainExp);
    assert!(completed);
    assert!(ident);
    assert_eq!(world.player.exp, 100_000);

    world.player.exp = rogue_effects::player::MAX_EXP;
    let (completed, ident) = resolve(&effects, &mut world, EffectKind::GainExp);
    // Still consumed, but a maxed character learns nothing.
    assert!(completed);
    assert!(!ident);
}

#[test]
fn test_remove_curse_message_depends_on_sight() {
    let effects = Effects::new();

    let mut world = GameWorld::new(42);
    world.items.weapon_cursed = true;
    let (_, ident) = resolve(&effects, &mut world, EffectKind::RemoveCurse);
    assert!(ident);
    assert!(world.messages()[0].text.contains("glows blue"));

    let mut world = GameWorld::new(42);
    world.items.armor_cursed = true;
    world.player.inc_timed(TimedStatus::Blind, 10);
    resolve(&effects, &mut world, EffectKind::RemoveCurse);
    assert_eq!(
        world.messages()[0].text,
        "You feel as if someone is watching over you."
    );
}

#[test]
fn test_satisfy_fills_the_stomach() {
    let effects = Effects::new();
    let mut world = GameWorld::new(42);

    let (_, ident) = resolve(&effects, &mut world, EffectKind::Satisfy);
    assert!(ident);
    assert_eq!(world.player.food, rogue_effects::player::FOOD_MAX - 1);

    // Second helping changes nothing.
    let (completed, ident) = resolve(&effects, &mut world, EffectKind::Satisfy);
    assert!(completed);
    assert!(!ident);
}

#[test]
fn test_stat_swap_moves_points_around() {
    use rogue_effects::player::Stat;

    let effects = Effects::new();
    let mut world = GameWorld::new(42);

    let (_, ident) = resolve(&effects, &mut world, EffectKind::Brawn);
    assert!(ident);
    assert_eq!(world.player.stat(Stat::Str).cur, 11);
    let drained = Stat::ALL
        .iter()
        .filter(|&&s| world.player.stat(s).max < 10)
        .count();
    assert_eq!(drained, 1);
}

#[test]
fn test_banishment_clears_level_and_hurts() {
    let effects = Effects::new();
    let mut world = GameWorld::new(42);
    let ppos = world.player.pos;
    world.monsters.push(Monster::new((ppos.0 + 2, ppos.1), 30));
    world.monsters.push(Monster::new((ppos.0 + 4, ppos.1), 30));

    let (completed, ident) = resolve(&effects, &mut world, EffectKind::Banishment);
    assert!(completed);
    assert!(ident);
    assert!(world.monsters.is_empty());
    assert!(world.player.hp < world.player.max_hp);
}

#[test]
fn test_wonder_consumes_the_charge_on_any_roll() {
    let effects = Effects::new();
    for seed in 0..50 {
        let mut world = GameWorld::new(seed);
        let (completed, _) =
            resolve_aimed(&effects, &mut world, EffectKind::Wonder, Some(Direction::East), 0);
        assert!(completed, "seed {seed}");
    }
}
