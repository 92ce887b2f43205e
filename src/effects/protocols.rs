//! Shared sub-protocols used by many handlers.
//!
//! Most handlers are one-liners over these. Each helper encodes one of the
//! recurring contracts:
//!
//! - *obvious* timed application: the player always notices, even when the
//!   status is resisted;
//! - *observable* timed application: the player only notices when the
//!   timer actually changed;
//! - projections: firing at all is observable, regardless of what was hit.
//!
//! All helpers return the handler's "core action occurred" flag and write
//! observability into the context, keeping the two signals independent.

use crate::core::damroll;
use crate::player::{Stat, TimedStatus};
use crate::world::{DamageType, GameWorld, MessageKind};

use super::context::EffectContext;

/// Apply a timed status the player notices regardless of outcome.
pub fn inc_timed_obvious(
    world: &mut GameWorld,
    ctx: &mut EffectContext,
    status: TimedStatus,
    amount: i32,
) -> bool {
    world.player.inc_timed(status, amount);
    ctx.ident = true;
    true
}

/// Apply a timed status; observable only if the timer changed.
pub fn inc_timed_normal(
    world: &mut GameWorld,
    ctx: &mut EffectContext,
    status: TimedStatus,
    amount: i32,
) -> bool {
    ctx.ident = world.player.inc_timed(status, amount);
    true
}

/// Clear one timed status; observable only if it was active.
pub fn clear_timed_one(
    world: &mut GameWorld,
    ctx: &mut EffectContext,
    status: TimedStatus,
) -> bool {
    ctx.ident = world.player.clear_timed(status);
    true
}

/// Clear several timed statuses; observable if any of them was active.
pub fn clear_timed_many(
    world: &mut GameWorld,
    ctx: &mut EffectContext,
    statuses: &[TimedStatus],
) -> bool {
    let mut any = false;
    for &status in statuses {
        any |= world.player.clear_timed(status);
    }
    ctx.ident = any;
    true
}

/// Restore and permanently raise one stat.
pub fn stat_gain(world: &mut GameWorld, ctx: &mut EffectContext, stat: Stat) -> bool {
    ctx.ident = world.player.stat_gain(stat);
    true
}

/// Drain one stat, with 5d5 incidental damage. Always observed.
pub fn stat_lose(world: &mut GameWorld, ctx: &mut EffectContext, stat: Stat) -> bool {
    let dam = damroll(&mut world.rng, 5, 5);
    world.player.take_hit(dam, "stat drain");
    world.player.stat_dec(stat, false);
    ctx.ident = true;
    true
}

/// Restore one drained stat.
pub fn stat_restore_one(world: &mut GameWorld, ctx: &mut EffectContext, stat: Stat) -> bool {
    ctx.ident = world.player.stat_restore(stat);
    true
}

/// Restore every drained stat. Observability accumulates; an already-set
/// flag is never cleared (restoration rides along with other effects).
pub fn stat_restore_all(world: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let mut any = false;
    for stat in Stat::ALL {
        any |= world.player.stat_restore(stat);
    }
    if any {
        ctx.ident = true;
    }
    true
}

/// Permanently drain a random stat other than `target`; on success raise
/// `target`. The stat-swap potions.
pub fn stat_swap(world: &mut GameWorld, ctx: &mut EffectContext, target: Stat) -> bool {
    let victim = Stat::random_other(&mut world.rng, target);
    if world.player.stat_dec(victim, true) {
        world.player.stat_gain(target);
        ctx.ident = true;
    }
    true
}

/// Fire a bolt. Identifies on the attempt, hit or miss.
pub fn bolt(
    world: &mut GameWorld,
    ctx: &mut EffectContext,
    damage_type: DamageType,
    damage: i32,
) -> bool {
    world.fire_bolt(damage_type, ctx.dir, damage);
    ctx.ident = true;
    true
}

/// Fire a bolt, or a beam with the context's beam chance.
pub fn bolt_or_beam(
    world: &mut GameWorld,
    ctx: &mut EffectContext,
    damage_type: DamageType,
    damage: i32,
) -> bool {
    world.fire_bolt_or_beam(ctx.beam, damage_type, ctx.dir, damage);
    ctx.ident = true;
    true
}

/// Fire a ball of the given radius. Identifies on the attempt.
pub fn ball(
    world: &mut GameWorld,
    ctx: &mut EffectContext,
    damage_type: DamageType,
    damage: i32,
    radius: i32,
) -> bool {
    world.fire_ball(damage_type, ctx.dir, damage, radius);
    ctx.ident = true;
    true
}

/// One element of a multi-element breath attack.
#[derive(Clone, Copy, Debug)]
pub struct BreathVariant {
    pub msg_kind: MessageKind,
    pub damage_type: DamageType,
    pub name: &'static str,
}

impl BreathVariant {
    #[must_use]
    pub const fn new(msg_kind: MessageKind, damage_type: DamageType, name: &'static str) -> Self {
        Self {
            msg_kind,
            damage_type,
            name,
        }
    }
}

/// Breathe a single element: message, then a radius-2 ball.
pub fn breathe_one(
    world: &mut GameWorld,
    ctx: &mut EffectContext,
    damage: i32,
    variant: BreathVariant,
) -> bool {
    world.msgt(variant.msg_kind, format!("You breathe {}.", variant.name));
    world.fire_ball(variant.damage_type, ctx.dir, damage, 2);
    true
}

/// Breathe one element chosen uniformly from `variants`.
pub fn breathe_random(
    world: &mut GameWorld,
    ctx: &mut EffectContext,
    damage: i32,
    variants: &[BreathVariant],
) -> bool {
    let which = world.rng.choose_index(variants.len());
    breathe_one(world, ctx, damage, variants[which])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;
    use crate::world::Monster;

    fn setup() -> (GameWorld, EffectContext) {
        (GameWorld::new(42), EffectContext::new(true, None, 0, 0))
    }

    #[test]
    fn test_obvious_identifies_even_when_resisted() {
        let (mut world, mut ctx) = setup();
        world.player.resist.poison = true;
        assert!(inc_timed_obvious(
            &mut world,
            &mut ctx,
            TimedStatus::Poisoned,
            20
        ));
        assert!(ctx.ident);
        assert_eq!(world.player.timed(TimedStatus::Poisoned), 0);
    }

    #[test]
    fn test_normal_stays_silent_when_resisted() {
        let (mut world, mut ctx) = setup();
        world.player.resist.free_action = true;
        assert!(inc_timed_normal(
            &mut world,
            &mut ctx,
            TimedStatus::Paralyzed,
            10
        ));
        assert!(!ctx.ident);
    }

    #[test]
    fn test_clear_many_reports_any_active() {
        let (mut world, mut ctx) = setup();
        world.player.inc_timed(TimedStatus::Cut, 10);
        assert!(clear_timed_many(
            &mut world,
            &mut ctx,
            &[TimedStatus::Stunned, TimedStatus::Cut]
        ));
        assert!(ctx.ident);
        assert_eq!(world.player.timed(TimedStatus::Cut), 0);

        ctx.ident = false;
        assert!(clear_timed_many(
            &mut world,
            &mut ctx,
            &[TimedStatus::Stunned, TimedStatus::Cut]
        ));
        assert!(!ctx.ident);
    }

    #[test]
    fn test_stat_swap_drains_a_different_stat() {
        let (mut world, mut ctx) = setup();
        assert!(stat_swap(&mut world, &mut ctx, Stat::Str));
        assert!(ctx.ident);
        assert_eq!(world.player.stat(Stat::Str).cur, 11);
        let drained = Stat::ALL
            .iter()
            .filter(|&&s| world.player.stat(s).max < 10)
            .count();
        assert_eq!(drained, 1);
        assert_eq!(world.player.stat(Stat::Str).max, 11);
    }

    #[test]
    fn test_stat_restore_all_accumulates_ident() {
        let (mut world, mut ctx) = setup();
        ctx.ident = true;
        // Nothing drained: flag must survive.
        assert!(stat_restore_all(&mut world, &mut ctx));
        assert!(ctx.ident);
    }

    #[test]
    fn test_bolt_identifies_on_a_miss() {
        let (mut world, mut ctx) = setup();
        ctx.dir = Some(Direction::East);
        assert!(bolt(&mut world, &mut ctx, DamageType::Fire, 10));
        assert!(ctx.ident);
    }

    #[test]
    fn test_breathe_one_message_and_ball() {
        let mut world = GameWorld::new(42);
        let mut ctx = EffectContext::new(true, Some(Direction::East), 0, 0);
        let ppos = world.player.pos;
        world.monsters.push(Monster::new((ppos.0 + 3, ppos.1), 500));

        let variant = BreathVariant::new(MessageKind::BreatheFire, DamageType::Fire, "fire");
        assert!(breathe_one(&mut world, &mut ctx, 200, variant));
        assert_eq!(world.messages()[0].text, "You breathe fire.");
        assert_eq!(world.messages()[0].kind, MessageKind::BreatheFire);
        assert_eq!(world.monsters[0].hp, 300);
    }
}
