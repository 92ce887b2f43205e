//! The effect handler catalog.
//!
//! One function per effect kind, almost all of them thin compositions of
//! the shared sub-protocols in [`super::protocols`]. The table at the
//! bottom maps every kind to its handler; a kind with no handler (only
//! `Reserved` today) falls through to the dispatcher's not-handled path.

use crate::core::{damroll, Direction};
use crate::player::{Stat, TimedStatus, FOOD_FAINT, FOOD_MAX, FOOD_STARVE, MAX_DEPTH, MAX_EXP};
use crate::world::{DamageType, GameWorld, MessageKind, SummonKind};

use super::context::EffectContext;
use super::kind::EffectKind;
use super::protocols::{
    ball, bolt, bolt_or_beam, breathe_one, breathe_random, clear_timed_many, clear_timed_one,
    inc_timed_normal, inc_timed_obvious, stat_gain, stat_lose, stat_restore_all, stat_restore_one,
    stat_swap, BreathVariant,
};
use super::wonder::resolve_wonder;

/// Signature every handler shares.
pub type Handler = fn(&mut GameWorld, &mut EffectContext) -> bool;

// === Timed afflictions ===

fn poison(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dur = damroll(&mut w.rng, 2, 7) + 10;
    inc_timed_obvious(w, ctx, TimedStatus::Poisoned, dur)
}

fn blind(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dur = damroll(&mut w.rng, 4, 25) + 75;
    inc_timed_obvious(w, ctx, TimedStatus::Blind, dur)
}

fn scare(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dur = w.rng.randint0(10) + 10;
    inc_timed_obvious(w, ctx, TimedStatus::Afraid, dur)
}

fn confuse(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dur = damroll(&mut w.rng, 4, 5) + 10;
    inc_timed_obvious(w, ctx, TimedStatus::Confused, dur)
}

fn halluc(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dur = w.rng.randint0(250) + 250;
    inc_timed_obvious(w, ctx, TimedStatus::Hallucinating, dur)
}

fn paralyze(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dur = w.rng.randint0(5) + 5;
    inc_timed_obvious(w, ctx, TimedStatus::Paralyzed, dur)
}

fn slow(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dur = w.rng.randint1(25) + 15;
    inc_timed_normal(w, ctx, TimedStatus::Slowed, dur)
}

// === Cures and heals ===

fn cure_poison(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    clear_timed_one(w, ctx, TimedStatus::Poisoned)
}

fn cure_blindness(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    clear_timed_one(w, ctx, TimedStatus::Blind)
}

fn cure_paranoia(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    clear_timed_one(w, ctx, TimedStatus::Afraid)
}

fn cure_confusion(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    clear_timed_one(w, ctx, TimedStatus::Confused)
}

fn cure_mind(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.player.mana_gain(10) {
        ctx.ident = true;
    }
    clear_timed_many(
        w,
        ctx,
        &[
            TimedStatus::Confused,
            TimedStatus::Afraid,
            TimedStatus::Hallucinating,
        ],
    );
    let dur = 12 + damroll(&mut w.rng, 6, 10);
    if !w.player.resist.confusion && w.player.inc_timed(TimedStatus::OppConf, dur) {
        ctx.ident = true;
    }
    if ctx.ident {
        w.msg("Your feel your head clear.");
    }
    true
}

fn cure_body(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.player.heal(30) {
        ctx.ident = true;
    }
    clear_timed_many(
        w,
        ctx,
        &[
            TimedStatus::Stunned,
            TimedStatus::Cut,
            TimedStatus::Poisoned,
            TimedStatus::Blind,
        ],
    )
}

fn cure_light(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.player.heal(20) {
        ctx.ident = true;
    }
    clear_timed_one(w, ctx, TimedStatus::Blind);
    if w.player.dec_timed(TimedStatus::Cut, 20) {
        ctx.ident = true;
    }
    if w.player.dec_timed(TimedStatus::Confused, 20) {
        ctx.ident = true;
    }
    true
}

fn cure_serious(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.player.heal(40) {
        ctx.ident = true;
    }
    clear_timed_many(
        w,
        ctx,
        &[TimedStatus::Cut, TimedStatus::Blind, TimedStatus::Confused],
    )
}

const CRITICAL_CURES: [TimedStatus; 6] = [
    TimedStatus::Blind,
    TimedStatus::Confused,
    TimedStatus::Poisoned,
    TimedStatus::Stunned,
    TimedStatus::Cut,
    TimedStatus::Amnesia,
];

fn cure_critical(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.player.heal(60) {
        ctx.ident = true;
    }
    clear_timed_many(w, ctx, &CRITICAL_CURES)
}

fn cure_full(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let amt = (w.player.max_hp * 35 / 100).max(300);
    if w.player.heal(amt) {
        ctx.ident = true;
    }
    clear_timed_many(w, ctx, &CRITICAL_CURES)
}

fn cure_full2(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.player.heal(1200) {
        ctx.ident = true;
    }
    clear_timed_many(w, ctx, &CRITICAL_CURES)
}

fn cure_temp(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    clear_timed_many(
        w,
        ctx,
        &[
            TimedStatus::Blind,
            TimedStatus::Confused,
            TimedStatus::Poisoned,
            TimedStatus::Stunned,
            TimedStatus::Cut,
        ],
    )
}

fn heal1(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.player.heal(500) {
        ctx.ident = true;
    }
    clear_timed_one(w, ctx, TimedStatus::Cut)
}

fn heal2(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.player.heal(1000) {
        ctx.ident = true;
    }
    clear_timed_one(w, ctx, TimedStatus::Cut)
}

fn heal3(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.player.heal(500) {
        ctx.ident = true;
    }
    clear_timed_many(w, ctx, &[TimedStatus::Stunned, TimedStatus::Cut])
}

// === Experience and mana ===

fn gain_exp(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.player.exp < MAX_EXP {
        w.msg("You feel more experienced.");
        w.player.exp_gain(100_000);
        ctx.ident = true;
    }
    true
}

fn lose_exp(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if !w.player.resist.hold_life && w.player.exp > 0 {
        w.msg("You feel your memories fade.");
        let loss = w.player.exp / 4;
        w.player.exp_lose(loss);
    }
    ctx.ident = true;
    true
}

fn restore_exp(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.player.restore_level() {
        ctx.ident = true;
    }
    true
}

fn restore_mana(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.player.restore_mana() {
        w.msg("Your feel your head clear.");
        ctx.ident = true;
    }
    true
}

// === Stats ===

fn gain_str(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    stat_gain(w, ctx, Stat::Str)
}

fn gain_int(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    stat_gain(w, ctx, Stat::Int)
}

fn gain_wis(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    stat_gain(w, ctx, Stat::Wis)
}

fn gain_dex(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    stat_gain(w, ctx, Stat::Dex)
}

fn gain_con(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    stat_gain(w, ctx, Stat::Con)
}

fn gain_all(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    for stat in Stat::ALL {
        stat_gain(w, ctx, stat);
    }
    true
}

fn brawn(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    stat_swap(w, ctx, Stat::Str)
}

fn intellect(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    stat_swap(w, ctx, Stat::Int)
}

fn contemplation(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    stat_swap(w, ctx, Stat::Wis)
}

fn toughness(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    stat_swap(w, ctx, Stat::Con)
}

fn nimbleness(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    stat_swap(w, ctx, Stat::Dex)
}

fn lose_str(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    stat_lose(w, ctx, Stat::Str)
}

fn lose_int(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    stat_lose(w, ctx, Stat::Int)
}

fn lose_wis(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    stat_lose(w, ctx, Stat::Wis)
}

fn lose_dex(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    stat_lose(w, ctx, Stat::Dex)
}

fn lose_con(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    stat_lose(w, ctx, Stat::Con)
}

fn lose_con2(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = damroll(&mut w.rng, 10, 10);
    w.player.take_hit(dam, "poisonous food");
    w.player.stat_dec(Stat::Con, false);
    ctx.ident = true;
    true
}

fn restore_str(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    stat_restore_one(w, ctx, Stat::Str)
}

fn restore_int(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    stat_restore_one(w, ctx, Stat::Int)
}

fn restore_wis(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    stat_restore_one(w, ctx, Stat::Wis)
}

fn restore_dex(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    stat_restore_one(w, ctx, Stat::Dex)
}

fn restore_con(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    stat_restore_one(w, ctx, Stat::Con)
}

fn cure_nonorlybig(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    w.msg("You feel life flow through your body!");
    w.player.restore_level();
    clear_timed_many(
        w,
        ctx,
        &[
            TimedStatus::Blind,
            TimedStatus::Confused,
            TimedStatus::Poisoned,
            TimedStatus::Stunned,
            TimedStatus::Cut,
            TimedStatus::Amnesia,
            TimedStatus::Hallucinating,
        ],
    );
    stat_restore_all(w, ctx);
    w.player.heal(5000);
    ctx.ident = true;
    true
}

fn restore_all(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    stat_restore_all(w, ctx)
}

fn restore_st_lev(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.player.restore_level() {
        ctx.ident = true;
    }
    stat_restore_all(w, ctx)
}

// === Temporary enhancements ===

fn tmd_infra(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dur = 100 + damroll(&mut w.rng, 4, 25);
    inc_timed_normal(w, ctx, TimedStatus::Infravision, dur)
}

fn tmd_sinvis(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    clear_timed_one(w, ctx, TimedStatus::Blind);
    let dur = 12 + damroll(&mut w.rng, 2, 6);
    inc_timed_normal(w, ctx, TimedStatus::SeeInvisible, dur)
}

fn tmd_esp(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    clear_timed_one(w, ctx, TimedStatus::Blind);
    let dur = 24 + damroll(&mut w.rng, 9, 9);
    inc_timed_normal(w, ctx, TimedStatus::Telepathy, dur)
}

fn enlightenment(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    w.msg("An image of your surroundings forms in your mind...");
    w.wiz_light(true);
    ctx.ident = true;
    true
}

fn enlightenment2(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    w.msg("You begin to feel more enlightened...");
    w.wiz_light(true);
    w.player.stat_gain(Stat::Int);
    w.player.stat_gain(Stat::Wis);
    w.detect_traps(true);
    w.detect_doorstairs(true);
    w.detect_treasure(true, true);
    w.detect_monsters_entire_level();
    w.identify_pack();
    ctx.ident = true;
    true
}

fn hero(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dur = w.rng.randint1(25) + 25;
    if w.player.heal(10) {
        ctx.ident = true;
    }
    clear_timed_one(w, ctx, TimedStatus::Afraid);
    inc_timed_normal(w, ctx, TimedStatus::Bold, dur);
    inc_timed_normal(w, ctx, TimedStatus::Heroism, dur);
    true
}

fn shero(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dur = w.rng.randint1(25) + 25;
    if w.player.heal(30) {
        ctx.ident = true;
    }
    clear_timed_one(w, ctx, TimedStatus::Afraid);
    inc_timed_normal(w, ctx, TimedStatus::Bold, dur);
    inc_timed_normal(w, ctx, TimedStatus::Berserk, dur);
    true
}

fn resist_one(
    w: &mut GameWorld,
    ctx: &mut EffectContext,
    status: TimedStatus,
) -> bool {
    let dur = w.rng.randint1(10) + 10;
    inc_timed_normal(w, ctx, status, dur)
}

fn resist_acid(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    resist_one(w, ctx, TimedStatus::OppAcid)
}

fn resist_elec(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    resist_one(w, ctx, TimedStatus::OppElec)
}

fn resist_fire(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    resist_one(w, ctx, TimedStatus::OppFire)
}

fn resist_cold(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    resist_one(w, ctx, TimedStatus::OppCold)
}

fn resist_pois(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    resist_one(w, ctx, TimedStatus::OppPoison)
}

const OPPOSITIONS: [TimedStatus; 5] = [
    TimedStatus::OppAcid,
    TimedStatus::OppElec,
    TimedStatus::OppFire,
    TimedStatus::OppCold,
    TimedStatus::OppPoison,
];

fn resist_all(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    for status in OPPOSITIONS {
        let dur = w.rng.randint1(20) + 20;
        inc_timed_normal(w, ctx, status, dur);
    }
    true
}

// === Detection ===

fn detect_treasure(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.detect_treasure(ctx.aware, false) {
        ctx.ident = true;
    }
    true
}

fn detect_trap(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.detect_traps(ctx.aware) {
        ctx.ident = true;
    }
    true
}

fn detect_doorstair(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.detect_doorstairs(ctx.aware) {
        ctx.ident = true;
    }
    true
}

fn detect_invis(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.detect_monsters_invis(ctx.aware) {
        ctx.ident = true;
    }
    true
}

fn detect_evil(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.detect_monsters_evil(ctx.aware) {
        ctx.ident = true;
    }
    true
}

fn detect_all(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.detect_all(ctx.aware) {
        ctx.ident = true;
    }
    true
}

// === Items ===

fn enchant_tohit(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    ctx.ident = true;
    w.enchant(1, 0, 0)
}

fn enchant_todam(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    ctx.ident = true;
    w.enchant(0, 1, 0)
}

fn enchant_weapon(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    ctx.ident = true;
    let to_hit = w.rng.randint1(3);
    let to_dam = w.rng.randint1(3);
    w.enchant(to_hit, to_dam, 0)
}

fn enchant_armor(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    ctx.ident = true;
    w.enchant(0, 0, 1)
}

fn enchant_armor2(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    ctx.ident = true;
    let to_ac = w.rng.randint1(3) + 2;
    w.enchant(0, 0, to_ac)
}

fn restore_item(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    ctx.ident = true;
    w.restore_item()
}

fn identify(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    ctx.ident = true;
    w.identify_item()
}

fn remove_curse(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.remove_curse() {
        if w.player.timed(TimedStatus::Blind) == 0 {
            w.msg("The air around your body glows blue for a moment...");
        } else {
            w.msg("You feel as if someone is watching over you.");
        }
        ctx.ident = true;
    }
    true
}

fn remove_curse2(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    w.remove_all_curse();
    ctx.ident = true;
    true
}

fn light(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = damroll(&mut w.rng, 2, 8);
    if w.light_area(dam, 2) {
        ctx.ident = true;
    }
    true
}

// === Summons and teleports ===

fn summon_mon(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let count = w.rng.randint1(3);
    let depth = w.dungeon.depth;
    w.msgt(MessageKind::SummonMonster, "You hear distant chittering.");
    for _ in 0..count {
        if w.summon_specific(SummonKind::Any, depth) {
            ctx.ident = true;
        }
    }
    true
}

fn summon_undead(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let count = w.rng.randint1(3);
    let depth = w.dungeon.depth;
    w.msgt(MessageKind::SummonUndead, "You hear dry bones rattle.");
    for _ in 0..count {
        if w.summon_specific(SummonKind::Undead, depth) {
            ctx.ident = true;
        }
    }
    true
}

fn tele_phase(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    w.teleport_player(10);
    ctx.ident = true;
    true
}

fn tele_long(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    w.teleport_player(100);
    ctx.ident = true;
    true
}

fn tele_level(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    w.teleport_player_level();
    ctx.ident = true;
    true
}

fn confusing(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if !w.player.confusing_touch {
        w.msg("Your hands begin to glow.");
        w.player.confusing_touch = true;
        ctx.ident = true;
    }
    true
}

fn mapping(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    w.map_area();
    ctx.ident = true;
    true
}

fn rune(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    w.warding_glyph();
    ctx.ident = true;
    true
}

fn acquire(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    w.acquirement(1);
    ctx.ident = true;
    true
}

fn acquire2(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let count = w.rng.randint1(2) + 1;
    w.acquirement(count);
    ctx.ident = true;
    true
}

fn annoy_mon(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    w.msg("There is a high pitched humming noise.");
    w.aggravate_monsters();
    ctx.ident = true;
    true
}

fn create_trap(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    w.trap_creation();
    w.msg("You hear a low-pitched whistling sound.");
    ctx.ident = true;
    true
}

fn destroy_tdoors(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.destroy_doors_touch() {
        ctx.ident = true;
    }
    true
}

fn recharge(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    ctx.ident = true;
    w.recharge(60)
}

fn banishment(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    ctx.ident = true;
    w.banishment()
}

fn darkness(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if !w.player.resist.dark {
        let dur = 3 + w.rng.randint1(5);
        w.player.inc_timed(TimedStatus::Blind, dur);
    }
    w.unlight_area(10, 3);
    ctx.ident = true;
    true
}

fn protevil(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dur = w.rng.randint1(25) + 3 * w.player.level;
    if w.player.inc_timed(TimedStatus::ProtEvil, dur) {
        ctx.ident = true;
    }
    true
}

fn satisfy(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.player.set_food(FOOD_MAX - 1) {
        ctx.ident = true;
    }
    true
}

fn curse_weapon(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.curse_weapon() {
        w.msg("A terrible black aura blasts your weapon!");
        ctx.ident = true;
    }
    true
}

fn curse_armor(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.curse_armor() {
        w.msg("A terrible black aura blasts your armour!");
        ctx.ident = true;
    }
    true
}

fn blessing(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dur = w.rng.randint1(12) + 6;
    inc_timed_normal(w, ctx, TimedStatus::Blessed, dur)
}

fn blessing2(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dur = w.rng.randint1(24) + 12;
    inc_timed_normal(w, ctx, TimedStatus::Blessed, dur)
}

fn blessing3(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dur = w.rng.randint1(48) + 24;
    inc_timed_normal(w, ctx, TimedStatus::Blessed, dur)
}

fn recall(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    ctx.ident = true;
    w.set_recall()
}

fn deep_descent(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let target_depth = (w.player.max_depth + 5).min(MAX_DEPTH - 1);
    if target_depth > w.player.depth {
        w.msgt(MessageKind::TeleportLevel, "The air around you starts to swirl...");
        w.player.deep_descent = 3 + w.rng.randint1(4);
        ctx.ident = true;
        true
    } else {
        w.msgt(
            MessageKind::TeleportLevel,
            "You sense a malevolent presence blocking passage to the levels below.",
        );
        ctx.ident = true;
        false
    }
}

// === Level-wide monster effects ===

fn loshaste(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.speed_monsters() {
        ctx.ident = true;
    }
    true
}

fn lossleep(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.sleep_monsters(ctx.aware) {
        ctx.ident = true;
    }
    true
}

fn losslow(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.slow_monsters() {
        ctx.ident = true;
    }
    true
}

fn losconf(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.confuse_monsters(ctx.aware) {
        ctx.ident = true;
    }
    true
}

fn loskill(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    w.mass_banishment();
    ctx.ident = true;
    true
}

fn earthquakes(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    w.earthquake(10);
    ctx.ident = true;
    true
}

fn destruction2(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    w.destroy_area(15, true);
    ctx.ident = true;
    true
}

fn illumination(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = damroll(&mut w.rng, 2, 15);
    if w.light_area(dam, 3) {
        ctx.ident = true;
    }
    true
}

fn clairvoyance(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    ctx.ident = true;
    w.wiz_light(false);
    w.detect_traps(true);
    w.detect_doorstairs(true);
    true
}

fn probing(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    ctx.ident = w.probing();
    true
}

fn stone_to_mud(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.wall_to_mud(ctx.dir) {
        ctx.ident = true;
    }
    true
}

fn confuse2(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    ctx.ident = true;
    w.confuse_monster(ctx.dir, 20, ctx.aware);
    true
}

/// The infamous ring cascade: a 1d10 roll picks between a malignant aura,
/// a sweeping dispel, and raw mana destruction.
fn ring_of_power(w: &mut GameWorld, dir: Option<Direction>) {
    match w.rng.randint1(10) {
        1 | 2 => {
            w.msg("You are surrounded by a malignant aura.");
            for stat in Stat::ALL {
                w.player.stat_dec(stat, true);
            }
            let loss = w.player.exp / 4;
            w.player.exp_lose(loss);
        }
        3 => {
            w.msg("You are surrounded by a powerful aura.");
            w.dispel_monsters(1000);
        }
        4..=6 => {
            w.fire_ball(DamageType::Mana, dir, 300, 3);
        }
        _ => {
            w.fire_bolt(DamageType::Mana, dir, 250);
        }
    }
}

fn bizarre(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    ctx.ident = true;
    ring_of_power(w, ctx.dir);
    true
}

fn star_ball(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    ctx.ident = true;
    let dam = ctx.boosted(150);
    for dir in Direction::ALL {
        w.fire_ball(DamageType::Elec, Some(dir), dam, 3);
    }
    true
}

fn rage_bless_resist(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dur = w.rng.randint1(50) + 50;
    ctx.ident = true;
    w.player.heal(30);
    w.player.clear_timed(TimedStatus::Afraid);
    w.player.inc_timed(TimedStatus::Bold, dur);
    w.player.inc_timed(TimedStatus::Berserk, dur);
    let bless = w.rng.randint1(50) + 50;
    w.player.inc_timed(TimedStatus::Blessed, bless);
    for status in OPPOSITIONS {
        let opp = w.rng.randint1(50) + 50;
        w.player.inc_timed(status, opp);
    }
    true
}

fn sleep2(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    ctx.ident = true;
    w.sleep_monsters_touch(ctx.aware);
    true
}

fn restore_life(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    ctx.ident = true;
    w.player.restore_level();
    true
}

// === Offensive projections ===

fn missile(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(damroll(&mut w.rng, 3, 4));
    bolt_or_beam(w, ctx, DamageType::Missile, dam)
}

fn dispel_evil(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    ctx.ident = true;
    let dam = ctx.boosted(w.player.level * 5);
    w.dispel_evil(dam);
    true
}

fn dispel_evil60(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(60);
    if w.dispel_evil(dam) {
        ctx.ident = true;
    }
    true
}

fn dispel_undead(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(60);
    if w.dispel_undead(dam) {
        ctx.ident = true;
    }
    true
}

fn dispel_all(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(120);
    if w.dispel_monsters(dam) {
        ctx.ident = true;
    }
    true
}

/// Fresh haste sets the timer; stacked haste only trickles.
fn haste_for(w: &mut GameWorld, ctx: &mut EffectContext, fresh: i32) -> bool {
    if w.player.timed(TimedStatus::Hasted) == 0 {
        if w.player.set_timed(TimedStatus::Hasted, fresh) {
            ctx.ident = true;
        }
    } else {
        w.player.inc_timed(TimedStatus::Hasted, 5);
    }
    true
}

fn haste(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let fresh = damroll(&mut w.rng, 2, 10) + 20;
    haste_for(w, ctx, fresh)
}

fn haste1(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let fresh = w.rng.randint1(20) + 20;
    haste_for(w, ctx, fresh)
}

fn haste2(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let fresh = w.rng.randint1(75) + 75;
    haste_for(w, ctx, fresh)
}

fn fire_bolt(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(damroll(&mut w.rng, 9, 8));
    bolt(w, ctx, DamageType::Fire, dam)
}

fn fire_bolt2(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(damroll(&mut w.rng, 12, 8));
    bolt_or_beam(w, ctx, DamageType::Fire, dam)
}

fn fire_bolt3(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(damroll(&mut w.rng, 16, 8));
    bolt_or_beam(w, ctx, DamageType::Fire, dam)
}

fn fire_bolt72(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(72);
    ball(w, ctx, DamageType::Fire, dam, 2)
}

fn fire_ball(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(144);
    ball(w, ctx, DamageType::Fire, dam, 2)
}

fn fire_ball2(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(120);
    ball(w, ctx, DamageType::Fire, dam, 3)
}

fn fire_ball200(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(200);
    ball(w, ctx, DamageType::Fire, dam, 3)
}

fn cold_bolt(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(damroll(&mut w.rng, 6, 8));
    bolt_or_beam(w, ctx, DamageType::Cold, dam)
}

fn cold_bolt2(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(damroll(&mut w.rng, 12, 8));
    bolt(w, ctx, DamageType::Cold, dam)
}

fn cold_ball2(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(200);
    ball(w, ctx, DamageType::Cold, dam, 3)
}

fn cold_ball50(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(50);
    ball(w, ctx, DamageType::Cold, dam, 2)
}

fn cold_ball100(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(100);
    ball(w, ctx, DamageType::Cold, dam, 2)
}

fn cold_ball160(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(160);
    ball(w, ctx, DamageType::Cold, dam, 3)
}

fn acid_bolt(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(damroll(&mut w.rng, 5, 8));
    bolt(w, ctx, DamageType::Acid, dam)
}

fn acid_bolt2(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(damroll(&mut w.rng, 10, 8));
    bolt_or_beam(w, ctx, DamageType::Acid, dam)
}

fn acid_bolt3(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(damroll(&mut w.rng, 12, 8));
    bolt_or_beam(w, ctx, DamageType::Acid, dam)
}

fn acid_ball(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(120);
    ball(w, ctx, DamageType::Acid, dam, 2)
}

fn elec_bolt(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(damroll(&mut w.rng, 6, 6));
    ctx.ident = true;
    w.fire_beam(DamageType::Elec, ctx.dir, dam);
    true
}

fn elec_ball(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(64);
    ball(w, ctx, DamageType::Elec, dam, 2)
}

fn elec_ball2(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(250);
    ball(w, ctx, DamageType::Elec, dam, 3)
}

fn arrow(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(150);
    bolt(w, ctx, DamageType::Arrow, dam)
}

fn rem_fear_pois(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    ctx.ident = true;
    w.player.clear_timed(TimedStatus::Afraid);
    w.player.clear_timed(TimedStatus::Poisoned);
    true
}

fn stinking_cloud(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(12);
    ball(w, ctx, DamageType::Poison, dam, 3)
}

fn drain_life_for(w: &mut GameWorld, ctx: &mut EffectContext, base: i32) -> bool {
    let dam = ctx.boosted(base);
    if w.drain_life(ctx.dir, dam) {
        ctx.ident = true;
    }
    true
}

fn drain_life1(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    drain_life_for(w, ctx, 90)
}

fn drain_life2(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    drain_life_for(w, ctx, 120)
}

fn drain_life3(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    drain_life_for(w, ctx, 150)
}

fn drain_life4(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    drain_life_for(w, ctx, 250)
}

fn firebrand(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    ctx.ident = true;
    w.brand_bolts()
}

fn mana_bolt(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(damroll(&mut w.rng, 12, 8));
    bolt(w, ctx, DamageType::Mana, dam)
}

// === Single-monster effects ===

fn mon_heal(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.heal_monster(ctx.dir) {
        ctx.ident = true;
    }
    true
}

fn mon_haste(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.speed_monster(ctx.dir) {
        ctx.ident = true;
    }
    true
}

fn mon_slow(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.slow_monster(ctx.dir) {
        ctx.ident = true;
    }
    true
}

fn mon_confuse(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.confuse_monster(ctx.dir, 10, ctx.aware) {
        ctx.ident = true;
    }
    true
}

fn mon_sleep(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.sleep_monster(ctx.dir, ctx.aware) {
        ctx.ident = true;
    }
    true
}

fn mon_clone(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.clone_monster(ctx.dir) {
        ctx.ident = true;
    }
    true
}

fn mon_scare(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.fear_monster(ctx.dir, 10, ctx.aware) {
        ctx.ident = true;
    }
    true
}

fn light_line(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    w.msg("A line of shimmering blue light appears.");
    w.light_line(ctx.dir);
    ctx.ident = true;
    true
}

fn tele_other(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.teleport_monster(ctx.dir) {
        ctx.ident = true;
    }
    true
}

fn disarming(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.disarm_trap(ctx.dir) {
        ctx.ident = true;
    }
    true
}

fn tdoor_dest(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.destroy_door(ctx.dir) {
        ctx.ident = true;
    }
    true
}

fn polymorph(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.poly_monster(ctx.dir) {
        ctx.ident = true;
    }
    true
}

fn starlight(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.player.timed(TimedStatus::Blind) == 0 {
        w.msg("Light shoots in all directions!");
    }
    for dir in Direction::ALL {
        w.light_line(Some(dir));
    }
    ctx.ident = true;
    true
}

fn starlight2(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    for dir in Direction::ALL {
        w.strong_light_line(Some(dir));
    }
    ctx.ident = true;
    true
}

fn berserker(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dur = w.rng.randint1(50) + 50;
    inc_timed_normal(w, ctx, TimedStatus::Bold, dur);
    inc_timed_normal(w, ctx, TimedStatus::Berserk, dur);
    true
}

fn wonder(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let die = w.rng.randint1(100) + w.player.level / 5;
    if resolve_wonder(w, ctx.dir, die, ctx.beam) {
        ctx.ident = true;
    }
    true
}

// === Device and consumable specials ===

const WAND_BREATHS: [(DamageType, i32); 5] = [
    (DamageType::Acid, 200),
    (DamageType::Elec, 160),
    (DamageType::Fire, 200),
    (DamageType::Cold, 160),
    (DamageType::Poison, 120),
];

fn wand_breath(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let which = w.rng.choose_index(WAND_BREATHS.len());
    let (damage_type, dam) = WAND_BREATHS[which];
    w.fire_ball(damage_type, ctx.dir, dam, 3);
    ctx.ident = true;
    true
}

fn staff_magi(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.player.stat_restore(Stat::Int) {
        ctx.ident = true;
    }
    if w.player.restore_mana() {
        ctx.ident = true;
        w.msg("Your feel your head clear.");
    }
    true
}

fn staff_holy(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(120);
    if w.dispel_evil(dam) {
        ctx.ident = true;
    }
    if w.player.heal(50) {
        ctx.ident = true;
    }
    let dur = w.rng.randint1(25) + 3 * w.player.level;
    inc_timed_normal(w, ctx, TimedStatus::ProtEvil, dur);
    clear_timed_many(
        w,
        ctx,
        &[
            TimedStatus::Poisoned,
            TimedStatus::Terror,
            TimedStatus::Afraid,
            TimedStatus::Stunned,
            TimedStatus::Cut,
            TimedStatus::Slowed,
            TimedStatus::Blind,
            TimedStatus::Confused,
            TimedStatus::Hallucinating,
            TimedStatus::Amnesia,
        ],
    )
}

const DRINK_BREATHS: [(DamageType, i32); 2] = [(DamageType::Fire, 80), (DamageType::Cold, 80)];

fn drink_breath(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let which = w.rng.choose_index(DRINK_BREATHS.len());
    let (damage_type, dam) = DRINK_BREATHS[which];
    w.fire_ball(damage_type, ctx.dir, dam, 2);
    ctx.ident = true;
    true
}

fn drink_good(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    w.msg("You feel less thirsty.");
    ctx.ident = true;
    true
}

fn drink_death(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    w.msg("A feeling of Death flows through your body.");
    w.player.take_hit(5000, "a potion of Death");
    ctx.ident = true;
    true
}

fn drink_ruin(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    w.msg("Your nerves and muscles feel weak and lifeless!");
    let dam = damroll(&mut w.rng, 10, 10);
    w.player.take_hit(dam, "a potion of Ruination");
    for stat in [Stat::Dex, Stat::Wis, Stat::Con, Stat::Str, Stat::Int] {
        w.player.stat_dec(stat, true);
    }
    ctx.ident = true;
    true
}

fn drink_detonate(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    w.msg("Massive explosions rupture your body!");
    let dam = damroll(&mut w.rng, 50, 20);
    w.player.take_hit(dam, "a potion of Detonation");
    w.player.inc_timed(TimedStatus::Stunned, 75);
    w.player.inc_timed(TimedStatus::Cut, 5000);
    ctx.ident = true;
    true
}

fn drink_salt(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    w.msg("The potion makes you vomit!");
    w.player.set_food(FOOD_STARVE - 1);
    w.player.clear_timed(TimedStatus::Poisoned);
    w.player.inc_timed(TimedStatus::Paralyzed, 4);
    ctx.ident = true;
    true
}

fn food_good(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    w.msg("That tastes good.");
    ctx.ident = true;
    true
}

fn food_waybread(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    w.msg("That tastes good.");
    w.player.clear_timed(TimedStatus::Poisoned);
    let amt = damroll(&mut w.rng, 4, 8);
    w.player.heal(amt);
    ctx.ident = true;
    true
}

fn food_crunch(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    if w.rng.one_in(2) {
        w.msg("It's crunchy.");
    } else {
        w.msg("It nearly breaks your tooth!");
    }
    ctx.ident = true;
    true
}

fn food_whisky(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    w.msg("That tastes great!");
    let dur = w.rng.randint0(5);
    w.player.inc_timed(TimedStatus::Confused, dur);
    ctx.ident = true;
    true
}

fn food_wine(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    w.msg("That tastes great!  A fine vintage.");
    let dur = w.rng.rand_spread(100, 20);
    w.player.set_timed(TimedStatus::Bold, dur);
    ctx.ident = true;
    true
}

fn shroom_emergency(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let image = w.rng.rand_spread(250, 50);
    w.player.set_timed(TimedStatus::Hallucinating, image);
    let fire = w.rng.rand_spread(30, 10);
    w.player.set_timed(TimedStatus::OppFire, fire);
    let cold = w.rng.rand_spread(30, 10);
    w.player.set_timed(TimedStatus::OppCold, cold);
    w.player.heal(200);
    ctx.ident = true;
    true
}

fn shroom_terror(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dur = w.rng.rand_spread(100, 20);
    if w.player.set_timed(TimedStatus::Terror, dur) {
        ctx.ident = true;
    }
    true
}

fn shroom_stone(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dur = w.rng.rand_spread(80, 20);
    if w.player.set_timed(TimedStatus::Stoneskin, dur) {
        ctx.ident = true;
    }
    true
}

fn shroom_debility(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let stat = if w.rng.one_in(2) { Stat::Str } else { Stat::Con };
    if w.player.restore_mana() {
        w.msg("Your feel your head clear.");
    }
    w.player.stat_dec(stat, false);
    ctx.ident = true;
    true
}

fn shroom_sprinting(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    inc_timed_normal(w, ctx, TimedStatus::Sprint, 100)
}

fn shroom_purging(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    w.player.set_food(FOOD_FAINT - 1);
    if w.player.stat_restore(Stat::Str) {
        ctx.ident = true;
    }
    if w.player.stat_restore(Stat::Con) {
        ctx.ident = true;
    }
    if w.player.clear_timed(TimedStatus::Poisoned) {
        ctx.ident = true;
    }
    true
}

fn ring_elemental(
    w: &mut GameWorld,
    ctx: &mut EffectContext,
    damage_type: DamageType,
    base: i32,
    opposition: TimedStatus,
) -> bool {
    let dam = ctx.boosted(base);
    ctx.ident = true;
    w.fire_ball(damage_type, ctx.dir, dam, 2);
    let dur = w.rng.randint1(20) + 20;
    w.player.inc_timed(opposition, dur);
    true
}

fn ring_acid(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    ring_elemental(w, ctx, DamageType::Acid, 70, TimedStatus::OppAcid)
}

fn ring_flames(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    ring_elemental(w, ctx, DamageType::Fire, 80, TimedStatus::OppFire)
}

fn ring_ice(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    ring_elemental(w, ctx, DamageType::Cold, 75, TimedStatus::OppCold)
}

fn ring_lightning(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    ring_elemental(w, ctx, DamageType::Elec, 85, TimedStatus::OppElec)
}

// === Dragon scale mail breaths ===

fn dragon_blue(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(150);
    breathe_one(
        w,
        ctx,
        dam,
        BreathVariant::new(MessageKind::BreatheElec, DamageType::Elec, "lightning"),
    )
}

fn dragon_green(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(150);
    breathe_one(
        w,
        ctx,
        dam,
        BreathVariant::new(MessageKind::BreatheGas, DamageType::Poison, "poison gas"),
    )
}

fn dragon_red(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(200);
    breathe_one(
        w,
        ctx,
        dam,
        BreathVariant::new(MessageKind::BreatheFire, DamageType::Fire, "fire"),
    )
}

const MULTIHUED_BREATHS: [BreathVariant; 5] = [
    BreathVariant::new(MessageKind::BreatheElec, DamageType::Elec, "lightning"),
    BreathVariant::new(MessageKind::BreatheFrost, DamageType::Cold, "frost"),
    BreathVariant::new(MessageKind::BreatheAcid, DamageType::Acid, "acid"),
    BreathVariant::new(MessageKind::BreatheGas, DamageType::Poison, "poison gas"),
    BreathVariant::new(MessageKind::BreatheFire, DamageType::Fire, "fire"),
];

fn dragon_multihued(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(250);
    breathe_random(w, ctx, dam, &MULTIHUED_BREATHS)
}

fn dragon_bronze(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(150);
    breathe_one(
        w,
        ctx,
        dam,
        BreathVariant::new(
            MessageKind::BreatheConfusion,
            DamageType::Confusion,
            "confusion",
        ),
    )
}

fn dragon_gold(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(150);
    breathe_one(
        w,
        ctx,
        dam,
        BreathVariant::new(MessageKind::BreatheSound, DamageType::Sound, "sound"),
    )
}

const CHAOS_BREATHS: [BreathVariant; 2] = [
    BreathVariant::new(
        MessageKind::BreatheDisenchant,
        DamageType::Disenchant,
        "disenchantment",
    ),
    BreathVariant::new(MessageKind::BreatheChaos, DamageType::Chaos, "chaos"),
];

fn dragon_chaos(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(220);
    breathe_random(w, ctx, dam, &CHAOS_BREATHS)
}

const LAW_BREATHS: [BreathVariant; 2] = [
    BreathVariant::new(MessageKind::BreatheShards, DamageType::Shards, "shards"),
    BreathVariant::new(MessageKind::BreatheSound, DamageType::Sound, "sound"),
];

fn dragon_law(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(230);
    breathe_random(w, ctx, dam, &LAW_BREATHS)
}

const BALANCE_BREATHS: [BreathVariant; 4] = [
    BreathVariant::new(
        MessageKind::BreatheDisenchant,
        DamageType::Disenchant,
        "disenchantment",
    ),
    BreathVariant::new(MessageKind::BreatheChaos, DamageType::Chaos, "chaos"),
    BreathVariant::new(MessageKind::BreatheShards, DamageType::Shards, "shards"),
    BreathVariant::new(MessageKind::BreatheSound, DamageType::Sound, "sound"),
];

fn dragon_balance(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(250);
    breathe_random(w, ctx, dam, &BALANCE_BREATHS)
}

const SHINING_BREATHS: [BreathVariant; 2] = [
    BreathVariant::new(MessageKind::BreatheLight, DamageType::Light, "light"),
    BreathVariant::new(MessageKind::BreatheDark, DamageType::Dark, "darkness"),
];

fn dragon_shining(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(200);
    breathe_random(w, ctx, dam, &SHINING_BREATHS)
}

fn dragon_power(w: &mut GameWorld, ctx: &mut EffectContext) -> bool {
    let dam = ctx.boosted(300);
    breathe_one(
        w,
        ctx,
        dam,
        BreathVariant::new(
            MessageKind::BreatheElements,
            DamageType::Missile,
            "the elements",
        ),
    )
}

// === Traps ===

fn trap_door(w: &mut GameWorld, _ctx: &mut EffectContext) -> bool {
    w.msg("You fall through a trap door!");
    if w.player.resist.feather_fall {
        w.msg("You float gently down to the next level.");
    } else {
        let dam = damroll(&mut w.rng, 2, 8);
        w.player.take_hit(dam, "a trap");
    }
    w.player.depth = (w.player.depth + 1).min(MAX_DEPTH);
    w.player.max_depth = w.player.max_depth.max(w.player.depth);
    true
}

fn trap_pit(w: &mut GameWorld, _ctx: &mut EffectContext) -> bool {
    w.msg("You fall into a pit!");
    if w.player.resist.feather_fall {
        w.msg("You float gently to the bottom of the pit.");
    } else {
        let dam = damroll(&mut w.rng, 2, 6);
        w.player.take_hit(dam, "a trap");
    }
    true
}

fn trap_pit_spikes(w: &mut GameWorld, _ctx: &mut EffectContext) -> bool {
    w.msg("You fall into a spiked pit!");
    if w.player.resist.feather_fall {
        w.msg("You float gently to the floor of the pit.");
        w.msg("You carefully avoid touching the spikes.");
    } else {
        let mut dam = damroll(&mut w.rng, 2, 6);
        if w.rng.one_in(2) {
            w.msg("You are impaled!");
            dam *= 2;
            let cut = w.rng.randint1(dam);
            w.player.inc_timed(TimedStatus::Cut, cut);
        }
        w.player.take_hit(dam, "a trap");
    }
    true
}

fn trap_pit_poison(w: &mut GameWorld, _ctx: &mut EffectContext) -> bool {
    w.msg("You fall into a spiked pit!");
    if w.player.resist.feather_fall {
        w.msg("You float gently to the floor of the pit.");
        w.msg("You carefully avoid touching the spikes.");
    } else {
        let dam = damroll(&mut w.rng, 2, 6);
        if w.rng.one_in(2) {
            w.msg("You are impaled on poisonous spikes!");
            let cut = w.rng.randint1(dam * 2);
            w.player.inc_timed(TimedStatus::Cut, cut);
            let pois = w.rng.randint1(dam * 4);
            w.player.inc_timed(TimedStatus::Poisoned, pois);
        }
        w.player.take_hit(dam, "a trap");
    }
    true
}

fn trap_rune_summon(w: &mut GameWorld, _ctx: &mut EffectContext) -> bool {
    let count = 2 + w.rng.randint1(3);
    let depth = w.dungeon.depth;
    w.msgt(
        MessageKind::SummonMonster,
        "You are enveloped in a cloud of smoke!",
    );
    let pos = w.player.pos;
    if w.dungeon.tile(pos) == crate::world::Tile::Trap {
        w.dungeon.set_tile(pos, crate::world::Tile::Floor);
    }
    for _ in 0..count {
        w.summon_specific(SummonKind::Any, depth);
    }
    true
}

fn trap_rune_teleport(w: &mut GameWorld, _ctx: &mut EffectContext) -> bool {
    w.msg("You hit a teleport trap!");
    w.teleport_player(100);
    true
}

fn trap_spot_fire(w: &mut GameWorld, _ctx: &mut EffectContext) -> bool {
    w.msg("You are enveloped in flames!");
    let dam = damroll(&mut w.rng, 4, 6);
    w.player.take_hit(dam, "a fire trap");
    true
}

fn trap_spot_acid(w: &mut GameWorld, _ctx: &mut EffectContext) -> bool {
    w.msg("You are splashed with acid!");
    let dam = damroll(&mut w.rng, 4, 6);
    w.player.take_hit(dam, "an acid trap");
    true
}

fn trap_dart_hits(w: &mut GameWorld) -> bool {
    if w.trap_check_hit(125) {
        w.msg("A small dart hits you!");
        let dam = damroll(&mut w.rng, 1, 4);
        w.player.take_hit(dam, "a trap");
        true
    } else {
        w.msg("A small dart barely misses you.");
        false
    }
}

fn trap_dart_slow(w: &mut GameWorld, _ctx: &mut EffectContext) -> bool {
    if trap_dart_hits(w) {
        let dur = w.rng.randint0(20) + 20;
        w.player.inc_timed(TimedStatus::Slowed, dur);
    }
    true
}

fn trap_dart_lose_str(w: &mut GameWorld, _ctx: &mut EffectContext) -> bool {
    if trap_dart_hits(w) {
        w.player.stat_dec(Stat::Str, false);
    }
    true
}

fn trap_dart_lose_dex(w: &mut GameWorld, _ctx: &mut EffectContext) -> bool {
    if trap_dart_hits(w) {
        w.player.stat_dec(Stat::Dex, false);
    }
    true
}

fn trap_dart_lose_con(w: &mut GameWorld, _ctx: &mut EffectContext) -> bool {
    if trap_dart_hits(w) {
        w.player.stat_dec(Stat::Con, false);
    }
    true
}

fn trap_gas_blind(w: &mut GameWorld, _ctx: &mut EffectContext) -> bool {
    w.msg("You are surrounded by a black gas!");
    let dur = w.rng.randint0(50) + 25;
    w.player.inc_timed(TimedStatus::Blind, dur);
    true
}

fn trap_gas_confuse(w: &mut GameWorld, _ctx: &mut EffectContext) -> bool {
    w.msg("You are surrounded by a gas of scintillating colors!");
    let dur = w.rng.randint0(20) + 10;
    w.player.inc_timed(TimedStatus::Confused, dur);
    true
}

fn trap_gas_poison(w: &mut GameWorld, _ctx: &mut EffectContext) -> bool {
    w.msg("You are surrounded by a pungent green gas!");
    let dur = w.rng.randint0(20) + 10;
    w.player.inc_timed(TimedStatus::Poisoned, dur);
    true
}

fn trap_gas_sleep(w: &mut GameWorld, _ctx: &mut EffectContext) -> bool {
    w.msg("You are surrounded by a strange white mist!");
    let dur = w.rng.randint0(10) + 5;
    w.player.inc_timed(TimedStatus::Paralyzed, dur);
    true
}

/// The handler for a kind, if one exists.
fn handler_for(kind: EffectKind) -> Option<Handler> {
    use EffectKind as K;
    let handler: Handler = match kind {
        K::Poison => poison,
        K::Blind => blind,
        K::Scare => scare,
        K::Confuse => confuse,
        K::Hallucinate => halluc,
        K::Paralyze => paralyze,
        K::Slow => slow,
        K::CurePoison => cure_poison,
        K::CureBlindness => cure_blindness,
        K::CureParanoia => cure_paranoia,
        K::CureConfusion => cure_confusion,
        K::CureMind => cure_mind,
        K::CureBody => cure_body,
        K::CureLight => cure_light,
        K::CureSerious => cure_serious,
        K::CureCritical => cure_critical,
        K::CureFull => cure_full,
        K::CureFull2 => cure_full2,
        K::CureTemp => cure_temp,
        K::Heal1 => heal1,
        K::Heal2 => heal2,
        K::Heal3 => heal3,
        K::GainExp => gain_exp,
        K::LoseExp => lose_exp,
        K::RestoreExp => restore_exp,
        K::RestoreMana => restore_mana,
        K::GainStr => gain_str,
        K::GainInt => gain_int,
        K::GainWis => gain_wis,
        K::GainDex => gain_dex,
        K::GainCon => gain_con,
        K::GainAll => gain_all,
        K::Brawn => brawn,
        K::Intellect => intellect,
        K::Contemplation => contemplation,
        K::Toughness => toughness,
        K::Nimbleness => nimbleness,
        K::LoseStr => lose_str,
        K::LoseInt => lose_int,
        K::LoseWis => lose_wis,
        K::LoseDex => lose_dex,
        K::LoseCon => lose_con,
        K::LoseCon2 => lose_con2,
        K::RestoreStr => restore_str,
        K::RestoreInt => restore_int,
        K::RestoreWis => restore_wis,
        K::RestoreDex => restore_dex,
        K::RestoreCon => restore_con,
        K::CureNonorlybig => cure_nonorlybig,
        K::RestoreAll => restore_all,
        K::RestoreStLev => restore_st_lev,
        K::TmdInfra => tmd_infra,
        K::TmdSinvis => tmd_sinvis,
        K::TmdEsp => tmd_esp,
        K::Enlightenment => enlightenment,
        K::Enlightenment2 => enlightenment2,
        K::Hero => hero,
        K::Shero => shero,
        K::ResistAcid => resist_acid,
        K::ResistElec => resist_elec,
        K::ResistFire => resist_fire,
        K::ResistCold => resist_cold,
        K::ResistPois => resist_pois,
        K::ResistAll => resist_all,
        K::DetectTreasure => detect_treasure,
        K::DetectTrap => detect_trap,
        K::DetectDoorstair => detect_doorstair,
        K::DetectInvis => detect_invis,
        K::DetectEvil => detect_evil,
        K::DetectAll => detect_all,
        K::EnchantToHit => enchant_tohit,
        K::EnchantToDam => enchant_todam,
        K::EnchantWeapon => enchant_weapon,
        K::EnchantArmor => enchant_armor,
        K::EnchantArmor2 => enchant_armor2,
        K::RestoreItem => restore_item,
        K::Identify => identify,
        K::RemoveCurse => remove_curse,
        K::RemoveCurse2 => remove_curse2,
        K::Light => light,
        K::SummonMon => summon_mon,
        K::SummonUndead => summon_undead,
        K::TelePhase => tele_phase,
        K::TeleLong => tele_long,
        K::TeleLevel => tele_level,
        K::Confusing => confusing,
        K::Mapping => mapping,
        K::Rune => rune,
        K::Acquire => acquire,
        K::Acquire2 => acquire2,
        K::AnnoyMon => annoy_mon,
        K::CreateTrap => create_trap,
        K::DestroyTdoors => destroy_tdoors,
        K::Recharge => recharge,
        K::Banishment => banishment,
        K::Darkness => darkness,
        K::ProtEvil => protevil,
        K::Satisfy => satisfy,
        K::CurseWeapon => curse_weapon,
        K::CurseArmor => curse_armor,
        K::Blessing => blessing,
        K::Blessing2 => blessing2,
        K::Blessing3 => blessing3,
        K::Recall => recall,
        K::DeepDescent => deep_descent,
        K::LosHaste => loshaste,
        K::LosSleep => lossleep,
        K::LosSlow => losslow,
        K::LosConf => losconf,
        K::LosKill => loskill,
        K::Earthquakes => earthquakes,
        K::Destruction2 => destruction2,
        K::Illumination => illumination,
        K::Clairvoyance => clairvoyance,
        K::Probing => probing,
        K::StoneToMud => stone_to_mud,
        K::Confuse2 => confuse2,
        K::Bizarre => bizarre,
        K::StarBall => star_ball,
        K::RageBlessResist => rage_bless_resist,
        K::SleepII => sleep2,
        K::RestoreLife => restore_life,
        K::Missile => missile,
        K::DispelEvil => dispel_evil,
        K::DispelEvil60 => dispel_evil60,
        K::DispelUndead => dispel_undead,
        K::DispelAll => dispel_all,
        K::Haste => haste,
        K::Haste1 => haste1,
        K::Haste2 => haste2,
        K::FireBolt => fire_bolt,
        K::FireBolt2 => fire_bolt2,
        K::FireBolt3 => fire_bolt3,
        K::FireBolt72 => fire_bolt72,
        K::FireBall => fire_ball,
        K::FireBall2 => fire_ball2,
        K::FireBall200 => fire_ball200,
        K::ColdBolt => cold_bolt,
        K::ColdBolt2 => cold_bolt2,
        K::ColdBall2 => cold_ball2,
        K::ColdBall50 => cold_ball50,
        K::ColdBall100 => cold_ball100,
        K::ColdBall160 => cold_ball160,
        K::AcidBolt => acid_bolt,
        K::AcidBolt2 => acid_bolt2,
        K::AcidBolt3 => acid_bolt3,
        K::AcidBall => acid_ball,
        K::ElecBolt => elec_bolt,
        K::ElecBall => elec_ball,
        K::ElecBall2 => elec_ball2,
        K::Arrow => arrow,
        K::RemFearPois => rem_fear_pois,
        K::StinkingCloud => stinking_cloud,
        K::DrainLife1 => drain_life1,
        K::DrainLife2 => drain_life2,
        K::DrainLife3 => drain_life3,
        K::DrainLife4 => drain_life4,
        K::Firebrand => firebrand,
        K::ManaBolt => mana_bolt,
        K::MonHeal => mon_heal,
        K::MonHaste => mon_haste,
        K::MonSlow => mon_slow,
        K::MonConfuse => mon_confuse,
        K::MonSleep => mon_sleep,
        K::MonClone => mon_clone,
        K::MonScare => mon_scare,
        K::LightLine => light_line,
        K::TeleOther => tele_other,
        K::Disarming => disarming,
        K::TdoorDest => tdoor_dest,
        K::Polymorph => polymorph,
        K::Starlight => starlight,
        K::Starlight2 => starlight2,
        K::Berserker => berserker,
        K::Wonder => wonder,
        K::WandBreath => wand_breath,
        K::StaffMagi => staff_magi,
        K::StaffHoly => staff_holy,
        K::DrinkBreath => drink_breath,
        K::DrinkGood => drink_good,
        K::DrinkDeath => drink_death,
        K::DrinkRuin => drink_ruin,
        K::DrinkDetonate => drink_detonate,
        K::DrinkSalt => drink_salt,
        K::FoodGood => food_good,
        K::FoodWaybread => food_waybread,
        K::FoodCrunch => food_crunch,
        K::FoodWhisky => food_whisky,
        K::FoodWine => food_wine,
        K::ShroomEmergency => shroom_emergency,
        K::ShroomTerror => shroom_terror,
        K::ShroomStone => shroom_stone,
        K::ShroomDebility => shroom_debility,
        K::ShroomSprinting => shroom_sprinting,
        K::ShroomPurging => shroom_purging,
        K::RingAcid => ring_acid,
        K::RingFlames => ring_flames,
        K::RingIce => ring_ice,
        K::RingLightning => ring_lightning,
        K::DragonBlue => dragon_blue,
        K::DragonGreen => dragon_green,
        K::DragonRed => dragon_red,
        K::DragonMultihued => dragon_multihued,
        K::DragonBronze => dragon_bronze,
        K::DragonGold => dragon_gold,
        K::DragonChaos => dragon_chaos,
        K::DragonLaw => dragon_law,
        K::DragonBalance => dragon_balance,
        K::DragonShining => dragon_shining,
        K::DragonPower => dragon_power,
        K::TrapDoor => trap_door,
        K::TrapPit => trap_pit,
        K::TrapPitSpikes => trap_pit_spikes,
        K::TrapPitPoison => trap_pit_poison,
        K::TrapRuneSummon => trap_rune_summon,
        K::TrapRuneTeleport => trap_rune_teleport,
        K::TrapSpotFire => trap_spot_fire,
        K::TrapSpotAcid => trap_spot_acid,
        K::TrapDartSlow => trap_dart_slow,
        K::TrapDartLoseStr => trap_dart_lose_str,
        K::TrapDartLoseDex => trap_dart_lose_dex,
        K::TrapDartLoseCon => trap_dart_lose_con,
        K::TrapGasBlind => trap_gas_blind,
        K::TrapGasConfuse => trap_gas_confuse,
        K::TrapGasPoison => trap_gas_poison,
        K::TrapGasSleep => trap_gas_sleep,
        K::Reserved => return None,
    };
    Some(handler)
}

/// Dense id-indexed dispatch table, one probe per resolve.
pub struct HandlerTable {
    slots: Vec<Option<Handler>>,
}

impl HandlerTable {
    /// Table with every implemented handler registered.
    #[must_use]
    pub fn standard() -> Self {
        let mut slots = vec![None; EffectKind::MAX as usize + 1];
        for kind in EffectKind::ALL {
            slots[kind.id() as usize] = handler_for(kind);
        }
        Self { slots }
    }

    /// Handler for an id, `None` when the id is invalid or unimplemented.
    #[must_use]
    pub fn get(&self, id: u16) -> Option<Handler> {
        self.slots.get(id as usize).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_but_reserved_has_a_handler() {
        let table = HandlerTable::standard();
        for kind in EffectKind::ALL {
            if kind == EffectKind::Reserved {
                assert!(table.get(kind.id()).is_none());
            } else {
                assert!(
                    table.get(kind.id()).is_some(),
                    "no handler for {kind:?}"
                );
            }
        }
    }

    #[test]
    fn test_out_of_range_ids_have_no_handler() {
        let table = HandlerTable::standard();
        assert!(table.get(0).is_none());
        assert!(table.get(EffectKind::MAX + 1).is_none());
        assert!(table.get(u16::MAX).is_none());
    }
}
