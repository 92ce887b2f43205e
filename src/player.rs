//! The player record: hit points, stats, timed statuses, resistances.
//!
//! Effects mutate the player through the methods here; the methods report
//! whether anything actually changed, which is what feeds the observability
//! flag in effect resolution. A resisted status application or a heal at
//! full health is a silent no-op, not an error.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// Stat ceiling for permanent gains.
pub const STAT_MAX: i32 = 40;
/// Stat floor; drains stop here.
pub const STAT_MIN: i32 = 3;
/// Experience ceiling.
pub const MAX_EXP: i64 = 99_999_999;
/// Food counter ceiling.
pub const FOOD_MAX: i32 = 17_000;
/// Below this food level the player is fainting.
pub const FOOD_FAINT: i32 = 500;
/// Below this food level the player is starving.
pub const FOOD_STARVE: i32 = 100;
/// Deepest dungeon level.
pub const MAX_DEPTH: i32 = 127;

/// The five primary stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    Str,
    Int,
    Wis,
    Dex,
    Con,
}

impl Stat {
    pub const COUNT: usize = 5;

    pub const ALL: [Stat; Stat::COUNT] = [Stat::Str, Stat::Int, Stat::Wis, Stat::Dex, Stat::Con];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Pick a random stat other than `exclude`.
    ///
    /// Used by the stat-swap effects (brawn, intellect, and friends).
    pub fn random_other(rng: &mut GameRng, exclude: Stat) -> Stat {
        let mut i = rng.randint0(Stat::COUNT as i32 - 1) as usize;
        if i >= exclude.index() {
            i += 1;
        }
        Stat::ALL[i]
    }
}

/// Current and maximum value of one stat.
///
/// Drains lower `cur` (and `max` too when permanent); restoration brings
/// `cur` back up to `max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatValue {
    pub cur: i32,
    pub max: i32,
}

/// Timed status conditions tracked as remaining-duration counters.
///
/// Durations are decremented by the turn loop outside this crate; effects
/// only add to, set, reduce, or clear them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimedStatus {
    Poisoned,
    Blind,
    Afraid,
    Confused,
    Hallucinating,
    Paralyzed,
    Slowed,
    Stunned,
    Cut,
    Amnesia,
    Infravision,
    SeeInvisible,
    Telepathy,
    Bold,
    Heroism,
    Berserk,
    OppAcid,
    OppElec,
    OppFire,
    OppCold,
    OppPoison,
    OppConf,
    Hasted,
    ProtEvil,
    Blessed,
    Terror,
    Stoneskin,
    Sprint,
}

impl TimedStatus {
    pub const COUNT: usize = 28;

    pub const ALL: [TimedStatus; TimedStatus::COUNT] = [
        TimedStatus::Poisoned,
        TimedStatus::Blind,
        TimedStatus::Afraid,
        TimedStatus::Confused,
        TimedStatus::Hallucinating,
        TimedStatus::Paralyzed,
        TimedStatus::Slowed,
        TimedStatus::Stunned,
        TimedStatus::Cut,
        TimedStatus::Amnesia,
        TimedStatus::Infravision,
        TimedStatus::SeeInvisible,
        TimedStatus::Telepathy,
        TimedStatus::Bold,
        TimedStatus::Heroism,
        TimedStatus::Berserk,
        TimedStatus::OppAcid,
        TimedStatus::OppElec,
        TimedStatus::OppFire,
        TimedStatus::OppCold,
        TimedStatus::OppPoison,
        TimedStatus::OppConf,
        TimedStatus::Hasted,
        TimedStatus::ProtEvil,
        TimedStatus::Blessed,
        TimedStatus::Terror,
        TimedStatus::Stoneskin,
        TimedStatus::Sprint,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Permanent resistances and protections from equipment and race.
///
/// These make certain status applications no-ops, which is exactly the
/// difference between the "obvious" and "observable" timed sub-protocols.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resistances {
    pub confusion: bool,
    pub blindness: bool,
    pub fear: bool,
    pub poison: bool,
    pub dark: bool,
    pub free_action: bool,
    pub hold_life: bool,
    pub feather_fall: bool,
}

/// The player record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    pub pos: (i32, i32),
    pub hp: i32,
    pub max_hp: i32,
    pub mana: i32,
    pub max_mana: i32,
    pub level: i32,
    pub exp: i64,
    pub max_exp: i64,
    pub depth: i32,
    pub max_depth: i32,
    pub food: i32,
    pub armor: i32,
    pub stats: [StatValue; Stat::COUNT],
    timed: [i32; TimedStatus::COUNT],
    pub resist: Resistances,
    /// Hands glow; next melee hit confuses.
    pub confusing_touch: bool,
    /// Word-of-recall countdown active.
    pub word_of_recall: bool,
    /// Turns until forced descent, 0 when inactive.
    pub deep_descent: i32,
    pub dead: bool,
    pub death_cause: Option<String>,
}

impl Player {
    /// A level-one player at the given position.
    #[must_use]
    pub fn new(pos: (i32, i32)) -> Self {
        Self {
            pos,
            hp: 100,
            max_hp: 100,
            mana: 20,
            max_mana: 20,
            level: 1,
            exp: 0,
            max_exp: 0,
            depth: 1,
            max_depth: 1,
            food: FOOD_MAX / 2,
            armor: 5,
            stats: [StatValue { cur: 10, max: 10 }; Stat::COUNT],
            timed: [0; TimedStatus::COUNT],
            resist: Resistances::default(),
            confusing_touch: false,
            word_of_recall: false,
            deep_descent: 0,
            dead: false,
            death_cause: None,
        }
    }

    // === Hit points ===

    /// Heal up to `amount`, capped at max. Returns whether hp rose.
    pub fn heal(&mut self, amount: i32) -> bool {
        if self.hp >= self.max_hp || amount <= 0 {
            return false;
        }
        self.hp = (self.hp + amount).min(self.max_hp);
        true
    }

    /// Take damage tagged with a cause string.
    pub fn take_hit(&mut self, damage: i32, cause: &str) {
        self.hp -= damage.max(0);
        if self.hp < 0 && !self.dead {
            self.dead = true;
            self.death_cause = Some(cause.to_string());
        }
    }

    // === Timed statuses ===

    /// Remaining duration of a status.
    #[must_use]
    pub fn timed(&self, status: TimedStatus) -> i32 {
        self.timed[status.index()]
    }

    fn resisted(&self, status: TimedStatus) -> bool {
        match status {
            TimedStatus::Confused => self.resist.confusion,
            TimedStatus::Blind => self.resist.blindness,
            TimedStatus::Afraid => self.resist.fear || self.timed(TimedStatus::Bold) > 0,
            TimedStatus::Poisoned => self.resist.poison,
            TimedStatus::Paralyzed => self.resist.free_action,
            _ => false,
        }
    }

    /// Extend a status timer. Returns whether the timer changed; a resisted
    /// application is a silent no-op.
    pub fn inc_timed(&mut self, status: TimedStatus, amount: i32) -> bool {
        if amount <= 0 || self.resisted(status) {
            return false;
        }
        self.timed[status.index()] += amount;
        true
    }

    /// Set a status timer outright. Returns whether the value changed.
    pub fn set_timed(&mut self, status: TimedStatus, amount: i32) -> bool {
        if self.resisted(status) {
            return false;
        }
        let amount = amount.max(0);
        if self.timed[status.index()] == amount {
            return false;
        }
        self.timed[status.index()] = amount;
        true
    }

    /// Shorten a status timer by `amount`, flooring at zero.
    /// Returns whether the timer changed.
    pub fn dec_timed(&mut self, status: TimedStatus, amount: i32) -> bool {
        let slot = &mut self.timed[status.index()];
        if *slot <= 0 || amount <= 0 {
            return false;
        }
        *slot = (*slot - amount).max(0);
        true
    }

    /// Clear a status timer. Returns whether it was active.
    pub fn clear_timed(&mut self, status: TimedStatus) -> bool {
        let slot = &mut self.timed[status.index()];
        if *slot <= 0 {
            return false;
        }
        *slot = 0;
        true
    }

    // === Stats ===

    #[must_use]
    pub fn stat(&self, stat: Stat) -> StatValue {
        self.stats[stat.index()]
    }

    /// Permanent stat gain. Returns whether the stat rose.
    pub fn stat_gain(&mut self, stat: Stat) -> bool {
        let s = &mut self.stats[stat.index()];
        if s.cur >= STAT_MAX {
            return false;
        }
        s.cur += 1;
        if s.cur > s.max {
            s.max = s.cur;
        }
        true
    }

    /// Drain a stat; a permanent drain also lowers the restoration target.
    /// Returns whether the stat fell.
    pub fn stat_dec(&mut self, stat: Stat, permanent: bool) -> bool {
        let s = &mut self.stats[stat.index()];
        if s.cur <= STAT_MIN {
            return false;
        }
        s.cur -= 1;
        if permanent && s.max > STAT_MIN {
            s.max -= 1;
        }
        true
    }

    /// Restore a drained stat to its maximum. Returns whether it rose.
    pub fn stat_restore(&mut self, stat: Stat) -> bool {
        let s = &mut self.stats[stat.index()];
        if s.cur >= s.max {
            return false;
        }
        s.cur = s.max;
        true
    }

    // === Experience, mana, food ===

    pub fn exp_gain(&mut self, amount: i64) {
        self.exp = (self.exp + amount).min(MAX_EXP);
        if self.exp > self.max_exp {
            self.max_exp = self.exp;
        }
    }

    pub fn exp_lose(&mut self, amount: i64) {
        self.exp = (self.exp - amount).max(0);
    }

    /// Restore drained experience. Returns whether any was restored.
    pub fn restore_level(&mut self) -> bool {
        if self.exp >= self.max_exp {
            return false;
        }
        self.exp = self.max_exp;
        true
    }

    /// Regain up to `amount` mana. Returns whether any was restored.
    pub fn mana_gain(&mut self, amount: i32) -> bool {
        if self.mana >= self.max_mana || amount <= 0 {
            return false;
        }
        self.mana = (self.mana + amount).min(self.max_mana);
        true
    }

    /// Refill mana. Returns whether any was restored.
    pub fn restore_mana(&mut self) -> bool {
        if self.mana >= self.max_mana {
            return false;
        }
        self.mana = self.max_mana;
        true
    }

    /// Set the food counter. Returns whether it changed.
    pub fn set_food(&mut self, amount: i32) -> bool {
        let amount = amount.clamp(0, FOOD_MAX);
        if self.food == amount {
            return false;
        }
        self.food = amount;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heal_caps_at_max() {
        let mut p = Player::new((10, 10));
        p.hp = 90;
        assert!(p.heal(20));
        assert_eq!(p.hp, 100);
        assert!(!p.heal(20));
    }

    #[test]
    fn test_take_hit_records_cause() {
        let mut p = Player::new((10, 10));
        p.take_hit(5000, "a potion of Death");
        assert!(p.dead);
        assert_eq!(p.death_cause.as_deref(), Some("a potion of Death"));
    }

    #[test]
    fn test_inc_timed_resisted_is_noop() {
        let mut p = Player::new((10, 10));
        p.resist.confusion = true;
        assert!(!p.inc_timed(TimedStatus::Confused, 10));
        assert_eq!(p.timed(TimedStatus::Confused), 0);

        assert!(p.inc_timed(TimedStatus::Poisoned, 10));
        assert_eq!(p.timed(TimedStatus::Poisoned), 10);
    }

    #[test]
    fn test_bold_blocks_fear() {
        let mut p = Player::new((10, 10));
        p.inc_timed(TimedStatus::Bold, 5);
        assert!(!p.inc_timed(TimedStatus::Afraid, 10));
    }

    #[test]
    fn test_dec_timed_floors_at_zero() {
        let mut p = Player::new((10, 10));
        p.inc_timed(TimedStatus::Cut, 10);
        assert!(p.dec_timed(TimedStatus::Cut, 20));
        assert_eq!(p.timed(TimedStatus::Cut), 0);
        assert!(!p.dec_timed(TimedStatus::Cut, 20));
    }

    #[test]
    fn test_stat_drain_and_restore() {
        let mut p = Player::new((10, 10));
        assert!(p.stat_dec(Stat::Str, false));
        assert_eq!(p.stat(Stat::Str).cur, 9);
        assert_eq!(p.stat(Stat::Str).max, 10);

        assert!(p.stat_restore(Stat::Str));
        assert_eq!(p.stat(Stat::Str).cur, 10);
        assert!(!p.stat_restore(Stat::Str));
    }

    #[test]
    fn test_permanent_drain_lowers_max() {
        let mut p = Player::new((10, 10));
        assert!(p.stat_dec(Stat::Con, true));
        assert_eq!(p.stat(Stat::Con).max, 9);
        assert!(!p.stat_restore(Stat::Con));
    }

    #[test]
    fn test_restore_level() {
        let mut p = Player::new((10, 10));
        p.exp_gain(1000);
        p.exp_lose(250);
        assert!(p.restore_level());
        assert_eq!(p.exp, 1000);
        assert!(!p.restore_level());
    }

    #[test]
    fn test_random_other_stat_excludes() {
        let mut rng = GameRng::new(42);
        for _ in 0..100 {
            assert_ne!(Stat::random_other(&mut rng, Stat::Int), Stat::Int);
        }
    }
}
