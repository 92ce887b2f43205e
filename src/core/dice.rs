//! Dice notation and magnitude scaling.
//!
//! All numeric effect magnitudes are expressed in dice notation:
//! `amount = rolls d faces + bonus`. Offensive effects then scale the rolled
//! amount by the caster's boost percentage with integer truncation, which
//! must match exactly for reproducible damage figures.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// A dice expression: `rolls` dice of `faces` sides, plus `bonus`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dice {
    pub rolls: i32,
    pub faces: i32,
    pub bonus: i32,
}

impl Dice {
    /// `rolls` d `faces` with no flat bonus.
    #[must_use]
    pub const fn new(rolls: i32, faces: i32) -> Self {
        Self {
            rolls,
            faces,
            bonus: 0,
        }
    }

    /// `rolls` d `faces` + `bonus`.
    #[must_use]
    pub const fn plus(rolls: i32, faces: i32, bonus: i32) -> Self {
        Self {
            rolls,
            faces,
            bonus,
        }
    }

    /// Roll the expression.
    pub fn roll(self, rng: &mut GameRng) -> i32 {
        let mut total = self.bonus;
        for _ in 0..self.rolls.max(0) {
            total += rng.randint1(self.faces);
        }
        total
    }

    /// Minimum possible result.
    #[must_use]
    pub const fn min(self) -> i32 {
        self.rolls + self.bonus
    }

    /// Maximum possible result.
    #[must_use]
    pub const fn max(self) -> i32 {
        self.rolls * self.faces + self.bonus
    }
}

/// Roll `rolls` dice of `faces` sides and sum them.
pub fn damroll(rng: &mut GameRng, rolls: i32, faces: i32) -> i32 {
    Dice::new(rolls, faces).roll(rng)
}

/// Scale a magnitude by a boost percentage, truncating toward zero.
///
/// `boost` is the extent to which skill surpasses difficulty, in `[0, 138]`.
#[must_use]
pub const fn boosted(amount: i32, boost: i32) -> i32 {
    amount * (100 + boost) / 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_within_bounds() {
        let mut rng = GameRng::new(42);
        let dice = Dice::plus(4, 25, 75);

        for _ in 0..500 {
            let v = dice.roll(&mut rng);
            assert!(v >= dice.min() && v <= dice.max());
        }
    }

    #[test]
    fn test_zero_rolls() {
        let mut rng = GameRng::new(42);
        assert_eq!(Dice::plus(0, 8, 5).roll(&mut rng), 5);
    }

    #[test]
    fn test_boost_truncates() {
        assert_eq!(boosted(100, 0), 100);
        assert_eq!(boosted(100, 50), 150);
        assert_eq!(boosted(7, 50), 10); // 10.5 truncated
        assert_eq!(boosted(3, 33), 3); // 3.99 truncated
        assert_eq!(boosted(150, 138), 357);
    }

    #[test]
    fn test_damroll_matches_dice() {
        let mut a = GameRng::new(9);
        let mut b = GameRng::new(9);
        assert_eq!(damroll(&mut a, 9, 8), Dice::new(9, 8).roll(&mut b));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn boosted_truncates_toward_zero(amount in 0..100_000i32, boost in 0..=138i32) {
                let scaled = boosted(amount, boost);
                prop_assert_eq!(scaled, amount * (100 + boost) / 100);
                prop_assert!(scaled >= amount);
                // Truncation never overshoots the exact product.
                prop_assert!(
                    i64::from(scaled) * 100 <= i64::from(amount) * i64::from(100 + boost)
                );
            }

            #[test]
            fn boosted_is_monotone_in_boost(amount in 0..100_000i32, boost in 1..=138i32) {
                prop_assert!(boosted(amount, boost) >= boosted(amount, boost - 1));
            }

            #[test]
            fn roll_stays_within_dice_bounds(
                seed: u64,
                rolls in 1..40i32,
                faces in 1..100i32,
                bonus in 0..500i32,
            ) {
                let mut rng = GameRng::new(seed);
                let dice = Dice::plus(rolls, faces, bonus);
                let v = dice.roll(&mut rng);
                prop_assert!(v >= dice.min());
                prop_assert!(v <= dice.max());
            }
        }
    }
}
