//! Core value types: RNG, dice notation, directions.

mod dice;
mod direction;
mod rng;

pub use dice::{boosted, damroll, Dice};
pub use direction::Direction;
pub use rng::{GameRng, GameRngState};
