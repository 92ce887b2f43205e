//! A roguelike effect resolution engine.
//!
//! This crate implements the layer of a dungeon crawler that answers "the
//! player zapped wand 17, what happens?": a catalog of over two hundred
//! magical and mechanical effects, the state they mutate, and a dispatcher
//! that resolves an effect id against a game world.
//!
//! The interesting contract is the dual result of every resolution. One
//! signal reports whether the effect's core action occurred, which drives
//! resource consumption (spend the charge, eat the mushroom). The other,
//! the `ident` flag, reports whether the player could observe what the
//! item does, which drives item identification. The two are independent,
//! and conflating them is the classic bug this design exists to prevent.
//!
//! # Layout
//!
//! - [`core`]: seeded RNG, dice notation, compass directions.
//! - [`player`]: the player record and its mutation protocols.
//! - [`world`]: the state handle handlers receive: dungeon grid,
//!   monsters, items, messages.
//! - [`effects`]: the effect catalog, registry, and dispatcher.
//!
//! # Example
//!
//! ```
//! use rogue_effects::effects::{EffectKind, Effects};
//! use rogue_effects::world::GameWorld;
//!
//! let effects = Effects::new();
//! let mut world = GameWorld::new(0xdeadbeef);
//! let mut ident = false;
//!
//! // Quaff an unidentified potion of cure light wounds at full health:
//! // the potion is consumed but teaches the player nothing.
//! let consumed = effects.resolve(
//!     &mut world,
//!     EffectKind::CureLight.id(),
//!     &mut ident,
//!     false,
//!     None,
//!     0,
//!     0,
//! );
//! assert!(consumed);
//! assert!(!ident);
//! ```

pub mod core;
pub mod effects;
pub mod player;
pub mod world;

pub use effects::{EffectContext, EffectKind, Effects};
pub use world::GameWorld;
