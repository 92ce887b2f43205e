//! The effect engine.
//!
//! Everything a wand zap, potion quaff, or sprung trap does to the game
//! flows through here. An effect is named by an [`EffectKind`] (a stable
//! numeric id on the wire), described by the [`EffectRegistry`], and
//! executed by a handler looked up in a dense table.
//!
//! Two result signals come out of every resolution and they are not the
//! same thing:
//!
//! - the return value of [`Effects::resolve`] says whether the effect's
//!   core action occurred (the charge should be spent, the potion
//!   consumed);
//! - the `ident` flag says whether the player could observe what the item
//!   does (the item's kind should be learned).
//!
//! A healing potion quaffed at full health completes without being
//! observable; a teleport scroll that finds no open floor is observable
//! without completing.

mod context;
mod dispatcher;
mod handlers;
mod kind;
mod registry;
mod wonder;

pub mod protocols;

pub use context::EffectContext;
pub use dispatcher::{EffectError, Effects};
pub use handlers::{Handler, HandlerTable};
pub use kind::EffectKind;
pub use registry::{EffectInfo, EffectRegistry};
pub use wonder::{resolve_wonder, wonder_band, WonderAction, WONDER_BANDS};
