//! Effect dispatch.
//!
//! `Effects` is the one entry point callers use: build it once, then
//! `resolve` an effect id against a world. Lookup is a single indexed
//! probe into a dense table, so resolution cost does not depend on how
//! many effects exist.

use std::fmt;

use crate::core::Direction;
use crate::world::GameWorld;

use super::handlers::HandlerTable;
use super::kind::EffectKind;
use super::registry::EffectRegistry;
use super::EffectContext;

/// Why a resolution could not run a handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectError {
    /// The id is outside the declared range.
    InvalidId(u16),
    /// The id is declared but has no handler.
    Unhandled(EffectKind),
}

impl fmt::Display for EffectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffectError::InvalidId(id) => write!(f, "invalid effect id {id}"),
            EffectError::Unhandled(kind) => write!(f, "effect {kind:?} has no handler"),
        }
    }
}

impl std::error::Error for EffectError {}

/// The effect engine: metadata plus the handler table.
pub struct Effects {
    registry: EffectRegistry,
    handlers: HandlerTable,
}

impl Default for Effects {
    fn default() -> Self {
        Self::new()
    }
}

impl Effects {
    /// Engine with the standard registry and every stock handler.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: EffectRegistry::standard(),
            handlers: HandlerTable::standard(),
        }
    }

    /// Static metadata about the declared effects.
    #[must_use]
    pub fn registry(&self) -> &EffectRegistry {
        &self.registry
    }

    /// Resolve one effect against the world.
    ///
    /// Returns whether the effect's core action occurred. `ident` is
    /// read-write: it seeds the context (an already-identified item stays
    /// identified) and receives the final observability flag. A bad or
    /// unhandled id emits a player-visible notice, leaves `ident` alone,
    /// and returns `false`.
    pub fn resolve(
        &self,
        world: &mut GameWorld,
        id: u16,
        ident: &mut bool,
        aware: bool,
        dir: Option<Direction>,
        beam: i32,
        boost: i32,
    ) -> bool {
        let Some(kind) = EffectKind::from_id(id) else {
            log::warn!("{}", EffectError::InvalidId(id));
            world.msg("Bad effect passed to the resolver.  Please report this bug.");
            return false;
        };
        let Some(handler) = self.handlers.get(id) else {
            log::warn!("{}", EffectError::Unhandled(kind));
            world.msg("Effect not handled.");
            return false;
        };

        let mut ctx = EffectContext::new(aware, dir, beam, boost);
        ctx.ident = *ident;
        let completed = handler(world, &mut ctx);
        *ident = ctx.ident;
        completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_id_notices_and_fails() {
        let effects = Effects::new();
        let mut world = GameWorld::new(1);
        let mut ident = false;

        assert!(!effects.resolve(&mut world, 0, &mut ident, true, None, 0, 0));
        assert!(!effects.resolve(&mut world, 9999, &mut ident, true, None, 0, 0));
        assert!(!ident);
        assert_eq!(world.messages().len(), 2);
        assert!(world.messages()[0].text.starts_with("Bad effect"));
    }

    #[test]
    fn test_unhandled_id_notices_once() {
        let effects = Effects::new();
        let mut world = GameWorld::new(1);
        let mut ident = false;

        let id = EffectKind::Reserved.id();
        assert!(!effects.resolve(&mut world, id, &mut ident, true, None, 0, 0));
        assert!(!ident);
        assert_eq!(world.messages().len(), 1);
        assert_eq!(world.messages()[0].text, "Effect not handled.");
    }

    #[test]
    fn test_ident_seeds_and_survives() {
        let effects = Effects::new();
        let mut world = GameWorld::new(1);
        // Already identified; a silent no-op heal must not clear it.
        let mut ident = true;

        let id = EffectKind::GainExp.id();
        assert!(effects.resolve(&mut world, id, &mut ident, true, None, 0, 0));
        assert!(ident);
    }
}
