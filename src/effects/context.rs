//! Per-invocation effect parameters.

use crate::core::{boosted, Direction};

/// Parameters of one effect invocation, plus the observability flag the
/// handlers fill in.
///
/// `ident` and the handler's return value are independent signals: the
/// return value says whether the core action happened; `ident` says
/// whether the player could tell what the item does. A teleport that
/// fizzles for lack of open floor still identifies the scroll.
#[derive(Debug)]
pub struct EffectContext {
    /// Is the player already aware of what this item does?
    pub aware: bool,
    /// Aim direction, for effects that project.
    pub dir: Option<Direction>,
    /// Percent chance that a bolt-or-beam effect fires a beam.
    pub beam: i32,
    /// Device damage boost, in percent over 100.
    pub boost: i32,
    /// Set when the effect produced something the player could observe.
    pub ident: bool,
}

impl EffectContext {
    #[must_use]
    pub fn new(aware: bool, dir: Option<Direction>, beam: i32, boost: i32) -> Self {
        Self {
            aware,
            dir,
            beam,
            boost,
            ident: false,
        }
    }

    /// Scale a damage amount by this invocation's boost.
    #[must_use]
    pub const fn boosted(&self, amount: i32) -> i32 {
        boosted(amount, self.boost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boost_scaling() {
        let ctx = EffectContext::new(true, None, 0, 50);
        assert_eq!(ctx.boosted(100), 150);
        // Integer truncation, never rounding.
        assert_eq!(ctx.boosted(7), 10);

        let flat = EffectContext::new(true, None, 0, 0);
        assert_eq!(flat.boosted(100), 100);
    }
}
