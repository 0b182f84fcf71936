//! Movement resolver for bees.

use crate::effect::{Effect, EffectKind};
use crate::error::Halt;

use super::{Resolution, Resolver};

/// Moves bees between places.
///
/// Entering the home base ends the game with a loss; entering water is
/// harmless because bees are waterproof.
#[derive(Debug, Clone, Default)]
pub struct MovementResolver;

impl MovementResolver {
    /// Creates a new movement resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Resolver for MovementResolver {
    fn handles(&self) -> &[EffectKind] {
        &[EffectKind::Movement]
    }

    fn resolve(&self, effect: &Effect, target: &mut Resolution<'_>) -> Result<(), Halt> {
        match *effect {
            Effect::Move { bee, to } => target.colony.move_bee(bee, to),
            _ => Ok(()),
        }
    }
}
