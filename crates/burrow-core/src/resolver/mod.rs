//! Resolver module: the write phase of an insect's turn.
//!
//! Resolvers take the effects a behavior emitted and apply them to the
//! colony. They are the only place where a turn's proposals become state.
//!
//! # Architecture
//!
//! Each resolver declares which effect kinds it handles via
//! [`Resolver::handles()`]. A [`ResolverSet`] walks the effects in emission
//! order and hands each one to every resolver that handles its kind, so the
//! order a behavior emits in is the order the colony sees.
//!
//! # Available Resolvers
//!
//! - [`CombatResolver`]: Health, doubling and bee statuses
//! - [`MovementResolver`]: Bee movement
//! - [`UpkeepResolver`]: Food and per-ant counters

mod combat;
mod movement;
mod upkeep;

pub use combat::CombatResolver;
pub use movement::MovementResolver;
pub use upkeep::UpkeepResolver;

use std::fmt;

use crate::colony::Colony;
use crate::effect::{Effect, EffectKind};
use crate::error::Halt;

/// Mutable game state a resolver may write to.
pub struct Resolution<'a> {
    /// Places and insects.
    pub colony: &'a mut Colony,
    /// The colony's food store.
    pub food: &'a mut u32,
}

/// Applies effects of the kinds it handles.
///
/// # Implementation Guidelines
///
/// 1. **Determinism**: the same effect applied to the same state must
///    produce the same result.
///
/// 2. **Stop on halt**: return the colony's [`Halt`] unchanged; the turn loop
///    decides what a game over or a fault means.
///
/// # Example
///
/// ```
/// use burrow_core::effect::{Effect, EffectKind};
/// use burrow_core::error::Halt;
/// use burrow_core::resolver::{Resolution, Resolver};
///
/// struct Bounty;
///
/// impl Resolver for Bounty {
///     fn handles(&self) -> &[EffectKind] {
///         &[EffectKind::Combat]
///     }
///
///     fn resolve(&self, _effect: &Effect, target: &mut Resolution<'_>) -> Result<(), Halt> {
///         *target.food += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Resolver: Send + Sync {
    /// Returns the effect kinds this resolver handles.
    fn handles(&self) -> &[EffectKind];

    /// Applies one effect.
    ///
    /// # Errors
    ///
    /// Returns the [`Halt`] raised by the colony while applying the effect.
    fn resolve(&self, effect: &Effect, target: &mut Resolution<'_>) -> Result<(), Halt>;
}

/// Ordered group of resolvers.
#[derive(Default)]
pub struct ResolverSet {
    resolvers: Vec<Box<dyn Resolver>>,
}

impl ResolverSet {
    /// Creates an empty set. Every effect is ignored.
    #[must_use]
    pub fn new() -> Self {
        Self {
            resolvers: Vec::new(),
        }
    }

    /// The combat, movement and upkeep resolvers.
    #[must_use]
    pub fn standard() -> Self {
        let mut set = Self::new();
        set.add(Box::new(CombatResolver::new()));
        set.add(Box::new(MovementResolver::new()));
        set.add(Box::new(UpkeepResolver::new()));
        set
    }

    /// Appends a resolver.
    pub fn add(&mut self, resolver: Box<dyn Resolver>) {
        self.resolvers.push(resolver);
    }

    /// Number of resolvers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    /// Returns `true` if the set has no resolvers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    /// Applies effects in order, stopping at the first halt.
    ///
    /// # Errors
    ///
    /// Returns the first [`Halt`] any resolver raises. Later effects are not
    /// applied.
    pub fn apply(
        &self,
        effects: &[Effect],
        colony: &mut Colony,
        food: &mut u32,
    ) -> Result<(), Halt> {
        let mut target = Resolution { colony, food };
        for effect in effects {
            let kind = effect.kind();
            for resolver in &self.resolvers {
                if resolver.handles().contains(&kind) {
                    resolver.resolve(effect, &mut target)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ResolverSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverSet")
            .field("resolver_count", &self.resolvers.len())
            .finish()
    }
}
