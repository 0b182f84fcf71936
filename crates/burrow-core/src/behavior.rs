//! Behavior system for insect turns.
//!
//! This module provides the [`Behavior`] trait and supporting types for
//! implementing what an insect does on its turn. Behaviors read an immutable
//! [`Colony`] and emit [`Effect`]s that the turn loop hands to the resolvers.
//!
//! # Architecture
//!
//! Behaviors follow a read-only paradigm:
//! - Behaviors receive the colony by shared reference
//! - Behaviors emit [`Effect`]s as proposals for state changes
//! - Behaviors cannot directly mutate state
//! - Randomness comes only from the game's seeded generator
//!
//! # Behavior Registry
//!
//! The [`BehaviorRegistry`] maps each ant and bee variant to the behavior it
//! runs. Variants without a registered behavior are idle; containers still
//! hand their turn to the ant they hold.
//!
//! # Example
//!
//! ```
//! use burrow_core::behavior::{ActionContext, Behavior, BehaviorDeclaration, BehaviorRegistry};
//! use burrow_core::colony::Colony;
//! use burrow_core::effect::{Effect, EffectKind};
//! use burrow_core::insect::AntKind;
//! use rand_chacha::ChaCha8Rng;
//! use std::sync::Arc;
//!
//! struct Forage {
//!     declaration: BehaviorDeclaration,
//! }
//!
//! impl Behavior for Forage {
//!     fn declaration(&self) -> &BehaviorDeclaration {
//!         &self.declaration
//!     }
//!
//!     fn act(&self, _ctx: &ActionContext, _colony: &Colony, _rng: &mut ChaCha8Rng) -> Vec<Effect> {
//!         vec![Effect::GainFood { amount: 2 }]
//!     }
//! }
//!
//! let mut registry = BehaviorRegistry::standard();
//! registry.register_ant(
//!     AntKind::Harvester,
//!     Arc::new(Forage {
//!         declaration: BehaviorDeclaration::new("forage", vec![EffectKind::Upkeep]),
//!     }),
//! );
//!
//! assert_eq!(
//!     registry.for_ant(AntKind::Harvester).unwrap().declaration().id.as_str(),
//!     "forage"
//! );
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::colony::Colony;
use crate::effect::{Effect, EffectKind};
use crate::insect::{AntKind, BeeKind, Insect, InsectId, InsectInner};
use crate::place::PlaceId;

// =============================================================================
// Behavior Identification
// =============================================================================

/// Unique name of a behavior.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BehaviorId(String);

impl BehaviorId {
    /// Creates a behavior ID.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BehaviorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a behavior is and which effect kinds it may emit.
///
/// The turn loop drops any effect whose kind is not declared here.
#[derive(Debug, Clone)]
pub struct BehaviorDeclaration {
    /// Unique identifier.
    pub id: BehaviorId,
    /// Effect kinds this behavior may emit.
    pub emits: Vec<EffectKind>,
}

impl BehaviorDeclaration {
    /// Creates a declaration.
    #[must_use]
    pub fn new(id: &str, emits: Vec<EffectKind>) -> Self {
        Self {
            id: BehaviorId::new(id),
            emits,
        }
    }

    /// Checks if this behavior emits the given effect kind.
    #[must_use]
    pub fn emits_effect(&self, kind: EffectKind) -> bool {
        self.emits.contains(&kind)
    }
}

// =============================================================================
// Action Context
// =============================================================================

/// Who is acting, where, and when.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionContext {
    /// The acting insect.
    pub insect: InsectId,
    /// The place it acts from.
    pub place: PlaceId,
    /// Game time of the turn.
    pub time: u64,
}

// =============================================================================
// Behavior Trait
// =============================================================================

/// What an insect does on its turn.
///
/// # Implementation Guidelines
///
/// 1. **No side effects**: every change is expressed as an [`Effect`].
///
/// 2. **Determinism**: draw randomness from `rng` only, and always in the
///    same order for the same colony state.
///
/// 3. **Respect declarations**: only emit effect kinds listed in the
///    declaration.
pub trait Behavior: Send + Sync {
    /// Returns the behavior's declaration.
    fn declaration(&self) -> &BehaviorDeclaration;

    /// Decides the insect's turn.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The acting insect, its place and the game time
    /// * `colony` - Read-only view of the whole colony
    /// * `rng` - The game's seeded generator
    ///
    /// # Returns
    ///
    /// Effects to apply, in order.
    fn act(&self, ctx: &ActionContext, colony: &Colony, rng: &mut ChaCha8Rng) -> Vec<Effect>;
}

// =============================================================================
// Behavior Registry
// =============================================================================

/// Behaviors bundled by insect variant.
#[derive(Default)]
pub struct BehaviorRegistry {
    ants: HashMap<AntKind, Arc<dyn Behavior>>,
    bees: HashMap<BeeKind, Arc<dyn Behavior>>,
}

impl BehaviorRegistry {
    /// Creates an empty registry. Every insect is idle.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ants: HashMap::new(),
            bees: HashMap::new(),
        }
    }

    /// Sets the behavior of an ant variant, replacing any previous one.
    pub fn register_ant(&mut self, kind: AntKind, behavior: Arc<dyn Behavior>) {
        self.ants.insert(kind, behavior);
    }

    /// Sets the behavior of a bee variant, replacing any previous one.
    pub fn register_bee(&mut self, kind: BeeKind, behavior: Arc<dyn Behavior>) {
        self.bees.insert(kind, behavior);
    }

    /// Returns the behavior of an ant variant.
    #[must_use]
    pub fn for_ant(&self, kind: AntKind) -> Option<&Arc<dyn Behavior>> {
        self.ants.get(&kind)
    }

    /// Returns the behavior of a bee variant.
    #[must_use]
    pub fn for_bee(&self, kind: BeeKind) -> Option<&Arc<dyn Behavior>> {
        self.bees.get(&kind)
    }

    /// Returns the behavior of a concrete insect.
    #[must_use]
    pub fn for_insect(&self, insect: &Insect) -> Option<&Arc<dyn Behavior>> {
        match insect.inner() {
            InsectInner::Ant(ant) => self.for_ant(ant.kind()),
            InsectInner::Bee(bee) => self.for_bee(bee.kind()),
        }
    }

    /// Total number of registrations.
    #[must_use]
    pub fn registration_count(&self) -> usize {
        self.ants.len() + self.bees.len()
    }

    /// Creates a registry with the standard behavior of every variant.
    ///
    /// - Harvester: produces food
    /// - Thrower family (Thrower, Short, Long, Scuba, Slow, Scary): throws
    /// - Queen: throws, then doubles the ants behind her
    /// - Tank and Ninja: damage every bee in their place
    /// - Hungry: swallows a bee, then digests
    /// - Laser: beam through everything in front
    /// - Every bee: stings or advances
    ///
    /// Fire, Wall and Bodyguard have no behavior of their own.
    ///
    /// # Example
    ///
    /// ```
    /// use burrow_core::behavior::BehaviorRegistry;
    /// use burrow_core::insect::{AntKind, BeeKind};
    ///
    /// let registry = BehaviorRegistry::standard();
    ///
    /// assert!(registry.for_ant(AntKind::Thrower).is_some());
    /// assert!(registry.for_ant(AntKind::Wall).is_none());
    /// assert!(registry.for_bee(BeeKind::Boss).is_some());
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        use crate::behaviors::{
            BeeBehavior, ChewBehavior, HarvestBehavior, LaserBehavior, ReignBehavior,
            SweepBehavior, ThrowBehavior,
        };

        let mut registry = Self::new();

        registry.register_ant(AntKind::Harvester, Arc::new(HarvestBehavior::new()));

        let throw: Arc<dyn Behavior> = Arc::new(ThrowBehavior::new());
        for kind in [
            AntKind::Thrower,
            AntKind::Short,
            AntKind::Long,
            AntKind::Scuba,
            AntKind::Slow,
            AntKind::Scary,
        ] {
            registry.register_ant(kind, Arc::clone(&throw));
        }
        registry.register_ant(AntKind::Queen, Arc::new(ReignBehavior::new()));

        let sweep: Arc<dyn Behavior> = Arc::new(SweepBehavior::new());
        registry.register_ant(AntKind::Tank, Arc::clone(&sweep));
        registry.register_ant(AntKind::Ninja, sweep);

        registry.register_ant(AntKind::Hungry, Arc::new(ChewBehavior::new()));
        registry.register_ant(AntKind::Laser, Arc::new(LaserBehavior::new()));

        let bee: Arc<dyn Behavior> = Arc::new(BeeBehavior::new());
        for kind in BeeKind::ALL {
            registry.register_bee(kind, Arc::clone(&bee));
        }

        registry
    }
}

impl fmt::Debug for BehaviorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BehaviorRegistry")
            .field("ant_behaviors", &self.ants.len())
            .field("bee_behaviors", &self.bees.len())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
