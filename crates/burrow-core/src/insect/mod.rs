//! Insect module: the combatants of the colony.
//!
//! This module provides the insect types for Burrow's tunnel defense:
//! - [`InsectId`]: Unique identifier for insects
//! - [`InsectTag`]: Ant or bee
//! - [`InsectInner`]: Type-safe storage for ant- or bee-specific state
//! - [`Insect`]: The complete insect container
//!
//! # Architecture
//!
//! Every insect shares the same envelope (ID, health, place). What differs
//! between variants lives in [`InsectInner`], and the fixed numbers of every
//! variant live in the static tables of [`kinds`].
//!
//! # Example
//!
//! ```
//! use burrow_core::insect::{AntKind, Insect, InsectId, InsectTag};
//!
//! let ant = Insect::new_ant(InsectId::new(42), AntKind::Wall);
//!
//! assert_eq!(ant.id().as_u64(), 42);
//! assert_eq!(ant.tag(), InsectTag::Ant);
//! assert_eq!(ant.health(), 4.0);
//! ```

pub mod components;
pub mod kinds;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::place::PlaceId;

pub use components::{AntState, AntTraits, BeeState, BeeStatus};
pub use kinds::{AntKind, AntProfile, BeeKind, Payload, ThrowRange};

/// Unique identifier for an insect.
///
/// IDs are handed out in increasing order by the colony and are never
/// reused, so they also order insects by creation time.
///
/// # Example
///
/// ```
/// use burrow_core::insect::InsectId;
///
/// let first = InsectId::new(1);
/// let second = InsectId::new(2);
///
/// assert!(first < second);
/// assert_eq!(first.as_u64(), 1);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InsectId(u64);

impl InsectId {
    /// Creates a new `InsectId` from a raw `u64` value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` value of this identifier.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for InsectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InsectId({})", self.0)
    }
}

impl fmt::Display for InsectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for InsectId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

/// Which side an insect fights on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsectTag {
    /// Defender, placed by the player.
    Ant,
    /// Attacker, released by the hive.
    Bee,
}

impl fmt::Display for InsectTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ant => write!(f, "Ant"),
            Self::Bee => write!(f, "Bee"),
        }
    }
}

/// Type-safe storage for variant state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InsectInner {
    /// Ant state (damage, containment, cooldowns).
    Ant(AntState),
    /// Bee state (status timers).
    Bee(BeeState),
}

impl InsectInner {
    /// Returns the matching tag.
    #[must_use]
    pub const fn tag(&self) -> InsectTag {
        match self {
            Self::Ant(_) => InsectTag::Ant,
            Self::Bee(_) => InsectTag::Bee,
        }
    }
}

/// A single ant or bee.
///
/// # Invariants
///
/// - The `InsectId` is unique within a colony
/// - An insect with health at or below zero has no place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insect {
    id: InsectId,
    pub(crate) health: f32,
    pub(crate) place: Option<PlaceId>,
    inner: InsectInner,
}

impl Insect {
    /// Creates a free-standing insect.
    #[must_use]
    pub const fn new(id: InsectId, health: f32, inner: InsectInner) -> Self {
        Self {
            id,
            health,
            place: None,
            inner,
        }
    }

    /// Creates an ant with its variant's starting health.
    #[must_use]
    pub fn new_ant(id: InsectId, kind: AntKind) -> Self {
        Self::new(id, kind.profile().health, InsectInner::Ant(AntState::new(kind)))
    }

    /// Creates a bee with the given health.
    #[must_use]
    pub const fn new_bee(id: InsectId, kind: BeeKind, health: f32) -> Self {
        Self::new(id, health, InsectInner::Bee(BeeState::new(kind)))
    }

    /// Returns the insect's unique identifier.
    #[must_use]
    pub const fn id(&self) -> InsectId {
        self.id
    }

    /// Returns ant or bee.
    #[must_use]
    pub const fn tag(&self) -> InsectTag {
        self.inner.tag()
    }

    /// Remaining health.
    #[must_use]
    pub const fn health(&self) -> f32 {
        self.health
    }

    /// Returns `true` while health is above zero.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// The place this insect stands in, if any.
    #[must_use]
    pub const fn place(&self) -> Option<PlaceId> {
        self.place
    }

    /// Variant name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match &self.inner {
            InsectInner::Ant(ant) => ant.kind().name(),
            InsectInner::Bee(bee) => bee.kind().name(),
        }
    }

    /// Damage this insect deals per hit.
    #[must_use]
    pub const fn damage(&self) -> f32 {
        match &self.inner {
            InsectInner::Ant(ant) => ant.damage(),
            InsectInner::Bee(bee) => bee.damage(),
        }
    }

    /// Bees are always waterproof; ants depend on their variant.
    #[must_use]
    pub const fn is_waterproof(&self) -> bool {
        match &self.inner {
            InsectInner::Ant(ant) => ant.is_waterproof(),
            InsectInner::Bee(_) => true,
        }
    }

    /// Returns the inner variant state.
    #[must_use]
    pub const fn inner(&self) -> &InsectInner {
        &self.inner
    }

    /// Returns `true` if this is an ant.
    #[must_use]
    pub const fn is_ant(&self) -> bool {
        matches!(self.inner, InsectInner::Ant(_))
    }

    /// Returns `true` if this is a bee.
    #[must_use]
    pub const fn is_bee(&self) -> bool {
        matches!(self.inner, InsectInner::Bee(_))
    }

    /// Returns the ant state if this is an ant.
    #[must_use]
    pub const fn as_ant(&self) -> Option<&AntState> {
        match &self.inner {
            InsectInner::Ant(ant) => Some(ant),
            InsectInner::Bee(_) => None,
        }
    }

    /// Returns mutable ant state if this is an ant.
    #[must_use]
    pub fn as_ant_mut(&mut self) -> Option<&mut AntState> {
        match &mut self.inner {
            InsectInner::Ant(ant) => Some(ant),
            InsectInner::Bee(_) => None,
        }
    }

    /// Returns the bee state if this is a bee.
    #[must_use]
    pub const fn as_bee(&self) -> Option<&BeeState> {
        match &self.inner {
            InsectInner::Bee(bee) => Some(bee),
            InsectInner::Ant(_) => None,
        }
    }

    /// Returns mutable bee state if this is a bee.
    #[must_use]
    pub fn as_bee_mut(&mut self) -> Option<&mut BeeState> {
        match &mut self.inner {
            InsectInner::Bee(bee) => Some(bee),
            InsectInner::Ant(_) => None,
        }
    }
}

impl fmt::Display for Insect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.place {
            Some(place) => write!(f, "{}({}, place {})", self.name(), self.health, place),
            None => write!(f, "{}({}, None)", self.name(), self.health),
        }
    }
}
