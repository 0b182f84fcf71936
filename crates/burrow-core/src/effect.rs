//! Effects emitted by insect behaviors.
//!
//! Behaviors never touch the colony directly. They read it and return a list
//! of [`Effect`]s, which the [`resolver`](crate::resolver) applies in order.
//!
//! # Example
//!
//! ```
//! use burrow_core::effect::{Effect, EffectKind};
//! use burrow_core::insect::InsectId;
//!
//! let hit = Effect::Damage {
//!     target: InsectId::new(3),
//!     amount: 1.0,
//! };
//!
//! assert_eq!(hit.kind(), EffectKind::Combat);
//! assert_eq!(hit.target(), Some(InsectId::new(3)));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::insect::{BeeStatus, InsectId};
use crate::place::PlaceId;

/// A proposed change to the colony.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Effect {
    /// Reduce an insect's health.
    Damage {
        /// Insect hit.
        target: InsectId,
        /// Health to subtract.
        amount: f32,
    },
    /// Reduce an insect's health by all it has left.
    Slay {
        /// Insect eaten.
        target: InsectId,
    },
    /// Double an ant's damage, and that of any ant it contains.
    Double {
        /// Ant buffed.
        target: InsectId,
    },
    /// Add food to the colony's store.
    GainFood {
        /// Food produced.
        amount: u32,
    },
    /// Start a status on a bee.
    ApplyStatus {
        /// Bee affected.
        target: InsectId,
        /// Which status.
        status: BeeStatus,
        /// Duration in turns.
        turns: u32,
    },
    /// Count a bee's status down by one turn.
    DecayStatus {
        /// Bee affected.
        target: InsectId,
        /// Which status.
        status: BeeStatus,
    },
    /// Move a bee to another place.
    Move {
        /// Bee moving.
        bee: InsectId,
        /// Destination.
        to: PlaceId,
    },
    /// Set a hungry ant's digestion cooldown.
    SetCooldown {
        /// Ant digesting.
        ant: InsectId,
        /// Turns left.
        turns: u32,
    },
    /// Add to a laser ant's shot counter.
    RecordShots {
        /// Ant firing.
        ant: InsectId,
        /// Nonzero hits this turn.
        count: u32,
    },
}

/// Routing category of an effect.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    /// Health, doubling and statuses.
    Combat,
    /// Bee movement.
    Movement,
    /// Food and per-ant counters.
    Upkeep,
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Combat => write!(f, "Combat"),
            Self::Movement => write!(f, "Movement"),
            Self::Upkeep => write!(f, "Upkeep"),
        }
    }
}

impl Effect {
    /// Returns the routing category.
    #[must_use]
    pub const fn kind(&self) -> EffectKind {
        match self {
            Self::Damage { .. }
            | Self::Slay { .. }
            | Self::Double { .. }
            | Self::ApplyStatus { .. }
            | Self::DecayStatus { .. } => EffectKind::Combat,
            Self::Move { .. } => EffectKind::Movement,
            Self::GainFood { .. } | Self::SetCooldown { .. } | Self::RecordShots { .. } => {
                EffectKind::Upkeep
            }
        }
    }

    /// The insect this effect changes, if any.
    #[must_use]
    pub const fn target(&self) -> Option<InsectId> {
        match self {
            Self::Damage { target, .. }
            | Self::Slay { target }
            | Self::Double { target }
            | Self::ApplyStatus { target, .. }
            | Self::DecayStatus { target, .. } => Some(*target),
            Self::Move { bee, .. } => Some(*bee),
            Self::SetCooldown { ant, .. } | Self::RecordShots { ant, .. } => Some(*ant),
            Self::GainFood { .. } => None,
        }
    }
}
