//! Game outcomes and colony errors.
//!
//! Two kinds of things can stop the turn loop:
//! - An [`Outcome`]: the ants won or lost. This is a normal end of the game.
//! - A [`ColonyError`]: a broken placement contract (two blocking ants in one
//!   place, removing an ant that is not there, ...). These are programming
//!   errors and are never retried.
//!
//! Inside the simulation both travel through [`Halt`] so that placement,
//! damage and effect resolution can bail out with `?` from any depth.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::insect::InsectId;
use crate::place::PlaceId;

/// Why the ants lost.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LossCause {
    /// A bee entered the ant home base.
    HomeBaseBreached,
    /// The queen ant's health reached zero.
    QueenPerished,
}

impl fmt::Display for LossCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HomeBaseBreached => write!(f, "the bees reached the home base"),
            Self::QueenPerished => write!(f, "the queen has perished"),
        }
    }
}

/// Final result of a game.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Every bee has been vanquished.
    AntsWin,
    /// The colony fell.
    AntsLose(LossCause),
}

impl Outcome {
    /// Returns `true` if the ants won.
    #[must_use]
    pub const fn ants_won(self) -> bool {
        matches!(self, Self::AntsWin)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AntsWin => write!(f, "all bees are vanquished, the ants win"),
            Self::AntsLose(cause) => write!(f, "the ants lose: {cause}"),
        }
    }
}

/// Contract violations raised by the colony.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColonyError {
    /// Neither the incoming ant nor the resident can contain the other.
    #[error("too many ants in {place}")]
    TooManyAnts {
        /// Name of the contested place.
        place: String,
    },

    /// The ant is neither the top-level occupant nor held by it.
    #[error("ant {ant} is not in {place}")]
    AntNotInPlace {
        /// The ant that was asked to leave.
        ant: InsectId,
        /// Name of the place.
        place: String,
    },

    /// A container was asked to release an ant it does not hold.
    #[error("ant {container} does not contain ant {ant}")]
    NotContained {
        /// The top-level ant of the place.
        container: InsectId,
        /// The ant that was asked to leave.
        ant: InsectId,
    },

    /// The bee is not listed in the place it claims to occupy.
    #[error("bee {bee} is not in {place}")]
    BeeNotInPlace {
        /// The bee that was asked to leave.
        bee: InsectId,
        /// Name of the place.
        place: String,
    },

    /// Ants can never occupy the home base.
    #[error("cannot add ant {0} to the home base")]
    AntAtHomeBase(InsectId),

    /// No ant type is registered under this name.
    #[error("unknown ant type: {0}")]
    UnknownAntType(String),

    /// No place is registered under this name.
    #[error("unknown place: {0}")]
    UnknownPlace(String),

    /// The insect id does not exist in the colony.
    #[error("insect {0} not found")]
    InsectNotFound(InsectId),

    /// The place id does not exist in the colony.
    #[error("place {0} not found")]
    PlaceNotFound(PlaceId),

    /// An ant-only operation was given a bee.
    #[error("insect {0} is not an ant")]
    NotAnAnt(InsectId),

    /// A bee-only operation was given an ant.
    #[error("insect {0} is not a bee")]
    NotABee(InsectId),

    /// The ant type exists but may not be deployed.
    #[error("ant type {0} is not implemented")]
    NotImplemented(String),

    /// The hive has bees to release but no place leads out of it.
    #[error("the hive has no bee entrances")]
    NoBeeEntrances,
}

/// Signal that interrupts a phase of the turn loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Halt {
    /// The game ended.
    #[error("game over: {0}")]
    GameOver(Outcome),

    /// A colony contract was violated.
    #[error(transparent)]
    Fault(#[from] ColonyError),
}

impl Halt {
    /// Shorthand for a loss with the given cause.
    #[must_use]
    pub const fn lose(cause: LossCause) -> Self {
        Self::GameOver(Outcome::AntsLose(cause))
    }
}
