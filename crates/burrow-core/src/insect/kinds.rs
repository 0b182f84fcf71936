//! Static tables of ant and bee variants.
//!
//! Every variant is declared here once, with its cost, starting health,
//! damage and capability traits. [`AntKind::ALL`] is the complete, ordered
//! list the ant type registry is built from.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::components::AntTraits;

/// Fixed numbers describing an ant variant.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AntProfile {
    /// Display and lookup name.
    pub name: &'static str,
    /// Food needed to deploy one.
    pub food_cost: u32,
    /// Starting health.
    pub health: f32,
    /// Starting damage.
    pub damage: f32,
    /// Capabilities.
    pub traits: AntTraits,
}

/// Inclusive window of hops, counted backward along entrances, that a
/// ranged ant can reach.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThrowRange {
    /// Closest reachable distance.
    pub lower: u32,
    /// Farthest reachable distance.
    pub upper: u32,
}

impl ThrowRange {
    /// Largest distance any thrower looks at.
    pub const MAX_DISTANCE: u32 = 0x7F;

    /// Unrestricted range.
    pub const FULL: Self = Self::new(0, Self::MAX_DISTANCE);

    /// Creates a range.
    #[must_use]
    pub const fn new(lower: u32, upper: u32) -> Self {
        Self { lower, upper }
    }

    /// Returns `true` if `hops` is inside the window.
    #[must_use]
    pub const fn contains(self, hops: u32) -> bool {
        hops >= self.lower && hops <= self.upper
    }
}

/// What a ranged ant's projectile does to the bee it hits.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Payload {
    /// Deals the thrower's damage.
    Leaf,
    /// Slows the bee for this many turns.
    Slow {
        /// Duration.
        turns: u32,
    },
    /// Scares the bee for this many turns, once per bee.
    Scare {
        /// Duration.
        turns: u32,
    },
}

const BLOCKS: AntTraits = AntTraits::BLOCKS_PATH;
const GUARD: AntTraits = AntTraits::BLOCKS_PATH.union(AntTraits::CONTAINER);
const DIVER: AntTraits = AntTraits::BLOCKS_PATH.union(AntTraits::WATERPROOF);

/// Every ant variant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AntKind {
    /// Produces one food per turn.
    Harvester,
    /// Throws a leaf at the nearest bee.
    Thrower,
    /// Thrower limited to 3 hops.
    Short,
    /// Thrower that only reaches 5 hops or more.
    Long,
    /// Burns the bees around it when it dies.
    Fire,
    /// Sturdy blocker.
    Wall,
    /// Swallows a bee whole, then digests for a while.
    Hungry,
    /// Container that shields another ant.
    Bodyguard,
    /// Container that also damages every bee in its place.
    Tank,
    /// Waterproof thrower.
    Scuba,
    /// Thrower that doubles the damage of the ants behind her.
    Queen,
    /// Thrower that slows bees.
    Slow,
    /// Thrower that scares bees back toward the hive.
    Scary,
    /// Lets bees pass while damaging all of them.
    Ninja,
    /// Fires a beam through every insect in front of it.
    Laser,
}

impl AntKind {
    /// Turns a hungry ant spends digesting.
    pub const CHEW_COOLDOWN: u32 = 3;

    /// Every variant in registry order.
    pub const ALL: [Self; 15] = [
        Self::Harvester,
        Self::Thrower,
        Self::Short,
        Self::Long,
        Self::Fire,
        Self::Wall,
        Self::Hungry,
        Self::Bodyguard,
        Self::Tank,
        Self::Scuba,
        Self::Queen,
        Self::Slow,
        Self::Scary,
        Self::Ninja,
        Self::Laser,
    ];

    /// Returns the fixed numbers of this variant.
    #[must_use]
    pub const fn profile(self) -> AntProfile {
        const fn p(
            name: &'static str,
            food_cost: u32,
            health: f32,
            damage: f32,
            traits: AntTraits,
        ) -> AntProfile {
            AntProfile {
                name,
                food_cost,
                health,
                damage,
                traits,
            }
        }

        match self {
            Self::Harvester => p("Harvester", 2, 1.0, 0.0, BLOCKS),
            Self::Thrower => p("Thrower", 3, 1.0, 1.0, BLOCKS),
            Self::Short => p("Short", 2, 1.0, 1.0, BLOCKS),
            Self::Long => p("Long", 2, 1.0, 1.0, BLOCKS),
            Self::Fire => p("Fire", 5, 3.0, 3.0, BLOCKS),
            Self::Wall => p("Wall", 4, 4.0, 0.0, BLOCKS),
            Self::Hungry => p("Hungry", 4, 1.0, 0.0, BLOCKS),
            Self::Bodyguard => p("Bodyguard", 4, 2.0, 0.0, GUARD),
            Self::Tank => p("Tank", 6, 2.0, 1.0, GUARD),
            Self::Scuba => p("Scuba", 6, 1.0, 1.0, DIVER),
            Self::Queen => p("Queen", 7, 1.0, 1.0, BLOCKS),
            Self::Slow => p("Slow", 6, 1.0, 1.0, BLOCKS),
            Self::Scary => p("Scary", 6, 1.0, 1.0, BLOCKS),
            Self::Ninja => p("Ninja", 5, 1.0, 1.0, AntTraits::empty()),
            Self::Laser => p("Laser", 10, 1.0, 2.0, BLOCKS),
        }
    }

    /// Display and lookup name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.profile().name
    }

    /// Looks a variant up by its name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Reach of ranged variants, `None` for everything else.
    #[must_use]
    pub const fn throw_range(self) -> Option<ThrowRange> {
        match self {
            Self::Thrower | Self::Scuba | Self::Queen | Self::Slow | Self::Scary => {
                Some(ThrowRange::FULL)
            }
            Self::Short => Some(ThrowRange::new(0, 3)),
            Self::Long => Some(ThrowRange::new(5, ThrowRange::MAX_DISTANCE)),
            _ => None,
        }
    }

    /// What this variant's projectiles do.
    #[must_use]
    pub const fn payload(self) -> Payload {
        match self {
            Self::Slow => Payload::Slow { turns: 5 },
            Self::Scary => Payload::Scare { turns: 2 },
            _ => Payload::Leaf,
        }
    }
}

impl fmt::Display for AntKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Every bee variant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum BeeKind {
    /// Ordinary bee.
    #[default]
    Bee,
    /// Bee with a stronger sting.
    Wasp,
    /// Leader of the bees. No single hit takes more than a fixed amount.
    Boss,
}

impl BeeKind {
    /// Every variant.
    pub const ALL: [Self; 3] = [Self::Bee, Self::Wasp, Self::Boss];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bee => "Bee",
            Self::Wasp => "Wasp",
            Self::Boss => "Boss",
        }
    }

    /// Damage dealt by one sting.
    #[must_use]
    pub const fn damage(self) -> f32 {
        match self {
            Self::Bee => 1.0,
            Self::Wasp | Self::Boss => 2.0,
        }
    }

    /// Upper bound on any single health reduction, if the variant has one.
    #[must_use]
    pub const fn damage_cap(self) -> Option<f32> {
        match self {
            Self::Boss => Some(8.0),
            Self::Bee | Self::Wasp => None,
        }
    }
}

impl fmt::Display for BeeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
