//! Scheduled bee waves.
//!
//! An [`AssaultPlan`] says which bees enter the colony and when. A [`Hive`]
//! spawns every bee of the plan into the hive place up front, then releases
//! each wave into a random bee entrance when its time comes.
//!
//! # Example
//!
//! ```
//! use burrow_core::hive::AssaultPlan;
//! use burrow_core::insect::BeeKind;
//!
//! let plan = AssaultPlan::new()
//!     .add_wave(BeeKind::Bee, 3.0, 2, 1)
//!     .add_wave(BeeKind::Wasp, 3.0, 5, 2);
//!
//! assert_eq!(plan.len(), 3);
//! assert_eq!(plan.wave(5).len(), 2);
//! assert!(plan.wave(3).is_empty());
//! ```

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::colony::Colony;
use crate::error::{ColonyError, Halt};
use crate::insect::{BeeKind, InsectId};
use crate::place::PlaceId;

/// One bee of a wave.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeeSpec {
    /// Variant to spawn.
    pub kind: BeeKind,
    /// Starting health.
    pub health: f32,
}

/// Bees to release, keyed by game time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssaultPlan {
    waves: BTreeMap<u64, Vec<BeeSpec>>,
}

impl AssaultPlan {
    /// Creates a plan with no waves.
    #[must_use]
    pub fn new() -> Self {
        Self {
            waves: BTreeMap::new(),
        }
    }

    /// Adds `count` bees released at `time`, after any already scheduled then.
    #[must_use]
    pub fn add_wave(mut self, kind: BeeKind, health: f32, time: u64, count: usize) -> Self {
        self.waves
            .entry(time)
            .or_default()
            .extend(std::iter::repeat(BeeSpec { kind, health }).take(count));
        self
    }

    /// Bees released at `time`.
    #[must_use]
    pub fn wave(&self, time: u64) -> &[BeeSpec] {
        self.waves.get(&time).map_or(&[], Vec::as_slice)
    }

    /// Every bee of the plan, by release time.
    pub fn all_bees(&self) -> impl Iterator<Item = (u64, &BeeSpec)> + '_ {
        self.waves
            .iter()
            .flat_map(|(time, wave)| wave.iter().map(move |spec| (*time, spec)))
    }

    /// Total number of bees.
    #[must_use]
    pub fn len(&self) -> usize {
        self.waves.values().map(Vec::len).sum()
    }

    /// Returns `true` if the plan has no bees.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The place bees wait in, and the schedule they leave by.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hive {
    place: PlaceId,
    waves: BTreeMap<u64, Vec<InsectId>>,
}

impl Hive {
    /// Creates an empty hive around an existing hive place.
    #[must_use]
    pub fn new(place: PlaceId) -> Self {
        Self {
            place,
            waves: BTreeMap::new(),
        }
    }

    /// Spawns every bee of `plan` into the hive place.
    ///
    /// # Errors
    ///
    /// Returns the colony's halt if a bee cannot be placed in the hive.
    pub fn populate(&mut self, colony: &mut Colony, plan: &AssaultPlan) -> Result<(), Halt> {
        for (time, spec) in plan.all_bees() {
            let bee = colony.spawn_bee(spec.kind, spec.health);
            colony.add_insect(self.place, bee)?;
            self.waves.entry(time).or_default().push(bee);
        }
        debug!(bees = plan.len(), waves = self.waves.len(), "hive populated");
        Ok(())
    }

    /// The hive place.
    #[must_use]
    pub const fn place(&self) -> PlaceId {
        self.place
    }

    /// Number of bees not yet released.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.waves.values().map(Vec::len).sum()
    }

    /// Moves the wave scheduled for `time` into random bee entrances.
    ///
    /// Bee entrances are the registered places whose entrance is the hive,
    /// in registration order. Returns the released bees.
    ///
    /// # Errors
    ///
    /// Returns [`ColonyError::NoBeeEntrances`] if a wave is due but nothing
    /// leads out of the hive.
    pub fn release(
        &mut self,
        time: u64,
        colony: &mut Colony,
        rng: &mut ChaCha8Rng,
    ) -> Result<Vec<InsectId>, Halt> {
        let Some(wave) = self.waves.remove(&time) else {
            return Ok(Vec::new());
        };

        let exits: Vec<PlaceId> = colony
            .places()
            .filter(|place| place.entrance() == Some(self.place))
            .map(|place| place.id())
            .collect();
        if exits.is_empty() {
            return Err(ColonyError::NoBeeEntrances.into());
        }

        for &bee in &wave {
            if let Some(&exit) = exits.choose(rng) {
                colony.move_bee(bee, exit)?;
            }
        }
        debug!(time, bees = wave.len(), "wave released");
        Ok(wave)
    }
}
