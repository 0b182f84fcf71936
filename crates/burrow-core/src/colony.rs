//! Colony module: owner of every place and insect in a game.
//!
//! The colony is the container for the tunnel topology and the insects in it.
//! It provides:
//! - Insect storage with deterministic iteration order (`BTreeMap`)
//! - Place storage, indexed by [`PlaceId`] and, once registered, by name
//! - The placement rules (containment, water, home base)
//! - Health reduction, including death side effects
//!
//! # Architecture
//!
//! Places and insects refer to each other by ID only. Every rule that touches
//! both sides of that relation (adding, removing, moving, dying) lives here, so
//! the two sides can never disagree.
//!
//! Insect IDs are monotonically increasing. Dead insects stay in storage with
//! no place; they no longer act and are not counted as in play.
//!
//! # Example
//!
//! ```
//! use burrow_core::colony::Colony;
//! use burrow_core::insect::{AntKind, BeeKind};
//! use burrow_core::place::PlaceKind;
//!
//! let mut colony = Colony::new();
//! let base = colony.add_place("Ant Home Base", PlaceKind::HomeBase, None).unwrap();
//! let tunnel = colony.add_place("tunnel_0_0", PlaceKind::Tunnel, Some(base)).unwrap();
//! colony.register(tunnel).unwrap();
//!
//! let wall = colony.spawn_ant(AntKind::Wall);
//! colony.add_insect(tunnel, wall).unwrap();
//!
//! let bee = colony.spawn_bee(BeeKind::Bee, 3.0);
//! colony.add_insect(tunnel, bee).unwrap();
//!
//! assert_eq!(colony.blocking_ant(tunnel), Some(wall));
//! assert_eq!(colony.place(base).unwrap().entrance(), Some(tunnel));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ColonyError, Halt, LossCause};
use crate::insect::{AntKind, AntState, BeeKind, BeeState, Insect, InsectId};
use crate::place::{Place, PlaceId, PlaceKind};

/// Every place and insect of one game.
///
/// # Determinism
///
/// Insects are stored in a `BTreeMap` keyed by monotonically increasing IDs,
/// and registered places keep their registration order. All iteration is
/// therefore stable across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Colony {
    /// Monotonically increasing insect ID counter.
    next_id: u64,
    /// Insect storage, alive or dead.
    insects: BTreeMap<InsectId, Insect>,
    /// Every place ever created, indexed by `PlaceId`.
    places: Vec<Place>,
    /// Registered places in registration order.
    registered: Vec<PlaceId>,
    /// Name lookup for registered places.
    names: BTreeMap<String, PlaceId>,
}

impl Colony {
    /// Creates an empty colony.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 0,
            insects: BTreeMap::new(),
            places: Vec::new(),
            registered: Vec::new(),
            names: BTreeMap::new(),
        }
    }

    // =========================================================================
    // Topology
    // =========================================================================

    /// Creates a place leading to `exit`.
    ///
    /// The exit's entrance is pointed back at the new place, so chains are
    /// linked in both directions as they are built.
    ///
    /// # Errors
    ///
    /// Returns [`ColonyError::PlaceNotFound`] if `exit` does not exist.
    pub fn add_place(
        &mut self,
        name: impl Into<String>,
        kind: PlaceKind,
        exit: Option<PlaceId>,
    ) -> Result<PlaceId, ColonyError> {
        let id = PlaceId::new(self.places.len());
        let mut place = Place::new(id, name, kind);

        if let Some(exit) = exit {
            self.place_mut(exit)?.entrance = Some(id);
            place.exit = Some(exit);
        }

        self.places.push(place);
        Ok(id)
    }

    /// Makes a place visible to name lookups and to the turn loop.
    ///
    /// Registering the same place twice keeps its first position.
    ///
    /// # Errors
    ///
    /// Returns [`ColonyError::PlaceNotFound`] if the place does not exist.
    pub fn register(&mut self, id: PlaceId) -> Result<(), ColonyError> {
        let name = self.place_ref(id)?.name().to_string();
        self.names.insert(name, id);
        if !self.registered.contains(&id) {
            self.registered.push(id);
        }
        Ok(())
    }

    pub(crate) fn set_entrance(
        &mut self,
        id: PlaceId,
        entrance: Option<PlaceId>,
    ) -> Result<(), ColonyError> {
        self.place_mut(id)?.entrance = entrance;
        Ok(())
    }

    /// Returns a place by ID.
    #[must_use]
    pub fn place(&self, id: PlaceId) -> Option<&Place> {
        self.places.get(id.index())
    }

    /// Returns a registered place by name.
    #[must_use]
    pub fn place_named(&self, name: &str) -> Option<&Place> {
        self.names.get(name).and_then(|id| self.place(*id))
    }

    /// Registered places in registration order.
    pub fn places(&self) -> impl Iterator<Item = &Place> + '_ {
        self.registered.iter().filter_map(|id| self.place(*id))
    }

    /// Number of places created, registered or not.
    #[must_use]
    pub fn place_count(&self) -> usize {
        self.places.len()
    }

    // =========================================================================
    // Insect storage
    // =========================================================================

    /// Creates a free-standing ant.
    pub fn spawn_ant(&mut self, kind: AntKind) -> InsectId {
        let id = self.next_insect_id();
        self.insects.insert(id, Insect::new_ant(id, kind));
        id
    }

    /// Creates a free-standing bee.
    pub fn spawn_bee(&mut self, kind: BeeKind, health: f32) -> InsectId {
        let id = self.next_insect_id();
        self.insects.insert(id, Insect::new_bee(id, kind, health));
        id
    }

    fn next_insect_id(&mut self) -> InsectId {
        let id = InsectId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Removes an insect from storage, taking it out of its place first.
    ///
    /// # Errors
    ///
    /// Returns an error if the insect does not exist or cannot be removed
    /// from its place.
    pub fn despawn(&mut self, id: InsectId) -> Result<Insect, ColonyError> {
        if self.insect(id)?.place.is_some() {
            self.remove_insect(id)?;
        }
        self.insects.remove(&id).ok_or(ColonyError::InsectNotFound(id))
    }

    /// Returns an insect by ID.
    #[must_use]
    pub fn get(&self, id: InsectId) -> Option<&Insect> {
        self.insects.get(&id)
    }

    /// Returns a mutable insect by ID.
    #[must_use]
    pub fn get_mut(&mut self, id: InsectId) -> Option<&mut Insect> {
        self.insects.get_mut(&id)
    }

    /// Every insect ever spawned, in ID order.
    pub fn insects(&self) -> impl Iterator<Item = &Insect> + '_ {
        self.insects.values()
    }

    /// Number of insects in storage.
    #[must_use]
    pub fn insect_count(&self) -> usize {
        self.insects.len()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Top-level ants of registered places, in registration order.
    #[must_use]
    pub fn ants(&self) -> Vec<InsectId> {
        self.places().filter_map(Place::ant).collect()
    }

    /// Bees of registered places, in registration order.
    #[must_use]
    pub fn bees(&self) -> Vec<InsectId> {
        self.places()
            .flat_map(|place| place.bees().iter().copied())
            .collect()
    }

    /// The ant that stops bees in this place, if any.
    #[must_use]
    pub fn blocking_ant(&self, place: PlaceId) -> Option<InsectId> {
        let ant = self.place(place)?.ant()?;
        self.get(ant)?
            .as_ant()
            .filter(|state| state.blocks_path())
            .map(|_| ant)
    }

    // =========================================================================
    // Placement
    // =========================================================================

    /// Puts an insect into a place, applying the place's rules.
    ///
    /// - The home base ends the game when a bee enters it and refuses ants.
    /// - Water drowns anything that is not waterproof right after it lands.
    /// - An ant joining an occupied place must contain, or be contained by,
    ///   the resident.
    ///
    /// # Errors
    ///
    /// Returns [`Halt::GameOver`] when a bee breaches the home base or a
    /// drowning ends the game, and [`Halt::Fault`] for broken placement rules.
    pub fn add_insect(&mut self, place: PlaceId, id: InsectId) -> Result<(), Halt> {
        let kind = self.place_ref(place)?.kind();
        let is_bee = self.insect(id)?.is_bee();

        if kind == PlaceKind::HomeBase {
            if is_bee {
                debug!(bee = %id, "bee entered the ant home base");
                return Err(Halt::lose(LossCause::HomeBaseBreached));
            }
            return Err(ColonyError::AntAtHomeBase(id).into());
        }

        if is_bee {
            self.place_mut(place)?.bees.push(id);
        } else {
            self.attach_ant(place, id)?;
        }
        self.insect_mut(id)?.place = Some(place);

        if kind == PlaceKind::Water && !self.insect(id)?.is_waterproof() {
            debug!(insect = %id, place = %place, "insect drowned");
            self.suicide(id)?;
        }
        Ok(())
    }

    fn attach_ant(&mut self, place: PlaceId, id: InsectId) -> Result<(), ColonyError> {
        let resident = self.place_ref(place)?.ant;
        let Some(resident) = resident else {
            self.place_mut(place)?.ant = Some(id);
            return Ok(());
        };

        let (takes_resident, joins_resident) = {
            let incoming = self.ant_state(id)?;
            let current = self.ant_state(resident)?;
            (incoming.can_contain(current), current.can_contain(incoming))
        };

        if takes_resident {
            self.ant_state_mut(id)?.contained = Some(resident);
            self.place_mut(place)?.ant = Some(id);
        } else if joins_resident {
            self.ant_state_mut(resident)?.contained = Some(id);
        } else {
            return Err(ColonyError::TooManyAnts {
                place: self.place_ref(place)?.name().to_string(),
            });
        }
        Ok(())
    }

    /// Takes an insect out of its place.
    ///
    /// Removing a container promotes the ant it holds to the top-level slot.
    /// Removing a contained ant empties its container. Removing an insect
    /// that has no place does nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the insect is not where its place says it is.
    pub fn remove_insect(&mut self, id: InsectId) -> Result<(), ColonyError> {
        let insect = self.insect(id)?;
        let Some(place) = insect.place else {
            return Ok(());
        };

        if insect.is_bee() {
            let slot = self.place_mut(place)?;
            let Some(pos) = slot.bees.iter().position(|bee| *bee == id) else {
                return Err(ColonyError::BeeNotInPlace {
                    bee: id,
                    place: slot.name().to_string(),
                });
            };
            slot.bees.remove(pos);
        } else {
            self.detach_ant(place, id)?;
        }

        self.insect_mut(id)?.place = None;
        Ok(())
    }

    fn detach_ant(&mut self, place: PlaceId, id: InsectId) -> Result<(), ColonyError> {
        let top = self.place_ref(place)?.ant;
        match top {
            Some(top) if top == id => {
                let promoted = self.ant_state_mut(id)?.contained.take();
                self.place_mut(place)?.ant = promoted;
            }
            Some(top) => {
                let container = self.ant_state_mut(top)?;
                if container.contained != Some(id) {
                    return Err(ColonyError::NotContained { container: top, ant: id });
                }
                container.contained = None;
            }
            None => {
                return Err(ColonyError::AntNotInPlace {
                    ant: id,
                    place: self.place_ref(place)?.name().to_string(),
                });
            }
        }
        Ok(())
    }

    /// Moves a bee to another place.
    ///
    /// # Errors
    ///
    /// Returns [`Halt::GameOver`] if the destination is the home base.
    pub fn move_bee(&mut self, id: InsectId, to: PlaceId) -> Result<(), Halt> {
        self.bee_state(id)?;
        self.remove_insect(id)?;
        self.add_insect(to, id)
    }

    // =========================================================================
    // Health
    // =========================================================================

    /// Subtracts `amount` from an insect's health.
    ///
    /// A boss bee never loses more than its cap in one reduction. A fire ant
    /// burns every bee in its place first, adding its own damage when the
    /// reduction is lethal. An insect whose health drops to zero or below is
    /// removed from its place.
    ///
    /// # Errors
    ///
    /// Returns [`Halt::GameOver`] when the queen dies.
    pub fn reduce_health(&mut self, id: InsectId, amount: f32) -> Result<(), Halt> {
        let insect = self.insect(id)?;
        let amount = insect.as_bee().map_or(amount, |bee| bee.cap(amount));
        let kind = insect.as_ant().map(AntState::kind);

        if kind == Some(AntKind::Fire) {
            self.scorch(id, amount)?;
        }

        let insect = self.insect_mut(id)?;
        insect.health -= amount;
        if insect.health > 0.0 {
            return Ok(());
        }
        let Some(place) = insect.place else {
            return Ok(());
        };

        debug!(insect = %id, name = insect.name(), place = %place, "insect perished");
        self.remove_insect(id)?;

        if kind == Some(AntKind::Queen) {
            return Err(Halt::lose(LossCause::QueenPerished));
        }
        Ok(())
    }

    fn scorch(&mut self, fire: InsectId, amount: f32) -> Result<(), Halt> {
        let insect = self.insect(fire)?;
        let Some(place) = insect.place else {
            return Ok(());
        };
        let burn = if insect.health <= amount {
            amount + insect.damage()
        } else {
            amount
        };

        let bees = self.place_ref(place)?.bees.clone();
        for bee in bees {
            self.reduce_health(bee, burn)?;
        }
        Ok(())
    }

    /// Reduces an insect's health by all of its remaining health.
    ///
    /// # Errors
    ///
    /// Same as [`reduce_health`](Self::reduce_health).
    pub fn suicide(&mut self, id: InsectId) -> Result<(), Halt> {
        let health = self.insect(id)?.health;
        self.reduce_health(id, health)
    }

    /// Doubles an ant's damage, and that of the ant it contains.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not an ant.
    pub fn double(&mut self, id: InsectId) -> Result<(), ColonyError> {
        let contained = {
            let ant = self.ant_state_mut(id)?;
            ant.double();
            ant.contained
        };
        if let Some(inner) = contained {
            self.double(inner)?;
        }
        Ok(())
    }

    // =========================================================================
    // Lookup helpers
    // =========================================================================

    fn insect(&self, id: InsectId) -> Result<&Insect, ColonyError> {
        self.insects.get(&id).ok_or(ColonyError::InsectNotFound(id))
    }

    fn insect_mut(&mut self, id: InsectId) -> Result<&mut Insect, ColonyError> {
        self.insects
            .get_mut(&id)
            .ok_or(ColonyError::InsectNotFound(id))
    }

    pub(crate) fn ant_state(&self, id: InsectId) -> Result<&AntState, ColonyError> {
        self.insect(id)?.as_ant().ok_or(ColonyError::NotAnAnt(id))
    }

    pub(crate) fn ant_state_mut(&mut self, id: InsectId) -> Result<&mut AntState, ColonyError> {
        self.insect_mut(id)?
            .as_ant_mut()
            .ok_or(ColonyError::NotAnAnt(id))
    }

    pub(crate) fn bee_state(&self, id: InsectId) -> Result<&BeeState, ColonyError> {
        self.insect(id)?.as_bee().ok_or(ColonyError::NotABee(id))
    }

    pub(crate) fn bee_state_mut(&mut self, id: InsectId) -> Result<&mut BeeState, ColonyError> {
        self.insect_mut(id)?
            .as_bee_mut()
            .ok_or(ColonyError::NotABee(id))
    }

    fn place_ref(&self, id: PlaceId) -> Result<&Place, ColonyError> {
        self.places
            .get(id.index())
            .ok_or(ColonyError::PlaceNotFound(id))
    }

    fn place_mut(&mut self, id: PlaceId) -> Result<&mut Place, ColonyError> {
        self.places
            .get_mut(id.index())
            .ok_or(ColonyError::PlaceNotFound(id))
    }
}

impl Default for Colony {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
