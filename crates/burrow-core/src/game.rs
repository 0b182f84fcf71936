//! Game module with the resumable turn loop.
//!
//! [`GameState`] owns the colony, the hive, the food store and the seeded
//! generator, and drives a game through repeated calls to
//! [`GameState::step`]. Each turn runs in three phases:
//!
//! 1. **SPAWN**: The hive releases the wave due at the current time
//! 2. **ANTS**: Every top-level ant acts, then any ant it contains; time advances
//! 3. **BEES**: Every active bee acts; dead bees are retired
//!
//! The loop yields after the spawn phase, so the driver can deploy or remove
//! ants, and after the ant phase.
//!
//! # Turn Resolution
//!
//! Each insect's effects are applied before the next insect acts. An ant
//! killed by an earlier insect in the same phase does not act.
//!
//! # Determinism
//!
//! Every random choice draws from one `ChaCha8Rng` seeded from
//! [`GameConfig::seed`]. Given the same seed, plan and driver commands, two
//! games are identical.
//!
//! # Example
//!
//! ```
//! use burrow_core::config::GameConfig;
//! use burrow_core::game::{GameState, StepState};
//! use burrow_core::hive::AssaultPlan;
//! use burrow_core::insect::BeeKind;
//!
//! let plan = AssaultPlan::new().add_wave(BeeKind::Bee, 3.0, 2, 1);
//! let mut game = GameState::new(&GameConfig::default(), &plan).unwrap();
//!
//! assert_eq!(game.step().unwrap(), StepState::AwaitingPlacement);
//! game.deploy_ant("tunnel_0_0", "Harvester").unwrap();
//! assert_eq!(game.food(), 0);
//!
//! assert_eq!(game.step().unwrap(), StepState::AwaitingResume);
//! assert_eq!(game.food(), 1);
//! assert_eq!(game.time(), 1);
//! ```

use std::fmt;
use std::sync::Arc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::behavior::{ActionContext, BehaviorRegistry};
use crate::colony::Colony;
use crate::config::GameConfig;
use crate::error::{ColonyError, Halt, Outcome};
use crate::hive::{AssaultPlan, Hive};
use crate::insect::{AntState, Insect, InsectId};
use crate::layout::{Layout, PlaceRegistrar};
use crate::place::{PlaceId, PlaceKind};
use crate::registry::AntRegistry;
use crate::resolver::ResolverSet;

/// Name of the hive place.
pub const HIVE_NAME: &str = "Hive";

/// Name of the ant home base.
pub const HOME_BASE_NAME: &str = "Ant Home Base";

/// Where the turn loop stopped.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StepState {
    /// Bees have entered. The driver may deploy or remove ants.
    AwaitingPlacement,
    /// Ants have acted. The bees act on the next step.
    AwaitingResume,
    /// The game is over. Further steps return the same outcome.
    GameOver(Outcome),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Phase {
    Start,
    Placing,
    Resuming,
    Finished(Outcome),
}

// =============================================================================
// GameState
// =============================================================================

/// A game in progress.
pub struct GameState {
    time: u64,
    food: u32,
    colony: Colony,
    base: PlaceId,
    hive: Hive,
    entrances: Vec<PlaceId>,
    active_bees: Vec<InsectId>,
    ant_types: AntRegistry,
    behaviors: BehaviorRegistry,
    resolvers: ResolverSet,
    rng: ChaCha8Rng,
    phase: Phase,
}

impl GameState {
    /// Creates a game on the configured tunnel layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the colony cannot be built.
    pub fn new(config: &GameConfig, plan: &AssaultPlan) -> Result<Self, ColonyError> {
        Self::with_layout(config, plan, &config.layout)
    }

    /// Creates a game on a custom layout.
    ///
    /// The hive is registered first, so it leads every place-ordered view.
    /// The home base is never registered.
    ///
    /// # Errors
    ///
    /// Returns an error if the colony cannot be built.
    pub fn with_layout(
        config: &GameConfig,
        plan: &AssaultPlan,
        layout: &impl Layout,
    ) -> Result<Self, ColonyError> {
        let mut colony = Colony::new();
        let hive_place = colony.add_place(HIVE_NAME, PlaceKind::Hive, None)?;
        colony.register(hive_place)?;
        let base = colony.add_place(HOME_BASE_NAME, PlaceKind::HomeBase, None)?;

        let mut registrar = PlaceRegistrar::new(&mut colony, hive_place);
        layout.build(base, &mut registrar)?;
        let entrances = registrar.into_entrances();

        let mut game = Self {
            time: 0,
            food: config.starting_food,
            colony,
            base,
            hive: Hive::new(hive_place),
            entrances,
            active_bees: Vec::new(),
            ant_types: AntRegistry::standard(),
            behaviors: BehaviorRegistry::standard(),
            resolvers: ResolverSet::standard(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            phase: Phase::Start,
        };

        let populated = game.hive.populate(&mut game.colony, plan);
        game.settle(populated)?;

        debug!(
            seed = config.seed,
            places = game.colony.places().count(),
            entrances = game.entrances.len(),
            bees = plan.len(),
            "game created"
        );
        Ok(game)
    }

    /// Replaces the deployable ant types.
    #[must_use]
    pub fn with_ant_types(mut self, ant_types: AntRegistry) -> Self {
        self.ant_types = ant_types;
        self
    }

    /// Replaces the behavior of every variant.
    #[must_use]
    pub fn with_behaviors(mut self, behaviors: BehaviorRegistry) -> Self {
        self.behaviors = behaviors;
        self
    }

    // =========================================================================
    // Turn loop
    // =========================================================================

    /// Runs the loop to its next yield point.
    ///
    /// A step that finishes the bee phase without ending the game runs the
    /// next spawn phase too, and returns [`StepState::AwaitingPlacement`].
    ///
    /// # Errors
    ///
    /// Returns the colony error behind a broken placement contract. The game
    /// is left where the error happened.
    pub fn step(&mut self) -> Result<StepState, ColonyError> {
        loop {
            match self.phase {
                Phase::Finished(outcome) => return Ok(StepState::GameOver(outcome)),
                Phase::Start => {
                    let released = self.release_wave();
                    if self.settle(released)? {
                        continue;
                    }
                    self.phase = Phase::Placing;
                    return Ok(StepState::AwaitingPlacement);
                }
                Phase::Placing => {
                    let acted = self.ants_take_actions();
                    if self.settle(acted)? {
                        continue;
                    }
                    self.time += 1;
                    self.phase = Phase::Resuming;
                    return Ok(StepState::AwaitingResume);
                }
                Phase::Resuming => {
                    let acted = self.bees_take_actions();
                    if self.settle(acted)? {
                        continue;
                    }
                    if self.bees_remaining() == 0 {
                        self.finish(Outcome::AntsWin);
                        continue;
                    }
                    self.phase = Phase::Start;
                }
            }
        }
    }

    /// Plays the game to the end, asking `strategy` for ant placements every
    /// time bees have entered.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the loop or by the strategy.
    pub fn play<F>(&mut self, mut strategy: F) -> Result<Outcome, ColonyError>
    where
        F: FnMut(&mut Self) -> Result<(), ColonyError>,
    {
        loop {
            match self.step()? {
                StepState::AwaitingPlacement => strategy(self)?,
                StepState::AwaitingResume => {}
                StepState::GameOver(outcome) => return Ok(outcome),
            }
        }
    }

    fn release_wave(&mut self) -> Result<(), Halt> {
        let released = self
            .hive
            .release(self.time, &mut self.colony, &mut self.rng)?;
        self.active_bees.extend(released);
        Ok(())
    }

    fn ants_take_actions(&mut self) -> Result<(), Halt> {
        for ant in self.colony.ants() {
            if self.is_alive(ant) {
                self.ant_turn(ant)?;
            }
        }
        Ok(())
    }

    /// A container acts first, then hands the turn to the ant it holds.
    fn ant_turn(&mut self, ant: InsectId) -> Result<(), Halt> {
        self.act(ant)?;
        let contained = self
            .colony
            .get(ant)
            .and_then(Insect::as_ant)
            .and_then(AntState::contained);
        if let Some(inner) = contained {
            self.ant_turn(inner)?;
        }
        Ok(())
    }

    fn bees_take_actions(&mut self) -> Result<(), Halt> {
        for bee in self.active_bees.clone() {
            if self.is_alive(bee) {
                self.act(bee)?;
            }
            if !self.is_alive(bee) {
                self.active_bees.retain(|active| *active != bee);
                debug!(bee = %bee, "bee retired");
            }
        }
        Ok(())
    }

    /// Runs one insect's behavior and applies its declared effects.
    fn act(&mut self, id: InsectId) -> Result<(), Halt> {
        let insect = self
            .colony
            .get(id)
            .ok_or(ColonyError::InsectNotFound(id))?;
        let Some(place) = insect.place() else {
            return Ok(());
        };
        let Some(behavior) = self.behaviors.for_insect(insect).map(Arc::clone) else {
            return Ok(());
        };

        let ctx = ActionContext {
            insect: id,
            place,
            time: self.time,
        };
        let declaration = behavior.declaration();
        let mut effects = behavior.act(&ctx, &self.colony, &mut self.rng);
        effects.retain(|effect| {
            let declared = declaration.emits_effect(effect.kind());
            if !declared {
                warn!(
                    behavior = %declaration.id,
                    kind = %effect.kind(),
                    target = ?effect.target(),
                    "dropping undeclared effect"
                );
            }
            declared
        });

        self.resolvers
            .apply(&effects, &mut self.colony, &mut self.food)
    }

    /// Records a game over. Returns `Ok(true)` if the game ended.
    fn settle(&mut self, result: Result<(), Halt>) -> Result<bool, ColonyError> {
        match result {
            Ok(()) => Ok(false),
            Err(Halt::GameOver(outcome)) => {
                self.finish(outcome);
                Ok(true)
            }
            Err(Halt::Fault(err)) => Err(err),
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        info!(time = self.time, %outcome, "game over");
        self.phase = Phase::Finished(outcome);
    }

    fn is_alive(&self, id: InsectId) -> bool {
        self.colony.get(id).is_some_and(Insect::is_alive)
    }

    fn bees_remaining(&self) -> usize {
        let waiting = self
            .colony
            .place(self.hive.place())
            .map_or(0, |hive| hive.bees().len());
        waiting + self.active_bees.len()
    }

    // =========================================================================
    // Driver commands
    // =========================================================================

    /// Deploys an ant of the named type to the named place.
    ///
    /// Returns `Ok(None)` without changing anything if there is not enough
    /// food. An ant deployed into water it cannot survive is still paid for.
    ///
    /// # Errors
    ///
    /// - [`ColonyError::UnknownAntType`] or [`ColonyError::NotImplemented`]
    ///   for a bad type
    /// - [`ColonyError::UnknownPlace`] for a bad place
    /// - [`ColonyError::TooManyAnts`] if the place cannot take the ant
    pub fn deploy_ant(
        &mut self,
        place_name: &str,
        type_name: &str,
    ) -> Result<Option<InsectId>, ColonyError> {
        let ant_type = self.ant_types.get(type_name)?;
        if !ant_type.implemented {
            return Err(ColonyError::NotImplemented(ant_type.name.clone()));
        }
        let (kind, cost) = (ant_type.kind, ant_type.food_cost);
        let place = self
            .colony
            .place_named(place_name)
            .ok_or_else(|| ColonyError::UnknownPlace(place_name.to_string()))?
            .id();

        if cost > self.food {
            warn!(
                ant = type_name,
                cost,
                food = self.food,
                "not enough food remains to place ant"
            );
            return Ok(None);
        }

        let ant = self.colony.spawn_ant(kind);
        let placed = self.colony.add_insect(place, ant);
        if let Err(Halt::Fault(err)) = placed {
            self.colony.despawn(ant)?;
            return Err(err);
        }
        self.food -= cost;
        debug!(ant = %ant, kind = %kind, place = place_name, food = self.food, "ant deployed");
        self.settle(placed)?;
        Ok(Some(ant))
    }

    /// Takes the top-level ant out of the named place.
    ///
    /// A container leaves the ant it holds behind. Returns the removed ant,
    /// or `None` if the place had no ant.
    ///
    /// # Errors
    ///
    /// Returns [`ColonyError::UnknownPlace`] for a bad place.
    pub fn remove_ant(&mut self, place_name: &str) -> Result<Option<InsectId>, ColonyError> {
        let ant = self
            .colony
            .place_named(place_name)
            .ok_or_else(|| ColonyError::UnknownPlace(place_name.to_string()))?
            .ant();
        if let Some(ant) = ant {
            self.colony.remove_insect(ant)?;
            debug!(ant = %ant, place = place_name, "ant removed");
        }
        Ok(ant)
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Elapsed turns.
    #[must_use]
    pub const fn time(&self) -> u64 {
        self.time
    }

    /// Food available for deployments.
    #[must_use]
    pub const fn food(&self) -> u32 {
        self.food
    }

    /// The outcome, once the game is over.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Places and insects.
    #[must_use]
    pub const fn colony(&self) -> &Colony {
        &self.colony
    }

    /// The ant home base.
    #[must_use]
    pub const fn base(&self) -> PlaceId {
        self.base
    }

    /// The hive and its remaining schedule.
    #[must_use]
    pub const fn hive(&self) -> &Hive {
        &self.hive
    }

    /// Places bees enter the tunnels by.
    #[must_use]
    pub fn entrances(&self) -> &[PlaceId] {
        &self.entrances
    }

    /// Deployable ant types.
    #[must_use]
    pub const fn ant_types(&self) -> &AntRegistry {
        &self.ant_types
    }

    /// Bees released from the hive and still alive at the last bee phase.
    #[must_use]
    pub fn active_bees(&self) -> &[InsectId] {
        &self.active_bees
    }

    /// Top-level ants, in place order.
    #[must_use]
    pub fn ants(&self) -> Vec<InsectId> {
        self.colony.ants()
    }

    /// Bees in play or waiting in the hive, in place order.
    #[must_use]
    pub fn bees(&self) -> Vec<InsectId> {
        self.colony.bees()
    }

    /// Ants, then bees.
    #[must_use]
    pub fn insects(&self) -> Vec<InsectId> {
        let mut insects = self.ants();
        insects.extend(self.bees());
        insects
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameState")
            .field("time", &self.time)
            .field("food", &self.food)
            .field("phase", &self.phase)
            .field("active_bees", &self.active_bees.len())
            .field("colony", &self.colony)
            .field("behaviors", &self.behaviors)
            .field("resolvers", &self.resolvers)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, id) in self.insects().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let Some(insect) = self.colony.get(id) else {
                write!(f, "{id}")?;
                continue;
            };
            let place = insect
                .place()
                .and_then(|place| self.colony.place(place))
                .map_or("None", |place| place.name());
            write!(f, "{}({}, {place})", insect.name(), insect.health())?;
        }
        write!(f, "] (Food: {}, Time: {})", self.food, self.time)
    }
}

// =============================================================================
// Tests
// =============================================================================
