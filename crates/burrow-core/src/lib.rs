//! # Burrow Core
//!
//! Turn-based tunnel defense simulation: ants hold a set of tunnels against
//! waves of bees.
//!
//! ## Architecture
//!
//! - **Colony**: places, insects, and the placement and damage rules
//! - **Behaviors**: what each ant and bee variant does on its turn, as effects
//! - **Resolvers**: apply effects to the colony and the food store
//! - **Game**: the resumable turn loop, waves and deployments
//!
//! ## Usage
//!
//! ```
//! use burrow_core::{AssaultPlan, BeeKind, GameConfig, GameState, Outcome};
//!
//! let plan = AssaultPlan::new().add_wave(BeeKind::Bee, 1.0, 1, 1);
//! let mut game = GameState::new(&GameConfig::with_seed(3), &plan).unwrap();
//!
//! let outcome = game
//!     .play(|game| {
//!         if game.time() == 0 {
//!             game.deploy_ant("tunnel_0_0", "Harvester")?;
//!         }
//!         for name in ["tunnel_1_0", "tunnel_2_0"] {
//!             let empty = game
//!                 .colony()
//!                 .place_named(name)
//!                 .is_some_and(|place| place.ant().is_none());
//!             if empty && game.food() >= 3 {
//!                 game.deploy_ant(name, "Thrower")?;
//!             }
//!         }
//!         Ok(())
//!     })
//!     .unwrap();
//!
//! println!("{outcome}");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod behavior;
pub mod behaviors;
pub mod colony;
pub mod config;
pub mod effect;
pub mod error;
pub mod game;
pub mod hive;
pub mod insect;
pub mod layout;
pub mod place;
pub mod registry;
pub mod resolver;

// Re-exports for convenience
pub use behavior::{ActionContext, Behavior, BehaviorDeclaration, BehaviorId, BehaviorRegistry};
pub use colony::Colony;
pub use config::GameConfig;
pub use effect::{Effect, EffectKind};
pub use error::{ColonyError, Halt, LossCause, Outcome};
pub use game::{GameState, StepState};
pub use hive::{AssaultPlan, BeeSpec, Hive};
pub use insect::{AntKind, BeeKind, BeeStatus, Insect, InsectId};
pub use layout::{Layout, PlaceRegistrar, TunnelLayout};
pub use place::{Place, PlaceId, PlaceKind};
pub use registry::{AntRegistry, AntType};
pub use resolver::{Resolver, ResolverSet};

#[cfg(test)]
mod tests;
