//! Standard behaviors of every insect variant.
//!
//! This module provides the behaviors Burrow ships with:
//!
//! - [`HarvestBehavior`]: Produces food
//! - [`ThrowBehavior`]: Throws at the nearest bee in range
//! - [`ReignBehavior`]: Throws, then doubles every ant behind the queen
//! - [`SweepBehavior`]: Damages every bee in the ant's own place
//! - [`ChewBehavior`]: Swallows a bee whole, then digests
//! - [`LaserBehavior`]: Beam whose damage fades with distance and use
//! - [`BeeBehavior`]: Stings a blocking ant or advances
//!
//! # Registration
//!
//! Use [`BehaviorRegistry::standard()`](crate::behavior::BehaviorRegistry::standard)
//! to create a registry with every behavior assigned to its variants.

mod bee;
mod harvest;
mod laser;
mod melee;
mod thrower;

pub use bee::BeeBehavior;
pub use harvest::HarvestBehavior;
pub use laser::{beam_damage, LaserBehavior};
pub use melee::{ChewBehavior, SweepBehavior};
pub use thrower::{nearest_bee, ReignBehavior, ThrowBehavior};
