//! Combat resolver for damage, doubling and bee statuses.
//!
//! The `CombatResolver` handles:
//! - `Damage`: reduce an insect's health
//! - `Slay`: reduce an insect's health by all it has left
//! - `Double`: double an ant's damage, recursing into containers
//! - `ApplyStatus` / `DecayStatus`: bee status timers
//!
//! # Death Handling
//!
//! Insects at zero health or below are removed from their place immediately
//! by the colony. A fire ant burns its place first; a queen ends the game.

use tracing::debug;

use crate::effect::{Effect, EffectKind};
use crate::error::Halt;

use super::{Resolution, Resolver};

/// Resolver for combat effects.
///
/// # Example
///
/// ```
/// use burrow_core::resolver::{CombatResolver, Resolver};
/// use burrow_core::effect::EffectKind;
///
/// let resolver = CombatResolver::new();
/// assert!(resolver.handles().contains(&EffectKind::Combat));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CombatResolver;

impl CombatResolver {
    /// Creates a new combat resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Resolver for CombatResolver {
    fn handles(&self) -> &[EffectKind] {
        &[EffectKind::Combat]
    }

    fn resolve(&self, effect: &Effect, target: &mut Resolution<'_>) -> Result<(), Halt> {
        let colony = &mut *target.colony;
        match *effect {
            Effect::Damage { target, amount } => colony.reduce_health(target, amount),
            Effect::Slay { target } => colony.suicide(target),
            Effect::Double { target } => Ok(colony.double(target)?),
            Effect::ApplyStatus {
                target,
                status,
                turns,
            } => {
                if !colony.bee_state_mut(target)?.apply(status, turns) {
                    debug!(bee = %target, ?status, "status refused");
                }
                Ok(())
            }
            Effect::DecayStatus { target, status } => {
                colony.bee_state_mut(target)?.decay(status);
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colony::Colony;
    use crate::error::ColonyError;
    use crate::insect::{AntKind, BeeKind, BeeStatus, InsectId};
    use crate::place::{PlaceId, PlaceKind};

    fn arena() -> (Colony, PlaceId) {
        let mut colony = Colony::new();
        let place = colony.add_place("tunnel", PlaceKind::Tunnel, None).unwrap();
        (colony, place)
    }

    fn apply(colony: &mut Colony, effect: Effect) -> Result<(), Halt> {
        let mut food = 0;
        CombatResolver::new().resolve(
            &effect,
            &mut Resolution {
                colony,
                food: &mut food,
            },
        )
    }

    mod resolver_trait_tests {
        use super::*;

        #[test]
        fn handles_combat_kind() {
            let resolver = CombatResolver::new();
            assert!(resolver.handles().contains(&EffectKind::Combat));
            assert!(!resolver.handles().contains(&EffectKind::Movement));
            assert!(!resolver.handles().contains(&EffectKind::Upkeep));
        }
    }

    mod damage_tests {
        use super::*;

        #[test]
        fn damage_reduces_health() {
            let (mut colony, place) = arena();
            let bee = colony.spawn_bee(BeeKind::Bee, 3.0);
            colony.add_insect(place, bee).unwrap();

            apply(&mut colony, Effect::Damage { target: bee, amount: 1.0 }).unwrap();

            assert_eq!(colony.get(bee).unwrap().health(), 2.0);
        }

        #[test]
        fn slay_respects_boss_cap() {
            let (mut colony, place) = arena();
            let boss = colony.spawn_bee(BeeKind::Boss, 30.0);
            colony.add_insect(place, boss).unwrap();

            apply(&mut colony, Effect::Slay { target: boss }).unwrap();

            assert_eq!(colony.get(boss).unwrap().health(), 22.0);
            assert_eq!(colony.get(boss).unwrap().place(), Some(place));
        }

        #[test]
        fn unknown_target_is_a_fault() {
            let (mut colony, _) = arena();
            let ghost = InsectId::new(99);

            let halt = apply(&mut colony, Effect::Double { target: ghost }).unwrap_err();
            assert_eq!(halt, Halt::Fault(ColonyError::InsectNotFound(ghost)));
        }
    }

    mod status_tests {
        use super::*;

        #[test]
        fn second_scare_is_refused() {
            let (mut colony, place) = arena();
            let bee = colony.spawn_bee(BeeKind::Bee, 3.0);
            colony.add_insect(place, bee).unwrap();
            let scare = Effect::ApplyStatus {
                target: bee,
                status: BeeStatus::Scared,
                turns: 2,
            };

            apply(&mut colony, scare.clone()).unwrap();
            apply(
                &mut colony,
                Effect::DecayStatus {
                    target: bee,
                    status: BeeStatus::Scared,
                },
            )
            .unwrap();
            apply(&mut colony, scare).unwrap();

            let state = colony.get(bee).unwrap().as_bee().unwrap();
            assert_eq!(state.status(BeeStatus::Scared), 1);
        }

        #[test]
        fn status_on_ant_is_a_fault() {
            let (mut colony, place) = arena();
            let ant = colony.spawn_ant(AntKind::Wall);
            colony.add_insect(place, ant).unwrap();

            let halt = apply(
                &mut colony,
                Effect::ApplyStatus {
                    target: ant,
                    status: BeeStatus::Slowed,
                    turns: 5,
                },
            )
            .unwrap_err();
            assert_eq!(halt, Halt::Fault(ColonyError::NotABee(ant)));
        }
    }
}
