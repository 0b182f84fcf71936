//! Bee behavior.
//!
//! A bee stings the ant that blocks its place, or walks on. Slowed bees only
//! act on even turns; scared bees walk back toward the hive. Both timers
//! count down every turn they are running, whether or not the bee moves.

use rand_chacha::ChaCha8Rng;

use crate::behavior::{ActionContext, Behavior, BehaviorDeclaration};
use crate::colony::Colony;
use crate::effect::{Effect, EffectKind};
use crate::insect::BeeStatus;

/// Stings or advances, honoring slow and scare timers.
///
/// # Example
///
/// ```
/// use burrow_core::behaviors::BeeBehavior;
/// use burrow_core::behavior::Behavior;
/// use burrow_core::effect::EffectKind;
///
/// let behavior = BeeBehavior::new();
/// assert!(behavior.declaration().emits_effect(EffectKind::Movement));
/// ```
pub struct BeeBehavior {
    declaration: BehaviorDeclaration,
}

impl BeeBehavior {
    /// Creates a new `BeeBehavior`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            declaration: BehaviorDeclaration::new(
                "bee",
                vec![EffectKind::Combat, EffectKind::Movement],
            ),
        }
    }
}

impl Default for BeeBehavior {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for BeeBehavior {
    fn declaration(&self) -> &BehaviorDeclaration {
        &self.declaration
    }

    fn act(&self, ctx: &ActionContext, colony: &Colony, _rng: &mut ChaCha8Rng) -> Vec<Effect> {
        let (Some(insect), Some(place)) = (colony.get(ctx.insect), colony.place(ctx.place)) else {
            return vec![];
        };
        let Some(bee) = insect.as_bee() else {
            return vec![];
        };
        let mut effects = Vec::new();

        if bee.is_slowed() {
            effects.push(Effect::DecayStatus {
                target: ctx.insect,
                status: BeeStatus::Slowed,
            });
            if ctx.time % 2 == 1 {
                return effects;
            }
        }

        let scared = bee.is_scared();
        if scared {
            effects.push(Effect::DecayStatus {
                target: ctx.insect,
                status: BeeStatus::Scared,
            });
        }
        let destination = if scared { place.entrance() } else { place.exit() };

        if let Some(ant) = colony.blocking_ant(ctx.place) {
            effects.push(Effect::Damage {
                target: ant,
                amount: bee.damage(),
            });
        } else if insect.is_alive() {
            let open = destination.filter(|to| colony.place(*to).is_some_and(|p| !p.is_hive()));
            if let Some(to) = open {
                effects.push(Effect::Move {
                    bee: ctx.insect,
                    to,
                });
            }
        }
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behaviors::fixtures::{ctx, rng, tunnel};
    use crate::insect::{AntKind, BeeKind};

    #[test]
    fn advances_toward_the_base() {
        let mut fx = tunnel(2);
        let bee = fx.colony.spawn_bee(BeeKind::Bee, 3.0);
        fx.colony.add_insect(fx.tunnel[1], bee).unwrap();

        let effects = BeeBehavior::new().act(&ctx(&fx.colony, bee, 0), &fx.colony, &mut rng());
        assert_eq!(
            effects,
            vec![Effect::Move {
                bee,
                to: fx.tunnel[0]
            }]
        );

        fx.colony.move_bee(bee, fx.tunnel[0]).unwrap();
        let effects = BeeBehavior::new().act(&ctx(&fx.colony, bee, 1), &fx.colony, &mut rng());
        assert_eq!(effects, vec![Effect::Move { bee, to: fx.base }]);
    }

    #[test]
    fn stings_blocking_ant() {
        let mut fx = tunnel(1);
        let wall = fx.colony.spawn_ant(AntKind::Wall);
        fx.colony.add_insect(fx.tunnel[0], wall).unwrap();
        let wasp = fx.colony.spawn_bee(BeeKind::Wasp, 3.0);
        fx.colony.add_insect(fx.tunnel[0], wasp).unwrap();

        let effects = BeeBehavior::new().act(&ctx(&fx.colony, wasp, 0), &fx.colony, &mut rng());
        assert_eq!(
            effects,
            vec![Effect::Damage {
                target: wall,
                amount: 2.0
            }]
        );
    }

    #[test]
    fn walks_past_ninja() {
        let mut fx = tunnel(2);
        let ninja = fx.colony.spawn_ant(AntKind::Ninja);
        fx.colony.add_insect(fx.tunnel[1], ninja).unwrap();
        let bee = fx.colony.spawn_bee(BeeKind::Bee, 3.0);
        fx.colony.add_insect(fx.tunnel[1], bee).unwrap();

        let effects = BeeBehavior::new().act(&ctx(&fx.colony, bee, 0), &fx.colony, &mut rng());
        assert_eq!(
            effects,
            vec![Effect::Move {
                bee,
                to: fx.tunnel[0]
            }]
        );
    }

    #[test]
    fn slowed_bee_waits_on_odd_turns() {
        let mut fx = tunnel(2);
        let bee = fx.colony.spawn_bee(BeeKind::Bee, 3.0);
        fx.colony.add_insect(fx.tunnel[1], bee).unwrap();
        fx.colony.bee_state_mut(bee).unwrap().slow(3);

        let decay = Effect::DecayStatus {
            target: bee,
            status: BeeStatus::Slowed,
        };
        let odd = BeeBehavior::new().act(&ctx(&fx.colony, bee, 1), &fx.colony, &mut rng());
        assert_eq!(odd, vec![decay.clone()]);

        let even = BeeBehavior::new().act(&ctx(&fx.colony, bee, 2), &fx.colony, &mut rng());
        assert_eq!(
            even,
            vec![
                decay,
                Effect::Move {
                    bee,
                    to: fx.tunnel[0]
                }
            ]
        );
    }

    #[test]
    fn scared_bee_backs_off_but_never_into_the_hive() {
        let mut fx = tunnel(3);
        let bee = fx.colony.spawn_bee(BeeKind::Bee, 3.0);
        fx.colony.add_insect(fx.tunnel[1], bee).unwrap();
        fx.colony.bee_state_mut(bee).unwrap().scare(2);

        let decay = Effect::DecayStatus {
            target: bee,
            status: BeeStatus::Scared,
        };
        let effects = BeeBehavior::new().act(&ctx(&fx.colony, bee, 0), &fx.colony, &mut rng());
        assert_eq!(
            effects,
            vec![
                decay.clone(),
                Effect::Move {
                    bee,
                    to: fx.tunnel[2]
                }
            ]
        );

        fx.colony.move_bee(bee, fx.tunnel[2]).unwrap();
        let effects = BeeBehavior::new().act(&ctx(&fx.colony, bee, 1), &fx.colony, &mut rng());
        assert_eq!(effects, vec![decay]);
    }
}
