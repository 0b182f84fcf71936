//! Behaviors that act on the ant's own place.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::behavior::{ActionContext, Behavior, BehaviorDeclaration};
use crate::colony::Colony;
use crate::effect::{Effect, EffectKind};
use crate::insect::AntKind;

/// Damages every bee standing in the ant's place.
///
/// Targets are taken from a snapshot of the place at the start of the turn,
/// so each bee is hit exactly once even if earlier hits remove others.
///
/// # Example
///
/// ```
/// use burrow_core::behaviors::SweepBehavior;
/// use burrow_core::behavior::Behavior;
///
/// let behavior = SweepBehavior::new();
/// assert_eq!(behavior.declaration().id.as_str(), "sweep");
/// ```
pub struct SweepBehavior {
    declaration: BehaviorDeclaration,
}

impl SweepBehavior {
    /// Creates a new `SweepBehavior`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            declaration: BehaviorDeclaration::new("sweep", vec![EffectKind::Combat]),
        }
    }
}

impl Default for SweepBehavior {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for SweepBehavior {
    fn declaration(&self) -> &BehaviorDeclaration {
        &self.declaration
    }

    fn act(&self, ctx: &ActionContext, colony: &Colony, _rng: &mut ChaCha8Rng) -> Vec<Effect> {
        let (Ok(ant), Some(place)) = (colony.ant_state(ctx.insect), colony.place(ctx.place)) else {
            return vec![];
        };

        place
            .bees()
            .iter()
            .map(|bee| Effect::Damage {
                target: *bee,
                amount: ant.damage(),
            })
            .collect()
    }
}

/// Swallows a random bee in the ant's place, then digests for
/// [`AntKind::CHEW_COOLDOWN`] turns.
///
/// A swallowed bee loses all of its remaining health at once. Damage caps
/// still apply.
pub struct ChewBehavior {
    declaration: BehaviorDeclaration,
}

impl ChewBehavior {
    /// Creates a new `ChewBehavior`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            declaration: BehaviorDeclaration::new(
                "chew",
                vec![EffectKind::Combat, EffectKind::Upkeep],
            ),
        }
    }
}

impl Default for ChewBehavior {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for ChewBehavior {
    fn declaration(&self) -> &BehaviorDeclaration {
        &self.declaration
    }

    fn act(&self, ctx: &ActionContext, colony: &Colony, rng: &mut ChaCha8Rng) -> Vec<Effect> {
        let (Ok(ant), Some(place)) = (colony.ant_state(ctx.insect), colony.place(ctx.place)) else {
            return vec![];
        };

        if ant.cooldown() > 0 {
            return vec![Effect::SetCooldown {
                ant: ctx.insect,
                turns: ant.cooldown() - 1,
            }];
        }

        let Some(bee) = place.bees().choose(rng) else {
            return vec![];
        };
        vec![
            Effect::Slay { target: *bee },
            Effect::SetCooldown {
                ant: ctx.insect,
                turns: AntKind::CHEW_COOLDOWN,
            },
        ]
    }
}
