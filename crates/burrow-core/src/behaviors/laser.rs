//! Laser behavior.
//!
//! The beam starts in the laser's own place and travels toward the hive,
//! hitting every bee and every other top-level ant on the way. Its strength
//! fades with distance and with every insect it has already damaged.

use rand_chacha::ChaCha8Rng;

use crate::behavior::{ActionContext, Behavior, BehaviorDeclaration};
use crate::colony::Colony;
use crate::effect::{Effect, EffectKind};

/// Damage lost per hop of distance.
pub const DISTANCE_FALLOFF: f32 = 0.25;

/// Damage lost per insect already damaged.
pub const SHOT_FALLOFF: f32 = 0.0625;

/// Beam strength at `distance` hops after `shots` damaging hits.
///
/// Never negative.
///
/// # Example
///
/// ```
/// use burrow_core::behaviors::beam_damage;
///
/// assert_eq!(beam_damage(2.0, 0, 0), 2.0);
/// assert_eq!(beam_damage(2.0, 2, 4), 1.25);
/// assert_eq!(beam_damage(2.0, 4, 16), 0.0);
/// assert_eq!(beam_damage(2.0, 9, 0), 0.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn beam_damage(base: f32, distance: u32, shots: u32) -> f32 {
    (base - DISTANCE_FALLOFF * distance as f32 - SHOT_FALLOFF * shots as f32).max(0.0)
}

/// Fires the beam and records how many insects it damaged.
pub struct LaserBehavior {
    declaration: BehaviorDeclaration,
}

impl LaserBehavior {
    /// Creates a new `LaserBehavior`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            declaration: BehaviorDeclaration::new(
                "laser",
                vec![EffectKind::Combat, EffectKind::Upkeep],
            ),
        }
    }
}

impl Default for LaserBehavior {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for LaserBehavior {
    fn declaration(&self) -> &BehaviorDeclaration {
        &self.declaration
    }

    fn act(&self, ctx: &ActionContext, colony: &Colony, _rng: &mut ChaCha8Rng) -> Vec<Effect> {
        let Ok(laser) = colony.ant_state(ctx.insect) else {
            return vec![];
        };
        let base = laser.damage();
        let fired_before = laser.shots_fired();
        let mut shots = fired_before;
        let mut effects = Vec::new();

        let mut distance = 0;
        let mut next = Some(ctx.place);
        while let Some(place) = next.and_then(|id| colony.place(id)) {
            if place.is_hive() {
                break;
            }

            let other_ant = place.ant().filter(|ant| *ant != ctx.insect);
            for target in place.bees().iter().copied().chain(other_ant) {
                let amount = beam_damage(base, distance, shots);
                if amount > 0.0 {
                    effects.push(Effect::Damage { target, amount });
                    shots += 1;
                }
            }

            next = place.entrance();
            distance += 1;
        }

        if shots > fired_before {
            effects.push(Effect::RecordShots {
                ant: ctx.insect,
                count: shots - fired_before,
            });
        }
        effects
    }
}
