//! Ranged behaviors: the thrower family and the queen.
//!
//! Throwers look backward along entrance links for the nearest place holding
//! a bee, within their [`ThrowRange`], and throw their variant's [`Payload`]
//! at one bee of that place chosen at random. The hive is never a target.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::behavior::{ActionContext, Behavior, BehaviorDeclaration};
use crate::colony::Colony;
use crate::effect::{Effect, EffectKind};
use crate::insect::{AntState, BeeStatus, InsectId, Payload, ThrowRange};
use crate::place::{Place, PlaceId};

/// Finds a bee to throw at from `from`.
///
/// Skips `range.lower` hops, then scans hops `lower..=upper` and picks a
/// random bee in the first place that has any. The scan stops at the end of
/// the chain or at the hive.
///
/// # Example
///
/// ```
/// use burrow_core::behaviors::nearest_bee;
/// use burrow_core::colony::Colony;
/// use burrow_core::insect::{BeeKind, ThrowRange};
/// use burrow_core::place::PlaceKind;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut colony = Colony::new();
/// let near = colony.add_place("near", PlaceKind::Tunnel, None).unwrap();
/// let far = colony.add_place("far", PlaceKind::Tunnel, Some(near)).unwrap();
/// let bee = colony.spawn_bee(BeeKind::Bee, 1.0);
/// colony.add_insect(far, bee).unwrap();
///
/// let mut rng = ChaCha8Rng::seed_from_u64(0);
/// assert_eq!(nearest_bee(&colony, near, ThrowRange::FULL, &mut rng), Some(bee));
/// assert_eq!(nearest_bee(&colony, near, ThrowRange::new(0, 0), &mut rng), None);
/// ```
pub fn nearest_bee(
    colony: &Colony,
    from: PlaceId,
    range: ThrowRange,
    rng: &mut ChaCha8Rng,
) -> Option<InsectId> {
    let mut place = Some(from);
    for _ in 0..range.lower {
        place = colony.place(place?)?.entrance();
    }

    for _ in range.lower..=range.upper {
        let current = colony.place(place?)?;
        if current.is_hive() {
            return None;
        }
        if let Some(bee) = current.bees().choose(rng) {
            return Some(*bee);
        }
        place = current.entrance();
    }
    None
}

fn throw(
    ctx: &ActionContext,
    ant: &AntState,
    colony: &Colony,
    rng: &mut ChaCha8Rng,
) -> Option<Effect> {
    let range = ant.kind().throw_range()?;
    let target = nearest_bee(colony, ctx.place, range, rng)?;

    Some(match ant.kind().payload() {
        Payload::Leaf => Effect::Damage {
            target,
            amount: ant.damage(),
        },
        Payload::Slow { turns } => Effect::ApplyStatus {
            target,
            status: BeeStatus::Slowed,
            turns,
        },
        Payload::Scare { turns } => Effect::ApplyStatus {
            target,
            status: BeeStatus::Scared,
            turns,
        },
    })
}

/// Throws the ant's payload at the nearest bee in range.
///
/// Serves every ranged variant; range and payload come from the variant.
///
/// # Example
///
/// ```
/// use burrow_core::behaviors::ThrowBehavior;
/// use burrow_core::behavior::Behavior;
///
/// let behavior = ThrowBehavior::new();
/// assert_eq!(behavior.declaration().id.as_str(), "throw");
/// ```
pub struct ThrowBehavior {
    declaration: BehaviorDeclaration,
}

impl ThrowBehavior {
    /// Creates a new `ThrowBehavior`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            declaration: BehaviorDeclaration::new("throw", vec![EffectKind::Combat]),
        }
    }
}

impl Default for ThrowBehavior {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for ThrowBehavior {
    fn declaration(&self) -> &BehaviorDeclaration {
        &self.declaration
    }

    fn act(&self, ctx: &ActionContext, colony: &Colony, rng: &mut ChaCha8Rng) -> Vec<Effect> {
        let Ok(ant) = colony.ant_state(ctx.insect) else {
            return vec![];
        };
        throw(ctx, ant, colony, rng).into_iter().collect()
    }
}

/// The queen's turn: throw like a thrower, then double every ant between her
/// and the home base.
pub struct ReignBehavior {
    declaration: BehaviorDeclaration,
}

impl ReignBehavior {
    /// Creates a new `ReignBehavior`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            declaration: BehaviorDeclaration::new("reign", vec![EffectKind::Combat]),
        }
    }
}

impl Default for ReignBehavior {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for ReignBehavior {
    fn declaration(&self) -> &BehaviorDeclaration {
        &self.declaration
    }

    fn act(&self, ctx: &ActionContext, colony: &Colony, rng: &mut ChaCha8Rng) -> Vec<Effect> {
        let Ok(queen) = colony.ant_state(ctx.insect) else {
            return vec![];
        };
        let mut effects: Vec<Effect> = throw(ctx, queen, colony, rng).into_iter().collect();

        let mut next = colony.place(ctx.place).and_then(Place::exit);
        while let Some(place) = next.and_then(|id| colony.place(id)) {
            if let Some(ant) = place.ant() {
                effects.push(Effect::Double { target: ant });
            }
            next = place.exit();
        }
        effects
    }
}
