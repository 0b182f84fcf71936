//! Harvester behavior.

use rand_chacha::ChaCha8Rng;

use crate::behavior::{ActionContext, Behavior, BehaviorDeclaration};
use crate::colony::Colony;
use crate::effect::{Effect, EffectKind};

/// Adds one food to the colony every turn.
///
/// # Example
///
/// ```
/// use burrow_core::behaviors::HarvestBehavior;
/// use burrow_core::behavior::Behavior;
///
/// let behavior = HarvestBehavior::new();
/// assert_eq!(behavior.declaration().id.as_str(), "harvest");
/// ```
pub struct HarvestBehavior {
    declaration: BehaviorDeclaration,
}

impl HarvestBehavior {
    /// Food produced per turn.
    pub const YIELD: u32 = 1;

    /// Creates a new `HarvestBehavior`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            declaration: BehaviorDeclaration::new("harvest", vec![EffectKind::Upkeep]),
        }
    }
}

impl Default for HarvestBehavior {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for HarvestBehavior {
    fn declaration(&self) -> &BehaviorDeclaration {
        &self.declaration
    }

    fn act(&self, _ctx: &ActionContext, _colony: &Colony, _rng: &mut ChaCha8Rng) -> Vec<Effect> {
        vec![Effect::GainFood {
            amount: Self::YIELD,
        }]
    }
}
