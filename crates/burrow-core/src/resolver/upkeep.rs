//! Upkeep resolver for food and per-ant counters.

use crate::effect::{Effect, EffectKind};
use crate::error::Halt;

use super::{Resolution, Resolver};

/// Applies food gains, hungry-ant cooldowns and laser shot counts.
#[derive(Debug, Clone, Default)]
pub struct UpkeepResolver;

impl UpkeepResolver {
    /// Creates a new upkeep resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Resolver for UpkeepResolver {
    fn handles(&self) -> &[EffectKind] {
        &[EffectKind::Upkeep]
    }

    fn resolve(&self, effect: &Effect, target: &mut Resolution<'_>) -> Result<(), Halt> {
        match *effect {
            Effect::GainFood { amount } => *target.food += amount,
            Effect::SetCooldown { ant, turns } => {
                target.colony.ant_state_mut(ant)?.cooldown = turns;
            }
            Effect::RecordShots { ant, count } => {
                target.colony.ant_state_mut(ant)?.shots_fired += count;
            }
            _ => {}
        }
        Ok(())
    }
}
