//! Game configuration.

use serde::{Deserialize, Serialize};

use crate::layout::TunnelLayout;

/// Settings of a new game.
///
/// Hosts embed this in their own configuration; every field has a default.
///
/// # Example
///
/// ```
/// use burrow_core::config::GameConfig;
///
/// let config: GameConfig = serde_json::from_str(r#"{ "seed": 9 }"#).unwrap();
/// assert_eq!(config.seed, 9);
/// assert_eq!(config.starting_food, 2);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed of the game's random generator.
    pub seed: u64,
    /// Food available before the first deployment.
    pub starting_food: u32,
    /// Places built between the home base and the hive.
    pub layout: TunnelLayout,
}

impl GameConfig {
    /// Default settings with the given seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            starting_food: 2,
            layout: TunnelLayout::default(),
        }
    }
}
