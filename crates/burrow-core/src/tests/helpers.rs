//! Test helper functions for setting up games.

use crate::config::GameConfig;
use crate::game::GameState;
use crate::hive::AssaultPlan;
use crate::insect::{BeeStatus, InsectId};
use crate::layout::TunnelLayout;
use crate::place::PlaceId;

/// Routes `tracing` output to the test harness. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// A game on one dry tunnel of `length` places.
///
/// `tunnel_0_0` is next to the home base; `tunnel_0_{length - 1}` is the only
/// bee entrance.
pub fn one_tunnel(length: usize, food: u32, plan: &AssaultPlan) -> GameState {
    init_tracing();
    let config = GameConfig {
        seed: 11,
        starting_food: food,
        layout: TunnelLayout {
            tunnels: 1,
            length,
            moat_frequency: 0,
        },
    };
    GameState::new(&config, plan).unwrap()
}

/// ID of a registered place.
pub fn place_id(game: &GameState, name: &str) -> PlaceId {
    game.colony().place_named(name).unwrap().id()
}

/// Current health of an insect.
pub fn health(game: &GameState, id: InsectId) -> f32 {
    game.colony().get(id).unwrap().health()
}

/// Current place of an insect.
pub fn place_of(game: &GameState, id: InsectId) -> Option<PlaceId> {
    game.colony().get(id).unwrap().place()
}

/// Remaining turns of a bee status.
pub fn status(game: &GameState, bee: InsectId, status: BeeStatus) -> u32 {
    game.colony()
        .get(bee)
        .and_then(|insect| insect.as_bee())
        .unwrap()
        .status(status)
}
