//! End-to-end games.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::behavior::Behavior;
use crate::behaviors::{fixtures, LaserBehavior};
use crate::config::GameConfig;
use crate::error::{LossCause, Outcome};
use crate::game::{GameState, StepState};
use crate::hive::AssaultPlan;
use crate::insect::{AntKind, BeeKind, BeeStatus};
use crate::resolver::ResolverSet;

use super::helpers::{health, init_tracing, one_tunnel, place_id, place_of, status};

// =============================================================================
// Outcomes
// =============================================================================

#[test]
fn thrower_vanquishes_every_bee() {
    let plan = AssaultPlan::new().add_wave(BeeKind::Bee, 2.0, 1, 1);
    let mut game = one_tunnel(3, 3, &plan);

    let outcome = game
        .play(|game| {
            if game.time() == 0 {
                game.deploy_ant("tunnel_0_0", "Thrower")?;
            }
            Ok(())
        })
        .unwrap();

    assert_eq!(outcome, Outcome::AntsWin);
    assert_eq!(game.time(), 3);
    assert!(game.active_bees().is_empty());
    assert!(game.bees().is_empty());
}

#[test]
fn bee_reaching_home_base_loses() {
    let plan = AssaultPlan::new().add_wave(BeeKind::Bee, 3.0, 0, 1);
    let mut game = one_tunnel(2, 0, &plan);

    let outcome = game.play(|_| Ok(())).unwrap();

    assert_eq!(outcome, Outcome::AntsLose(LossCause::HomeBaseBreached));
    assert_eq!(game.time(), 2);
}

#[test]
fn bees_waiting_in_hive_keep_game_going() {
    let plan = AssaultPlan::new().add_wave(BeeKind::Bee, 3.0, 4, 1);
    let mut game = one_tunnel(2, 0, &plan);

    for _ in 0..4 {
        assert_eq!(game.step().unwrap(), StepState::AwaitingPlacement);
        assert_eq!(game.step().unwrap(), StepState::AwaitingResume);
    }
    assert_eq!(game.active_bees().len(), 0);
    assert_eq!(game.step().unwrap(), StepState::AwaitingPlacement);
    assert_eq!(game.active_bees().len(), 1);
}

#[test]
fn queen_death_loses() {
    let plan = AssaultPlan::new().add_wave(BeeKind::Bee, 10.0, 0, 1);
    let mut game = one_tunnel(1, 7, &plan);

    assert_eq!(game.step().unwrap(), StepState::AwaitingPlacement);
    let queen = game.deploy_ant("tunnel_0_0", "Queen").unwrap().unwrap();
    assert_eq!(game.step().unwrap(), StepState::AwaitingResume);

    assert_eq!(
        game.step().unwrap(),
        StepState::GameOver(Outcome::AntsLose(LossCause::QueenPerished))
    );
    assert_eq!(place_of(&game, queen), None);
}

// =============================================================================
// Ant rules
// =============================================================================

#[test]
fn fire_ant_burns_bees_on_death() {
    init_tracing();
    let mut t = fixtures::tunnel(2);
    let fire = t.colony.spawn_ant(AntKind::Fire);
    t.colony.add_insect(t.tunnel[0], fire).unwrap();
    let near = t.colony.spawn_bee(BeeKind::Bee, 10.0);
    t.colony.add_insect(t.tunnel[0], near).unwrap();
    let far = t.colony.spawn_bee(BeeKind::Bee, 10.0);
    t.colony.add_insect(t.tunnel[1], far).unwrap();

    t.colony.reduce_health(fire, 1.0).unwrap();
    assert_eq!(t.colony.get(near).unwrap().health(), 9.0);

    t.colony.reduce_health(fire, 2.0).unwrap();
    assert_eq!(t.colony.get(near).unwrap().health(), 4.0);
    assert_eq!(t.colony.get(far).unwrap().health(), 10.0);
    assert_eq!(t.colony.get(fire).unwrap().place(), None);
}

#[test]
fn fire_ant_at_full_health_deals_six() {
    let mut t = fixtures::tunnel(1);
    let fire = t.colony.spawn_ant(AntKind::Fire);
    t.colony.add_insect(t.tunnel[0], fire).unwrap();
    let bee = t.colony.spawn_bee(BeeKind::Bee, 10.0);
    t.colony.add_insect(t.tunnel[0], bee).unwrap();

    t.colony.reduce_health(fire, 3.0).unwrap();

    assert_eq!(t.colony.get(bee).unwrap().health(), 4.0);
}

#[test]
fn container_shields_then_promotes() {
    let plan = AssaultPlan::new().add_wave(BeeKind::Bee, 10.0, 0, 1);
    let mut game = one_tunnel(1, 7, &plan);

    game.step().unwrap();
    let thrower = game.deploy_ant("tunnel_0_0", "Thrower").unwrap().unwrap();
    let guard = game.deploy_ant("tunnel_0_0", "Bodyguard").unwrap().unwrap();
    assert_eq!(game.ants(), vec![guard]);

    for _ in 0..4 {
        game.step().unwrap();
    }

    let bee = game.active_bees()[0];
    assert!(!game.colony().get(guard).unwrap().is_alive());
    assert_eq!(game.ants(), vec![thrower]);
    assert_eq!(place_of(&game, thrower), Some(place_id(&game, "tunnel_0_0")));
    assert_eq!(health(&game, thrower), 1.0);
    assert_eq!(health(&game, bee), 8.0);
}

#[test]
fn queen_doubles_ants_behind_her_once() {
    let plan = AssaultPlan::new().add_wave(BeeKind::Bee, 50.0, 3, 1);
    let mut game = one_tunnel(4, 20, &plan);

    game.step().unwrap();
    let thrower = game.deploy_ant("tunnel_0_0", "Thrower").unwrap().unwrap();
    let queen = game.deploy_ant("tunnel_0_1", "Queen").unwrap().unwrap();
    let ahead = game.deploy_ant("tunnel_0_2", "Wall").unwrap().unwrap();

    for _ in 0..4 {
        game.step().unwrap();
    }

    let damage = |id| game.colony().get(id).unwrap().damage();
    assert_eq!(damage(thrower), 2.0);
    assert_eq!(damage(queen), 1.0);
    assert_eq!(damage(ahead), 0.0);
    assert!(game.colony().get(thrower).unwrap().as_ant().unwrap().is_doubled());
    assert!(!game.colony().get(ahead).unwrap().as_ant().unwrap().is_doubled());
}

#[test]
fn ants_drown_unless_waterproof() {
    init_tracing();
    let config = GameConfig {
        starting_food: 9,
        ..GameConfig::with_seed(5)
    };
    let mut game = GameState::new(&config, &AssaultPlan::new()).unwrap();

    let thrower = game.deploy_ant("water_0_2", "Thrower").unwrap().unwrap();
    let scuba = game.deploy_ant("water_1_2", "Scuba").unwrap().unwrap();

    assert_eq!(place_of(&game, thrower), None);
    assert_eq!(health(&game, thrower), 0.0);
    assert_eq!(place_of(&game, scuba), Some(place_id(&game, "water_1_2")));
    assert_eq!(game.ants(), vec![scuba]);
    assert_eq!(game.food(), 0);
}

#[test]
fn second_scare_is_ignored() {
    let plan = AssaultPlan::new().add_wave(BeeKind::Bee, 10.0, 0, 1);
    let mut game = one_tunnel(6, 6, &plan);
    let entrance = place_id(&game, "tunnel_0_5");

    game.step().unwrap();
    game.deploy_ant("tunnel_0_0", "Scary").unwrap().unwrap();
    let bee = game.active_bees()[0];

    game.step().unwrap();
    assert_eq!(status(&game, bee, BeeStatus::Scared), 2);

    game.step().unwrap();
    assert_eq!(status(&game, bee, BeeStatus::Scared), 1);
    assert_eq!(place_of(&game, bee), Some(entrance));

    game.step().unwrap();
    assert_eq!(status(&game, bee, BeeStatus::Scared), 1);

    game.step().unwrap();
    assert_eq!(status(&game, bee, BeeStatus::Scared), 0);
    assert_eq!(place_of(&game, bee), Some(entrance));

    game.step().unwrap();
    game.step().unwrap();
    assert_eq!(place_of(&game, bee), Some(place_id(&game, "tunnel_0_4")));
    assert_eq!(health(&game, bee), 10.0);
}

#[test]
fn slowed_bee_moves_on_even_turns_only() {
    let plan = AssaultPlan::new().add_wave(BeeKind::Bee, 10.0, 0, 1);
    let mut game = one_tunnel(8, 6, &plan);

    game.step().unwrap();
    game.deploy_ant("tunnel_0_0", "Slow").unwrap().unwrap();
    let bee = game.active_bees()[0];

    let mut positions = Vec::new();
    for _ in 0..4 {
        game.step().unwrap();
        game.step().unwrap();
        let place = place_of(&game, bee).unwrap();
        positions.push(game.colony().place(place).unwrap().name().to_string());
    }

    assert_eq!(
        positions,
        vec!["tunnel_0_7", "tunnel_0_6", "tunnel_0_6", "tunnel_0_5"]
    );
    assert_eq!(status(&game, bee, BeeStatus::Slowed), 4);
}

#[test]
fn hungry_ant_digests_between_meals() {
    let plan = AssaultPlan::new().add_wave(BeeKind::Bee, 1.0, 0, 2);
    let mut game = one_tunnel(1, 4, &plan);

    game.step().unwrap();
    let hungry = game.deploy_ant("tunnel_0_0", "Hungry").unwrap().unwrap();
    game.step().unwrap();

    assert_eq!(game.colony().bees().len(), 1);
    let cooldown = |game: &GameState| {
        game.colony().get(hungry).unwrap().as_ant().unwrap().cooldown()
    };
    assert_eq!(cooldown(&game), 3);

    game.step().unwrap();
    assert_eq!(health(&game, hungry), 0.0);
}

#[test]
fn laser_fades_and_stops_counting() {
    init_tracing();
    let mut t = fixtures::tunnel(5);
    let laser = t.colony.spawn_ant(AntKind::Laser);
    t.colony.add_insect(t.tunnel[0], laser).unwrap();
    let bee = t.colony.spawn_bee(BeeKind::Bee, 100.0);
    t.colony.add_insect(t.tunnel[4], bee).unwrap();

    let behavior = LaserBehavior::new();
    let resolvers = ResolverSet::standard();
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut food = 0;
    for time in 0..20 {
        let ctx = fixtures::ctx(&t.colony, laser, time);
        let effects = behavior.act(&ctx, &t.colony, &mut rng);
        resolvers.apply(&effects, &mut t.colony, &mut food).unwrap();
    }

    let state = t.colony.get(laser).unwrap().as_ant().unwrap();
    assert_eq!(state.shots_fired(), 16);
    assert_eq!(t.colony.get(bee).unwrap().health(), 91.5);
}

#[test]
fn insufficient_food_is_rejected() {
    let mut game = one_tunnel(3, 9, &AssaultPlan::new());

    assert_eq!(game.deploy_ant("tunnel_0_1", "Laser").unwrap(), None);
    assert_eq!(game.food(), 9);
    assert!(game.ants().is_empty());
    assert!(game.deploy_ant("tunnel_0_1", "Fire").unwrap().is_some());
    assert_eq!(game.food(), 4);
}
