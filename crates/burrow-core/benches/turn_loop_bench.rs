use burrow_core::{AssaultPlan, BeeKind, ColonyError, GameConfig, GameState, StepState};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

const ORDERS: [(&str, &str); 9] = [
    ("tunnel_0_0", "Harvester"),
    ("tunnel_1_0", "Harvester"),
    ("tunnel_2_0", "Harvester"),
    ("tunnel_0_1", "Thrower"),
    ("tunnel_1_1", "Thrower"),
    ("tunnel_2_1", "Thrower"),
    ("tunnel_0_3", "Tank"),
    ("tunnel_1_3", "Ninja"),
    ("tunnel_2_3", "Laser"),
];

fn plan() -> AssaultPlan {
    (0..20).fold(AssaultPlan::new(), |plan, wave| {
        plan.add_wave(BeeKind::Bee, 3.0, 2 + wave * 2, 3)
            .add_wave(BeeKind::Wasp, 4.0, 3 + wave * 3, 1)
    })
}

fn strategy(game: &mut GameState) -> Result<(), ColonyError> {
    let deployed = game.colony().insects().filter(|i| i.is_ant()).count();
    if let Some((place, ant)) = ORDERS.get(deployed) {
        game.deploy_ant(place, ant)?;
    }
    Ok(())
}

fn bench_full_game(c: &mut Criterion) {
    let plan = plan();

    c.bench_function("full_game", |b| {
        b.iter_batched(
            || GameState::new(&GameConfig::with_seed(42), &plan).unwrap(),
            |mut game| black_box(game.play(strategy).unwrap()),
            BatchSize::SmallInput,
        )
    });
}

/// Replays a game until most waves are in the tunnels.
fn crowded_game() -> GameState {
    let mut game = GameState::new(&GameConfig::with_seed(7), &plan()).unwrap();
    for _ in 0..16 {
        if let StepState::AwaitingPlacement = game.step().unwrap() {
            strategy(&mut game).unwrap();
        }
    }
    game
}

fn bench_crowded_turn(c: &mut Criterion) {
    c.bench_function("crowded_turn", |b| {
        b.iter_batched(
            crowded_game,
            |mut game| {
                game.step().unwrap();
                black_box(game.step().unwrap())
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_full_game, bench_crowded_turn);
criterion_main!(benches);
