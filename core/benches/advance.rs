use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use mochi_snake_core::*;

/// Sweeps the board row by row with alternating turns until the game ends.
fn play_out(seed: u64, side: Coord) -> GameSession {
    let config = GameConfig::new(side)
        .with_start((0, 0))
        .and_then(|config| config.with_heading(Heading::North).with_opening_food(None))
        .expect("corner start is on the board");
    let mut placer = RandomFoodPlacer::new(seed);
    let mut session = GameSession::start(&config, &mut placer);
    let mut turn = Turn::Right;

    while session.is_running() {
        let (next, _) = session.advance(&mut placer);
        session = next;
        let head = session.snake().head();
        let at_edge = match session.heading() {
            Heading::North => head.1 + 1 == side,
            Heading::South => head.1 == 0,
            _ => true,
        };
        if at_edge {
            session = session.request_turn(turn).0;
            let (next, _) = session.advance(&mut placer);
            session = next;
            session = session.request_turn(turn).0;
            turn = turn.opposite();
        }
    }
    session
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");
    for side in [10, 32] {
        group.bench_function(format!("play_out_{side}x{side}"), |b| {
            b.iter(|| play_out(black_box(7), black_box(side)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_advance);
criterion_main!(benches);
