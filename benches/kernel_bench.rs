use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use foxcatcher::movegen::legal_moves;
use foxcatcher::{BoardState, Direction, PieceKind};

fn bench_possible_moves_fox(c: &mut Criterion) {
    let state = BoardState::new(PieceKind::Fox);
    c.bench_function("possible_moves_fox", |b| {
        b.iter(|| black_box(&state).possible_moves(black_box(0)))
    });
}

fn bench_legal_moves_dogs(c: &mut Criterion) {
    let state = BoardState::new(PieceKind::Dog);
    c.bench_function("legal_moves_all_dogs", |b| {
        b.iter(|| legal_moves(black_box(&state)))
    });
}

fn bench_goal_check(c: &mut Criterion) {
    let state = BoardState::new(PieceKind::Fox)
        .play(0, Direction::DownRight)
        .unwrap();
    c.bench_function("is_goal", |b| b.iter(|| black_box(&state).is_goal()));
}

fn bench_random_playout(c: &mut Criterion) {
    c.bench_function("random_playout", |b| {
        let mut rng = SmallRng::seed_from_u64(42);
        b.iter(|| {
            let mut state = BoardState::new(PieceKind::Fox);
            let mut plies = 0u32;
            while !state.is_goal() && plies < 1000 {
                match legal_moves(&state).choose(&mut rng) {
                    Some(m) => state = m.play(&state).unwrap(),
                    None => state.pass_turn(),
                }
                plies += 1;
            }
            black_box(state)
        })
    });
}

fn bench_board_state_copy(c: &mut Criterion) {
    let state = BoardState::new(PieceKind::Dog);
    c.bench_function("board_state_copy", |b| b.iter(|| *black_box(&state)));
}

criterion_group!(
    benches,
    bench_possible_moves_fox,
    bench_legal_moves_dogs,
    bench_goal_check,
    bench_random_playout,
    bench_board_state_copy,
);
criterion_main!(benches);
