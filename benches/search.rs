//! Alpha-beta vs. exhaustive minimax on tic-tac-toe.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_adversarial::search::{alpha_beta, minimax};
use rust_adversarial::{Game, TicTacToe};

fn bench_opening(c: &mut Criterion) {
    let game = TicTacToe::new();
    let state = game.initial_state();

    let mut group = c.benchmark_group("opening move");
    group.sample_size(10);
    group.bench_function("alpha-beta", |b| {
        b.iter(|| alpha_beta::best_action(&game, black_box(&state)))
    });
    group.bench_function("minimax", |b| {
        b.iter(|| minimax::best_action(&game, black_box(&state)))
    });
    group.finish();
}

fn bench_midgame(c: &mut Criterion) {
    let game = TicTacToe::new();
    let state = game.parse_state("x../.o./...").expect("valid board");

    let mut group = c.benchmark_group("midgame move");
    group.bench_function("alpha-beta", |b| {
        b.iter(|| alpha_beta::best_action(&game, black_box(&state)))
    });
    group.bench_function("minimax", |b| {
        b.iter(|| minimax::best_action(&game, black_box(&state)))
    });
    group.finish();
}

criterion_group!(benches, bench_opening, bench_midgame);
criterion_main!(benches);
