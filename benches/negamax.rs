//! Search benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tictactoe_core::core::{Board, Mark};
use tictactoe_core::negamax::{NegamaxAi, SearchConfig};

fn bench_search(c: &mut Criterion) {
    let sparse: Board = "____x____".parse().unwrap();
    let midgame: Board = "x_o _x_ ___".parse().unwrap();
    let config = SearchConfig::default().with_opening_moves(3, 0);

    c.bench_function("negamax_one_mark", |b| {
        b.iter(|| {
            let mut ai = NegamaxAi::with_config(Mark::O, config.clone());
            ai.pick_position(black_box(&sparse))
        })
    });

    c.bench_function("negamax_midgame", |b| {
        b.iter(|| {
            let mut ai = NegamaxAi::new(Mark::O);
            ai.pick_position(black_box(&midgame))
        })
    });

    c.bench_function("board_add_move", |b| {
        b.iter(|| black_box(&sparse).add_move(black_box(0), Mark::O))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
