use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use rust_2048::{
    add_random_tile, determine_status, is_any_move_possible, process_move, Board, Direction,
    GameRng,
};

fn corpus() -> Vec<Board> {
    let mut rng = GameRng::new(42);
    let mut boards = Vec::new();

    let empty = Board::empty(4).unwrap();
    boards.push(empty.clone());
    let (b, _) = add_random_tile(&empty, &mut rng);
    let (mut b, _) = add_random_tile(&b, &mut rng);
    boards.push(b.clone());

    // A spread of densities from a fixed move cycle.
    for i in 0..40 {
        let out = process_move(&b, Direction::ALL[i % 4]);
        if out.changed {
            b = add_random_tile(&out.board, &mut rng).0;
        }
        boards.push(b.clone());
    }
    boards
}

fn bench_process_move(c: &mut Criterion) {
    let boards = corpus();
    for direction in Direction::ALL {
        c.bench_function(&format!("process_move/{}", direction.name().to_lowercase()), |bch| {
            bch.iter(|| {
                let mut acc = 0u64;
                for bd in &boards {
                    acc ^= process_move(black_box(bd), direction).score_delta;
                }
                black_box(acc)
            })
        });
    }
}

fn bench_status(c: &mut Criterion) {
    let boards = corpus();
    c.bench_function("determine_status", |bch| {
        bch.iter(|| {
            let mut stuck = 0usize;
            for bd in &boards {
                if !is_any_move_possible(black_box(bd)) {
                    stuck += 1;
                }
                black_box(determine_status(bd, 2048));
            }
            black_box(stuck)
        })
    });
}

criterion_group!(benches, bench_process_move, bench_status);
criterion_main!(benches);
