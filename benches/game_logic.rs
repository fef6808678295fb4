use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris_rules::core::{Arena, GameSnapshot, Tetris};
use tetris_rules::types::{ARENA_HEIGHT, ARENA_WIDTH};

fn bench_move_down(c: &mut Criterion) {
    let mut game = Tetris::new(12345);

    c.bench_function("move_down", |b| {
        b.iter(|| {
            game.move_down();
        })
    });
}

fn bench_sweep(c: &mut Criterion) {
    c.bench_function("sweep_4_rows", |b| {
        b.iter(|| {
            let mut rows = [[0u8; ARENA_WIDTH]; ARENA_HEIGHT];
            // Fill bottom 4 rows
            for row in rows.iter_mut().skip(ARENA_HEIGHT - 4) {
                *row = [5; ARENA_WIDTH];
            }
            let mut arena = Arena::from_rows(black_box(rows));
            arena.sweep()
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut game = Tetris::new(12345);

    c.bench_function("move_right", |b| {
        b.iter(|| {
            game.move_right();
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut game = Tetris::new(12345);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            game.rotate();
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let game = Tetris::new(12345);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            game.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_move_down,
    bench_sweep,
    bench_move,
    bench_rotate,
    bench_snapshot
);
criterion_main!(benches);
