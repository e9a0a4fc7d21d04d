use criterion::{black_box, criterion_group, criterion_main, Criterion};
use falltris::core::{Board, Grid};
use falltris::types::{Command, ShapeKind};

fn bench_tick(c: &mut Criterion) {
    let mut board = Board::seeded(12345);
    board.start();

    c.bench_function("board_tick", |b| {
        b.iter(|| {
            if !board.is_running() {
                board.start();
            }
            black_box(board.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            // Fill bottom 4 rows
            for y in 0..4 {
                for x in 0..10 {
                    grid.set(x, y, ShapeKind::Line);
                }
            }
            black_box(grid.clear_full_rows());
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut board = Board::seeded(12345);
    board.start();

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            black_box(board.spawn_piece());
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut board = Board::seeded(12345);
    board.start();

    c.bench_function("move_horizontal", |b| {
        b.iter(|| {
            if !board.apply(Command::MoveRight) {
                while board.apply(Command::MoveLeft) {}
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut board = Board::seeded(12345);
    board.start();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            black_box(board.apply(Command::RotateClockwise));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_piece_spawn,
    bench_move,
    bench_rotate
);
criterion_main!(benches);
