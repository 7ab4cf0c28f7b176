use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{clear, rotate_clockwise, Board, EngineConfig, Matrix};
use blockfall::engine::best_placement;
use blockfall::types::PieceKind;

fn started_board() -> Board {
    let mut board = Board::with_config(EngineConfig::default().with_seed(12345)).unwrap();
    board.reset();
    board
}

fn bench_gravity_step(c: &mut Criterion) {
    let mut board = started_board();

    c.bench_function("gravity_step", |b| {
        b.iter(|| {
            if board.is_game_over() {
                board.reset();
            }
            let _ = black_box(board.gravity_step());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let mut grid = Matrix::new(25, 10);
    // Fill bottom 4 rows
    for row in 21..25 {
        for col in 0..10 {
            grid.set(row, col, PieceKind::I.fill());
        }
    }

    c.bench_function("clear_4_lines", |b| b.iter(|| clear(black_box(&grid))));
}

fn bench_spawn(c: &mut Criterion) {
    let mut board = started_board();

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            board.spawn();
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut board = started_board();

    c.bench_function("move_right_left", |b| {
        b.iter(|| {
            board.move_right();
            board.move_left();
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut board = started_board();
    board.move_down(false);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            board.rotate();
        })
    });
}

fn bench_rotate_matrix(c: &mut Criterion) {
    let grid = Matrix::new(25, 10);
    c.bench_function("rotate_clockwise_25x10", |b| {
        b.iter(|| rotate_clockwise(black_box(&grid)))
    });
}

fn bench_best_placement(c: &mut Criterion) {
    let board = started_board();
    c.bench_function("best_placement", |b| {
        b.iter(|| best_placement(black_box(&board)))
    });
}

criterion_group!(
    benches,
    bench_gravity_step,
    bench_line_clear,
    bench_spawn,
    bench_move,
    bench_rotate,
    bench_rotate_matrix,
    bench_best_placement
);
criterion_main!(benches);
