use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scarab::board::zobrist::ZobristRandoms;
use scarab::board::Board;
use scarab::defs::FEN_START_POSITION;
use scarab::evaluation::{Classical, Evaluator};
use scarab::movegen::{generate_all, perft::perft};
use std::sync::Arc;

const TEST_POSITIONS: &[(&str, &str)] = &[
    (FEN_START_POSITION, "Starting Position"),
    (
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
        "After 1.e4",
    ),
    (
        "r1bq1rk1/pppp1ppp/2n2n2/2b1p3/2B1P3/3P1N2/PPP2PPP/RNBQ1RK1 w - - 6 7",
        "Castled Position",
    ),
    (
        "r2q1rk1/ppp2ppp/2np1n2/2b1p1B1/2B1P3/3P1N2/PPP2PPP/RN1Q1RK1 w - - 0 9",
        "Complex Middlegame",
    ),
    ("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", "King and Pawn Endgame"),
    ("8/8/8/8/8/8/8/K7 w - - 0 1", "Lone King"),
];

fn setup_position(fen: &str) -> Board {
    let mut board = Board::new(Arc::new(ZobristRandoms::new()));
    board.set_fen(fen).expect("valid FEN");
    board
}

fn bench_evaluation_positions(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluation_positions");
    let evaluator = Classical;

    for (fen, name) in TEST_POSITIONS {
        let board = setup_position(fen);
        group.bench_with_input(BenchmarkId::new("evaluate", name), fen, |b, _| {
            b.iter(|| black_box(evaluator.evaluate(&board)));
        });
    }

    group.finish();
}

fn bench_move_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_generation");

    for (fen, name) in TEST_POSITIONS {
        let board = setup_position(fen);
        group.bench_with_input(BenchmarkId::new("generate_all", name), fen, |b, _| {
            b.iter(|| black_box(generate_all(&board, 0)));
        });
    }

    group.finish();
}

fn bench_perft_depth_three(c: &mut Criterion) {
    c.bench_function("perft_starting_position_depth_3", |b| {
        b.iter(|| {
            let mut board = setup_position(FEN_START_POSITION);
            black_box(perft(&mut board, 3))
        });
    });
}

criterion_group!(
    benches,
    bench_evaluation_positions,
    bench_move_generation,
    bench_perft_depth_three
);
criterion_main!(benches);
