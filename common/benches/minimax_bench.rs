use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use common::games::SessionRng;
use common::games::tictactoe::{Board, Difficulty, Mark, calculate_minimax_move, evaluate, select_move};

fn bench_minimax_full_game() {
    let mut board = Board::new();
    let mut current_mark = Mark::X;
    let mut session_rng = SessionRng::new(0);

    while !evaluate(&board).is_terminal() {
        match select_move(&board, current_mark, Difficulty::Hard, &mut session_rng) {
            Ok(index) => {
                board = board.place(index, current_mark);
                current_mark = current_mark.opponent().unwrap();
            }
            Err(_) => break,
        }
    }
}

fn bench_minimax_single_move_empty_board() {
    let board = Board::new();
    let _ = calculate_minimax_move(black_box(&board), Mark::X);
}

fn bench_minimax_single_move_mid_game() {
    let mut board = Board::new();
    let moves = [(4, Mark::X), (0, Mark::O), (2, Mark::X)];
    for (index, mark) in moves {
        board = board.place(index, mark);
    }
    let _ = calculate_minimax_move(black_box(&board), Mark::O);
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(20));

    group.bench_function("full_game", |b| b.iter(bench_minimax_full_game));

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_minimax_single_move_empty_board)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_minimax_single_move_mid_game)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
