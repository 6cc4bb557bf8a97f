use scarab::board::zobrist::ZobristRandoms;
use scarab::board::Board;
use scarab::defs::MATE_THRESHOLD;
use scarab::engine::defs::GoParameters;
use scarab::engine::transposition::TranspositionTable;
use scarab::evaluation::Classical;
use scarab::search::{format_move, search_position};
use std::sync::Arc;

fn board_from(fen: &str) -> Board {
    let mut board = Board::new(Arc::new(ZobristRandoms::new()));
    board.set_fen(fen).unwrap();
    board
}

#[test]
fn backrank_mate_in_one_is_found_and_reported_as_a_mate_score() {
    let mut board = board_from("6k1/5ppp/8/8/8/8/8/R3K2R w KQ - 0 1");
    let mut tt = TranspositionTable::new(1);
    let evaluator = Classical;
    let params = GoParameters {
        depth: Some(4),
        ..Default::default()
    };

    let result = search_position(&mut board, &mut tt, &evaluator, &params);
    assert!(result.score > MATE_THRESHOLD);
    assert_eq!(result.best_move.map(format_move), Some("a1a8".to_string()));
}

#[test]
fn smothered_mate_pattern_is_found_at_shallow_depth() {
    // White to play Nf7#.
    let mut board = board_from("6rk/6pp/8/6N1/8/8/8/6K1 w - - 0 1");
    let mut tt = TranspositionTable::new(1);
    let evaluator = Classical;
    let params = GoParameters {
        depth: Some(3),
        ..Default::default()
    };

    let result = search_position(&mut board, &mut tt, &evaluator, &params);
    assert!(result.score > MATE_THRESHOLD);
}

#[test]
fn a_won_endgame_prefers_advancing_the_passed_pawn() {
    let mut board = board_from("8/8/8/8/8/k7/P7/K7 w - - 0 1");
    let mut tt = TranspositionTable::new(1);
    let evaluator = Classical;
    let params = GoParameters {
        depth: Some(5),
        ..Default::default()
    };

    let result = search_position(&mut board, &mut tt, &evaluator, &params);
    assert!(result.best_move.is_some());
    assert!(result.score >= 0);
}
