/* =======================================================================
Scarab is a chess playing engine.

Scarab is free software: you can redistribute it and/or modify it under
the terms of the GNU General Public License version 3 as published by
the Free Software Foundation.

Scarab is distributed in the hope that it will be useful, but WITHOUT
ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
FITNESS FOR A PARTICULAR PURPOSE.  See the GNU General Public License
for more details.

You should have received a copy of the GNU General Public License along
with this program.  If not, see <http://www.gnu.org/licenses/>.
======================================================================= */

//! Fail-hard negamax alpha-beta with a quiescence leaf search, null-move
//! pruning, late-move reductions, and transposition-table cutoffs. One
//! search runs at a time on the calling thread -- no multicut, no
//! principal-variation-search re-search window, no thread-local batching:
//! this is deliberately the simple, single-threaded core, not the fuller
//! SMP-oriented search a production engine would layer on top of it.

use crate::board::attack::is_square_attacked;
use crate::board::playmove::{make_move, make_null_move, take_move, take_null_move};
use crate::board::Board;
use crate::defs::{Sides, MATE, MATE_THRESHOLD};
use crate::engine::transposition::{HashFlag, TranspositionTable};
use crate::evaluation::Evaluator;
use crate::movegen::defs::{self as mv, MoveList};
use crate::movegen::generate::{generate_all, generate_captures};
use crate::search::defs::{
    SearchInfo, CHECK_TERMINATION_NODES, LMR_FULL_SEARCH_MOVES, LMR_MIN_DEPTH, LMR_REDUCTION,
    NULL_MOVE_MIN_DEPTH, NULL_MOVE_REDUCTION,
};

fn in_check(board: &Board) -> bool {
    let king_square = board.king_square[board.side];
    let opponent = Sides::WHITE + Sides::BLACK - board.side;
    is_square_attacked(board, king_square, opponent)
}

fn is_draw(board: &Board) -> bool {
    board.fifty_move >= 100 || board.is_repetition() || board.material_draw()
}

fn poll(info: &mut SearchInfo) {
    if info.nodes & CHECK_TERMINATION_NODES == 0 {
        info.check_time();
    }
}

fn store_killer(board: &mut Board, ply: usize, m: u32) {
    if board.search_killers[ply][0] != m {
        board.search_killers[ply][1] = board.search_killers[ply][0];
        board.search_killers[ply][0] = m;
    }
}

fn update_history(board: &mut Board, piece: usize, to: usize, depth: u8) {
    board.search_history[piece][to] += (depth as i32) * (depth as i32);
}

pub fn quiescence(
    mut alpha: i32,
    beta: i32,
    board: &mut Board,
    info: &mut SearchInfo,
    evaluator: &dyn Evaluator,
) -> i32 {
    info.nodes += 1;
    poll(info);
    if info.stopped {
        return 0;
    }

    if board.ply > 0 && is_draw(board) {
        return 0;
    }
    if board.ply as i8 >= crate::defs::MAX_PLY {
        return evaluator.evaluate(board);
    }

    let stand_pat = evaluator.evaluate(board);
    if stand_pat >= beta {
        return beta;
    }
    if stand_pat > alpha {
        alpha = stand_pat;
    }

    let mut list = generate_captures(board);
    let count = list.len();

    for i in 0..count {
        let scored = list.pick_best(i);
        if !make_move(board, scored.m) {
            continue;
        }
        let score = -quiescence(-beta, -alpha, board, info, evaluator);
        take_move(board);

        if info.stopped {
            return 0;
        }
        if score > alpha {
            if score >= beta {
                return beta;
            }
            alpha = score;
        }
    }

    alpha
}

#[allow(clippy::too_many_arguments)]
pub fn alpha_beta(
    mut alpha: i32,
    mut beta: i32,
    mut depth: u8,
    board: &mut Board,
    tt: &mut TranspositionTable,
    info: &mut SearchInfo,
    evaluator: &dyn Evaluator,
    do_null: bool,
) -> i32 {
    info.nodes += 1;
    poll(info);
    if info.stopped {
        return 0;
    }

    if depth == 0 {
        return quiescence(alpha, beta, board, info, evaluator);
    }

    if board.ply > 0 {
        if is_draw(board) {
            return 0;
        }
        if board.ply as i8 >= crate::defs::MAX_PLY {
            return evaluator.evaluate(board);
        }
        // Mate-distance pruning: a shorter mate than what alpha/beta can
        // already express is not worth searching for.
        let mating_value = MATE - board.ply as i32;
        if mating_value < beta {
            beta = mating_value;
            if alpha >= mating_value {
                return mating_value;
            }
        }
        let mated_value = -MATE + board.ply as i32;
        if mated_value > alpha {
            alpha = mated_value;
            if beta <= mated_value {
                return mated_value;
            }
        }
    }

    let ply = board.ply;
    let king_in_check = in_check(board);
    if king_in_check {
        depth += 1;
    }

    let pos_key = board.pos_key;
    if let Some(score) = tt.probe(pos_key, depth, alpha, beta, ply) {
        return score;
    }
    let tt_move = tt.best_move(pos_key);

    if do_null
        && !king_in_check
        && ply > 0
        && depth >= NULL_MOVE_MIN_DEPTH
        && board.big_piece_count[board.side] > 0
    {
        make_null_move(board);
        let score = -alpha_beta(
            -beta,
            -beta + 1,
            depth - NULL_MOVE_REDUCTION,
            board,
            tt,
            info,
            evaluator,
            false,
        );
        take_null_move(board);
        if info.stopped {
            return 0;
        }
        if score >= beta && score.abs() < MATE_THRESHOLD {
            return beta;
        }
    }

    let mut list = generate_all(board, ply);
    boost_hash_move(&mut list, tt_move);
    let count = list.len();

    let mut best_score = -crate::defs::INFINITE;
    let mut best_move = 0u32;
    let mut flag = HashFlag::Alpha;
    let mut legal_moves = 0usize;

    for i in 0..count {
        let scored = list.pick_best(i);
        if !make_move(board, scored.m) {
            continue;
        }
        legal_moves += 1;

        let is_capture_or_promo = mv::is_capture(scored.m) || mv::promoted(scored.m) != crate::defs::Pieces::NONE;
        let reduce = depth >= LMR_MIN_DEPTH
            && i >= LMR_FULL_SEARCH_MOVES
            && !king_in_check
            && !is_capture_or_promo;

        let score = if reduce {
            let reduced = -alpha_beta(-beta, -alpha, depth - 1 - LMR_REDUCTION, board, tt, info, evaluator, true);
            if reduced > alpha {
                -alpha_beta(-beta, -alpha, depth - 1, board, tt, info, evaluator, true)
            } else {
                reduced
            }
        } else {
            -alpha_beta(-beta, -alpha, depth - 1, board, tt, info, evaluator, true)
        };

        take_move(board);

        if info.stopped {
            return 0;
        }

        if score > best_score {
            best_score = score;
            best_move = scored.m;

            if score > alpha {
                if score >= beta {
                    info.fail_high += 1;
                    if legal_moves == 1 {
                        info.fail_high_first += 1;
                    }
                    if !mv::is_capture(scored.m) {
                        let to = mv::to_square(scored.m);
                        let piece = board.pieces[mv::from_square(scored.m)];
                        store_killer(board, ply, scored.m);
                        update_history(board, piece, to, depth);
                    }
                    tt.store(pos_key, best_move, beta, depth, HashFlag::Beta, ply);
                    return beta;
                }
                alpha = score;
                flag = HashFlag::Exact;
            }
        }
    }

    if legal_moves == 0 {
        return if king_in_check { -MATE + ply as i32 } else { 0 };
    }

    let stored_score = match flag {
        HashFlag::Exact => best_score,
        _ => alpha,
    };
    tt.store(pos_key, best_move, stored_score, depth, flag, ply);
    alpha
}

/// Give the transposition-table move from a previous, shallower search the
/// highest possible ordering score so it is tried before anything move
/// generation itself would otherwise rank first.
fn boost_hash_move(list: &mut MoveList, hash_move: u32) {
    if hash_move == 0 {
        return;
    }
    for scored in list.as_mut_slice() {
        if scored.m == hash_move {
            scored.score = i32::MAX;
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::zobrist::ZobristRandoms;
    use crate::evaluation::Classical;
    use std::sync::Arc;

    fn board_from(fen: &str) -> Board {
        let mut board = Board::new(Arc::new(ZobristRandoms::new()));
        board.set_fen(fen).unwrap();
        board
    }

    #[test]
    fn finds_mate_in_one() {
        let mut board = board_from("6k1/5ppp/8/8/8/8/8/R3K2R w KQ - 0 1");
        let mut tt = TranspositionTable::new(1);
        let mut info = SearchInfo::new();
        let evaluator = Classical;
        let score = alpha_beta(-crate::defs::INFINITE, crate::defs::INFINITE, 3, &mut board, &mut tt, &mut info, &evaluator, true);
        assert!(score > MATE_THRESHOLD);
    }

    #[test]
    fn stalemate_is_scored_as_a_draw() {
        let mut board = board_from("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        let mut tt = TranspositionTable::new(1);
        let mut info = SearchInfo::new();
        let evaluator = Classical;
        let score = alpha_beta(-crate::defs::INFINITE, crate::defs::INFINITE, 2, &mut board, &mut tt, &mut info, &evaluator, true);
        assert_eq!(score, 0);
    }
}
