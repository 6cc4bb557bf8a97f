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

//! Iterative deepening driver. Each iteration re-searches from depth 1, one
//! ply deeper than the last, so a stopped search always has a complete,
//! usable result from the previous iteration.

pub mod alpha_beta;
pub mod defs;
pub mod time;

use crate::board::playmove::{make_move, take_move};
use crate::board::Board;
use crate::defs::{Move, INFINITE, MATE_THRESHOLD};
use crate::engine::defs::GoParameters;
use crate::engine::transposition::TranspositionTable;
use crate::evaluation::Evaluator;
use crate::movegen::defs as mv;
use crate::movegen::generate::generate_all;
use defs::SearchInfo;

pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
    pub depth: u8,
    pub nodes: u64,
    pub pv: Vec<Move>,
    pub time_ms: u64,
}

pub fn search_position(
    board: &mut Board,
    tt: &mut TranspositionTable,
    evaluator: &dyn Evaluator,
    params: &GoParameters,
) -> SearchResult {
    let mut info = SearchInfo::new();
    info.time_limit_ms = time::allocate_ms(params, board.side);
    info.depth_limit = params.depth;

    let max_depth = params.depth.unwrap_or(crate::defs::MAX_PLY as u8);

    #[cfg(feature = "logging")]
    log::info!(
        "search start: side={} time_limit_ms={:?} max_depth={max_depth}",
        board.side,
        info.time_limit_ms
    );

    let mut result = SearchResult {
        best_move: None,
        score: 0,
        depth: 0,
        nodes: 0,
        pv: Vec::new(),
        time_ms: 0,
    };

    for depth in 1..=max_depth {
        let score = alpha_beta::alpha_beta(-INFINITE, INFINITE, depth, board, tt, &mut info, evaluator, true);

        if info.stopped && depth > 1 {
            break;
        }

        let pv = extract_pv(board, tt, depth);
        if let Some(&best) = pv.first() {
            result.best_move = Some(best);
            result.score = score;
            result.depth = depth;
            result.pv = pv;
        }
        result.nodes = info.nodes;
        result.time_ms = info.elapsed_ms();

        if info.stopped || score.abs() > MATE_THRESHOLD {
            break;
        }
    }

    #[cfg(feature = "logging")]
    log::info!(
        "search stop: depth={} nodes={} score={} time_ms={}",
        result.depth,
        result.nodes,
        result.score,
        result.time_ms
    );

    result
}

/// Walk the transposition table's best-move chain from the root, applying
/// each move to a scratch copy of the board. Stops at a repeated position,
/// a missing entry, or [`crate::defs::MAX_PLY`] to guarantee termination
/// even if the table holds a cycle.
fn extract_pv(board: &Board, tt: &TranspositionTable, max_len: u8) -> Vec<Move> {
    let mut scratch = board.clone();
    let mut pv = Vec::new();

    for _ in 0..max_len {
        let m = tt.best_move(scratch.pos_key);
        if m == 0 || !move_is_pseudo_legal(&scratch, m) {
            break;
        }
        if !make_move(&mut scratch, m) {
            break;
        }
        pv.push(m);
    }

    for _ in 0..pv.len() {
        take_move(&mut scratch);
    }

    pv
}

fn move_is_pseudo_legal(board: &Board, m: Move) -> bool {
    generate_all(board, board.ply)
        .as_slice()
        .iter()
        .any(|scored| scored.m == m)
}

pub fn format_move(m: Move) -> String {
    let from = square_name(mv::from_square(m));
    let to = square_name(mv::to_square(m));
    let promo = match mv::promoted(m) {
        p if p == crate::defs::Pieces::WQ || p == crate::defs::Pieces::BQ => "q",
        p if p == crate::defs::Pieces::WR || p == crate::defs::Pieces::BR => "r",
        p if p == crate::defs::Pieces::WB || p == crate::defs::Pieces::BB => "b",
        p if p == crate::defs::Pieces::WN || p == crate::defs::Pieces::BN => "n",
        _ => "",
    };
    format!("{from}{to}{promo}")
}

fn square_name(square: usize) -> String {
    let file = crate::board::defs::FILES_BOARD[square];
    let rank = crate::board::defs::RANKS_BOARD[square];
    format!(
        "{}{}",
        crate::board::defs::FILE_CHARS[file] as char,
        crate::board::defs::RANK_CHARS[rank] as char
    )
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
    fn iterative_deepening_finds_a_mate_in_one() {
        let mut board = board_from("6k1/5ppp/8/8/8/8/8/R3K2R w KQ - 0 1");
        let mut tt = TranspositionTable::new(1);
        let evaluator = Classical;
        let params = GoParameters {
            depth: Some(4),
            ..Default::default()
        };
        let result = search_position(&mut board, &mut tt, &evaluator, &params);
        assert!(result.best_move.is_some());
        assert!(result.score > MATE_THRESHOLD);
    }

    #[test]
    fn format_move_renders_a_promotion() {
        let m = mv::encode_move(85, 96, crate::defs::Pieces::NONE, crate::defs::Pieces::WQ, false, false, false);
        assert_eq!(format_move(m), "h7h8q");
    }
}
