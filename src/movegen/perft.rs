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

//! Move-generator node-count enumeration, used from `--perft` and the test
//! suite to cross-check make/unmake and move generation against known
//! node counts rather than just spot-checking individual positions.

use super::generate::generate_all;
use crate::board::playmove::{make_move, take_move};
use crate::board::Board;

pub fn perft(board: &mut Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let list = generate_all(board, board.ply);
    let mut nodes = 0;

    for scored in list.as_slice() {
        if !make_move(board, scored.m) {
            continue;
        }
        nodes += perft(board, depth - 1);
        take_move(board);
    }

    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::zobrist::ZobristRandoms;
    use std::sync::Arc;

    fn board_from(fen: &str) -> Board {
        let mut board = Board::new(Arc::new(ZobristRandoms::new()));
        board.set_fen(fen).unwrap();
        board
    }

    #[test]
    fn starting_position_depth_1_has_twenty_nodes() {
        let mut board = board_from(crate::defs::FEN_START_POSITION);
        assert_eq!(perft(&mut board, 1), 20);
    }

    #[test]
    fn starting_position_depth_2_has_four_hundred_nodes() {
        let mut board = board_from(crate::defs::FEN_START_POSITION);
        assert_eq!(perft(&mut board, 2), 400);
    }

    #[test]
    fn starting_position_depth_3_has_the_well_known_node_count() {
        let mut board = board_from(crate::defs::FEN_START_POSITION);
        assert_eq!(perft(&mut board, 3), 8_902);
    }

    #[test]
    fn kiwipete_depth_1_has_forty_eight_nodes() {
        let mut board = board_from(crate::defs::FEN_KIWIPETE_POSITION);
        assert_eq!(perft(&mut board, 1), 48);
    }
}
