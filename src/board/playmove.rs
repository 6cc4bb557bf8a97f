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

//! Make/unmake a pseudo-legal move. `make_move` returns `false` (and
//! unwinds its own partial update) if the move leaves the mover's own king
//! in check, since move generation only produces pseudo-legal moves.

use super::attack::is_square_attacked;
use super::defs::{self, CASTLE_PERM, NO_SQ};
use super::history::Undo;
use super::Board;
use crate::defs::{Move, Pieces, Sides};
use crate::movegen::defs as mv;

pub fn make_move(board: &mut Board, m: Move) -> bool {
    let from = mv::from_square(m);
    let to = mv::to_square(m);
    let side = board.side;

    let undo = Undo {
        game_move: m,
        castle_perm: board.castle_perm,
        en_passant: board.en_passant,
        fifty_move: board.fifty_move,
        pos_key: board.pos_key,
    };

    if mv::is_en_passant(m) {
        let captured_square = if side == Sides::WHITE { to - 10 } else { to + 10 };
        board.remove_piece(captured_square);
    } else if mv::is_castle(m) {
        match to {
            x if x == defs::Squares::G1 => board.move_piece(defs::Squares::H1, defs::Squares::F1),
            x if x == defs::Squares::C1 => board.move_piece(defs::Squares::A1, defs::Squares::D1),
            x if x == defs::Squares::G8 => board.move_piece(defs::Squares::H8, defs::Squares::F8),
            x if x == defs::Squares::C8 => board.move_piece(defs::Squares::A8, defs::Squares::D8),
            _ => unreachable!("castle move to a non-castling target square"),
        }
    }

    if board.en_passant != NO_SQ {
        board.pos_key ^= board.zobrist.en_passant(board.en_passant);
    }
    board.pos_key ^= board.zobrist.castling(board.castle_perm);

    board.history.push(undo);

    board.castle_perm &= CASTLE_PERM[from];
    board.castle_perm &= CASTLE_PERM[to];
    board.en_passant = NO_SQ;

    board.pos_key ^= board.zobrist.castling(board.castle_perm);

    let captured = mv::captured(m);
    if captured != Pieces::NONE {
        board.remove_piece(to);
        board.fifty_move = 0;
    } else {
        board.fifty_move += 1;
    }

    board.his_ply += 1;
    board.ply += 1;

    if defs::PIECE_PAWN[board.pieces[from]] {
        board.fifty_move = 0;
        if mv::is_pawn_start(m) {
            let ep_square = if side == Sides::WHITE { from + 10 } else { from - 10 };
            board.en_passant = ep_square;
            board.pos_key ^= board.zobrist.en_passant(ep_square);
        }
    }

    board.move_piece(from, to);

    let promoted = mv::promoted(m);
    if promoted != Pieces::NONE {
        board.remove_piece(to);
        board.add_piece(to, promoted);
    }

    board.flip_side();

    let king_square = board.king_square[side];
    let opponent = Sides::WHITE + Sides::BLACK - side;
    if is_square_attacked(board, king_square, opponent) {
        take_move(board);
        return false;
    }

    debug_assert!(board.is_consistent());
    true
}

pub fn take_move(board: &mut Board) {
    board.his_ply -= 1;
    board.ply -= 1;

    let undo = board.history.pop();
    let m = undo.game_move;
    let from = mv::from_square(m);
    let to = mv::to_square(m);

    board.flip_side();
    let side = board.side;

    if mv::is_en_passant(m) {
        let pawn = if side == Sides::WHITE { Pieces::BP } else { Pieces::WP };
        let captured_square = if side == Sides::WHITE { to - 10 } else { to + 10 };
        board.add_piece(captured_square, pawn);
    } else if mv::is_castle(m) {
        match to {
            x if x == defs::Squares::G1 => board.move_piece(defs::Squares::F1, defs::Squares::H1),
            x if x == defs::Squares::C1 => board.move_piece(defs::Squares::D1, defs::Squares::A1),
            x if x == defs::Squares::G8 => board.move_piece(defs::Squares::F8, defs::Squares::H8),
            x if x == defs::Squares::C8 => board.move_piece(defs::Squares::D8, defs::Squares::A8),
            _ => unreachable!("castle move to a non-castling target square"),
        }
    }

    board.move_piece(to, from);

    let promoted = mv::promoted(m);
    if promoted != Pieces::NONE {
        board.remove_piece(from);
        let pawn = if side == Sides::WHITE { Pieces::WP } else { Pieces::BP };
        board.add_piece(from, pawn);
    }

    let captured = mv::captured(m);
    if captured != Pieces::NONE && !mv::is_en_passant(m) {
        board.add_piece(to, captured);
    }

    board.castle_perm = undo.castle_perm;
    board.en_passant = undo.en_passant;
    board.fifty_move = undo.fifty_move;
    board.pos_key = undo.pos_key;

    debug_assert!(board.is_consistent());
}

/// Flip the side to move without moving a piece, used by null-move
/// pruning. `take_null_move` is its exact inverse.
pub fn make_null_move(board: &mut Board) {
    let undo = Undo {
        game_move: 0,
        castle_perm: board.castle_perm,
        en_passant: board.en_passant,
        fifty_move: board.fifty_move,
        pos_key: board.pos_key,
    };
    board.history.push(undo);

    if board.en_passant != NO_SQ {
        board.pos_key ^= board.zobrist.en_passant(board.en_passant);
    }
    board.en_passant = NO_SQ;

    board.ply += 1;
    board.his_ply += 1;
    board.flip_side();
}

pub fn take_null_move(board: &mut Board) {
    board.his_ply -= 1;
    board.ply -= 1;
    board.flip_side();

    let undo = board.history.pop();
    board.castle_perm = undo.castle_perm;
    board.en_passant = undo.en_passant;
    board.fifty_move = undo.fifty_move;
    board.pos_key = undo.pos_key;
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
    fn quiet_move_then_unmake_restores_the_position() {
        let mut board = board_from(crate::defs::FEN_START_POSITION);
        let before = board.to_fen();
        let before_key = board.pos_key;
        let m = mv::encode_move(defs::fr_to_sq(4, 1), defs::fr_to_sq(4, 3), Pieces::NONE, Pieces::NONE, false, true, false);
        assert!(make_move(&mut board, m));
        assert_ne!(board.to_fen(), before);
        take_move(&mut board);
        assert_eq!(board.to_fen(), before);
        assert_eq!(board.pos_key, before_key);
    }

    #[test]
    fn castling_moves_the_rook_and_unmake_restores_both() {
        let mut board = board_from("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let before = board.to_fen();
        let m = mv::encode_move(
            defs::Squares::E1,
            defs::Squares::G1,
            Pieces::NONE,
            Pieces::NONE,
            false,
            false,
            true,
        );
        assert!(make_move(&mut board, m));
        assert_eq!(board.pieces[defs::Squares::F1], Pieces::WR);
        assert_eq!(board.pieces[defs::Squares::H1], Pieces::NONE);
        take_move(&mut board);
        assert_eq!(board.to_fen(), before);
    }

    #[test]
    fn illegal_move_leaving_king_in_check_is_rejected() {
        let mut board = board_from("4k3/8/8/8/8/8/4r3/4K3 w - - 0 1");
        let m = mv::encode_move(defs::Squares::E1, defs::fr_to_sq(3, 0), Pieces::NONE, Pieces::NONE, false, false, false);
        assert!(!make_move(&mut board, m));
    }

    #[test]
    fn null_move_then_unmake_restores_the_position() {
        let mut board = board_from(crate::defs::FEN_START_POSITION);
        let before = board.to_fen();
        make_null_move(&mut board);
        assert_ne!(board.to_fen(), before);
        take_null_move(&mut board);
        assert_eq!(board.to_fen(), before);
    }
}
