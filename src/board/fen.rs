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

//! FEN parsing and formatting. `parse` rejects a malformed string without
//! mutating `board`; callers see the board exactly as it was beforehand.

use super::defs::{self, NO_SQ};
use super::Board;
use crate::defs::{Castling, EngineError, EngineResult, Pieces, Sides};

pub fn parse(board: &mut Board, fen: &str) -> EngineResult<()> {
    let mut fields = fen.split_whitespace();
    let placement = fields
        .next()
        .ok_or_else(|| EngineError::InvalidFen(fen.to_string()))?;
    let side_to_move = fields.next().unwrap_or("w");
    let castling = fields.next().unwrap_or("-");
    let en_passant = fields.next().unwrap_or("-");
    let halfmove = fields.next().unwrap_or("0");
    let fullmove = fields.next().unwrap_or("1");

    let mut pieces = [Pieces::NONE; crate::defs::NrOf::SQUARES];
    for sq in 0..crate::defs::NrOf::SQUARES {
        if !defs::sq_on_board(sq) {
            pieces[sq] = defs::OFFBOARD;
        }
    }

    let mut rank = 7i32;
    let mut file = 0i32;
    for c in placement.chars() {
        match c {
            '/' => {
                if file != 8 || rank == 0 {
                    return Err(EngineError::InvalidFen(fen.to_string()));
                }
                rank -= 1;
                file = 0;
            }
            '1'..='8' => {
                let skip = c.to_digit(10).unwrap() as i32;
                file += skip;
            }
            _ => {
                let piece = char_to_piece(c).ok_or_else(|| EngineError::InvalidFen(fen.to_string()))?;
                if !(0..8).contains(&file) || !(0..8).contains(&rank) {
                    return Err(EngineError::InvalidFen(fen.to_string()));
                }
                let sq = defs::fr_to_sq(file as usize, rank as usize);
                pieces[sq] = piece;
                file += 1;
            }
        }
    }
    if file != 8 || rank != 0 {
        return Err(EngineError::InvalidFen(fen.to_string()));
    }

    let side = match side_to_move {
        "w" => Sides::WHITE,
        "b" => Sides::BLACK,
        _ => return Err(EngineError::InvalidFen(fen.to_string())),
    };

    let mut castle_perm = 0u8;
    if castling != "-" {
        for c in castling.chars() {
            castle_perm |= match c {
                'K' => Castling::WK,
                'Q' => Castling::WQ,
                'k' => Castling::BK,
                'q' => Castling::BQ,
                _ => return Err(EngineError::InvalidFen(fen.to_string())),
            };
        }
    }

    let ep_square = if en_passant == "-" {
        NO_SQ
    } else {
        parse_square(en_passant).ok_or_else(|| EngineError::InvalidFen(fen.to_string()))?
    };

    let fifty_move: u8 = halfmove
        .parse()
        .map_err(|_| EngineError::InvalidFen(fen.to_string()))?;
    let fullmove_number: usize = fullmove
        .parse()
        .map_err(|_| EngineError::InvalidFen(fen.to_string()))?;

    board.reset();
    for sq in 0..crate::defs::NrOf::SQUARES {
        let piece = pieces[sq];
        if piece != Pieces::NONE && piece != defs::OFFBOARD {
            board.add_piece(sq, piece);
        }
    }
    board.side = side;
    board.castle_perm = castle_perm;
    board.en_passant = ep_square;
    board.fifty_move = fifty_move;
    board.his_ply = fullmove_number.saturating_sub(1) * 2 + if side == Sides::BLACK { 1 } else { 0 };
    board.ply = 0;

    board.pos_key = board.zobrist.hash_position(board);
    Ok(())
}

fn char_to_piece(c: char) -> Option<usize> {
    defs::PIECE_CHARS
        .iter()
        .position(|&p| p as char == c)
        .filter(|&idx| idx != Pieces::NONE)
}

fn parse_square(token: &str) -> Option<usize> {
    let bytes = token.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let file = (bytes[0] as char).to_ascii_lowercase() as u8;
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }
    Some(defs::fr_to_sq((file - b'a') as usize, (rank - b'1') as usize))
}

fn square_to_str(square: usize) -> String {
    let file = defs::FILES_BOARD[square];
    let rank = defs::RANKS_BOARD[square];
    format!(
        "{}{}",
        defs::FILE_CHARS[file] as char,
        defs::RANK_CHARS[rank] as char
    )
}

pub fn format(board: &Board) -> String {
    let mut placement = String::new();
    for rank in (0..8).rev() {
        let mut empty_run = 0;
        for file in 0..8 {
            let sq = defs::fr_to_sq(file, rank);
            let piece = board.pieces[sq];
            if piece == Pieces::NONE {
                empty_run += 1;
            } else {
                if empty_run > 0 {
                    placement.push_str(&empty_run.to_string());
                    empty_run = 0;
                }
                placement.push(defs::PIECE_CHARS[piece] as char);
            }
        }
        if empty_run > 0 {
            placement.push_str(&empty_run.to_string());
        }
        if rank != 0 {
            placement.push('/');
        }
    }

    let side = if board.side == Sides::WHITE { "w" } else { "b" };

    let mut castling = String::new();
    if board.has_castle_permission(Castling::WK) {
        castling.push('K');
    }
    if board.has_castle_permission(Castling::WQ) {
        castling.push('Q');
    }
    if board.has_castle_permission(Castling::BK) {
        castling.push('k');
    }
    if board.has_castle_permission(Castling::BQ) {
        castling.push('q');
    }
    if castling.is_empty() {
        castling.push('-');
    }

    let en_passant = if board.en_passant == NO_SQ {
        "-".to_string()
    } else {
        square_to_str(board.en_passant)
    };

    let fullmove = board.his_ply / 2 + 1;

    format!(
        "{placement} {side} {castling} {en_passant} {} {fullmove}",
        board.fifty_move
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::zobrist::ZobristRandoms;
    use std::sync::Arc;

    fn new_board() -> Board {
        Board::new(Arc::new(ZobristRandoms::new()))
    }

    #[test]
    fn start_position_roundtrips() {
        let mut board = new_board();
        board.set_fen(crate::defs::FEN_START_POSITION).unwrap();
        assert_eq!(board.to_fen(), crate::defs::FEN_START_POSITION);
    }

    #[test]
    fn kiwipete_roundtrips() {
        let mut board = new_board();
        board.set_fen(crate::defs::FEN_KIWIPETE_POSITION).unwrap();
        assert_eq!(board.to_fen(), crate::defs::FEN_KIWIPETE_POSITION);
    }

    #[test]
    fn malformed_fen_is_rejected_and_board_is_untouched() {
        let mut board = new_board();
        board.set_fen(crate::defs::FEN_START_POSITION).unwrap();
        let before = board.to_fen();
        let result = board.set_fen("not a fen string");
        assert!(result.is_err());
        assert_eq!(board.to_fen(), before);
    }

    #[test]
    fn en_passant_square_is_parsed() {
        let mut board = new_board();
        board
            .set_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3")
            .unwrap();
        assert_eq!(board.en_passant, defs::fr_to_sq(3, 5));
    }
}
