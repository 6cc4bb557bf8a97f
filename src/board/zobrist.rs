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

//! Zobrist random numbers, shared read-only between search threads via
//! `Arc`. Positions are hashed incrementally as moves are made/unmade;
//! [`ZobristRandoms::hash_position`] exists only to build the initial key
//! and to cross-check the incremental key in debug builds.

use crate::board::Board;
use crate::defs::{NrOf, Pieces};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Fixed seed: positions must hash identically across runs so that saved
/// transposition-table entries (and perft logs) are reproducible.
const ZOBRIST_SEED: u64 = 0xE41_5CAB;

pub struct ZobristRandoms {
    piece_keys: [[u64; NrOf::SQUARES]; NrOf::PIECE_TYPES],
    side_key: u64,
    castle_keys: [u64; NrOf::CASTLING_PERMISSIONS],
    en_passant_keys: [u64; NrOf::SQUARES],
}

impl ZobristRandoms {
    pub fn new() -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(ZOBRIST_SEED);

        let mut piece_keys = [[0u64; NrOf::SQUARES]; NrOf::PIECE_TYPES];
        for piece in 0..NrOf::PIECE_TYPES {
            for square in 0..NrOf::SQUARES {
                piece_keys[piece][square] = rng.next_u64();
            }
        }

        let mut en_passant_keys = [0u64; NrOf::SQUARES];
        for key in en_passant_keys.iter_mut() {
            *key = rng.next_u64();
        }

        let mut castle_keys = [0u64; NrOf::CASTLING_PERMISSIONS];
        for key in castle_keys.iter_mut() {
            *key = rng.next_u64();
        }

        Self {
            piece_keys,
            side_key: rng.next_u64(),
            castle_keys,
            en_passant_keys,
        }
    }

    pub fn piece(&self, piece: usize, square: usize) -> u64 {
        self.piece_keys[piece][square]
    }

    pub fn side(&self) -> u64 {
        self.side_key
    }

    pub fn castling(&self, castle_perm: u8) -> u64 {
        self.castle_keys[castle_perm as usize]
    }

    pub fn en_passant(&self, square: usize) -> u64 {
        self.en_passant_keys[square]
    }

    /// Hash a board from scratch. Used only at construction and in debug
    /// assertions; the hot path updates `Board::pos_key` incrementally.
    pub fn hash_position(&self, board: &Board) -> u64 {
        let mut key = 0u64;

        for square in 0..NrOf::SQUARES {
            let piece = board.pieces[square];
            if piece != Pieces::NONE && piece < NrOf::PIECE_TYPES {
                key ^= self.piece(piece, square);
            }
        }

        if board.side == crate::defs::Sides::WHITE {
            key ^= self.side();
        }

        if board.en_passant != crate::board::defs::NO_SQ {
            key ^= self.en_passant(board.en_passant);
        }

        key ^= self.castling(board.castle_perm);
        key
    }
}

impl Default for ZobristRandoms {
    fn default() -> Self {
        Self::new()
    }
}
