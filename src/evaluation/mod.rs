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

//! Static position evaluation. [`Evaluator`] is the seam search calls
//! through; [`Classical`] is the only backend this crate ships. A learned
//! (HalfKP/NNUE-style) backend is out of scope here but slots in behind the
//! same trait without search needing to change.

pub mod psqt;

use crate::board::defs::{piece_color, MIRROR64};
use crate::board::Board;
use crate::defs::{Pieces, Sides};

/// Non-pawn material (one side) below which that side's king switches from
/// [`psqt::KING_MIDDLE`] to [`psqt::KING_END`]: a rook and two minor pieces.
pub const ENDGAME_MATERIAL: i32 = 550 + 2 * 325;

/// A pluggable static evaluation function. Search only ever goes through
/// this trait, never `Classical` directly, so a future backend (NNUE or
/// otherwise) can be swapped in without touching `search`.
pub trait Evaluator {
    /// Score the position from White's point of view, in centipawns.
    /// Search negates this for the side not to move.
    fn evaluate(&self, board: &Board) -> i32;
}

/// Material plus piece-square tables, mirroring the evaluator this engine
/// was modeled on: no pawn structure, no mobility, no king safety beyond
/// the PST split between `KING_MIDDLE`/`KING_END`.
#[derive(Default)]
pub struct Classical;

impl Evaluator for Classical {
    fn evaluate(&self, board: &Board) -> i32 {
        if board.material_draw() {
            return 0;
        }

        let mut score = board.material[Sides::WHITE] - board.material[Sides::BLACK];

        for piece in Pieces::WP..=Pieces::BK {
            if piece == Pieces::WK || piece == Pieces::BK {
                continue;
            }
            for &square in board.piece_squares(piece) {
                score += piece_square_bonus(piece, square);
            }
        }

        score += king_bonus(board, Sides::WHITE) - king_bonus(board, Sides::BLACK);

        if board.side == Sides::WHITE {
            score
        } else {
            -score
        }
    }
}

/// Placeholder for a learned (NNUE/HalfKP-style) evaluator. The sparse
/// feature accumulator and trained weights are out of scope for this
/// crate; this backend exists to prove the `Evaluator` seam accepts a
/// second implementation without search caring which one it got.
#[derive(Default)]
pub struct HalfKp;

impl Evaluator for HalfKp {
    fn evaluate(&self, board: &Board) -> i32 {
        #[cfg(feature = "logging")]
        log::debug!("HalfKp::evaluate running in stub mode, falling back to Classical");
        Classical.evaluate(board)
    }
}

fn piece_square_bonus(piece: usize, square: usize) -> i32 {
    let sq64 = crate::board::defs::sq64(square);
    let side = piece_color(piece);
    let index = if side == Sides::WHITE { sq64 } else { MIRROR64[sq64] };
    let sign = if side == Sides::WHITE { 1 } else { -1 };

    sign * match piece {
        Pieces::WP | Pieces::BP => psqt::PAWN[index],
        Pieces::WN | Pieces::BN => psqt::KNIGHT[index],
        Pieces::WB | Pieces::BB => psqt::BISHOP[index],
        Pieces::WR | Pieces::BR => psqt::ROOK[index],
        // The queen carries no positional bonus, material value only.
        Pieces::WQ | Pieces::BQ => 0,
        _ => 0,
    }
}

fn king_bonus(board: &Board, side: usize) -> i32 {
    let king = if side == Sides::WHITE { Pieces::WK } else { Pieces::BK };
    let square = board.piece_squares(king)[0];
    let sq64 = crate::board::defs::sq64(square);
    let index = if side == Sides::WHITE { sq64 } else { MIRROR64[sq64] };

    if board.endgame_material(side) <= ENDGAME_MATERIAL {
        psqt::KING_END[index]
    } else {
        psqt::KING_MIDDLE[index]
    }
}
