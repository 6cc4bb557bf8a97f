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

//! Library interface for the Scarab chess engine core: board
//! representation, move generation, evaluation, transposition table and
//! alpha-beta search, plus the UCI plumbing that drives them.

pub mod board;
pub mod comm;
pub mod defs;
pub mod engine;
pub mod evaluation;
pub mod misc;
pub mod movegen;
pub mod search;

pub use board::Board;
pub use defs::FEN_START_POSITION;
pub use engine::Engine;
