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

//! Translate a UCI `go` command's time controls into a single millisecond
//! budget for this move. No pondering, no sudden-death edge-case tuning
//! beyond the simple "remaining time / moves left" fraction.

use crate::engine::defs::GoParameters;
use crate::defs::Side;
use crate::defs::Sides;

/// Assume this many moves remain when the opponent hasn't told us via
/// `movestogo` (a typical UCI GUI omits it outside of classical time
/// controls).
const DEFAULT_MOVES_TO_GO: u32 = 30;

/// Keep this many milliseconds in reserve so a move is never returned
/// right as the clock reaches zero.
const MOVE_OVERHEAD_MS: u64 = 50;

pub fn allocate_ms(params: &GoParameters, side: Side) -> Option<u64> {
    if params.infinite {
        return None;
    }
    if let Some(movetime) = params.movetime_ms {
        return Some(movetime.saturating_sub(MOVE_OVERHEAD_MS.min(movetime)));
    }

    let (time_left, increment) = if side == Sides::WHITE {
        (params.wtime_ms, params.winc_ms.unwrap_or(0))
    } else {
        (params.btime_ms, params.binc_ms.unwrap_or(0))
    };

    let time_left = time_left?;
    let moves_to_go = params.movestogo.unwrap_or(DEFAULT_MOVES_TO_GO).max(1) as u64;

    let budget = time_left / moves_to_go + increment;
    Some(budget.saturating_sub(MOVE_OVERHEAD_MS.min(budget)).max(1))
}
