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

//! Search-wide constants and the mutable state one search instance
//! threads through every node: node count, the clock, and the abort flag.
//! There is exactly one of these per search since this engine never runs
//! more than one search thread at a time.

use crate::defs::Move;
use std::time::Instant;

/// Depth reduction applied by null-move pruning (`R`). Matches the
/// reference engine's fixed reduction rather than a depth-scaled one.
pub const NULL_MOVE_REDUCTION: u8 = 6;

/// Minimum remaining depth before null-move pruning is attempted; below
/// this the reduced search would be meaningless (zero or negative depth).
pub const NULL_MOVE_MIN_DEPTH: u8 = 6;

/// Depth (in full plies, before LMR) above which a late, quiet move gets
/// searched at reduced depth first.
pub const LMR_MIN_DEPTH: u8 = 3;

/// Move index (0-based, after the first `LMR_FULL_SEARCH_MOVES` moves)
/// after which late-move reduction kicks in for quiet moves.
pub const LMR_FULL_SEARCH_MOVES: usize = 4;

pub const LMR_REDUCTION: u8 = 1;

/// How many killer slots each ply keeps. Two matches the reference
/// engine and is enough to catch the common "refutation of the last two
/// tried quiets" pattern without crowding out history scores.
pub const MAX_KILLER_MOVES: usize = 2;

/// Node-count mask used to poll the clock/stop flag without checking on
/// every single node (a fast counter compare, not a syscall).
pub const CHECK_TERMINATION_NODES: u64 = 0x7FF;

pub struct SearchInfo {
    pub start_time: Instant,
    pub time_limit_ms: Option<u64>,
    pub depth_limit: Option<u8>,
    pub nodes: u64,
    pub stopped: bool,
    pub fail_high: u64,
    pub fail_high_first: u64,
    pub best_line: Vec<Move>,
}

impl SearchInfo {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            time_limit_ms: None,
            depth_limit: None,
            nodes: 0,
            stopped: false,
            fail_high: 0,
            fail_high_first: 0,
            best_line: Vec::new(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start_time.elapsed().as_millis() as u64
    }

    pub fn check_time(&mut self) {
        if let Some(limit) = self.time_limit_ms {
            if self.elapsed_ms() >= limit {
                self.stopped = true;
            }
        }
    }

    /// Move-ordering quality metric: fraction of beta cutoffs that
    /// happened on the very first move tried. Close to 1.0 means move
    /// ordering is doing its job.
    pub fn ordering(&self) -> f64 {
        if self.fail_high == 0 {
            1.0
        } else {
            self.fail_high_first as f64 / self.fail_high as f64
        }
    }
}

impl Default for SearchInfo {
    fn default() -> Self {
        Self::new()
    }
}
