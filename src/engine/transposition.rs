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

//! Single, process-wide transposition table. Depth-preferred replacement:
//! a probe that collides with an occupied slot only overwrites it if the
//! new entry searched at least as deep. No SMP, so no lockless-xor entry
//! packing is needed.

use crate::defs::{Move, MATE_THRESHOLD};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HashFlag {
    Exact,
    Alpha,
    Beta,
}

#[derive(Clone, Copy)]
struct Entry {
    key: u64,
    best_move: Move,
    score: i32,
    depth: u8,
    flag: HashFlag,
}

impl Default for Entry {
    fn default() -> Self {
        Self {
            key: 0,
            best_move: 0,
            score: 0,
            depth: 0,
            flag: HashFlag::Alpha,
        }
    }
}

pub struct TranspositionTable {
    entries: Vec<Entry>,
    mask: usize,
    pub hits: u64,
    pub probes: u64,
    pub stores: u64,
    pub overwrites: u64,
}

const ENTRY_SIZE: usize = std::mem::size_of::<Entry>();

impl TranspositionTable {
    pub fn new(size_mb: usize) -> Self {
        let requested_entries = (size_mb.max(1) * 1024 * 1024) / ENTRY_SIZE;
        let capacity = previous_power_of_two(requested_entries.max(1));
        #[cfg(feature = "logging")]
        log::info!("transposition table sized to {size_mb} MB ({capacity} entries)");
        Self {
            entries: vec![Entry::default(); capacity],
            mask: capacity - 1,
            hits: 0,
            probes: 0,
            stores: 0,
            overwrites: 0,
        }
    }

    pub fn resize(&mut self, size_mb: usize) {
        *self = Self::new(size_mb);
    }

    pub fn clear(&mut self) {
        #[cfg(feature = "logging")]
        log::debug!("transposition table cleared");
        for entry in self.entries.iter_mut() {
            *entry = Entry::default();
        }
        self.hits = 0;
        self.probes = 0;
        self.stores = 0;
        self.overwrites = 0;
    }

    fn index(&self, key: u64) -> usize {
        (key as usize) & self.mask
    }

    pub fn store(&mut self, key: u64, best_move: Move, score: i32, depth: u8, flag: HashFlag, ply: usize) {
        let index = self.index(key);
        let slot = &mut self.entries[index];

        if slot.key != 0 {
            self.overwrites += 1;
            if slot.depth > depth && slot.key == key {
                return;
            }
        }

        self.stores += 1;
        *slot = Entry {
            key,
            best_move,
            score: score_to_tt(score, ply),
            depth,
            flag,
        };
    }

    /// Returns `(score, best_move, flag)` when `key` is present at a depth
    /// at least `depth`. The caller still needs `best_move` on a shallower
    /// hit for move ordering, so a depth-too-shallow entry returns `None`
    /// for the score but the move is recovered via [`Self::best_move`].
    pub fn probe(&mut self, key: u64, depth: u8, alpha: i32, beta: i32, ply: usize) -> Option<i32> {
        self.probes += 1;
        let index = self.index(key);
        let entry = self.entries[index];
        if entry.key != key || entry.depth < depth {
            return None;
        }

        self.hits += 1;
        let score = score_from_tt(entry.score, ply);
        match entry.flag {
            HashFlag::Exact => Some(score),
            HashFlag::Alpha if score <= alpha => Some(alpha),
            HashFlag::Beta if score >= beta => Some(beta),
            _ => None,
        }
    }

    pub fn best_move(&self, key: u64) -> Move {
        let index = self.index(key);
        let entry = self.entries[index];
        if entry.key == key {
            entry.best_move
        } else {
            0
        }
    }

    pub fn fill_permille(&self) -> usize {
        let occupied = self.entries.iter().filter(|e| e.key != 0).count();
        occupied * 1000 / self.entries.len()
    }
}

fn previous_power_of_two(n: usize) -> usize {
    if n.is_power_of_two() {
        n
    } else {
        (n + 1).next_power_of_two() / 2
    }
}

/// Mate scores are stored relative to the root, but read back relative to
/// the probing node's own ply -- otherwise a mate found deep in one branch
/// would look like a mate at a different distance when reused from a
/// shallower node.
fn score_to_tt(score: i32, ply: usize) -> i32 {
    if score > MATE_THRESHOLD {
        score + ply as i32
    } else if score < -MATE_THRESHOLD {
        score - ply as i32
    } else {
        score
    }
}

fn score_from_tt(score: i32, ply: usize) -> i32 {
    if score > MATE_THRESHOLD {
        score - ply as i32
    } else if score < -MATE_THRESHOLD {
        score + ply as i32
    } else {
        score
    }
}
