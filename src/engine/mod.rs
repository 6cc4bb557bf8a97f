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

//! The engine's main loop: owns the board, transposition table and
//! settings, and drives them from lines of UCI input. A full multi-engine
//! would split this across a comm thread and a search thread joined by
//! channels; this one runs a single search on the calling thread, so the
//! loop below plays both roles itself.

pub mod about;
pub mod defs;
pub mod transposition;

use crate::board::zobrist::ZobristRandoms;
use crate::board::Board;
use crate::defs::FEN_START_POSITION;
use crate::evaluation::Classical;
use crate::movegen::parse_uci_move;
use defs::{CommControl, CommReport, EngineOptionName, ErrFatal, ErrNormal, Settings};
use std::io::BufRead;
use std::sync::Arc;
use transposition::TranspositionTable;

pub struct Engine {
    settings: Settings,
    board: Board,
    tt: TranspositionTable,
    evaluator: Classical,
    quit: bool,
}

impl Engine {
    pub fn new(settings: Settings) -> Self {
        let zobrist = Arc::new(ZobristRandoms::new());
        let tt = TranspositionTable::new(settings.hash_mb);
        Self {
            board: Board::new_game(zobrist),
            tt,
            evaluator: Classical,
            settings,
            quit: false,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Read UCI commands from standard input until `quit` or end of input.
    pub fn run(&mut self) {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = line.expect(ErrFatal::READ_IO);
            let report = crate::comm::uci::parse_line(&line);
            if self.handle_report(report) == CommControl::Quit {
                break;
            }
        }
    }

    /// Dispatch one parsed UCI report. Exposed for callers that drive the
    /// engine without going through [`Self::run`]'s stdin loop (tests, or
    /// an embedder feeding it commands directly).
    pub fn handle_report(&mut self, report: CommReport) -> CommControl {
        match report {
            CommReport::Uci => crate::comm::uci::print_id(),
            CommReport::IsReady => crate::comm::uci::print_readyok(),
            CommReport::UciNewGame => self.new_game(),
            CommReport::Position(args) => self.setup_position(&args),
            CommReport::Go(params) => self.go(&params),
            CommReport::SetOption(name, value) => self.set_option(name, &value),
            CommReport::Stop => (),
            CommReport::Quit => self.quit = true,
            CommReport::Unknown(_) => (),
        }

        if self.quit {
            CommControl::Quit
        } else {
            CommControl::Continue
        }
    }

    fn new_game(&mut self) {
        let zobrist = Arc::clone(&self.board.zobrist);
        self.board = Board::new_game(zobrist);
        self.tt.clear();
    }

    fn set_option(&mut self, name: EngineOptionName, value: &str) {
        match name {
            EngineOptionName::Hash => {
                if let Ok(mb) = value.parse::<usize>() {
                    self.settings.hash_mb = mb;
                    self.tt.resize(mb);
                } else {
                    println!("info string {}: {}", value, ErrNormal::INVALID_OPTION_VALUE);
                }
            }
            EngineOptionName::ClearHash => self.tt.clear(),
        }
    }

    /// Apply a `position` command's argument string: either `startpos` or
    /// `fen <six fields>`, optionally followed by `moves <uci> <uci> ...`.
    fn setup_position(&mut self, args: &str) {
        let (board_part, moves_part) = match args.find("moves") {
            Some(idx) => (args[..idx].trim(), Some(args[idx + "moves".len()..].trim())),
            None => (args.trim(), None),
        };

        let fen = if let Some(rest) = board_part.strip_prefix("fen") {
            rest.trim().to_string()
        } else {
            FEN_START_POSITION.to_string()
        };

        let zobrist = Arc::clone(&self.board.zobrist);
        let mut board = Board::new(zobrist);
        if board.set_fen(&fen).is_err() {
            #[cfg(feature = "logging")]
            log::warn!("malformed FEN rejected: {fen}");
            println!("info string {}", ErrNormal::FEN_FAILED);
            return;
        }

        if let Some(moves) = moves_part {
            for token in moves.split_whitespace() {
                match parse_uci_move(&mut board, token) {
                    Some(m) => {
                        crate::board::playmove::make_move(&mut board, m);
                    }
                    None => {
                        println!("info string {token}: {}", ErrNormal::NOT_LEGAL);
                        break;
                    }
                }
            }
        }

        self.board = board;
    }

    fn go(&mut self, params: &defs::GoParameters) {
        let result = crate::search::search_position(&mut self.board, &mut self.tt, &self.evaluator, params);
        crate::comm::uci::print_search_info(&result, &self.tt);
        crate::comm::uci::print_bestmove(result.best_move);
    }

    pub fn print_about(&self) {
        about::print_about(&self.settings);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startpos_with_moves_updates_the_board() {
        let mut engine = Engine::default();
        engine.setup_position("startpos moves e2e4 e7e5");
        assert_eq!(engine.board().side, crate::defs::Sides::WHITE);
        assert_eq!(engine.board().piece_count[crate::defs::Pieces::WP], 8);
    }

    #[test]
    fn fen_position_without_moves_is_applied_directly() {
        let mut engine = Engine::default();
        engine.setup_position("fen 8/8/8/8/8/8/8/K6k w - - 0 1");
        assert_eq!(engine.board().to_fen(), "8/8/8/8/8/8/8/K6k w - - 0 1");
    }

    #[test]
    fn hash_option_resizes_the_transposition_table() {
        let mut engine = Engine::default();
        engine.set_option(EngineOptionName::Hash, "1");
        assert_eq!(engine.settings().hash_mb, 1);
    }
}
