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

use scarab::board::zobrist::ZobristRandoms;
use scarab::board::Board;
use scarab::engine::about::print_about;
use scarab::engine::defs::Settings;
use scarab::engine::Engine;
use scarab::misc::cmdline::CmdLine;
use scarab::movegen::perft::perft;
use std::sync::Arc;

fn main() {
    let cmdline = CmdLine::new();

    let settings = Settings {
        hash_mb: cmdline.hash(),
        quiet: cmdline.quiet(),
    };

    if !settings.quiet {
        print_about(&settings);
    }

    if let Some(depth) = cmdline.perft() {
        run_perft(cmdline.fen(), depth);
        return;
    }

    let mut engine = Engine::new(settings);
    if let Some(fen) = cmdline.fen() {
        if engine.board_mut().set_fen(fen).is_err() {
            eprintln!("info string invalid FEN on the command line, starting position kept");
        }
    }
    engine.run();
}

fn run_perft(fen: Option<&str>, depth: u8) {
    let zobrist = Arc::new(ZobristRandoms::new());
    let mut board = match fen {
        Some(fen) => {
            let mut board = Board::new(zobrist);
            if board.set_fen(fen).is_err() {
                eprintln!("info string invalid FEN, aborting perft");
                return;
            }
            board
        }
        None => Board::new_game(zobrist),
    };

    let start = std::time::Instant::now();
    let nodes = perft(&mut board, depth);
    let elapsed = start.elapsed();
    println!(
        "perft {depth}: {nodes} nodes in {:.3}s ({:.0} nps)",
        elapsed.as_secs_f64(),
        nodes as f64 / elapsed.as_secs_f64().max(1e-9)
    );
}
