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

//! Command-line parsing, built with `clap`'s builder API (not the derive
//! macro) so the option table reads the same way the UCI option table
//! does elsewhere in this crate.

use crate::defs::About;
use crate::engine::defs::EngineOptionDefaults;
use clap::{Arg, ArgAction, Command};

struct CmdLineArgs;
impl CmdLineArgs {
    const FEN: &'static str = "fen";
    const PERFT: &'static str = "perft";
    const HASH: &'static str = "hash";
    const QUIET: &'static str = "quiet";
}

pub struct CmdLine {
    fen: Option<String>,
    perft: Option<u8>,
    hash: usize,
    quiet: bool,
}

impl CmdLine {
    pub fn new() -> Self {
        Self::parse(std::env::args_os())
    }

    fn parse<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = Command::new(About::ENGINE)
            .version(About::VERSION)
            .author(About::AUTHOR)
            .about("A UCI-compatible chess engine core.")
            .arg(
                Arg::new(CmdLineArgs::FEN)
                    .long(CmdLineArgs::FEN)
                    .help("Start from this FEN instead of the normal starting position")
                    .num_args(1),
            )
            .arg(
                Arg::new(CmdLineArgs::PERFT)
                    .long(CmdLineArgs::PERFT)
                    .help("Run a perft node count to the given depth and exit")
                    .num_args(1),
            )
            .arg(
                Arg::new(CmdLineArgs::HASH)
                    .long(CmdLineArgs::HASH)
                    .help("Transposition table size in MB")
                    .num_args(1),
            )
            .arg(
                Arg::new(CmdLineArgs::QUIET)
                    .long(CmdLineArgs::QUIET)
                    .help("Suppress the startup banner")
                    .action(ArgAction::SetTrue),
            )
            .get_matches_from(args);

        let hash = matches
            .get_one::<String>(CmdLineArgs::HASH)
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(EngineOptionDefaults::HASH_DEFAULT);

        let perft = matches
            .get_one::<String>(CmdLineArgs::PERFT)
            .and_then(|s| s.parse::<u8>().ok());

        Self {
            fen: matches.get_one::<String>(CmdLineArgs::FEN).cloned(),
            perft,
            hash,
            quiet: matches.get_flag(CmdLineArgs::QUIET),
        }
    }

    pub fn fen(&self) -> Option<&str> {
        self.fen.as_deref()
    }

    pub fn perft(&self) -> Option<u8> {
        self.perft
    }

    pub fn hash(&self) -> usize {
        self.hash
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_with_no_arguments() {
        let cmd = CmdLine::parse(["scarab"]);
        assert_eq!(cmd.fen(), None);
        assert_eq!(cmd.perft(), None);
        assert_eq!(cmd.hash(), EngineOptionDefaults::HASH_DEFAULT);
        assert!(!cmd.quiet());
    }

    #[test]
    fn parses_fen_hash_and_quiet() {
        let cmd = CmdLine::parse([
            "scarab",
            "--fen",
            "8/8/8/8/8/8/8/K6k w - - 0 1",
            "--hash",
            "128",
            "--quiet",
        ]);
        assert_eq!(cmd.fen(), Some("8/8/8/8/8/8/8/K6k w - - 0 1"));
        assert_eq!(cmd.hash(), 128);
        assert!(cmd.quiet());
    }

    #[test]
    fn parses_perft_depth() {
        let cmd = CmdLine::parse(["scarab", "--perft", "5"]);
        assert_eq!(cmd.perft(), Some(5));
    }
}
