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

//! Turns one line of standard input into a [`CommReport`], and formats the
//! engine's output (`id`, `option`, `bestmove`, `info`) back to UCI text.

use crate::defs::{About, MATE_THRESHOLD};
use crate::engine::defs::{engine_options, CommReport, EngineOptionName, GoParameters, UiElement};
use crate::engine::transposition::TranspositionTable;
use crate::search::SearchResult;

pub fn parse_line(line: &str) -> CommReport {
    let line = line.trim();
    let mut tokens = line.split_whitespace();

    match tokens.next() {
        Some("uci") => CommReport::Uci,
        Some("isready") => CommReport::IsReady,
        Some("ucinewgame") => CommReport::UciNewGame,
        Some("stop") => CommReport::Stop,
        Some("quit") => CommReport::Quit,
        Some("position") => CommReport::Position(tokens.collect::<Vec<_>>().join(" ")),
        Some("go") => CommReport::Go(parse_go(tokens)),
        Some("setoption") => parse_setoption(tokens),
        Some("") | None => CommReport::Unknown(String::new()),
        Some(_) => CommReport::Unknown(line.to_string()),
    }
}

fn parse_go<'a>(tokens: impl Iterator<Item = &'a str>) -> GoParameters {
    let mut params = GoParameters::default();
    let mut tokens = tokens.peekable();

    while let Some(token) = tokens.next() {
        match token {
            "infinite" => params.infinite = true,
            "depth" => params.depth = next_parsed(&mut tokens),
            "movetime" => params.movetime_ms = next_parsed(&mut tokens),
            "wtime" => params.wtime_ms = next_parsed(&mut tokens),
            "btime" => params.btime_ms = next_parsed(&mut tokens),
            "winc" => params.winc_ms = next_parsed(&mut tokens),
            "binc" => params.binc_ms = next_parsed(&mut tokens),
            "movestogo" => params.movestogo = next_parsed(&mut tokens),
            // "ponder" and "searchmoves" are accepted but not acted on:
            // this engine never ponders and always searches every legal move.
            _ => (),
        }
    }

    params
}

fn next_parsed<'a, T: std::str::FromStr>(tokens: &mut std::iter::Peekable<impl Iterator<Item = &'a str>>) -> Option<T> {
    tokens.next().and_then(|s| s.parse().ok())
}

fn parse_setoption<'a>(mut tokens: impl Iterator<Item = &'a str>) -> CommReport {
    // "setoption name <id> [value <x>]"; <id> may itself contain spaces
    // ("Clear Hash"), so collect everything between "name" and "value".
    if tokens.next() != Some("name") {
        return CommReport::Unknown("setoption".to_string());
    }

    let mut name_parts = Vec::new();
    let mut value_parts = Vec::new();
    let mut in_value = false;

    for token in tokens {
        if token == "value" {
            in_value = true;
            continue;
        }
        if in_value {
            value_parts.push(token);
        } else {
            name_parts.push(token);
        }
    }

    let name = name_parts.join(" ");
    let value = value_parts.join(" ");

    match name.as_str() {
        "Hash" => CommReport::SetOption(EngineOptionName::Hash, value),
        "Clear Hash" => CommReport::SetOption(EngineOptionName::ClearHash, value),
        _ => CommReport::Unknown(format!("setoption name {name}")),
    }
}

pub fn print_id() {
    println!("id name {} {}", About::ENGINE, About::VERSION);
    println!("id author {}", About::AUTHOR);
    for option in engine_options() {
        println!("{}", format_option(&option));
    }
    println!("uciok");
}

fn format_option(option: &crate::engine::defs::EngineOption) -> String {
    match option.ui_element {
        UiElement::Spin => format!(
            "option name {} type spin default {} min {} max {}",
            option.name,
            option.default,
            option.min.unwrap_or(0),
            option.max.unwrap_or(0)
        ),
        UiElement::Button => format!("option name {} type button", option.name),
    }
}

pub fn print_readyok() {
    println!("readyok");
}

pub fn print_bestmove(m: Option<crate::defs::Move>) {
    match m {
        Some(m) => println!("bestmove {}", crate::search::format_move(m)),
        None => println!("bestmove 0000"),
    }
}

pub fn print_search_info(result: &SearchResult, tt: &TranspositionTable) {
    let score_part = if result.score.abs() > MATE_THRESHOLD {
        let plies_to_mate = crate::defs::MATE - result.score.abs();
        let moves_to_mate = (plies_to_mate + 1) / 2;
        let signed = if result.score > 0 { moves_to_mate } else { -moves_to_mate };
        format!("mate {signed}")
    } else {
        format!("cp {}", result.score)
    };

    let pv: Vec<String> = result.pv.iter().map(|&m| crate::search::format_move(m)).collect();

    println!(
        "info depth {} score {} nodes {} nps {} time {} hashfull {} pv {}",
        result.depth,
        score_part,
        result.nodes,
        nps(result.nodes, result.time_ms),
        result.time_ms,
        tt.fill_permille(),
        pv.join(" "),
    );
}

fn nps(nodes: u64, time_ms: u64) -> u64 {
    if time_ms == 0 {
        nodes * 1000
    } else {
        nodes * 1000 / time_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_uci_and_isready() {
        assert!(matches!(parse_line("uci"), CommReport::Uci));
        assert!(matches!(parse_line("isready"), CommReport::IsReady));
    }

    #[test]
    fn parses_position_with_moves() {
        let report = parse_line("position startpos moves e2e4 e7e5");
        match report {
            CommReport::Position(s) => assert_eq!(s, "startpos moves e2e4 e7e5"),
            _ => panic!("expected Position"),
        }
    }

    #[test]
    fn parses_go_with_time_controls() {
        let report = parse_line("go wtime 300000 btime 300000 winc 2000 binc 2000 movestogo 30");
        match report {
            CommReport::Go(params) => {
                assert_eq!(params.wtime_ms, Some(300_000));
                assert_eq!(params.movestogo, Some(30));
            }
            _ => panic!("expected Go"),
        }
    }

    #[test]
    fn parses_go_infinite() {
        let report = parse_line("go infinite");
        match report {
            CommReport::Go(params) => assert!(params.infinite),
            _ => panic!("expected Go"),
        }
    }

    #[test]
    fn parses_setoption_hash() {
        let report = parse_line("setoption name Hash value 128");
        match report {
            CommReport::SetOption(EngineOptionName::Hash, value) => assert_eq!(value, "128"),
            _ => panic!("expected SetOption Hash"),
        }
    }

    #[test]
    fn parses_setoption_clear_hash_with_multi_word_name() {
        let report = parse_line("setoption name Clear Hash");
        assert!(matches!(report, CommReport::SetOption(EngineOptionName::ClearHash, _)));
    }

    #[test]
    fn unknown_command_is_preserved_for_diagnostics() {
        let report = parse_line("frobnicate");
        match report {
            CommReport::Unknown(s) => assert_eq!(s, "frobnicate"),
            _ => panic!("expected Unknown"),
        }
    }
}
