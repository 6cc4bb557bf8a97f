use scarab::defs::{FEN_START_POSITION, Sides};
use scarab::engine::defs::{CommControl, CommReport, EngineOptionName, GoParameters, Settings};
use scarab::engine::Engine;

#[test]
fn uci_handshake_round_trip() {
    assert!(matches!(scarab::comm::uci::parse_line("uci"), CommReport::Uci));
    assert!(matches!(scarab::comm::uci::parse_line("isready"), CommReport::IsReady));
}

#[test]
fn position_with_moves_updates_the_live_board() {
    let mut engine = Engine::new(Settings::default());
    let report = scarab::comm::uci::parse_line("position startpos moves e2e4 e7e5 g1f3");
    engine.handle_report(report);

    assert_ne!(engine.board().to_fen(), FEN_START_POSITION);
    assert_eq!(engine.board().side, Sides::BLACK);
}

#[test]
fn illegal_move_in_a_position_command_leaves_the_board_at_its_last_legal_state() {
    let mut engine = Engine::new(Settings::default());
    let report = scarab::comm::uci::parse_line("position startpos moves e2e4 e2e4");
    engine.handle_report(report);

    // e2e4 is only legal once; the second attempt is rejected and the
    // board stops at the position after the first move.
    assert_eq!(engine.board().side, Sides::BLACK);
}

#[test]
fn setoption_hash_is_parsed_with_its_value() {
    match scarab::comm::uci::parse_line("setoption name Hash value 4") {
        CommReport::SetOption(EngineOptionName::Hash, value) => assert_eq!(value, "4"),
        other => panic!("expected SetOption Hash, got {other:?}"),
    }
}

#[test]
fn go_with_a_shallow_depth_limit_completes_and_picks_a_move() {
    let mut engine = Engine::new(Settings::default());
    let params = GoParameters {
        depth: Some(2),
        ..Default::default()
    };
    let control = engine.handle_report(CommReport::Go(params));
    assert_eq!(control, CommControl::Continue);
}

#[test]
fn quit_stops_the_main_loop() {
    let mut engine = Engine::new(Settings::default());
    let control = engine.handle_report(CommReport::Quit);
    assert_eq!(control, CommControl::Quit);
}
