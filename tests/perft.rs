use scarab::board::zobrist::ZobristRandoms;
use scarab::board::Board;
use scarab::defs::{FEN_KIWIPETE_POSITION, FEN_START_POSITION};
use scarab::movegen::perft::perft;
use std::sync::Arc;

struct TestPosition {
    name: &'static str,
    fen: &'static str,
    depths: &'static [(u8, u64)],
}

const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Starting Position",
        fen: FEN_START_POSITION,
        depths: &[(1, 20), (2, 400), (3, 8_902), (4, 197_281)],
    },
    TestPosition {
        name: "Kiwipete",
        fen: FEN_KIWIPETE_POSITION,
        depths: &[(1, 48), (2, 2_039), (3, 97_862)],
    },
];

#[test]
fn known_positions_produce_known_node_counts() {
    for position in TEST_POSITIONS {
        let mut board = Board::new(Arc::new(ZobristRandoms::new()));
        board.set_fen(position.fen).unwrap();
        for &(depth, expected) in position.depths {
            let nodes = perft(&mut board, depth);
            assert_eq!(
                nodes, expected,
                "perft mismatch for {} at depth {depth}",
                position.name
            );
        }
    }
}
