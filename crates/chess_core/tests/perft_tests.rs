//! Move generation soundness/completeness checked against published perft
//! figures for the standard benchmark positions.

use rayon::prelude::*;

use chess_core::{Position, perft};

const CASES: &[(&str, &str, &[(u8, u64)])] = &[
    (
        "Starting position",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        &[(1, 20), (2, 400), (3, 8_902), (4, 197_281)],
    ),
    (
        "Kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        &[(1, 48), (2, 2_039), (3, 97_862)],
    ),
    (
        "Position 3 (rook + pawn endgame, en passant)",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        &[(1, 14), (2, 191), (3, 2_812), (4, 43_238)],
    ),
    (
        "Position 4 (promotions and checks)",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        &[(1, 6), (2, 264), (3, 9_467)],
    ),
    (
        "Position 5 (castling rights edge cases)",
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        &[(1, 44), (2, 1_486), (3, 62_379)],
    ),
    (
        "Position 6 (symmetric middlegame)",
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
        &[(1, 46), (2, 2_079), (3, 89_890)],
    ),
];

#[test]
fn perft_matches_published_figures() {
    CASES.par_iter().for_each(|(name, fen, depths)| {
        for &(depth, expected) in depths.iter() {
            let mut pos = Position::from_fen(fen).unwrap();
            let got = perft(&mut pos, depth);
            assert_eq!(
                got, expected,
                "Perft mismatch for '{name}' at depth {depth}: expected {expected}, got {got}"
            );
        }
    });
}

#[test]
fn perft_depth_zero_is_one() {
    let mut pos = Position::startpos();
    assert_eq!(perft(&mut pos, 0), 1);
}
