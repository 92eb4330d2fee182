use super::*;
use chess_core::{Position, SearchLimits, move_to_coord};

fn best_at_depth(fen: &str, depth: u8) -> (String, i32) {
    let pos = Position::from_fen(fen).unwrap();
    let limits = SearchLimits::depth(depth);
    limits.start();
    let mut nodes = 0;
    let found = iterative_search(&pos, &limits, &mut nodes);
    assert!(nodes > 0);
    (move_to_coord(found.best_move), found.score)
}

#[test]
fn test_finds_back_rank_mate_in_one() {
    let (mv, score) = best_at_depth("4r1k1/5ppp/8/8/8/8/5PPP/4R1K1 w - - 0 1", 2);
    assert_eq!(mv, "e1e8");
    assert_eq!(score, MATE_SCORE - 1);
}

#[test]
fn test_finds_long_diagonal_mate_in_one_as_black() {
    let (mv, score) = best_at_depth("r7/p4p2/bp3q2/2Bk2r1/8/P6Q/4NP1P/5K2 b - - 0 1", 2);
    assert_eq!(mv, "f6a1");
    assert_eq!(score, MATE_SCORE - 1);
}

#[test]
fn test_finds_rook_lift_mate_in_one() {
    let (mv, score) = best_at_depth("5k2/5p2/5P1p/p5p1/2PR4/7P/2r2qP1/6RK w - - 0 1", 2);
    assert_eq!(mv, "d4d8");
    assert_eq!(score, MATE_SCORE - 1);
}

#[test]
fn test_finds_forced_mate_in_two() {
    // 1.Nf6+! gxf6 2.Bxf7# is the only forcing line
    let (mv, score) = best_at_depth(
        "r2qkb1r/pp2nppp/3p4/2pNN1B1/2BnP3/3P4/PPP2PPP/R2bK2R w KQkq - 1 0",
        4,
    );
    assert_eq!(mv, "d5f6");
    assert_eq!(score, MATE_SCORE - 3);
}

#[test]
fn test_prefers_fastest_mate() {
    // Several queen moves eventually mate; only e1e8 mates immediately.
    // Ply-adjusted scoring must pick it even when deeper mates also exist.
    let (mv, score) = best_at_depth("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1", 5);
    assert_eq!(mv, "e1e8");
    assert_eq!(score, MATE_SCORE - 1);
}

#[test]
fn test_deterministic_across_runs() {
    let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    let first = best_at_depth(fen, 3);
    let second = best_at_depth(fen, 3);
    assert_eq!(first, second);
}

#[test]
fn test_captures_hanging_queen() {
    // Black queen hangs on c5; any 1-ply search should take it
    let (mv, _) = best_at_depth("4k3/8/8/2q5/4N2P/8/8/4K3 w - - 0 1", 1);
    assert_eq!(mv, "e4c5");

    // Deeper search should agree
    let (mv, _) = best_at_depth("4k3/8/8/2q5/4N2P/8/8/4K3 w - - 0 1", 3);
    assert_eq!(mv, "e4c5");
}

#[test]
fn test_expired_clock_still_returns_a_root_move() {
    let pos = Position::startpos();
    let limits = SearchLimits::depth_and_time(10, std::time::Duration::ZERO);
    limits.start();
    let mut nodes = 0;
    let found = iterative_search(&pos, &limits, &mut nodes);
    // No iteration can complete, but the contract is best-effort, not error
    assert!(found.stopped);
    assert_eq!(found.depth, 0);
    let legal = chess_core::legal_moves(&pos);
    assert!(legal.contains(&found.best_move));
}
