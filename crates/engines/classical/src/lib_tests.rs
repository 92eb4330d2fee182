use super::*;
use chess_core::{Engine, Position, SearchError, SearchLimits, legal_moves};

#[test]
fn test_returns_legal_move_from_startpos() {
    let mut engine = ClassicalEngine::new();
    let pos = Position::startpos();
    let result = engine.search(&pos, SearchLimits::depth(2)).unwrap();

    let mv = result.best_move.expect("startpos is never terminal");
    assert!(legal_moves(&pos).contains(&mv));
    assert_eq!(result.outcome, Outcome::Ongoing);
    assert!(!result.stopped);
    assert!(result.nodes > 0);
}

#[test]
fn test_checkmate_at_root_reports_no_move() {
    let pos =
        Position::from_fen("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4")
            .unwrap();
    let mut engine = ClassicalEngine::new();
    let result = engine.search(&pos, SearchLimits::depth(3)).unwrap();

    assert!(result.best_move.is_none());
    assert_eq!(result.outcome, Outcome::Checkmate);
    assert!(result.score <= -chess_core::MATE_THRESHOLD);
}

#[test]
fn test_stalemate_at_root_reports_no_move() {
    let pos = Position::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    let mut engine = ClassicalEngine::new();
    let result = engine.search(&pos, SearchLimits::depth(3)).unwrap();

    assert!(result.best_move.is_none());
    assert_eq!(result.outcome, Outcome::Stalemate);
    assert_eq!(result.score, 0);
}

#[test]
fn test_rule_draw_at_root_reports_no_move() {
    let pos = Position::from_fen("8/8/8/4k3/8/4K3/8/8 w - - 100 60").unwrap();
    let mut engine = ClassicalEngine::new();
    let result = engine.search(&pos, SearchLimits::depth(3)).unwrap();

    assert!(result.best_move.is_none());
    assert_eq!(result.outcome, Outcome::Draw);
}

#[test]
fn test_missing_king_is_the_only_search_error() {
    let pos = Position::from_fen("8/8/8/8/8/8/8/4K3 b - - 0 1").unwrap();
    let mut engine = ClassicalEngine::new();
    let err = engine.search(&pos, SearchLimits::depth(2)).unwrap_err();
    assert!(matches!(err, SearchError::MissingKing));
}

#[test]
fn test_mate_score_decodes_to_moves() {
    let pos = Position::from_fen("4r1k1/5ppp/8/8/8/8/5PPP/4R1K1 w - - 0 1").unwrap();
    let mut engine = ClassicalEngine::new();
    let result = engine.search(&pos, SearchLimits::depth(3)).unwrap();
    assert_eq!(result.mate_in(), Some(1));

    let pos = Position::from_fen(
        "r2qkb1r/pp2nppp/3p4/2pNN1B1/2BnP3/3P4/PPP2PPP/R2bK2R w KQkq - 1 0",
    )
    .unwrap();
    let result = engine.search(&pos, SearchLimits::depth(4)).unwrap();
    assert_eq!(result.mate_in(), Some(2));
}

#[test]
fn test_search_twice_is_identical() {
    let pos =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R b KQkq - 0 1")
            .unwrap();
    let mut engine = ClassicalEngine::new();
    let a = engine.search(&pos, SearchLimits::depth(3)).unwrap();
    let b = engine.search(&pos, SearchLimits::depth(3)).unwrap();
    assert_eq!(a.best_move, b.best_move);
    assert_eq!(a.score, b.score);
    assert_eq!(a.nodes, b.nodes);
}
