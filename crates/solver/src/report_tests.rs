use super::*;
use chess_core::{MATE_SCORE, Move, Outcome, SearchResult};

fn sample_result() -> SearchResult {
    SearchResult {
        best_move: Some(Move::new(4, 60)), // e1e8
        score: MATE_SCORE - 1,
        depth: 2,
        nodes: 1234,
        stopped: false,
        outcome: Outcome::Ongoing,
    }
}

#[test]
fn test_move_line_prints_coordinates() {
    let report = SolveReport::from_result(&sample_result());
    assert_eq!(report.move_line(), "e1e8");
}

#[test]
fn test_terminal_result_prints_sentinel() {
    let report = SolveReport::from_result(&SearchResult::terminal(Outcome::Stalemate, 0));
    assert_eq!(report.move_line(), crate::NO_MOVE_SENTINEL);
    assert_eq!(report.outcome, "stalemate");
}

#[test]
fn test_mate_score_is_decoded() {
    let report = SolveReport::from_result(&sample_result());
    assert_eq!(report.mate_in, Some(1));
    assert!(report.info_line().contains("score mate 1"));
}

#[test]
fn test_centipawn_score_is_plain() {
    let mut result = sample_result();
    result.score = 42;
    let report = SolveReport::from_result(&result);
    assert_eq!(report.mate_in, None);
    assert!(report.info_line().contains("score cp 42"));
}

#[test]
fn test_budget_limited_marker() {
    let mut result = sample_result();
    result.stopped = true;
    let report = SolveReport::from_result(&result);
    assert!(report.info_line().contains("budget-limited"));
}

#[test]
fn test_json_shape() {
    let report = SolveReport::from_result(&sample_result());
    let json = report.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["best_move"], "e1e8");
    assert_eq!(value["mate_in"], 1);
    assert_eq!(value["nodes"], 1234);
    assert_eq!(value["outcome"], "ongoing");
}
