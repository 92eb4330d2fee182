use serde::Serialize;

use chess_core::{SearchResult, move_to_coord};

use crate::NO_MOVE_SENTINEL;

/// Flattened, serializable view of a search result for the process boundary.
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    /// Chosen move in coordinate notation, or None at a terminal root
    pub best_move: Option<String>,
    /// Score in centipawns from the side to move's perspective
    pub score: i32,
    /// Signed moves-to-mate when the score is decisive
    pub mate_in: Option<i32>,
    /// Deepest completed search depth
    pub depth: u8,
    /// Nodes searched
    pub nodes: u64,
    /// True when the time budget cut the search short
    pub stopped: bool,
    /// Root classification: ongoing, checkmate, stalemate, or draw
    pub outcome: String,
}

impl SolveReport {
    pub fn from_result(result: &SearchResult) -> Self {
        SolveReport {
            best_move: result.best_move.map(move_to_coord),
            score: result.score,
            mate_in: result.mate_in(),
            depth: result.depth,
            nodes: result.nodes,
            stopped: result.stopped,
            outcome: result.outcome.to_string(),
        }
    }

    /// The single stdout line of the plain protocol.
    pub fn move_line(&self) -> &str {
        self.best_move.as_deref().unwrap_or(NO_MOVE_SENTINEL)
    }

    /// The single stdout line of the `--json` protocol.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Human-oriented summary for the stderr `info` line.
    pub fn info_line(&self) -> String {
        let score = match self.mate_in {
            Some(m) => format!("mate {m}"),
            None => format!("cp {}", self.score),
        };
        format!(
            "info depth {} score {} nodes {} outcome {}{}",
            self.depth,
            score,
            self.nodes,
            self.outcome,
            if self.stopped { " (budget-limited)" } else { "" }
        )
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
