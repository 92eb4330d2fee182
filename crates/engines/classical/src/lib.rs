//! Classical Chess Engine
//!
//! Iterative-deepening negamax with alpha-beta pruning, capture-ordered
//! search, and a bounded quiescence extension at the horizon. This is the
//! in-process search driver the solver uses by default.

mod eval;
mod search;

#[cfg(test)]
mod lib_tests;

use chess_core::{
    Engine, MATE_SCORE, Outcome, Position, SearchError, SearchLimits, SearchResult, game_outcome,
};

/// Classical chess engine using negamax with alpha-beta pruning.
///
/// Guarantees:
/// - Always returns a result for a playable position. When the time budget
///   runs out, the best move of the deepest *completed* iteration is
///   returned with `stopped` set.
/// - A forced mate is scored `MATE_SCORE - ply`, so the fastest mate wins
///   every comparison; score ties between distinct moves fall back to the
///   first move in generation order, which is stable per position.
/// - Identical `(position, depth)` input yields the identical move.
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for ClassicalEngine {
    fn search(
        &mut self,
        pos: &Position,
        limits: SearchLimits,
    ) -> Result<SearchResult, SearchError> {
        if pos.king_sq(pos.side_to_move).is_none() {
            return Err(SearchError::MissingKing);
        }

        self.nodes = 0;
        limits.start();

        match game_outcome(pos) {
            Outcome::Ongoing => {}
            Outcome::Checkmate => {
                return Ok(SearchResult::terminal(Outcome::Checkmate, -MATE_SCORE));
            }
            outcome => return Ok(SearchResult::terminal(outcome, 0)),
        }

        let found = search::iterative_search(pos, &limits, &mut self.nodes);

        Ok(SearchResult {
            best_move: Some(found.best_move),
            score: found.score,
            depth: found.depth,
            nodes: self.nodes,
            stopped: found.stopped,
            outcome: Outcome::Ongoing,
        })
    }

    fn name(&self) -> &str {
        "Classical v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use eval::{evaluate, piece_value};
