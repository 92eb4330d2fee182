//! Random Move Chess Engine
//!
//! Selects uniformly at random from the legal moves. Useful for:
//! - Exercising the solver plumbing without search cost
//! - Baseline comparisons (any real engine should easily beat this)
//! - Stress testing move generation
//!
//! By construction this engine is exempt from the determinism guarantee the
//! search driver carries; terminal outcomes are still reported correctly.

use chess_core::{
    Engine, MATE_SCORE, Outcome, Position, SearchError, SearchLimits, SearchResult, game_outcome,
    legal_moves,
};
use rand::seq::SliceRandom;
use rand::thread_rng;


/// A chess engine that plays random legal moves.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for RandomEngine {
    fn search(
        &mut self,
        pos: &Position,
        _limits: SearchLimits,
    ) -> Result<SearchResult, SearchError> {
        if pos.king_sq(pos.side_to_move).is_none() {
            return Err(SearchError::MissingKing);
        }

        match game_outcome(pos) {
            Outcome::Ongoing => {}
            Outcome::Checkmate => {
                return Ok(SearchResult::terminal(Outcome::Checkmate, -MATE_SCORE));
            }
            outcome => return Ok(SearchResult::terminal(outcome, 0)),
        }

        let moves = legal_moves(pos);
        let best_move = moves.choose(&mut thread_rng()).copied();

        Ok(SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: moves.len() as u64,
            stopped: false,
            outcome: Outcome::Ongoing,
        })
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
