pub mod attacks;
pub mod bitboard;
pub mod board;
pub mod fen;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod time_control;
pub mod types;
pub mod zobrist;

// Re-export core game logic (not engine-specific)
pub use attacks::*;
pub use bitboard::*;
pub use board::*;
pub use fen::FenError;
pub use movegen::*;
pub use notation::*;
pub use perft::perft;
pub use time_control::*;
pub use types::*;
pub use zobrist::ZOBRIST;

use thiserror::Error;

// =============================================================================
// Engine trait, implemented by all search strategies (classical, random,
// subprocess-backed, ...)
// =============================================================================

/// Base value of a forced-mate score. A mate reached at ply `k` scores
/// `MATE_SCORE - k`, so a faster mate always wins a strict comparison
/// against a slower one.
pub const MATE_SCORE: i32 = 100_000;

/// Scores at or beyond this magnitude encode a forced mate.
pub const MATE_THRESHOLD: i32 = MATE_SCORE - 1_000;

/// How the game stands at the root of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Playable position; a best move exists.
    Ongoing,
    /// Side to move has no legal moves and is in check.
    Checkmate,
    /// Side to move has no legal moves and is not in check.
    Stalemate,
    /// Drawn by rule (fifty-move or insufficient material).
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Outcome::Ongoing => "ongoing",
            Outcome::Checkmate => "checkmate",
            Outcome::Stalemate => "stalemate",
            Outcome::Draw => "draw",
        };
        f.write_str(s)
    }
}

/// Classify the root position. Checkmate and stalemate take precedence over
/// rule-based draws so a mate delivered on the hundredth halfmove still
/// counts as mate.
pub fn game_outcome(pos: &Position) -> Outcome {
    if legal_moves(pos).is_empty() {
        if pos.in_check(pos.side_to_move) {
            return Outcome::Checkmate;
        }
        return Outcome::Stalemate;
    }
    if pos.is_fifty_move_draw() || pos.is_insufficient_material() {
        return Outcome::Draw;
    }
    Outcome::Ongoing
}

/// Result of a search operation.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None when the root is terminal)
    pub best_move: Option<Move>,
    /// Evaluation score in centipawns from the side to move's perspective
    pub score: i32,
    /// Search depth actually completed
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Whether search was cut short by the time budget
    pub stopped: bool,
    /// Root classification; `Ongoing` whenever `best_move` is Some
    pub outcome: Outcome,
}

impl SearchResult {
    /// A result for a root position with no move to make.
    pub fn terminal(outcome: Outcome, score: i32) -> Self {
        SearchResult {
            best_move: None,
            score,
            depth: 0,
            nodes: 0,
            stopped: false,
            outcome,
        }
    }

    /// Decode a decisive score into signed moves-to-mate: `Some(n)` when the
    /// side to move mates in `n` moves, `Some(-n)` when it is mated in `n`.
    pub fn mate_in(&self) -> Option<i32> {
        if self.score >= MATE_THRESHOLD {
            Some((MATE_SCORE - self.score + 1) / 2)
        } else if self.score <= -MATE_THRESHOLD {
            Some(-((MATE_SCORE + self.score + 1) / 2))
        } else {
            None
        }
    }
}

/// Failures a search strategy can report. Terminal game states, draws, and
/// exhausted budgets are normal results, never errors.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The side to move has no king: a structurally valid but unplayable
    /// position slipped past parsing.
    #[error("side to move has no king")]
    MissingKing,
    /// A subprocess-backed engine failed or returned an unusable move.
    #[error("engine backend failed: {0}")]
    Backend(String),
}

/// Trait all search strategies implement, so the solver can swap between
/// the in-process driver, the random baseline, and subprocess adapters.
pub trait Engine: Send {
    /// Search the position within the given limits.
    ///
    /// Must always produce a result for a playable position: on budget
    /// exhaustion the best move of the deepest completed depth is returned
    /// with `stopped` set. The only error for an in-process driver is
    /// `SearchError::MissingKing`.
    fn search(&mut self, pos: &Position, limits: SearchLimits) -> Result<SearchResult, SearchError>;

    /// The engine's display name.
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
