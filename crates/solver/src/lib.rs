//! Single-position solver: one FEN in, one move out.
//!
//! Protocol contract (the only externally observed surface):
//!
//! - One-shot mode: `solver -i <FEN> [--depth N] [--movetime MS]
//!   [--engine SPEC] [--json]` prints exactly one line on stdout: the
//!   chosen move in coordinate notation (`e1e8`), or the sentinel `(none)`
//!   when the root position is already terminal. Search statistics go to
//!   stderr as an `info` line so stdout stays a single-token surface.
//! - Line-loop mode: `solver --stdin ...` reads one FEN per line until EOF
//!   and answers one line per request. The per-request budget comes from the
//!   command line, not the input lines.
//! - Exit codes: 0 for any completed search (terminal-at-root included),
//!   2 for malformed input or an invalid position, 1 for a backend failure.
//!
//! Malformed input never produces a move on stdout; the diagnostic goes to
//! stderr and the process exits non-zero.

mod registry;
mod report;


pub use registry::{RegistryError, create_engine};
pub use report::SolveReport;

use thiserror::Error;

use chess_core::{Engine, FenError, Position, PositionError, SearchError, SearchLimits};

/// Printed in place of a move when the root position is terminal.
pub const NO_MOVE_SENTINEL: &str = "(none)";

/// Everything that prevents a request from producing a result. Terminal
/// positions and exhausted budgets are results, not errors.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("{0}")]
    Parse(#[from] FenError),
    #[error("{0}")]
    Position(#[from] PositionError),
    #[error("{0}")]
    Search(#[from] SearchError),
}

impl SolveError {
    /// Exit code for the process boundary: 2 for anything wrong with the
    /// request, 1 for a backend that failed on a valid request.
    pub fn exit_code(&self) -> i32 {
        match self {
            SolveError::Parse(_) | SolveError::Position(_) => 2,
            SolveError::Search(SearchError::MissingKing) => 2,
            SolveError::Search(SearchError::Backend(_)) => 1,
        }
    }
}

/// Parse and validate one request, run one search, shape one report.
pub fn solve(
    engine: &mut dyn Engine,
    fen: &str,
    limits: SearchLimits,
) -> Result<SolveReport, SolveError> {
    let pos = Position::from_fen(fen)?;
    pos.validate()?;
    let result = engine.search(&pos, limits)?;
    Ok(SolveReport::from_result(&result))
}
