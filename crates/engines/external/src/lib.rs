//! Subprocess Engine Adapter
//!
//! Wraps an external engine binary behind the `Engine` trait. The binary is
//! spawned once per search with the position as a FEN argument
//! (`<program> -i <fen>`) and must print exactly one coordinate move on
//! stdout.
//!
//! Two failure modes are rejected rather than relayed as moves: a process
//! that exits non-zero (the search fails with the child's stderr attached),
//! and a process that exits cleanly but prints text that is not a legal
//! move for the position it was given. Both surface as
//! `SearchError::Backend`.

use std::path::PathBuf;
use std::process::Command;

use chess_core::{
    Engine, MATE_SCORE, Outcome, Position, SearchError, SearchLimits, SearchResult, game_outcome,
    parse_coord_move,
};


/// Engine backed by a one-shot subprocess.
#[derive(Debug, Clone)]
pub struct ExternalEngine {
    program: PathBuf,
    name: String,
}

impl ExternalEngine {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        let program = program.into();
        let name = program
            .file_name()
            .map(|n| format!("External ({})", n.to_string_lossy()))
            .unwrap_or_else(|| "External".to_string());
        Self { program, name }
    }

    pub fn program(&self) -> &PathBuf {
        &self.program
    }
}

impl Engine for ExternalEngine {
    fn search(
        &mut self,
        pos: &Position,
        _limits: SearchLimits,
    ) -> Result<SearchResult, SearchError> {
        if pos.king_sq(pos.side_to_move).is_none() {
            return Err(SearchError::MissingKing);
        }

        // Don't spawn for a position with no move to make
        match game_outcome(pos) {
            Outcome::Ongoing => {}
            Outcome::Checkmate => {
                return Ok(SearchResult::terminal(Outcome::Checkmate, -MATE_SCORE));
            }
            outcome => return Ok(SearchResult::terminal(outcome, 0)),
        }

        let fen = pos.to_fen();
        let output = Command::new(&self.program)
            .arg("-i")
            .arg(&fen)
            .output()
            .map_err(|e| {
                SearchError::Backend(format!(
                    "failed to launch '{}': {e}",
                    self.program.display()
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SearchError::Backend(format!(
                "'{}' exited with {}: {}",
                self.program.display(),
                output.status,
                stderr.trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout);
        let text = text.trim();
        let mv = parse_coord_move(pos, text).ok_or_else(|| {
            SearchError::Backend(format!(
                "'{}' returned '{}', which is not a legal move for the given position",
                self.program.display(),
                text
            ))
        })?;

        Ok(SearchResult {
            best_move: Some(mv),
            score: 0,
            depth: 0,
            nodes: 0,
            stopped: false,
            outcome: Outcome::Ongoing,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
