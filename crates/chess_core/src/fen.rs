//! Forsyth-Edwards Notation parsing and rendering.
//!
//! Parsing validates structure only: field counts, rank/file counts, token
//! shapes. Whether the resulting position is a playable chess position
//! (kings present, side not to move out of check) is `Position::validate`'s
//! job, so odd-but-well-formed test positions still load.

use thiserror::Error;

use crate::board::Position;
use crate::types::*;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("expected at least 4 FEN fields, found {0}")]
    MissingFields(usize),
    #[error("expected 8 ranks in piece placement, found {0}")]
    RankCount(usize),
    #[error("rank '{0}' does not describe exactly 8 files")]
    FileCount(String),
    #[error("invalid piece character '{0}'")]
    PieceChar(char),
    #[error("invalid side to move '{0}'")]
    SideToMove(String),
    #[error("invalid castling field '{0}'")]
    Castling(String),
    #[error("invalid en passant square '{0}'")]
    EnPassant(String),
    #[error("invalid halfmove clock '{0}'")]
    HalfmoveClock(String),
    #[error("invalid fullmove number '{0}'")]
    FullmoveNumber(String),
}

fn piece_from_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some(Piece { color, kind })
}

fn piece_to_char(pc: Piece) -> char {
    let ch = match pc.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match pc.color {
        Color::White => ch.to_ascii_uppercase(),
        Color::Black => ch,
    }
}

impl Position {
    pub fn from_fen(fen: &str) -> Result<Position, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::MissingFields(parts.len()));
        }

        let board_part = parts[0];
        let stm_part = parts[1];
        let castle_part = parts[2];
        let ep_part = parts[3];
        let halfmove_part = parts.get(4).copied().unwrap_or("0");
        let fullmove_part = parts.get(5).copied().unwrap_or("1");

        let ranks: Vec<&str> = board_part.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }

        let mut pos = Position::empty();
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file: i8 = 0;
            let rank: i8 = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    let pc = piece_from_char(ch).ok_or(FenError::PieceChar(ch))?;
                    let square = sq(file, rank).ok_or_else(|| FenError::FileCount(rank_str.to_string()))?;
                    pos.set_piece(square, Some(pc));
                    file += 1;
                }
                if file > 8 {
                    return Err(FenError::FileCount(rank_str.to_string()));
                }
            }
            if file != 8 {
                return Err(FenError::FileCount(rank_str.to_string()));
            }
        }

        pos.side_to_move = match stm_part {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::SideToMove(other.to_string())),
        };

        if castle_part != "-" {
            for c in castle_part.chars() {
                match c {
                    'K' => pos.castling.wk = true,
                    'Q' => pos.castling.wq = true,
                    'k' => pos.castling.bk = true,
                    'q' => pos.castling.bq = true,
                    _ => return Err(FenError::Castling(castle_part.to_string())),
                }
            }
        }

        pos.en_passant = if ep_part == "-" {
            None
        } else {
            Some(coord_to_sq(ep_part).ok_or_else(|| FenError::EnPassant(ep_part.to_string()))?)
        };

        pos.halfmove_clock = halfmove_part
            .parse()
            .map_err(|_| FenError::HalfmoveClock(halfmove_part.to_string()))?;
        pos.fullmove_number = fullmove_part
            .parse()
            .map_err(|_| FenError::FullmoveNumber(fullmove_part.to_string()))?;

        Ok(pos)
    }

    /// Renders the position back to a six-field FEN string.
    pub fn to_fen(&self) -> String {
        let mut out = String::with_capacity(90);

        for rank in (0..8).rev() {
            let mut empties = 0;
            for file in 0..8 {
                let square = (rank * 8 + file) as u8;
                match self.piece_at(square) {
                    Some(pc) => {
                        if empties > 0 {
                            out.push(char::from_digit(empties, 10).unwrap_or('8'));
                            empties = 0;
                        }
                        out.push(piece_to_char(pc));
                    }
                    None => empties += 1,
                }
            }
            if empties > 0 {
                out.push(char::from_digit(empties, 10).unwrap_or('8'));
            }
            if rank > 0 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        out.push(' ');
        if !(self.castling.wk || self.castling.wq || self.castling.bk || self.castling.bq) {
            out.push('-');
        } else {
            if self.castling.wk {
                out.push('K');
            }
            if self.castling.wq {
                out.push('Q');
            }
            if self.castling.bk {
                out.push('k');
            }
            if self.castling.bq {
                out.push('q');
            }
        }

        out.push(' ');
        match self.en_passant {
            Some(ep) => out.push_str(&sq_to_coord(ep)),
            None => out.push('-'),
        }

        out.push(' ');
        out.push_str(&self.halfmove_clock.to_string());
        out.push(' ');
        out.push_str(&self.fullmove_number.to_string());

        out
    }
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
