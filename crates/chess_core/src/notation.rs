//! Long algebraic coordinate notation: origin square, destination square,
//! optional promotion letter (`e2e4`, `a7a8q`). This is the only wire format
//! the engines speak.

use crate::{board::Position, movegen::legal_moves, types::*};

pub fn move_to_coord(mv: Move) -> String {
    let mut s = String::new();
    s.push_str(&sq_to_coord(mv.from));
    s.push_str(&sq_to_coord(mv.to));
    if let Some(p) = mv.promo {
        let ch = match p {
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            _ => 'q',
        };
        s.push(ch);
    }
    s
}

/// Parse a coordinate move and match it against the legal moves of `pos`, so
/// castle/en-passant flags come from the generator and never from the text.
/// Returns None for anything that is not a legal move in this exact position.
pub fn parse_coord_move(pos: &Position, txt: &str) -> Option<Move> {
    let txt = txt.trim();
    if txt.len() < 4 || txt.len() > 5 {
        return None;
    }
    let from = coord_to_sq(&txt[0..2])?;
    let to = coord_to_sq(&txt[2..4])?;
    let promo = if txt.len() == 5 {
        match txt.as_bytes()[4] as char {
            'q' | 'Q' => Some(PieceKind::Queen),
            'r' | 'R' => Some(PieceKind::Rook),
            'b' | 'B' => Some(PieceKind::Bishop),
            'n' | 'N' => Some(PieceKind::Knight),
            _ => return None,
        }
    } else {
        None
    };

    legal_moves(pos)
        .into_iter()
        .find(|m| m.from == from && m.to == to && m.promo == promo)
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
