//! Static evaluation: material, piece-square tables, and mobility.
//!
//! Scores are centipawns from the side-to-move's perspective and symmetric
//! under color swap + board mirror, which keeps negamax sign-flipping sound.

use chess_core::{
    Color, PieceKind, Position, bishop_attacks, knight_attacks, queen_attacks, rook_attacks,
};

/// Material values in centipawns, indexed by `PieceKind::idx()`.
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
const PIECE_VALUES: [i32; 6] = [100, 320, 330, 500, 900, 0];

/// Bonus per pseudo-legal move of a knight, bishop, rook or queen.
const MOBILITY_WEIGHT: i32 = 5;

/// Returns the material value of a piece in centipawns.
#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    PIECE_VALUES[kind.idx()]
}

// Piece-square tables, written with rank 8 at the top so they read like a
// board from white's side. White lookups mirror the rank (sq ^ 56); black
// lookups use the square directly.
#[rustfmt::skip]
const PAWN_PST: [i32; 64] = [
     0,   0,   0,   0,   0,   0,   0,   0,
    50,  50,  50,  50,  50,  50,  50,  50,
    10,  10,  20,  30,  30,  20,  10,  10,
     5,   5,  10,  25,  25,  10,   5,   5,
     0,   0,   0,  20,  20,   0,   0,   0,
     5,  -5, -10,   0,   0, -10,  -5,   5,
     5,  10,  10, -20, -20,  10,  10,   5,
     0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT_PST: [i32; 64] = [
   -50, -40, -30, -30, -30, -30, -40, -50,
   -40, -20,   0,   0,   0,   0, -20, -40,
   -30,   0,  10,  15,  15,  10,   0, -30,
   -30,   5,  15,  20,  20,  15,   5, -30,
   -30,   0,  15,  20,  20,  15,   0, -30,
   -30,   5,  10,  15,  15,  10,   5, -30,
   -40, -20,   0,   5,   5,   0, -20, -40,
   -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const BISHOP_PST: [i32; 64] = [
   -20, -10, -10, -10, -10, -10, -10, -20,
   -10,   0,   0,   0,   0,   0,   0, -10,
   -10,   0,   5,  10,  10,   5,   0, -10,
   -10,   5,   5,  10,  10,   5,   5, -10,
   -10,   0,  10,  10,  10,  10,   0, -10,
   -10,  10,  10,  10,  10,  10,  10, -10,
   -10,   5,   0,   0,   0,   0,   5, -10,
   -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const ROOK_PST: [i32; 64] = [
     0,   0,   0,   0,   0,   0,   0,   0,
     5,  10,  10,  10,  10,  10,  10,   5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
     0,   0,   0,   5,   5,   0,   0,   0,
];

#[rustfmt::skip]
const QUEEN_PST: [i32; 64] = [
   -20, -10, -10,  -5,  -5, -10, -10, -20,
   -10,   0,   0,   0,   0,   0,   0, -10,
   -10,   0,   5,   5,   5,   5,   0, -10,
    -5,   0,   5,   5,   5,   5,   0,  -5,
     0,   0,   5,   5,   5,   5,   0,  -5,
   -10,   5,   5,   5,   5,   5,   0, -10,
   -10,   0,   5,   0,   0,   0,   0, -10,
   -20, -10, -10,  -5,  -5, -10, -10, -20,
];

#[rustfmt::skip]
const KING_PST: [i32; 64] = [
   -30, -40, -40, -50, -50, -40, -40, -30,
   -30, -40, -40, -50, -50, -40, -40, -30,
   -30, -40, -40, -50, -50, -40, -40, -30,
   -30, -40, -40, -50, -50, -40, -40, -30,
   -20, -30, -30, -40, -40, -30, -30, -20,
   -10, -20, -20, -20, -20, -20, -20, -10,
    20,  20,   0,   0,   0,   0,  20,  20,
    20,  30,  10,   0,   0,  10,  30,  20,
];

const PST: [&[i32; 64]; 6] = [
    &PAWN_PST,
    &KNIGHT_PST,
    &BISHOP_PST,
    &ROOK_PST,
    &QUEEN_PST,
    &KING_PST,
];

/// Evaluates the position from the side-to-move's perspective.
///
/// Returns a score in centipawns:
/// - Positive = good for side to move
/// - Negative = bad for side to move
/// - 0 = equal position
pub fn evaluate(pos: &Position) -> i32 {
    let bb = &pos.bitboards;
    let mut score = 0i32;

    for kind in PieceKind::ALL {
        let value = PIECE_VALUES[kind.idx()];
        let table = PST[kind.idx()];
        for sq in bb.pieces(Color::White, kind) {
            score += value + table[(sq ^ 56) as usize];
        }
        for sq in bb.pieces(Color::Black, kind) {
            score -= value + table[sq as usize];
        }
    }

    score += MOBILITY_WEIGHT * (mobility(pos, Color::White) - mobility(pos, Color::Black));

    // Convert to side-to-move perspective
    if pos.side_to_move == Color::White {
        score
    } else {
        -score
    }
}

/// Pseudo-legal move count of the knights and sliders, straight off the
/// attack tables. Pawn and king moves are deliberately excluded; pushing
/// them adds noise, not activity.
fn mobility(pos: &Position, c: Color) -> i32 {
    let bb = &pos.bitboards;
    let occupied = bb.occupied();
    let own = bb.color(c);

    let mut moves = 0i32;
    for sq in bb.pieces(c, PieceKind::Knight) {
        moves += (knight_attacks(sq) & !own).popcount() as i32;
    }
    for sq in bb.pieces(c, PieceKind::Bishop) {
        moves += (bishop_attacks(sq, occupied) & !own).popcount() as i32;
    }
    for sq in bb.pieces(c, PieceKind::Rook) {
        moves += (rook_attacks(sq, occupied) & !own).popcount() as i32;
    }
    for sq in bb.pieces(c, PieceKind::Queen) {
        moves += (queen_attacks(sq, occupied) & !own).popcount() as i32;
    }
    moves
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
