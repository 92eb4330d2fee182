use crate::attacks::{bishop_attacks, king_attacks, knight_attacks, queen_attacks, rook_attacks};
use crate::bitboard::Bitboard;
use crate::{board::Position, types::*};

/// Generate all legal moves, returning a freshly allocated vector.
/// Internally delegates to `legal_moves_into`, cloning the position only once.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
///
/// Emptiness of the output is meaningful (checkmate or stalemate, depending
/// on check state) and is never special-cased here. Enumeration order is a
/// pure function of the position: ascending origin square, fixed per-piece
/// target order.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(pos, out);

    let mover = pos.side_to_move;
    // Filter illegal moves in-place by playing them on the mutable position.
    out.retain(|&mv| {
        let undo = pos.make_move(mv);
        let illegal = pos.in_check(mover);
        pos.unmake_move(mv, undo);
        !illegal
    });
}

fn pseudo_moves(pos: &Position, out: &mut Vec<Move>) {
    let us = pos.side_to_move;
    let own = pos.bitboards.color(us);
    let occupied = pos.bitboards.occupied();

    for from in own {
        let pc = match pos.piece_at(from) {
            Some(p) => p,
            None => continue,
        };
        match pc.kind {
            PieceKind::Pawn => gen_pawn(pos, from, us, out),
            PieceKind::Knight => push_targets(from, knight_attacks(from) & !own, out),
            PieceKind::Bishop => push_targets(from, bishop_attacks(from, occupied) & !own, out),
            PieceKind::Rook => push_targets(from, rook_attacks(from, occupied) & !own, out),
            PieceKind::Queen => push_targets(from, queen_attacks(from, occupied) & !own, out),
            PieceKind::King => {
                push_targets(from, king_attacks(from) & !own, out);
                gen_castle(pos, from, us, out);
            }
        }
    }
}

#[inline]
fn push_targets(from: u8, targets: Bitboard, out: &mut Vec<Move>) {
    for to in targets {
        out.push(Move::new(from, to));
    }
}

fn gen_pawn(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);

    let dir: i8 = match c {
        Color::White => 1,
        Color::Black => -1,
    };
    let start_rank: i8 = match c {
        Color::White => 1,
        Color::Black => 6,
    };
    let promo_rank: i8 = match c {
        Color::White => 7,
        Color::Black => 0,
    };

    let push_maybe_promo = |from: u8, to: u8, out: &mut Vec<Move>| {
        if rank_of(to) == promo_rank {
            for pk in [
                PieceKind::Queen,
                PieceKind::Rook,
                PieceKind::Bishop,
                PieceKind::Knight,
            ] {
                out.push(Move::promotion(from, to, pk));
            }
        } else {
            out.push(Move::new(from, to));
        }
    };

    // forward 1, forward 2 from start rank
    if let Some(to) = sq(f, r + dir)
        && pos.piece_at(to).is_none()
    {
        push_maybe_promo(from, to, out);

        if r == start_rank
            && let Some(to2) = sq(f, r + 2 * dir)
            && pos.piece_at(to2).is_none()
        {
            out.push(Move::new(from, to2));
        }
    }

    // captures + en-passant
    for df in [-1, 1] {
        if let Some(to) = sq(f + df, r + dir) {
            if let Some(tpc) = pos.piece_at(to) {
                if tpc.color != c {
                    push_maybe_promo(from, to, out);
                }
            } else if pos.en_passant == Some(to) {
                let mut mv = Move::new(from, to);
                mv.is_en_passant = true;
                out.push(mv);
            }
        }
    }
}

fn gen_castle(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    // Must be on original king square with a right remaining
    let (king_from, short, long) = match c {
        Color::White => (4u8, pos.castling.wk, pos.castling.wq),
        Color::Black => (60u8, pos.castling.bk, pos.castling.bq),
    };
    if from != king_from || !(short || long) {
        return;
    }

    // Can't castle out of check
    if pos.in_check(c) {
        return;
    }

    let enemy = c.other();
    let occupied = pos.bitboards.occupied();
    let empty = |s: u8| !occupied.contains(s);
    // A right can outlive its rook in hand-written FENs; require both.
    let own_rook = |s: u8| {
        pos.piece_at(s)
            == Some(Piece {
                color: c,
                kind: PieceKind::Rook,
            })
    };

    // Short: king two to the east, path empty, transit squares safe
    if short
        && own_rook(king_from + 3)
        && empty(king_from + 1)
        && empty(king_from + 2)
        && !pos.is_square_attacked(king_from + 1, enemy)
        && !pos.is_square_attacked(king_from + 2, enemy)
    {
        let mut mv = Move::new(king_from, king_from + 2);
        mv.is_castle = true;
        out.push(mv);
    }
    // Long: king two to the west, b-file square must also be empty
    if long
        && own_rook(king_from - 4)
        && empty(king_from - 1)
        && empty(king_from - 2)
        && empty(king_from - 3)
        && !pos.is_square_attacked(king_from - 1, enemy)
        && !pos.is_square_attacked(king_from - 2, enemy)
    {
        let mut mv = Move::new(king_from, king_from - 2);
        mv.is_castle = true;
        out.push(mv);
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
