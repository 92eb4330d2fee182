use thiserror::Error;

use crate::attacks::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks};
use crate::bitboard::Bitboard;
use crate::movegen::legal_moves;
use crate::notation::move_to_coord;
use crate::types::*;
use crate::zobrist::ZOBRIST;

/// A structurally valid position that is nonetheless not a chess position.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("{0:?} has {1} kings, expected exactly one")]
    KingCount(Color, u32),
    #[error("side not to move is in check")]
    OpponentInCheck,
}

/// A move that was not produced by the generator for this exact position.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("move {0} is not legal in this position")]
pub struct IllegalMove(pub String);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

/// Per-color, per-kind piece sets, kept in sync with the mailbox board by
/// `Position::set_piece`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PieceBitboards {
    by_kind: [[Bitboard; 6]; 2],
    by_color: [Bitboard; 2],
}

impl PieceBitboards {
    #[inline(always)]
    pub fn pieces(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.by_kind[color.idx()][kind.idx()]
    }

    #[inline(always)]
    pub fn color(&self, color: Color) -> Bitboard {
        self.by_color[color.idx()]
    }

    #[inline(always)]
    pub fn occupied(&self) -> Bitboard {
        self.by_color[0] | self.by_color[1]
    }

    #[inline(always)]
    fn add(&mut self, pc: Piece, sq: u8) {
        self.by_kind[pc.color.idx()][pc.kind.idx()].set(sq);
        self.by_color[pc.color.idx()].set(sq);
    }

    #[inline(always)]
    fn remove(&mut self, pc: Piece, sq: u8) {
        self.by_kind[pc.color.idx()][pc.kind.idx()].clear(sq);
        self.by_color[pc.color.idx()].clear(sq);
    }
}

#[derive(Clone, Debug)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub bitboards: PieceBitboards,
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>, // square behind a pawn that just advanced 2
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

#[derive(Clone, Debug)]
pub struct Undo {
    pub captured: Option<Piece>,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    pub moved_piece: Piece,
    pub rook_move: Option<(u8, u8)>, // (rook_from, rook_to) for castling
    pub ep_captured_sq: Option<u8>,  // square actually captured in en-passant
}

impl Position {
    /// A board with no pieces; the building block for startpos and FEN setup.
    pub(crate) fn empty() -> Self {
        Position {
            board: [None; 64],
            bitboards: PieceBitboards::default(),
            side_to_move: Color::White,
            castling: CastlingRights {
                wk: false,
                wq: false,
                bk: false,
                bq: false,
            },
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub fn startpos() -> Self {
        let mut p = Position::empty();
        p.castling = CastlingRights {
            wk: true,
            wq: true,
            bk: true,
            bq: true,
        };

        for f in 0..8u8 {
            p.set_piece(
                8 + f,
                Some(Piece {
                    color: Color::White,
                    kind: PieceKind::Pawn,
                }),
            );
            p.set_piece(
                48 + f,
                Some(Piece {
                    color: Color::Black,
                    kind: PieceKind::Pawn,
                }),
            );
        }
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            p.set_piece(
                f as u8,
                Some(Piece {
                    color: Color::White,
                    kind,
                }),
            );
            p.set_piece(
                56 + f as u8,
                Some(Piece {
                    color: Color::Black,
                    kind,
                }),
            );
        }
        p
    }

    #[inline(always)]
    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }

    /// Single mutation point for the board; keeps the bitboards in sync.
    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        if let Some(old) = self.board[sq as usize] {
            self.bitboards.remove(old, sq);
        }
        if let Some(new) = pc {
            self.bitboards.add(new, sq);
        }
        self.board[sq as usize] = pc;
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        self.bitboards.pieces(c, PieceKind::King).lsb()
    }

    pub fn in_check(&self, c: Color) -> bool {
        match self.king_sq(c) {
            Some(ksq) => self.is_square_attacked(ksq, c.other()),
            None => false,
        }
    }

    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        let bb = &self.bitboards;
        let occupied = bb.occupied();

        // A pawn of `by` attacks `target` exactly when it stands on a square
        // the opposite-color pawn pattern radiates from `target`.
        if !(pawn_attacks(by.other(), target) & bb.pieces(by, PieceKind::Pawn)).is_empty() {
            return true;
        }
        if !(knight_attacks(target) & bb.pieces(by, PieceKind::Knight)).is_empty() {
            return true;
        }
        if !(king_attacks(target) & bb.pieces(by, PieceKind::King)).is_empty() {
            return true;
        }
        let queens = bb.pieces(by, PieceKind::Queen);
        if !(bishop_attacks(target, occupied) & (bb.pieces(by, PieceKind::Bishop) | queens))
            .is_empty()
        {
            return true;
        }
        if !(rook_attacks(target, occupied) & (bb.pieces(by, PieceKind::Rook) | queens)).is_empty()
        {
            return true;
        }
        false
    }

    /// Checks the invariants FEN parsing does not: exactly one king per side
    /// and the side not to move out of check.
    pub fn validate(&self) -> Result<(), PositionError> {
        for c in [Color::White, Color::Black] {
            let kings = self.bitboards.pieces(c, PieceKind::King).popcount();
            if kings != 1 {
                return Err(PositionError::KingCount(c, kings));
            }
        }
        if self.in_check(self.side_to_move.other()) {
            return Err(PositionError::OpponentInCheck);
        }
        Ok(())
    }

    /// Immutable move application for trust boundaries: rejects any move the
    /// generator would not produce for this exact position.
    pub fn apply(&self, mv: Move) -> Result<Position, IllegalMove> {
        if !legal_moves(self).contains(&mv) {
            return Err(IllegalMove(move_to_coord(mv)));
        }
        let mut next = self.clone();
        next.make_move(mv);
        Ok(next)
    }

    pub fn make_move(&mut self, mv: Move) -> Undo {
        let from = mv.from;
        let to = mv.to;
        let moved = self.piece_at(from).expect("no piece on from-square");
        let mut captured = self.piece_at(to);
        let prev_castling = self.castling.clone();
        let prev_ep = self.en_passant;
        let prev_hmc = self.halfmove_clock;
        let prev_fmn = self.fullmove_number;

        self.en_passant = None;

        // Halfmove clock reset on capture or pawn move
        let mut reset_hmc = moved.kind == PieceKind::Pawn || captured.is_some();

        // Handle en-passant capture
        let mut ep_captured_sq = None;
        if mv.is_en_passant {
            let dir = match moved.color {
                Color::White => -1,
                Color::Black => 1,
            };
            let cap_rank = rank_of(to) + dir;
            let cap_file = file_of(to);
            if let Some(cs) = sq(cap_file, cap_rank) {
                captured = self.piece_at(cs);
                self.set_piece(cs, None);
                ep_captured_sq = Some(cs);
                reset_hmc = true;
            }
        }

        // Move piece (promotion handled after)
        self.set_piece(from, None);
        self.set_piece(to, Some(moved));

        // Promotion
        if moved.kind == PieceKind::Pawn {
            let r = rank_of(to);
            if (moved.color == Color::White && r == 7) || (moved.color == Color::Black && r == 0) {
                let promo = mv.promo.unwrap_or(PieceKind::Queen);
                self.set_piece(
                    to,
                    Some(Piece {
                        color: moved.color,
                        kind: promo,
                    }),
                );
                reset_hmc = true;
            }
        }

        // Castling rook move
        let mut rook_move = None;
        if mv.is_castle && moved.kind == PieceKind::King {
            // White: e1->g1 rook h1->f1, e1->c1 rook a1->d1
            // Black: e8->g8 rook h8->f8, e8->c8 rook a8->d8
            let (rf, rt) = match (moved.color, from, to) {
                (Color::White, 4, 6) => (7, 5),
                (Color::White, 4, 2) => (0, 3),
                (Color::Black, 60, 62) => (63, 61),
                (Color::Black, 60, 58) => (56, 59),
                _ => (255, 255),
            };
            if rf != 255 {
                let rook = self.piece_at(rf).expect("castling rook missing");
                self.set_piece(rf, None);
                self.set_piece(rt, Some(rook));
                rook_move = Some((rf, rt));
            }
        }

        // Update castling rights if king/rook moved or rook captured
        match moved.color {
            Color::White => {
                if moved.kind == PieceKind::King {
                    self.castling.wk = false;
                    self.castling.wq = false;
                }
                if moved.kind == PieceKind::Rook {
                    if from == 0 {
                        self.castling.wq = false;
                    }
                    if from == 7 {
                        self.castling.wk = false;
                    }
                }
            }
            Color::Black => {
                if moved.kind == PieceKind::King {
                    self.castling.bk = false;
                    self.castling.bq = false;
                }
                if moved.kind == PieceKind::Rook {
                    if from == 56 {
                        self.castling.bq = false;
                    }
                    if from == 63 {
                        self.castling.bk = false;
                    }
                }
            }
        }
        // If rook captured on its home square, remove right
        if let Some(cp) = captured
            && cp.kind == PieceKind::Rook
        {
            match cp.color {
                Color::White => {
                    if to == 0 {
                        self.castling.wq = false;
                    }
                    if to == 7 {
                        self.castling.wk = false;
                    }
                }
                Color::Black => {
                    if to == 56 {
                        self.castling.bq = false;
                    }
                    if to == 63 {
                        self.castling.bk = false;
                    }
                }
            }
        }

        // Double pawn push sets en-passant square
        if moved.kind == PieceKind::Pawn {
            let fr = rank_of(from);
            let tr = rank_of(to);
            if (moved.color == Color::White && fr == 1 && tr == 3)
                || (moved.color == Color::Black && fr == 6 && tr == 4)
            {
                let ep_rank = (fr + tr) / 2;
                let ep_file = file_of(from);
                self.en_passant = sq(ep_file, ep_rank);
            }
        }

        self.halfmove_clock = if reset_hmc {
            0
        } else {
            self.halfmove_clock + 1
        };

        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.other();

        Undo {
            captured,
            castling: prev_castling,
            en_passant: prev_ep,
            halfmove_clock: prev_hmc,
            fullmove_number: prev_fmn,
            moved_piece: moved,
            rook_move,
            ep_captured_sq,
        }
    }

    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        self.side_to_move = self.side_to_move.other();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;

        let from = mv.from;
        let to = mv.to;

        // Undo castling rook move
        if let Some((rf, rt)) = undo.rook_move {
            let rook = self.piece_at(rt).expect("castling rook missing on undo");
            self.set_piece(rt, None);
            self.set_piece(rf, Some(rook));
        }

        // Move piece back, reverting any promotion to the original pawn
        let mut piece_on_to = self.piece_at(to).expect("no piece on to-square");
        if undo.moved_piece.kind == PieceKind::Pawn {
            let r = rank_of(to);
            if (undo.moved_piece.color == Color::White && r == 7)
                || (undo.moved_piece.color == Color::Black && r == 0)
            {
                piece_on_to = Piece {
                    color: undo.moved_piece.color,
                    kind: PieceKind::Pawn,
                };
            }
        }

        self.set_piece(to, None);
        self.set_piece(from, Some(piece_on_to));

        // Restore captured piece
        if mv.is_en_passant {
            if let Some(cs) = undo.ep_captured_sq {
                self.set_piece(cs, undo.captured);
            }
        } else {
            self.set_piece(to, undo.captured);
        }
    }

    /// Zobrist hash of the position. The halfmove clock and fullmove number
    /// are deliberately excluded so repeated positions hash equal.
    pub fn position_hash(&self) -> u64 {
        let mut h = 0u64;
        for sq in 0..64u8 {
            if let Some(pc) = self.board[sq as usize] {
                h ^= ZOBRIST.piece_key(pc, sq);
            }
        }
        if self.side_to_move == Color::Black {
            h ^= ZOBRIST.side_to_move;
        }
        if self.castling.wk {
            h ^= ZOBRIST.castling_key(0);
        }
        if self.castling.wq {
            h ^= ZOBRIST.castling_key(1);
        }
        if self.castling.bk {
            h ^= ZOBRIST.castling_key(2);
        }
        if self.castling.bq {
            h ^= ZOBRIST.castling_key(3);
        }
        if let Some(ep) = self.en_passant {
            h ^= ZOBRIST.ep_key(ep % 8);
        }
        h
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    pub fn is_insufficient_material(&self) -> bool {
        let bb = &self.bitboards;

        for c in [Color::White, Color::Black] {
            let majors = bb.pieces(c, PieceKind::Pawn)
                | bb.pieces(c, PieceKind::Rook)
                | bb.pieces(c, PieceKind::Queen);
            if !majors.is_empty() {
                return false;
            }
        }

        let knights =
            bb.pieces(Color::White, PieceKind::Knight) | bb.pieces(Color::Black, PieceKind::Knight);
        let bishops =
            bb.pieces(Color::White, PieceKind::Bishop) | bb.pieces(Color::Black, PieceKind::Bishop);
        let minors = knights.popcount() + bishops.popcount();

        // K vs K, K+minor vs K
        if minors <= 1 {
            return true;
        }

        // Any number of bishops all standing on one square color cannot mate
        if knights.is_empty() {
            const LIGHT: u64 = 0x55AA55AA55AA55AA;
            let b = bishops.0;
            if (b & LIGHT) == b || (b & !LIGHT) == b {
                return true;
            }
        }

        false
    }
}
