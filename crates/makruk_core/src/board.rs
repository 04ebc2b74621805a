use std::fmt;

use crate::attacks::{KING_STEPS, KNIGHT_JUMPS, ORTHOGONALS};
use crate::error::{FenError, MoveError};
use crate::movegen::{has_legal_move, legal_targets};
use crate::types::*;
use crate::zobrist::ZOBRIST;

pub const START_FEN: &str = "rnbkqbnr/8/pppppppp/8/8/PPPPPPPP/8/RNBQKBNR w makruk";

/// Inverse-application token for one applied move.
///
/// `moved` is the piece exactly as it stood on `from` before the move, so
/// restoring it also restores `has_moved` and undoes a promotion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UndoRecord {
    pub mv: Move,
    pub moved: Piece,
    pub captured: Option<Piece>,
    pub promoted: bool,
}

/// Outcome of a validated move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Played {
    pub captured: Option<Piece>,
    pub promoted: bool,
    pub status: Status,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub variant: Variant,
    history: Vec<UndoRecord>,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

/// Home squares (x, y) of the pieces with first-move specials.
fn home_square(color: Color, kind: PieceKind) -> Option<u8> {
    match (color, kind) {
        (Color::White, PieceKind::King) => sq(4, 7),
        (Color::White, PieceKind::Queen) => sq(3, 7),
        (Color::Black, PieceKind::King) => sq(3, 0),
        (Color::Black, PieceKind::Queen) => sq(4, 0),
        _ => None,
    }
}

/// A Pawn of `color` standing on row `y` is promoted.
pub fn in_promotion_zone(color: Color, y: i8) -> bool {
    match color {
        Color::White => y <= 2,
        Color::Black => y >= 5,
    }
}

impl Position {
    pub fn empty(variant: Variant) -> Self {
        Position {
            board: [None; 64],
            side_to_move: Color::White,
            variant,
            history: Vec::new(),
        }
    }

    pub fn startpos() -> Self {
        Self::startpos_variant(Variant::Makruk)
    }

    pub fn startpos_variant(variant: Variant) -> Self {
        let mut p = Position::empty(variant);

        // Fish on the third row of each side, the second row stays empty.
        for x in 0..8u8 {
            p.board[(5 * 8 + x) as usize] = Some(Piece::new(Color::White, PieceKind::Pawn));
            p.board[(2 * 8 + x) as usize] = Some(Piece::new(Color::Black, PieceKind::Pawn));
        }
        let white_back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (x, &kind) in white_back.iter().enumerate() {
            p.board[56 + x] = Some(Piece::new(Color::White, kind));
            // Black mirrors White left-to-right, so the kings are not on one file.
            p.board[7 - x] = Some(Piece::new(Color::Black, kind));
        }
        p
    }

    /// Parses `<rows> <w|b> [makruk|ouk]`. Rows run from y = 0 (Black's back
    /// rank) to y = 7. Kings and Queens away from their home squares are
    /// marked as moved.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(FenError::MissingFields(parts.len()));
        }

        let variant = match parts.get(2) {
            Some(name) => {
                Variant::from_name(name).ok_or_else(|| FenError::InvalidVariant(name.to_string()))?
            }
            None => Variant::Makruk,
        };
        let mut pos = Position::empty(variant);

        let rows: Vec<&str> = parts[0].split('/').collect();
        if rows.len() != 8 {
            return Err(FenError::RowCount(rows.len()));
        }

        for (y, row) in rows.iter().enumerate() {
            let mut x: i8 = 0;
            for ch in row.chars() {
                if let Some(d) = ch.to_digit(10) {
                    x += d as i8;
                } else {
                    let kind = PieceKind::from_char(ch).ok_or(FenError::InvalidPiece(ch))?;
                    let color = if ch.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let square = sq(x, y as i8).ok_or(FenError::RowWidth { row: y })?;
                    let has_moved = match home_square(color, kind) {
                        Some(home) => home != square,
                        None => false,
                    };
                    pos.board[square as usize] = Some(Piece {
                        color,
                        kind,
                        has_moved,
                    });
                    x += 1;
                }
                if x > 8 {
                    return Err(FenError::RowWidth { row: y });
                }
            }
            if x != 8 {
                return Err(FenError::RowWidth { row: y });
            }
        }

        pos.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidSide(other.to_string())),
        };
        Ok(pos)
    }

    pub fn to_fen(&self) -> String {
        let mut out = String::new();
        for y in 0..8i8 {
            let mut empty = 0;
            for x in 0..8i8 {
                match sq(x, y).and_then(|s| self.piece_at(s)) {
                    Some(pc) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(pc.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if y < 7 {
                out.push('/');
            }
        }
        let side = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        format!("{out} {side} {}", self.variant.name())
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        (0..64u8).find(|&s| {
            matches!(self.board[s as usize], Some(pc) if pc.color == c && pc.kind == PieceKind::King)
        })
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board.get(sq as usize).copied().flatten()
    }

    /// Alias of [`Position::piece_at`] matching the board-collaborator interface.
    pub fn at(&self, sq: u8) -> Option<Piece> {
        self.piece_at(sq)
    }

    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.board[sq as usize] = pc;
    }

    /// Moves applied so far, oldest first.
    pub fn history(&self) -> &[UndoRecord] {
        &self.history
    }

    pub fn ply(&self) -> usize {
        self.history.len()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|u| u.mv)
    }

    pub fn in_check(&self, c: Color) -> bool {
        let ksq = match self.king_sq(c) {
            Some(s) => s,
            None => return false,
        };
        self.is_square_attacked(ksq, c.other())
    }

    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        let tx = x_of(target);
        let ty = y_of(target);
        let fwd = by.forward();

        let holds = |s: Option<u8>, kinds: &[PieceKind]| -> bool {
            matches!(s.and_then(|s| self.piece_at(s)), Some(pc) if pc.color == by && kinds.contains(&pc.kind))
        };

        // Fish and Khon attack one step diagonally forward, so look one row back.
        for df in [-1, 1] {
            if holds(sq(tx + df, ty - fwd), &[PieceKind::Pawn, PieceKind::Bishop]) {
                return true;
            }
        }
        // Khon also steps straight forward; Khon and Met both step diagonally back.
        if holds(sq(tx, ty - fwd), &[PieceKind::Bishop]) {
            return true;
        }
        for df in [-1, 1] {
            if holds(sq(tx + df, ty + fwd), &[PieceKind::Bishop, PieceKind::Queen]) {
                return true;
            }
            if holds(sq(tx + df, ty - fwd), &[PieceKind::Queen]) {
                return true;
            }
        }

        for (df, dr) in KNIGHT_JUMPS {
            if holds(sq(tx + df, ty + dr), &[PieceKind::Knight]) {
                return true;
            }
        }
        for (df, dr) in KING_STEPS {
            if holds(sq(tx + df, ty + dr), &[PieceKind::King]) {
                return true;
            }
        }

        for (df, dr) in ORTHOGONALS {
            let mut f = tx + df;
            let mut r = ty + dr;
            while let Some(sq2) = sq(f, r) {
                if let Some(pc) = self.piece_at(sq2) {
                    if pc.color == by && pc.kind == PieceKind::Rook {
                        return true;
                    }
                    break;
                }
                f += df;
                r += dr;
            }
        }

        false
    }

    /// Applies a move without checking legality and pushes its undo record.
    ///
    /// Used by the search and by legality filtering. Only fails when `from`
    /// is empty, in which case nothing changes.
    pub fn make_move(&mut self, mv: Move) -> Result<UndoRecord, MoveError> {
        if mv.from >= 64 || mv.to >= 64 {
            return Err(MoveError::InvalidSquare {
                square: mv.from.max(mv.to),
            });
        }
        let moved = self
            .piece_at(mv.from)
            .ok_or(MoveError::NoPieceAtSquare { square: mv.from })?;
        let captured = self.piece_at(mv.to);

        let mut placed = moved;
        placed.has_moved = true;
        let promoted = moved.kind == PieceKind::Pawn && in_promotion_zone(moved.color, y_of(mv.to));
        if promoted {
            placed.kind = PieceKind::Queen;
        }

        self.set_piece(mv.from, None);
        self.set_piece(mv.to, Some(placed));
        self.side_to_move = self.side_to_move.other();

        let record = UndoRecord {
            mv,
            moved,
            captured,
            promoted,
        };
        self.history.push(record);
        Ok(record)
    }

    /// Reverts the most recent move. Returns `None` (and does nothing) when
    /// no move has been applied.
    pub fn undo(&mut self) -> Option<UndoRecord> {
        let record = self.history.pop()?;
        self.set_piece(record.mv.from, Some(record.moved));
        self.set_piece(record.mv.to, record.captured);
        self.side_to_move = self.side_to_move.other();
        Some(record)
    }

    /// Validated move: the piece on `from` must belong to the side to move
    /// and `to` must be one of its legal destinations.
    pub fn play(&mut self, from: u8, to: u8) -> Result<Played, MoveError> {
        if from >= 64 {
            return Err(MoveError::InvalidSquare { square: from });
        }
        if to >= 64 {
            return Err(MoveError::InvalidSquare { square: to });
        }
        let pc = self
            .piece_at(from)
            .ok_or(MoveError::NoPieceAtSquare { square: from })?;
        if pc.color != self.side_to_move {
            return Err(MoveError::WrongPieceColor {
                square: from,
                color: pc.color,
            });
        }
        if !legal_targets(self, from).contains(&to) {
            return Err(MoveError::Illegal { from, to });
        }

        let record = self.make_move(Move::new(from, to))?;
        Ok(Played {
            captured: record.captured,
            promoted: record.promoted,
            status: self.status(),
        })
    }

    /// Status for the side to move. A missing king on either side counts as
    /// checkmate.
    pub fn status(&mut self) -> Status {
        if self.king_sq(Color::White).is_none() || self.king_sq(Color::Black).is_none() {
            return Status::Checkmate;
        }
        let in_check = self.in_check(self.side_to_move);
        match (in_check, has_legal_move(self)) {
            (true, false) => Status::Checkmate,
            (false, false) => Status::Stalemate,
            (true, true) => Status::Check,
            (false, true) => Status::Ongoing,
        }
    }

    pub fn count(&self, color: Color, kind: PieceKind) -> u32 {
        self.board
            .iter()
            .flatten()
            .filter(|pc| pc.color == color && pc.kind == kind)
            .count() as u32
    }

    /// Pieces of `color` other than the king.
    pub fn non_king_count(&self, color: Color) -> u32 {
        self.board
            .iter()
            .flatten()
            .filter(|pc| pc.color == color && pc.kind != PieceKind::King)
            .count() as u32
    }

    /// Kings plus at most two Fish in total and nothing else cannot force mate.
    pub fn is_insufficient_material(&self) -> bool {
        let mut pawns = 0;
        for pc in self.board.iter().flatten() {
            match pc.kind {
                PieceKind::King => {}
                PieceKind::Pawn => pawns += 1,
                _ => return false,
            }
        }
        pawns <= 2
    }

    /// Zobrist key over board contents and side to move. Under Ouk the
    /// outstanding first-move rights are part of the key too.
    pub fn key(&self) -> u64 {
        let mut h = 0u64;
        for (i, slot) in self.board.iter().enumerate() {
            if let Some(pc) = slot {
                h ^= ZOBRIST.piece_key(*pc, i as u8);
                if self.variant.has_first_move_specials() && !pc.has_moved {
                    if let Some(key) = ZOBRIST.first_move_key(pc.color, pc.kind) {
                        h ^= key;
                    }
                }
            }
        }
        if self.side_to_move == Color::Black {
            h ^= ZOBRIST.side_to_move;
        }
        h
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..8i8 {
            write!(f, "{} ", 8 - y)?;
            for x in 0..8i8 {
                let c = sq(x, y)
                    .and_then(|s| self.piece_at(s))
                    .map(|pc| pc.to_char())
                    .unwrap_or('.');
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
