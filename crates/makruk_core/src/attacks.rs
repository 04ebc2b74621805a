//! Movement tables for the Makruk pieces and threat enumeration.
//!
//! Every piece is described as a list of [`Leg`]s: a step direction, whether
//! the piece keeps sliding along it, and whether the step may land on an
//! empty square, an enemy piece, or both. Move generation walks the legs;
//! threat detection only looks at the legs that can capture.

use crate::board::Position;
use crate::types::*;

pub const KING_STEPS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Which kinds of destination a leg may land on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reach {
    /// Empty squares only (Fish push, first-move specials).
    Quiet,
    /// Enemy-occupied squares only (Fish capture).
    Capture,
    Both,
}

impl Reach {
    pub fn quiet(self) -> bool {
        matches!(self, Reach::Quiet | Reach::Both)
    }
    pub fn capture(self) -> bool {
        matches!(self, Reach::Capture | Reach::Both)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Leg {
    pub df: i8,
    pub dr: i8,
    pub slide: bool,
    pub reach: Reach,
}

const fn step(df: i8, dr: i8) -> Leg {
    Leg {
        df,
        dr,
        slide: false,
        reach: Reach::Both,
    }
}

const fn quiet(df: i8, dr: i8) -> Leg {
    Leg {
        df,
        dr,
        slide: false,
        reach: Reach::Quiet,
    }
}

const fn capture(df: i8, dr: i8) -> Leg {
    Leg {
        df,
        dr,
        slide: false,
        reach: Reach::Capture,
    }
}

const fn ray(df: i8, dr: i8) -> Leg {
    Leg {
        df,
        dr,
        slide: true,
        reach: Reach::Both,
    }
}

const KING_LEGS: [Leg; 8] = [
    step(1, 1),
    step(1, 0),
    step(1, -1),
    step(0, 1),
    step(0, -1),
    step(-1, 1),
    step(-1, 0),
    step(-1, -1),
];
const KNIGHT_LEGS: [Leg; 8] = [
    step(1, 2),
    step(2, 1),
    step(-1, 2),
    step(-2, 1),
    step(1, -2),
    step(2, -1),
    step(-1, -2),
    step(-2, -1),
];
const ROOK_LEGS: [Leg; 4] = [ray(1, 0), ray(-1, 0), ray(0, 1), ray(0, -1)];
const MET_LEGS: [Leg; 4] = [step(1, 1), step(1, -1), step(-1, 1), step(-1, -1)];

const WHITE_KHON_LEGS: [Leg; 5] = [
    step(-1, -1),
    step(1, -1),
    step(0, -1),
    step(-1, 1),
    step(1, 1),
];
const BLACK_KHON_LEGS: [Leg; 5] = [
    step(-1, 1),
    step(1, 1),
    step(0, 1),
    step(-1, -1),
    step(1, -1),
];
const WHITE_FISH_LEGS: [Leg; 3] = [quiet(0, -1), capture(-1, -1), capture(1, -1)];
const BLACK_FISH_LEGS: [Leg; 3] = [quiet(0, 1), capture(-1, 1), capture(1, 1)];

// Ouk first-move specials, never captures.
const KING_JUMP_LEGS: [Leg; 8] = [
    quiet(1, 2),
    quiet(2, 1),
    quiet(-1, 2),
    quiet(-2, 1),
    quiet(1, -2),
    quiet(2, -1),
    quiet(-1, -2),
    quiet(-2, -1),
];
const WHITE_QUEEN_LEAP: [Leg; 1] = [quiet(0, -2)];
const BLACK_QUEEN_LEAP: [Leg; 1] = [quiet(0, 2)];

/// Regular movement legs of a piece.
pub fn legs(kind: PieceKind, color: Color) -> &'static [Leg] {
    match (kind, color) {
        (PieceKind::King, _) => &KING_LEGS,
        (PieceKind::Queen, _) => &MET_LEGS,
        (PieceKind::Rook, _) => &ROOK_LEGS,
        (PieceKind::Knight, _) => &KNIGHT_LEGS,
        (PieceKind::Bishop, Color::White) => &WHITE_KHON_LEGS,
        (PieceKind::Bishop, Color::Black) => &BLACK_KHON_LEGS,
        (PieceKind::Pawn, Color::White) => &WHITE_FISH_LEGS,
        (PieceKind::Pawn, Color::Black) => &BLACK_FISH_LEGS,
    }
}

/// One-time first-move legs available to `pc` in `pos`, if any.
///
/// The King jump is only available while the King is not in check.
pub fn special_legs(pos: &Position, pc: Piece) -> &'static [Leg] {
    if !pos.variant.has_first_move_specials() || pc.has_moved {
        return &[];
    }
    match (pc.kind, pc.color) {
        (PieceKind::King, c) if !pos.in_check(c) => &KING_JUMP_LEGS,
        (PieceKind::Queen, Color::White) => &WHITE_QUEEN_LEAP,
        (PieceKind::Queen, Color::Black) => &BLACK_QUEEN_LEAP,
        _ => &[],
    }
}

/// Squares threatened by the piece on `from`.
///
/// Fish pushes and first-move specials are not threats. Sliding rays stop
/// at (and include) the first occupied square.
pub fn attacks_from(pos: &Position, from: u8) -> Vec<u8> {
    let pc = match pos.piece_at(from) {
        Some(p) => p,
        None => return Vec::new(),
    };
    let f0 = x_of(from);
    let r0 = y_of(from);
    let mut out = Vec::with_capacity(16);
    for leg in legs(pc.kind, pc.color) {
        if !leg.reach.capture() {
            continue;
        }
        let mut f = f0 + leg.df;
        let mut r = r0 + leg.dr;
        while let Some(to) = sq(f, r) {
            out.push(to);
            if !leg.slide || pos.piece_at(to).is_some() {
                break;
            }
            f += leg.df;
            r += leg.dr;
        }
    }
    out
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
