//! Zobrist keys for Makruk positions.
//!
//! A position key is the XOR of random values for:
//! - Each piece on each square (12 pieces × 64 squares = 768 values)
//! - Side to move (1 value)
//! - Unused Ouk first-move rights of King and Queen (2 colors × 2 values)
//!
//! The key doubles as the transposition-table index and the repetition
//! signature.

use crate::types::{Color, Piece, PieceKind};

/// Pre-computed random values for Zobrist hashing.
/// Generated using a fixed seed for reproducibility.
pub struct ZobristKeys {
    /// Indexed by [color][piece_kind][square]
    pub pieces: [[[u64; 64]; 6]; 2],
    /// XOR-ed in when Black is to move
    pub side_to_move: u64,
    /// Indexed by [color][0 = king, 1 = queen]
    pub first_move: [[u64; 2]; 2],
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl ZobristKeys {
    /// Generate keys with xorshift64 from a fixed seed.
    pub const fn new() -> Self {
        const fn xorshift64(mut state: u64) -> u64 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        }

        let mut state = 0x9E3779B97F4A7C15u64;

        let mut pieces = [[[0u64; 64]; 6]; 2];
        let mut color = 0;
        while color < 2 {
            let mut piece = 0;
            while piece < 6 {
                let mut sq = 0;
                while sq < 64 {
                    state = xorshift64(state);
                    pieces[color][piece][sq] = state;
                    sq += 1;
                }
                piece += 1;
            }
            color += 1;
        }

        state = xorshift64(state);
        let side_to_move = state;

        let mut first_move = [[0u64; 2]; 2];
        let mut color = 0;
        while color < 2 {
            let mut i = 0;
            while i < 2 {
                state = xorshift64(state);
                first_move[color][i] = state;
                i += 1;
            }
            color += 1;
        }

        ZobristKeys {
            pieces,
            side_to_move,
            first_move,
        }
    }

    #[inline(always)]
    pub fn piece_key(&self, piece: Piece, sq: u8) -> u64 {
        self.pieces[piece.color.idx()][piece.kind.idx()][sq as usize]
    }

    /// Key for an unused first-move right; `None` for kinds without one.
    #[inline(always)]
    pub fn first_move_key(&self, color: Color, kind: PieceKind) -> Option<u64> {
        match kind {
            PieceKind::King => Some(self.first_move[color.idx()][0]),
            PieceKind::Queen => Some(self.first_move[color.idx()][1]),
            _ => None,
        }
    }
}

/// Global static Zobrist keys, computed at compile time.
pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
