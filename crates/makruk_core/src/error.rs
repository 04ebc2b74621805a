//! Error types for position setup and move application.

use thiserror::Error;

use crate::types::{sq_to_coord, Color};

/// Reasons a requested move is refused. The position is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("square index {square} is off the board")]
    InvalidSquare { square: u8 },

    #[error("no piece on {}", sq_to_coord(*square))]
    NoPieceAtSquare { square: u8 },

    #[error("piece on {} belongs to {color:?}, not the side to move", sq_to_coord(*square))]
    WrongPieceColor { square: u8, color: Color },

    #[error("illegal move {}{}", sq_to_coord(*from), sq_to_coord(*to))]
    Illegal { from: u8, to: u8 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("expected at least 2 fields, found {0}")]
    MissingFields(usize),

    #[error("expected 8 rows, found {0}")]
    RowCount(usize),

    #[error("row {row} does not describe exactly 8 squares")]
    RowWidth { row: usize },

    #[error("invalid piece character {0:?}")]
    InvalidPiece(char),

    #[error("invalid side to move {0:?}")]
    InvalidSide(String),

    #[error("unknown variant {0:?}")]
    InvalidVariant(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("malformed move text {0:?}")]
    Malformed(String),

    #[error("move {0} is not legal in this position")]
    NotLegal(String),
}
