//! Coordinate notation (`c3c4`) for moves and game histories.

use crate::error::NotationError;
use crate::{board::Position, movegen::legal_targets, types::*};

pub fn move_to_algebraic(mv: Move) -> String {
    let mut s = String::with_capacity(4);
    s.push_str(&sq_to_coord(mv.from));
    s.push_str(&sq_to_coord(mv.to));
    s
}

/// Parses `txt` without consulting a position.
pub fn parse_algebraic(txt: &str) -> Result<Move, NotationError> {
    let txt = txt.trim();
    if txt.len() != 4 || !txt.is_ascii() {
        return Err(NotationError::Malformed(txt.to_string()));
    }
    let from = coord_to_sq(&txt[0..2]).ok_or_else(|| NotationError::Malformed(txt.to_string()))?;
    let to = coord_to_sq(&txt[2..4]).ok_or_else(|| NotationError::Malformed(txt.to_string()))?;
    Ok(Move::new(from, to))
}

/// Parses `txt` and checks it is legal for the side to move in `pos`.
pub fn parse_move(pos: &mut Position, txt: &str) -> Result<Move, NotationError> {
    let mv = parse_algebraic(txt)?;
    let own = matches!(pos.piece_at(mv.from), Some(pc) if pc.color == pos.side_to_move);
    if own && legal_targets(pos, mv.from).contains(&mv.to) {
        Ok(mv)
    } else {
        Err(NotationError::NotLegal(txt.trim().to_string()))
    }
}

/// Concatenated coordinate history of the game so far, e.g. `"e3e4d6d5"`.
/// The empty string stands for the starting position.
pub fn history_key(pos: &Position) -> String {
    pos.history()
        .iter()
        .map(|record| move_to_algebraic(record.mv))
        .collect()
}

/// Plays a whitespace-separated list of moves from the starting position
/// of `variant`.
pub fn replay(variant: Variant, moves: &str) -> Result<Position, NotationError> {
    let mut pos = Position::startpos_variant(variant);
    for txt in moves.split_whitespace() {
        let mv = parse_move(&mut pos, txt)?;
        pos.play(mv.from, mv.to)
            .map_err(|_| NotationError::NotLegal(txt.to_string()))?;
    }
    Ok(pos)
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
