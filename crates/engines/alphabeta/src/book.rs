//! Opening book keyed by the move history of the game.
//!
//! The JSON form maps the concatenated coordinate history to the moves that
//! may be played next:
//!
//! ```json
//! { "": ["e3e4", "c3c4"], "e3e4": ["d6d5"] }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use makruk_core::{history_key, parse_algebraic, parse_move, Move, Position};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::BookError;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpeningBook {
    lines: BTreeMap<String, Vec<String>>,
}

impl OpeningBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, BookError> {
        let book: OpeningBook = serde_json::from_str(json)?;
        for (history, moves) in &book.lines {
            for mv in moves {
                if parse_algebraic(mv).is_err() {
                    return Err(BookError::MalformedMove {
                        history: history.clone(),
                        mv: mv.clone(),
                    });
                }
            }
        }
        Ok(book)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, BookError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| BookError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, BookError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn insert(&mut self, history: impl Into<String>, mv: Move) {
        self.lines.entry(history.into()).or_default().push(mv.to_string());
    }

    pub fn candidates(&self, history: &str) -> &[String] {
        self.lines.get(history).map_or(&[], Vec::as_slice)
    }

    /// Number of histories with an entry.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// A uniformly chosen legal book move for `pos`, or `None` on a miss.
    ///
    /// Only positions reached by play from the standard start are looked up.
    pub fn pick<R: Rng + ?Sized>(&self, pos: &Position, rng: &mut R) -> Option<Move> {
        if !reached_from_start(pos) {
            return None;
        }
        let candidates = self.lines.get(&history_key(pos))?;
        let mut probe = pos.clone();
        let legal: Vec<Move> = candidates
            .iter()
            .filter_map(|txt| parse_move(&mut probe, txt).ok())
            .collect();
        legal.choose(rng).copied()
    }
}

/// True when replaying the recorded history on the start position gives
/// `pos` back. Positions set up from FEN fail this check.
fn reached_from_start(pos: &Position) -> bool {
    let mut replay = Position::startpos_variant(pos.variant);
    for record in pos.history() {
        if replay.make_move(record.mv).is_err() {
            return false;
        }
    }
    replay.board == pos.board && replay.side_to_move == pos.side_to_move
}

#[cfg(test)]
#[path = "book_tests.rs"]
mod book_tests;
