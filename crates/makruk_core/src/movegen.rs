use crate::attacks::{legs, special_legs, Leg};
use crate::{board::Position, types::*};

/// Lazy, single-pass iterator over the pseudo-legal destinations of one
/// piece. Does not test for self-check.
pub struct PseudoMoves<'a> {
    pos: &'a Position,
    from: u8,
    color: Color,
    legs: &'static [Leg],
    specials: &'static [Leg],
    leg: usize,
    dist: i8,
}

impl PseudoMoves<'_> {
    fn current(&self) -> Option<Leg> {
        if self.leg < self.legs.len() {
            Some(self.legs[self.leg])
        } else {
            self.specials.get(self.leg - self.legs.len()).copied()
        }
    }

    fn next_leg(&mut self) {
        self.leg += 1;
        self.dist = 0;
    }
}

impl Iterator for PseudoMoves<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        loop {
            let leg = self.current()?;
            self.dist += 1;
            let to = match sq(
                x_of(self.from) + leg.df * self.dist,
                y_of(self.from) + leg.dr * self.dist,
            ) {
                Some(to) => to,
                None => {
                    self.next_leg();
                    continue;
                }
            };
            match self.pos.piece_at(to) {
                None => {
                    if !leg.slide {
                        self.next_leg();
                    }
                    if leg.reach.quiet() {
                        return Some(to);
                    }
                }
                Some(pc) => {
                    self.next_leg();
                    if pc.color != self.color && leg.reach.capture() {
                        return Some(to);
                    }
                }
            }
        }
    }
}

/// Pseudo-legal destinations of the piece on `from`; empty for an empty square.
pub fn pseudo_moves(pos: &Position, from: u8) -> PseudoMoves<'_> {
    let (color, legs, specials) = match pos.piece_at(from) {
        Some(pc) => (pc.color, legs(pc.kind, pc.color), special_legs(pos, pc)),
        None => (pos.side_to_move, &[][..], &[][..]),
    };
    PseudoMoves {
        pos,
        from,
        color,
        legs,
        specials,
        leg: 0,
        dist: 0,
    }
}

/// True when applying `mv` leaves the mover's king safe. The position is
/// restored before returning.
fn keeps_king_safe(pos: &mut Position, mv: Move) -> bool {
    let mover = match pos.piece_at(mv.from) {
        Some(pc) => pc.color,
        None => return false,
    };
    if pos.make_move(mv).is_err() {
        return false;
    }
    let safe = !pos.in_check(mover);
    pos.undo();
    safe
}

/// Legal destinations of the piece on `from`, whichever side it belongs to.
pub fn legal_targets(pos: &mut Position, from: u8) -> Vec<u8> {
    let candidates: Vec<u8> = pseudo_moves(pos, from).collect();
    candidates
        .into_iter()
        .filter(|&to| keeps_king_safe(pos, Move::new(from, to)))
        .collect()
}

/// Legal moves of the piece on `from`.
pub fn legal_moves_from(pos: &mut Position, from: u8) -> Vec<Move> {
    legal_targets(pos, from)
        .into_iter()
        .map(|to| Move::new(from, to))
        .collect()
}

/// Generate all legal moves, returning a freshly allocated vector.
/// Internally delegates to `legal_moves_into`, cloning the position only once.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves_into(pos, out);
    // Filter illegal moves in-place by playing them on the mutable position.
    out.retain(|&mv| keeps_king_safe(pos, mv));
}

/// Legal captures only, for quiescence search.
pub fn legal_captures_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves_into(pos, out);
    out.retain(|&mv| is_capture(pos, mv) && keeps_king_safe(pos, mv));
}

/// True if the side to move has at least one legal move.
pub fn has_legal_move(pos: &mut Position) -> bool {
    let side = pos.side_to_move;
    for from in 0..64u8 {
        if !matches!(pos.piece_at(from), Some(pc) if pc.color == side) {
            continue;
        }
        let candidates: Vec<u8> = pseudo_moves(pos, from).collect();
        if candidates
            .into_iter()
            .any(|to| keeps_king_safe(pos, Move::new(from, to)))
        {
            return true;
        }
    }
    false
}

pub fn is_capture(pos: &Position, mv: Move) -> bool {
    pos.piece_at(mv.to).is_some()
}

fn pseudo_moves_into(pos: &Position, out: &mut Vec<Move>) {
    for from in 0..64u8 {
        match pos.piece_at(from) {
            Some(pc) if pc.color == pos.side_to_move => {
                out.extend(pseudo_moves(pos, from).map(|to| Move::new(from, to)));
            }
            _ => continue,
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
