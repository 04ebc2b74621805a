//! Rule-level properties exercised over pseudo-random games.

use makruk_core::{
    legal_moves, legal_moves_into, CountingState, Color, Position, Status, Variant,
};

/// Small deterministic generator so the games are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

fn random_game(variant: Variant, seed: u64, plies: usize, mut check: impl FnMut(&mut Position)) {
    let mut rng = Lcg(seed);
    let mut pos = Position::startpos_variant(variant);
    for _ in 0..plies {
        check(&mut pos);
        let moves = legal_moves(&pos);
        if moves.is_empty() {
            break;
        }
        let mv = moves[(rng.next() as usize) % moves.len()];
        pos.play(mv.from, mv.to).unwrap();
    }
}

// =============================================================================
// Check safety
// =============================================================================

#[test]
fn test_legal_moves_never_leave_own_king_attacked() {
    for seed in 1..=6 {
        for variant in [Variant::Makruk, Variant::Ouk] {
            random_game(variant, seed, 80, |pos| {
                let mover = pos.side_to_move;
                let mut moves = Vec::new();
                legal_moves_into(pos, &mut moves);
                for mv in moves {
                    pos.make_move(mv).unwrap();
                    assert!(!pos.in_check(mover), "{mv} exposes the king:\n{pos}");
                    pos.undo();
                }
            });
        }
    }
}

// =============================================================================
// Make / undo round trip
// =============================================================================

#[test]
fn test_play_undo_round_trip() {
    for seed in 10..=14 {
        for variant in [Variant::Makruk, Variant::Ouk] {
            random_game(variant, seed, 80, |pos| {
                let before = pos.clone();
                for mv in legal_moves(pos) {
                    pos.play(mv.from, mv.to).unwrap();
                    pos.undo();
                    assert_eq!(*pos, before, "undo of {mv} did not restore the position");
                }
            });
        }
    }
}

#[test]
fn test_full_game_unwinds_to_start() {
    let mut rng = Lcg(99);
    let mut pos = Position::startpos_variant(Variant::Ouk);
    let start = pos.clone();
    for _ in 0..120 {
        let moves = legal_moves(&pos);
        if moves.is_empty() {
            break;
        }
        let mv = moves[(rng.next() as usize) % moves.len()];
        pos.play(mv.from, mv.to).unwrap();
    }
    while pos.undo().is_some() {}
    assert_eq!(pos, start);
}

// =============================================================================
// Terminal states
// =============================================================================

#[test]
fn test_status_matches_move_availability() {
    for seed in 20..=24 {
        random_game(Variant::Makruk, seed, 100, |pos| {
            let has_moves = !legal_moves(pos).is_empty();
            let in_check = pos.in_check(pos.side_to_move);
            let status = pos.status();
            match status {
                Status::Ongoing => assert!(has_moves && !in_check),
                Status::Check => assert!(has_moves && in_check),
                Status::Checkmate => assert!(!has_moves && in_check),
                Status::Stalemate => assert!(!has_moves && !in_check),
            }
        });
    }
}

#[test]
fn test_mating_move_reports_checkmate() {
    let mut pos = Position::from_fen("k7/6R1/8/8/8/7R/8/4K3 w").unwrap();
    let h3 = makruk_core::coord_to_sq("h3").unwrap();
    let h8 = makruk_core::coord_to_sq("h8").unwrap();
    let played = pos.play(h3, h8).unwrap();
    assert_eq!(played.status, Status::Checkmate);
    assert!(legal_moves(&pos).is_empty());
}

// =============================================================================
// Insufficient material
// =============================================================================

#[test]
fn test_kings_and_two_fish_is_a_draw() {
    let pos = Position::from_fen("3k4/8/3p4/8/8/4P3/8/4K3 w").unwrap();
    assert!(pos.is_insufficient_material());
}

#[test]
fn test_fish_capture_can_reach_insufficient_material() {
    // White fish e4 takes the black khon on d5; three fish remain -> not yet.
    let mut pos = Position::from_fen("3k4/8/2p5/3b4/4P3/5P2/8/4K3 w").unwrap();
    assert!(!pos.is_insufficient_material());
    let e4 = makruk_core::coord_to_sq("e4").unwrap();
    let d5 = makruk_core::coord_to_sq("d5").unwrap();
    pos.play(e4, d5).unwrap();
    assert!(!pos.is_insufficient_material());
    assert_eq!(pos.count(Color::White, makruk_core::PieceKind::Pawn), 2);
}

#[test]
fn test_counting_only_ticks_on_attacker_moves() {
    let s = CountingState::new(Color::White, 8);
    let moved = s.after_move(Color::White).after_move(Color::Black);
    assert_eq!(moved.remaining, 7);
    assert_eq!(moved.spent(), 1);
}
