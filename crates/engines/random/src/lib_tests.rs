use super::*;
use makruk_core::{legal_moves, Variant};

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::new();
    for variant in [Variant::Makruk, Variant::Ouk] {
        let pos = Position::startpos_variant(variant);
        let result = engine.search(&pos, SearchLimits::depth(1));
        assert!(legal_moves(&pos).contains(&result.best_move.unwrap()));
    }
}

#[test]
fn random_engine_handles_checkmate() {
    let mut engine = RandomEngine::new();
    let pos = Position::from_fen("k6R/6R1/8/8/8/8/8/4K3 b").unwrap();
    let result = engine.search(&pos, SearchLimits::depth(1));
    assert!(result.best_move.is_none());
}

#[test]
fn random_engine_handles_stalemate() {
    let mut engine = RandomEngine::new();
    let pos = Position::from_fen("k7/8/K7/8/8/1R6/8/8 b").unwrap();
    let result = engine.search(&pos, SearchLimits::depth(1));
    assert!(result.best_move.is_none());
}

#[test]
fn seeded_engine_replays_after_new_game() {
    let mut engine = RandomEngine::seeded(5);
    let pos = Position::startpos();
    let first: Vec<_> = (0..8)
        .map(|_| engine.search(&pos, SearchLimits::depth(1)).best_move)
        .collect();
    engine.new_game();
    let again: Vec<_> = (0..8)
        .map(|_| engine.search(&pos, SearchLimits::depth(1)).best_move)
        .collect();
    assert_eq!(first, again);
}
