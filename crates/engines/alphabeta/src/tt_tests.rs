use super::*;

fn mv(from: u8, to: u8) -> Option<Move> {
    Some(Move::new(from, to))
}

#[test]
fn test_capacity_rounds_up_to_power_of_two() {
    assert_eq!(TranspositionTable::new(1000).capacity(), 1024);
    assert_eq!(TranspositionTable::new(0).capacity(), 1);
    assert!(TranspositionTable::default().is_empty());
}

#[test]
fn test_store_and_probe_exact() {
    let mut tt = TranspositionTable::new(64);
    tt.store(0xABCD, 3, 42, Bound::Exact, mv(1, 2), 0);
    assert_eq!(
        tt.probe(0xABCD, 3, -100, 100, 0),
        Probe::Cutoff {
            score: 42,
            best_move: mv(1, 2)
        }
    );
    assert_eq!(tt.len(), 1);
}

#[test]
fn test_shallow_entry_only_hints() {
    let mut tt = TranspositionTable::new(64);
    tt.store(7, 1, 10, Bound::Exact, mv(3, 4), 0);
    assert_eq!(tt.probe(7, 2, -100, 100, 0), Probe::Hint(mv(3, 4)));
    assert_eq!(tt.probe(8, 0, -100, 100, 0), Probe::Miss);
}

#[test]
fn test_bounds_narrow_the_window() {
    let mut tt = TranspositionTable::new(64);
    tt.store(1, 2, 30, Bound::Lower, None, 0);
    assert_eq!(
        tt.probe(1, 2, 0, 100, 0),
        Probe::Narrowed {
            alpha: 30,
            beta: 100,
            best_move: None
        }
    );
    // Lower bound above beta settles the node.
    assert!(matches!(tt.probe(1, 2, 0, 20, 0), Probe::Cutoff { score: 30, .. }));

    tt.store(2, 2, -30, Bound::Upper, None, 0);
    assert_eq!(
        tt.probe(2, 2, -100, 100, 0),
        Probe::Narrowed {
            alpha: -100,
            beta: -30,
            best_move: None
        }
    );
    assert!(matches!(tt.probe(2, 2, -20, 100, 0), Probe::Cutoff { score: -30, .. }));
}

#[test]
fn test_deeper_entry_survives_shallow_store_in_same_generation() {
    let mut tt = TranspositionTable::new(1);
    tt.store(10, 4, 1, Bound::Exact, mv(0, 1), 0);
    // Different key, same slot, shallower: rejected.
    tt.store(11, 2, 2, Bound::Exact, mv(0, 2), 0);
    assert_eq!(tt.get(10).map(|e| e.depth), Some(4));
    assert!(tt.get(11).is_none());

    // Equal depth replaces.
    tt.store(11, 4, 3, Bound::Exact, mv(0, 3), 0);
    assert!(tt.get(10).is_none());
    assert_eq!(tt.get(11).map(|e| e.score), Some(3));
}

#[test]
fn test_older_generation_is_replaced() {
    let mut tt = TranspositionTable::new(1);
    tt.store(10, 6, 1, Bound::Exact, None, 0);
    tt.new_generation();
    tt.store(11, 1, 2, Bound::Exact, None, 0);
    let entry = tt.get(11).unwrap();
    assert_eq!(entry.generation, tt.generation());
    assert!(tt.get(10).is_none());
}

#[test]
fn test_same_key_always_replaced() {
    let mut tt = TranspositionTable::new(4);
    tt.store(5, 6, 1, Bound::Exact, None, 0);
    tt.store(5, 1, 9, Bound::Upper, None, 0);
    assert_eq!(tt.get(5).map(|e| (e.depth, e.score)), Some((1, 9)));
}

#[test]
fn test_mate_scores_are_ply_independent() {
    let mut tt = TranspositionTable::new(16);
    // Mate found 5 plies from the root, stored at ply 3.
    tt.store(99, 2, MATE - 5, Bound::Exact, None, 3);
    assert_eq!(tt.get(99).map(|e| e.score), Some(MATE - 2));
    // Reached again at ply 1: mate is now 3 plies from the root.
    assert!(matches!(tt.probe(99, 2, -MATE, MATE, 1), Probe::Cutoff { score, .. } if score == MATE - 3));
    assert_eq!(score_from_tt(score_to_tt(-MATE + 7, 4), 4), -MATE + 7);
    assert_eq!(score_to_tt(120, 9), 120);
}

#[test]
fn test_clear_empties_table() {
    let mut tt = TranspositionTable::new(8);
    tt.store(1, 1, 1, Bound::Exact, None, 0);
    tt.new_generation();
    tt.clear();
    assert!(tt.is_empty());
    assert_eq!(tt.generation(), 0);
}
