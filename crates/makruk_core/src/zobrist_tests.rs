use super::*;
use crate::board::Position;
use crate::types::Move;

#[test]
fn test_zobrist_keys_unique() {
    let mut seen = std::collections::HashSet::new();

    for color in 0..2 {
        for piece in 0..6 {
            for sq in 0..64 {
                let key = ZOBRIST.pieces[color][piece][sq];
                assert!(seen.insert(key), "Duplicate Zobrist key found");
            }
        }
    }

    assert!(
        seen.insert(ZOBRIST.side_to_move),
        "Side to move key collision"
    );

    for color in 0..2 {
        for i in 0..2 {
            assert!(
                seen.insert(ZOBRIST.first_move[color][i]),
                "First-move key collision"
            );
        }
    }
}

#[test]
fn test_key_depends_on_side_to_move() {
    let white = Position::startpos();
    let mut black = white.clone();
    black.side_to_move = Color::Black;
    assert_ne!(white.key(), black.key());
}

#[test]
fn test_key_restored_after_undo() {
    let mut pos = Position::startpos();
    let before = pos.key();
    // White fish a3 -> a4
    pos.make_move(Move::new(40, 32)).unwrap();
    assert_ne!(pos.key(), before);
    pos.undo();
    assert_eq!(pos.key(), before);
}

#[test]
fn test_first_move_rights_only_count_under_ouk() {
    let makruk = Position::from_fen("3k4/8/8/8/8/8/8/4K3 w makruk").unwrap();
    let mut moved = makruk.clone();
    for pc in moved.board.iter_mut().flatten() {
        pc.has_moved = true;
    }
    assert_eq!(makruk.key(), moved.key());

    let ouk = Position::from_fen("3k4/8/8/8/8/8/8/4K3 w ouk").unwrap();
    let mut ouk_moved = ouk.clone();
    for pc in ouk_moved.board.iter_mut().flatten() {
        pc.has_moved = true;
    }
    assert_ne!(ouk.key(), ouk_moved.key());
}
