use super::*;

fn s(x: i8, y: i8) -> u8 {
    sq(x, y).unwrap()
}

#[test]
fn test_fish_threatens_diagonals_only() {
    let pos = Position::from_fen("3k4/8/8/8/3P4/8/8/4K3 w").unwrap();
    let mut attacks = attacks_from(&pos, s(3, 4));
    attacks.sort_unstable();
    assert_eq!(attacks, vec![s(2, 3), s(4, 3)]);
}

#[test]
fn test_horse_attacks() {
    // Horse on e4 attacks 8 squares, in the corner only 2.
    let pos = Position::from_fen("3k4/8/8/8/4N3/8/8/N3K3 w").unwrap();
    assert_eq!(attacks_from(&pos, s(4, 4)).len(), 8);
    assert_eq!(attacks_from(&pos, s(0, 7)).len(), 2);
}

#[test]
fn test_boat_ray_stops_at_blocker() {
    let pos = Position::from_fen("3k4/8/8/8/r7/8/8/R3K3 w").unwrap();
    let attacks = attacks_from(&pos, s(0, 7));
    assert!(attacks.contains(&s(0, 4))); // blocker itself
    assert!(!attacks.contains(&s(0, 3)));
    assert!(attacks.contains(&s(4, 7))); // own king is defended, not capturable
    assert!(!attacks.contains(&s(5, 7)));
}

#[test]
fn test_ouk_specials_are_not_threats() {
    let pos = Position::from_fen("3k4/8/8/8/8/8/8/3QK3 w ouk").unwrap();
    assert!(!attacks_from(&pos, s(4, 7)).contains(&s(3, 5)));
    assert!(!attacks_from(&pos, s(3, 7)).contains(&s(3, 5)));
}

#[test]
fn test_empty_square_has_no_attacks() {
    let pos = Position::startpos();
    assert!(attacks_from(&pos, s(4, 4)).is_empty());
}

#[test]
fn test_attacks_agree_with_square_attacked() {
    let fens = [
        crate::board::START_FEN,
        "k3r3/8/8/2n5/8/4R3/3B4/4K3 w",
        "r2k1b1r/3q4/pp1p1ppp/2pbn3/3PNn2/PP1Q1P1P/4B3/R2K1B1R b",
    ];
    for fen in fens {
        let pos = Position::from_fen(fen).unwrap();
        for color in [Color::White, Color::Black] {
            for target in 0..64u8 {
                let by_scan = (0..64u8).any(|from| {
                    matches!(pos.piece_at(from), Some(pc) if pc.color == color)
                        && attacks_from(&pos, from).contains(&target)
                });
                assert_eq!(
                    pos.is_square_attacked(target, color),
                    by_scan,
                    "{fen}: square {} by {color:?}",
                    sq_to_coord(target)
                );
            }
        }
    }
}
