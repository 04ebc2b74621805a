use super::*;
use makruk_core::replay;
use rand::rngs::StdRng;
use rand::SeedableRng;

const BOOK: &str = r#"{
    "": ["e3e4", "c3c4", "b1d2"],
    "e3e4": ["d6d5", "e6e5"],
    "e3e4d6d5": ["e4e5", "a1a5"]
}"#;

fn m(txt: &str) -> Move {
    parse_algebraic(txt).unwrap()
}

#[test]
fn test_parses_json_book() {
    let book = OpeningBook::from_json(BOOK).unwrap();
    assert_eq!(book.len(), 3);
    assert_eq!(book.candidates("e3e4"), ["d6d5", "e6e5"]);
    assert!(book.candidates("h3h4").is_empty());
}

#[test]
fn test_rejects_malformed_entries() {
    assert!(matches!(
        OpeningBook::from_json(r#"{ "": ["e3"] }"#),
        Err(BookError::MalformedMove { .. })
    ));
    assert!(matches!(
        OpeningBook::from_json("[1, 2]"),
        Err(BookError::Json(_))
    ));
}

#[test]
fn test_pick_samples_among_candidates() {
    let book = OpeningBook::from_json(BOOK).unwrap();
    let pos = Position::startpos();
    let mut rng = StdRng::seed_from_u64(3);
    let allowed = [m("e3e4"), m("c3c4"), m("b1d2")];
    let mut seen = std::collections::HashSet::new();
    for _ in 0..64 {
        let mv = book.pick(&pos, &mut rng).unwrap();
        assert!(allowed.contains(&mv));
        seen.insert(mv);
    }
    assert_eq!(seen.len(), 3, "all candidates should come up");
}

#[test]
fn test_pick_is_reproducible_with_same_seed() {
    let book = OpeningBook::from_json(BOOK).unwrap();
    let pos = Position::startpos();
    let a: Vec<_> = {
        let mut rng = StdRng::seed_from_u64(42);
        (0..10).map(|_| book.pick(&pos, &mut rng)).collect()
    };
    let b: Vec<_> = {
        let mut rng = StdRng::seed_from_u64(42);
        (0..10).map(|_| book.pick(&pos, &mut rng)).collect()
    };
    assert_eq!(a, b);
}

#[test]
fn test_illegal_candidates_are_skipped() {
    let book = OpeningBook::from_json(BOOK).unwrap();
    let pos = replay(Default::default(), "e3e4 d6d5").unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    // a1a5 is blocked by the fish on a3.
    for _ in 0..16 {
        assert_eq!(book.pick(&pos, &mut rng), Some(m("e4e5")));
    }
}

#[test]
fn test_miss_and_fen_positions_fall_through() {
    let book = OpeningBook::from_json(BOOK).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let pos = replay(Default::default(), "h3h4").unwrap();
    assert_eq!(book.pick(&pos, &mut rng), None);

    let setup = Position::from_fen("3k4/8/8/8/8/4P3/8/4K3 w").unwrap();
    assert_eq!(book.pick(&setup, &mut rng), None);
}

#[test]
fn test_insert_and_round_trip_json() {
    let mut book = OpeningBook::new();
    book.insert("", m("e3e4"));
    book.insert("e3e4", m("d6d5"));
    let json = book.to_json().unwrap();
    assert_eq!(OpeningBook::from_json(&json).unwrap(), book);
}
