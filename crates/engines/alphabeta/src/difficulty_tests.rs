use super::*;

#[test]
fn test_budgets() {
    let table: Vec<(u8, u64)> = Difficulty::ALL
        .iter()
        .map(|d| {
            let b = d.budget();
            (b.depth, b.node_budget)
        })
        .collect();
    assert_eq!(
        table,
        vec![(1, 2_000), (2, 20_000), (3, 120_000), (4, 400_000)]
    );
}

#[test]
fn test_parse_and_display() {
    assert_eq!("Expert".parse::<Difficulty>(), Ok(Difficulty::Expert));
    assert_eq!(" easy ".parse::<Difficulty>(), Ok(Difficulty::Easy));
    assert!("grandmaster".parse::<Difficulty>().is_err());
    for d in Difficulty::ALL {
        assert_eq!(d.to_string().parse::<Difficulty>(), Ok(d));
    }
}

#[test]
fn test_default_is_hard() {
    assert_eq!(Difficulty::default(), Difficulty::Hard);
}
