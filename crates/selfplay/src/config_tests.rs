use super::*;

#[test]
fn test_defaults() {
    let config = MatchConfig::from_toml_str("").unwrap();
    assert_eq!(config, MatchConfig::default());
    assert_eq!(config.variant().unwrap(), Variant::Makruk);
    assert_eq!(config.search_limits().depth, 2);
    assert_eq!(config.search_limits().node_budget, 20_000);
}

#[test]
fn test_full_config() {
    let config = MatchConfig::from_toml_str(
        r#"
        num_games = 4
        difficulty = "easy"
        max_plies = 120
        alternate_colors = false
        variant = "ouk"
        opening_plies = 2
        seed = 17
        verbose = false

        [budget]
        depth = 3
        node_budget = 5000
        "#,
    )
    .unwrap();
    assert_eq!(config.num_games, 4);
    assert_eq!(config.difficulty, Difficulty::Easy);
    assert_eq!(config.variant().unwrap(), Variant::Ouk);
    let limits = config.search_limits();
    assert_eq!((limits.depth, limits.node_budget), (3, 5000));
    assert!(limits.counting.is_none());
}

#[test]
fn test_rejects_unknown_variant_and_fields() {
    assert!(matches!(
        MatchConfig::from_toml_str("variant = \"shogi\""),
        Err(SelfplayError::UnknownVariant(_))
    ));
    assert!(matches!(
        MatchConfig::from_toml_str("games = 3"),
        Err(SelfplayError::Config(_))
    ));
}
