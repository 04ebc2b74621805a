use super::*;

#[test]
fn test_empty_file_gives_defaults() {
    let settings = EngineSettings::from_toml_str("").unwrap();
    assert_eq!(settings, EngineSettings::default());
    assert_eq!(settings.budget(Difficulty::Medium), Difficulty::Medium.budget());
}

#[test]
fn test_overrides_apply_per_difficulty() {
    let settings = EngineSettings::from_toml_str(
        r#"
        tt_capacity = 1024
        book = "books/makruk.json"
        seed = 11

        [difficulty.hard]
        depth = 5
        node_budget = 250000
        "#,
    )
    .unwrap();

    assert_eq!(settings.tt_capacity, 1024);
    assert_eq!(settings.book, Some(PathBuf::from("books/makruk.json")));
    assert_eq!(settings.seed, Some(11));
    assert_eq!(
        settings.budget(Difficulty::Hard),
        SearchBudget {
            depth: 5,
            node_budget: 250_000
        }
    );
    assert_eq!(settings.budget(Difficulty::Easy), Difficulty::Easy.budget());
}

#[test]
fn test_rejects_bad_settings() {
    assert!(matches!(
        EngineSettings::from_toml_str("tt_capacity = 0"),
        Err(ConfigError::ZeroCapacity)
    ));
    assert!(matches!(
        EngineSettings::from_toml_str("tt_capacity = \"big\""),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        EngineSettings::from_toml_str("unknown_key = 1"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = EngineSettings::load("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
