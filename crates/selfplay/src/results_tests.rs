use super::*;

fn sample() -> MatchResult {
    let mut result = MatchResult::new("alphabeta", "random");
    result.record(GameResult::Win);
    result.record(GameResult::Draw);
    result.games.push(GameRecord {
        white: "alphabeta".into(),
        black: "random".into(),
        result: GameResult::Win,
        termination: Termination::Checkmate,
        moves: vec!["e3e4".into(), "d6d5".into()],
    });
    result
}

#[test]
fn test_score() {
    let result = sample();
    assert_eq!(result.total_games(), 2);
    assert!((result.score() - 0.75).abs() < 1e-9);
    assert_eq!(MatchResult::default().score(), 0.5);
}

#[test]
fn test_flip() {
    assert_eq!(GameResult::Win.flip(), GameResult::Loss);
    assert_eq!(GameResult::Draw.flip(), GameResult::Draw);
}

#[test]
fn test_json_round_trip_through_file() {
    let result = sample();
    let path = std::env::temp_dir().join(format!("selfplay_results_{}.json", std::process::id()));
    result.save(&path).unwrap();
    let loaded = MatchResult::load(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, result);
}

#[test]
fn test_termination_serializes_snake_case() {
    let json = serde_json::to_string(&Termination::CountingExpired).unwrap();
    assert_eq!(json, "\"counting_expired\"");
}

#[test]
fn test_report_mentions_each_game() {
    let report = sample().report();
    assert!(report.contains("alphabeta vs random"));
    assert!(report.contains("Checkmate"));
    assert!(report.contains("score 75.0%"));
}
