use super::*;

fn sample_report() -> MatchReport {
    MatchReport {
        config: MatchConfig {
            engine1: "rollout:4:1".to_string(),
            num_games: 2,
            ..Default::default()
        },
        result: MatchResult {
            wins: 1,
            draws: 1,
            checkmates: 1,
            move_limit_draws: 1,
            ..Default::default()
        },
        games: vec![GameRecord {
            white: "rollout:4:1".to_string(),
            black: "random".to_string(),
            result: GameResult::Win,
            termination: "Checkmate! White wins".to_string(),
            plies: 3,
            moves: vec!["e2e4".to_string(), "f7f6".to_string(), "d1h5".to_string()],
        }],
    }
}

#[test]
fn test_score() {
    let report = sample_report();
    assert_eq!(report.result.total_games(), 2);
    assert!((report.result.score() - 0.75).abs() < 1e-9);
    assert!((MatchResult::new().score() - 0.5).abs() < 1e-9);
}

#[test]
fn test_flipped_result() {
    assert_eq!(GameResult::Win.flipped(), GameResult::Loss);
    assert_eq!(GameResult::Draw.flipped(), GameResult::Draw);
    assert_eq!(GameResult::Loss.notation(), "0-1");
}

#[test]
fn test_save_and_load() {
    let report = sample_report();
    let path = std::env::temp_dir().join(format!("selfplay_report_{}.json", std::process::id()));

    report.save(&path).unwrap();
    let loaded = MatchReport::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, report);
}

#[test]
fn test_text_report() {
    let text = sample_report().generate_report();
    assert!(text.contains("rollout:4:1 vs random"));
    assert!(text.contains("1 wins, 0 losses, 1 draws"));
    assert!(text.contains("Score: 75.0%"));
}
