use super::*;

#[test]
fn test_partial_toml_uses_defaults() {
    let config = MatchConfig::from_toml(
        r#"
        engine1 = "rollout:20:1"
        num_games = 4
        seed = 99
        "#,
    )
    .unwrap();

    assert_eq!(config.engine1, "rollout:20:1");
    assert_eq!(config.engine2, "random");
    assert_eq!(config.num_games, 4);
    assert_eq!(config.seed, Some(99));
    assert_eq!(config.max_plies, DEFAULT_MAX_PLIES);
    assert!(config.alternate_colors);
    assert_eq!(config.output, None);
}

#[test]
fn test_bad_toml_is_reported() {
    let err = MatchConfig::from_toml("num_games = \"many\"").unwrap_err();
    assert!(err.starts_with("Failed to parse config"));
}

#[test]
fn test_missing_file_is_reported() {
    let err = MatchConfig::load(Path::new("/nonexistent/selfplay.toml")).unwrap_err();
    assert!(err.starts_with("Failed to read"));
}
