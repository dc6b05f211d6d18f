//! Tests for recommender configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        decks_to_generate = 3
        decks_to_return = 10

        [pruning]
        enabled = true
        beam_width = 75

        [diversity]
        enabled = true
        overlap_limit = 20
    "#;

    let config = RecommenderConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.decks_to_generate, 3);
    assert_eq!(config.decks_to_return, 10);
    assert_eq!(config.beam_width(), Some(75));
    assert_eq!(config.overlap_limit(), Some(20));
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        decks_to_generate: 2
        decks_to_return: 4
        pruning:
          enabled: false
        diversity:
          enabled: true
    "#;

    let config = RecommenderConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.decks_to_generate, 2);
    assert_eq!(config.decks_to_return, 4);
    assert_eq!(config.beam_width(), None);
    assert_eq!(config.overlap_limit(), Some(23));
}

#[test]
fn test_defaults() {
    let config = RecommenderConfig::default();
    assert_eq!(config.decks_to_generate, 4);
    assert_eq!(config.decks_to_return, 5);
    assert_eq!(config.beam_width(), Some(150));
    assert_eq!(config.overlap_limit(), None);
    config.validate().unwrap();
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config = RecommenderConfig::from_toml_str("").unwrap();
    assert_eq!(config.decks_to_generate, 4);
    assert_eq!(config.beam_width(), Some(150));
}

#[test]
fn test_builder() {
    let config = RecommenderConfig::new()
        .with_decks_to_generate(2)
        .with_decks_to_return(1)
        .with_beam_width(40)
        .with_diversity(16);

    assert_eq!(config.decks_to_generate, 2);
    assert_eq!(config.decks_to_return, 1);
    assert_eq!(config.beam_width(), Some(40));
    assert_eq!(config.overlap_limit(), Some(16));
    config.validate().unwrap();
}

#[test]
fn test_validate_rejects_out_of_range_generation() {
    let config = RecommenderConfig::new().with_decks_to_generate(5);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    let config = RecommenderConfig::new().with_decks_to_generate(0);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validate_rejects_out_of_range_return_count() {
    let config = RecommenderConfig::new().with_decks_to_return(21);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validate_rejects_zero_beam_width() {
    let config = RecommenderConfig::new().with_beam_width(0);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_without_pruning_keeps_width_but_disables() {
    let config = RecommenderConfig::new().without_pruning();
    assert_eq!(config.beam_width(), None);
    config.validate().unwrap();
}
