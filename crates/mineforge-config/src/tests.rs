//! Tests for enumerator configuration.

use super::*;

#[test]
fn test_defaults() {
    let config = EnumerationConfig::default();
    assert_eq!(config.node_limit, None);
    assert_eq!(config.time_limit(), None);
    assert_eq!(config.layer_thread_count, LayerThreadCount::Auto);
    assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
    assert!(config.sort_output);
    assert!(!config.split_islands);
}

#[test]
fn test_empty_toml_matches_default() {
    let config = EnumerationConfig::from_toml_str("").unwrap();
    assert_eq!(config, EnumerationConfig::default());
}

#[test]
fn test_toml_parsing() {
    let toml = r#"
        node_limit = 500
        layer_thread_count = { count = 4 }
        parallel_threshold = 64
        sort_output = false
        split_islands = true

        [termination]
        seconds_spent_limit = 2
        millis_spent_limit = 500
    "#;

    let config = EnumerationConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.node_limit, Some(500));
    assert_eq!(config.layer_thread_count, LayerThreadCount::Count(4));
    assert_eq!(config.parallel_threshold, 64);
    assert!(!config.sort_output);
    assert!(config.split_islands);
    assert_eq!(config.time_limit(), Some(Duration::from_millis(2500)));
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        node_limit: 42
        layer_thread_count: none
        termination:
          millis_spent_limit: 750
    "#;

    let config = EnumerationConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.node_limit, Some(42));
    assert_eq!(config.layer_thread_count, LayerThreadCount::None);
    assert_eq!(config.time_limit(), Some(Duration::from_millis(750)));
    assert!(config.sort_output);
}

#[test]
fn test_zero_threads_rejected() {
    let err = EnumerationConfig::from_toml_str("layer_thread_count = { count = 0 }").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_bad_toml() {
    let err = EnumerationConfig::from_toml_str("node_limit = \"many\"").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file() {
    let err = EnumerationConfig::load("/nonexistent/mineforge.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_builder() {
    let config = EnumerationConfig::new()
        .with_node_limit(10)
        .with_termination_seconds(1)
        .with_termination_millis(20)
        .with_layer_thread_count(LayerThreadCount::Count(2))
        .with_parallel_threshold(8)
        .with_sort_output(false)
        .with_split_islands(true);

    assert_eq!(config.node_limit, Some(10));
    assert_eq!(config.time_limit(), Some(Duration::from_millis(1020)));
    assert_eq!(config.layer_thread_count, LayerThreadCount::Count(2));
    assert_eq!(config.parallel_threshold, 8);
    assert!(!config.sort_output);
    assert!(config.split_islands);
}
