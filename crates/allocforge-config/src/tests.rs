//! Tests for allocator configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        tie_break = "heavier_first"
        environment_mode = "full_assert"
        assert_tolerance = 1e-6
        batch_thread_count = { count = 8 }
    "#;

    let config = AllocatorConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.tie_break, TieBreak::HeavierFirst);
    assert_eq!(config.environment_mode, EnvironmentMode::FullAssert);
    assert_eq!(config.assert_tolerance, 1e-6);
    assert_eq!(config.batch_thread_count, BatchThreadCount::Count(8));
    assert!(config.is_asserted());
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        tie_break: input_order
        batch_thread_count: none
    "#;

    let config = AllocatorConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.tie_break, TieBreak::InputOrder);
    assert_eq!(config.batch_thread_count, BatchThreadCount::None);
    assert_eq!(config.assert_tolerance, DEFAULT_ASSERT_TOLERANCE);
}

#[test]
fn test_empty_toml_is_default() {
    let config = AllocatorConfig::from_toml_str("").unwrap();
    assert_eq!(config, AllocatorConfig::default());
    assert!(!config.is_asserted());
}

#[test]
fn test_builder() {
    let config = AllocatorConfig::new()
        .with_tie_break(TieBreak::HeavierFirst)
        .with_environment_mode(EnvironmentMode::FullAssert)
        .with_assert_tolerance(1e-3)
        .with_batch_thread_count(BatchThreadCount::Count(2));

    assert_eq!(config.tie_break, TieBreak::HeavierFirst);
    assert_eq!(config.assert_tolerance, 1e-3);
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_tolerance() {
    let err = AllocatorConfig::from_toml_str("assert_tolerance = -1.0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_zero_threads_rejected() {
    let err = AllocatorConfig::from_toml_str("batch_thread_count = { count = 0 }").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_unknown_tie_break() {
    let err = AllocatorConfig::from_toml_str(r#"tie_break = "random""#).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file() {
    let err = AllocatorConfig::load("/nonexistent/allocforge.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_from_file_by_extension() {
    let dir = tempfile::tempdir().unwrap();

    let yaml_path = dir.path().join("allocforge.yaml");
    std::fs::write(&yaml_path, "tie_break: heavier_first\n").unwrap();
    let config = AllocatorConfig::from_file(&yaml_path).unwrap();
    assert_eq!(config.tie_break, TieBreak::HeavierFirst);

    let toml_path = dir.path().join(DEFAULT_CONFIG_FILE);
    std::fs::write(&toml_path, "environment_mode = \"full_assert\"\n").unwrap();
    let config = AllocatorConfig::from_file(&toml_path).unwrap();
    assert!(config.is_asserted());
}
