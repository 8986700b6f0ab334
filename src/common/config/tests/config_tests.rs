//! Unit tests for common-config crate

use common_config::{OptimizerSettings, RenderSettings, RiffleConfig};

#[test]
fn test_riffle_config_default() {
    let config = RiffleConfig::default();

    assert!(config.optimizer.enabled);
    assert_eq!(config.optimizer.max_passes, 10);
    assert!(!config.optimizer.trace);

    assert_eq!(config.render.max_depth, 1000);
}

#[test]
fn test_optimizer_settings_default() {
    let settings = OptimizerSettings::default();

    assert!(settings.enabled);
    assert_eq!(settings.max_passes, 10);
    assert!(!settings.trace);
}

#[test]
fn test_render_settings_default() {
    let settings = RenderSettings::default();

    assert_eq!(settings.max_depth, 1000);
}

#[test]
fn test_riffle_config_serialization() {
    let mut config = RiffleConfig::default();
    config.optimizer.enabled = false;
    config.optimizer.max_passes = 3;
    config.optimizer.trace = true;
    config.render.max_depth = 64;

    let json = serde_json::to_string(&config).unwrap();
    let restored: RiffleConfig = serde_json::from_str(&json).unwrap();

    assert!(!restored.optimizer.enabled);
    assert_eq!(restored.optimizer.max_passes, 3);
    assert!(restored.optimizer.trace);
    assert_eq!(restored.render.max_depth, 64);
}
