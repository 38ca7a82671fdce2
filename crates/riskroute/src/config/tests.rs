//! Configuration validation tests.

use super::{CostConfig, RiskConfig};

#[test]
fn test_cost_config_defaults_valid() {
    assert!(CostConfig::default().validate().is_ok());
}

#[test]
fn test_cost_config_rejects_bad_values() {
    let negative_weight = CostConfig {
        risk_weight: -1.0,
        ..CostConfig::default()
    };
    assert!(negative_weight.validate().is_err());

    let nan_weight = CostConfig {
        risk_weight: f64::NAN,
        ..CostConfig::default()
    };
    assert!(nan_weight.validate().is_err());

    let zero_threshold = CostConfig {
        safety_threshold: 0.0,
        ..CostConfig::default()
    };
    assert!(zero_threshold.validate().is_err());

    let over_threshold = CostConfig {
        safety_threshold: 1.5,
        ..CostConfig::default()
    };
    assert!(over_threshold.validate().is_err());
}

#[test]
fn test_cost_config_zero_weight_allowed() {
    // K = 0 degrades weighted policies to pure distance; legal.
    let config = CostConfig {
        risk_weight: 0.0,
        ..CostConfig::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_risk_config_defaults_valid() {
    assert!(RiskConfig::default().validate().is_ok());
}

#[test]
fn test_risk_config_rejects_bad_values() {
    let zero_radius = RiskConfig {
        influence_radius: 0.0,
        ..RiskConfig::default()
    };
    assert!(zero_radius.validate().is_err());

    let over_unit = RiskConfig {
        unit_risk: 1.1,
        ..RiskConfig::default()
    };
    assert!(over_unit.validate().is_err());

    let negative_unit = RiskConfig {
        unit_risk: -0.1,
        ..RiskConfig::default()
    };
    assert!(negative_unit.validate().is_err());
}
