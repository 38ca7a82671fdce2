//! Risk-assignment configuration.

use serde::{Deserialize, Serialize};

use crate::error::{RouteError, RouteResult};

/// Parameters of hazard-proximity risk assignment.
///
/// # Example
/// ```
/// use riskroute::config::RiskConfig;
///
/// let config = RiskConfig::default();
/// assert_eq!(config.influence_radius, 50.0);
/// assert_eq!(config.unit_risk, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Radius in meters within which a hazard affects network elements.
    /// Default 50.
    pub influence_radius: f64,

    /// Failure probability assigned to an affected element by a hazard of
    /// severity 1.0. Default 0.5.
    pub unit_risk: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            influence_radius: 50.0,
            unit_risk: 0.5,
        }
    }
}

impl RiskConfig {
    /// Check parameter ranges.
    pub fn validate(&self) -> RouteResult<()> {
        if !self.influence_radius.is_finite() || self.influence_radius <= 0.0 {
            return Err(RouteError::InvalidConfig(format!(
                "influence_radius must be finite and positive, got {}",
                self.influence_radius
            )));
        }
        if !self.unit_risk.is_finite() || !(0.0..=1.0).contains(&self.unit_risk) {
            return Err(RouteError::InvalidConfig(format!(
                "unit_risk must be in [0, 1], got {}",
                self.unit_risk
            )));
        }
        Ok(())
    }
}
