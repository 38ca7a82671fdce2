//! Cost-model configuration.

use serde::{Deserialize, Serialize};

use crate::error::{RouteError, RouteResult};

/// Parameters of the per-edge traversal cost functions.
///
/// # Example
/// ```
/// use riskroute::config::CostConfig;
///
/// let config = CostConfig::default();
/// assert_eq!(config.risk_weight, 100.0);
/// assert_eq!(config.safety_threshold, 0.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostConfig {
    /// Risk amplification constant `K` in `length * (1 + risk * K)`.
    ///
    /// Default 100: at risk 0.5 the edge cost is multiplied by 51, so even
    /// moderate risk dominates over modest detours and the weighted
    /// policies diverge meaningfully from pure-distance routing.
    pub risk_weight: f64,

    /// Risk at or above which the safety-filtered policy refuses an edge
    /// outright. Default 0.5.
    pub safety_threshold: f64,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            risk_weight: 100.0,
            safety_threshold: 0.5,
        }
    }
}

impl CostConfig {
    /// Check parameter ranges.
    pub fn validate(&self) -> RouteResult<()> {
        if !self.risk_weight.is_finite() || self.risk_weight < 0.0 {
            return Err(RouteError::InvalidConfig(format!(
                "risk_weight must be finite and non-negative, got {}",
                self.risk_weight
            )));
        }
        if !self.safety_threshold.is_finite()
            || self.safety_threshold <= 0.0
            || self.safety_threshold > 1.0
        {
            return Err(RouteError::InvalidConfig(format!(
                "safety_threshold must be in (0, 1], got {}",
                self.safety_threshold
            )));
        }
        Ok(())
    }
}
