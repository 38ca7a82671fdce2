//! Tuning parameters for the cost and risk models.
//!
//! The risk-amplification weight and the safety threshold come from
//! observed behavior of the deployed system, not from a formal model, so
//! they are carried as configurable values with the historical defaults
//! rather than as constants.

mod cost;
mod risk;

#[cfg(test)]
mod tests;

pub use cost::CostConfig;
pub use risk::RiskConfig;
