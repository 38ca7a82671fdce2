//! Hazard-proximity failure-probability assignment.
//!
//! Risk lives in a [`RiskMap`] overlay keyed by element id, never on the
//! graph itself, so concurrent what-if sessions can assign and discard
//! risk against one shared graph.

mod assign;
mod hazard;
mod map;

#[cfg(test)]
mod tests;

pub use assign::{assign_risk, RiskSummary};
pub use hazard::{Hazard, HazardGeometry};
pub use map::RiskMap;
