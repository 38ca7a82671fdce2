//! Routing policies and their traversal cost functions.
//!
//! Policies are a closed enumeration selected by value; the search
//! algorithm stays a single parameterized implementation instead of four
//! near-duplicates. Each policy maps an edge and (optionally) its risk
//! to a traversal cost, where `None` means the arc is blocked.

use serde::{Deserialize, Serialize};

use crate::config::CostConfig;
use crate::model::Edge;


/// The four fixed (cost function, hard filter) combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingPolicy {
    /// Pure physical distance, risk ignored.
    ShortestDistance,
    /// Uninformed search over `length * (1 + risk * K)`.
    WeightedDijkstra,
    /// Informed (straight-line heuristic) search over the same weighted
    /// cost. The heuristic never overestimates because every policy cost
    /// is at least the physical length.
    WeightedAstar,
    /// Physical distance, but edges with risk at or above the safety
    /// threshold are refused outright.
    SafetyFiltered,
}

impl RoutingPolicy {
    /// All policies, in the order the orchestrator runs them.
    pub const ALL: [RoutingPolicy; 4] = [
        RoutingPolicy::ShortestDistance,
        RoutingPolicy::WeightedDijkstra,
        RoutingPolicy::WeightedAstar,
        RoutingPolicy::SafetyFiltered,
    ];

    /// Stable name used as the response map key.
    pub fn name(&self) -> &'static str {
        match self {
            RoutingPolicy::ShortestDistance => "shortest_distance",
            RoutingPolicy::WeightedDijkstra => "weighted_dijkstra",
            RoutingPolicy::WeightedAstar => "weighted_astar",
            RoutingPolicy::SafetyFiltered => "safety_filtered",
        }
    }

    /// Whether the search should order its frontier by cost plus a
    /// straight-line distance estimate to the target.
    pub fn uses_heuristic(&self) -> bool {
        matches!(self, RoutingPolicy::WeightedAstar)
    }
}

/// Traversal cost of one adjacency arc under a policy, or `None` if the
/// arc is blocked.
///
/// Reverse traversal of a oneway edge is blocked unconditionally; risk
/// weighting scales costs but must never turn a blocked direction into a
/// traversable one, or vice versa.
pub fn arc_cost(
    policy: RoutingPolicy,
    edge: &Edge,
    reversed: bool,
    risk: f64,
    config: &CostConfig,
) -> Option<f64> {
    if reversed && edge.oneway {
        return None;
    }
    match policy {
        RoutingPolicy::ShortestDistance => Some(edge.length),
        RoutingPolicy::WeightedDijkstra | RoutingPolicy::WeightedAstar => {
            Some(edge.length * (1.0 + risk * config.risk_weight))
        }
        RoutingPolicy::SafetyFiltered => {
            if risk >= config.safety_threshold {
                None
            } else {
                Some(edge.length)
            }
        }
    }
}
