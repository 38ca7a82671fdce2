//! Orchestrator request/response types.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::assemble::RouteGeometry;
use crate::geometry::Point;
use crate::model::{EdgeId, ExclusionSet, NodeId};
use crate::policy::RoutingPolicy;

/// A routing request from the presentation layer: positions, not node
/// ids, plus an optional exclusion override (typically a prior
/// simulation's output).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub start: Point,
    pub end: Point,
    #[serde(default)]
    pub exclusion: Option<ExclusionSet>,
}

/// Why a policy produced no route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoRouteReason {
    /// Search frontier emptied without reaching the target.
    Exhausted,
    /// A path was found but assembled to fewer than 2 geometry points.
    DegenerateGeometry,
    /// The search itself failed; see logs. Other policies are unaffected.
    SearchFailed,
}

/// Per-policy result: a route or an explicit absence, never silence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PolicyOutcome {
    Route {
        geometry: RouteGeometry,
        edges: Vec<EdgeId>,
        total_length: f64,
        compute_time: Duration,
    },
    NoRoute {
        reason: NoRouteReason,
        compute_time: Duration,
    },
}

impl PolicyOutcome {
    pub fn is_route(&self) -> bool {
        matches!(self, PolicyOutcome::Route { .. })
    }

    /// Total physical length, if a route exists.
    pub fn total_length(&self) -> Option<f64> {
        match self {
            PolicyOutcome::Route { total_length, .. } => Some(*total_length),
            PolicyOutcome::NoRoute { .. } => None,
        }
    }
}

/// Complete map over every policy; the key set always equals
/// [`RoutingPolicy::ALL`].
pub type RouteSet = BTreeMap<RoutingPolicy, PolicyOutcome>;

/// Response to a [`RouteRequest`]: the resolved endpoints and the full
/// per-policy route set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResponse {
    pub start_node: NodeId,
    pub end_node: NodeId,
    pub routes: RouteSet,
}

/// Output of an independently triggered failure simulation; the exclusion
/// set inside can be fed back into the next routing request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub exclusions: ExclusionSet,
    pub total_excluded: usize,
}
