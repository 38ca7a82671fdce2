//! Multi-policy route orchestration.
//!
//! Runs every routing policy against one start/end pair and one exclusion
//! set, each inside its own failure boundary: a "no route" or an internal
//! failure in one policy never suppresses the others. The caller always
//! receives a complete map over all policies, each entry either a route
//! or an explicit absence.

mod types;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::assemble::{assemble, RouteGeometry};
use crate::config::CostConfig;
use crate::error::{RouteError, RouteResult};
use crate::model::{ExclusionSet, Graph, NodeId};
use crate::policy::RoutingPolicy;
use crate::risk::RiskMap;
use crate::search::shortest_path;
use crate::simulate::FailureSimulator;

pub use types::{
    NoRouteReason, PolicyOutcome, RouteRequest, RouteResponse, RouteSet, SimulationReport,
};

/// Run all four policies for one start/end pair.
///
/// Endpoint ids are validated once up front; an unknown endpoint is the
/// only hard error. Per-policy wall-clock durations are recorded in the
/// outcomes for observability.
pub fn route_all(
    graph: &Graph,
    risk: &RiskMap,
    start: NodeId,
    end: NodeId,
    exclusion: &ExclusionSet,
    config: &CostConfig,
) -> RouteResult<RouteSet> {
    if !graph.contains_node(start) {
        return Err(RouteError::UnknownEndpoint(start));
    }
    if !graph.contains_node(end) {
        return Err(RouteError::UnknownEndpoint(end));
    }

    let mut routes: RouteSet = BTreeMap::new();
    for policy in RoutingPolicy::ALL {
        let started = Instant::now();
        let outcome = run_policy(graph, risk, start, end, policy, exclusion, config, started);
        debug!(
            policy = policy.name(),
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            found = matches!(outcome, PolicyOutcome::Route { .. }),
            "policy complete"
        );
        routes.insert(policy, outcome);
    }
    Ok(routes)
}

#[allow(clippy::too_many_arguments)]
fn run_policy(
    graph: &Graph,
    risk: &RiskMap,
    start: NodeId,
    end: NodeId,
    policy: RoutingPolicy,
    exclusion: &ExclusionSet,
    config: &CostConfig,
    started: Instant,
) -> PolicyOutcome {
    let path = match shortest_path(graph, start, end, policy, risk, exclusion, config) {
        Ok(path) => path,
        Err(err) => {
            // Isolation boundary: report and move on to the next policy.
            warn!(policy = policy.name(), error = %err, "policy search failed");
            return PolicyOutcome::NoRoute {
                reason: NoRouteReason::SearchFailed,
                compute_time: started.elapsed(),
            };
        }
    };

    if !path.found {
        return PolicyOutcome::NoRoute {
            reason: NoRouteReason::Exhausted,
            compute_time: started.elapsed(),
        };
    }

    if path.edges.is_empty() {
        // start == end: an empty, zero-length route, not an absence.
        return PolicyOutcome::Route {
            geometry: RouteGeometry {
                points: Vec::new(),
                total_length: 0.0,
            },
            edges: Vec::new(),
            total_length: 0.0,
            compute_time: started.elapsed(),
        };
    }

    match assemble(graph, &path) {
        Some(geometry) => PolicyOutcome::Route {
            total_length: geometry.total_length,
            geometry,
            edges: path.edges,
            compute_time: started.elapsed(),
        },
        None => PolicyOutcome::NoRoute {
            reason: NoRouteReason::DegenerateGeometry,
            compute_time: started.elapsed(),
        },
    }
}

/// Resolve a presentation-layer request (positions, optional exclusion
/// override) to nearest nodes and route it.
pub fn route_request(
    graph: &Graph,
    risk: &RiskMap,
    request: &RouteRequest,
    config: &CostConfig,
) -> RouteResult<RouteResponse> {
    let start = graph.nearest_node(request.start)?;
    let end = graph.nearest_node(request.end)?;
    let exclusion = request.exclusion.clone().unwrap_or_default();

    info!(start, end, "routing request resolved");
    let routes = route_all(graph, risk, start, end, &exclusion, config)?;
    Ok(RouteResponse {
        start_node: start,
        end_node: end,
        routes,
    })
}

/// Run one failure simulation and package the result for the presentation
/// layer, which may feed the exclusions into its next routing request.
pub fn simulate_failures(
    graph: &Graph,
    risk: &RiskMap,
    simulator: &mut FailureSimulator,
) -> SimulationReport {
    let exclusions = simulator.simulate(graph, risk);
    let total_excluded = exclusions.total();
    info!(total_excluded, "failure simulation complete");
    SimulationReport {
        exclusions,
        total_excluded,
    }
}
