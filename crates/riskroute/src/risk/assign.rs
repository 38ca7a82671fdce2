//! Risk assignment from hazard proximity.

use serde::Serialize;
use tracing::{debug, info};

use crate::config::RiskConfig;
use crate::model::Graph;

use super::hazard::Hazard;
use super::map::RiskMap;

/// Observability counters for one assignment pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RiskSummary {
    /// Edges with risk > 0 after assignment.
    pub edges_affected: usize,
    /// Nodes with risk > 0 after assignment.
    pub nodes_affected: usize,
    /// Mean edge risk over the whole graph (affected or not).
    pub average_edge_risk: f64,
    /// Maximum edge risk.
    pub max_edge_risk: f64,
}

/// Compute a fresh risk overlay from hazard features.
///
/// Starts from all-zero risk (reset semantics), then for each hazard
/// raises the risk of every edge and node within `config.influence_radius`
/// to the hazard's failure probability, keeping the maximum where hazards
/// overlap. Hazard processing order cannot affect the result. Zero
/// hazards is not an error; the overlay is simply all-zero.
pub fn assign_risk(
    graph: &Graph,
    hazards: &[Hazard],
    config: &RiskConfig,
) -> (RiskMap, RiskSummary) {
    let mut map = RiskMap::new();

    for hazard in hazards {
        let probability = hazard.failure_probability(config.unit_risk);
        if probability <= 0.0 {
            continue;
        }
        let mut touched = 0usize;
        for edge in graph.edges() {
            if hazard.geometry.distance_to_polyline(&edge.geometry) <= config.influence_radius {
                map.raise_edge_risk(edge.id, probability);
                touched += 1;
            }
        }
        for node in graph.nodes() {
            if hazard.geometry.distance_to_point(node.position) <= config.influence_radius {
                map.raise_node_risk(node.id, probability);
                touched += 1;
            }
        }
        debug!(
            severity = hazard.severity,
            probability, touched, "hazard applied"
        );
    }

    let summary = summarize(graph, &map);
    info!(
        hazards = hazards.len(),
        edges_affected = summary.edges_affected,
        nodes_affected = summary.nodes_affected,
        max_edge_risk = summary.max_edge_risk,
        "risk assignment complete"
    );
    (map, summary)
}

fn summarize(graph: &Graph, map: &RiskMap) -> RiskSummary {
    let mut summary = RiskSummary::default();
    let mut total = 0.0;
    for (_, risk) in map.edge_risks() {
        if risk > 0.0 {
            summary.edges_affected += 1;
        }
        total += risk;
        if risk > summary.max_edge_risk {
            summary.max_edge_risk = risk;
        }
    }
    summary.nodes_affected = map.node_risks().filter(|(_, r)| *r > 0.0).count();
    if graph.edge_count() > 0 {
        summary.average_edge_risk = total / graph.edge_count() as f64;
    }
    summary
}
