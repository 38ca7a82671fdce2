//! Core shortest-path algorithm.

use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::trace;

use crate::config::CostConfig;
use crate::error::{RouteError, RouteResult};
use crate::model::{EdgeId, ExclusionSet, Graph, NodeId};
use crate::policy::{arc_cost, RoutingPolicy};
use crate::risk::RiskMap;

use super::node::FrontierNode;
use super::types::PathResult;

/// Find the cheapest path from `start` to `end` under one policy.
///
/// Excluded edges, and arcs whose tail or head node is excluded, are
/// skipped at expansion time; the graph itself is untouched. Complexity
/// is O((V + E) log V) regardless of policy, since the policy only
/// changes edge weights.
///
/// # Returns
/// * `Ok(PathResult)` with `found == true` when the target was popped;
///   `start == end` yields an empty, zero-length path.
/// * `Ok(PathResult)` with `found == false` when the frontier emptied
///   first — a normal outcome, not an error.
/// * `Err(RouteError::UnknownEndpoint)` when either endpoint id is not in
///   the graph.
pub fn shortest_path(
    graph: &Graph,
    start: NodeId,
    end: NodeId,
    policy: RoutingPolicy,
    risk: &RiskMap,
    exclusion: &ExclusionSet,
    config: &CostConfig,
) -> RouteResult<PathResult> {
    graph
        .node(start)
        .ok_or(RouteError::UnknownEndpoint(start))?;
    let goal = graph.node(end).ok_or(RouteError::UnknownEndpoint(end))?;

    if start == end {
        return Ok(PathResult::found(vec![start], Vec::new(), 0.0, 0.0, 0));
    }

    let goal_position = goal.position;
    let heuristic = |node: NodeId| -> f64 {
        if !policy.uses_heuristic() {
            return 0.0;
        }
        graph
            .node(node)
            .map(|n| n.position.distance(&goal_position))
            .unwrap_or(0.0)
    };

    let mut open: BinaryHeap<FrontierNode> = BinaryHeap::new();
    let mut g_scores: HashMap<NodeId, f64> = HashMap::new();
    let mut came_from: HashMap<NodeId, (NodeId, EdgeId)> = HashMap::new();
    let mut closed: HashSet<NodeId> = HashSet::new();
    let mut seq: u64 = 0;
    let mut expanded = 0usize;

    open.push(FrontierNode::new(start, 0.0, heuristic(start), seq));
    g_scores.insert(start, 0.0);

    while let Some(current) = open.pop() {
        let current_id = current.node;

        if current_id == end {
            return Ok(reconstruct(
                graph, start, end, &came_from, current.g_score, expanded,
            ));
        }
        if !closed.insert(current_id) {
            continue;
        }
        // Arcs out of an excluded node are all skipped (covers an
        // excluded start node).
        if exclusion.contains_node(current_id) {
            continue;
        }
        expanded += 1;

        let current_g = *g_scores.get(&current_id).unwrap_or(&f64::INFINITY);

        for arc in graph.neighbors(current_id) {
            if exclusion.contains_edge(arc.edge) || exclusion.contains_node(arc.node) {
                continue;
            }
            if closed.contains(&arc.node) {
                continue;
            }
            let Some(edge) = graph.edge(arc.edge) else {
                continue;
            };
            let Some(cost) = arc_cost(policy, edge, arc.reversed, risk.edge_risk(edge.id), config)
            else {
                continue;
            };

            let tentative = current_g + cost;
            let best = *g_scores.get(&arc.node).unwrap_or(&f64::INFINITY);
            if tentative >= best {
                continue;
            }

            came_from.insert(arc.node, (current_id, arc.edge));
            g_scores.insert(arc.node, tentative);
            seq += 1;
            open.push(FrontierNode::new(arc.node, tentative, heuristic(arc.node), seq));
        }
    }

    trace!(
        policy = policy.name(),
        expanded,
        "frontier exhausted without reaching target"
    );
    Ok(PathResult::no_route(expanded))
}

fn reconstruct(
    graph: &Graph,
    start: NodeId,
    end: NodeId,
    came_from: &HashMap<NodeId, (NodeId, EdgeId)>,
    total_cost: f64,
    expanded: usize,
) -> PathResult {
    let mut nodes = vec![end];
    let mut edges = Vec::new();
    let mut cursor = end;
    while cursor != start {
        // Predecessor chain is complete for any popped target.
        let Some(&(parent, edge)) = came_from.get(&cursor) else {
            break;
        };
        nodes.push(parent);
        edges.push(edge);
        cursor = parent;
    }
    nodes.reverse();
    edges.reverse();

    let total_length = edges
        .iter()
        .filter_map(|id| graph.edge(*id))
        .map(|e| e.length)
        .sum();

    PathResult::found(nodes, edges, total_cost, total_length, expanded)
}
