//! Search result types.

use crate::model::{EdgeId, NodeId};

/// Result of one shortest-path invocation.
///
/// "No route" is a normal outcome (`found == false`), not an error: the
/// search exhausted its frontier without reaching the target under the
/// active exclusion set and policy filter.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// Nodes visited from start to end (single element when start == end;
    /// empty when no route was found).
    pub nodes: Vec<NodeId>,
    /// Edges traversed, in order; one fewer than `nodes`.
    pub edges: Vec<EdgeId>,
    /// Accumulated policy cost (infinite when no route was found).
    pub total_cost: f64,
    /// Physical length in meters of the traversed edges.
    pub total_length: f64,
    /// Nodes expanded before termination.
    pub nodes_expanded: usize,
    /// Whether the target was reached.
    pub found: bool,
}

impl PathResult {
    pub(crate) fn found(
        nodes: Vec<NodeId>,
        edges: Vec<EdgeId>,
        total_cost: f64,
        total_length: f64,
        nodes_expanded: usize,
    ) -> Self {
        Self {
            nodes,
            edges,
            total_cost,
            total_length,
            nodes_expanded,
            found: true,
        }
    }

    pub(crate) fn no_route(nodes_expanded: usize) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            total_cost: f64::INFINITY,
            total_length: 0.0,
            nodes_expanded,
            found: false,
        }
    }

    /// Number of edges in the path.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
