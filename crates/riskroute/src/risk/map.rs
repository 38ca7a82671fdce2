//! Per-session risk overlay.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{EdgeId, NodeId};

/// Failure probabilities for edges and nodes, keyed by element id.
///
/// Elements absent from the map carry risk 0. Values are always clamped
/// to [0, 1]. The map is an overlay on an immutable graph; assignment
/// builds a fresh one instead of mutating shared state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskMap {
    edges: BTreeMap<EdgeId, f64>,
    nodes: BTreeMap<NodeId, f64>,
}

impl RiskMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Risk of an edge (0 when unassigned).
    pub fn edge_risk(&self, id: EdgeId) -> f64 {
        self.edges.get(&id).copied().unwrap_or(0.0)
    }

    /// Risk of a node (0 when unassigned).
    pub fn node_risk(&self, id: NodeId) -> f64 {
        self.nodes.get(&id).copied().unwrap_or(0.0)
    }

    /// Raise an edge's risk to `risk` if higher than the current value.
    ///
    /// Max-aggregation: overlapping hazards never push risk above the
    /// single largest contribution, and assignment order cannot change
    /// the result.
    pub fn raise_edge_risk(&mut self, id: EdgeId, risk: f64) {
        let risk = risk.clamp(0.0, 1.0);
        let current = self.edges.entry(id).or_insert(0.0);
        if risk > *current {
            *current = risk;
        }
    }

    /// Raise a node's risk to `risk` if higher than the current value.
    pub fn raise_node_risk(&mut self, id: NodeId, risk: f64) {
        let risk = risk.clamp(0.0, 1.0);
        let current = self.nodes.entry(id).or_insert(0.0);
        if risk > *current {
            *current = risk;
        }
    }

    /// Edge risks in ascending id order.
    pub fn edge_risks(&self) -> impl Iterator<Item = (EdgeId, f64)> + '_ {
        self.edges.iter().map(|(id, r)| (*id, *r))
    }

    /// Node risks in ascending id order.
    pub fn node_risks(&self) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.nodes.iter().map(|(id, r)| (*id, *r))
    }
}
