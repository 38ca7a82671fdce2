//! Transient edge/node exclusion sets.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::{EdgeId, NodeId};

/// Edges and nodes temporarily removed from consideration for one search
/// invocation.
///
/// An exclusion set is a value scoped to a single call; it never mutates
/// the underlying graph, so concurrent routing sessions with different
/// exclusion sets can share one graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionSet {
    pub edges: BTreeSet<EdgeId>,
    pub nodes: BTreeSet<NodeId>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exclude_edge(&mut self, id: EdgeId) {
        self.edges.insert(id);
    }

    pub fn exclude_node(&mut self, id: NodeId) {
        self.nodes.insert(id);
    }

    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edges.contains(&id)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty() && self.nodes.is_empty()
    }

    /// Total number of excluded elements.
    pub fn total(&self) -> usize {
        self.edges.len() + self.nodes.len()
    }
}
