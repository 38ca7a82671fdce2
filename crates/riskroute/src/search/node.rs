//! Frontier priority-queue entry.

use std::cmp::Ordering;

use crate::model::NodeId;

/// Entry in the search frontier.
///
/// Ordered so that `BinaryHeap` (a max-heap) pops the smallest f-score
/// first. Ties are broken by discovery sequence, earliest first, which
/// makes expansion order deterministic for a fixed input.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FrontierNode {
    pub node: NodeId,
    /// g(n) + h(n); equals g(n) for uninformed search.
    pub f_score: f64,
    /// Accumulated cost from the start node.
    pub g_score: f64,
    /// Discovery sequence number, the deterministic tie-breaker.
    pub seq: u64,
}

impl FrontierNode {
    pub fn new(node: NodeId, g_score: f64, h_score: f64, seq: u64) -> Self {
        Self {
            node,
            f_score: g_score + h_score,
            g_score,
            seq,
        }
    }
}

impl PartialEq for FrontierNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierNode {}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior; total_cmp keeps the order total
        // even if a NaN ever slipped into a cost.
        other
            .f_score
            .total_cmp(&self.f_score)
            .then(other.seq.cmp(&self.seq))
    }
}
