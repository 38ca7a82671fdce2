//! Network edge (road segment).

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::model::{EdgeId, NodeId};

/// A road segment from `tail` to `head`.
///
/// `geometry` is ordered tail-to-head; when empty, graph load synthesizes
/// a straight line from the endpoint positions so every loaded edge is
/// displayable. `length` is the physical distance in meters and must be
/// positive for the edge to survive load. A `oneway` edge is traversable
/// only tail-to-head; otherwise both directions are allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub tail: NodeId,
    pub head: NodeId,
    pub geometry: Vec<Point>,
    pub length: f64,
    pub oneway: bool,
}

impl Edge {
    pub fn new(
        id: EdgeId,
        tail: NodeId,
        head: NodeId,
        geometry: Vec<Point>,
        length: f64,
        oneway: bool,
    ) -> Self {
        Self {
            id,
            tail,
            head,
            geometry,
            length,
            oneway,
        }
    }

    /// Whether the edge may be traversed head-to-tail.
    pub fn is_bidirectional(&self) -> bool {
        !self.oneway
    }
}
