//! Network node (routing vertex).

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::model::NodeId;

/// A routing vertex with a stable id and a planar position.
///
/// Immutable once loaded into a [`crate::model::Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub position: Point,
}

impl Node {
    pub fn new(id: NodeId, position: Point) -> Self {
        Self { id, position }
    }
}
