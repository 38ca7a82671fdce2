//! Immutable routing graph with counted data-quality filtering.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{RouteError, RouteResult};
use crate::geometry::Point;
use crate::model::{Edge, EdgeId, Node, NodeId};

/// An outgoing adjacency entry: traverse `edge` to reach `node`.
///
/// `reversed` is set when the arc runs against the edge's stored
/// tail-to-head direction (only ever true for bidirectional edges).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub edge: EdgeId,
    pub node: NodeId,
    pub reversed: bool,
}

/// Counts reported by [`Graph::load`].
///
/// Bad edges are dropped rather than failing the load, mirroring the
/// tolerance for partial upstream data; the counts make the filtering
/// explicit and testable instead of silent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub nodes_loaded: usize,
    pub edges_loaded: usize,
    pub dropped_unknown_endpoint: usize,
    pub dropped_nonpositive_length: usize,
}

impl LoadReport {
    pub fn dropped_total(&self) -> usize {
        self.dropped_unknown_endpoint + self.dropped_nonpositive_length
    }
}

/// In-memory road network.
///
/// Invariants, established at load and never violated afterwards:
/// - every edge has `length > 0` and endpoints present in the node set;
/// - a oneway edge appears in exactly one node's adjacency list, a
///   bidirectional edge in both (the reverse entry flagged `reversed`);
/// - the graph is immutable after [`Graph::load`], so `&Graph` may be
///   shared across concurrent search invocations without locking.
#[derive(Debug)]
pub struct Graph {
    nodes: BTreeMap<NodeId, Node>,
    edges: BTreeMap<EdgeId, Edge>,
    out_arcs: BTreeMap<NodeId, Vec<Neighbor>>,
    report: LoadReport,
}

impl Graph {
    /// Build a graph from raw node and edge lists.
    ///
    /// Edges referencing unknown nodes or carrying non-positive (or
    /// non-finite) length are dropped and counted in the [`LoadReport`].
    /// Duplicate node or edge ids are a hard [`RouteError::InvalidGraph`]:
    /// topology would be ambiguous.
    pub fn load(nodes: Vec<Node>, edges: Vec<Edge>) -> RouteResult<Graph> {
        let mut node_map: BTreeMap<NodeId, Node> = BTreeMap::new();
        for node in nodes {
            if node_map.insert(node.id, node).is_some() {
                return Err(RouteError::InvalidGraph(format!(
                    "duplicate node id {}",
                    node.id
                )));
            }
        }

        let mut report = LoadReport {
            nodes_loaded: node_map.len(),
            ..LoadReport::default()
        };
        let mut edge_map: BTreeMap<EdgeId, Edge> = BTreeMap::new();
        let mut out_arcs: BTreeMap<NodeId, Vec<Neighbor>> = BTreeMap::new();

        for mut edge in edges {
            let (tail, head) = match (node_map.get(&edge.tail), node_map.get(&edge.head)) {
                (Some(t), Some(h)) => (*t, *h),
                _ => {
                    debug!(edge = edge.id, "dropping edge with unknown endpoint");
                    report.dropped_unknown_endpoint += 1;
                    continue;
                }
            };
            if !(edge.length > 0.0) || !edge.length.is_finite() {
                debug!(
                    edge = edge.id,
                    length = edge.length,
                    "dropping edge with non-positive length"
                );
                report.dropped_nonpositive_length += 1;
                continue;
            }
            if edge.geometry.is_empty() {
                edge.geometry = vec![tail.position, head.position];
            }
            if edge_map.contains_key(&edge.id) {
                return Err(RouteError::InvalidGraph(format!(
                    "duplicate edge id {}",
                    edge.id
                )));
            }

            out_arcs.entry(edge.tail).or_default().push(Neighbor {
                edge: edge.id,
                node: edge.head,
                reversed: false,
            });
            if edge.is_bidirectional() {
                out_arcs.entry(edge.head).or_default().push(Neighbor {
                    edge: edge.id,
                    node: edge.tail,
                    reversed: true,
                });
            }
            edge_map.insert(edge.id, edge);
        }

        report.edges_loaded = edge_map.len();
        info!(
            nodes = report.nodes_loaded,
            edges = report.edges_loaded,
            dropped = report.dropped_total(),
            "graph loaded"
        );

        Ok(Graph {
            nodes: node_map,
            edges: edge_map,
            out_arcs,
            report,
        })
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Outgoing arcs from a node, in edge input order (deterministic).
    pub fn neighbors(&self, id: NodeId) -> &[Neighbor] {
        self.out_arcs.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Edges in ascending id order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn load_report(&self) -> &LoadReport {
        &self.report
    }

    /// Resolve a position to the closest node (ties broken by lowest id).
    pub fn nearest_node(&self, point: Point) -> RouteResult<NodeId> {
        self.nodes
            .values()
            .min_by(|a, b| {
                a.position
                    .distance(&point)
                    .total_cmp(&b.position.distance(&point))
                    .then(a.id.cmp(&b.id))
            })
            .map(|n| n.id)
            .ok_or(RouteError::EmptyGraph)
    }
}
