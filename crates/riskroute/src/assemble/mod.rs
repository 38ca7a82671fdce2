//! Route assembly: edge sequences to display polylines.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::model::Graph;
use crate::search::PathResult;


/// A displayable route: one ordered point sequence plus its physical
/// length in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteGeometry {
    pub points: Vec<Point>,
    pub total_length: f64,
}

/// Concatenate a found path's edge geometries into a single polyline.
///
/// Each edge's points run tail-to-head in storage; an edge traversed
/// against that direction (only possible for bidirectional edges) has its
/// points reversed first. Shared endpoints between consecutive edges are
/// deduplicated. Base lengths are summed for the total.
///
/// Returns `None` for an unfound path or when fewer than 2 points remain,
/// signaling "no displayable route" without raising.
pub fn assemble(graph: &Graph, path: &PathResult) -> Option<RouteGeometry> {
    if !path.found {
        return None;
    }

    let mut points: Vec<Point> = Vec::new();
    let mut total_length = 0.0;

    for (i, edge_id) in path.edges.iter().enumerate() {
        let edge = graph.edge(*edge_id)?;
        let from = *path.nodes.get(i)?;
        let reversed = from != edge.tail;

        if reversed {
            extend(&mut points, edge.geometry.iter().rev().copied());
        } else {
            extend(&mut points, edge.geometry.iter().copied());
        }
        total_length += edge.length;
    }

    if points.len() < 2 {
        return None;
    }
    Some(RouteGeometry {
        points,
        total_length,
    })
}

fn extend(points: &mut Vec<Point>, geometry: impl Iterator<Item = Point>) {
    for p in geometry {
        if points.last() != Some(&p) {
            points.push(p);
        }
    }
}
