//! External hazard features.

use serde::{Deserialize, Serialize};

use crate::geometry::{
    point_in_polygon, point_polyline_distance, polyline_polyline_distance, Point,
};

/// Geometry of a hazard feature supplied by the network store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardGeometry {
    Point(Point),
    Line(Vec<Point>),
    Polygon(Vec<Point>),
}

impl HazardGeometry {
    /// Minimum distance from this hazard to a single position. Zero for
    /// positions inside a polygon hazard.
    pub fn distance_to_point(&self, p: Point) -> f64 {
        match self {
            HazardGeometry::Point(h) => h.distance(&p),
            HazardGeometry::Line(line) => point_polyline_distance(p, line),
            HazardGeometry::Polygon(ring) => {
                if point_in_polygon(p, ring) {
                    0.0
                } else {
                    point_polyline_distance(p, &closed_ring(ring))
                }
            }
        }
    }

    /// Minimum distance from this hazard to a polyline. Symmetric in the
    /// underlying geometry, so hazard-to-edge and edge-to-hazard proximity
    /// agree.
    pub fn distance_to_polyline(&self, line: &[Point]) -> f64 {
        match self {
            HazardGeometry::Point(h) => point_polyline_distance(*h, line),
            HazardGeometry::Line(hline) => polyline_polyline_distance(hline, line),
            HazardGeometry::Polygon(ring) => {
                if line.iter().any(|p| point_in_polygon(*p, ring)) {
                    return 0.0;
                }
                polyline_polyline_distance(&closed_ring(ring), line)
            }
        }
    }
}

/// Ring with an explicit closing segment for boundary-distance tests.
fn closed_ring(ring: &[Point]) -> Vec<Point> {
    let mut boundary = ring.to_vec();
    if let (Some(first), Some(last)) = (ring.first(), ring.last()) {
        if first != last {
            boundary.push(*first);
        }
    }
    boundary
}

/// A hazard feature: geometry plus a severity scalar.
///
/// Severity 1.0 contributes exactly the configured unit risk; larger
/// severities scale it up, capped at certainty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub geometry: HazardGeometry,
    pub severity: f64,
}

impl Hazard {
    pub fn new(geometry: HazardGeometry, severity: f64) -> Self {
        Self { geometry, severity }
    }

    /// Failure probability this hazard assigns to elements it affects.
    pub fn failure_probability(&self, unit_risk: f64) -> f64 {
        (unit_risk * self.severity).clamp(0.0, 1.0)
    }
}
