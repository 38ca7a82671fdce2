//! Planar 2D geometry primitives.
//!
//! Positions are projected coordinates in meters, so straight-line distance
//! is a valid lower bound on physical edge length. This keeps the search
//! heuristic admissible (see `search`) and the hazard proximity tests
//! symmetric and commutative (see `risk`).

use serde::{Deserialize, Serialize};


/// A 2D position in projected (meter) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Total length of a polyline (zero for fewer than 2 points).
pub fn polyline_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance(&w[1])).sum()
}

/// Minimum distance from a point to the segment `a`-`b`.
///
/// Degenerate segments (`a == b`) collapse to point-point distance.
pub fn point_segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return p.distance(&a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    p.distance(&Point::new(a.x + t * dx, a.y + t * dy))
}

/// Orientation of the triplet (a, b, c): positive for counter-clockwise,
/// negative for clockwise, zero for collinear.
fn orientation(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

fn on_segment(a: Point, b: Point, p: Point) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Whether segments `a1`-`a2` and `b1`-`b2` intersect (endpoints included).
pub fn segments_intersect(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    let d1 = orientation(a1, a2, b1);
    let d2 = orientation(a1, a2, b2);
    let d3 = orientation(b1, b2, a1);
    let d4 = orientation(b1, b2, a2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && on_segment(a1, a2, b1))
        || (d2 == 0.0 && on_segment(a1, a2, b2))
        || (d3 == 0.0 && on_segment(b1, b2, a1))
        || (d4 == 0.0 && on_segment(b1, b2, a2))
}

/// Minimum distance between segments `a1`-`a2` and `b1`-`b2` (0 if they
/// intersect).
pub fn segment_segment_distance(a1: Point, a2: Point, b1: Point, b2: Point) -> f64 {
    if segments_intersect(a1, a2, b1, b2) {
        return 0.0;
    }
    point_segment_distance(a1, b1, b2)
        .min(point_segment_distance(a2, b1, b2))
        .min(point_segment_distance(b1, a1, a2))
        .min(point_segment_distance(b2, a1, a2))
}

/// Minimum distance from a point to a polyline.
///
/// A single-point polyline degrades to point-point distance; an empty
/// polyline is infinitely far away.
pub fn point_polyline_distance(p: Point, line: &[Point]) -> f64 {
    match line {
        [] => f64::INFINITY,
        [only] => p.distance(only),
        _ => line
            .windows(2)
            .map(|w| point_segment_distance(p, w[0], w[1]))
            .fold(f64::INFINITY, f64::min),
    }
}

/// Minimum distance between two polylines (0 if they touch or cross).
pub fn polyline_polyline_distance(a: &[Point], b: &[Point]) -> f64 {
    match (a.len(), b.len()) {
        (0, _) | (_, 0) => f64::INFINITY,
        (1, _) => point_polyline_distance(a[0], b),
        (_, 1) => point_polyline_distance(b[0], a),
        _ => {
            let mut best = f64::INFINITY;
            for sa in a.windows(2) {
                for sb in b.windows(2) {
                    best = best.min(segment_segment_distance(sa[0], sa[1], sb[0], sb[1]));
                    if best == 0.0 {
                        return 0.0;
                    }
                }
            }
            best
        }
    }
}

/// Ray-cast point-in-polygon test. The ring may be open or explicitly
/// closed; boundary points count as inside.
pub fn point_in_polygon(p: Point, ring: &[Point]) -> bool {
    if ring.len() < 3 {
        return false;
    }
    let mut inside = false;
    let n = ring.len();
    let mut j = n - 1;
    for i in 0..n {
        let a = ring[i];
        let b = ring[j];
        if point_segment_distance(p, a, b) == 0.0 {
            return true;
        }
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
