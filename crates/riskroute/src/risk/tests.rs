//! Risk assignment tests.

use crate::config::RiskConfig;
use crate::geometry::Point;
use crate::model::{Edge, Graph, Node};

use super::{assign_risk, Hazard, HazardGeometry, RiskMap};

fn grid_graph() -> Graph {
    // Two parallel horizontal edges, 200m apart.
    Graph::load(
        vec![
            Node::new(1, Point::new(0.0, 0.0)),
            Node::new(2, Point::new(100.0, 0.0)),
            Node::new(3, Point::new(0.0, 200.0)),
            Node::new(4, Point::new(100.0, 200.0)),
        ],
        vec![
            Edge::new(10, 1, 2, vec![], 100.0, false),
            Edge::new(11, 3, 4, vec![], 100.0, false),
        ],
    )
    .expect("load failed")
}

#[test]
fn test_zero_hazards_is_all_zero_not_error() {
    let graph = grid_graph();
    let (map, summary) = assign_risk(&graph, &[], &RiskConfig::default());

    assert_eq!(map.edge_risk(10), 0.0);
    assert_eq!(map.edge_risk(11), 0.0);
    assert_eq!(summary.edges_affected, 0);
    assert_eq!(summary.nodes_affected, 0);
    assert_eq!(summary.max_edge_risk, 0.0);
}

#[test]
fn test_point_hazard_within_radius() {
    let graph = grid_graph();
    let hazard = Hazard::new(HazardGeometry::Point(Point::new(50.0, 30.0)), 1.0);
    let (map, summary) = assign_risk(&graph, &[hazard], &RiskConfig::default());

    // 30m from the lower edge (within 50m), 170m from the upper one.
    assert_eq!(map.edge_risk(10), 0.5);
    assert_eq!(map.edge_risk(11), 0.0);
    assert_eq!(summary.edges_affected, 1);
    assert_eq!(summary.max_edge_risk, 0.5);
    // No node lies within 50m of (50, 30).
    assert_eq!(summary.nodes_affected, 0);
}

#[test]
fn test_node_risk_assigned_within_radius() {
    let graph = grid_graph();
    let hazard = Hazard::new(HazardGeometry::Point(Point::new(10.0, 10.0)), 1.0);
    let (map, _) = assign_risk(&graph, &[hazard], &RiskConfig::default());

    // Node 1 at (0,0) is ~14m away; nodes on the upper edge are not.
    assert_eq!(map.node_risk(1), 0.5);
    assert_eq!(map.node_risk(3), 0.0);
}

#[test]
fn test_max_aggregation_commutes() {
    let graph = grid_graph();
    let weak = Hazard::new(HazardGeometry::Point(Point::new(50.0, 10.0)), 0.4);
    let strong = Hazard::new(HazardGeometry::Point(Point::new(50.0, -10.0)), 1.6);
    let config = RiskConfig::default();

    let (forward, _) = assign_risk(&graph, &[weak.clone(), strong.clone()], &config);
    let (backward, _) = assign_risk(&graph, &[strong, weak], &config);

    // Max, not sum: 0.5 * 1.6 = 0.8, not 0.8 + 0.2.
    assert_eq!(forward.edge_risk(10), 0.8);
    assert_eq!(forward, backward, "hazard order must not matter");
}

#[test]
fn test_severity_scales_and_clamps() {
    let hazard = Hazard::new(HazardGeometry::Point(Point::new(0.0, 0.0)), 3.0);
    // 0.5 * 3.0 clamps to certainty.
    assert_eq!(hazard.failure_probability(0.5), 1.0);

    let mild = Hazard::new(HazardGeometry::Point(Point::new(0.0, 0.0)), 0.2);
    assert_eq!(mild.failure_probability(0.5), 0.1);

    let negative = Hazard::new(HazardGeometry::Point(Point::new(0.0, 0.0)), -1.0);
    assert_eq!(negative.failure_probability(0.5), 0.0);
}

#[test]
fn test_line_hazard_proximity() {
    let graph = grid_graph();
    // Vertical line crossing the lower edge.
    let hazard = Hazard::new(
        HazardGeometry::Line(vec![Point::new(50.0, -50.0), Point::new(50.0, 50.0)]),
        1.0,
    );
    let (map, _) = assign_risk(&graph, &[hazard], &RiskConfig::default());

    assert_eq!(map.edge_risk(10), 0.5);
    assert_eq!(map.edge_risk(11), 0.0);
}

#[test]
fn test_polygon_hazard_containment() {
    let graph = grid_graph();
    // Square enclosing the whole lower edge.
    let hazard = Hazard::new(
        HazardGeometry::Polygon(vec![
            Point::new(-10.0, -10.0),
            Point::new(110.0, -10.0),
            Point::new(110.0, 10.0),
            Point::new(-10.0, 10.0),
        ]),
        1.0,
    );
    let (map, _) = assign_risk(&graph, &[hazard], &RiskConfig::default());

    assert_eq!(map.edge_risk(10), 0.5, "contained edge must be affected");
    assert_eq!(map.edge_risk(11), 0.0);
}

#[test]
fn test_risk_always_in_unit_interval() {
    let mut map = RiskMap::new();
    map.raise_edge_risk(10, 7.0);
    map.raise_edge_risk(11, -3.0);
    map.raise_node_risk(1, 2.0);

    assert_eq!(map.edge_risk(10), 1.0);
    assert_eq!(map.edge_risk(11), 0.0);
    assert_eq!(map.node_risk(1), 1.0);
    assert!(map.edge_risks().all(|(_, r)| (0.0..=1.0).contains(&r)));
}

#[test]
fn test_raise_never_lowers() {
    let mut map = RiskMap::new();
    map.raise_edge_risk(10, 0.8);
    map.raise_edge_risk(10, 0.3);
    assert_eq!(map.edge_risk(10), 0.8);
}

#[test]
fn test_average_over_all_edges() {
    let graph = grid_graph();
    let hazard = Hazard::new(HazardGeometry::Point(Point::new(50.0, 0.0)), 1.0);
    let (_, summary) = assign_risk(&graph, &[hazard], &RiskConfig::default());

    // One of two edges at risk 0.5.
    assert!((summary.average_edge_risk - 0.25).abs() < 1e-12);
}
