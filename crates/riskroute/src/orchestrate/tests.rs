//! Orchestrator tests.

use crate::config::{CostConfig, RiskConfig};
use crate::error::RouteError;
use crate::geometry::Point;
use crate::model::{Edge, ExclusionSet, Graph, Node};
use crate::policy::RoutingPolicy;
use crate::risk::{assign_risk, Hazard, HazardGeometry, RiskMap};
use crate::simulate::FailureSimulator;

use super::{
    route_all, route_request, simulate_failures, NoRouteReason, PolicyOutcome, RouteRequest,
};

const A: i64 = 1;
const B: i64 = 2;
const C: i64 = 3;
const D: i64 = 4;

const AB: i64 = 10;
const BD: i64 = 11;
const AC: i64 = 12;
const CD: i64 = 13;

fn diamond() -> (Graph, RiskMap) {
    let cy = -(12_500.0_f64).sqrt();
    let graph = Graph::load(
        vec![
            Node::new(A, Point::new(0.0, 0.0)),
            Node::new(B, Point::new(100.0, 0.0)),
            Node::new(C, Point::new(100.0, cy)),
            Node::new(D, Point::new(200.0, 0.0)),
        ],
        vec![
            Edge::new(AB, A, B, vec![], 100.0, false),
            Edge::new(BD, B, D, vec![], 100.0, false),
            Edge::new(AC, A, C, vec![], 150.0, false),
            Edge::new(CD, C, D, vec![], 150.0, false),
        ],
    )
    .expect("load failed");

    let mut risk = RiskMap::new();
    risk.raise_edge_risk(BD, 0.8);
    risk.raise_edge_risk(AC, 0.1);
    risk.raise_edge_risk(CD, 0.1);
    (graph, risk)
}

#[test]
fn test_route_all_covers_every_policy() {
    let (graph, risk) = diamond();
    let routes = route_all(
        &graph,
        &risk,
        A,
        D,
        &ExclusionSet::new(),
        &CostConfig::default(),
    )
    .expect("route_all failed");

    assert_eq!(routes.len(), RoutingPolicy::ALL.len());
    for policy in RoutingPolicy::ALL {
        assert!(routes.contains_key(&policy), "missing {:?}", policy);
    }
}

#[test]
fn test_route_all_reference_scenario() {
    let (graph, risk) = diamond();
    let routes = route_all(
        &graph,
        &risk,
        A,
        D,
        &ExclusionSet::new(),
        &CostConfig::default(),
    )
    .expect("route_all failed");

    // Pure distance rides the risky corridor; both weighted policies and
    // the safety filter take the 300m detour.
    assert_eq!(
        routes[&RoutingPolicy::ShortestDistance].total_length(),
        Some(200.0)
    );
    assert_eq!(
        routes[&RoutingPolicy::WeightedDijkstra].total_length(),
        Some(300.0)
    );
    assert_eq!(
        routes[&RoutingPolicy::WeightedAstar].total_length(),
        Some(300.0)
    );
    assert_eq!(
        routes[&RoutingPolicy::SafetyFiltered].total_length(),
        Some(300.0)
    );

    if let PolicyOutcome::Route { edges, .. } = &routes[&RoutingPolicy::SafetyFiltered] {
        assert_eq!(edges, &vec![AC, CD]);
    } else {
        panic!("safety filter should find a route");
    }
}

#[test]
fn test_start_equals_end_yields_zero_length_routes() {
    let (graph, risk) = diamond();
    let routes = route_all(
        &graph,
        &risk,
        A,
        A,
        &ExclusionSet::new(),
        &CostConfig::default(),
    )
    .expect("route_all failed");

    for (policy, outcome) in &routes {
        match outcome {
            PolicyOutcome::Route {
                total_length,
                edges,
                ..
            } => {
                assert_eq!(*total_length, 0.0, "{:?}", policy);
                assert!(edges.is_empty(), "{:?}", policy);
            }
            PolicyOutcome::NoRoute { .. } => {
                panic!("{:?} must return a zero-length route, not absence", policy)
            }
        }
    }
}

#[test]
fn test_no_route_isolated_per_policy() {
    // Fail both detour edges: the safety filter starves while every other
    // policy still reports a route.
    let (graph, risk) = diamond();
    let mut exclusion = ExclusionSet::new();
    exclusion.exclude_edge(AC);
    exclusion.exclude_edge(CD);

    let routes = route_all(&graph, &risk, A, D, &exclusion, &CostConfig::default())
        .expect("route_all failed");

    assert!(matches!(
        routes[&RoutingPolicy::SafetyFiltered],
        PolicyOutcome::NoRoute {
            reason: NoRouteReason::Exhausted,
            ..
        }
    ));
    assert!(routes[&RoutingPolicy::ShortestDistance].is_route());
    assert!(routes[&RoutingPolicy::WeightedDijkstra].is_route());
    assert!(routes[&RoutingPolicy::WeightedAstar].is_route());
}

#[test]
fn test_unreachable_target_reports_absence_everywhere() {
    let graph = Graph::load(
        vec![
            Node::new(1, Point::new(0.0, 0.0)),
            Node::new(2, Point::new(100.0, 0.0)),
        ],
        vec![],
    )
    .expect("load failed");

    let routes = route_all(
        &graph,
        &RiskMap::new(),
        1,
        2,
        &ExclusionSet::new(),
        &CostConfig::default(),
    )
    .expect("route_all failed");

    assert_eq!(routes.len(), RoutingPolicy::ALL.len(), "map stays complete");
    for outcome in routes.values() {
        assert!(matches!(
            outcome,
            PolicyOutcome::NoRoute {
                reason: NoRouteReason::Exhausted,
                ..
            }
        ));
    }
}

#[test]
fn test_unknown_endpoint_is_hard_error() {
    let (graph, risk) = diamond();
    let result = route_all(
        &graph,
        &risk,
        A,
        999,
        &ExclusionSet::new(),
        &CostConfig::default(),
    );
    assert!(matches!(result, Err(RouteError::UnknownEndpoint(999))));
}

#[test]
fn test_route_request_resolves_nearest_nodes() {
    let (graph, risk) = diamond();
    let request = RouteRequest {
        start: Point::new(5.0, 5.0),    // nearest: A
        end: Point::new(195.0, -5.0),   // nearest: D
        exclusion: None,
    };

    let response = route_request(&graph, &risk, &request, &CostConfig::default())
        .expect("route_request failed");

    assert_eq!(response.start_node, A);
    assert_eq!(response.end_node, D);
    assert!(response.routes[&RoutingPolicy::ShortestDistance].is_route());
}

#[test]
fn test_route_request_applies_exclusion_override() {
    let (graph, risk) = diamond();
    let mut exclusion = ExclusionSet::new();
    exclusion.exclude_edge(AB);

    let request = RouteRequest {
        start: Point::new(0.0, 0.0),
        end: Point::new(200.0, 0.0),
        exclusion: Some(exclusion),
    };
    let response = route_request(&graph, &risk, &request, &CostConfig::default())
        .expect("route_request failed");

    // With A-B failed, even pure distance must detour through C.
    assert_eq!(
        response.routes[&RoutingPolicy::ShortestDistance].total_length(),
        Some(300.0)
    );
}

#[test]
fn test_simulation_feeds_back_into_routing() {
    let (graph, _) = diamond();

    // A certain hazard 30m off the B-D corridor midpoint; everything
    // else on the diamond sits outside the 50m influence radius.
    let hazard = Hazard::new(HazardGeometry::Point(Point::new(150.0, 30.0)), 2.0);
    let (risk, summary) = assign_risk(&graph, &[hazard], &RiskConfig::default());
    assert_eq!(summary.edges_affected, 1);
    assert_eq!(risk.edge_risk(BD), 1.0);
    assert_eq!(risk.edge_risk(AB), 0.0);

    let mut simulator = FailureSimulator::from_seed(11);
    let report = simulate_failures(&graph, &risk, &mut simulator);
    assert!(report.exclusions.contains_edge(BD), "certain risk must fail");
    assert_eq!(report.total_excluded, report.exclusions.total());

    let routes = route_all(
        &graph,
        &risk,
        A,
        D,
        &report.exclusions,
        &CostConfig::default(),
    )
    .expect("route_all failed");

    // The failed corridor is gone for every policy; all of them still
    // find the detour.
    for (policy, outcome) in &routes {
        let PolicyOutcome::Route { edges, .. } = outcome else {
            panic!("{:?} should still route via the detour", policy);
        };
        assert!(!edges.contains(&BD), "{:?} used an excluded edge", policy);
    }
}

#[test]
fn test_policy_outcome_serializes_by_policy_name() {
    let (graph, risk) = diamond();
    let routes = route_all(
        &graph,
        &risk,
        A,
        D,
        &ExclusionSet::new(),
        &CostConfig::default(),
    )
    .expect("route_all failed");

    let json = serde_json::to_value(&routes).expect("serialize failed");
    let object = json.as_object().expect("expected a JSON object");
    assert!(object.contains_key("shortest_distance"));
    assert!(object.contains_key("weighted_dijkstra"));
    assert!(object.contains_key("weighted_astar"));
    assert!(object.contains_key("safety_filtered"));
    assert_eq!(object["shortest_distance"]["status"], "route");
}
