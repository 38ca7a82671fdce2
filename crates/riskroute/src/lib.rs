//! Risk-aware routing over road networks.
//!
//! This crate computes resilient routes over a directed road network whose
//! edges carry both a physical cost (length in meters) and a time-varying
//! risk (probability of becoming impassable). It is the routing core behind
//! a network store that supplies nodes, edges and hazard features, and a
//! presentation layer that consumes route geometries and exclusion sets.
//!
//! # Architecture
//!
//! - **config**: cost-model and risk-model tuning parameters
//! - **error**: crate error type (`RouteError`) and result alias
//! - **geometry**: planar 2D primitives and proximity tests
//! - **model**: immutable graph (nodes, edges, adjacency) and exclusion sets
//! - **policy**: the four routing policies and their cost functions
//! - **risk**: hazard-proximity failure-probability assignment
//! - **search**: Dijkstra / A* shortest-path search with exclusions
//! - **simulate**: seedable Bernoulli failure simulation
//! - **assemble**: edge-sequence to polyline route assembly
//! - **orchestrate**: run every policy against one request, isolated
//!
//! # Data flow
//!
//! Risk assignment produces a [`RiskMap`] overlay from hazard features. The
//! failure simulator optionally samples an [`ExclusionSet`] from that
//! overlay. The orchestrator then runs one search per [`RoutingPolicy`],
//! each consulting the policy's cost function and skipping excluded
//! elements, and assembles each result into an output route. The graph
//! itself is never mutated after load, so concurrent routing sessions can
//! share one `&Graph` freely.
//!
//! # Example
//!
//! ```
//! use riskroute::config::CostConfig;
//! use riskroute::geometry::Point;
//! use riskroute::model::{Edge, ExclusionSet, Graph, Node};
//! use riskroute::orchestrate::route_all;
//! use riskroute::risk::RiskMap;
//!
//! fn demo() -> riskroute::RouteResult<()> {
//!     let nodes = vec![
//!         Node::new(1, Point::new(0.0, 0.0)),
//!         Node::new(2, Point::new(100.0, 0.0)),
//!     ];
//!     let edges = vec![Edge::new(10, 1, 2, vec![], 100.0, false)];
//!     let graph = Graph::load(nodes, edges)?;
//!
//!     let routes = route_all(
//!         &graph,
//!         &RiskMap::default(),
//!         1,
//!         2,
//!         &ExclusionSet::default(),
//!         &CostConfig::default(),
//!     )?;
//!     assert_eq!(routes.len(), 4);
//!     Ok(())
//! }
//! # demo().unwrap();
//! ```

pub mod assemble;
pub mod config;
pub mod error;
pub mod geometry;
pub mod model;
pub mod orchestrate;
pub mod policy;
pub mod risk;
pub mod search;
pub mod simulate;

pub use assemble::{assemble, RouteGeometry};
pub use config::{CostConfig, RiskConfig};
pub use error::{RouteError, RouteResult};
pub use geometry::Point;
pub use model::{Edge, EdgeId, ExclusionSet, Graph, LoadReport, Neighbor, Node, NodeId};
pub use orchestrate::{
    route_all, route_request, simulate_failures, NoRouteReason, PolicyOutcome, RouteRequest,
    RouteResponse, RouteSet, SimulationReport,
};
pub use policy::{arc_cost, RoutingPolicy};
pub use risk::{assign_risk, Hazard, HazardGeometry, RiskMap, RiskSummary};
pub use search::{shortest_path, PathResult};
pub use simulate::FailureSimulator;
