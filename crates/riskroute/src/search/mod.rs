//! Shortest-path search over the routing graph.
//!
//! One parameterized algorithm serves all four policies: the frontier is
//! ordered by accumulated cost (Dijkstra) or by accumulated cost plus a
//! straight-line distance estimate to the target (A*), depending on
//! [`crate::policy::RoutingPolicy::uses_heuristic`]. Positions are planar
//! meters and every policy cost is at least the physical length, so the
//! estimate never overstates the remaining cost and informed search stays
//! optimal.
//!
//! Each invocation allocates its own frontier, visited set and
//! predecessor map; nothing is shared, so searches run concurrently
//! against one `&Graph` without locking.

mod algorithm;
mod node;
mod types;


pub use algorithm::shortest_path;
pub use types::PathResult;
