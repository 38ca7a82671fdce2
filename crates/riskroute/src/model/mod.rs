//! Road network model: nodes, edges, immutable graph, exclusion sets.

mod edge;
mod exclusion;
mod graph;
mod node;


pub use edge::Edge;
pub use exclusion::ExclusionSet;
pub use graph::{Graph, LoadReport, Neighbor};
pub use node::Node;

/// Stable node identifier supplied by the network store.
pub type NodeId = i64;

/// Stable edge identifier supplied by the network store.
pub type EdgeId = i64;
