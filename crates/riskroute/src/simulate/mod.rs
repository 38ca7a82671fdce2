//! Stochastic failure simulation.
//!
//! One independent Bernoulli trial per at-risk element; no correlation is
//! modeled between elements. The random source is an injectable seeded
//! generator and elements are visited in ascending id order, so a fixed
//! seed always reproduces the same exclusion set.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::model::{ExclusionSet, Graph};
use crate::risk::RiskMap;


/// Samples failed edges and nodes from a risk overlay.
#[derive(Debug)]
pub struct FailureSimulator {
    rng: ChaCha8Rng,
}

impl FailureSimulator {
    /// Deterministic simulator for a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Simulator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Draw one uniform sample in [0, 1) per edge and per node with
    /// risk > 0; the element fails when the sample falls below its risk.
    ///
    /// The returned exclusion set is a value for one routing invocation;
    /// the graph and the risk overlay are untouched.
    pub fn simulate(&mut self, graph: &Graph, risk: &RiskMap) -> ExclusionSet {
        let mut exclusions = ExclusionSet::new();

        for edge in graph.edges() {
            let r = risk.edge_risk(edge.id);
            if r > 0.0 && self.rng.gen::<f64>() < r {
                exclusions.exclude_edge(edge.id);
            }
        }
        for node in graph.nodes() {
            let r = risk.node_risk(node.id);
            if r > 0.0 && self.rng.gen::<f64>() < r {
                exclusions.exclude_node(node.id);
            }
        }

        debug!(
            edges = exclusions.edges.len(),
            nodes = exclusions.nodes.len(),
            "failure simulation sampled"
        );
        exclusions
    }
}
