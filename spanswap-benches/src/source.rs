//! Seeded synthetic graphs for benchmarking.
//!
//! Every graph starts as a random recursive tree, so it is connected, and
//! is then thickened with uniformly random extra edges. Weights are drawn
//! uniformly from `[0, 100)`.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use spanswap_core::{Edge, Graph};

use crate::error::BenchSetupError;

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices to generate.
    pub vertex_count: usize,
    /// Extra non-tree edges added per vertex.
    pub extra_edges_per_vertex: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Generates a connected weighted graph from `config`.
///
/// # Errors
///
/// Returns [`BenchSetupError::ZeroValue`] when `vertex_count` is zero.
///
/// # Examples
///
/// ```
/// use spanswap_benches::source::{SyntheticGraphConfig, generate_graph};
///
/// let config = SyntheticGraphConfig { vertex_count: 10, extra_edges_per_vertex: 2, seed: 42 };
/// let graph = generate_graph(&config).expect("valid config");
/// assert_eq!(graph.vertex_count(), 10);
/// assert_eq!(graph.edge_count(), 9 + 20);
/// ```
pub fn generate_graph(config: &SyntheticGraphConfig) -> Result<Graph, BenchSetupError> {
    if config.vertex_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "vertex_count",
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let n = config.vertex_count;
    let extra = n.saturating_mul(config.extra_edges_per_vertex);
    let mut edges = Vec::with_capacity(n.saturating_sub(1).saturating_add(extra));

    for v in 1..n {
        let u = rng.gen_range(0..v);
        edges.push(Edge::new(u, v, rng.gen_range(0.0..100.0)));
    }
    for _ in 0..extra {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        edges.push(Edge::new(u, v, rng.gen_range(0.0..100.0)));
    }

    Ok(Graph::from_edges(n, edges))
}
