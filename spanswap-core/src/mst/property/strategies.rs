//! Strategy builders for MST property-based tests.
//!
//! Provides graph generation strategies that produce varied weight
//! distributions and topologies. Each generator builds a list of [`Edge`]
//! values in insertion order, which is also the tie-break order Kruskal
//! relies on.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Edge;

use super::types::{MstFixture, WeightDistribution};

/// Minimum vertex count for most generated graphs.
const MIN_VERTICES: usize = 8;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 64;
/// Maximum vertex count for dense graphs (kept smaller to avoid quadratic
/// edge explosion).
const DENSE_MAX_VERTICES: usize = 32;
/// Upper bound on vertices for exhaustive enumeration.
const TINY_MAX_VERTICES: usize = 6;
/// Upper bound on edges for exhaustive enumeration.
const TINY_MAX_EDGES: usize = 10;

/// Generates MST fixtures covering all five weight distributions.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates tiny arbitrary graphs (self-loops and parallel edges
/// included) small enough for brute-force spanning-tree enumeration.
pub(super) fn tiny_graph_strategy() -> impl Strategy<Value = (usize, Vec<Edge>)> {
    (1..=TINY_MAX_VERTICES).prop_flat_map(|vertex_count| {
        let edge = (0..vertex_count, 0..vertex_count, 1_u8..=6)
            .prop_map(|(u, v, weight)| Edge::new(u, v, f64::from(weight)));
        (
            Just(vertex_count),
            proptest::collection::vec(edge, 0..=TINY_MAX_EDGES),
        )
    })
}

/// Generates a fixture for a specific weight distribution.
///
/// Useful for targeted rstest cases where the distribution is chosen
/// explicitly rather than sampled by proptest.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Unique => generate_unique_weights(rng),
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => generate_dense(rng),
        WeightDistribution::Disconnected => generate_disconnected(rng),
    }
}

// ── Probabilistic graph helper ──────────────────────────────────────────

/// Configuration for probabilistic graph generation, grouping the
/// parameters that vary between weight-distribution strategies.
struct ProbabilisticGraphConfig {
    /// Upper bound for the random vertex count (inclusive).
    max_vertices: usize,
    /// Inclusive range from which the per-pair edge probability is sampled.
    edge_prob_range: (f64, f64),
    /// Weight distribution label for the resulting fixture.
    distribution: WeightDistribution,
}

/// Generates a graph by probabilistically adding edges between all unique
/// vertex pairs, using a caller-supplied weight generator. Endpoint order is
/// randomised so order-independent edge identity is exercised.
fn generate_probabilistic_graph(
    rng: &mut SmallRng,
    config: ProbabilisticGraphConfig,
    mut weight_generator: impl FnMut(&mut SmallRng) -> f64,
) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=config.max_vertices);
    let edge_probability: f64 = rng.gen_range(config.edge_prob_range.0..=config.edge_prob_range.1);
    let mut edges = Vec::new();

    for i in 0..vertex_count {
        for j in (i + 1)..vertex_count {
            if rng.gen_bool(edge_probability) {
                let weight = weight_generator(rng);
                edges.push(oriented(i, j, weight, rng));
            }
        }
    }

    ensure_at_least_one_edge(vertex_count, &mut edges, rng);

    MstFixture {
        vertex_count,
        edges,
        distribution: config.distribution,
    }
}

// ── Unique weights ──────────────────────────────────────────────────────

/// Generates a graph where each edge has a distinct weight drawn from a
/// continuous range, so the MST is unique.
fn generate_unique_weights(rng: &mut SmallRng) -> MstFixture {
    generate_probabilistic_graph(
        rng,
        ProbabilisticGraphConfig {
            max_vertices: MAX_VERTICES,
            edge_prob_range: (0.2, 0.6),
            distribution: WeightDistribution::Unique,
        },
        random_weight,
    )
}

// ── Many identical weights ──────────────────────────────────────────────

/// Generates a graph where large groups of edges share the same weight,
/// exercising the input-order tie-break.
fn generate_identical_weights(rng: &mut SmallRng) -> MstFixture {
    let weight_pool_size = rng.gen_range(1..=3);
    let weight_pool: Vec<f64> = (0..weight_pool_size)
        .map(|_| f64::from(rng.gen_range(1_u8..=10)))
        .collect();

    generate_probabilistic_graph(
        rng,
        ProbabilisticGraphConfig {
            max_vertices: MAX_VERTICES,
            edge_prob_range: (0.3, 0.7),
            distribution: WeightDistribution::ManyIdentical,
        },
        move |r| weight_pool[r.gen_range(0..weight_pool.len())],
    )
}

// ── Sparse ──────────────────────────────────────────────────────────────

/// Generates a sparse graph by first building a random spanning path
/// (guaranteeing connectivity) and then adding a small number of extra
/// edges.
fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut edges = Vec::new();

    let mut perm: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut perm, rng);
    for pair in perm.windows(2) {
        let weight = random_weight(rng);
        edges.push(Edge::new(pair[0], pair[1], weight));
    }

    // Add a small number of extra edges (roughly 0.5n to n).
    let extra_count = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra_count {
        let i = rng.gen_range(0..vertex_count);
        let j = rng.gen_range(0..vertex_count);
        if i != j {
            let weight = random_weight(rng);
            edges.push(Edge::new(i, j, weight));
        }
    }

    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Sparse,
    }
}

// ── Dense ───────────────────────────────────────────────────────────────

/// Generates a dense graph approaching a complete graph, with vertex count
/// capped at [`DENSE_MAX_VERTICES`].
fn generate_dense(rng: &mut SmallRng) -> MstFixture {
    generate_probabilistic_graph(
        rng,
        ProbabilisticGraphConfig {
            max_vertices: DENSE_MAX_VERTICES,
            edge_prob_range: (0.7, 0.95),
            distribution: WeightDistribution::Dense,
        },
        random_weight,
    )
}

// ── Disconnected ────────────────────────────────────────────────────────

/// Generates a graph with 2-5 disconnected components, each having random
/// internal structure. No cross-component edges are created.
fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let component_count = rng.gen_range(2..=5);
    let component_sizes: Vec<usize> = (0..component_count)
        .map(|_| rng.gen_range(3..=12))
        .collect();
    let vertex_count: usize = component_sizes.iter().sum();
    let mut edges = Vec::new();
    let mut offset = 0;

    for &size in &component_sizes {
        generate_component(&mut edges, offset, size, rng);
        offset += size;
    }

    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Disconnected,
    }
}

/// Generates edges for a single component within a disconnected graph,
/// guaranteeing at least one edge when the component has two or more
/// vertices.
fn generate_component(edges: &mut Vec<Edge>, offset: usize, size: usize, rng: &mut SmallRng) {
    let edge_probability: f64 = rng.gen_range(0.3..=0.8);
    let start_len = edges.len();

    for i in 0..size {
        for j in (i + 1)..size {
            if rng.gen_bool(edge_probability) {
                let weight = random_weight(rng);
                edges.push(oriented(offset + i, offset + j, weight, rng));
            }
        }
    }

    if size >= 2 && edges.len() == start_len {
        let weight = random_weight(rng);
        edges.push(Edge::new(offset, offset + 1, weight));
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────

fn random_weight(rng: &mut SmallRng) -> f64 {
    rng.gen_range(0.1_f64..100.0)
}

/// Builds an edge between `a` and `b` with a coin-flip endpoint order.
fn oriented(a: usize, b: usize, weight: f64, rng: &mut SmallRng) -> Edge {
    if rng.gen_bool(0.5) {
        Edge::new(a, b, weight)
    } else {
        Edge::new(b, a, weight)
    }
}

/// Ensures the edge list contains at least one edge by inserting a
/// fallback edge between vertices 0 and 1.
fn ensure_at_least_one_edge(vertex_count: usize, edges: &mut Vec<Edge>, rng: &mut SmallRng) {
    if edges.is_empty() && vertex_count >= 2 {
        let weight = random_weight(rng);
        edges.push(Edge::new(0, 1, weight));
    }
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

// Proptest `Arbitrary` implementation for `WeightDistribution` is provided
// manually because we want biased weighting (ManyIdentical is the most
// important stress case).
impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
        ]
    }
}
