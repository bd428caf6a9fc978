//! Minimum spanning tree (MST) construction.
//!
//! This module implements Kruskal's algorithm over a [`Graph`]. Edges are
//! stable-sorted by weight so that, among equal weights, the edge appearing
//! first in the graph's edge list is considered first. The whole edge list is
//! scanned, so disconnected graphs produce a minimum spanning forest instead
//! of an error.

use tracing::{debug, instrument};

use crate::{
    Result,
    disjoint_set::DisjointSet,
    edge::{Edge, total_weight},
    error::{SpanError, check_vertex},
    graph::Graph,
};

/// The output of a minimum spanning forest computation.
///
/// Edges are kept in acceptance order (non-decreasing weight). When the input
/// graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningForest {
    vertex_count: usize,
    edges: Vec<Edge>,
    tree_count: usize,
}

impl SpanningForest {
    /// Returns the forest edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Consumes the forest and returns its edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn into_edges(self) -> Vec<Edge> { self.edges }

    /// Returns the number of vertices the forest spans.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of trees (connected components) in the forest.
    #[must_use]
    #[rustfmt::skip]
    pub const fn tree_count(&self) -> usize { self.tree_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.tree_count == 1
    }

    /// Returns the sum of the forest's edge weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        total_weight(&self.edges)
    }
}

/// Computes a minimum spanning forest using Kruskal's algorithm.
///
/// Self-loops never enter the forest. Graphs with zero or one vertex yield an
/// empty forest.
///
/// # Errors
///
/// Returns an error when an edge references a vertex `>= graph.vertex_count()`
/// or carries a non-finite weight.
///
/// # Examples
/// ```
/// use spanswap_core::{Edge, Graph, build_mst};
///
/// let mut graph = Graph::new(4);
/// graph.add_edge(0, 1, 1.0);
/// graph.add_edge(1, 2, 2.0);
/// graph.add_edge(2, 3, 1.0);
/// graph.add_edge(0, 3, 4.0);
/// graph.add_edge(0, 2, 3.0);
///
/// let forest = build_mst(&graph)?;
/// assert!(forest.is_tree());
/// assert_eq!(
///     forest.edges(),
///     &[Edge::new(0, 1, 1.0), Edge::new(2, 3, 1.0), Edge::new(1, 2, 2.0)],
/// );
/// assert_eq!(forest.total_weight(), 4.0);
/// # Ok::<(), spanswap_core::SpanError>(())
/// ```
#[instrument(
    name = "core.build_mst",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn build_mst(graph: &Graph) -> Result<SpanningForest> {
    let vertex_count = graph.vertex_count();
    let sorted = sorted_edges(graph)?;

    let mut sets = DisjointSet::new(vertex_count);
    let mut edges = Vec::with_capacity(vertex_count.saturating_sub(1));
    for edge in sorted {
        if sets.union(edge.u(), edge.v()) {
            edges.push(*edge);
        }
    }

    let tree_count = sets.set_count();
    debug!(accepted = edges.len(), trees = tree_count, "kruskal scan completed");
    Ok(SpanningForest {
        vertex_count,
        edges,
        tree_count,
    })
}

fn validate_edge(edge: &Edge, vertex_count: usize) -> Result<()> {
    check_vertex(edge.u(), vertex_count)?;
    check_vertex(edge.v(), vertex_count)?;
    if !edge.weight().is_finite() {
        return Err(SpanError::NonFiniteWeight {
            u: edge.u(),
            v: edge.v(),
        });
    }
    Ok(())
}

/// Validates every edge and returns references sorted by ascending weight,
/// preserving input order among equal weights.
fn sorted_edges(graph: &Graph) -> Result<Vec<&Edge>> {
    let mut sorted = Vec::with_capacity(graph.edge_count());
    for edge in graph.edges() {
        validate_edge(edge, graph.vertex_count())?;
        sorted.push(edge);
    }
    sorted.sort_by(|left, right| left.weight().total_cmp(&right.weight()));
    Ok(sorted)
}
