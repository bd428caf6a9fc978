//! Weighted undirected graph container.

use crate::edge::Edge;

/// A vertex count plus an ordered list of undirected edges.
///
/// Vertices are the implicit indices `0..vertex_count`. The graph performs no
/// validation when edges are added; the algorithms report out-of-range
/// endpoints when they read them.
///
/// # Examples
/// ```
/// use spanswap_core::Graph;
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1, 1.0);
/// graph.add_edge(1, 2, 2.0);
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub const fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
        }
    }

    /// Creates a graph from an existing edge list, keeping its order.
    ///
    /// # Examples
    /// ```
    /// use spanswap_core::{Edge, Graph};
    ///
    /// let graph = Graph::from_edges(2, [Edge::new(0, 1, 4.0)]);
    /// assert_eq!(graph.edges(), &[Edge::new(1, 0, 4.0)]);
    /// ```
    #[must_use]
    pub fn from_edges(vertex_count: usize, edges: impl IntoIterator<Item = Edge>) -> Self {
        Self {
            vertex_count,
            edges: edges.into_iter().collect(),
        }
    }

    /// Appends an edge between `u` and `v`.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: f64) {
        self.edges.push(Edge::new(u, v, weight));
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the edges in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the number of edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

impl Extend<Edge> for Graph {
    fn extend<T: IntoIterator<Item = Edge>>(&mut self, iter: T) {
        self.edges.extend(iter);
    }
}
