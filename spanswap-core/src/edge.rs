//! Undirected weighted edges.
//!
//! An [`Edge`] keeps its endpoints in the order they were supplied, but its
//! identity ignores that order: `(u, v, w)` and `(v, u, w)` compare and hash
//! the same. Weights take part in identity, so parallel edges with different
//! weights stay distinct.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A single undirected edge between two vertex indices.
///
/// # Examples
/// ```
/// use spanswap_core::Edge;
///
/// let forward = Edge::new(1, 4, 2.5);
/// let backward = Edge::new(4, 1, 2.5);
/// assert_eq!(forward, backward);
/// assert_ne!(forward, Edge::new(1, 4, 3.0));
/// assert_eq!(forward.canonical(), (1, 4));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    u: usize,
    v: usize,
    weight: f64,
}

impl Edge {
    /// Creates an edge between `u` and `v` with the given weight.
    ///
    /// No validation happens here; algorithms reject out-of-range endpoints
    /// and non-finite weights when they consume the edge.
    #[must_use]
    pub const fn new(u: usize, v: usize, weight: f64) -> Self {
        Self { u, v, weight }
    }

    /// Returns the first endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn u(&self) -> usize { self.u }

    /// Returns the second endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn v(&self) -> usize { self.v }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }

    /// Returns both endpoints in stored order.
    #[must_use]
    #[rustfmt::skip]
    pub const fn endpoints(&self) -> (usize, usize) { (self.u, self.v) }

    /// Returns the endpoints as `(min, max)`.
    #[must_use]
    pub const fn canonical(&self) -> (usize, usize) {
        if self.u <= self.v {
            (self.u, self.v)
        } else {
            (self.v, self.u)
        }
    }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.u == self.v
    }

    /// Returns `true` when the edge joins `a` and `b`, in either order.
    #[must_use]
    pub const fn connects(&self, a: usize, b: usize) -> bool {
        (self.u == a && self.v == b) || (self.u == b && self.v == a)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical() && self.weight.total_cmp(&other.weight).is_eq()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
        self.weight.to_bits().hash(state);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} - {}, w={})", self.u, self.v, self.weight)
    }
}

/// Sums edge weights.
///
/// # Examples
/// ```
/// use spanswap_core::{Edge, total_weight};
///
/// let edges = [Edge::new(0, 1, 1.5), Edge::new(1, 2, 2.0)];
/// assert_eq!(total_weight(&edges), 3.5);
/// ```
#[must_use]
pub fn total_weight(edges: &[Edge]) -> f64 {
    edges.iter().map(Edge::weight).sum()
}
