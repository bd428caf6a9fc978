//! Spanswap core library.
//!
//! Builds a minimum spanning tree (or forest) of a weighted undirected graph
//! with Kruskal's algorithm, labels the components left behind when one tree
//! edge is removed, and finds the lightest edge that reconnects them.
//!
//! ```
//! use spanswap_core::{Edge, Graph, build_mst, reconnect};
//!
//! let mut graph = Graph::new(4);
//! graph.add_edge(0, 1, 1.0);
//! graph.add_edge(1, 2, 2.0);
//! graph.add_edge(2, 3, 1.0);
//! graph.add_edge(0, 3, 4.0);
//! graph.add_edge(0, 2, 3.0);
//!
//! let forest = build_mst(&graph)?;
//! assert_eq!(forest.total_weight(), 4.0);
//!
//! let outcome = reconnect(&graph, &forest, &Edge::new(1, 2, 2.0))?;
//! assert_eq!(outcome.replacement(), Some(&Edge::new(0, 2, 3.0)));
//! assert_eq!(outcome.weight(), 5.0);
//! # Ok::<(), spanswap_core::SpanError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod components;
mod disjoint_set;
mod edge;
mod error;
mod graph;
mod mst;
mod reconnect;
mod replacement;


pub use crate::{
    components::{ComponentLabels, compute_components},
    edge::{Edge, total_weight},
    error::{Result, SpanError, SpanErrorCode},
    graph::Graph,
    mst::{SpanningForest, build_mst},
    reconnect::{Reconnection, reconnect},
    replacement::find_replacement_edge,
};
