//! Reassembling a spanning tree after one of its edges is removed.
//!
//! [`reconnect`] chains component analysis and replacement search for a single
//! removed edge and returns the resulting edge set together with the weight
//! bookkeeping a caller needs to report the change.

use tracing::{info, instrument};

use crate::{
    Result,
    components::{ComponentLabels, compute_components},
    edge::{Edge, total_weight},
    graph::Graph,
    mst::SpanningForest,
    replacement::find_replacement_edge,
};

/// Outcome of removing one edge from a spanning forest and repairing the cut.
#[derive(Clone, Debug, PartialEq)]
pub struct Reconnection {
    removed: Edge,
    components: ComponentLabels,
    replacement: Option<Edge>,
    edges: Vec<Edge>,
    original_weight: f64,
}

impl Reconnection {
    /// Returns the edge the caller asked to remove.
    #[must_use]
    #[rustfmt::skip]
    pub const fn removed(&self) -> &Edge { &self.removed }

    /// Returns `true` when the removed edge was part of the forest.
    #[must_use]
    pub const fn removal_applied(&self) -> bool {
        self.components.removal_applied()
    }

    /// Returns the component labelling after the removal.
    #[must_use]
    #[rustfmt::skip]
    pub const fn components(&self) -> &ComponentLabels { &self.components }

    /// Returns the lightest edge reconnecting the split, if any.
    #[must_use]
    #[rustfmt::skip]
    pub const fn replacement(&self) -> Option<&Edge> { self.replacement.as_ref() }

    /// Returns the new spanning edge set: the forest minus the removed edge,
    /// with the replacement appended when one exists.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the total weight of the original forest.
    #[must_use]
    #[rustfmt::skip]
    pub const fn original_weight(&self) -> f64 { self.original_weight }

    /// Returns the total weight of the new edge set.
    #[must_use]
    pub fn weight(&self) -> f64 {
        total_weight(&self.edges)
    }

    /// Returns `weight() - original_weight()`.
    #[must_use]
    pub fn weight_delta(&self) -> f64 {
        self.weight() - self.original_weight
    }
}

/// Removes `removed` from `forest` and substitutes the lightest crossing edge.
///
/// When `removed` is not part of `forest`, no structural change occurs: the
/// returned edge set equals the forest, no replacement is searched and
/// [`Reconnection::removal_applied`] is `false`.
///
/// # Errors
///
/// Returns [`crate::SpanError::VertexOutOfRange`] when the forest or the graph
/// reference vertices outside the graph.
///
/// # Examples
/// ```
/// use spanswap_core::{Edge, Graph, build_mst, reconnect};
///
/// let mut graph = Graph::new(4);
/// graph.add_edge(0, 1, 1.0);
/// graph.add_edge(1, 2, 2.0);
/// graph.add_edge(2, 3, 1.0);
/// graph.add_edge(0, 3, 4.0);
/// graph.add_edge(0, 2, 3.0);
///
/// let forest = build_mst(&graph)?;
/// let outcome = reconnect(&graph, &forest, &Edge::new(2, 1, 2.0))?;
/// assert!(outcome.removal_applied());
/// assert_eq!(outcome.replacement(), Some(&Edge::new(0, 2, 3.0)));
/// assert_eq!(outcome.weight(), 5.0);
/// assert_eq!(outcome.weight_delta(), 1.0);
/// # Ok::<(), spanswap_core::SpanError>(())
/// ```
#[instrument(
    name = "core.reconnect",
    err,
    skip(graph, forest, removed),
    fields(vertices = graph.vertex_count(), removed = %removed),
)]
pub fn reconnect(graph: &Graph, forest: &SpanningForest, removed: &Edge) -> Result<Reconnection> {
    let components = compute_components(graph.vertex_count(), forest.edges(), Some(removed))?;
    let original_weight = forest.total_weight();

    if !components.removal_applied() {
        info!("removed edge is not part of the forest; nothing to reconnect");
        return Ok(Reconnection {
            removed: *removed,
            components,
            replacement: None,
            edges: forest.edges().to_vec(),
            original_weight,
        });
    }

    let replacement = find_replacement_edge(graph, &components)?;
    let edges = without_first(forest.edges(), removed)
        .chain(replacement)
        .collect();

    info!(
        components = components.component_count(),
        replacement = ?replacement,
        "reconnection completed"
    );
    Ok(Reconnection {
        removed: *removed,
        components,
        replacement,
        edges,
        original_weight,
    })
}

/// Yields `edges` with the first occurrence of `target` skipped.
fn without_first<'a>(edges: &'a [Edge], target: &'a Edge) -> impl Iterator<Item = Edge> + 'a {
    let position = edges.iter().position(|edge| edge == target);
    edges
        .iter()
        .enumerate()
        .filter(move |(index, _)| Some(*index) != position)
        .map(|(_, edge)| *edge)
}
