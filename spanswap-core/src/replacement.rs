//! Replacement-edge search across a component split.

use tracing::{debug, instrument};

use crate::{Result, components::ComponentLabels, edge::Edge, error::SpanError, graph::Graph};

/// Finds the lightest graph edge whose endpoints lie in different components.
///
/// Edges equal to the labelling's severed edge are skipped: the removed edge
/// is excluded from the reconnected tree, so it can never be its own
/// replacement. Among equal weights the edge listed first in the graph wins.
/// Returns `Ok(None)` when no crossing edge exists, which means the split
/// cannot be repaired.
///
/// # Errors
///
/// Returns [`SpanError::VertexOutOfRange`] when an edge endpoint has no label.
///
/// # Examples
/// ```
/// use spanswap_core::{Edge, Graph, build_mst, compute_components, find_replacement_edge};
///
/// let mut graph = Graph::new(4);
/// graph.add_edge(0, 1, 1.0);
/// graph.add_edge(1, 2, 2.0);
/// graph.add_edge(2, 3, 1.0);
/// graph.add_edge(0, 3, 4.0);
/// graph.add_edge(0, 2, 3.0);
///
/// let forest = build_mst(&graph)?;
/// let removed = Edge::new(1, 2, 2.0);
/// let labels = compute_components(graph.vertex_count(), forest.edges(), Some(&removed))?;
/// let replacement = find_replacement_edge(&graph, &labels)?;
/// assert_eq!(replacement, Some(Edge::new(0, 2, 3.0)));
/// # Ok::<(), spanswap_core::SpanError>(())
/// ```
#[instrument(
    name = "core.find_replacement_edge",
    err,
    skip(graph, labels),
    fields(edges = graph.edge_count(), components = labels.component_count()),
)]
pub fn find_replacement_edge(graph: &Graph, labels: &ComponentLabels) -> Result<Option<Edge>> {
    let excluded = labels.severed_edge();
    let mut best: Option<&Edge> = None;

    for edge in graph.edges() {
        let left = component_of(labels, edge.u())?;
        let right = component_of(labels, edge.v())?;
        if left == right || excluded.is_some_and(|severed| severed == edge) {
            continue;
        }
        if best.is_none_or(|current| edge.weight() < current.weight()) {
            best = Some(edge);
        }
    }

    match best {
        Some(edge) => debug!(replacement = %edge, "replacement edge selected"),
        None => debug!("no crossing edge found"),
    }
    Ok(best.copied())
}

fn component_of(labels: &ComponentLabels, vertex: usize) -> Result<usize> {
    labels.label(vertex).ok_or(SpanError::VertexOutOfRange {
        vertex,
        vertex_count: labels.len(),
    })
}
