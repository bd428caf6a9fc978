//! Connected-component labelling of a spanning forest with one edge removed.
//!
//! The traversal is an iterative depth-first search over an adjacency list,
//! so stack depth does not grow with the diameter of the forest.

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::{Result, edge::Edge, error::check_vertex};

/// Component labels for every vertex of a graph.
///
/// Labels are dense ids `0..component_count()` assigned in order of each
/// component's lowest vertex. Only the equivalence relation they induce is
/// meaningful; use [`ComponentLabels::same_component`] rather than comparing
/// against literal ids.
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentLabels {
    labels: Vec<usize>,
    component_count: usize,
    severed: Option<Edge>,
}

impl ComponentLabels {
    /// Builds a labelling from raw component ids.
    ///
    /// Ids are renumbered densely in order of first appearance, so any
    /// labelling with the same equivalence classes yields the same value.
    ///
    /// # Examples
    /// ```
    /// use spanswap_core::ComponentLabels;
    ///
    /// let labels = ComponentLabels::from_labels(vec![7, 7, 3, 9]);
    /// assert_eq!(labels.as_slice(), &[0, 0, 1, 2]);
    /// assert_eq!(labels.component_count(), 3);
    /// assert!(labels.severed_edge().is_none());
    /// ```
    #[must_use]
    pub fn from_labels(raw: Vec<usize>) -> Self {
        let mut remap: HashMap<usize, usize> = HashMap::new();
        let mut labels = Vec::with_capacity(raw.len());
        for id in raw {
            let next = remap.len();
            labels.push(*remap.entry(id).or_insert(next));
        }
        Self {
            labels,
            component_count: remap.len(),
            severed: None,
        }
    }

    /// Returns the label of `vertex`, or `None` when it is out of range.
    #[must_use]
    pub fn label(&self, vertex: usize) -> Option<usize> {
        self.labels.get(vertex).copied()
    }

    /// Returns the raw label array, indexed by vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn as_slice(&self) -> &[usize] { &self.labels }

    /// Returns the number of labelled vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.labels.len() }

    /// Returns `true` when no vertices are labelled.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.labels.is_empty() }

    /// Returns the number of distinct components.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns the edge that was skipped while labelling, if it was present.
    #[must_use]
    #[rustfmt::skip]
    pub const fn severed_edge(&self) -> Option<&Edge> { self.severed.as_ref() }

    /// Returns `true` when the requested edge was found and skipped.
    #[must_use]
    pub const fn removal_applied(&self) -> bool {
        self.severed.is_some()
    }

    /// Returns `true` when both vertices are labelled and share a component.
    #[must_use]
    pub fn same_component(&self, a: usize, b: usize) -> bool {
        matches!((self.label(a), self.label(b)), (Some(left), Some(right)) if left == right)
    }

    /// Returns the vertices of each component, ascending, ordered by label.
    ///
    /// # Examples
    /// ```
    /// use spanswap_core::{Edge, compute_components};
    ///
    /// let mst = [Edge::new(0, 1, 1.0), Edge::new(1, 2, 1.0)];
    /// let labels = compute_components(4, &mst, Some(&Edge::new(2, 1, 1.0)))?;
    /// assert_eq!(labels.groups(), vec![vec![0, 1], vec![2], vec![3]]);
    /// # Ok::<(), spanswap_core::SpanError>(())
    /// ```
    #[must_use]
    pub fn groups(&self) -> Vec<Vec<usize>> {
        let mut groups = vec![Vec::new(); self.component_count];
        for (vertex, &label) in self.labels.iter().enumerate() {
            if let Some(group) = groups.get_mut(label) {
                group.push(vertex);
            }
        }
        groups
    }
}

/// Labels the connected components of `mst` after skipping `removed`.
///
/// Every edge equal to `removed` (endpoint order ignored) is left out of the
/// adjacency list. When `removed` is `None` or absent from `mst`, nothing is
/// skipped and [`ComponentLabels::removal_applied`] returns `false`.
///
/// # Errors
///
/// Returns [`crate::SpanError::VertexOutOfRange`] when an edge endpoint is
/// `>= vertex_count`.
///
/// # Examples
/// ```
/// use spanswap_core::{Edge, compute_components};
///
/// let mst = [Edge::new(0, 1, 1.0), Edge::new(2, 3, 1.0), Edge::new(1, 2, 2.0)];
/// let labels = compute_components(4, &mst, Some(&Edge::new(1, 2, 2.0)))?;
/// assert!(labels.removal_applied());
/// assert_eq!(labels.component_count(), 2);
/// assert!(labels.same_component(0, 1));
/// assert!(!labels.same_component(1, 2));
/// # Ok::<(), spanswap_core::SpanError>(())
/// ```
#[instrument(
    name = "core.compute_components",
    err,
    skip(mst, removed),
    fields(vertices = vertex_count, edges = mst.len()),
)]
pub fn compute_components(
    vertex_count: usize,
    mst: &[Edge],
    removed: Option<&Edge>,
) -> Result<ComponentLabels> {
    let mut severed = None;
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); vertex_count];
    for edge in mst {
        check_vertex(edge.u(), vertex_count)?;
        check_vertex(edge.v(), vertex_count)?;
        if removed.is_some_and(|target| target == edge) {
            severed = Some(*edge);
            continue;
        }
        adjacency[edge.u()].push(edge.v());
        adjacency[edge.v()].push(edge.u());
    }

    let (labels, component_count) = label_components(&adjacency);
    debug!(
        components = component_count,
        removal_applied = severed.is_some(),
        "component labelling completed"
    );
    Ok(ComponentLabels {
        labels,
        component_count,
        severed,
    })
}

fn label_components(adjacency: &[Vec<usize>]) -> (Vec<usize>, usize) {
    let mut labels: Vec<Option<usize>> = vec![None; adjacency.len()];
    let mut next_id = 0;
    let mut stack = Vec::new();

    for root in 0..adjacency.len() {
        if labels[root].is_some() {
            continue;
        }
        labels[root] = Some(next_id);
        stack.push(root);

        while let Some(vertex) = stack.pop() {
            for &neighbour in &adjacency[vertex] {
                if labels[neighbour].is_none() {
                    labels[neighbour] = Some(next_id);
                    stack.push(neighbour);
                }
            }
        }
        next_id += 1;
    }

    (labels.into_iter().flatten().collect(), next_id)
}
