//! Structural invariants of the spanning forest.
//!
//! For any forest produced by [`build_mst`], verifies:
//!
//! - **Provenance**: every forest edge is an edge of the input graph.
//! - **Range**: every endpoint lies in `0..n`.
//! - **Acyclicity**: no edge closes a cycle.
//! - **Edge count**: `n - c` edges for `c` trees.
//! - **Spanning**: forest trees coincide with the input's components.

use std::collections::HashMap;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Edge, SpanningForest, build_mst};

use super::helpers::{acyclic_component_count, find_root};
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let forest = build_mst(&fixture.graph()).map_err(|e| {
        TestCaseError::fail(format!("build_mst failed: {e} ({})", fixture.describe()))
    })?;

    validate_provenance(&fixture.edges, forest.edges())?;
    let trees = acyclic_component_count(fixture.vertex_count, forest.edges())?;
    validate_edge_count(fixture.vertex_count, &forest, trees)?;
    validate_spanning(fixture, &forest)?;

    Ok(())
}

/// Verifies that every forest edge occurs in the input, counting
/// multiplicity so one input edge cannot back two forest edges.
fn validate_provenance(input: &[Edge], forest: &[Edge]) -> TestCaseResult {
    let mut available: HashMap<Edge, usize> = HashMap::new();
    for edge in input {
        *available.entry(*edge).or_default() += 1;
    }
    for (i, edge) in forest.iter().enumerate() {
        match available.get_mut(edge) {
            Some(count) if *count > 0 => *count -= 1,
            _ => {
                return Err(TestCaseError::fail(format!(
                    "edge {i}: {edge} is not an input edge"
                )));
            }
        }
    }
    Ok(())
}

/// Verifies that the forest has exactly `n - c` edges and reports `c` trees.
fn validate_edge_count(
    vertex_count: usize,
    forest: &SpanningForest,
    trees: usize,
) -> TestCaseResult {
    if forest.tree_count() != trees {
        return Err(TestCaseError::fail(format!(
            "reported {} trees, edges form {trees}",
            forest.tree_count(),
        )));
    }
    let expected = vertex_count.saturating_sub(trees);
    if forest.edges().len() != expected {
        return Err(TestCaseError::fail(format!(
            "edge count {}, expected n - c = {expected} (n={vertex_count}, c={trees})",
            forest.edges().len(),
        )));
    }
    Ok(())
}

/// Verifies that two vertices share a tree exactly when the input connects
/// them.
fn validate_spanning(fixture: &MstFixture, forest: &SpanningForest) -> TestCaseResult {
    let input = connectivity_roots(fixture.vertex_count, &fixture.edges);
    let output = connectivity_roots(fixture.vertex_count, forest.edges());

    let mut pairing: HashMap<usize, usize> = HashMap::new();
    for vertex in 0..fixture.vertex_count {
        let expected = *pairing.entry(input[vertex]).or_insert(output[vertex]);
        if expected != output[vertex] {
            return Err(TestCaseError::fail(format!(
                "vertex {vertex} is connected in the input but not in the forest ({})",
                fixture.describe(),
            )));
        }
    }

    if input_component_count(&input) != forest.tree_count() {
        return Err(TestCaseError::fail(format!(
            "input has {} components but forest has {} trees ({})",
            input_component_count(&input),
            forest.tree_count(),
            fixture.describe(),
        )));
    }
    Ok(())
}

/// Returns the union-find root of every vertex after joining `edges`.
fn connectivity_roots(vertex_count: usize, edges: &[Edge]) -> Vec<usize> {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for edge in edges {
        let ra = find_root(&mut parent, edge.u());
        let rb = find_root(&mut parent, edge.v());
        if ra != rb {
            parent[rb] = ra;
        }
    }
    (0..vertex_count)
        .map(|vertex| find_root(&mut parent, vertex))
        .collect()
}

fn input_component_count(roots: &[usize]) -> usize {
    roots
        .iter()
        .enumerate()
        .filter(|(vertex, root)| vertex == *root)
        .count()
}
