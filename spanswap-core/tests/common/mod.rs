use spanswap_core::{Edge, Graph};

/// Four vertices, five edges; the minimum spanning tree weighs 4.
#[must_use]
pub fn reference_graph() -> Graph {
    Graph::from_edges(
        4,
        [
            Edge::new(0, 1, 1.0),
            Edge::new(1, 2, 2.0),
            Edge::new(2, 3, 1.0),
            Edge::new(0, 3, 4.0),
            Edge::new(0, 2, 3.0),
        ],
    )
}

/// A path `0 - 1 - ... - (n - 1)` of unit edges closed by one heavy edge
/// between its ends.
#[must_use]
pub fn closed_path(vertex_count: usize, closing_weight: f64) -> Graph {
    let mut graph = Graph::new(vertex_count);
    for u in 1..vertex_count {
        graph.add_edge(u - 1, u, 1.0);
    }
    graph.add_edge(vertex_count - 1, 0, closing_weight);
    graph
}
