//! Degree queries over a built graph.

use hh_core::{DegreeSource, RawDegree, VertexId};

use crate::graph::Graph;

/// Out-degree of every vertex, in vertex-ID order.
///
/// For a graph built with `add_undirected_edge` this is its degree sequence.
pub fn extract_degree_sequence(graph: &Graph) -> Vec<RawDegree> {
    graph
        .vertices()
        .iter()
        .map(|v| graph.out_degree(v.id) as RawDegree)
        .collect()
}

/// Handshake check: in an undirected graph the degrees must sum to an even number.
pub fn degree_sum_is_even(graph: &Graph) -> bool {
    graph.edge_count() % 2 == 0
}

/// Vertex with the highest in + out degree; the lowest ID wins ties.
///
/// None when no vertex touches an arc.
pub fn most_connected_vertex(graph: &Graph) -> Option<VertexId> {
    let mut in_degrees = vec![0usize; graph.vertex_count()];
    for vertex in graph.vertices() {
        for edge in graph.neighbors(vertex.id) {
            in_degrees[edge.to.slot()] += 1;
        }
    }

    let mut best: Option<VertexId> = None;
    let mut top = 0;
    for vertex in graph.vertices() {
        let total = graph.out_degree(vertex.id) + in_degrees[vertex.id.slot()];
        if total > top {
            top = total;
            best = Some(vertex.id);
        }
    }
    best
}

impl DegreeSource for Graph {
    fn vertex_count(&self) -> usize {
        Graph::vertex_count(self)
    }

    fn degree_sequence(&self) -> Vec<RawDegree> {
        extract_degree_sequence(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GraphBuilder;

    #[test]
    fn star_degrees() {
        let mut builder = GraphBuilder::new();
        let hub = builder.add_vertex("hub");
        for i in 0..3 {
            let leaf = builder.add_vertex(format!("leaf{i}"));
            builder.add_undirected_edge(hub, leaf, 1.0);
        }
        let graph = builder.build().unwrap();

        assert_eq!(extract_degree_sequence(&graph), vec![3, 1, 1, 1]);
        assert!(degree_sum_is_even(&graph));
        assert_eq!(most_connected_vertex(&graph), Some(hub));
        assert_eq!(graph.degree_sequence(), vec![3, 1, 1, 1]);
        assert_eq!(DegreeSource::vertex_count(&graph), 4);
    }

    #[test]
    fn directed_arcs_can_be_odd() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_vertex("A");
        let b = builder.add_vertex("B");
        builder.add_edge(a, b, 1.0);
        let graph = builder.build().unwrap();

        assert_eq!(extract_degree_sequence(&graph), vec![1, 0]);
        assert!(!degree_sum_is_even(&graph));
    }

    #[test]
    fn most_connected_ties_and_empty() {
        let empty = GraphBuilder::new().build().unwrap();
        assert_eq!(most_connected_vertex(&empty), None);

        let mut builder = GraphBuilder::new();
        builder.add_vertex("lonely");
        builder.add_vertex("also-lonely");
        let edgeless = builder.build().unwrap();
        assert_eq!(most_connected_vertex(&edgeless), None);

        let mut builder = GraphBuilder::new();
        let a = builder.add_vertex("A");
        let b = builder.add_vertex("B");
        builder.add_undirected_edge(a, b, 1.0);
        let graph = builder.build().unwrap();
        assert_eq!(most_connected_vertex(&graph), Some(a));
    }
}
