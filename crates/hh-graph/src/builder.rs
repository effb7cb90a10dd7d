//! Incremental graph builder.

use hh_core::{HhResult, VertexId};

use crate::error::GraphError;
use crate::graph::{Edge, Graph, Vertex, Weight};
use crate::validate;

/// Builder for constructing a graph incrementally.
///
/// Use `add_vertex` and `add_edge`/`add_undirected_edge` to build up the graph,
/// then call `build()` to validate and freeze it into an immutable `Graph`.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    vertices: Vec<Vertex>,
    /// Arcs in insertion order: (source, edge).
    arcs: Vec<(VertexId, Edge)>,
    next_vertex_id: u32,
    /// Set once the ID space is used up; `build()` then fails.
    ids_exhausted: bool,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex to the graph and return its ID.
    ///
    /// Once every ID is taken the vertex is dropped and `build()` reports
    /// `GraphError::TooManyVertices`.
    pub fn add_vertex(&mut self, name: impl Into<String>) -> VertexId {
        let Some(id) = VertexId::try_from_index(self.next_vertex_id) else {
            self.ids_exhausted = true;
            return VertexId::from_index(VertexId::MAX_INDEX);
        };
        match self.next_vertex_id.checked_add(1) {
            Some(next) => self.next_vertex_id = next,
            None => self.ids_exhausted = true,
        }
        self.vertices.push(Vertex {
            id,
            name: name.into(),
        });
        id
    }

    /// Return the vertex with this name, adding it first if it is new.
    pub fn vertex_named(&mut self, name: &str) -> VertexId {
        match self.vertices.iter().find(|v| v.name == name) {
            Some(v) => v.id,
            None => self.add_vertex(name),
        }
    }

    /// Add a directed arc `from -> to`.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) {
        self.arcs.push((from, Edge { to, weight }));
    }

    /// Add an undirected edge, stored as the two arcs `a -> b` and `b -> a`.
    pub fn add_undirected_edge(&mut self, a: VertexId, b: VertexId, weight: Weight) {
        self.add_edge(a, b, weight);
        self.add_edge(b, a, weight);
    }

    /// Build and validate the graph, returning an immutable `Graph`.
    ///
    /// This performs validation and constructs compact adjacency lists.
    pub fn build(self) -> HhResult<Graph> {
        if self.ids_exhausted {
            return Err(GraphError::TooManyVertices.into());
        }
        validate::validate_structure(&self.vertices, &self.arcs)?;

        let (counts, offsets, edges) = Self::build_adjacency(self.vertices.len(), &self.arcs);

        validate::validate_adjacency(&self.vertices, &counts, &offsets, &edges)?;

        Ok(Graph {
            vertices: self.vertices,
            offsets,
            edges,
        })
    }

    /// Group arcs by source vertex, keeping insertion order within each group.
    ///
    /// Returns the per-vertex arc counts alongside the offsets and flat arcs.
    fn build_adjacency(
        vertex_count: usize,
        arcs: &[(VertexId, Edge)],
    ) -> (Vec<usize>, Vec<usize>, Vec<Edge>) {
        let mut counts = vec![0usize; vertex_count];
        for (from, _) in arcs {
            counts[from.slot()] += 1;
        }

        let mut offsets = Vec::with_capacity(vertex_count + 1);
        offsets.push(0);
        for count in &counts {
            let last = offsets[offsets.len() - 1];
            offsets.push(last + count);
        }

        let mut cursor = offsets[..vertex_count].to_vec();
        let mut slots: Vec<Option<Edge>> = vec![None; arcs.len()];
        for (from, edge) in arcs {
            let at = &mut cursor[from.slot()];
            slots[*at] = Some(*edge);
            *at += 1;
        }

        (counts, offsets, slots.into_iter().flatten().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_basic() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_vertex("A");
        let b = builder.add_vertex("B");
        builder.add_undirected_edge(a, b, 1.0);

        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(builder.vertices.len(), 2);
        assert_eq!(builder.arcs.len(), 2);
    }

    #[test]
    fn builder_vertex_named_reuses() {
        let mut builder = GraphBuilder::new();
        let a = builder.vertex_named("A");
        let b = builder.vertex_named("B");
        assert_eq!(builder.vertex_named("A"), a);
        assert_ne!(a, b);
        assert_eq!(builder.vertices.len(), 2);
    }

    #[test]
    fn adjacency_groups_by_source() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_vertex("A");
        let b = builder.add_vertex("B");
        let c = builder.add_vertex("C");
        builder.add_edge(b, c, 1.0);
        builder.add_edge(a, b, 2.0);
        builder.add_edge(b, a, 3.0);

        let graph = builder.build().unwrap();
        assert_eq!(graph.offsets, vec![0, 1, 3, 3]);
        let b_targets: Vec<_> = graph.neighbors(b).iter().map(|e| e.to).collect();
        assert_eq!(b_targets, vec![c, a]);
        assert_eq!(graph.neighbors(a)[0].weight, 2.0);
    }

    #[test]
    fn id_space_exhaustion_fails_build() {
        let mut builder = GraphBuilder::new();
        builder.next_vertex_id = VertexId::MAX_INDEX;
        let last = builder.add_vertex("last");
        assert_eq!(last.index(), VertexId::MAX_INDEX);
        assert!(!builder.ids_exhausted);

        let overflow = builder.add_vertex("overflow");
        assert_eq!(overflow, last);
        assert_eq!(builder.vertices.len(), 1);
        assert!(builder.ids_exhausted);

        let err = builder.build().unwrap_err();
        assert!(err.to_string().contains("no vertex IDs left"));
    }

    #[test]
    fn build_rejects_dangling_edge() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_vertex("A");
        builder.add_edge(a, VertexId::from_index(5), 1.0);
        assert!(builder.build().is_err());
    }
}
