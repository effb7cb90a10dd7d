//! Core graph data structures.

use hh_core::VertexId;

/// Edge weight (e.g. a distance in km). Degrees ignore it.
pub type Weight = f64;

/// A vertex: just an ID and a name for human reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    pub id: VertexId,
    pub name: String,
}

/// An outgoing arc stored in its source vertex's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub to: VertexId,
    pub weight: Weight,
}

/// The graph: a validated, immutable weighted adjacency list.
///
/// Arcs are directed. An undirected edge is stored as two arcs, so
/// `out_degree` of a vertex in an undirected graph is its degree.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) vertices: Vec<Vertex>,

    /// Offsets into `edges`: vertex i's arcs are in edges[offsets[i]..offsets[i+1]].
    pub(crate) offsets: Vec<usize>,

    /// Flat arc list, grouped by source vertex in insertion order.
    pub(crate) edges: Vec<Edge>,
}

impl Graph {
    /// Return all vertices, in ID order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Total number of stored arcs (an undirected edge counts twice).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get a vertex by ID (returns None if ID out of bounds).
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.slot())
    }

    /// Look a vertex up by name.
    pub fn vertex_by_name(&self, name: &str) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.name == name)
    }

    /// Outgoing arcs of a vertex; empty for unknown IDs.
    pub fn neighbors(&self, id: VertexId) -> &[Edge] {
        let idx = id.slot();
        if idx >= self.vertices.len() {
            return &[];
        }
        &self.edges[self.offsets[idx]..self.offsets[idx + 1]]
    }

    /// Whether an arc `from -> to` exists.
    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.neighbors(from).iter().any(|e| e.to == to)
    }

    /// Number of outgoing arcs.
    pub fn out_degree(&self, id: VertexId) -> usize {
        self.neighbors(id).len()
    }

    /// Number of arcs pointing at `id`. Linear in the number of arcs.
    pub fn in_degree(&self, id: VertexId) -> usize {
        self.edges.iter().filter(|e| e.to == id).count()
    }
}
