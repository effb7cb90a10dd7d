//! Graph-specific error types.

use hh_core::{HhError, VertexId};

/// Graph construction and validation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// An edge refers to a vertex that doesn't exist.
    InvalidVertexRef { vertex: VertexId },

    /// An edge weight is NaN or infinite.
    NonFiniteWeight {
        from: VertexId,
        to: VertexId,
        weight: f64,
    },

    /// Two vertices share a name.
    DuplicateName { name: String },

    /// Vertex IDs are not contiguous with their storage slots.
    IdMismatch { vertex: VertexId, slot: usize },

    /// Adjacency offsets or targets are inconsistent with the arc list.
    InconsistentAdjacency { vertex: VertexId },

    /// More vertices were added than `VertexId` can address.
    TooManyVertices,
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::InvalidVertexRef { vertex } => {
                write!(f, "Edge refers to non-existent vertex {}", vertex)
            }
            GraphError::NonFiniteWeight { from, to, weight } => {
                write!(f, "Edge {} -> {} has non-finite weight {}", from, to, weight)
            }
            GraphError::DuplicateName { name } => {
                write!(f, "Vertex name '{}' is used more than once", name)
            }
            GraphError::IdMismatch { vertex, slot } => {
                write!(f, "Vertex {} stored in slot {}", vertex, slot)
            }
            GraphError::InconsistentAdjacency { vertex } => {
                write!(f, "Adjacency list of vertex {} is inconsistent", vertex)
            }
            GraphError::TooManyVertices => {
                write!(f, "Graph has no vertex IDs left")
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for HhError {
    fn from(err: GraphError) -> Self {
        HhError::Graph {
            what: err.to_string(),
        }
    }
}
