//! Graph validation logic.

use std::collections::HashSet;
use hh_core::{HhResult, VertexId};

use crate::error::GraphError;
use crate::graph::{Edge, Vertex};

/// Validate the raw builder state: IDs, names, arc endpoints and weights.
pub(crate) fn validate_structure(vertices: &[Vertex], arcs: &[(VertexId, Edge)]) -> HhResult<()> {
    // Vertex IDs must match their storage slots
    for (slot, vertex) in vertices.iter().enumerate() {
        if vertex.id.slot() != slot {
            return Err(GraphError::IdMismatch {
                vertex: vertex.id,
                slot,
            }
            .into());
        }
    }

    let mut names: HashSet<&str> = HashSet::new();
    for vertex in vertices {
        if !names.insert(vertex.name.as_str()) {
            return Err(GraphError::DuplicateName {
                name: vertex.name.clone(),
            }
            .into());
        }
    }

    for &(from, edge) in arcs {
        for endpoint in [from, edge.to] {
            if endpoint.slot() >= vertices.len() {
                return Err(GraphError::InvalidVertexRef { vertex: endpoint }.into());
            }
        }
        if !edge.weight.is_finite() {
            return Err(GraphError::NonFiniteWeight {
                from,
                to: edge.to,
                weight: edge.weight,
            }
            .into());
        }
    }

    Ok(())
}

/// Validate compact adjacency against the per-vertex arc counts it was built from.
///
/// Linear in the number of vertices.
pub(crate) fn validate_adjacency(
    vertices: &[Vertex],
    counts: &[usize],
    offsets: &[usize],
    edges: &[Edge],
) -> HhResult<()> {
    let first = vertices.first().map_or(VertexId::from_index(0), |v| v.id);

    if counts.len() != vertices.len() || offsets.len() != vertices.len() + 1 {
        return Err(GraphError::InconsistentAdjacency { vertex: first }.into());
    }
    if offsets.first() != Some(&0) || offsets.last() != Some(&edges.len()) {
        return Err(GraphError::InconsistentAdjacency { vertex: first }.into());
    }

    // Each vertex's window must hold exactly the arcs whose source it is
    for ((vertex, window), &count) in vertices.iter().zip(offsets.windows(2)).zip(counts) {
        if window[1].checked_sub(window[0]) != Some(count) {
            return Err(GraphError::InconsistentAdjacency { vertex: vertex.id }.into());
        }
    }

    Ok(())
}
