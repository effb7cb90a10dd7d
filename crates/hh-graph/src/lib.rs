//! hh-graph: weighted adjacency-list graph used as a degree source.
//!
//! Provides:
//! - Core graph data structures (Vertex, Edge, Graph)
//! - Incremental graph builder with validation
//! - Degree queries and degree-sequence extraction
//!
//! # Example
//!
//! ```
//! use hh_graph::{GraphBuilder, extract_degree_sequence};
//!
//! let mut builder = GraphBuilder::new();
//! let a = builder.add_vertex("A");
//! let b = builder.add_vertex("B");
//! builder.add_undirected_edge(a, b, 2.5);
//! let graph = builder.build().unwrap();
//!
//! assert_eq!(graph.vertices().len(), 2);
//! assert_eq!(extract_degree_sequence(&graph), vec![1, 1]);
//! ```

pub mod builder;
pub mod degrees;
pub mod error;
pub mod graph;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use degrees::{degree_sum_is_even, extract_degree_sequence, most_connected_vertex};
pub use error::GraphError;
pub use graph::{Edge, Graph, Vertex, Weight};
