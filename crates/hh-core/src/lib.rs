//! hh-core: shared foundation for the havel-hakimi workspace.
//!
//! Contains:
//! - ids (compact vertex IDs for the graph layer)
//! - degree (degree types + the `DegreeSource` collaborator trait)
//! - error (shared error types)

pub mod degree;
pub mod error;
pub mod ids;

// Re-exports: nice ergonomics for downstream crates
pub use degree::*;
pub use error::{HhError, HhResult};
pub use ids::*;
