//! Error types for the lockgraph library.

use std::fmt::Debug;

use thiserror::Error;

/// All errors that can occur when operating on a graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A required vertex is not registered.
    #[error("Vertex {0} does not exist in the graph")]
    MissingVertex(String),

    /// Removal attempted on a graph with no vertices.
    #[error("Graph is empty")]
    EmptyGraph,
}

impl GraphError {
    /// Build a `MissingVertex` error naming `vertex` by its `Debug` form.
    pub fn missing<V: Debug + ?Sized>(vertex: &V) -> Self {
        Self::MissingVertex(format!("{:?}", vertex))
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
