//! lockgraph: a thread-safe adjacency-list graph.
//!
//! A `Graph` maps each vertex to an ordered list of neighbors behind a single
//! mutex, supports vertex/edge mutation, and offers breadth-first and
//! depth-first traversal.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{AdjacencyList, Graph, GraphBuilder, GraphSnapshot, SnapshotEntry, TraversalOrder};
pub use types::{Directedness, GraphConfig, GraphError, GraphResult, Vertex};
