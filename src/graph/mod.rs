//! In-memory graph operations — the core data structure.

pub mod adjacency;
pub mod builder;
pub mod shared;
pub mod snapshot;
pub mod traversal;

pub use adjacency::AdjacencyList;
pub use builder::GraphBuilder;
pub use shared::Graph;
pub use snapshot::{GraphSnapshot, SnapshotEntry};
pub use traversal::{bfs, dfs, TraversalOrder};
