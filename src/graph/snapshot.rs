//! Point-in-time copies of a graph for inspection and JSON output.

use serde::Serialize;

use crate::types::{Directedness, Vertex};

use super::AdjacencyList;

/// One vertex and its neighbors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotEntry<V> {
    pub vertex: V,
    pub neighbors: Vec<V>,
}

/// A copy of a graph's adjacency, in registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSnapshot<V> {
    pub directedness: Directedness,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub adjacency: Vec<SnapshotEntry<V>>,
}

impl<V: Vertex> GraphSnapshot<V> {
    pub(crate) fn capture(adjacency: &AdjacencyList<V>) -> Self {
        Self {
            directedness: adjacency.directedness(),
            vertex_count: adjacency.vertex_count(),
            edge_count: adjacency.edge_count(),
            adjacency: adjacency
                .iter()
                .map(|(vertex, neighbors)| SnapshotEntry {
                    vertex: vertex.clone(),
                    neighbors: neighbors.to_vec(),
                })
                .collect(),
        }
    }

    /// Neighbors recorded for `vertex`, if it was registered.
    pub fn neighbors(&self, vertex: &V) -> Option<&[V]> {
        self.adjacency
            .iter()
            .find(|e| &e.vertex == vertex)
            .map(|e| e.neighbors.as_slice())
    }
}
