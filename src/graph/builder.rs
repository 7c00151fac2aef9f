//! Fluent API for building Graph instances.

use crate::types::{Directedness, Vertex};

use super::{AdjacencyList, Graph};

/// Fluent builder for constructing a `Graph`.
///
/// Unlike `Graph::add_edge`, `edge` registers missing endpoints.
pub struct GraphBuilder<V> {
    directedness: Directedness,
    vertices: Vec<V>,
    edges: Vec<(V, V)>,
}

impl<V: Vertex> GraphBuilder<V> {
    /// Create a new builder.
    pub fn new(directedness: Directedness) -> Self {
        Self {
            directedness,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Create a builder for a directed graph.
    pub fn directed() -> Self {
        Self::new(Directedness::Directed)
    }

    /// Create a builder for an undirected graph.
    pub fn undirected() -> Self {
        Self::new(Directedness::Undirected)
    }

    /// Register a vertex.
    pub fn vertex(mut self, vertex: V) -> Self {
        self.vertices.push(vertex);
        self
    }

    /// Register several vertices, in order.
    pub fn vertices<I: IntoIterator<Item = V>>(mut self, vertices: I) -> Self {
        self.vertices.extend(vertices);
        self
    }

    /// Add an edge, registering either endpoint if needed.
    pub fn edge(mut self, src: V, dest: V) -> Self {
        self.edges.push((src, dest));
        self
    }

    /// Build the final Graph.
    ///
    /// Never fails: every edge endpoint is registered before it is linked.
    pub fn build(self) -> Graph<V> {
        let mut adjacency = AdjacencyList::new(self.directedness);
        for vertex in self.vertices {
            adjacency.add_vertex(vertex);
        }
        for (src, dest) in self.edges {
            adjacency.connect(src, dest);
        }
        Graph::from_adjacency(adjacency)
    }
}

impl<V: Vertex> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::undirected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_registers_endpoints_in_order() {
        let graph = GraphBuilder::undirected()
            .vertex("root")
            .edge("a", "b")
            .edge("root", "a")
            .build();

        assert_eq!(graph.vertices(), vec!["root", "a", "b"]);
        assert_eq!(graph.get_adjacent_vertices(&"a"), vec!["b", "root"]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_directed_builder() {
        let graph = GraphBuilder::directed()
            .vertices([1, 2, 3])
            .edge(1, 2)
            .edge(1, 2)
            .build();

        assert!(graph.is_directed());
        assert_eq!(graph.get_adjacent_vertices(&1), vec![2]);
        assert!(graph.get_adjacent_vertices(&2).is_empty());
        assert_eq!(graph.vertex_count(), 3);
    }

    #[test]
    fn test_edge_to_unseen_vertex_registers_it() {
        let graph = GraphBuilder::undirected().vertex(1).edge(1, 2).edge(2, 2).build();

        assert_eq!(graph.vertices(), vec![1, 2]);
        assert_eq!(graph.get_adjacent_vertices(&1), vec![2]);
        assert_eq!(graph.get_adjacent_vertices(&2), vec![1, 2]);
        assert_eq!(graph.edge_count(), 2);
    }
}
