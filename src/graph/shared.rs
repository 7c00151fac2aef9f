//! The thread-safe graph container.

use std::fmt;
use std::sync::{Mutex, MutexGuard};

use crate::types::{Directedness, GraphConfig, GraphResult, Vertex};

use super::snapshot::GraphSnapshot;
use super::traversal::{self, TraversalOrder};
use super::AdjacencyList;

/// An adjacency-list graph guarded by a single lock.
///
/// Every method, reads included, holds the lock for its whole duration, so
/// operations on one graph never overlap. Each operation validates before it
/// mutates: a call that returns an error leaves the graph untouched.
///
/// A poisoned lock is recovered rather than propagated. The graph's own code
/// does not panic under the lock, but a vertex type whose `Eq`, `Hash` or
/// `Clone` panics can interrupt an operation midway, and later calls then see
/// whatever state it left behind.
pub struct Graph<V> {
    directedness: Directedness,
    inner: Mutex<AdjacencyList<V>>,
}

impl<V: Vertex> Graph<V> {
    /// Create an empty graph.
    pub fn new(directedness: Directedness) -> Self {
        Self::from_adjacency(AdjacencyList::new(directedness))
    }

    /// Create an empty directed graph.
    pub fn directed() -> Self {
        Self::new(Directedness::Directed)
    }

    /// Create an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(Directedness::Undirected)
    }

    /// Create an empty graph from a configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        Self::new(config.directedness())
    }

    pub(crate) fn from_adjacency(adjacency: AdjacencyList<V>) -> Self {
        Self {
            directedness: adjacency.directedness(),
            inner: Mutex::new(adjacency),
        }
    }

    fn lock(&self) -> MutexGuard<'_, AdjacencyList<V>> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            log::warn!("Graph lock poisoned by a panicking thread, recovering");
            poisoned.into_inner()
        })
    }

    /// Whether edges are mirrored. Fixed at construction.
    pub fn directedness(&self) -> Directedness {
        self.directedness
    }

    /// True for a directed graph.
    pub fn is_directed(&self) -> bool {
        self.directedness.is_directed()
    }

    /// Register a vertex. Returns false (and changes nothing) if present.
    pub fn add_vertex(&self, vertex: V) -> bool {
        self.lock().add_vertex(vertex)
    }

    /// Add an edge between two registered vertices.
    ///
    /// Fails with `MissingVertex` if either endpoint is unknown. Repeating an
    /// edge is a no-op. Undirected graphs also record `dest -> src`.
    pub fn add_edge(&self, src: &V, dest: &V) -> GraphResult<()> {
        self.lock().add_edge(src, dest)
    }

    /// Remove an edge, mirrored in undirected graphs.
    ///
    /// Fails with `EmptyGraph` when no vertex exists. Otherwise unknown
    /// endpoints and absent edges are ignored; the return value says whether
    /// anything was removed.
    pub fn remove_edge(&self, src: &V, dest: &V) -> GraphResult<bool> {
        self.lock().remove_edge(src, dest)
    }

    /// Remove a vertex and every edge pointing at it.
    ///
    /// Fails with `EmptyGraph` when no vertex exists, then with
    /// `MissingVertex` if `vertex` is unknown.
    pub fn remove_vertex(&self, vertex: &V) -> GraphResult<()> {
        self.lock().remove_vertex(vertex)
    }

    /// Copy of `vertex`'s neighbor list, empty if it is not registered.
    pub fn get_adjacent_vertices(&self, vertex: &V) -> Vec<V> {
        self.lock().neighbors(vertex).to_vec()
    }

    /// Breadth-first traversal from `start`.
    pub fn bfs(&self, start: &V) -> GraphResult<Vec<V>> {
        traversal::bfs(&self.lock(), start)
    }

    /// Depth-first traversal from `start`.
    pub fn dfs(&self, start: &V) -> GraphResult<Vec<V>> {
        traversal::dfs(&self.lock(), start)
    }

    /// Traverse from `start` in the given order.
    pub fn traverse(&self, start: &V, order: TraversalOrder) -> GraphResult<Vec<V>> {
        traversal::traverse(&self.lock(), start, order)
    }

    /// Whether `vertex` is registered.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.lock().contains(vertex)
    }

    /// Whether `dest` is in `src`'s neighbor list.
    pub fn has_edge(&self, src: &V, dest: &V) -> bool {
        self.lock().has_edge(src, dest)
    }

    /// All vertices in registration order.
    pub fn vertices(&self) -> Vec<V> {
        self.lock().vertices().to_vec()
    }

    /// Number of registered vertices.
    pub fn vertex_count(&self) -> usize {
        self.lock().vertex_count()
    }

    /// Number of edges; an undirected edge counts once.
    pub fn edge_count(&self) -> usize {
        self.lock().edge_count()
    }

    /// Whether no vertex is registered.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Remove every vertex and edge.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Consistent copy of the whole graph, taken under the lock.
    pub fn snapshot(&self) -> GraphSnapshot<V> {
        GraphSnapshot::capture(&self.lock())
    }
}

impl<V: Vertex> Default for Graph<V> {
    fn default() -> Self {
        Self::undirected()
    }
}

impl<V: Vertex> Clone for Graph<V> {
    fn clone(&self) -> Self {
        Self::from_adjacency(self.lock().clone())
    }
}

impl<V: Vertex> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self.lock())
    }
}

impl<V: Vertex> fmt::Debug for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("directedness", &self.directedness)
            .field("adjacency", &*self.lock())
            .finish()
    }
}
