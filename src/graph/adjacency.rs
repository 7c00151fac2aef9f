//! Unsynchronized adjacency list holding all mutation rules.
//!
//! `Graph` wraps one of these in a mutex; nothing in this module locks.

use std::collections::HashMap;
use std::fmt;

use crate::types::{Directedness, GraphError, GraphResult, Vertex};

/// Vertex → ordered neighbor list, with registration order preserved.
#[derive(Clone)]
pub struct AdjacencyList<V> {
    /// Vertices in the order they were registered.
    order: Vec<V>,
    /// Neighbor lists, keyed by vertex.
    adjacency: HashMap<V, Vec<V>>,
    directedness: Directedness,
}

impl<V: Vertex> AdjacencyList<V> {
    /// Create an empty adjacency list.
    pub fn new(directedness: Directedness) -> Self {
        Self {
            order: Vec::new(),
            adjacency: HashMap::new(),
            directedness,
        }
    }

    /// Whether edges are mirrored.
    pub fn directedness(&self) -> Directedness {
        self.directedness
    }

    /// Number of registered vertices.
    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    /// Whether no vertex is registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether `vertex` is registered.
    pub fn contains(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// The stored key equal to `vertex`, borrowed for the list's lifetime.
    pub(crate) fn key(&self, vertex: &V) -> Option<&V> {
        self.adjacency.get_key_value(vertex).map(|(k, _)| k)
    }

    /// Neighbors of `vertex`, empty if it is not registered.
    pub fn neighbors(&self, vertex: &V) -> &[V] {
        self.adjacency
            .get(vertex)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Registered vertices in registration order.
    pub fn vertices(&self) -> &[V] {
        &self.order
    }

    /// Whether `dest` is in `src`'s neighbor list.
    pub fn has_edge(&self, src: &V, dest: &V) -> bool {
        self.neighbors(src).contains(dest)
    }

    /// Number of edges. Mirrored pairs count once in an undirected list.
    pub fn edge_count(&self) -> usize {
        let entries: usize = self.adjacency.values().map(|n| n.len()).sum();
        if self.directedness.is_directed() {
            return entries;
        }
        let loops = self
            .adjacency
            .iter()
            .filter(|(v, neighbors)| neighbors.contains(*v))
            .count();
        (entries - loops) / 2 + loops
    }

    /// Iterate `(vertex, neighbors)` in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &[V])> {
        self.order
            .iter()
            .map(move |v| (v, self.neighbors(v)))
    }

    /// Register a vertex. Returns false if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            log::trace!("Vertex {:?} already registered", vertex);
            return false;
        }
        log::debug!("Adding vertex {:?}", vertex);
        self.order.push(vertex.clone());
        self.adjacency.insert(vertex, Vec::new());
        true
    }

    /// Add an edge between two registered vertices.
    ///
    /// Adding an edge that already exists changes nothing. In an undirected
    /// list the reverse entry is added too.
    pub fn add_edge(&mut self, src: &V, dest: &V) -> GraphResult<()> {
        if !self.contains(src) {
            return Err(GraphError::missing(src));
        }
        if !self.contains(dest) {
            return Err(GraphError::missing(dest));
        }

        log::debug!("Adding edge {:?} -> {:?}", src, dest);
        Self::push_unique(&mut self.adjacency, src, dest);
        if !self.directedness.is_directed() {
            Self::push_unique(&mut self.adjacency, dest, src);
        }
        Ok(())
    }

    /// Register both endpoints if needed, then link them.
    pub(crate) fn connect(&mut self, src: V, dest: V) {
        self.add_vertex(src.clone());
        self.add_vertex(dest.clone());
        log::debug!("Adding edge {:?} -> {:?}", src, dest);
        Self::push_unique(&mut self.adjacency, &src, &dest);
        if !self.directedness.is_directed() {
            Self::push_unique(&mut self.adjacency, &dest, &src);
        }
    }

    /// Remove an edge. Returns whether any entry was removed.
    ///
    /// Unknown endpoints or absent edges are not errors, but an empty list is.
    pub fn remove_edge(&mut self, src: &V, dest: &V) -> GraphResult<bool> {
        if self.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        let mut removed = Self::remove_entry(&mut self.adjacency, src, dest);
        if !self.directedness.is_directed() {
            removed |= Self::remove_entry(&mut self.adjacency, dest, src);
        }
        if removed {
            log::debug!("Removed edge {:?} -> {:?}", src, dest);
        } else {
            log::trace!("No edge {:?} -> {:?} to remove", src, dest);
        }
        Ok(removed)
    }

    /// Remove a vertex and every edge that points at it.
    pub fn remove_vertex(&mut self, vertex: &V) -> GraphResult<()> {
        if self.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        if !self.contains(vertex) {
            return Err(GraphError::missing(vertex));
        }

        for neighbors in self.adjacency.values_mut() {
            neighbors.retain(|n| n != vertex);
        }
        self.adjacency.remove(vertex);
        self.order.retain(|v| v != vertex);

        log::debug!("Removed vertex {:?}", vertex);
        Ok(())
    }

    /// Remove every vertex.
    pub fn clear(&mut self) {
        self.order.clear();
        self.adjacency.clear();
    }

    fn push_unique(adjacency: &mut HashMap<V, Vec<V>>, from: &V, to: &V) {
        if let Some(neighbors) = adjacency.get_mut(from) {
            if !neighbors.contains(to) {
                neighbors.push(to.clone());
            }
        }
    }

    fn remove_entry(adjacency: &mut HashMap<V, Vec<V>>, from: &V, to: &V) -> bool {
        match adjacency.get_mut(from) {
            Some(neighbors) => match neighbors.iter().position(|n| n == to) {
                Some(pos) => {
                    neighbors.remove(pos);
                    true
                }
                None => false,
            },
            None => false,
        }
    }
}

impl<V: Vertex> fmt::Display for AdjacencyList<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (vertex, neighbors)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}: {:?}", vertex, neighbors)?;
        }
        f.write_str("}")
    }
}

impl<V: Vertex> fmt::Debug for AdjacencyList<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
