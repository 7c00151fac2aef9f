//! Graph traversal algorithms (BFS and DFS).
//!
//! Neighbors are queued whenever they are unvisited, even if already queued.
//! A vertex can sit in the frontier several times but is emitted only once;
//! the resulting orders depend on this, so the frontier is never deduplicated.

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::types::{GraphError, GraphResult, Vertex};

use super::AdjacencyList;

/// Order in which a traversal visits vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalOrder {
    /// First-in-first-out frontier.
    BreadthFirst,
    /// Last-in-first-out frontier.
    DepthFirst,
}

impl TraversalOrder {
    /// Return a short name for this order.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
        }
    }

    /// Parse an order from its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bfs" | "breadth_first" | "breadth" => Some(Self::BreadthFirst),
            "dfs" | "depth_first" | "depth" => Some(Self::DepthFirst),
            _ => None,
        }
    }
}

impl std::fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Traverse from `start` in the given order.
pub fn traverse<V: Vertex>(
    adjacency: &AdjacencyList<V>,
    start: &V,
    order: TraversalOrder,
) -> GraphResult<Vec<V>> {
    match order {
        TraversalOrder::BreadthFirst => bfs(adjacency, start),
        TraversalOrder::DepthFirst => dfs(adjacency, start),
    }
}

/// Breadth-first traversal. Returns vertices in first-visit order.
pub fn bfs<V: Vertex>(adjacency: &AdjacencyList<V>, start: &V) -> GraphResult<Vec<V>> {
    let start = adjacency.key(start).ok_or_else(|| GraphError::missing(start))?;

    let mut visited: HashSet<&V> = HashSet::new();
    let mut visited_order: Vec<V> = Vec::new();
    let mut queue: VecDeque<&V> = VecDeque::new();
    queue.push_back(start);

    while let Some(vertex) = queue.pop_front() {
        if !visited.insert(vertex) {
            continue;
        }
        visited_order.push(vertex.clone());
        queue.extend(
            adjacency
                .neighbors(vertex)
                .iter()
                .filter(|n| !visited.contains(n)),
        );
    }

    log::debug!(
        "BFS from {:?} visited {} vertices",
        start,
        visited_order.len()
    );
    Ok(visited_order)
}

/// Depth-first traversal. Returns vertices in first-visit order.
///
/// Neighbors are pushed in reverse so the first-listed one is popped first,
/// matching the order a recursive DFS would produce.
pub fn dfs<V: Vertex>(adjacency: &AdjacencyList<V>, start: &V) -> GraphResult<Vec<V>> {
    let start = adjacency.key(start).ok_or_else(|| GraphError::missing(start))?;

    let mut visited: HashSet<&V> = HashSet::new();
    let mut visited_order: Vec<V> = Vec::new();
    let mut stack: Vec<&V> = vec![start];

    while let Some(vertex) = stack.pop() {
        if !visited.insert(vertex) {
            continue;
        }
        visited_order.push(vertex.clone());
        stack.extend(
            adjacency
                .neighbors(vertex)
                .iter()
                .rev()
                .filter(|n| !visited.contains(n)),
        );
    }

    log::debug!(
        "DFS from {:?} visited {} vertices",
        start,
        visited_order.len()
    );
    Ok(visited_order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Directedness;

    fn build(directedness: Directedness, edges: &[(u32, u32)]) -> AdjacencyList<u32> {
        let mut adj = AdjacencyList::new(directedness);
        for &(a, b) in edges {
            adj.add_vertex(a);
            adj.add_vertex(b);
            adj.add_edge(&a, &b).unwrap();
        }
        adj
    }

    #[test]
    fn test_bfs_levels() {
        let adj = build(Directedness::Undirected, &[(1, 2), (1, 3), (2, 4), (3, 5)]);
        assert_eq!(bfs(&adj, &1).unwrap(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_dfs_follows_first_neighbor_deep() {
        let adj = build(Directedness::Undirected, &[(1, 2), (1, 3), (2, 4), (3, 5)]);
        assert_eq!(dfs(&adj, &1).unwrap(), vec![1, 2, 4, 3, 5]);
    }

    #[test]
    fn test_dfs_repushed_vertex_popped_from_top() {
        // 0 -> [1, 2, 3], 1 -> [3]: 3 is pushed again from 1 and visited
        // before 2. Skipping vertices already on the stack would give [0, 1, 2, 3].
        let adj = build(Directedness::Directed, &[(0, 1), (0, 2), (0, 3), (1, 3)]);
        assert_eq!(dfs(&adj, &0).unwrap(), vec![0, 1, 3, 2]);
    }

    #[test]
    fn test_bfs_shared_neighbor_emitted_once() {
        let adj = build(Directedness::Directed, &[(1, 2), (1, 3), (2, 4), (3, 4), (4, 1)]);
        assert_eq!(bfs(&adj, &1).unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_missing_start() {
        let adj = build(Directedness::Directed, &[(1, 2)]);
        assert_eq!(bfs(&adj, &9), Err(GraphError::MissingVertex("9".into())));
        assert_eq!(dfs(&adj, &9), Err(GraphError::MissingVertex("9".into())));
    }

    #[test]
    fn test_unreachable_vertices_skipped() {
        let adj = build(Directedness::Directed, &[(1, 2), (3, 1)]);
        assert_eq!(bfs(&adj, &1).unwrap(), vec![1, 2]);
        assert_eq!(dfs(&adj, &3).unwrap(), vec![3, 1, 2]);
    }

    #[test]
    fn test_order_names() {
        assert_eq!(TraversalOrder::from_name("BFS"), Some(TraversalOrder::BreadthFirst));
        assert_eq!(TraversalOrder::from_name("depth"), Some(TraversalOrder::DepthFirst));
        assert_eq!(TraversalOrder::from_name("dijkstra"), None);
        assert_eq!(TraversalOrder::DepthFirst.to_string(), "dfs");
    }
}
