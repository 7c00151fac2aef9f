//! CLI command implementations.

use crate::graph::{Graph, GraphBuilder, TraversalOrder};
use crate::types::{Directedness, GraphResult};

/// A graph described on the command line.
#[derive(Debug, Clone, Default)]
pub struct GraphInput {
    pub directedness: Directedness,
    /// Vertices registered before any edge, in order.
    pub vertices: Vec<String>,
    pub edges: Vec<(String, String)>,
}

impl GraphInput {
    /// The vertices and edges of the built-in demonstration graph.
    pub fn demo(directedness: Directedness) -> Self {
        let edge = |a: &str, b: &str| (a.to_string(), b.to_string());
        Self {
            directedness,
            vertices: vec!["A".into(), "B".into(), "C".into()],
            edges: vec![edge("A", "B"), edge("A", "C"), edge("B", "C")],
        }
    }

    /// Build the described graph. Edge endpoints are registered as needed.
    pub fn build(&self) -> Graph<String> {
        let mut builder =
            GraphBuilder::new(self.directedness).vertices(self.vertices.iter().cloned());
        for (src, dest) in &self.edges {
            builder = builder.edge(src.clone(), dest.clone());
        }
        builder.build()
    }
}

/// Parse a `SRC:DEST` edge argument.
pub fn parse_edge(arg: &str) -> Option<(String, String)> {
    let (src, dest) = arg.split_once(':')?;
    let (src, dest) = (src.trim(), dest.trim());
    if src.is_empty() || dest.is_empty() {
        return None;
    }
    Some((src.to_string(), dest.to_string()))
}

/// Render one traversal result as a text line, e.g. `BFS: ["A", "B"]`.
pub fn format_traversal(order: TraversalOrder, visited: &[String]) -> String {
    format!("{}: {:?}", order.name().to_uppercase(), visited)
}

/// Build the demonstration graph and print BFS and DFS from `A`.
pub fn cmd_demo(directedness: Directedness, json: bool) -> GraphResult<()> {
    let input = GraphInput::demo(directedness);
    cmd_traverse(
        &input,
        "A",
        &[TraversalOrder::BreadthFirst, TraversalOrder::DepthFirst],
        json,
    )
}

/// Build a graph and print one traversal per requested order.
pub fn cmd_traverse(
    input: &GraphInput,
    start: &str,
    orders: &[TraversalOrder],
    json: bool,
) -> GraphResult<()> {
    let graph = input.build();
    let start = start.to_string();

    let mut results = Vec::with_capacity(orders.len());
    for &order in orders {
        results.push((order, graph.traverse(&start, order)?));
    }

    if json {
        let traversals: Vec<serde_json::Value> = results
            .iter()
            .map(|(order, visited)| {
                serde_json::json!({
                    "order": order.name(),
                    "visited": visited,
                })
            })
            .collect();
        let out = serde_json::json!({
            "directedness": graph.directedness().name(),
            "start": start,
            "traversals": traversals,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&out).unwrap_or_default()
        );
    } else {
        for (order, visited) in &results {
            println!("{}", format_traversal(*order, visited));
        }
    }
    Ok(())
}

/// Build a graph and print its adjacency and counts.
pub fn cmd_show(input: &GraphInput, json: bool) -> GraphResult<()> {
    let graph = input.build();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&graph.snapshot()).unwrap_or_default()
        );
    } else {
        println!("Kind: {}", graph.directedness());
        println!("Vertices: {}", graph.vertex_count());
        println!("Edges: {}", graph.edge_count());
        println!("Adjacency: {}", graph);
    }
    Ok(())
}
