//! Build a small graph, traverse it, then mutate it from several threads.

use std::sync::Arc;
use std::thread;

use lockgraph::*;

fn main() -> GraphResult<()> {
    let graph = Graph::new(Directedness::Undirected);
    graph.add_vertex("A");
    graph.add_vertex("B");
    graph.add_vertex("C");
    graph.add_edge(&"A", &"B")?;
    graph.add_edge(&"A", &"C")?;
    graph.add_edge(&"B", &"C")?;

    println!("Graph: {}", graph);
    println!("BFS: {:?}", graph.bfs(&"A")?);
    println!("DFS: {:?}", graph.dfs(&"A")?);

    // Missing endpoints are reported, not panicked on.
    if let Err(e) = graph.add_edge(&"A", &"D") {
        println!("Error: {}", e);
    }

    // Share the graph across threads.
    let graph = Arc::new(graph);
    let handles: Vec<_> = ["D", "E", "F"]
        .into_iter()
        .map(|v| {
            let g = graph.clone();
            thread::spawn(move || -> GraphResult<()> {
                g.add_vertex(v);
                g.add_edge(&"A", &v)
            })
        })
        .collect();
    for h in handles {
        if let Ok(Err(e)) = h.join() {
            println!("Error: {}", e);
        }
    }

    println!(
        "After threads: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    println!("BFS: {:?}", graph.bfs(&"A")?);

    graph.remove_vertex(&"A")?;
    println!("After removing A: {}", graph);

    Ok(())
}
