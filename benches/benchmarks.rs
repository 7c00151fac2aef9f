//! Criterion benchmarks for lockgraph.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use lockgraph::graph::{AdjacencyList, Graph};
use lockgraph::types::Directedness;

/// Build a random undirected graph with roughly `edges_per_vertex` edges per vertex.
fn make_graph(vertex_count: u32, edges_per_vertex: usize) -> Graph<u32> {
    let mut rng = rand::thread_rng();
    let graph = Graph::undirected();
    for i in 0..vertex_count {
        graph.add_vertex(i);
    }
    for i in 0..vertex_count {
        for _ in 0..edges_per_vertex {
            let target = rng.gen_range(0..vertex_count);
            let _ = graph.add_edge(&i, &target);
        }
    }
    graph
}

fn bench_add_vertex(c: &mut Criterion) {
    c.bench_function("add_vertex_10k", |b| {
        b.iter(|| {
            let graph = Graph::undirected();
            for i in 0..10_000u32 {
                graph.add_vertex(i);
            }
            graph
        })
    });
}

fn bench_add_edge(c: &mut Criterion) {
    let graph = make_graph(10_000, 0);
    let mut rng = rand::thread_rng();
    c.bench_function("add_edge_random", |b| {
        b.iter(|| {
            let src = rng.gen_range(0..10_000u32);
            let dest = rng.gen_range(0..10_000u32);
            let _ = graph.add_edge(&src, &dest);
        })
    });
}

fn bench_bfs(c: &mut Criterion) {
    let graph = make_graph(10_000, 3);
    c.bench_function("bfs_10k", |b| b.iter(|| graph.bfs(&0)));
}

fn bench_dfs(c: &mut Criterion) {
    let graph = make_graph(10_000, 3);
    c.bench_function("dfs_10k", |b| b.iter(|| graph.dfs(&0)));
}

fn bench_bfs_unlocked(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let mut adjacency = AdjacencyList::new(Directedness::Undirected);
    for i in 0..10_000u32 {
        adjacency.add_vertex(i);
    }
    for i in 0..10_000u32 {
        for _ in 0..3 {
            let _ = adjacency.add_edge(&i, &rng.gen_range(0..10_000u32));
        }
    }
    c.bench_function("bfs_10k_unlocked", |b| {
        b.iter(|| lockgraph::graph::bfs(&adjacency, &0))
    });
}

fn bench_remove_vertex(c: &mut Criterion) {
    c.bench_function("remove_vertex_1k_of_1k", |b| {
        b.iter_batched(
            || make_graph(1_000, 3),
            |graph| {
                for i in 0..1_000u32 {
                    let _ = graph.remove_vertex(&i);
                }
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_add_vertex,
    bench_add_edge,
    bench_bfs,
    bench_dfs,
    bench_bfs_unlocked,
    bench_remove_vertex,
);
criterion_main!(benches);
