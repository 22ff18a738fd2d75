//! Quiver benchmarks.
//!
//! Covers the hot paths: vertex/edge insertion, O(1) connectivity queries,
//! removal with adjacency cleanup, BFS traversal, and compaction.

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use quiver::traversal::{Bfs, Direction};
use quiver::{Adjacency, Graph, VertexId};

/// A random graph with `vertices` vertices and roughly `edges` directed
/// edges, deterministic for a given seed.
fn random_graph(vertices: usize, edges: usize, seed: u64) -> (Graph<u64, u32>, Vec<VertexId>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::with_capacity(vertices, edges);
    let ids: Vec<VertexId> =
        (0..vertices).map(|n| graph.add_vertex(n as u64).expect("add vertex")).collect();

    let mut added = 0;
    while added < edges {
        let from = ids[rng.gen_range(0..vertices)];
        let to = ids[rng.gen_range(0..vertices)];
        if graph.add_directed_edge(from, to, rng.gen()).is_ok() {
            added += 1;
        }
    }
    (graph, ids)
}

fn insertion_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for &size in &[1_000usize, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("vertices", size), &size, |b, &size| {
            b.iter(|| {
                let mut graph: Graph<u64, u32> = Graph::with_capacity(size, 0);
                for n in 0..size {
                    graph.add_vertex(black_box(n as u64)).expect("add vertex");
                }
                graph
            });
        });

        group.bench_with_input(BenchmarkId::new("directed_edges", size), &size, |b, &size| {
            b.iter(|| {
                let (graph, _) = random_graph(size / 10, size, 7);
                black_box(graph.edge_count())
            });
        });
    }
    group.finish();
}

fn query_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");
    let (graph, ids) = random_graph(1_000, 10_000, 11);

    group.bench_function("is_connected", |b| {
        let mut rng = StdRng::seed_from_u64(13);
        b.iter(|| {
            let a = ids[rng.gen_range(0..ids.len())];
            let z = ids[rng.gen_range(0..ids.len())];
            black_box(graph.is_connected(a, z, Adjacency::Outgoing).expect("query"))
        });
    });

    group.bench_function("degree", |b| {
        let mut rng = StdRng::seed_from_u64(17);
        b.iter(|| {
            let v = ids[rng.gen_range(0..ids.len())];
            black_box(graph.degree(v, Adjacency::Outgoing).expect("query"))
        });
    });

    group.bench_function("bfs_full", |b| {
        b.iter(|| Bfs::new(graph.engine(), ids[0], Direction::Outgoing).count());
    });
    group.finish();
}

fn maintenance_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("maintenance");

    group.bench_function("remove_half_then_compact", |b| {
        b.iter_with_setup(
            || random_graph(1_000, 5_000, 23),
            |(mut graph, ids)| {
                for v in ids.iter().step_by(2) {
                    graph.remove_vertex(*v).expect("remove");
                }
                black_box(graph.compact())
            },
        );
    });
    group.finish();
}

criterion_group!(benches, insertion_benchmarks, query_benchmarks, maintenance_benchmarks);
criterion_main!(benches);
