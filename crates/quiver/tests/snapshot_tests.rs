//! Snapshot (serde) round-trip tests.
//!
//! The engine is pointer-free by construction, so a whole graph round-trips
//! through bincode with identities, adjacency, and pending edges intact.
//! This is in-memory state capture; there is no file format or open/save
//! API.

use quiver::{Adjacency, FrontierToken, Graph, HashGraph};

#[test]
fn engine_roundtrips_through_bincode() {
    let mut graph: Graph<String, i64> = Graph::new();
    let a = graph.add_vertex("a".to_owned()).unwrap();
    let b = graph.add_vertex("b".to_owned()).unwrap();
    let c = graph.add_vertex("c".to_owned()).unwrap();
    graph.add_directed_edge(a, b, 10).unwrap();
    graph.add_undirected_edge(a, c, 30).unwrap();
    graph.remove_vertex(b).unwrap(); // leave a tombstone in the snapshot

    let bytes = bincode::serialize(graph.engine()).unwrap();
    let restored: HashGraph<String, i64> = bincode::deserialize(&bytes).unwrap();
    let restored: Graph<String, i64> = Graph::with_engine(restored);

    assert_eq!(restored.vertex_count(), 2);
    assert_eq!(restored.edge_count(), 1);
    assert_eq!(restored.payload(a).unwrap(), "a");
    assert!(!restored.contains_vertex(b));
    assert!(restored.is_connected(a, c, Adjacency::Undirected).unwrap());
    assert_eq!(*restored.undirected_edge(c, a).unwrap(), 30);
}

#[test]
fn snapshot_preserves_pending_edges() {
    let mut graph: Graph<u64, ()> = Graph::new();
    let root = graph.add_vertex(1).unwrap();
    let e = graph.add_frontier_edge(root, FrontierToken::new(42), ()).unwrap();

    let bytes = bincode::serialize(graph.engine()).unwrap();
    let restored: HashGraph<u64, ()> = bincode::deserialize(&bytes).unwrap();
    let mut restored: Graph<u64, ()> = Graph::with_engine(restored);

    assert_eq!(restored.pending_edge_count(), 1);
    assert_eq!(restored.pending_token(e).unwrap(), FrontierToken::new(42));

    // The restored graph resumes expansion where the snapshot stopped.
    let target = restored.resolve_frontier(e, |t| t.as_u64()).unwrap();
    assert_eq!(restored.payload(target).unwrap(), &42);
    assert_eq!(restored.pending_edge_count(), 0);
}

#[test]
fn facade_serializes_wholesale() {
    let mut graph: Graph<i32, i32> = Graph::new();
    let a = graph.add_vertex(1).unwrap();
    let b = graph.add_vertex(2).unwrap();
    graph.add_directed_edge(a, b, 3).unwrap();

    let bytes = bincode::serialize(&graph).unwrap();
    let restored: Graph<i32, i32> = bincode::deserialize(&bytes).unwrap();

    assert_eq!(restored.vertex_count(), 2);
    assert_eq!(*restored.directed_edge(a, b).unwrap(), 3);
}
