//! Integration tests for vertex storage on the hash engine.

use quiver_core::{Adjacency, VertexId};
use quiver_store::backends::hash::HashGraph;
use quiver_store::{EdgeStore, GraphError, GraphStore, VertexStore};

#[test]
fn add_vertex_returns_sequential_ids() {
    let mut graph: HashGraph<i32, ()> = HashGraph::new();

    for expected in 0..10u64 {
        let id = graph.add_vertex(expected as i32).unwrap();
        assert_eq!(id, VertexId::new(expected));
    }
    assert_eq!(graph.vertex_count(), 10);
}

#[test]
fn vertex_count_matches_successful_adds() {
    let mut graph: HashGraph<u64, ()> = HashGraph::new();
    for n in 0..100 {
        graph.add_vertex(n).unwrap();
    }
    assert_eq!(graph.vertex_count(), 100);
}

#[test]
fn payload_roundtrip() {
    let mut graph: HashGraph<String, ()> = HashGraph::new();
    let v = graph.add_vertex("hello".to_owned()).unwrap();

    assert_eq!(graph.payload(v).unwrap(), "hello");
    graph.payload_mut(v).unwrap().push_str(" world");
    assert_eq!(graph.payload(v).unwrap(), "hello world");
}

#[test]
fn remove_vertex_returns_payload() {
    let mut graph: HashGraph<i32, ()> = HashGraph::new();
    let v = graph.add_vertex(42).unwrap();

    assert_eq!(graph.remove_vertex(v).unwrap(), 42);
    assert_eq!(graph.vertex_count(), 0);
    assert!(!graph.contains_vertex(v));
}

#[test]
fn remove_vertex_twice_fails() {
    let mut graph: HashGraph<i32, ()> = HashGraph::new();
    let v = graph.add_vertex(1).unwrap();
    graph.remove_vertex(v).unwrap();

    assert!(matches!(graph.remove_vertex(v), Err(GraphError::VertexNotFound(_))));
}

#[test]
fn stale_id_lookup_is_a_checked_error() {
    let graph: HashGraph<i32, ()> = HashGraph::new();
    let err = graph.payload(VertexId::new(99)).unwrap_err();
    assert!(matches!(err, GraphError::VertexNotFound(id) if id == VertexId::new(99)));
}

#[test]
fn removal_does_not_move_other_vertices() {
    let mut graph: HashGraph<&str, ()> = HashGraph::new();
    let a = graph.add_vertex("a").unwrap();
    let b = graph.add_vertex("b").unwrap();
    let c = graph.add_vertex("c").unwrap();

    graph.remove_vertex(b).unwrap();

    assert_eq!(graph.payload(a).unwrap(), &"a");
    assert_eq!(graph.payload(c).unwrap(), &"c");
    let live: Vec<VertexId> = graph.vertices().collect();
    assert_eq!(live, vec![a, c]);
}

#[test]
fn remove_vertex_severs_all_incident_edges() {
    let mut graph: HashGraph<i32, i32> = HashGraph::new();
    let a = graph.add_vertex(1).unwrap();
    let b = graph.add_vertex(2).unwrap();
    let c = graph.add_vertex(3).unwrap();

    graph.add_directed_edge(a, b, 10).unwrap();
    graph.add_directed_edge(b, c, 20).unwrap();
    assert_eq!(graph.edge_count(), 2);

    assert_eq!(graph.remove_vertex(b).unwrap(), 2);

    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.degree(a, Adjacency::Outgoing).unwrap(), 0);
    assert_eq!(graph.degree(c, Adjacency::Incoming).unwrap(), 0);
    assert!(!graph.is_connected(a, b, Adjacency::Outgoing).unwrap());
}

#[test]
fn remove_vertex_with_mixed_incident_edges() {
    let mut graph: HashGraph<i32, i32> = HashGraph::new();
    let hub = graph.add_vertex(0).unwrap();
    let x = graph.add_vertex(1).unwrap();
    let y = graph.add_vertex(2).unwrap();
    let z = graph.add_vertex(3).unwrap();

    graph.add_directed_edge(hub, x, 1).unwrap();
    graph.add_directed_edge(y, hub, 2).unwrap();
    graph.add_undirected_edge(hub, z, 3).unwrap();

    graph.remove_vertex(hub).unwrap();

    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.degree(x, Adjacency::Incoming).unwrap(), 0);
    assert_eq!(graph.degree(y, Adjacency::Outgoing).unwrap(), 0);
    assert_eq!(graph.degree(z, Adjacency::Undirected).unwrap(), 0);
}

#[test]
fn remove_vertex_with_directed_self_loop() {
    let mut graph: HashGraph<i32, i32> = HashGraph::new();
    let v = graph.add_vertex(1).unwrap();
    graph.add_directed_edge(v, v, 5).unwrap();

    assert_eq!(graph.remove_vertex(v).unwrap(), 1);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.is_empty());
}

#[test]
fn capacity_hints_do_not_change_state() {
    let mut graph: HashGraph<i32, ()> = HashGraph::new();
    graph.reserve_vertices(1024).unwrap();
    let a = graph.add_vertex(1).unwrap();

    graph.shrink_vertices_to_fit();
    assert_eq!(graph.payload(a).unwrap(), &1);
    assert_eq!(graph.vertex_count(), 1);
}

#[test]
fn vertices_iterates_only_live_slots() {
    let mut graph: HashGraph<i32, ()> = HashGraph::new();
    let ids: Vec<VertexId> = (0..5).map(|n| graph.add_vertex(n).unwrap()).collect();
    graph.remove_vertex(ids[1]).unwrap();
    graph.remove_vertex(ids[3]).unwrap();

    let live: Vec<VertexId> = graph.vertices().collect();
    assert_eq!(live, vec![ids[0], ids[2], ids[4]]);
}
