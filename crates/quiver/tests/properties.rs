//! Property-based tests for graph invariants.
//!
//! These verify that the §-level contracts hold regardless of payloads,
//! weights, or operation order.

use std::collections::HashSet;

use proptest::prelude::*;

use quiver::order::edges_by_weight;
use quiver::{Adjacency, Graph, VertexId};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// N successful add_vertex calls leave vertex_count() == N.
    #[test]
    fn prop_vertex_count_matches_adds(count in 1usize..200) {
        let mut graph: Graph<usize, ()> = Graph::new();
        for n in 0..count {
            graph.add_vertex(n).expect("add");
        }
        prop_assert_eq!(graph.vertex_count(), count);
    }

    /// Undirected connectivity is symmetric and the weight reads back.
    #[test]
    fn prop_undirected_edge_is_symmetric(w in any::<i64>()) {
        let mut graph: Graph<u8, i64> = Graph::new();
        let a = graph.add_vertex(0).expect("add");
        let b = graph.add_vertex(1).expect("add");
        graph.add_undirected_edge(a, b, w).expect("edge");

        prop_assert!(graph.is_connected(a, b, Adjacency::Undirected).expect("query"));
        prop_assert!(graph.is_connected(b, a, Adjacency::Undirected).expect("query"));
        prop_assert_eq!(*graph.undirected_edge(a, b).expect("lookup"), w);
        prop_assert_eq!(*graph.undirected_edge(b, a).expect("lookup"), w);
    }

    /// A directed edge never implies its reverse.
    #[test]
    fn prop_directed_edge_is_asymmetric(w in any::<i64>()) {
        let mut graph: Graph<u8, i64> = Graph::new();
        let a = graph.add_vertex(0).expect("add");
        let b = graph.add_vertex(1).expect("add");
        graph.add_directed_edge(a, b, w).expect("edge");

        prop_assert!(graph.is_connected(a, b, Adjacency::Outgoing).expect("query"));
        prop_assert!(graph.is_connected(b, a, Adjacency::Incoming).expect("query"));
        prop_assert!(!graph.is_connected(b, a, Adjacency::Outgoing).expect("query"));
        prop_assert!(!graph.is_connected(a, b, Adjacency::Incoming).expect("query"));
    }

    /// remove immediately after add returns the same weight and severs
    /// the connection.
    #[test]
    fn prop_add_remove_roundtrip(w in any::<i64>()) {
        let mut graph: Graph<u8, i64> = Graph::new();
        let a = graph.add_vertex(0).expect("add");
        let b = graph.add_vertex(1).expect("add");

        graph.add_undirected_edge(a, b, w).expect("edge");
        prop_assert_eq!(graph.remove_undirected_edge(a, b).expect("remove"), w);
        prop_assert!(!graph.is_connected(a, b, Adjacency::Undirected).expect("query"));
        prop_assert_eq!(graph.edge_count(), 0);
    }

    /// The second identical directed insertion always fails and leaves
    /// exactly one edge for the pair.
    #[test]
    fn prop_duplicate_directed_rejected(w1 in any::<i64>(), w2 in any::<i64>()) {
        let mut graph: Graph<u8, i64> = Graph::new();
        let a = graph.add_vertex(0).expect("add");
        let b = graph.add_vertex(1).expect("add");

        graph.add_directed_edge(a, b, w1).expect("first insert");
        prop_assert!(graph.add_directed_edge(a, b, w2).is_err());
        prop_assert_eq!(graph.edge_count(), 1);
        prop_assert_eq!(*graph.directed_edge(a, b).expect("lookup"), w1);
    }

    /// Removing random vertices never corrupts the rest of the graph:
    /// survivors keep their payloads and no severed edge lingers.
    #[test]
    fn prop_removal_preserves_survivors(
        count in 2usize..40,
        removals in prop::collection::vec(any::<prop::sample::Index>(), 1..10),
    ) {
        let mut graph: Graph<usize, u32> = Graph::new();
        let ids: Vec<VertexId> = (0..count).map(|n| graph.add_vertex(n).expect("add")).collect();
        // A directed ring.
        for i in 0..count {
            graph.add_directed_edge(ids[i], ids[(i + 1) % count], i as u32).expect("ring edge");
        }

        let mut removed = HashSet::new();
        for index in removals {
            let victim = ids[index.index(count)];
            if removed.insert(victim) {
                graph.remove_vertex(victim).expect("remove");
            }
        }

        prop_assert_eq!(graph.vertex_count(), count - removed.len());
        for (n, id) in ids.iter().enumerate() {
            if removed.contains(id) {
                prop_assert!(!graph.contains_vertex(*id));
            } else {
                prop_assert_eq!(graph.payload(*id).expect("payload"), &n);
            }
        }
        // Every surviving edge has two live endpoints.
        let edges: Vec<_> = graph.edges().collect();
        for e in edges {
            let (s, t) = graph.endpoints(e).expect("endpoints");
            prop_assert!(graph.contains_vertex(s));
            prop_assert!(graph.contains_vertex(t));
        }
    }

    /// Compaction preserves counts, payload multisets, and connectivity.
    #[test]
    fn prop_compaction_preserves_structure(
        count in 2usize..30,
        removals in prop::collection::vec(any::<prop::sample::Index>(), 1..8),
    ) {
        let mut graph: Graph<usize, u32> = Graph::new();
        let ids: Vec<VertexId> = (0..count).map(|n| graph.add_vertex(n).expect("add")).collect();
        for i in 1..count {
            graph.add_directed_edge(ids[i - 1], ids[i], i as u32).expect("chain edge");
        }

        let mut removed = HashSet::new();
        for index in removals {
            let victim = ids[index.index(count)];
            if removed.insert(victim) {
                graph.remove_vertex(victim).expect("remove");
            }
        }

        let vertices_before = graph.vertex_count();
        let edges_before = graph.edge_count();
        let mut payloads_before: Vec<usize> =
            graph.vertices().map(|v| *graph.payload(v).expect("payload")).collect();
        payloads_before.sort_unstable();

        let compaction = graph.compact();

        prop_assert_eq!(graph.vertex_count(), vertices_before);
        prop_assert_eq!(graph.edge_count(), edges_before);
        prop_assert_eq!(compaction.vertex_map.len(), vertices_before);
        prop_assert_eq!(compaction.edge_map.len(), edges_before);

        let mut payloads_after: Vec<usize> =
            graph.vertices().map(|v| *graph.payload(v).expect("payload")).collect();
        payloads_after.sort_unstable();
        prop_assert_eq!(payloads_before, payloads_after);

        // Ids are dense again.
        let max_id = graph.vertices().map(VertexId::as_u64).max();
        if let Some(max_id) = max_id {
            prop_assert_eq!(max_id as usize, vertices_before - 1);
        }
    }

    /// The ordering helper always returns weights in non-decreasing order
    /// with a strictly increasing id tie-break.
    #[test]
    fn prop_edges_by_weight_is_sorted(weights in prop::collection::vec(any::<u32>(), 1..30)) {
        let mut graph: Graph<(), u32> = Graph::new();
        let hub = graph.add_vertex(()).expect("add");
        for &w in &weights {
            let v = graph.add_vertex(()).expect("add");
            graph.add_directed_edge(hub, v, w).expect("edge");
        }

        let sorted = edges_by_weight(graph.engine());
        prop_assert_eq!(sorted.len(), weights.len());
        for pair in sorted.windows(2) {
            let (id_a, w_a) = pair[0];
            let (id_b, w_b) = pair[1];
            prop_assert!(w_a < w_b || (w_a == w_b && id_a < id_b));
        }
    }
}
