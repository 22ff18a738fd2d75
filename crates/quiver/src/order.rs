//! Deterministic ordering helpers.
//!
//! Adjacency sets are hash-ordered, so two runs of the same program may
//! enumerate edges differently. Callers that need a reproducible order
//! collect `(id, weight)` pairs and sort them with the standard library's
//! comparison sorts; these helpers do exactly that, tie-breaking on id so
//! the resulting order is total regardless of duplicate weights.

use std::cmp::Ordering;

use quiver_core::{Adjacency, EdgeId, VertexId};
use quiver_store::{GraphResult, GraphStore};

/// All edges sorted by weight, then id.
///
/// Pending frontier edges are included; their weights are ordinary values.
pub fn edges_by_weight<S>(store: &S) -> Vec<(EdgeId, &S::Weight)>
where
    S: GraphStore,
    S::Weight: Ord,
{
    edges_by(store, Ord::cmp)
}

/// All edges sorted by a caller-supplied weight comparison, then id.
///
/// Use this when the weight type has no total order of its own, e.g.
/// floating-point weights compared with [`f64::total_cmp`].
pub fn edges_by<S, F>(store: &S, compare: F) -> Vec<(EdgeId, &S::Weight)>
where
    S: GraphStore,
    F: FnMut(&S::Weight, &S::Weight) -> Ordering,
{
    let mut pairs: Vec<(EdgeId, &S::Weight)> =
        store.edges().filter_map(|edge| store.weight(edge).ok().map(|w| (edge, w))).collect();
    sort_pairs(&mut pairs, compare);
    pairs
}

/// One vertex's adjacency set of one kind, sorted by weight, then edge id.
///
/// # Errors
///
/// Returns [`GraphError::VertexNotFound`](quiver_store::GraphError::VertexNotFound)
/// if no live vertex has this id.
pub fn adjacency_by_weight<S>(
    store: &S,
    vertex: VertexId,
    kind: Adjacency,
) -> GraphResult<Vec<(EdgeId, &S::Weight)>>
where
    S: GraphStore,
    S::Weight: Ord,
{
    let mut pairs: Vec<(EdgeId, &S::Weight)> = store.adjacency_weights(vertex, kind)?.collect();
    sort_pairs(&mut pairs, Ord::cmp);
    Ok(pairs)
}

/// All vertices sorted by payload, then id.
pub fn vertices_by_payload<S>(store: &S) -> Vec<(VertexId, &S::Payload)>
where
    S: GraphStore,
    S::Payload: Ord,
{
    let mut pairs: Vec<(VertexId, &S::Payload)> = store
        .vertices()
        .filter_map(|vertex| store.payload(vertex).ok().map(|p| (vertex, p)))
        .collect();
    sort_pairs(&mut pairs, Ord::cmp);
    pairs
}

/// Sort `(id, value)` pairs by value, breaking ties on id so the order is
/// total even when values repeat.
fn sort_pairs<I, V, F>(pairs: &mut [(I, &V)], mut compare: F)
where
    I: Ord + Copy,
    F: FnMut(&V, &V) -> Ordering,
{
    pairs.sort_by(|&(id_a, value_a), &(id_b, value_b)| {
        compare(value_a, value_b).then_with(|| id_a.cmp(&id_b))
    });
}
