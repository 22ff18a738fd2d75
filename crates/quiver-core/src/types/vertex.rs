//! Vertex records.
//!
//! A [`Vertex`] owns its payload and all adjacency bookkeeping for the slot
//! it occupies. Connectivity is expressed purely through ids: the record
//! holds edge-id sets plus neighbor-to-edge reverse maps, never references
//! into the owning store.

use std::collections::{HashMap, HashSet, TryReserveError};

use serde::{Deserialize, Serialize};

use super::{Adjacency, EdgeId, VertexId};

/// A vertex in the graph: one payload plus three adjacency records.
///
/// Each of the three kinds (outgoing, incoming, undirected) is tracked
/// twice: as a set of edge ids, and as a reverse map from the neighbor's
/// vertex id to the connecting edge id. The reverse map is what makes
/// "is X connected to Y" an O(1) lookup instead of a scan.
///
/// # Invariant
///
/// The edge set and the reverse map of each kind are kept in lock-step:
/// every insertion lands in both, every removal clears both. The only
/// mutation paths are [`Vertex::register`] and [`Vertex::unregister`], which
/// update the pair together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex<T> {
    payload: T,
    out_edges: HashSet<EdgeId>,
    in_edges: HashSet<EdgeId>,
    undirected_edges: HashSet<EdgeId>,
    out_neighbors: HashMap<VertexId, EdgeId>,
    in_neighbors: HashMap<VertexId, EdgeId>,
    undirected_neighbors: HashMap<VertexId, EdgeId>,
}

impl<T> Vertex<T> {
    /// Create a vertex with no incident edges.
    #[must_use]
    pub fn new(payload: T) -> Self {
        Self {
            payload,
            out_edges: HashSet::new(),
            in_edges: HashSet::new(),
            undirected_edges: HashSet::new(),
            out_neighbors: HashMap::new(),
            in_neighbors: HashMap::new(),
            undirected_neighbors: HashMap::new(),
        }
    }

    /// Shared access to the payload.
    #[inline]
    #[must_use]
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Mutable access to the payload.
    #[inline]
    pub fn payload_mut(&mut self) -> &mut T {
        &mut self.payload
    }

    /// Consume the record and return the payload.
    ///
    /// Callers must have severed all adjacency first; this is the tail end
    /// of vertex removal.
    #[must_use]
    pub fn into_payload(self) -> T {
        self.payload
    }

    /// Record an incident edge of the given kind.
    ///
    /// Inserts into the edge set and the reverse map together. For a
    /// self-loop the neighbor is the vertex itself; the edge still occupies
    /// exactly one entry in the set it belongs to.
    pub fn register(&mut self, kind: Adjacency, neighbor: VertexId, edge: EdgeId) {
        let (edges, neighbors) = self.records_mut(kind);
        edges.insert(edge);
        neighbors.insert(neighbor, edge);
    }

    /// Remove a previously registered edge of the given kind.
    ///
    /// Clears the edge set and the reverse map together. Returns whether the
    /// edge was present.
    pub fn unregister(&mut self, kind: Adjacency, neighbor: VertexId, edge: EdgeId) -> bool {
        let (edges, neighbors) = self.records_mut(kind);
        let was_present = edges.remove(&edge);
        if was_present {
            neighbors.remove(&neighbor);
        }
        was_present
    }

    /// The edge connecting this vertex to `neighbor` in the given set, if any.
    #[inline]
    #[must_use]
    pub fn connecting_edge(&self, kind: Adjacency, neighbor: VertexId) -> Option<EdgeId> {
        self.neighbors(kind).get(&neighbor).copied()
    }

    /// Whether `edge` is registered in the given set.
    #[inline]
    #[must_use]
    pub fn has_edge(&self, kind: Adjacency, edge: EdgeId) -> bool {
        self.edge_ids(kind).contains(&edge)
    }

    /// Number of edges in the given set.
    #[inline]
    #[must_use]
    pub fn degree(&self, kind: Adjacency) -> usize {
        self.edge_ids(kind).len()
    }

    /// The edge-id set of the given kind.
    ///
    /// Iteration order is the hash order of the set and carries no meaning.
    #[inline]
    #[must_use]
    pub fn edge_ids(&self, kind: Adjacency) -> &HashSet<EdgeId> {
        match kind {
            Adjacency::Outgoing => &self.out_edges,
            Adjacency::Incoming => &self.in_edges,
            Adjacency::Undirected => &self.undirected_edges,
        }
    }

    /// The neighbor-to-edge reverse map of the given kind.
    #[inline]
    #[must_use]
    pub fn neighbors(&self, kind: Adjacency) -> &HashMap<VertexId, EdgeId> {
        match kind {
            Adjacency::Outgoing => &self.out_neighbors,
            Adjacency::Incoming => &self.in_neighbors,
            Adjacency::Undirected => &self.undirected_neighbors,
        }
    }

    /// Pre-allocate room for `additional` edges of the given kind.
    ///
    /// # Errors
    ///
    /// Returns the allocator's [`TryReserveError`] if the request cannot be
    /// satisfied; the record is unchanged in that case.
    pub fn reserve(&mut self, kind: Adjacency, additional: usize) -> Result<(), TryReserveError> {
        let (edges, neighbors) = self.records_mut(kind);
        edges.try_reserve(additional)?;
        neighbors.try_reserve(additional)?;
        Ok(())
    }

    /// Release adjacency capacity beyond what the current edges need.
    pub fn shrink_to_fit(&mut self) {
        self.out_edges.shrink_to_fit();
        self.in_edges.shrink_to_fit();
        self.undirected_edges.shrink_to_fit();
        self.out_neighbors.shrink_to_fit();
        self.in_neighbors.shrink_to_fit();
        self.undirected_neighbors.shrink_to_fit();
    }

    /// True when no edge of any kind touches this vertex.
    #[must_use]
    pub fn is_isolated(&self) -> bool {
        self.out_edges.is_empty() && self.in_edges.is_empty() && self.undirected_edges.is_empty()
    }

    fn records_mut(
        &mut self,
        kind: Adjacency,
    ) -> (&mut HashSet<EdgeId>, &mut HashMap<VertexId, EdgeId>) {
        match kind {
            Adjacency::Outgoing => (&mut self.out_edges, &mut self.out_neighbors),
            Adjacency::Incoming => (&mut self.in_edges, &mut self.in_neighbors),
            Adjacency::Undirected => (&mut self.undirected_edges, &mut self.undirected_neighbors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_updates_set_and_reverse_map() {
        let mut v = Vertex::new("a");
        v.register(Adjacency::Outgoing, VertexId::new(2), EdgeId::new(0));

        assert_eq!(v.degree(Adjacency::Outgoing), 1);
        assert!(v.has_edge(Adjacency::Outgoing, EdgeId::new(0)));
        assert_eq!(v.connecting_edge(Adjacency::Outgoing, VertexId::new(2)), Some(EdgeId::new(0)));
        assert_eq!(v.degree(Adjacency::Incoming), 0);
    }

    #[test]
    fn unregister_clears_both_records() {
        let mut v = Vertex::new(1u32);
        v.register(Adjacency::Undirected, VertexId::new(5), EdgeId::new(3));

        assert!(v.unregister(Adjacency::Undirected, VertexId::new(5), EdgeId::new(3)));
        assert_eq!(v.degree(Adjacency::Undirected), 0);
        assert_eq!(v.connecting_edge(Adjacency::Undirected, VertexId::new(5)), None);
        assert!(v.is_isolated());
    }

    #[test]
    fn unregister_missing_edge_is_noop() {
        let mut v = Vertex::new(());
        v.register(Adjacency::Incoming, VertexId::new(1), EdgeId::new(1));

        assert!(!v.unregister(Adjacency::Incoming, VertexId::new(1), EdgeId::new(9)));
        assert_eq!(v.degree(Adjacency::Incoming), 1);
    }

    #[test]
    fn self_loop_occupies_one_entry() {
        let mut v = Vertex::new(());
        v.register(Adjacency::Undirected, VertexId::new(0), EdgeId::new(0));

        assert_eq!(v.degree(Adjacency::Undirected), 1);
        assert_eq!(v.connecting_edge(Adjacency::Undirected, VertexId::new(0)), Some(EdgeId::new(0)));
    }

    #[test]
    fn payload_access() {
        let mut v = Vertex::new(10i64);
        *v.payload_mut() += 5;
        assert_eq!(*v.payload(), 15);
        assert_eq!(v.into_payload(), 15);
    }
}
