//! Vertex and edge handles.
//!
//! A handle pairs a store borrow with a validated slot id and exposes the
//! per-object query surface: payload/weight access by deref, connectivity
//! and membership queries, adjacency iteration. Handles are cheap, `Copy`,
//! and only constructible while the store is borrowed, so the slot they
//! point at cannot disappear underneath them.

use std::fmt;
use std::ops::Deref;

use quiver_core::{Adjacency, EdgeId, EdgeKind, VertexId};

use super::error::GraphResult;
use super::traits::{EdgeStore, VertexStore};

/// A validated reference to one vertex in one store.
///
/// Dereferences to the vertex payload. Two handles are equal iff they
/// denote the same slot of the same store instance; payload and adjacency
/// play no part in equality.
pub struct VertexRef<'g, S: VertexStore + EdgeStore> {
    store: &'g S,
    id: VertexId,
    payload: &'g S::Payload,
}

impl<'g, S: VertexStore + EdgeStore> VertexRef<'g, S> {
    /// Look up a vertex and wrap it in a handle.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`](super::GraphError::VertexNotFound)
    /// if no live vertex has this id.
    pub fn new(store: &'g S, id: VertexId) -> GraphResult<Self> {
        let payload = store.payload(id)?;
        Ok(Self { store, id, payload })
    }

    /// The vertex identity.
    #[inline]
    #[must_use]
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// The payload; equivalent to the `Deref` impl.
    #[inline]
    #[must_use]
    pub fn payload(&self) -> &'g S::Payload {
        self.payload
    }

    /// Whether `edge` is registered in this vertex's set of the given kind.
    #[must_use]
    pub fn has_edge(&self, kind: Adjacency, edge: EdgeId) -> bool {
        self.store.has_adjacent_edge(self.id, kind, edge).unwrap_or(false)
    }

    /// Whether an outgoing edge of this vertex is `edge`.
    #[must_use]
    pub fn has_out_edge(&self, edge: EdgeId) -> bool {
        self.has_edge(Adjacency::Outgoing, edge)
    }

    /// Whether an incoming edge of this vertex is `edge`.
    #[must_use]
    pub fn has_in_edge(&self, edge: EdgeId) -> bool {
        self.has_edge(Adjacency::Incoming, edge)
    }

    /// Whether an undirected edge of this vertex is `edge`.
    #[must_use]
    pub fn has_undirected_edge(&self, edge: EdgeId) -> bool {
        self.has_edge(Adjacency::Undirected, edge)
    }

    /// Whether this vertex connects to `other` in the given set.
    ///
    /// A handle into a different store instance is never connected, even
    /// if its id happens to coincide with a neighbor's.
    #[must_use]
    pub fn is_connected(&self, kind: Adjacency, other: &VertexRef<'g, S>) -> bool {
        std::ptr::eq(self.store, other.store)
            && self.store.connecting_edge(self.id, other.id, kind).ok().flatten().is_some()
    }

    /// Whether a directed edge runs from this vertex to `other`.
    #[must_use]
    pub fn is_connected_by_out_edge(&self, other: &VertexRef<'g, S>) -> bool {
        self.is_connected(Adjacency::Outgoing, other)
    }

    /// Whether a directed edge runs from `other` to this vertex.
    #[must_use]
    pub fn is_connected_by_in_edge(&self, other: &VertexRef<'g, S>) -> bool {
        self.is_connected(Adjacency::Incoming, other)
    }

    /// Whether an undirected edge joins this vertex and `other`.
    #[must_use]
    pub fn is_connected_by_undirected_edge(&self, other: &VertexRef<'g, S>) -> bool {
        self.is_connected(Adjacency::Undirected, other)
    }

    /// Iterate over this vertex's adjacency set of the given kind.
    ///
    /// # Errors
    ///
    /// Propagates the store's lookup error; with the handle alive this can
    /// only occur if the store misreports its own slots.
    pub fn edges(&self, kind: Adjacency) -> GraphResult<S::AdjacencyIter<'g>> {
        self.store.adjacency(self.id, kind)
    }

    /// Iterate over this vertex's outgoing edges.
    ///
    /// # Errors
    ///
    /// See [`VertexRef::edges`].
    pub fn out_edges(&self) -> GraphResult<S::AdjacencyIter<'g>> {
        self.edges(Adjacency::Outgoing)
    }

    /// Iterate over this vertex's incoming edges.
    ///
    /// # Errors
    ///
    /// See [`VertexRef::edges`].
    pub fn in_edges(&self) -> GraphResult<S::AdjacencyIter<'g>> {
        self.edges(Adjacency::Incoming)
    }

    /// Iterate over this vertex's undirected edges.
    ///
    /// # Errors
    ///
    /// See [`VertexRef::edges`].
    pub fn undirected_edges(&self) -> GraphResult<S::AdjacencyIter<'g>> {
        self.edges(Adjacency::Undirected)
    }

    /// Number of edges in this vertex's set of the given kind.
    #[must_use]
    pub fn degree(&self, kind: Adjacency) -> usize {
        self.store.degree(self.id, kind).unwrap_or(0)
    }

    /// Number of outgoing edges.
    #[must_use]
    pub fn num_out_edges(&self) -> usize {
        self.degree(Adjacency::Outgoing)
    }

    /// Number of incoming edges.
    #[must_use]
    pub fn num_in_edges(&self) -> usize {
        self.degree(Adjacency::Incoming)
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn num_undirected_edges(&self) -> usize {
        self.degree(Adjacency::Undirected)
    }
}

impl<'g, S: VertexStore + EdgeStore> Clone for VertexRef<'g, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'g, S: VertexStore + EdgeStore> Copy for VertexRef<'g, S> {}

impl<'g, S: VertexStore + EdgeStore> Deref for VertexRef<'g, S> {
    type Target = S::Payload;

    fn deref(&self) -> &Self::Target {
        self.payload
    }
}

impl<'g, S: VertexStore + EdgeStore> PartialEq for VertexRef<'g, S> {
    /// Same slot of the same store instance.
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.store, other.store) && self.id == other.id
    }
}

impl<'g, S: VertexStore + EdgeStore> Eq for VertexRef<'g, S> {}

impl<'g, S: VertexStore + EdgeStore> fmt::Debug for VertexRef<'g, S>
where
    S::Payload: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VertexRef").field("id", &self.id).field("payload", self.payload).finish()
    }
}

/// A validated reference to one edge in one store.
///
/// Dereferences to the edge weight. Equality follows the same rule as
/// [`VertexRef`]: same slot, same store instance.
pub struct EdgeRef<'g, S: VertexStore + EdgeStore> {
    store: &'g S,
    id: EdgeId,
    weight: &'g S::Weight,
}

impl<'g, S: VertexStore + EdgeStore> EdgeRef<'g, S> {
    /// Look up an edge and wrap it in a handle.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`](super::GraphError::EdgeNotFound)
    /// if no live edge has this id.
    pub fn new(store: &'g S, id: EdgeId) -> GraphResult<Self> {
        let weight = store.weight(id)?;
        Ok(Self { store, id, weight })
    }

    /// The edge identity.
    #[inline]
    #[must_use]
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// The weight; equivalent to the `Deref` impl.
    #[inline]
    #[must_use]
    pub fn weight(&self) -> &'g S::Weight {
        self.weight
    }

    /// Whether this edge is directed or undirected.
    ///
    /// # Errors
    ///
    /// Propagates the store's lookup error; with the handle alive this can
    /// only occur if the store misreports its own slots.
    pub fn kind(&self) -> GraphResult<EdgeKind> {
        self.store.edge_kind(self.id)
    }

    /// Both endpoints; `(source, target)` for directed edges.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Unresolved`](super::GraphError::Unresolved) if
    /// an endpoint is still pending.
    pub fn endpoints(&self) -> GraphResult<(VertexId, VertexId)> {
        self.store.endpoints(self.id)
    }

    /// Both endpoints as vertex handles.
    ///
    /// # Errors
    ///
    /// See [`EdgeRef::endpoints`].
    pub fn vertices(&self) -> GraphResult<(VertexRef<'g, S>, VertexRef<'g, S>)> {
        let (a, b) = self.endpoints()?;
        Ok((VertexRef::new(self.store, a)?, VertexRef::new(self.store, b)?))
    }

    /// Given one endpoint, the other.
    ///
    /// # Errors
    ///
    /// - [`GraphError::NotAnEndpoint`](super::GraphError::NotAnEndpoint) if
    ///   `vertex` is not on this edge
    /// - [`GraphError::Unresolved`](super::GraphError::Unresolved) if the
    ///   far endpoint is still pending
    pub fn opposite(&self, vertex: &VertexRef<'g, S>) -> GraphResult<VertexRef<'g, S>> {
        let other = self.store.opposite(self.id, vertex.id())?;
        VertexRef::new(self.store, other)
    }
}

impl<'g, S: VertexStore + EdgeStore> Clone for EdgeRef<'g, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'g, S: VertexStore + EdgeStore> Copy for EdgeRef<'g, S> {}

impl<'g, S: VertexStore + EdgeStore> Deref for EdgeRef<'g, S> {
    type Target = S::Weight;

    fn deref(&self) -> &Self::Target {
        self.weight
    }
}

impl<'g, S: VertexStore + EdgeStore> PartialEq for EdgeRef<'g, S> {
    /// Same slot of the same store instance.
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.store, other.store) && self.id == other.id
    }
}

impl<'g, S: VertexStore + EdgeStore> Eq for EdgeRef<'g, S> {}

impl<'g, S: VertexStore + EdgeStore> fmt::Debug for EdgeRef<'g, S>
where
    S::Weight: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeRef").field("id", &self.id).field("weight", self.weight).finish()
    }
}
