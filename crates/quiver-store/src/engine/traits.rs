//! Core graph capability traits.
//!
//! This module defines the contracts a storage engine must satisfy:
//!
//! - [`VertexStore`] - Vertex ownership: creation, removal, payload access
//! - [`EdgeStore`] - Edge ownership: insertion, lookup, removal, adjacency
//! - [`GraphStore`] - The union of both, with whole-graph operations
//! - [`FrontierStore`] - Optional support for edges into not-yet-materialized
//!   vertices
//!
//! Calling code is written against these traits, never against a concrete
//! engine, so backends can be swapped behind the facade without touching
//! callers. All iteration is exposed through associated types so an engine
//! never leaks its internal container iterators.

use quiver_core::{Adjacency, EdgeId, EdgeKind, FrontierToken, VertexId};

use super::error::{GraphError, GraphResult};

/// A store that owns vertices and their payloads.
///
/// Vertices are created and destroyed only through the store; a payload
/// enters with [`VertexStore::add_vertex`] and leaves with
/// [`VertexStore::remove_vertex`]. Identities handed out by `add_vertex`
/// stay valid until the vertex is removed; removal of one vertex never
/// moves another.
///
/// # Example
///
/// ```
/// use quiver_store::backends::hash::HashGraph;
/// use quiver_store::{GraphResult, VertexStore};
///
/// fn example() -> GraphResult<()> {
///     let mut graph: HashGraph<&str, ()> = HashGraph::new();
///     let a = graph.add_vertex("alpha")?;
///     assert_eq!(graph.payload(a)?, &"alpha");
///     assert_eq!(graph.remove_vertex(a)?, "alpha");
///     assert_eq!(graph.vertex_count(), 0);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub trait VertexStore {
    /// The vertex payload type.
    type Payload;

    /// Iterator over all live vertex ids.
    ///
    /// The order is unspecified and may change when the store is mutated.
    type VertexIter<'a>: Iterator<Item = VertexId>
    where
        Self: 'a;

    /// Add a vertex owning `payload` and return its identity.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Capacity`] if the store cannot grow.
    fn add_vertex(&mut self, payload: Self::Payload) -> GraphResult<VertexId>;

    /// Remove a vertex and return its payload.
    ///
    /// Every edge incident to the vertex (outgoing, incoming, undirected,
    /// and pending frontier edges it sourced) is severed first, updating
    /// the adjacency records of the far endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if no live vertex has this id.
    fn remove_vertex(&mut self, vertex: VertexId) -> GraphResult<Self::Payload>;

    /// Whether a live vertex has this id.
    fn contains_vertex(&self, vertex: VertexId) -> bool;

    /// Shared access to a vertex's payload.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if no live vertex has this id.
    fn payload(&self, vertex: VertexId) -> GraphResult<&Self::Payload>;

    /// Mutable access to a vertex's payload.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if no live vertex has this id.
    fn payload_mut(&mut self, vertex: VertexId) -> GraphResult<&mut Self::Payload>;

    /// Number of live vertices.
    fn vertex_count(&self) -> usize;

    /// Iterate over all live vertex ids.
    fn vertices(&self) -> Self::VertexIter<'_>;

    /// Pre-allocate room for `additional` vertices.
    ///
    /// A capacity hint only: it never changes identities or observable
    /// state, it just front-loads allocation cost.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Capacity`] if the allocator refuses.
    fn reserve_vertices(&mut self, additional: usize) -> GraphResult<()>;

    /// Release vertex-store capacity beyond what live slots need.
    fn shrink_vertices_to_fit(&mut self);
}

/// A store that owns edges, their weights, and all adjacency bookkeeping.
///
/// Edges connect vertices of the same store and are addressed either by
/// their [`EdgeId`] or by their endpoint pair plus kind. At most one
/// directed edge exists per ordered pair and at most one undirected edge
/// per unordered pair; a directed `A -> B`, a directed `B -> A`, and an
/// undirected `A - B` are three distinct edges that may coexist.
pub trait EdgeStore {
    /// The edge weight type.
    type Weight;

    /// Iterator over all live edge ids.
    type EdgeIter<'a>: Iterator<Item = EdgeId>
    where
        Self: 'a;

    /// Iterator over one vertex's adjacency set of one kind.
    ///
    /// Yields edge ids in the set's own (hash) order. Iterators from
    /// different vertices or different kinds are unrelated sequences.
    type AdjacencyIter<'a>: Iterator<Item = EdgeId>
    where
        Self: 'a;

    /// Iterator over one adjacency set resolving each edge id to its
    /// weight through the edge store.
    type WeightIter<'a>: Iterator<Item = (EdgeId, &'a Self::Weight)>
    where
        Self: 'a,
        Self::Weight: 'a;

    /// Add a directed edge from `source` to `target`.
    ///
    /// Registers the edge as outgoing on `source` and incoming on `target`,
    /// inserting into both the edge set and the neighbor reverse map of
    /// each endpoint. A directed self-loop (`source == target`) occupies
    /// one entry in the out set and one in the in set.
    ///
    /// # Errors
    ///
    /// - [`GraphError::VertexNotFound`] if either endpoint is not live
    /// - [`GraphError::EdgeExists`] if a directed edge `source -> target`
    ///   already exists
    /// - [`GraphError::Capacity`] if the store cannot grow
    fn add_directed_edge(
        &mut self,
        source: VertexId,
        target: VertexId,
        weight: Self::Weight,
    ) -> GraphResult<EdgeId>;

    /// Add an undirected edge between `a` and `b`.
    ///
    /// Registers the edge symmetrically in both endpoints' undirected sets.
    /// An undirected self-loop occupies a single entry in the vertex's
    /// undirected set.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`EdgeStore::add_directed_edge`], with the
    /// duplicate check on the unordered pair.
    fn add_undirected_edge(
        &mut self,
        a: VertexId,
        b: VertexId,
        weight: Self::Weight,
    ) -> GraphResult<EdgeId>;

    /// Remove an edge by id and return its weight.
    ///
    /// Clears the edge from every adjacency record that references it
    /// before giving the weight back.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if no live edge has this id.
    fn remove_edge(&mut self, edge: EdgeId) -> GraphResult<Self::Weight>;

    /// Whether a live edge has this id.
    fn contains_edge(&self, edge: EdgeId) -> bool;

    /// Shared access to an edge's weight.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if no live edge has this id.
    fn weight(&self, edge: EdgeId) -> GraphResult<&Self::Weight>;

    /// Mutable access to an edge's weight.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if no live edge has this id.
    fn weight_mut(&mut self, edge: EdgeId) -> GraphResult<&mut Self::Weight>;

    /// Both endpoints of an edge; `(source, target)` for directed edges.
    ///
    /// # Errors
    ///
    /// - [`GraphError::EdgeNotFound`] if no live edge has this id
    /// - [`GraphError::Unresolved`] if an endpoint is still pending
    fn endpoints(&self, edge: EdgeId) -> GraphResult<(VertexId, VertexId)>;

    /// Whether an edge is directed or undirected.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if no live edge has this id.
    fn edge_kind(&self, edge: EdgeId) -> GraphResult<EdgeKind>;

    /// Given one endpoint of an edge, return the other.
    ///
    /// For a self-loop the opposite of the vertex is itself.
    ///
    /// # Errors
    ///
    /// - [`GraphError::EdgeNotFound`] if no live edge has this id
    /// - [`GraphError::NotAnEndpoint`] if `vertex` is not on the edge
    /// - [`GraphError::Unresolved`] if the far endpoint is still pending
    fn opposite(&self, edge: EdgeId, vertex: VertexId) -> GraphResult<VertexId>;

    /// Number of live edges, pending frontier edges included.
    fn edge_count(&self) -> usize;

    /// Iterate over all live edge ids.
    fn edges(&self) -> Self::EdgeIter<'_>;

    /// Iterate over one vertex's adjacency set of one kind.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if no live vertex has this id.
    fn adjacency(&self, vertex: VertexId, kind: Adjacency) -> GraphResult<Self::AdjacencyIter<'_>>;

    /// Iterate over one adjacency set, resolving edge ids to weights.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if no live vertex has this id.
    fn adjacency_weights(
        &self,
        vertex: VertexId,
        kind: Adjacency,
    ) -> GraphResult<Self::WeightIter<'_>>;

    /// Visit every weight in one adjacency set mutably.
    ///
    /// The visitor returns `false` to stop early. This is the mutable
    /// counterpart of [`EdgeStore::adjacency_weights`]; handing out a
    /// mutable iterator would alias the engine's internal stores, so bulk
    /// mutation is closure-shaped instead.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if no live vertex has this id.
    fn for_each_adjacent_weight_mut<F>(
        &mut self,
        vertex: VertexId,
        kind: Adjacency,
        f: F,
    ) -> GraphResult<()>
    where
        F: FnMut(EdgeId, &mut Self::Weight) -> bool;

    /// The edge connecting `vertex` to `neighbor` in the given set, if any.
    ///
    /// O(1) through the vertex's neighbor reverse map.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if `vertex` is not live. A
    /// missing or dead `neighbor` is not an error; it is simply not
    /// connected.
    fn connecting_edge(
        &self,
        vertex: VertexId,
        neighbor: VertexId,
        kind: Adjacency,
    ) -> GraphResult<Option<EdgeId>>;

    /// Number of edges in one vertex's adjacency set of one kind.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if no live vertex has this id.
    fn degree(&self, vertex: VertexId, kind: Adjacency) -> GraphResult<usize>;

    /// Whether `edge` is registered in `vertex`'s adjacency set of `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if no live vertex has this id.
    fn has_adjacent_edge(
        &self,
        vertex: VertexId,
        kind: Adjacency,
        edge: EdgeId,
    ) -> GraphResult<bool>;

    /// Pre-allocate room for `additional` edges in the edge store.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Capacity`] if the allocator refuses.
    fn reserve_edges(&mut self, additional: usize) -> GraphResult<()>;

    /// Release edge-store capacity beyond what live slots need.
    fn shrink_edges_to_fit(&mut self);

    /// Pre-allocate room for `additional` edges in one vertex's adjacency
    /// records of one kind.
    ///
    /// # Errors
    ///
    /// - [`GraphError::VertexNotFound`] if no live vertex has this id
    /// - [`GraphError::Capacity`] if the allocator refuses
    fn reserve_adjacency(
        &mut self,
        vertex: VertexId,
        kind: Adjacency,
        additional: usize,
    ) -> GraphResult<()>;

    /// Release one vertex's adjacency capacity beyond what its edges need.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if no live vertex has this id.
    fn shrink_adjacency_to_fit(&mut self, vertex: VertexId) -> GraphResult<()>;

    // ------------------------------------------------------------------
    // Provided pair-addressed operations
    // ------------------------------------------------------------------

    /// The directed edge from `source` to `target`.
    ///
    /// # Errors
    ///
    /// - [`GraphError::VertexNotFound`] if `source` is not live
    /// - [`GraphError::NotConnected`] if no such edge exists
    fn directed_edge(&self, source: VertexId, target: VertexId) -> GraphResult<EdgeId> {
        self.connecting_edge(source, target, Adjacency::Outgoing)?.ok_or(
            GraphError::NotConnected { source, target, kind: EdgeKind::Directed },
        )
    }

    /// The undirected edge between `a` and `b`.
    ///
    /// # Errors
    ///
    /// - [`GraphError::VertexNotFound`] if `a` is not live
    /// - [`GraphError::NotConnected`] if no such edge exists
    fn undirected_edge(&self, a: VertexId, b: VertexId) -> GraphResult<EdgeId> {
        self.connecting_edge(a, b, Adjacency::Undirected)?.ok_or(GraphError::NotConnected {
            source: a,
            target: b,
            kind: EdgeKind::Undirected,
        })
    }

    /// Remove the directed edge from `source` to `target` and return its
    /// weight.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`EdgeStore::directed_edge`].
    fn remove_directed_edge(
        &mut self,
        source: VertexId,
        target: VertexId,
    ) -> GraphResult<Self::Weight> {
        let edge = self.directed_edge(source, target)?;
        self.remove_edge(edge)
    }

    /// Remove the undirected edge between `a` and `b` and return its
    /// weight.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`EdgeStore::undirected_edge`].
    fn remove_undirected_edge(&mut self, a: VertexId, b: VertexId) -> GraphResult<Self::Weight> {
        let edge = self.undirected_edge(a, b)?;
        self.remove_edge(edge)
    }

    /// Whether `vertex` and `neighbor` are connected in the given set.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if `vertex` is not live.
    fn is_connected(
        &self,
        vertex: VertexId,
        neighbor: VertexId,
        kind: Adjacency,
    ) -> GraphResult<bool> {
        Ok(self.connecting_edge(vertex, neighbor, kind)?.is_some())
    }
}

/// The full graph capability: vertex storage plus edge storage.
///
/// Blanket-implemented for any type providing both halves, so an engine
/// only ever implements [`VertexStore`] and [`EdgeStore`] explicitly.
pub trait GraphStore: VertexStore + EdgeStore {
    /// Release all excess capacity: the vertex store, the edge store, and
    /// every live vertex's adjacency records.
    fn shrink_to_fit(&mut self) {
        self.shrink_vertices_to_fit();
        self.shrink_edges_to_fit();
        let ids: Vec<VertexId> = self.vertices().collect();
        for id in ids {
            // The id was live a moment ago and nothing removed it since.
            let _ = self.shrink_adjacency_to_fit(id);
        }
    }

    /// True when the graph has no vertices and no edges.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0 && self.edge_count() == 0
    }
}

impl<S> GraphStore for S where S: VertexStore + EdgeStore {}

/// Optional capability: edges into vertices that do not exist yet.
///
/// A frontier edge is directed and carries a caller-chosen
/// [`FrontierToken`] in place of its target. Until resolved it is
/// "half-registered": it exists in the edge store (and counts toward
/// [`EdgeStore::edge_count`]) but appears in no adjacency set, so
/// traversal never sees it. Resolution is always an explicit call that
/// materializes the target through a caller-supplied closure; iteration
/// never resolves anything as a side effect.
pub trait FrontierStore: GraphStore {
    /// Add a directed frontier edge from `source` to the vertex named by
    /// `token`.
    ///
    /// # Errors
    ///
    /// - [`GraphError::VertexNotFound`] if `source` is not live
    /// - [`GraphError::Capacity`] if the store cannot grow
    fn add_frontier_edge(
        &mut self,
        source: VertexId,
        token: FrontierToken,
        weight: Self::Weight,
    ) -> GraphResult<EdgeId>;

    /// Number of live edges with a pending endpoint.
    fn pending_edge_count(&self) -> usize;

    /// The token of a pending edge.
    ///
    /// # Errors
    ///
    /// - [`GraphError::EdgeNotFound`] if no live edge has this id
    /// - [`GraphError::AlreadyResolved`] if the edge has no pending
    ///   endpoint
    fn pending_token(&self, edge: EdgeId) -> GraphResult<FrontierToken>;

    /// Resolve a pending edge: materialize its target from `materialize`,
    /// rewire the edge to the new vertex, and register the edge in both
    /// endpoints' adjacency records.
    ///
    /// Returns the id of the newly materialized vertex. Each resolution
    /// creates a fresh vertex; deduplicating tokens that name the same
    /// external entity is the caller's concern.
    ///
    /// # Errors
    ///
    /// - [`GraphError::EdgeNotFound`] if no live edge has this id
    /// - [`GraphError::AlreadyResolved`] if the edge has no pending
    ///   endpoint
    /// - [`GraphError::Capacity`] if the vertex store cannot grow
    fn resolve_frontier<F>(&mut self, edge: EdgeId, materialize: F) -> GraphResult<VertexId>
    where
        F: FnOnce(FrontierToken) -> Self::Payload;
}
