//! The generic graph facade.
//!
//! This module provides [`Graph`], the primary entry point for building and
//! querying graphs. It owns a storage engine and forwards every capability
//! operation to it; swapping engines is a type-parameter change and no call
//! site moves.

use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use quiver_core::{Adjacency, EdgeId, EdgeKind, FrontierToken, VertexId};
use quiver_store::backends::hash::{Compaction, HashGraph};
use quiver_store::{EdgeRef, FrontierStore, GraphResult, GraphStore, VertexRef};

/// An embedded graph over a swappable storage engine.
///
/// `Graph` is parameterized by the vertex payload type `T`, the edge weight
/// type `U`, and the engine `S`, which defaults to the hash-indexed
/// [`HashGraph`]. The facade holds no state of its own and adds no logic;
/// every operation is forwarded to the engine, so application code depends
/// on one stable type while the backend stays exchangeable.
///
/// # Examples
///
/// ## Building a graph
///
/// ```
/// use quiver::{Graph, GraphResult};
///
/// fn example() -> GraphResult<()> {
///     let mut graph: Graph<&str, i64> = Graph::new();
///
///     let a = graph.add_vertex("a")?;
///     let b = graph.add_vertex("b")?;
///     let c = graph.add_vertex("c")?;
///
///     graph.add_directed_edge(a, b, 10)?;
///     graph.add_directed_edge(b, c, 20)?;
///     graph.add_undirected_edge(a, c, 30)?;
///
///     assert_eq!(graph.vertex_count(), 3);
///     assert_eq!(graph.edge_count(), 3);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
///
/// ## Querying through handles
///
/// ```
/// use quiver::{Graph, GraphResult};
///
/// fn example() -> GraphResult<()> {
///     let mut graph: Graph<&str, i64> = Graph::new();
///     let a = graph.add_vertex("a")?;
///     let b = graph.add_vertex("b")?;
///     graph.add_directed_edge(a, b, 10)?;
///
///     let edge = graph.directed_edge(a, b)?;
///     assert_eq!(*edge, 10); // an edge handle dereferences to its weight
///
///     let (va, vb) = edge.vertices()?;
///     assert!(va.is_connected_by_out_edge(&vb));
///     assert!(!va.is_connected_by_in_edge(&vb));
///     Ok(())
/// }
/// # example().unwrap();
/// ```
///
/// ## Swapping the engine
///
/// ```
/// use quiver::backends::hash::HashGraph;
/// use quiver::Graph;
///
/// // Explicitly the default engine; a future backend slots in the same way.
/// let graph: Graph<u32, f32, HashGraph<u32, f32>> = Graph::new();
/// assert!(graph.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph<T, U, S = HashGraph<T, U>>
where
    S: GraphStore<Payload = T, Weight = U>,
{
    engine: S,
    #[serde(skip)]
    marker: PhantomData<fn() -> (T, U)>,
}

impl<T, U> Graph<T, U, HashGraph<T, U>> {
    /// Create an empty graph on the hash-indexed engine.
    #[must_use]
    pub fn new() -> Self {
        Self::with_engine(HashGraph::new())
    }

    /// Create an empty graph with pre-allocated slot capacity.
    #[must_use]
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self::with_engine(HashGraph::with_capacity(vertices, edges))
    }

    /// Reclaim all tombstoned slots, invalidating outstanding ids.
    ///
    /// See [`HashGraph::compact`] for the invalidation contract.
    pub fn compact(&mut self) -> Compaction {
        self.engine.compact()
    }
}

impl<T, U> Default for Graph<T, U, HashGraph<T, U>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U, S> Graph<T, U, S>
where
    S: GraphStore<Payload = T, Weight = U>,
{
    /// Wrap an existing engine.
    #[must_use]
    pub fn with_engine(engine: S) -> Self {
        Self { engine, marker: PhantomData }
    }

    /// Shared access to the engine.
    #[must_use]
    pub fn engine(&self) -> &S {
        &self.engine
    }

    /// Mutable access to the engine.
    pub fn engine_mut(&mut self) -> &mut S {
        &mut self.engine
    }

    /// Consume the facade and return the engine.
    #[must_use]
    pub fn into_engine(self) -> S {
        self.engine
    }

    // ------------------------------------------------------------------
    // Vertices
    // ------------------------------------------------------------------

    /// Add a vertex owning `payload` and return its identity.
    ///
    /// # Errors
    ///
    /// See [`quiver_store::VertexStore::add_vertex`].
    pub fn add_vertex(&mut self, payload: T) -> GraphResult<VertexId> {
        self.engine.add_vertex(payload)
    }

    /// Remove a vertex, severing all its edges, and return its payload.
    ///
    /// # Errors
    ///
    /// See [`quiver_store::VertexStore::remove_vertex`].
    pub fn remove_vertex(&mut self, vertex: VertexId) -> GraphResult<T> {
        self.engine.remove_vertex(vertex)
    }

    /// A validated handle to one vertex.
    ///
    /// # Errors
    ///
    /// See [`VertexRef::new`].
    pub fn vertex(&self, vertex: VertexId) -> GraphResult<VertexRef<'_, S>> {
        VertexRef::new(&self.engine, vertex)
    }

    /// Whether a live vertex has this id.
    #[must_use]
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.engine.contains_vertex(vertex)
    }

    /// Shared access to a vertex's payload.
    ///
    /// # Errors
    ///
    /// See [`quiver_store::VertexStore::payload`].
    pub fn payload(&self, vertex: VertexId) -> GraphResult<&T> {
        self.engine.payload(vertex)
    }

    /// Mutable access to a vertex's payload.
    ///
    /// # Errors
    ///
    /// See [`quiver_store::VertexStore::payload_mut`].
    pub fn payload_mut(&mut self, vertex: VertexId) -> GraphResult<&mut T> {
        self.engine.payload_mut(vertex)
    }

    /// Number of live vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.engine.vertex_count()
    }

    /// Iterate over all live vertex ids.
    pub fn vertices(&self) -> S::VertexIter<'_> {
        self.engine.vertices()
    }

    /// Pre-allocate room for `additional` vertices.
    ///
    /// # Errors
    ///
    /// See [`quiver_store::VertexStore::reserve_vertices`].
    pub fn reserve_vertices(&mut self, additional: usize) -> GraphResult<()> {
        self.engine.reserve_vertices(additional)
    }

    // ------------------------------------------------------------------
    // Edges
    // ------------------------------------------------------------------

    /// Add a directed edge from `source` to `target`.
    ///
    /// # Errors
    ///
    /// See [`quiver_store::EdgeStore::add_directed_edge`].
    pub fn add_directed_edge(
        &mut self,
        source: VertexId,
        target: VertexId,
        weight: U,
    ) -> GraphResult<EdgeId> {
        self.engine.add_directed_edge(source, target, weight)
    }

    /// Add an undirected edge between `a` and `b`.
    ///
    /// # Errors
    ///
    /// See [`quiver_store::EdgeStore::add_undirected_edge`].
    pub fn add_undirected_edge(&mut self, a: VertexId, b: VertexId, weight: U) -> GraphResult<EdgeId> {
        self.engine.add_undirected_edge(a, b, weight)
    }

    /// A handle to the directed edge from `source` to `target`.
    ///
    /// The handle dereferences to the edge's weight.
    ///
    /// # Errors
    ///
    /// See [`quiver_store::EdgeStore::directed_edge`].
    pub fn directed_edge(&self, source: VertexId, target: VertexId) -> GraphResult<EdgeRef<'_, S>> {
        let id = self.engine.directed_edge(source, target)?;
        EdgeRef::new(&self.engine, id)
    }

    /// A handle to the undirected edge between `a` and `b`.
    ///
    /// # Errors
    ///
    /// See [`quiver_store::EdgeStore::undirected_edge`].
    pub fn undirected_edge(&self, a: VertexId, b: VertexId) -> GraphResult<EdgeRef<'_, S>> {
        let id = self.engine.undirected_edge(a, b)?;
        EdgeRef::new(&self.engine, id)
    }

    /// A validated handle to one edge.
    ///
    /// # Errors
    ///
    /// See [`EdgeRef::new`].
    pub fn edge(&self, edge: EdgeId) -> GraphResult<EdgeRef<'_, S>> {
        EdgeRef::new(&self.engine, edge)
    }

    /// Whether a live edge has this id.
    #[must_use]
    pub fn contains_edge(&self, edge: EdgeId) -> bool {
        self.engine.contains_edge(edge)
    }

    /// Remove the directed edge from `source` to `target` and return its
    /// weight.
    ///
    /// # Errors
    ///
    /// See [`quiver_store::EdgeStore::remove_directed_edge`].
    pub fn remove_directed_edge(&mut self, source: VertexId, target: VertexId) -> GraphResult<U> {
        self.engine.remove_directed_edge(source, target)
    }

    /// Remove the undirected edge between `a` and `b` and return its
    /// weight.
    ///
    /// # Errors
    ///
    /// See [`quiver_store::EdgeStore::remove_undirected_edge`].
    pub fn remove_undirected_edge(&mut self, a: VertexId, b: VertexId) -> GraphResult<U> {
        self.engine.remove_undirected_edge(a, b)
    }

    /// Remove an edge by id and return its weight.
    ///
    /// # Errors
    ///
    /// See [`quiver_store::EdgeStore::remove_edge`].
    pub fn remove_edge(&mut self, edge: EdgeId) -> GraphResult<U> {
        self.engine.remove_edge(edge)
    }

    /// Shared access to an edge's weight.
    ///
    /// # Errors
    ///
    /// See [`quiver_store::EdgeStore::weight`].
    pub fn weight(&self, edge: EdgeId) -> GraphResult<&U> {
        self.engine.weight(edge)
    }

    /// Mutable access to an edge's weight.
    ///
    /// # Errors
    ///
    /// See [`quiver_store::EdgeStore::weight_mut`].
    pub fn weight_mut(&mut self, edge: EdgeId) -> GraphResult<&mut U> {
        self.engine.weight_mut(edge)
    }

    /// Both endpoints of an edge; `(source, target)` for directed edges.
    ///
    /// # Errors
    ///
    /// See [`quiver_store::EdgeStore::endpoints`].
    pub fn endpoints(&self, edge: EdgeId) -> GraphResult<(VertexId, VertexId)> {
        self.engine.endpoints(edge)
    }

    /// Whether an edge is directed or undirected.
    ///
    /// # Errors
    ///
    /// See [`quiver_store::EdgeStore::edge_kind`].
    pub fn edge_kind(&self, edge: EdgeId) -> GraphResult<EdgeKind> {
        self.engine.edge_kind(edge)
    }

    /// Given one endpoint of an edge, return the other.
    ///
    /// # Errors
    ///
    /// See [`quiver_store::EdgeStore::opposite`].
    pub fn opposite(&self, edge: EdgeId, vertex: VertexId) -> GraphResult<VertexId> {
        self.engine.opposite(edge, vertex)
    }

    /// Number of live edges, pending frontier edges included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.engine.edge_count()
    }

    /// Iterate over all live edge ids.
    pub fn edges(&self) -> S::EdgeIter<'_> {
        self.engine.edges()
    }

    /// Pre-allocate room for `additional` edges.
    ///
    /// # Errors
    ///
    /// See [`quiver_store::EdgeStore::reserve_edges`].
    pub fn reserve_edges(&mut self, additional: usize) -> GraphResult<()> {
        self.engine.reserve_edges(additional)
    }

    // ------------------------------------------------------------------
    // Adjacency
    // ------------------------------------------------------------------

    /// Iterate over one vertex's adjacency set of one kind.
    ///
    /// # Errors
    ///
    /// See [`quiver_store::EdgeStore::adjacency`].
    pub fn adjacency(&self, vertex: VertexId, kind: Adjacency) -> GraphResult<S::AdjacencyIter<'_>> {
        self.engine.adjacency(vertex, kind)
    }

    /// Iterate over one adjacency set, resolving edge ids to weights.
    ///
    /// # Errors
    ///
    /// See [`quiver_store::EdgeStore::adjacency_weights`].
    pub fn adjacency_weights(
        &self,
        vertex: VertexId,
        kind: Adjacency,
    ) -> GraphResult<S::WeightIter<'_>> {
        self.engine.adjacency_weights(vertex, kind)
    }

    /// Visit every weight in one adjacency set mutably; the visitor
    /// returns `false` to stop early.
    ///
    /// # Errors
    ///
    /// See [`quiver_store::EdgeStore::for_each_adjacent_weight_mut`].
    pub fn for_each_adjacent_weight_mut<F>(
        &mut self,
        vertex: VertexId,
        kind: Adjacency,
        f: F,
    ) -> GraphResult<()>
    where
        F: FnMut(EdgeId, &mut U) -> bool,
    {
        self.engine.for_each_adjacent_weight_mut(vertex, kind, f)
    }

    /// The edge connecting `vertex` to `neighbor` in the given set, if any.
    ///
    /// # Errors
    ///
    /// See [`quiver_store::EdgeStore::connecting_edge`].
    pub fn connecting_edge(
        &self,
        vertex: VertexId,
        neighbor: VertexId,
        kind: Adjacency,
    ) -> GraphResult<Option<EdgeId>> {
        self.engine.connecting_edge(vertex, neighbor, kind)
    }

    /// Whether `vertex` and `neighbor` are connected in the given set.
    ///
    /// # Errors
    ///
    /// See [`quiver_store::EdgeStore::is_connected`].
    pub fn is_connected(
        &self,
        vertex: VertexId,
        neighbor: VertexId,
        kind: Adjacency,
    ) -> GraphResult<bool> {
        self.engine.is_connected(vertex, neighbor, kind)
    }

    /// Number of edges in one vertex's adjacency set of one kind.
    ///
    /// # Errors
    ///
    /// See [`quiver_store::EdgeStore::degree`].
    pub fn degree(&self, vertex: VertexId, kind: Adjacency) -> GraphResult<usize> {
        self.engine.degree(vertex, kind)
    }

    /// Pre-allocate adjacency room on one vertex.
    ///
    /// # Errors
    ///
    /// See [`quiver_store::EdgeStore::reserve_adjacency`].
    pub fn reserve_adjacency(
        &mut self,
        vertex: VertexId,
        kind: Adjacency,
        additional: usize,
    ) -> GraphResult<()> {
        self.engine.reserve_adjacency(vertex, kind, additional)
    }

    // ------------------------------------------------------------------
    // Whole-graph operations
    // ------------------------------------------------------------------

    /// Release all excess capacity without touching identities.
    pub fn shrink_to_fit(&mut self) {
        self.engine.shrink_to_fit();
    }

    /// True when the graph has no vertices and no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.engine.is_empty()
    }
}

impl<T, U, S> Graph<T, U, S>
where
    S: FrontierStore<Payload = T, Weight = U>,
{
    /// Add a directed frontier edge from `source` to the vertex named by
    /// `token`.
    ///
    /// # Errors
    ///
    /// See [`quiver_store::FrontierStore::add_frontier_edge`].
    pub fn add_frontier_edge(
        &mut self,
        source: VertexId,
        token: FrontierToken,
        weight: U,
    ) -> GraphResult<EdgeId> {
        self.engine.add_frontier_edge(source, token, weight)
    }

    /// Number of live edges with a pending endpoint.
    #[must_use]
    pub fn pending_edge_count(&self) -> usize {
        self.engine.pending_edge_count()
    }

    /// The token of a pending edge.
    ///
    /// # Errors
    ///
    /// See [`quiver_store::FrontierStore::pending_token`].
    pub fn pending_token(&self, edge: EdgeId) -> GraphResult<FrontierToken> {
        self.engine.pending_token(edge)
    }

    /// Resolve a pending edge, materializing its target from
    /// `materialize`.
    ///
    /// # Errors
    ///
    /// See [`quiver_store::FrontierStore::resolve_frontier`].
    pub fn resolve_frontier<F>(&mut self, edge: EdgeId, materialize: F) -> GraphResult<VertexId>
    where
        F: FnOnce(FrontierToken) -> T,
    {
        self.engine.resolve_frontier(edge, materialize)
    }
}
