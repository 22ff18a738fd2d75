//! The hash-indexed storage engine.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use quiver_core::{
    Adjacency, Edge, EdgeId, EdgeKind, Endpoint, FrontierToken, Vertex, VertexId,
};

use crate::engine::{EdgeStore, FrontierStore, GraphError, GraphResult, VertexStore};

use super::iter::{AdjacencyIds, EdgeIds, VertexIds, Weights};

/// Result of a [`HashGraph::compact`] pass.
///
/// Compaction reassigns every surviving id; the maps translate each
/// pre-compaction id to its new value so callers can rewrite any handles
/// they kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compaction {
    /// Old vertex id to new vertex id, one entry per surviving vertex.
    pub vertex_map: HashMap<VertexId, VertexId>,
    /// Old edge id to new edge id, one entry per surviving edge.
    pub edge_map: HashMap<EdgeId, EdgeId>,
    /// Tombstoned vertex slots reclaimed by the pass.
    pub reclaimed_vertex_slots: usize,
    /// Tombstoned edge slots reclaimed by the pass.
    pub reclaimed_edge_slots: usize,
}

/// The hash-indexed graph engine.
///
/// Vertices and edges live in two dense slot vectors; an element's id is
/// the slot index it was created at. Adjacency is expressed purely through
/// ids (each vertex record keeps per-kind edge-id sets plus
/// neighbor-to-edge reverse maps), so the whole structure is serializable
/// and no operation ever follows a stored native reference.
///
/// # Removal and tombstones
///
/// Removing an element tombstones its slot. No other id moves, so handles
/// to the rest of the graph stay valid indefinitely. Tombstoned slots are
/// reclaimed only by the explicit [`HashGraph::compact`] pass, which
/// reassigns ids and reports the translation. Capacity hints
/// (`reserve_*` / `shrink_*`) never touch identities.
///
/// # Example
///
/// ```
/// use quiver_store::backends::hash::HashGraph;
/// use quiver_store::{EdgeStore, GraphResult, VertexStore};
///
/// fn example() -> GraphResult<()> {
///     let mut graph: HashGraph<&str, i64> = HashGraph::new();
///     let a = graph.add_vertex("a")?;
///     let b = graph.add_vertex("b")?;
///
///     graph.add_directed_edge(a, b, 10)?;
///     assert_eq!(graph.weight(graph.directed_edge(a, b)?)?, &10);
///     assert_eq!(graph.remove_directed_edge(a, b)?, 10);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashGraph<T, U> {
    /// Vertex slots; `None` is a tombstone.
    vertices: Vec<Option<Vertex<T>>>,
    /// Edge slots; `None` is a tombstone.
    edges: Vec<Option<Edge<U>>>,
    /// Live (non-tombstoned) vertex count.
    live_vertices: usize,
    /// Live (non-tombstoned) edge count, pending edges included.
    live_edges: usize,
    /// Pending frontier edges, keyed by edge id, valued by source vertex.
    pending: HashMap<EdgeId, VertexId>,
}

impl<T, U> HashGraph<T, U> {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            live_vertices: 0,
            live_edges: 0,
            pending: HashMap::new(),
        }
    }

    /// Create an empty graph with pre-allocated slot capacity.
    #[must_use]
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            edges: Vec::with_capacity(edges),
            live_vertices: 0,
            live_edges: 0,
            pending: HashMap::new(),
        }
    }

    /// Reclaim all tombstoned slots.
    ///
    /// Rebuilds both stores densely, rewriting every adjacency record and
    /// pending-edge entry to the new layout. Every id issued before the
    /// pass is invalidated; the returned [`Compaction`] maps old ids to
    /// new ones.
    pub fn compact(&mut self) -> Compaction {
        let mut vertex_map = HashMap::with_capacity(self.live_vertices);
        let mut next = 0u64;
        for (index, slot) in self.vertices.iter().enumerate() {
            if slot.is_some() {
                vertex_map.insert(VertexId::new(index as u64), VertexId::new(next));
                next += 1;
            }
        }

        let mut edge_map = HashMap::with_capacity(self.live_edges);
        let mut next = 0u64;
        for (index, slot) in self.edges.iter().enumerate() {
            if slot.is_some() {
                edge_map.insert(EdgeId::new(index as u64), EdgeId::new(next));
                next += 1;
            }
        }

        let reclaimed_vertex_slots = self.vertices.len() - self.live_vertices;
        let reclaimed_edge_slots = self.edges.len() - self.live_edges;

        let old_edges = std::mem::take(&mut self.edges);
        let mut new_edges = Vec::with_capacity(self.live_edges);
        for mut record in old_edges.into_iter().flatten() {
            record.remap_endpoints(|v| vertex_map.get(&v).copied().unwrap_or(v));
            new_edges.push(Some(record));
        }
        self.edges = new_edges;

        let old_vertices = std::mem::take(&mut self.vertices);
        let mut new_vertices = Vec::with_capacity(self.live_vertices);
        for record in old_vertices.into_iter().flatten() {
            let mut rebuilt = Vec::new();
            for kind in [Adjacency::Outgoing, Adjacency::Incoming, Adjacency::Undirected] {
                for (&neighbor, &edge) in record.neighbors(kind) {
                    let neighbor = vertex_map.get(&neighbor).copied().unwrap_or(neighbor);
                    let edge = edge_map.get(&edge).copied().unwrap_or(edge);
                    rebuilt.push((kind, neighbor, edge));
                }
            }
            let mut vertex = Vertex::new(record.into_payload());
            for (kind, neighbor, edge) in rebuilt {
                vertex.register(kind, neighbor, edge);
            }
            new_vertices.push(Some(vertex));
        }
        self.vertices = new_vertices;

        let old_pending = std::mem::take(&mut self.pending);
        self.pending = old_pending
            .into_iter()
            .map(|(edge, source)| {
                (
                    edge_map.get(&edge).copied().unwrap_or(edge),
                    vertex_map.get(&source).copied().unwrap_or(source),
                )
            })
            .collect();

        info!(
            reclaimed_vertex_slots,
            reclaimed_edge_slots,
            vertices = self.live_vertices,
            edges = self.live_edges,
            "compacted graph slots"
        );

        Compaction { vertex_map, edge_map, reclaimed_vertex_slots, reclaimed_edge_slots }
    }

    fn vertex(&self, id: VertexId) -> GraphResult<&Vertex<T>> {
        self.vertices
            .get(id.index())
            .and_then(Option::as_ref)
            .ok_or(GraphError::VertexNotFound(id))
    }

    fn vertex_mut(&mut self, id: VertexId) -> GraphResult<&mut Vertex<T>> {
        self.vertices
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .ok_or(GraphError::VertexNotFound(id))
    }

    fn edge(&self, id: EdgeId) -> GraphResult<&Edge<U>> {
        self.edges.get(id.index()).and_then(Option::as_ref).ok_or(GraphError::EdgeNotFound(id))
    }

    fn edge_mut(&mut self, id: EdgeId) -> GraphResult<&mut Edge<U>> {
        self.edges.get_mut(id.index()).and_then(Option::as_mut).ok_or(GraphError::EdgeNotFound(id))
    }
}

impl<T, U> Default for HashGraph<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U> VertexStore for HashGraph<T, U> {
    type Payload = T;

    type VertexIter<'a>
        = VertexIds<'a, T>
    where
        Self: 'a;

    fn add_vertex(&mut self, payload: T) -> GraphResult<VertexId> {
        self.vertices.try_reserve(1)?;
        let id = VertexId::new(self.vertices.len() as u64);
        self.vertices.push(Some(Vertex::new(payload)));
        self.live_vertices += 1;
        Ok(id)
    }

    fn remove_vertex(&mut self, vertex: VertexId) -> GraphResult<T> {
        let mut incident: HashSet<EdgeId> = HashSet::new();
        {
            let record = self.vertex(vertex)?;
            for kind in [Adjacency::Outgoing, Adjacency::Incoming, Adjacency::Undirected] {
                incident.extend(record.edge_ids(kind).iter().copied());
            }
        }
        incident
            .extend(self.pending.iter().filter(|&(_, &src)| src == vertex).map(|(&edge, _)| edge));

        // Sever every incident edge first; this updates the far endpoints'
        // adjacency records through the normal removal path.
        for edge in incident {
            self.remove_edge(edge)?;
        }

        let slot =
            self.vertices.get_mut(vertex.index()).ok_or(GraphError::VertexNotFound(vertex))?;
        let record = slot.take().ok_or(GraphError::VertexNotFound(vertex))?;
        self.live_vertices -= 1;
        Ok(record.into_payload())
    }

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.vertices.get(vertex.index()).is_some_and(Option::is_some)
    }

    fn payload(&self, vertex: VertexId) -> GraphResult<&T> {
        Ok(self.vertex(vertex)?.payload())
    }

    fn payload_mut(&mut self, vertex: VertexId) -> GraphResult<&mut T> {
        Ok(self.vertex_mut(vertex)?.payload_mut())
    }

    fn vertex_count(&self) -> usize {
        self.live_vertices
    }

    fn vertices(&self) -> Self::VertexIter<'_> {
        VertexIds { inner: self.vertices.iter().enumerate() }
    }

    fn reserve_vertices(&mut self, additional: usize) -> GraphResult<()> {
        self.vertices.try_reserve(additional)?;
        Ok(())
    }

    fn shrink_vertices_to_fit(&mut self) {
        self.vertices.shrink_to_fit();
    }
}

impl<T, U> EdgeStore for HashGraph<T, U> {
    type Weight = U;

    type EdgeIter<'a>
        = EdgeIds<'a, U>
    where
        Self: 'a;

    type AdjacencyIter<'a>
        = AdjacencyIds<'a>
    where
        Self: 'a;

    type WeightIter<'a>
        = Weights<'a, U>
    where
        Self: 'a,
        U: 'a;

    fn add_directed_edge(
        &mut self,
        source: VertexId,
        target: VertexId,
        weight: U,
    ) -> GraphResult<EdgeId> {
        self.vertex(target)?;
        if self.vertex(source)?.connecting_edge(Adjacency::Outgoing, target).is_some() {
            return Err(GraphError::EdgeExists { source, target, kind: EdgeKind::Directed });
        }

        self.edges.try_reserve(1)?;
        let id = EdgeId::new(self.edges.len() as u64);
        self.edges.push(Some(Edge::directed(source, target, weight)));
        self.vertex_mut(source)?.register(Adjacency::Outgoing, target, id);
        self.vertex_mut(target)?.register(Adjacency::Incoming, source, id);
        self.live_edges += 1;
        Ok(id)
    }

    fn add_undirected_edge(&mut self, a: VertexId, b: VertexId, weight: U) -> GraphResult<EdgeId> {
        self.vertex(b)?;
        if self.vertex(a)?.connecting_edge(Adjacency::Undirected, b).is_some() {
            return Err(GraphError::EdgeExists { source: a, target: b, kind: EdgeKind::Undirected });
        }

        self.edges.try_reserve(1)?;
        let id = EdgeId::new(self.edges.len() as u64);
        self.edges.push(Some(Edge::undirected(a, b, weight)));
        self.vertex_mut(a)?.register(Adjacency::Undirected, b, id);
        self.vertex_mut(b)?.register(Adjacency::Undirected, a, id);
        self.live_edges += 1;
        Ok(id)
    }

    fn remove_edge(&mut self, edge: EdgeId) -> GraphResult<U> {
        let (kind, source, target) = {
            let record = self.edge(edge)?;
            (record.kind(), record.source(), record.target())
        };

        match (source, target) {
            (Endpoint::Resolved(a), Endpoint::Resolved(b)) => match kind {
                EdgeKind::Directed => {
                    self.vertex_mut(a)?.unregister(Adjacency::Outgoing, b, edge);
                    self.vertex_mut(b)?.unregister(Adjacency::Incoming, a, edge);
                }
                EdgeKind::Undirected => {
                    self.vertex_mut(a)?.unregister(Adjacency::Undirected, b, edge);
                    self.vertex_mut(b)?.unregister(Adjacency::Undirected, a, edge);
                }
            },
            // Half-registered frontier edge: nothing to unregister, only
            // the pending entry to clear.
            _ => {
                self.pending.remove(&edge);
            }
        }

        let slot = self.edges.get_mut(edge.index()).ok_or(GraphError::EdgeNotFound(edge))?;
        let record = slot.take().ok_or(GraphError::EdgeNotFound(edge))?;
        self.live_edges -= 1;
        Ok(record.into_weight())
    }

    fn contains_edge(&self, edge: EdgeId) -> bool {
        self.edges.get(edge.index()).is_some_and(Option::is_some)
    }

    fn weight(&self, edge: EdgeId) -> GraphResult<&U> {
        Ok(self.edge(edge)?.weight())
    }

    fn weight_mut(&mut self, edge: EdgeId) -> GraphResult<&mut U> {
        Ok(self.edge_mut(edge)?.weight_mut())
    }

    fn endpoints(&self, edge: EdgeId) -> GraphResult<(VertexId, VertexId)> {
        self.edge(edge)?.resolved_endpoints().ok_or(GraphError::Unresolved(edge))
    }

    fn edge_kind(&self, edge: EdgeId) -> GraphResult<EdgeKind> {
        Ok(self.edge(edge)?.kind())
    }

    fn opposite(&self, edge: EdgeId, vertex: VertexId) -> GraphResult<VertexId> {
        let record = self.edge(edge)?;
        let (source, target) = (record.source(), record.target());
        if source.vertex() == Some(vertex) {
            target.vertex().ok_or(GraphError::Unresolved(edge))
        } else if target.vertex() == Some(vertex) {
            source.vertex().ok_or(GraphError::Unresolved(edge))
        } else {
            Err(GraphError::NotAnEndpoint { edge, vertex })
        }
    }

    fn edge_count(&self) -> usize {
        self.live_edges
    }

    fn edges(&self) -> Self::EdgeIter<'_> {
        EdgeIds { inner: self.edges.iter().enumerate() }
    }

    fn adjacency(&self, vertex: VertexId, kind: Adjacency) -> GraphResult<Self::AdjacencyIter<'_>> {
        Ok(AdjacencyIds { inner: self.vertex(vertex)?.edge_ids(kind).iter() })
    }

    fn adjacency_weights(
        &self,
        vertex: VertexId,
        kind: Adjacency,
    ) -> GraphResult<Self::WeightIter<'_>> {
        let ids = self.vertex(vertex)?.edge_ids(kind).iter();
        Ok(Weights { ids, edges: &self.edges })
    }

    fn for_each_adjacent_weight_mut<F>(
        &mut self,
        vertex: VertexId,
        kind: Adjacency,
        mut f: F,
    ) -> GraphResult<()>
    where
        F: FnMut(EdgeId, &mut U) -> bool,
    {
        let ids: Vec<EdgeId> = self.vertex(vertex)?.edge_ids(kind).iter().copied().collect();
        for id in ids {
            if let Some(Some(record)) = self.edges.get_mut(id.index()) {
                if !f(id, record.weight_mut()) {
                    break;
                }
            }
        }
        Ok(())
    }

    fn connecting_edge(
        &self,
        vertex: VertexId,
        neighbor: VertexId,
        kind: Adjacency,
    ) -> GraphResult<Option<EdgeId>> {
        Ok(self.vertex(vertex)?.connecting_edge(kind, neighbor))
    }

    fn degree(&self, vertex: VertexId, kind: Adjacency) -> GraphResult<usize> {
        Ok(self.vertex(vertex)?.degree(kind))
    }

    fn has_adjacent_edge(
        &self,
        vertex: VertexId,
        kind: Adjacency,
        edge: EdgeId,
    ) -> GraphResult<bool> {
        Ok(self.vertex(vertex)?.has_edge(kind, edge))
    }

    fn reserve_edges(&mut self, additional: usize) -> GraphResult<()> {
        self.edges.try_reserve(additional)?;
        Ok(())
    }

    fn shrink_edges_to_fit(&mut self) {
        self.edges.shrink_to_fit();
    }

    fn reserve_adjacency(
        &mut self,
        vertex: VertexId,
        kind: Adjacency,
        additional: usize,
    ) -> GraphResult<()> {
        self.vertex_mut(vertex)?.reserve(kind, additional)?;
        Ok(())
    }

    fn shrink_adjacency_to_fit(&mut self, vertex: VertexId) -> GraphResult<()> {
        self.vertex_mut(vertex)?.shrink_to_fit();
        Ok(())
    }
}

impl<T, U> FrontierStore for HashGraph<T, U> {
    fn add_frontier_edge(
        &mut self,
        source: VertexId,
        token: FrontierToken,
        weight: U,
    ) -> GraphResult<EdgeId> {
        self.vertex(source)?;
        self.edges.try_reserve(1)?;
        self.pending.try_reserve(1)?;

        let id = EdgeId::new(self.edges.len() as u64);
        self.edges.push(Some(Edge::frontier(source, token, weight)));
        self.pending.insert(id, source);
        self.live_edges += 1;
        debug!(edge = %id, source = %source, token = %token, "added frontier edge");
        Ok(id)
    }

    fn pending_edge_count(&self) -> usize {
        self.pending.len()
    }

    fn pending_token(&self, edge: EdgeId) -> GraphResult<FrontierToken> {
        self.edge(edge)?.pending_token().ok_or(GraphError::AlreadyResolved(edge))
    }

    fn resolve_frontier<F>(&mut self, edge: EdgeId, materialize: F) -> GraphResult<VertexId>
    where
        F: FnOnce(FrontierToken) -> T,
    {
        let (source, token) = {
            let record = self.edge(edge)?;
            let token = record.pending_token().ok_or(GraphError::AlreadyResolved(edge))?;
            let source = record.source().vertex().ok_or(GraphError::Unresolved(edge))?;
            (source, token)
        };

        let target = self.add_vertex(materialize(token))?;
        self.edge_mut(edge)?.resolve_target(target);
        self.vertex_mut(source)?.register(Adjacency::Outgoing, target, edge);
        self.vertex_mut(target)?.register(Adjacency::Incoming, source, edge);
        self.pending.remove(&edge);
        debug!(edge = %edge, source = %source, target = %target, "resolved frontier edge");
        Ok(target)
    }
}
